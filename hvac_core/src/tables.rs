//! # Rates Cache
//!
//! Memoized accessor over the design resolver: one validated design
//! configuration held for the lifetime of the cache instance, loaded on
//! first use. Only an explicit `force_reload` triggers re-parsing; there is
//! no file-change detection.
//!
//! Room calculators go through [`RatesCache::get_rates`] on every compute;
//! the discovery helper [`RatesCache::list_available_rooms`] exists for
//! tooling and is not on the hot path.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;
use tracing::debug;

use crate::design::{load_design, resolve_room_activity, ResolvedRates};
use crate::errors::HvacResult;
use crate::store::{Document, DocumentStore};

/// Process-lifetime memoization of the validated HVAC design config.
pub struct RatesCache {
    store: Arc<DocumentStore>,
    config: RwLock<Option<Arc<Document>>>,
}

impl RatesCache {
    /// Cache backed by an injected document store.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        RatesCache {
            store,
            config: RwLock::new(None),
        }
    }

    /// The underlying document store.
    pub fn store(&self) -> &Arc<DocumentStore> {
        &self.store
    }

    /// Return the memoized design config, loading and validating it on first
    /// use or when forced.
    fn config(&self, force_reload: bool) -> HvacResult<Arc<Document>> {
        if !force_reload {
            let cached = self.config.read().expect("rates config lock poisoned");
            if let Some(cfg) = cached.as_ref() {
                return Ok(Arc::clone(cfg));
            }
        }

        let cfg = load_design(&self.store, force_reload)?;
        let mut cached = self.config.write().expect("rates config lock poisoned");
        *cached = Some(Arc::clone(&cfg));
        debug!(force_reload, "design config memoized");
        Ok(cfg)
    }

    /// Resolved sensible/latent/ventilation rates for a room type and
    /// activity (first-declared activity when `None`).
    pub fn get_rates(&self, room_type: &str, activity: Option<&str>) -> HvacResult<ResolvedRates> {
        let cfg = self.config(false)?;
        resolve_room_activity(&cfg, room_type, activity)
    }

    /// Discovery helper: room type -> declared activity keys.
    pub fn list_available_rooms(&self, force_reload: bool) -> HvacResult<BTreeMap<String, Vec<String>>> {
        let cfg = self.config(force_reload)?;
        let mut summary = BTreeMap::new();
        if let Some(rooms) = cfg.get("rooms").and_then(Value::as_object) {
            for (room_id, room_cfg) in rooms {
                let activities = room_cfg
                    .get("activity_map")
                    .and_then(Value::as_object)
                    .map(|map| map.keys().cloned().collect())
                    .unwrap_or_default();
                summary.insert(room_id.clone(), activities);
            }
        }
        Ok(summary)
    }
}
