//! # Room Calculator Registry
//!
//! Maps room-type identifiers to calculator variants and dispatches compute
//! requests: fresh defaults, caller overrides applied through the typed
//! whitelist merge, then the variant's computation.
//!
//! The registry is built once at startup with an injected rates cache; it
//! holds no other state.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use hvac_core::registry::Registry;
//! use hvac_core::rooms::SpecOverrides;
//! use hvac_core::store::DocumentStore;
//! use hvac_core::tables::RatesCache;
//!
//! let rates = Arc::new(RatesCache::new(Arc::new(DocumentStore::new())));
//! let registry = Registry::with_defaults(rates);
//! let overrides = SpecOverrides { occupants: Some(6), ..Default::default() };
//! let report = registry.compute("dorm_communal_8", &overrides)?;
//! println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! # Ok::<(), hvac_core::HvacError>(())
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::errors::{HvacError, HvacResult};
use crate::rooms::{
    child_dorm_8::ChildDorm8, dorm_communal_8::DormCommunal8, hygiene_block::HygieneBlock,
    intimacy_pod::IntimacyPod, warehouse::Warehouse, RoomCalculator, RoomReport, RoomSpec,
    SpecOverrides,
};
use crate::tables::RatesCache;

/// Central registry of all room calculators.
pub struct Registry {
    calculators: BTreeMap<&'static str, Box<dyn RoomCalculator>>,
    rates: Arc<RatesCache>,
}

impl Registry {
    /// Empty registry backed by the given rates cache.
    pub fn new(rates: Arc<RatesCache>) -> Self {
        Registry {
            calculators: BTreeMap::new(),
            rates,
        }
    }

    /// Registry with every built-in room archetype registered.
    pub fn with_defaults(rates: Arc<RatesCache>) -> Self {
        let mut registry = Self::new(rates);
        registry.register(Box::new(ChildDorm8));
        registry.register(Box::new(DormCommunal8));
        registry.register(Box::new(HygieneBlock));
        registry.register(Box::new(IntimacyPod));
        registry.register(Box::new(Warehouse));
        registry
    }

    /// Register a calculator under its type id. Re-registering an id
    /// replaces the previous calculator.
    pub fn register(&mut self, calculator: Box<dyn RoomCalculator>) {
        self.calculators.insert(calculator.type_id(), calculator);
    }

    /// All registered type ids, sorted.
    pub fn known_types(&self) -> Vec<&'static str> {
        self.calculators.keys().copied().collect()
    }

    /// The rates cache this registry dispatches with.
    pub fn rates(&self) -> &Arc<RatesCache> {
        &self.rates
    }

    /// Build the effective spec for a type id: fresh defaults with caller
    /// overrides applied.
    pub fn spec_for(&self, type_id: &str, overrides: &SpecOverrides) -> HvacResult<RoomSpec> {
        let calculator = self.lookup(type_id)?;
        let mut spec = calculator.defaults();
        overrides.apply_to(&mut spec);
        Ok(spec)
    }

    /// Dispatch a compute request and return the variant's report
    /// unmodified.
    pub fn compute(&self, type_id: &str, overrides: &SpecOverrides) -> HvacResult<RoomReport> {
        let calculator = self.lookup(type_id)?;
        let mut spec = calculator.defaults();
        overrides.apply_to(&mut spec);
        debug!(type_id, name = %spec.name, occupants = spec.occupants, "dispatching room compute");
        calculator.compute(&spec, &self.rates)
    }

    fn lookup(&self, type_id: &str) -> HvacResult<&dyn RoomCalculator> {
        self.calculators
            .get(type_id)
            .map(Box::as_ref)
            .ok_or_else(|| HvacError::unknown_room_type(type_id, self.calculators.keys()))
    }
}
