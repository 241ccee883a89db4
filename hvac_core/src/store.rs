//! # Document Store
//!
//! Loads and caches structured configuration documents by resolved path.
//!
//! The store is an explicitly constructed service instance: search roots and
//! the parser collaborator are injected at construction, and the cache has an
//! explicit lifecycle (construct, populate, clear) instead of living in
//! ambient global state. Cache population is guarded by an `RwLock` so
//! concurrent readers never observe a torn `clear()` or duplicate loads.
//!
//! Documents are YAML on disk but the in-memory representation is a
//! `serde_json` mapping, so everything downstream stays JSON-first.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hvac_core::store::DocumentStore;
//!
//! let store = DocumentStore::new();
//! let design = store.get("hvac_design.yaml", false)?;
//! println!("top-level sections: {}", design.len());
//! # Ok::<(), hvac_core::HvacError>(())
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde_json::Value;
use tracing::{debug, info};

use crate::errors::{HvacError, HvacResult};

/// One parsed configuration document: an immutable top-level mapping.
pub type Document = serde_json::Map<String, Value>;

/// Environment variable overriding the base directory for search roots.
pub const DATA_DIR_ENV: &str = "HVAC_DATA_DIR";

/// Parsing collaborator: turns document text into a structured value.
///
/// Kept behind a trait so an unavailable parser is an explicit, injectable
/// failure (`MissingDependency`) rather than an implicit crash, and so tests
/// can count or fail parse calls.
pub trait DocumentParser: Send + Sync {
    fn parse(&self, path: &Path, text: &str) -> HvacResult<Value>;
}

/// Default parser: YAML via `serde_yml`, deserialized straight into a
/// `serde_json::Value`.
pub struct YamlParser;

impl DocumentParser for YamlParser {
    fn parse(&self, path: &Path, text: &str) -> HvacResult<Value> {
        serde_yml::from_str::<Value>(text)
            .map_err(|e| HvacError::parse(path.display().to_string(), e.to_string()))
    }
}

/// Compute the default search roots, in priority order.
///
/// The base directory comes from `HVAC_DATA_DIR` when set, otherwise the
/// current working directory. First existing match wins during resolution.
pub fn default_search_roots() -> Vec<PathBuf> {
    let base = std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    vec![
        base.join("data"),
        base.join("data").join("specs"),
        base.join("data").join("schemas"),
        base.join("configs"),
    ]
}

/// Caching document loader keyed by resolved absolute path.
///
/// Invariant: at most one cached instance per resolved path; `get` without
/// `force_reload` returns the identical `Arc` and does not re-invoke the
/// parser.
pub struct DocumentStore {
    roots: Vec<PathBuf>,
    parser: Box<dyn DocumentParser>,
    cache: RwLock<HashMap<PathBuf, Arc<Document>>>,
}

impl DocumentStore {
    /// Store with default search roots and the YAML parser.
    pub fn new() -> Self {
        Self::with_parser(default_search_roots(), Box::new(YamlParser))
    }

    /// Store with explicit search roots and the YAML parser.
    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self::with_parser(roots, Box::new(YamlParser))
    }

    /// Store with explicit search roots and an injected parser.
    pub fn with_parser(roots: Vec<PathBuf>, parser: Box<dyn DocumentParser>) -> Self {
        DocumentStore {
            roots,
            parser,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve a document name or path to an existing absolute path.
    ///
    /// Absolute arguments are verified to exist; relative ones probe each
    /// search root in priority order and the first existing match wins.
    pub fn resolve(&self, name_or_path: &str) -> HvacResult<PathBuf> {
        let candidate = PathBuf::from(name_or_path);
        if candidate.is_absolute() {
            if !candidate.exists() {
                return Err(HvacError::not_found(
                    name_or_path,
                    candidate.display().to_string(),
                ));
            }
            return canonicalize(&candidate);
        }

        for root in &self.roots {
            let resolved = root.join(&candidate);
            if resolved.exists() {
                return canonicalize(&resolved);
            }
        }

        let searched = self
            .roots
            .iter()
            .map(|r| r.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(HvacError::not_found(name_or_path, searched))
    }

    /// Retrieve (and cache) a document as a top-level mapping.
    ///
    /// Returns the cached instance unless `force_reload` is set or no entry
    /// exists; in that case the file is read, parsed, validated to be a
    /// mapping, and stored keyed by its resolved path.
    pub fn get(&self, name_or_path: &str, force_reload: bool) -> HvacResult<Arc<Document>> {
        let path = self.resolve(name_or_path)?;

        if !force_reload {
            let cache = self.cache.read().expect("document cache lock poisoned");
            if let Some(doc) = cache.get(&path) {
                debug!(path = %path.display(), "document cache hit");
                return Ok(Arc::clone(doc));
            }
        }

        let text = fs::read_to_string(&path).map_err(|e| {
            HvacError::file_error("read", path.display().to_string(), e.to_string())
        })?;
        let value = self.parser.parse(&path, &text)?;
        let mapping = match value {
            Value::Object(map) => map,
            other => {
                return Err(HvacError::parse(
                    path.display().to_string(),
                    format!("did not parse into a mapping (got {})", value_kind(&other)),
                ))
            }
        };

        let doc = Arc::new(mapping);
        let mut cache = self.cache.write().expect("document cache lock poisoned");
        cache.insert(path.clone(), Arc::clone(&doc));
        info!(path = %path.display(), keys = doc.len(), force_reload, "document loaded");
        Ok(doc)
    }

    /// Empty the cache, returning the number of purged entries.
    ///
    /// Used for test isolation and live reload.
    pub fn clear(&self) -> usize {
        let mut cache = self.cache.write().expect("document cache lock poisoned");
        let purged = cache.len();
        cache.clear();
        debug!(purged, "document cache cleared");
        purged
    }

    /// Diagnostic snapshot: cached path -> top-level key count.
    pub fn list(&self) -> BTreeMap<String, usize> {
        let cache = self.cache.read().expect("document cache lock poisoned");
        cache
            .iter()
            .map(|(path, doc)| (path.display().to_string(), doc.len()))
            .collect()
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn canonicalize(path: &Path) -> HvacResult<PathBuf> {
    fs::canonicalize(path)
        .map_err(|e| HvacError::file_error("canonicalize", path.display().to_string(), e.to_string()))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
