//! # hvac_core - Habitat Environmental Calculation Engine
//!
//! `hvac_core` computes per-room environmental quantities (ventilation,
//! exhaust, supply airflow, sensible/latent loads) for habitat modules,
//! driven by hierarchical YAML design documents rather than hard-coded
//! values.
//!
//! ## Design Philosophy
//!
//! - **Config-driven**: all rates come from layered design documents; the
//!   resolver merges default/room/activity override layers key-by-key
//! - **JSON-First**: documents and reports are `serde_json` values, all
//!   public types implement Serialize/Deserialize
//! - **Explicit services**: the document store and rates cache are
//!   constructed and injected, never ambient globals
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
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
//!
//! let overrides = SpecOverrides { occupants: Some(6), ..Default::default() };
//! let report = registry.compute("dorm_communal_8", &overrides)?;
//! println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! # Ok::<(), hvac_core::HvacError>(())
//! ```
//!
//! ## Modules
//!
//! - [`store`] - cached document loading keyed by resolved path
//! - [`design`] - design-document schema validation and rate resolution
//! - [`tables`] - memoized rates accessor and room discovery
//! - [`formulas`] - pure airflow and heat-load arithmetic
//! - [`rooms`] - room spec/report model and calculator variants
//! - [`registry`] - type-id dispatch with typed overrides
//! - [`units`] - type-safe SI unit wrappers
//! - [`safety`] - explicit design margin multipliers
//! - [`catalog`] - equipment catalog structural validation
//! - [`errors`] - structured error types

pub mod catalog;
pub mod design;
pub mod errors;
pub mod formulas;
pub mod registry;
pub mod rooms;
pub mod safety;
pub mod store;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use design::ResolvedRates;
pub use errors::{HvacError, HvacResult};
pub use registry::Registry;
pub use rooms::{RoomReport, RoomSpec, SpecOverrides};
pub use store::DocumentStore;
pub use tables::RatesCache;
