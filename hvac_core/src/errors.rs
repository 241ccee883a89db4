//! # Error Types
//!
//! Structured error types for hvac_core. Every failure mode in the engine is
//! one of these variants; all of them fail fast with no retry and no partial
//! results. The CLI is responsible for presentation and exit codes.
//!
//! ## Example
//!
//! ```rust
//! use hvac_core::errors::{HvacError, HvacResult};
//!
//! fn require_section(present: bool) -> HvacResult<()> {
//!     if !present {
//!         return Err(HvacError::schema("hvac_design.yaml", "missing required 'rooms' section"));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for hvac_core operations
pub type HvacResult<T> = Result<T, HvacError>;

/// Structured error type for the environmental calculation engine.
///
/// Each variant carries enough context to understand and fix the issue
/// without chasing the call site.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum HvacError {
    /// A named document could not be located in any search root
    #[error("Document not found: '{name}'. Searched: {searched}")]
    DocumentNotFound { name: String, searched: String },

    /// Document content does not parse to a top-level mapping
    #[error("Parse error in '{path}': {reason}")]
    ParseError { path: String, reason: String },

    /// A required section is missing, or an unrecognized key appears in a
    /// validated section
    #[error("Schema error in '{context}': {reason}")]
    SchemaError { context: String, reason: String },

    /// Dispatch or resolution referenced a room-type id that does not exist
    #[error("Unknown room type '{type_id}'. Known types: {known}")]
    UnknownRoomType { type_id: String, known: String },

    /// No activity key can be determined for a room (neither room-level nor
    /// global defaults exist)
    #[error("No activity levels defined for room '{room_type}'")]
    NoActivityLevels { room_type: String },

    /// A required collaborator (e.g. the document parser) is unavailable
    #[error("Missing dependency: {dependency} - {reason}")]
    MissingDependency { dependency: String, reason: String },

    /// Byte-level file read failure
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl HvacError {
    /// Create a DocumentNotFound error
    pub fn not_found(name: impl Into<String>, searched: impl Into<String>) -> Self {
        HvacError::DocumentNotFound {
            name: name.into(),
            searched: searched.into(),
        }
    }

    /// Create a ParseError
    pub fn parse(path: impl Into<String>, reason: impl Into<String>) -> Self {
        HvacError::ParseError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SchemaError
    pub fn schema(context: impl Into<String>, reason: impl Into<String>) -> Self {
        HvacError::SchemaError {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownRoomType error from the id and the full list of
    /// known ids
    pub fn unknown_room_type<I, S>(type_id: impl Into<String>, known: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ids: Vec<String> = known.into_iter().map(|s| s.as_ref().to_string()).collect();
        ids.sort();
        HvacError::UnknownRoomType {
            type_id: type_id.into(),
            known: ids.join(", "),
        }
    }

    /// Create a NoActivityLevels error
    pub fn no_activity_levels(room_type: impl Into<String>) -> Self {
        HvacError::NoActivityLevels {
            room_type: room_type.into(),
        }
    }

    /// Create a MissingDependency error
    pub fn missing_dependency(dependency: impl Into<String>, reason: impl Into<String>) -> Self {
        HvacError::MissingDependency {
            dependency: dependency.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        HvacError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            HvacError::DocumentNotFound { .. } => "DOCUMENT_NOT_FOUND",
            HvacError::ParseError { .. } => "PARSE_ERROR",
            HvacError::SchemaError { .. } => "SCHEMA_ERROR",
            HvacError::UnknownRoomType { .. } => "UNKNOWN_ROOM_TYPE",
            HvacError::NoActivityLevels { .. } => "NO_ACTIVITY_LEVELS",
            HvacError::MissingDependency { .. } => "MISSING_DEPENDENCY",
            HvacError::FileError { .. } => "FILE_ERROR",
        }
    }
}
