//! Error types for catalog lookups and theme configuration.

use thiserror::Error;

/// Primary error type for glyphset operations.
#[derive(Debug, Error)]
pub enum GlyphError {
    /// No icon is registered under the requested identifier.
    #[error("unknown icon '{name}'")]
    UnknownIcon {
        /// Identifier supplied by the caller.
        name: String,
    },
    /// Two catalog entries share an identifier.
    #[error("duplicate icon identifier '{name}'")]
    DuplicateIcon {
        /// Identifier registered more than once.
        name: &'static str,
    },
    /// A catalog entry carries no shape data.
    #[error("icon '{name}' has no shape nodes")]
    EmptyIcon {
        /// Identifier of the empty entry.
        name: &'static str,
    },
    /// A catalog slot holds a definition for a different icon.
    #[error("catalog slot {index} holds '{name}'")]
    CatalogOrder {
        /// Slot position in the catalog table.
        index: usize,
        /// Identifier found in that slot.
        name: &'static str,
    },
    /// Theme document contained a field that is not recognised.
    #[error("unknown theme field '{field}'")]
    UnknownThemeField {
        /// Name of the unexpected field.
        field: String,
    },
    /// Theme field contained an invalid value.
    #[error("invalid theme field '{field}': {reason}")]
    InvalidThemeField {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Theme document could not be parsed.
    #[error("malformed theme document")]
    ThemeDocument {
        /// Source parse error.
        source: serde_json::Error,
    },
}

/// Convenience alias for glyphset results.
pub type GlyphResult<T> = Result<T, GlyphError>;
