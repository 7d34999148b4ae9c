//! Default values for option fields.
//!
//! These functions are used by serde for default deserialization and by
//! `educe` for `Options::default()`, so a missing key and a missing file
//! resolve to the same record.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// Option Defaults
// ============================================================================

/// Taxonomy used to derive `articleSection`.
pub fn custom_taxonomy_section() -> String {
    "category".into()
}
