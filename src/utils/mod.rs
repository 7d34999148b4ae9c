//! Utility modules shared by the metadata engine and the renderers.

pub mod date;
pub mod sanitize;
