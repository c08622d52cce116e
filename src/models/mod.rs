//! Data models for table rendering
//!
//! This module contains the render configuration and the scalar values that
//! flow from row mappings into table cells.

pub mod config;
pub mod value;
pub mod serde_helpers;

// Re-export commonly used types
pub use config::*;
pub use value::*;
