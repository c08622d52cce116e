//! Table markup WASM API
//!
//! This module provides the JavaScript-facing API.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serialization and error conversion
//! - `types`: result shapes returned to JavaScript
//! - `render`: rendering entry points and the `Table` class

pub mod helpers;
pub mod types;
pub mod render;

pub use render::{describe_table, mount_table, render_table_js, render_table_json, render_table_page, WasmTable};
pub use types::TableSummary;
