//! HTML Table Markup WASM Module
//!
//! Renders row data, header labels, a column alias map and per-element
//! attribute groups into a single `<table>` string. Usable natively through
//! `TableRenderer` or from JavaScript through the `api` module.

pub mod error;
pub mod models;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use error::TableError;
pub use models::*;
pub use renderers::{render_page, render_table, PageContext, TableRenderer};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            wasm_warn!("console logger already initialized");
        }
    }

    log::info!("Table markup WASM module initialized");
}
