//! Markup renderers
//!
//! This module turns render configurations into output markup.

pub mod html;

// Re-export commonly used types
pub use html::{render_page, render_table, PageContext, TableRenderer};
