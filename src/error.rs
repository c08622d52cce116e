//! Error types for config loading and page output
//!
//! Rendering a table never fails; these cover the edges around it (reading
//! option documents, filling the page template, reaching the DOM).

use thiserror::Error;

/// Top-level error type
#[derive(Debug, Error)]
pub enum TableError {
    /// Options document is not valid JSON for a RenderConfig
    #[error("Invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),

    /// Options document is not valid YAML for a RenderConfig
    #[error("Invalid YAML options: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    /// File extension is not one of json, yaml, yml
    #[error("Unsupported options format: {0}")]
    UnsupportedFormat(String),

    #[error("Page template error: {0}")]
    Template(#[from] mustache::Error),

    /// Host page is missing the window, document or target element
    #[error("DOM error: {0}")]
    Dom(String),
}
