//! Standalone page output
//!
//! Wraps rendered table markup in a minimal HTML document using a Mustache
//! template. The title and stylesheet are escaped by Mustache; the table
//! markup is inserted as-is.

use crate::error::TableError;
use serde::Serialize;

const PAGE_TEMPLATE: &str = include_str!("templates/page.html.mustache");

/// Context data for the page template
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageContext {
    /// Document title (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Stylesheet href (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<String>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn stylesheet<S: Into<String>>(mut self, href: S) -> Self {
        self.stylesheet = Some(href.into());
        self
    }
}

#[derive(Serialize)]
struct PageData<'a> {
    has_title: bool,
    title: &'a str,
    has_stylesheet: bool,
    stylesheet: &'a str,
    table: &'a str,
}

/// Render a full HTML page around `table_html`
pub fn render_page(table_html: &str, context: &PageContext) -> Result<String, TableError> {
    let template = mustache::compile_str(PAGE_TEMPLATE)?;
    let data = PageData {
        has_title: context.title.is_some(),
        title: context.title.as_deref().unwrap_or_default(),
        has_stylesheet: context.stylesheet.is_some(),
        stylesheet: context.stylesheet.as_deref().unwrap_or_default(),
        table: table_html,
    };
    Ok(template.render_to_string(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_contains_table_verbatim() {
        let page = render_page("<table><thead></thead></table>", &PageContext::new()).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<table><thead></thead></table>"));
        assert!(!page.contains("<title>"));
        assert!(!page.contains("stylesheet"));
    }

    #[test]
    fn test_page_title_is_escaped() {
        let context = PageContext::new().title(Some("People & <Places>".to_string()));
        let page = render_page("<table></table>", &context).unwrap();
        assert!(page.contains("<title>People &amp; &lt;Places&gt;</title>"));
    }

    #[test]
    fn test_page_stylesheet_link() {
        let context = PageContext::new().stylesheet("table.css");
        let page = render_page("<table></table>", &context).unwrap();
        assert!(page.contains(r#"<link rel="stylesheet" href="table.css">"#));
    }
}
