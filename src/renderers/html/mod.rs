//! HTML table rendering
//!
//! `TableRenderer` turns a `RenderConfig` into `<table>` markup in a single
//! pass: opening tag, `<thead>`, `<tbody>`, closing tag. Missing attribute
//! groups, aliases and row keys degrade to absent attributes or the
//! missing-value placeholder; nothing here returns an error.
//!
//! Attribute lookup keys (1-based):
//! - `headerRow{n}` for header `<tr>`, `headerRow{n}th{m}` for `<th>`
//! - `bodyRow{n}` for body `<tr>`, then the config's body-row fallback group
//! - `bodyRow{n}td{m}` for `<td>`
//! - the element name itself as the last resort

pub mod attributes;
pub mod escape;
pub mod page;

pub use attributes::{format_attributes, open_tag, resolve_group};
pub use escape::html_escape;
pub use page::{render_page, PageContext};

use crate::models::{Column, RenderConfig};
use escape::apply_policy;

/// Renders one `<table>` from a borrowed config
pub struct TableRenderer<'a> {
    config: &'a RenderConfig,
    columns: Vec<Column>,
}

impl<'a> TableRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            columns: config.resolved_columns(),
        }
    }

    /// Columns the body will read, in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Full table markup
    pub fn render(&self) -> String {
        log::debug!(
            "Rendering table: {} header rows, {} body rows, {} columns",
            self.config.header_matrix.len(),
            self.config.rows.len(),
            self.columns.len()
        );

        let mut html = self.open("table", None, None);
        html.push_str(&self.render_header());
        html.push_str(&self.render_body());
        html.push_str("</table>");
        html
    }

    /// Attribute block for an element: `key="value" ` pairs, or empty
    pub fn resolve_attributes(
        &self,
        element: &str,
        specific: Option<&str>,
        fallback: Option<&str>,
    ) -> String {
        resolve_group(self.config, element, specific, fallback)
            .map(|attrs| format_attributes(attrs, self.config.escape))
            .unwrap_or_default()
    }

    /// `<thead>` with one `<tr>` per header row
    pub fn render_header(&self) -> String {
        let mut html = self.open("thead", None, None);

        for (r, labels) in self.config.header_matrix.iter().enumerate() {
            let row_key = format!("headerRow{}", r + 1);
            html.push_str(&self.open("tr", Some(row_key.as_str()), None));

            for (c, label) in labels.iter().enumerate() {
                let cell_key = format!("{}th{}", row_key, c + 1);
                html.push_str(&self.open("th", Some(cell_key.as_str()), None));
                html.push_str(&apply_policy(label, self.config.escape));
                html.push_str("</th>");
            }

            html.push_str("</tr>");
        }

        html.push_str("</thead>");
        html
    }

    /// `<tbody>` with one `<tr>` per data row and one `<td>` per column
    pub fn render_body(&self) -> String {
        let mut html = self.open("tbody", None, None);

        for (r, row) in self.config.rows.iter().enumerate() {
            let row_key = format!("bodyRow{}", r + 1);
            html.push_str(&self.open(
                "tr",
                Some(row_key.as_str()),
                Some(self.config.body_row_fallback.as_str()),
            ));

            for (c, column) in self.columns.iter().enumerate() {
                let cell_key = format!("{}td{}", row_key, c + 1);
                html.push_str(&self.open("td", Some(cell_key.as_str()), None));

                match row.get(&column.source_key).and_then(|v| v.as_display()) {
                    Some(text) => html.push_str(&apply_policy(&text, self.config.escape)),
                    None => {
                        log::trace!("{}: no value for key '{}'", row_key, column.source_key);
                        html.push_str(&apply_policy(&self.config.missing_value, self.config.escape));
                    }
                }

                html.push_str("</td>");
            }

            html.push_str("</tr>");
        }

        html.push_str("</tbody>");
        html
    }

    fn open(&self, element: &str, specific: Option<&str>, fallback: Option<&str>) -> String {
        open_tag(element, &self.resolve_attributes(element, specific, fallback))
    }
}

/// Render a config in one call
pub fn render_table(config: &RenderConfig) -> String {
    TableRenderer::new(config).render()
}
