//! Table rendering operations for the WASM API
//!
//! Options objects use the same field names as the JavaScript `Table`
//! constructor: `data`, `headers`, `headerColumnMap`, `props`.

use wasm_bindgen::prelude::*;
use crate::api::helpers::{deserialize, serialize, table_error};
use crate::api::types::TableSummary;
use crate::error::TableError;
use crate::models::RenderConfig;
use crate::renderers::{render_page, render_table, PageContext, TableRenderer};
use crate::{wasm_info, wasm_log, wasm_warn};

// ============================================================================
// One-shot rendering
// ============================================================================

/// Render table markup from a JS options object
#[wasm_bindgen(js_name = renderTable)]
pub fn render_table_js(options: JsValue) -> Result<String, JsValue> {
    let config: RenderConfig = deserialize(options, "Invalid table options")?;
    wasm_log!(
        "renderTable: {} header rows, {} body rows",
        config.header_matrix.len(),
        config.rows.len()
    );
    Ok(render_table(&config))
}

/// Render table markup from a JSON options string
#[wasm_bindgen(js_name = renderTableJson)]
pub fn render_table_json(json: &str) -> Result<String, JsValue> {
    let config =
        RenderConfig::from_json(json).map_err(|e| table_error("renderTableJson", e))?;
    Ok(render_table(&config))
}

/// Render a complete HTML page containing the table, with an optional
/// title and stylesheet link
#[wasm_bindgen(js_name = renderTablePage)]
pub fn render_table_page(
    options: JsValue,
    title: Option<String>,
    stylesheet: Option<String>,
) -> Result<String, JsValue> {
    let config: RenderConfig = deserialize(options, "Invalid table options")?;
    let table = render_table(&config);

    let mut context = PageContext::new().title(title);
    if let Some(href) = stylesheet {
        context = context.stylesheet(href);
    }

    render_page(&table, &context).map_err(|e| table_error("renderTablePage", e))
}

/// Describe the resolved shape (row counts and columns) without rendering
#[wasm_bindgen(js_name = describeTable)]
pub fn describe_table(options: JsValue) -> Result<JsValue, JsValue> {
    let config: RenderConfig = deserialize(options, "Invalid table options")?;
    serialize(&TableSummary::from_config(&config), "Failed to serialize table summary")
}

// ============================================================================
// Host page
// ============================================================================

/// Render and assign the markup to `innerHTML` of the element matching
/// `selector`, or of `document.body` when no selector is given
#[wasm_bindgen(js_name = mountTable)]
pub fn mount_table(options: JsValue, selector: Option<String>) -> Result<(), JsValue> {
    let started = js_sys::Date::now();
    let config: RenderConfig = deserialize(options, "Invalid table options")?;
    let html = render_table(&config);

    let target = find_target(selector.as_deref()).map_err(|e| table_error("mountTable", e))?;
    target.set_inner_html(&html);

    wasm_info!(
        "mountTable: {} bytes into {} in {:.1}ms",
        html.len(),
        selector.as_deref().unwrap_or("body"),
        js_sys::Date::now() - started
    );
    Ok(())
}

fn find_target(selector: Option<&str>) -> Result<web_sys::Element, TableError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| TableError::Dom("no document available".to_string()))?;

    match selector {
        Some(sel) => document
            .query_selector(sel)
            .map_err(|_| TableError::Dom(format!("invalid selector '{}'", sel)))?
            .ok_or_else(|| TableError::Dom(format!("no element matches '{}'", sel))),
        None => document
            .body()
            .map(Into::into)
            .ok_or_else(|| TableError::Dom("document has no body".to_string())),
    }
}

// ============================================================================
// Table class
// ============================================================================

/// Constructed once from an options object, rendered any number of times
#[wasm_bindgen(js_name = Table)]
pub struct WasmTable {
    config: RenderConfig,
}

#[wasm_bindgen(js_class = Table)]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<WasmTable, JsValue> {
        let config: RenderConfig = if options.is_undefined() || options.is_null() {
            wasm_warn!("Table constructed without options; rendering an empty table");
            RenderConfig::default()
        } else {
            deserialize(options, "Invalid table options")?
        };
        Ok(WasmTable { config })
    }

    #[wasm_bindgen(js_name = renderTable)]
    pub fn render_table(&self) -> String {
        TableRenderer::new(&self.config).render()
    }

    #[wasm_bindgen(js_name = rowCount)]
    pub fn row_count(&self) -> usize {
        self.config.rows.len()
    }

    #[wasm_bindgen(js_name = columnCount)]
    pub fn column_count(&self) -> usize {
        self.config.resolved_columns().len()
    }
}
