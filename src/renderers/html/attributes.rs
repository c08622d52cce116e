//! Attribute group resolution and opening-tag formatting

use super::escape::apply_policy;
use crate::models::{AttributePair, EscapePolicy, RenderConfig};

/// Pick the attribute group for an element
///
/// Lookup order: `specific`, then `fallback`, then the element name. The first
/// group that exists is used, even when it is empty.
pub fn resolve_group<'a>(
    config: &'a RenderConfig,
    element: &str,
    specific: Option<&str>,
    fallback: Option<&str>,
) -> Option<&'a [AttributePair]> {
    specific
        .and_then(|key| config.attribute_group(key))
        .or_else(|| fallback.and_then(|key| config.attribute_group(key)))
        .or_else(|| config.attribute_group(element))
}

/// Format pairs as `key="value" ` (each followed by one space)
pub fn format_attributes(attrs: &[AttributePair], policy: EscapePolicy) -> String {
    let mut out = String::new();
    for attr in attrs {
        out.push_str(&attr.key);
        if let Some(value) = attr.value.as_display() {
            out.push_str("=\"");
            out.push_str(&apply_policy(&value, policy));
            out.push('"');
        }
        out.push(' ');
    }
    out
}

/// `<element>` or `<element key="value" >`
pub fn open_tag(element: &str, attributes: &str) -> String {
    if attributes.is_empty() {
        format!("<{}>", element)
    } else {
        format!("<{} {}>", element, attributes)
    }
}
