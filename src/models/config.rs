//! Table render configuration
//!
//! `RenderConfig` is the options object the renderer consumes. Field names on
//! the wire follow the JavaScript options object (`data`, `headers`,
//! `headerColumnMap`, `props`); every field is optional and `null` is treated
//! as empty.

use super::serde_helpers::null_as_default;
use super::value::CellValue;
use crate::error::TableError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One data row: column key -> scalar
pub type Row = HashMap<String, CellValue>;

/// Default name of the attribute group shared by every body row
pub const DEFAULT_BODY_ROW_FALLBACK: &str = "red";

/// A single HTML attribute in an attribute group
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AttributePair {
    pub key: String,

    /// `Null` renders a bare boolean attribute (`hidden`)
    #[serde(default)]
    pub value: CellValue,
}

impl AttributePair {
    pub fn new(key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Attribute with no value, e.g. `hidden`
    pub fn flag(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: CellValue::Null,
        }
    }
}

/// A declared body column: the label shown in the header and the row key it reads
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub label: String,
    pub source_key: String,
}

impl Column {
    pub fn new(label: impl Into<String>, source_key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            source_key: source_key.into(),
        }
    }
}

/// How header labels, cell values and attribute values are written out
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EscapePolicy {
    /// Escape `& < > " '` (default)
    #[default]
    Html,
    /// Emit text verbatim; only for trusted input
    Raw,
}

/// Everything needed to render one `<table>`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    /// Data rows, rendered in order inside `<tbody>`
    #[serde(rename = "data", default, deserialize_with = "null_as_default")]
    pub rows: Vec<Row>,

    /// Header rows; the last one names the visible columns
    #[serde(rename = "headers", default, deserialize_with = "null_as_default")]
    pub header_matrix: Vec<Vec<String>>,

    /// Header label -> row key
    #[serde(rename = "headerColumnMap", default, deserialize_with = "null_as_default")]
    pub column_alias_map: HashMap<String, String>,

    /// Lookup name (element name or `headerRow1th2`-style key) -> attributes
    #[serde(rename = "props", default, deserialize_with = "null_as_default")]
    pub attribute_groups: HashMap<String, Vec<AttributePair>>,

    /// Explicit column list; replaces inference from the last header row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub escape: EscapePolicy,

    /// Text written for absent or null cells
    #[serde(default, deserialize_with = "null_as_default")]
    pub missing_value: String,

    /// Attribute group consulted for every body row after `bodyRow{n}`
    #[serde(
        default = "default_body_row_fallback",
        deserialize_with = "null_as_body_row_fallback"
    )]
    pub body_row_fallback: String,
}

fn default_body_row_fallback() -> String {
    DEFAULT_BODY_ROW_FALLBACK.to_string()
}

fn null_as_body_row_fallback<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_body_row_fallback))
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            header_matrix: Vec::new(),
            column_alias_map: HashMap::new(),
            attribute_groups: HashMap::new(),
            columns: None,
            escape: EscapePolicy::default(),
            missing_value: String::new(),
            body_row_fallback: default_body_row_fallback(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern for fluent construction
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }

    /// The columns the body reads, in order
    ///
    /// Explicit `columns` win. Otherwise each label of the last header row is
    /// mapped through the alias map; an absent or empty alias means the label
    /// itself is the row key. No header rows means no columns.
    pub fn resolved_columns(&self) -> Vec<Column> {
        if let Some(columns) = &self.columns {
            return columns.clone();
        }

        self.header_matrix
            .last()
            .map(|labels| {
                labels
                    .iter()
                    .map(|label| {
                        let source_key = self
                            .column_alias_map
                            .get(label)
                            .filter(|alias| !alias.is_empty())
                            .unwrap_or(label);
                        Column::new(label.clone(), source_key.clone())
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Attribute group registered under `name`, if any
    pub fn attribute_group(&self, name: &str) -> Option<&[AttributePair]> {
        self.attribute_groups.get(name).map(Vec::as_slice)
    }

    /// Parse a config from a JSON options document
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a config from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, TableError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config file, choosing the format from the extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml(&contents),
            other => Err(TableError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Serialize back to the JSON options shape
    pub fn to_json(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builder for RenderConfig
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
        }
    }

    /// Append a data row from `(key, value)` pairs
    pub fn row<K, V, I>(mut self, cells: I) -> Self
    where
        K: Into<String>,
        V: Into<CellValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let row = cells
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.config.rows.push(row);
        self
    }

    /// Append a header row
    pub fn header_row<S, I>(mut self, labels: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        self.config
            .header_matrix
            .push(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Map a header label to the row key it reads
    pub fn alias(mut self, label: impl Into<String>, key: impl Into<String>) -> Self {
        self.config.column_alias_map.insert(label.into(), key.into());
        self
    }

    /// Register an attribute group under a lookup name
    pub fn attributes<I>(mut self, lookup: impl Into<String>, attrs: I) -> Self
    where
        I: IntoIterator<Item = AttributePair>,
    {
        self.config
            .attribute_groups
            .insert(lookup.into(), attrs.into_iter().collect());
        self
    }

    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = Column>,
    {
        self.config.columns = Some(columns.into_iter().collect());
        self
    }

    pub fn escape(mut self, policy: EscapePolicy) -> Self {
        self.config.escape = policy;
        self
    }

    pub fn missing_value(mut self, placeholder: impl Into<String>) -> Self {
        self.config.missing_value = placeholder.into();
        self
    }

    pub fn body_row_fallback(mut self, lookup: impl Into<String>) -> Self {
        self.config.body_row_fallback = lookup.into();
        self
    }

    pub fn build(self) -> RenderConfig {
        self.config
    }
}

impl Default for RenderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
