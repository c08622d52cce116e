//! Shared types for the WASM API

use crate::models::{Column, RenderConfig};

/// Shape of a table as the renderer will see it
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableSummary {
    pub header_rows: usize,
    pub body_rows: usize,
    pub columns: Vec<Column>,
}

impl TableSummary {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            header_rows: config.header_matrix.len(),
            body_rows: config.rows.len(),
            columns: config.resolved_columns(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let config = RenderConfig::builder()
            .header_row(["", "People", ""])
            .header_row(["Name", "Age", "City"])
            .alias("Name", "name")
            .row([("name", "Bob")])
            .build();
        let summary = TableSummary::from_config(&config);
        assert_eq!(summary.header_rows, 2);
        assert_eq!(summary.body_rows, 1);
        assert_eq!(summary.columns[0], Column::new("Name", "name"));
        assert_eq!(summary.columns.len(), 3);
    }
}
