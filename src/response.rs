//! Wire response shapes and the mapping from positional rows to named records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, ScreenerError};

/// One positional row as sent by the service: `d[i]` belongs to `columns[i]`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScanRow {
    pub s: String,
    #[serde(default)]
    pub d: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub total_count: u64,
    #[serde(default)]
    pub data: Vec<ScanRow>,
}

// key of the ticker in a mapped record
const SYMBOL_KEY: &str = "symbol";

/// A row with its values named after the selected columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanRecord {
    pub symbol: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ScanRecord {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub total_count: u64,
    pub data: Vec<ScanRecord>,
}

impl ScanResponse {
    /// Parses a response document, failing on anything not shaped like a scan result.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ScreenerError::MalformedResponse(e.to_string()))
    }

    /// Zips every row against `columns`. Rows are kept in order and untouched
    /// otherwise. When lengths differ the zip is best effort: surplus values
    /// are dropped and missing ones leave the field absent.
    ///
    /// A selected column literally named `symbol` is left out of `fields`;
    /// the record's own `symbol` (the row's ticker) takes that key.
    pub fn map_columns(&self, columns: &[String]) -> ScanResult {
        let data = self
            .data
            .iter()
            .map(|row| ScanRecord {
                symbol: row.s.clone(),
                fields: columns
                    .iter()
                    .zip(row.d.iter())
                    .filter(|(column, _)| column.as_str() != SYMBOL_KEY)
                    .map(|(column, value)| (column.clone(), value.clone()))
                    .collect(),
            })
            .collect();
        ScanResult { total_count: self.total_count, data }
    }
}
