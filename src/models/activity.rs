//! Historical activity records as stored by the document database
//!
//! Records are heterogeneous: every field is optional, numeric fields may
//! arrive as numbers or locale-formatted strings, and dates may use the
//! current `YYYY-MM-DD` form or the legacy `DD/MM/YYYY` form. The aggregation
//! engine tolerates all of this field by field.

use serde::{Deserialize, Serialize};

/// A document field that may be stored as a number or as a formatted string
/// (e.g. `1500`, `"1.500,00"`, `"800"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// One logged farm event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityRecord {
    /// Activity kind, free text (e.g. "Plantio", "Colheita")
    pub tipo: Option<String>,
    /// Crop name, free text, arbitrary casing
    pub tipo_cultura: Option<String>,
    /// Soil type label
    pub tipo_solo: Option<String>,
    pub data_plantio: Option<String>,
    pub data_colheita: Option<String>,
    pub data: Option<String>,
    /// Yield value, possibly comma/dot formatted
    pub rendimento_final: Option<FieldValue>,
    /// Operational cost, same ambiguous format
    pub custos_operacionais: Option<FieldValue>,
    pub descricao: Option<String>,
}
