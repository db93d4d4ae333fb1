//! Chart-ready aggregate shapes
//!
//! Derived data, recomputed on every call. The charting and PDF collaborators
//! consume these as-is.

use serde::Serialize;

/// One point of the monthly productivity trend
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProductivityPoint {
    /// Localized label, e.g. "Mai/24"
    pub mes: String,
    /// Mean of the month's positive yield values, integer-rounded
    pub rendimento: i64,
    /// Total cost for the month, integer-rounded
    pub custo: i64,
}

/// Total cost attributed to one activity category
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostCategoryTotal {
    pub categoria: String,
    pub valor: f64,
}

/// Share of one activity kind in the full record set
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityShare {
    pub tipo: String,
    pub quantidade: u32,
    /// Percentage of all records, formatted to 1 decimal
    pub percentual: String,
}

/// Per-crop yield and cost comparison row
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CropComparison {
    /// Display name, first letter capitalized
    pub cultura: String,
    pub rendimento_medio: i64,
    pub custo_total: i64,
    /// Number of records that contributed a yield value
    pub registros: u32,
}

/// Crop usage tally for the general statistics panel
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CropUsage {
    pub cultura: String,
    pub count: u32,
}

/// Dashboard-level statistics over the full record set
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneralStats {
    pub total_registros: u32,
    pub total_custos: i64,
    pub rendimento_medio: i64,
    /// Top 3 crops by record count, ties kept in first-encountered order
    pub culturas_mais_usadas: Vec<CropUsage>,
}
