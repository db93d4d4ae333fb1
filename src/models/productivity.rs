//! Productivity calculator models

use serde::{Deserialize, Serialize};

/// Mass of one saca (Brazilian agricultural sack)
pub const KG_PER_SACA: f64 = 60.0;

/// Declared unit of the production figure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductionUnit {
    Sacas,
    Kg,
}

/// User-entered form values for a productivity analysis. Ephemeral, never
/// persisted by the core.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityInput {
    /// Planted area in hectares
    pub area: f64,
    /// Total production, in `unidade`
    pub producao: f64,
    /// Total operational cost
    pub custo_total: f64,
    /// Sale price per `unidade`; revenue metrics are zero when absent
    pub preco_venda: Option<f64>,
    pub unidade: ProductionUnit,
}

/// Computed productivity, cost and profitability metrics.
/// All values rounded to 2 decimal places.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityMetrics {
    pub producao_sacas: f64,
    pub producao_kg: f64,
    pub produtividade_ha_sacas: f64,
    pub produtividade_ha_kg: f64,
    pub custo_ha: f64,
    pub custo_saca: f64,
    pub custo_kg: f64,
    pub receita_total: f64,
    pub lucro_total: f64,
    /// Profit margin as a percentage of revenue
    pub margem_lucro: f64,
    /// Production volume (in `unidade`) at which revenue equals cost
    pub ponto_equilibrio: f64,
}
