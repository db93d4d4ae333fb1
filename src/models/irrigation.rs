//! Irrigation calculator models

use serde::{Deserialize, Serialize};

/// User-entered form values for an irrigation estimate.
///
/// Crop, growth stage and soil type stay free-text: unknown values degrade to
/// documented defaults instead of failing validation, so the calculator
/// remains usable with partial domain knowledge.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationInput {
    pub cultura: String,
    /// Planted area in hectares
    pub area: f64,
    /// Mean air temperature in °C
    pub temperatura: f64,
    /// Relative air humidity in %; a 0.5 humidity factor is assumed when absent
    pub umidade_ar: Option<f64>,
    /// inicial | vegetativo | floracao | maturacao (unknown -> Kc 1.0)
    pub estadio_desenvolvimento: String,
    /// arenoso | medio | argiloso (unknown -> 100 mm/m)
    pub tipo_solo: String,
}

/// Computed irrigation demand. All values rounded to 2 decimal places.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationMetrics {
    /// Crop coefficient used for this crop and stage
    pub kc: f64,
    /// Reference evapotranspiration, mm/day
    pub eto: f64,
    /// Crop evapotranspiration = daily irrigation depth, mm/day
    pub lamina_diaria: f64,
    /// m³ per hectare per day
    pub volume_ha_dia: f64,
    /// m³ per day over the whole area
    pub volume_total_dia: f64,
    /// m³ per 30-day month over the whole area
    pub volume_mes: f64,
    /// Recommended interval between irrigations, in days
    pub frequencia_dias: u32,
    /// Depth to apply at each irrigation, mm
    pub lamina_por_irrigacao: f64,
    /// Soil water-holding capacity used, mm/m
    pub capacidade_solo: f64,
    /// Human-readable advisories, in emission order
    pub alertas: Vec<String>,
}

/// Static agronomic guidance for a crop
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CropGuidance {
    pub cultura: &'static str,
    pub estadio_critico: &'static str,
    pub frequencia_ideal: &'static str,
    pub lamina_ideal: &'static str,
    pub observacoes: &'static str,
}
