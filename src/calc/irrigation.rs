//! Irrigation water-demand estimation
//!
//! Reference evapotranspiration uses a simplified Hargreaves-style estimate,
//! `etoBase = 0.0023 * (t + 17.8) * sqrt(t)`, which is only physically sound
//! for non-negative temperatures; validation therefore rejects negative and
//! non-finite temperatures up front instead of letting NaN flow through.

use crate::calc::round2;
use crate::error::{AppError, AppResult};
use crate::models::{CropGuidance, IrrigationInput, IrrigationMetrics};

/// Growth stages, in table-column order: inicial, vegetativo, floracao, maturacao
const STAGES: [&str; 4] = ["inicial", "vegetativo", "floracao", "maturacao"];

/// Crop coefficient (Kc) per crop and growth stage
const KC_TABLE: &[(&str, [f64; 4])] = &[
    ("soja", [0.4, 0.8, 1.15, 0.5]),
    ("milho", [0.4, 0.85, 1.2, 0.6]),
    ("trigo", [0.35, 0.75, 1.15, 0.45]),
    ("feijao", [0.4, 0.75, 1.15, 0.35]),
    ("algodao", [0.35, 0.75, 1.2, 0.7]),
    ("cafe", [0.9, 0.95, 1.0, 0.95]),
    ("cana", [0.4, 0.8, 1.25, 0.75]),
];

/// Fallback for crops or stages outside the table
const KC_DEFAULT: f64 = 1.0;

/// Soil water-holding capacity in mm/m
const SOIL_CAPACITY: &[(&str, f64)] = &[("arenoso", 60.0), ("medio", 100.0), ("argiloso", 140.0)];

/// Fallback capacity for unknown soil labels
const SOIL_CAPACITY_DEFAULT: f64 = 100.0;

/// mm of depth over one hectare = 10 m³
const M3_PER_HA_PER_MM: f64 = 10.0;

const DAYS_PER_MONTH: f64 = 30.0;

/// Static agronomic guidance, keyed by normalized crop name
const CROP_GUIDANCE: &[CropGuidance] = &[
    CropGuidance {
        cultura: "Soja",
        estadio_critico: "Floração e enchimento de grãos",
        frequencia_ideal: "5 a 7 dias",
        lamina_ideal: "4 a 7 mm/dia",
        observacoes: "Evitar déficit hídrico entre R1 e R6; o estresse na floração reduz \
                      diretamente o número de vagens.",
    },
    CropGuidance {
        cultura: "Milho",
        estadio_critico: "Pendoamento e polinização",
        frequencia_ideal: "4 a 6 dias",
        lamina_ideal: "5 a 8 mm/dia",
        observacoes: "O período de 15 dias em torno do pendoamento concentra a definição da \
                      produtividade.",
    },
    CropGuidance {
        cultura: "Feijão",
        estadio_critico: "Floração e formação de vagens",
        frequencia_ideal: "3 a 5 dias",
        lamina_ideal: "3 a 6 mm/dia",
        observacoes: "Sistema radicular raso; irrigações curtas e frequentes respondem melhor.",
    },
    CropGuidance {
        cultura: "Café",
        estadio_critico: "Florada e expansão dos frutos",
        frequencia_ideal: "7 a 10 dias",
        lamina_ideal: "3 a 5 mm/dia",
        observacoes: "O déficit controlado pré-florada pode uniformizar a florada; após a \
                      abertura das flores, manter o solo próximo à capacidade de campo.",
    },
];

/// Compute the daily irrigation demand for a crop under the given climate.
///
/// Strict validation covers `cultura` (non-empty), `area` (positive finite)
/// and `temperatura` (finite, non-negative). Unknown crop, growth stage or
/// soil labels are not errors: they degrade to Kc = 1.0 and 100 mm/m,
/// keeping the calculator usable with partial domain knowledge.
pub fn calculate_irrigation(input: &IrrigationInput) -> AppResult<IrrigationMetrics> {
    validate(input)?;

    let kc = lookup_kc(&input.cultura, &input.estadio_desenvolvimento);
    let capacidade_solo = lookup_soil_capacity(&input.tipo_solo);

    // Simplified Hargreaves-style reference evapotranspiration
    let eto_base = 0.0023 * (input.temperatura + 17.8) * input.temperatura.sqrt();
    let fator_umidade = match input.umidade_ar {
        Some(umidade) => (100.0 - umidade) / 100.0,
        None => 0.5,
    };
    let eto = eto_base * (1.0 + fator_umidade);

    // Crop evapotranspiration doubles as the daily irrigation depth
    let lamina_diaria = eto * kc;

    let volume_ha_dia = lamina_diaria * M3_PER_HA_PER_MM;
    let volume_total_dia = volume_ha_dia * input.area;
    let volume_mes = volume_total_dia * DAYS_PER_MONTH;

    let frequencia_dias = if lamina_diaria > 0.0 {
        (capacidade_solo / lamina_diaria).ceil() as u32
    } else {
        0
    };
    let lamina_por_irrigacao = lamina_diaria * f64::from(frequencia_dias);

    Ok(IrrigationMetrics {
        kc,
        eto: round2(eto),
        lamina_diaria: round2(lamina_diaria),
        volume_ha_dia: round2(volume_ha_dia),
        volume_total_dia: round2(volume_total_dia),
        volume_mes: round2(volume_mes),
        frequencia_dias,
        lamina_por_irrigacao: round2(lamina_por_irrigacao),
        capacidade_solo,
        alertas: build_alerts(input),
    })
}

/// Static agronomic guidance for a crop; `None` for crops outside the table.
/// Matching is case- and accent-insensitive ("Café" finds "cafe").
pub fn crop_guidance(cultura: &str) -> Option<&'static CropGuidance> {
    let key = normalize_label(cultura);
    CROP_GUIDANCE
        .iter()
        .find(|g| normalize_label(g.cultura) == key)
}

fn validate(input: &IrrigationInput) -> AppResult<()> {
    if input.cultura.trim().is_empty() {
        return Err(AppError::validation(
            "cultura",
            "Crop name is required",
            "Informe a cultura",
        ));
    }

    if !input.area.is_finite() || input.area <= 0.0 {
        return Err(AppError::validation(
            "area",
            "Area must be a positive number of hectares",
            "A área deve ser um número positivo de hectares",
        ));
    }

    if !input.temperatura.is_finite() || input.temperatura < 0.0 {
        return Err(AppError::validation(
            "temperatura",
            "Temperature must be a non-negative number in °C",
            "A temperatura deve ser um número maior ou igual a zero em °C",
        ));
    }

    Ok(())
}

fn lookup_kc(cultura: &str, estadio: &str) -> f64 {
    let crop_key = normalize_label(cultura);
    let stage_key = normalize_label(estadio);

    let Some((_, row)) = KC_TABLE.iter().find(|(crop, _)| *crop == crop_key) else {
        return KC_DEFAULT;
    };
    match STAGES.iter().position(|s| *s == stage_key) {
        Some(index) => row[index],
        None => KC_DEFAULT,
    }
}

fn lookup_soil_capacity(tipo_solo: &str) -> f64 {
    let key = normalize_label(tipo_solo);
    SOIL_CAPACITY
        .iter()
        .find(|(soil, _)| *soil == key)
        .map(|(_, capacity)| *capacity)
        .unwrap_or(SOIL_CAPACITY_DEFAULT)
}

fn build_alerts(input: &IrrigationInput) -> Vec<String> {
    let mut alertas = Vec::new();

    if input.temperatura > 35.0 {
        alertas.push(
            "Temperatura elevada: prefira irrigar nos horários mais frescos para reduzir perdas \
             por evaporação."
                .to_string(),
        );
    }

    if let Some(umidade) = input.umidade_ar {
        if umidade < 30.0 {
            alertas.push(
                "Umidade do ar muito baixa: a demanda hídrica da cultura tende a aumentar."
                    .to_string(),
            );
        }
    }

    if normalize_label(&input.estadio_desenvolvimento) == "floracao" {
        alertas.push(
            "Estádio de floração: fase crítica, evite qualquer déficit hídrico.".to_string(),
        );
    }

    match normalize_label(&input.tipo_solo).as_str() {
        "arenoso" => alertas.push(
            "Solo arenoso: irrigações mais frequentes com lâminas menores.".to_string(),
        ),
        "argiloso" => alertas.push(
            "Solo argiloso: irrigações menos frequentes com lâminas maiores.".to_string(),
        ),
        _ => {}
    }

    alertas
}

/// Lowercase and strip the Portuguese accents that show up in free-text
/// crop/soil/stage labels, so "Café" and "médio" hit the table keys.
fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'â' | 'ã' | 'à' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
