//! The five chart aggregators
//!
//! Each pass walks the record list once with locally-scoped accumulators and
//! never mutates its input, so callers may run them concurrently from
//! multiple request contexts.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;

use crate::aggregation::dates::resolve_main_date;
use crate::aggregation::numeric::parse_amount;
use crate::models::{
    ActivityRecord, ActivityShare, CostCategoryTotal, CropComparison, CropUsage, GeneralStats,
    MonthlyProductivityPoint,
};

/// Portuguese three-letter month abbreviations, January first
const MONTH_ABBR_PT: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Bucket label for records without a usable category/crop value
const OUTROS: &str = "Outros";
const CULTURA_NAO_ESPECIFICADA: &str = "Não especificada";

/// How many monthly groups the trend chart shows
const MONTHLY_TREND_WINDOW: usize = 6;

#[derive(Default)]
struct MonthAccum {
    soma_rendimento: f64,
    contribuintes: u32,
    soma_custo: f64,
}

/// Monthly productivity trend: mean positive yield and total cost per
/// calendar month, ascending, limited to the most recent six months with any
/// dated records. Records without a resolvable main date are skipped.
pub fn aggregate_monthly_productivity(records: &[ActivityRecord]) -> Vec<MonthlyProductivityPoint> {
    let mut groups: BTreeMap<(i32, u32), MonthAccum> = BTreeMap::new();

    for record in records {
        let Some(date) = resolve_main_date(record) else {
            tracing::debug!(tipo = ?record.tipo, "skipping record without a parseable date");
            continue;
        };
        let accum = groups.entry((date.year(), date.month())).or_default();

        let rendimento = parse_amount(record.rendimento_final.as_ref());
        if rendimento > 0.0 {
            accum.soma_rendimento += rendimento;
            accum.contribuintes += 1;
        }
        accum.soma_custo += parse_amount(record.custos_operacionais.as_ref());
    }

    let total = groups.len();
    groups
        .into_iter()
        .skip(total.saturating_sub(MONTHLY_TREND_WINDOW))
        .map(|((year, month), accum)| MonthlyProductivityPoint {
            mes: format!("{}/{:02}", MONTH_ABBR_PT[month as usize - 1], year.rem_euclid(100)),
            rendimento: if accum.contribuintes > 0 {
                (accum.soma_rendimento / f64::from(accum.contribuintes)).round() as i64
            } else {
                0
            },
            custo: accum.soma_custo.round() as i64,
        })
        .collect()
}

/// The six fixed cost buckets, in match order. Substring keys run against the
/// lowercased `tipo`; the first hit wins and everything else lands in Outros.
const COST_CATEGORIES: [(&str, &[&str]); 5] = [
    ("Plantio", &["plantio"]),
    ("Colheita", &["colheita"]),
    ("Adubação", &["aduba"]),
    ("Defensivos", &["defensivo", "aplica"]),
    ("Irrigação", &["irriga"]),
];

/// Total positive cost per activity category, zero buckets omitted,
/// descending by value.
pub fn aggregate_cost_by_category(records: &[ActivityRecord]) -> Vec<CostCategoryTotal> {
    let mut totals: [f64; 6] = [0.0; 6];

    for record in records {
        let custo = parse_amount(record.custos_operacionais.as_ref());
        if custo <= 0.0 {
            continue;
        }
        totals[categorize(record.tipo.as_deref())] += custo;
    }

    let mut out: Vec<CostCategoryTotal> = COST_CATEGORIES
        .iter()
        .map(|(label, _)| *label)
        .chain(std::iter::once(OUTROS))
        .zip(totals)
        .filter(|(_, valor)| *valor > 0.0)
        .map(|(categoria, valor)| CostCategoryTotal {
            categoria: categoria.to_string(),
            valor: (valor * 100.0).round() / 100.0,
        })
        .collect();

    out.sort_by(|a, b| b.valor.total_cmp(&a.valor));
    out
}

fn categorize(tipo: Option<&str>) -> usize {
    let Some(tipo) = tipo else {
        return COST_CATEGORIES.len();
    };
    let lower = tipo.to_lowercase();
    COST_CATEGORIES
        .iter()
        .position(|(_, keys)| keys.iter().any(|k| lower.contains(k)))
        .unwrap_or(COST_CATEGORIES.len())
}

/// Record count and percentage share per distinct `tipo`, descending by
/// count, ties in first-encountered order.
pub fn aggregate_activity_distribution(records: &[ActivityRecord]) -> Vec<ActivityShare> {
    let mut order: Vec<(String, u32)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let tipo = match record.tipo.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => OUTROS.to_string(),
        };
        match index.get(&tipo) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(tipo.clone(), order.len());
                order.push((tipo, 1));
            }
        }
    }

    let total = records.len() as f64;
    // Stable sort keeps first-encountered order among equal counts
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
        .into_iter()
        .map(|(tipo, quantidade)| ActivityShare {
            tipo,
            percentual: format!("{:.1}", f64::from(quantidade) / total * 100.0),
            quantidade,
        })
        .collect()
}

#[derive(Default)]
struct CropAccum {
    soma_rendimento: f64,
    registros: u32,
    soma_custo: f64,
}

/// Per-crop mean yield, total cost and contributing record count, grouped
/// case-insensitively, descending by mean yield. Crops whose records never
/// contributed a positive yield are excluded.
pub fn aggregate_crop_comparison(records: &[ActivityRecord]) -> Vec<CropComparison> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, CropAccum> = HashMap::new();

    for record in records {
        let key = crop_key(record.tipo_cultura.as_deref());
        let accum = match groups.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                order.push(entry.key().clone());
                entry.insert(CropAccum::default())
            }
        };

        let rendimento = parse_amount(record.rendimento_final.as_ref());
        if rendimento > 0.0 {
            accum.soma_rendimento += rendimento;
            accum.registros += 1;
        }
        let custo = parse_amount(record.custos_operacionais.as_ref());
        if custo > 0.0 {
            accum.soma_custo += custo;
        }
    }

    let mut out: Vec<CropComparison> = order
        .into_iter()
        .filter_map(|key| {
            let accum = groups.remove(&key)?;
            if accum.registros == 0 {
                return None;
            }
            Some(CropComparison {
                cultura: capitalize(&key),
                rendimento_medio: (accum.soma_rendimento / f64::from(accum.registros)).round()
                    as i64,
                custo_total: accum.soma_custo.round() as i64,
                registros: accum.registros,
            })
        })
        .collect();

    out.sort_by(|a, b| b.rendimento_medio.cmp(&a.rendimento_medio));
    out
}

/// Dashboard statistics over the full record set
pub fn general_stats(records: &[ActivityRecord]) -> GeneralStats {
    let mut soma_custos = 0.0;
    let mut soma_rendimento = 0.0;
    let mut contribuintes: u32 = 0;

    let mut order: Vec<(String, u32)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let custo = parse_amount(record.custos_operacionais.as_ref());
        if custo > 0.0 {
            soma_custos += custo;
        }

        let rendimento = parse_amount(record.rendimento_final.as_ref());
        if rendimento > 0.0 {
            soma_rendimento += rendimento;
            contribuintes += 1;
        }

        if let Some(cultura) = record.tipo_cultura.as_deref().map(str::trim) {
            if !cultura.is_empty() {
                let key = cultura.to_lowercase();
                match index.get(&key) {
                    Some(&i) => order[i].1 += 1,
                    None => {
                        index.insert(key.clone(), order.len());
                        order.push((key, 1));
                    }
                }
            }
        }
    }

    // Stable sort keeps first-encountered order among equal counts
    order.sort_by(|a, b| b.1.cmp(&a.1));

    GeneralStats {
        total_registros: records.len() as u32,
        total_custos: soma_custos.round() as i64,
        rendimento_medio: if contribuintes > 0 {
            (soma_rendimento / f64::from(contribuintes)).round() as i64
        } else {
            0
        },
        culturas_mais_usadas: order
            .into_iter()
            .take(3)
            .map(|(key, count)| CropUsage {
                cultura: capitalize(&key),
                count,
            })
            .collect(),
    }
}

fn crop_key(tipo_cultura: Option<&str>) -> String {
    match tipo_cultura.map(str::trim) {
        Some(c) if !c.is_empty() => c.to_lowercase(),
        _ => CULTURA_NAO_ESPECIFICADA.to_lowercase(),
    }
}

/// First letter upper, rest untouched, for chart display
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
