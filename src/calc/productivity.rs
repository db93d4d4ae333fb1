//! Productivity, cost and profitability analysis

use crate::calc::round2;
use crate::error::{AppError, AppResult};
use crate::models::{ProductionUnit, ProductivityInput, ProductivityMetrics, KG_PER_SACA};

/// Compute productivity, cost and profitability metrics from a form input.
///
/// Fails fast with a [`AppError::Validation`] naming the offending field when
/// `area` or `producao` is not a positive finite number, or `custo_total` is
/// negative or non-finite. Revenue metrics (`receita_total`, `lucro_total`,
/// `margem_lucro`, `ponto_equilibrio`) are all zero unless `preco_venda > 0`.
pub fn calculate_productivity(input: &ProductivityInput) -> AppResult<ProductivityMetrics> {
    validate(input)?;

    let (producao_sacas, producao_kg) = match input.unidade {
        ProductionUnit::Sacas => (input.producao, input.producao * KG_PER_SACA),
        ProductionUnit::Kg => (input.producao / KG_PER_SACA, input.producao),
    };

    let produtividade_ha_sacas = producao_sacas / input.area;
    let produtividade_ha_kg = producao_kg / input.area;

    let custo_ha = input.custo_total / input.area;
    let custo_saca = input.custo_total / producao_sacas;
    let custo_kg = input.custo_total / producao_kg;

    let preco = input.preco_venda.unwrap_or(0.0);
    let (receita_total, lucro_total, margem_lucro, ponto_equilibrio) = if preco > 0.0 {
        // Revenue and break-even are expressed in the declared unit
        let quantidade = match input.unidade {
            ProductionUnit::Sacas => producao_sacas,
            ProductionUnit::Kg => producao_kg,
        };
        let receita = quantidade * preco;
        let lucro = receita - input.custo_total;
        (receita, lucro, lucro / receita * 100.0, input.custo_total / preco)
    } else {
        (0.0, 0.0, 0.0, 0.0)
    };

    Ok(ProductivityMetrics {
        producao_sacas: round2(producao_sacas),
        producao_kg: round2(producao_kg),
        produtividade_ha_sacas: round2(produtividade_ha_sacas),
        produtividade_ha_kg: round2(produtividade_ha_kg),
        custo_ha: round2(custo_ha),
        custo_saca: round2(custo_saca),
        custo_kg: round2(custo_kg),
        receita_total: round2(receita_total),
        lucro_total: round2(lucro_total),
        margem_lucro: round2(margem_lucro),
        ponto_equilibrio: round2(ponto_equilibrio),
    })
}

fn validate(input: &ProductivityInput) -> AppResult<()> {
    if !input.area.is_finite() || input.area <= 0.0 {
        return Err(AppError::validation(
            "area",
            "Area must be a positive number of hectares",
            "A área deve ser um número positivo de hectares",
        ));
    }

    if !input.producao.is_finite() || input.producao <= 0.0 {
        return Err(AppError::validation(
            "producao",
            "Production must be a positive number",
            "A produção deve ser um número positivo",
        ));
    }

    if !input.custo_total.is_finite() || input.custo_total < 0.0 {
        return Err(AppError::validation(
            "custoTotal",
            "Total cost cannot be negative",
            "O custo total não pode ser negativo",
        ));
    }

    Ok(())
}
