//! Text rendering of a calculation.
//!
//! Mirrors the results page of the original form section by section: the
//! metric cards, the impact assessment, the committed share of the salary,
//! the saving target, the week-by-week timeline and the closing reflection
//! paragraph.  Everything renders into a `String`; printing is left to the
//! caller.

use crate::engine;
use crate::models::{CalculationInput, CalculationResult, PaymentBreakdown};

/// Width of the horizontal rules.
const WIDTH: usize = 58;
/// Cells in the committed-share gauge.
const BAR_WIDTH: usize = 30;
/// Weeks shown in the timeline before it collapses into a counter.
const TIMELINE_MAX_STEPS: u32 = 8;

/// Renders the full report for one calculation.
pub fn render(input: &CalculationInput, result: &CalculationResult) -> String {
    let mut out = String::new();
    let rule = "=".repeat(WIDTH);

    out.push_str(&rule);
    out.push('\n');
    out.push_str("  GranaCalc\n");
    out.push_str(&rule);
    out.push('\n');
    out.push('\n');

    metrics_section(&mut out, result);
    impact_section(&mut out, result);
    commitment_section(&mut out, result);
    objective_section(&mut out, input, result);
    timeline_section(&mut out, result.work_time.weeks);
    reflection_section(&mut out, result);

    out
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(&format!("  {title}\n"));
    out.push_str(&format!("  {}\n", "-".repeat(WIDTH - 2)));
}

fn push_metric(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {label:<22}{value}\n"));
}

fn metrics_section(out: &mut String, result: &CalculationResult) {
    let time = result.work_time;
    push_metric(out, "Horas necessárias", &format!("{:.1}", time.hours));
    push_metric(out, "Dias necessários", &format!("{:.1}", time.days));
    push_metric(out, "Semanas necessárias", &format!("{:.1}", time.weeks));
    push_metric(out, "Valor da sua hora", &format!("R$ {:.2}", result.hourly_rate));
}

fn impact_section(out: &mut String, result: &CalculationResult) {
    section(out, "Análise de impacto");
    match &result.breakdown {
        PaymentBreakdown::Cash {
            salary_percentage,
            impact,
        } => {
            out.push_str(&format!(
                "  {} {} ({salary_percentage:.1}%)\n     {}\n",
                impact.icon, impact.title, impact.message
            ));
        }
        PaymentBreakdown::Installment {
            installment_percentage,
            total_percentage,
            installment_impact,
            total_value_alert,
            ..
        } => {
            out.push_str(&format!(
                "  {} Parcela: {} ({installment_percentage:.1}%)\n     {}\n",
                installment_impact.icon, installment_impact.title, installment_impact.message
            ));
            out.push_str(&format!(
                "  Valor Total: {} ({total_percentage:.1}%)\n     O valor total representa {total_percentage:.1}% do seu salário\n",
                total_value_alert.level
            ));
        }
    }
}

fn commitment_section(out: &mut String, result: &CalculationResult) {
    // The monthly commitment: the full price when paid cash, one
    // installment when financed.
    let committed = match &result.breakdown {
        PaymentBreakdown::Cash {
            salary_percentage, ..
        } => *salary_percentage,
        PaymentBreakdown::Installment {
            installment_percentage,
            ..
        } => *installment_percentage,
    };
    section(out, "Comprometimento do salário mensal");
    out.push_str(&format!("  {}\n", commitment_bar(committed)));
    out.push_str(&format!(
        "  Comprometido: {committed:.1}%  |  Disponível: {:.1}%\n",
        100.0 - committed
    ));
}

/// Fixed-width gauge of the committed share.  The fill is clamped to the
/// bar; the printed numbers are not.
fn commitment_bar(committed: f64) -> String {
    let cells = (committed / 100.0 * BAR_WIDTH as f64).round();
    let filled = cells.clamp(0.0, BAR_WIDTH as f64) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn objective_section(out: &mut String, input: &CalculationInput, result: &CalculationResult) {
    let monthly = engine::monthly_equivalent(
        input.salary,
        input.salary_type,
        input.work_days_per_week,
        input.hours_per_day,
    );
    let target = match &result.breakdown {
        PaymentBreakdown::Cash { .. } => input.item_value,
        PaymentBreakdown::Installment { total_value, .. } => *total_value,
    };
    section(out, "Objetivo");
    out.push_str(&format!("  Salário mensal:   R$ {monthly:.2}\n"));
    out.push_str(&format!("  Valor necessário: R$ {target:.2}\n"));
}

fn timeline_section(out: &mut String, weeks: f64) {
    section(out, "Linha do tempo (semanas)");
    out.push_str(&format!("  {}\n", timeline(weeks)));
}

/// Week markers for the saving timeline.  The first week is the current
/// one; past [`TIMELINE_MAX_STEPS`] weeks the tail collapses into a
/// counter.
fn timeline(weeks: f64) -> String {
    let total = weeks.ceil() as u32;
    let visible = total.min(TIMELINE_MAX_STEPS);
    let mut steps = Vec::with_capacity(visible as usize + 1);
    for week in 1..=visible {
        let marker = if week == 1 { '●' } else { '○' };
        steps.push(format!("{marker} {week}"));
    }
    if total > TIMELINE_MAX_STEPS {
        steps.push(format!("... {total} semanas"));
    }
    steps.join("  ")
}

fn reflection_section(out: &mut String, result: &CalculationResult) {
    section(out, "Reflexão");
    out.push_str(&format!("  {}\n", reflection(result)));
}

fn plural(n: u64, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}

/// Closing paragraph.  All time figures are rounded up to whole units, so
/// the prose never promises less work than the numbers above it.
fn reflection(result: &CalculationResult) -> String {
    let hours = result.work_time.hours.ceil() as u64;
    let days = result.work_time.days.ceil() as u64;
    let weeks = result.work_time.weeks.ceil() as u64;

    match &result.breakdown {
        PaymentBreakdown::Cash {
            salary_percentage, ..
        } => {
            if *salary_percentage <= 10.0 {
                format!(
                    "Excelente escolha! Este item representa apenas {hours} horas do seu \
                     trabalho (aproximadamente {days} {}). Uma compra consciente e sustentável.",
                    plural(days, "dia", "dias")
                )
            } else if *salary_percentage <= 20.0 {
                format!(
                    "Compra moderada. Você precisará trabalhar {days} {} ({hours} horas) para \
                     adquirir este item. Certifique-se de que está alinhado com suas prioridades.",
                    plural(days, "dia", "dias")
                )
            } else if *salary_percentage <= 30.0 {
                format!(
                    "Atenção! Este item consome {weeks} {} do seu trabalho ({days} dias, \
                     {hours} horas). Avalie se realmente compensa este investimento de tempo.",
                    plural(weeks, "semana", "semanas")
                )
            } else {
                format!(
                    "Cuidado! Você precisará trabalhar {weeks} {} ({days} dias) para pagar \
                     este item. Isso representa uma parcela significativa do seu esforço. \
                     Considere alternativas ou economia prévia.",
                    plural(weeks, "semana", "semanas")
                )
            }
        }
        PaymentBreakdown::Installment {
            installment_value,
            installment_count,
            total_value,
            installment_percentage,
            ..
        } => {
            let mut message = format!(
                "Você assumirá um compromisso de {installment_count} {}, com parcelas de \
                 R$ {installment_value:.2}. ",
                plural(u64::from(*installment_count), "mês", "meses")
            );
            if *installment_percentage <= 10.0 {
                message.push_str("A parcela é sustentável e cabe no seu orçamento mensal.");
            } else if *installment_percentage <= 15.0 {
                message.push_str("Exigirá controle financeiro, mas é gerenciável.");
            } else {
                message.push_str(
                    "As parcelas reduzirão significativamente sua margem mensal. Avalie se \
                     consegue manter este compromisso.",
                );
            }
            message.push_str(&format!(
                " O valor total (R$ {total_value:.2}) equivale a {weeks} {} de trabalho.",
                plural(weeks, "semana", "semanas")
            ));
            message
        }
    }
}
