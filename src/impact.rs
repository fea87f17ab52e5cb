//! Risk classification of purchase percentages.
//!
//! The `impact` module holds the qualitative side of the calculator: a
//! small ordered vocabulary of severity classes and the fixed percentage
//! tables that map a share of monthly-equivalent income onto a user-facing
//! assessment.  Cash purchases and installment plans are judged against
//! different breakpoints, so each payment mode carries its own table and
//! the two are kept separate on purpose.  A third, independent ladder
//! rates the total obligation of an installment plan.

use serde::Serialize;

use crate::models::PaymentType;

/// Qualitative risk class attached to a percentage-of-income figure.
///
/// Variants are declared from mildest to harshest, so the derived ordering
/// follows increasing severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    VerySafe,
    Safe,
    Moderate,
    Risky,
    Imprudent,
    VeryImprudent,
}

/// User-facing assessment of one percentage figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactAssessment {
    /// Severity class, also usable as a styling hook by consumers.
    pub severity: Severity,
    /// Icon shown next to the title.
    pub icon: &'static str,
    /// Short headline, e.g. "Moderada".
    pub title: &'static str,
    /// One-line guidance for the user.
    pub message: &'static str,
}

/// Alert level for the total obligation of an installment plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TotalValueAlert {
    /// Label shown on the "Valor Total" line.
    pub level: &'static str,
    pub severity: Severity,
}

/// One row of an impact table.  The assessment applies to percentages up to
/// and including `max`.
struct ImpactRange {
    max: f64,
    assessment: ImpactAssessment,
}

const fn range(
    max: f64,
    severity: Severity,
    icon: &'static str,
    title: &'static str,
    message: &'static str,
) -> ImpactRange {
    ImpactRange {
        max,
        assessment: ImpactAssessment {
            severity,
            icon,
            title,
            message,
        },
    }
}

/// Breakpoints for purchases paid in full.
const CASH_RANGES: [ImpactRange; 6] = [
    range(5.0, Severity::VerySafe, "🟢", "Muito segura", "Impacto irrelevante"),
    range(10.0, Severity::Safe, "🟢", "Segura", "Compra tranquila"),
    range(20.0, Severity::Moderate, "🟡", "Moderada", "Exige planejamento"),
    range(30.0, Severity::Risky, "🟠", "Arriscada", "Avaliar prioridade"),
    range(50.0, Severity::Imprudent, "🔴", "Imprudente", "Evite se possível"),
    range(
        f64::INFINITY,
        Severity::VeryImprudent,
        "🔴",
        "Muito imprudente",
        "Compromete estabilidade",
    ),
];

/// Breakpoints for the monthly installment of a plan.  Recurring commitments
/// are judged harder than one-off purchases, hence the lower bounds.
const INSTALLMENT_RANGES: [ImpactRange; 6] = [
    range(5.0, Severity::VerySafe, "🟢", "Muito segura", "Cabe com folga"),
    range(10.0, Severity::Safe, "🟢", "Segura", "Sustentável"),
    range(15.0, Severity::Moderate, "🟡", "Moderada", "Exige controle"),
    range(20.0, Severity::Risky, "🟠", "Arriscada", "Reduz margem"),
    range(30.0, Severity::Imprudent, "🔴", "Imprudente", "Alto risco"),
    range(
        f64::INFINITY,
        Severity::VeryImprudent,
        "🔴",
        "Muito imprudente",
        "Endividamento provável",
    ),
];

/// Classifies a percentage of monthly-equivalent income against the table
/// for the given payment mode.
///
/// Lookup is first match in ascending order, with inclusive upper bounds;
/// the final row is unbounded and catches everything beyond the last
/// breakpoint.  A `NaN` percentage compares false against every bound and
/// lands in the final row as well; keeping such values out of the engine is
/// the front door's job, not this function's.
pub fn classify_impact(percentage: f64, mode: PaymentType) -> ImpactAssessment {
    let ranges = match mode {
        PaymentType::Cash => &CASH_RANGES,
        PaymentType::Installment => &INSTALLMENT_RANGES,
    };
    for range in ranges {
        if percentage <= range.max {
            return range.assessment;
        }
    }
    ranges[ranges.len() - 1].assessment
}

/// Rates the total obligation of an installment plan against
/// monthly-equivalent income.  This ladder is independent of the impact
/// tables above and only changes the "Valor Total" line of the report.
pub fn classify_total_value(total_percentage: f64) -> TotalValueAlert {
    if total_percentage <= 20.0 {
        TotalValueAlert {
            level: "Normal",
            severity: Severity::Safe,
        }
    } else if total_percentage <= 30.0 {
        TotalValueAlert {
            level: "Atenção",
            severity: Severity::Moderate,
        }
    } else if total_percentage <= 50.0 {
        TotalValueAlert {
            level: "Risco",
            severity: Severity::Risky,
        }
    } else {
        TotalValueAlert {
            level: "Alto risco",
            severity: Severity::VeryImprudent,
        }
    }
}
