//! Data models for GranaCalc.
//!
//! The `models` module defines the serialisable structs and enums that make
//! up the calculator's input and output contract.  An input describes a
//! salary, a work schedule and a purchase; the output carries the derived
//! work time, the income percentages and their risk classifications.
//! Building a [`CalculationInput`] from raw form values is the job of
//! [`crate::validate`]; the engine itself never re-checks its inputs.

use serde::{Deserialize, Serialize};

use crate::impact::{ImpactAssessment, TotalValueAlert};

/// Whether the salary figure is a monthly amount or an hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryType {
    /// `salary` is a fixed amount per month.
    #[default]
    Monthly,
    /// `salary` is the rate for one worked hour.
    Hourly,
}

/// How the purchase is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Paid in full at the time of evaluation.
    #[default]
    Cash,
    /// Paid in recurring fixed installments.
    Installment,
}

/// Validated input for one calculation.
///
/// Instances are meant to come out of [`crate::validate::build`], which
/// guarantees the numeric constraints the engine relies on: positive money
/// amounts, a work schedule inside its bounds, and installment fields that
/// are `Some` exactly when `payment_type` is
/// [`PaymentType::Installment`].  A stray installment field in cash mode is
/// not an error, simply unused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub salary_type: SalaryType,
    pub payment_type: PaymentType,
    /// Monthly amount or per-hour rate depending on `salary_type`.
    pub salary: f64,
    /// Cash price of the item or service.  The installment computation works
    /// on the total obligation instead, but the form collects and validates
    /// this field in both modes.
    pub item_value: f64,
    /// Worked days per week, between 1 and 7.
    pub work_days_per_week: u8,
    /// Worked hours per day, above 0 and at most 24.
    pub hours_per_day: f64,
    /// Value of one installment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_value: Option<f64>,
    /// Number of installments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_count: Option<u32>,
}

/// Work time needed to pay for a purchase, in three units derived from the
/// same base quantity.  There is no independent rounding between them, so
/// `days × hours_per_day ≈ hours` and `weeks × work_days_per_week ≈ days`
/// hold up to floating-point error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkTime {
    /// Hours of work at the effective hourly rate.
    pub hours: f64,
    /// `hours` spread over the daily schedule.
    pub days: f64,
    /// `days` spread over the weekly schedule.
    pub weeks: f64,
}

/// The outcome of one calculation.
///
/// Serializes with the mode-specific fields flattened next to the common
/// ones under a `payment_type` tag, mirroring the flat result record the
/// presentation layer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Effective hourly wage the purchase is measured against.
    pub hourly_rate: f64,
    /// Work time needed to cover the purchase.  In installment mode this is
    /// measured against the total obligation, not one installment.
    pub work_time: WorkTime,
    /// Percentages and classifications, shaped by the payment mode.
    #[serde(flatten)]
    pub breakdown: PaymentBreakdown,
}

/// Mode-specific half of a [`CalculationResult`].
///
/// Two variants keep the "installment fields are present iff installment
/// mode" rule structural instead of a pile of optional fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "payment_type", rename_all = "lowercase")]
pub enum PaymentBreakdown {
    Cash {
        /// Percent of monthly-equivalent income the cash price consumes.
        salary_percentage: f64,
        /// Classification from the cash table.
        impact: ImpactAssessment,
    },
    Installment {
        /// Value of one installment, echoed from the input.
        installment_value: f64,
        /// Number of installments, echoed from the input.
        installment_count: u32,
        /// Total obligation: `installment_value × installment_count`.
        total_value: f64,
        /// Percent of monthly-equivalent income one installment consumes.
        installment_percentage: f64,
        /// Percent of monthly-equivalent income the total obligation
        /// consumes.
        total_percentage: f64,
        /// Classification of the installment percentage, from the
        /// installment table.
        installment_impact: ImpactAssessment,
        /// Alert level for the total obligation.
        total_value_alert: TotalValueAlert,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate;

    fn cash_input() -> CalculationInput {
        CalculationInput {
            salary_type: SalaryType::Monthly,
            payment_type: PaymentType::Cash,
            salary: 3000.0,
            item_value: 500.0,
            work_days_per_week: 5,
            hours_per_day: 8.0,
            installment_value: None,
            installment_count: None,
        }
    }

    #[test]
    fn cash_result_serializes_flat_with_payment_type_tag() {
        let value = serde_json::to_value(calculate(&cash_input())).unwrap();
        assert_eq!(value["payment_type"], "cash");
        assert!(value["hourly_rate"].is_f64());
        assert!(value["work_time"]["hours"].is_f64());
        assert!(value["salary_percentage"].is_f64());
        assert_eq!(value["impact"]["title"], "Moderada");
        // Installment fields must not leak into a cash result.
        assert!(value.get("total_value").is_none());
        assert!(value.get("installment_percentage").is_none());
    }

    #[test]
    fn installment_result_serializes_the_full_plan() {
        let input = CalculationInput {
            payment_type: PaymentType::Installment,
            installment_value: Some(300.0),
            installment_count: Some(10),
            ..cash_input()
        };
        let value = serde_json::to_value(calculate(&input)).unwrap();
        assert_eq!(value["payment_type"], "installment");
        assert_eq!(value["installment_value"], 300.0);
        assert_eq!(value["installment_count"], 10);
        assert_eq!(value["total_value"], 3000.0);
        assert_eq!(value["total_value_alert"]["level"], "Alto risco");
        assert!(value.get("salary_percentage").is_none());
    }

    #[test]
    fn input_round_trips_through_json() {
        let input = cash_input();
        let json = serde_json::to_string(&input).unwrap();
        let back: CalculationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
        // Absent installment fields stay absent on the wire.
        assert!(!json.contains("installment_value"));
    }

    #[test]
    fn enums_use_lowercase_wire_names() {
        assert_eq!(serde_json::to_value(SalaryType::Hourly).unwrap(), "hourly");
        assert_eq!(
            serde_json::to_value(PaymentType::Installment).unwrap(),
            "installment"
        );
    }
}
