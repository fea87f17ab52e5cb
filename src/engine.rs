//! Purchase time-cost computation engine.
//!
//! The `engine` module is responsible for turning a [`CalculationInput`]
//! into a [`CalculationResult`].  Everything here is a pure function over
//! plain numbers: no I/O, no state, and no defensive validation, since the
//! [`crate::validate`] front door guarantees the input contract.  Hourly
//! and monthly salaries are normalized through a single weeks-per-month
//! constant so the two conversion directions can never drift apart.

use crate::impact::{classify_impact, classify_total_value};
use crate::models::{
    CalculationInput, CalculationResult, PaymentBreakdown, PaymentType, SalaryType, WorkTime,
};

/// Average number of weeks in a month used to normalize monthly salaries.
/// Fixed, not configurable.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Estimated worked hours in one month under the given schedule.
pub fn monthly_hours(work_days_per_week: u8, hours_per_day: f64) -> f64 {
    f64::from(work_days_per_week) * hours_per_day * WEEKS_PER_MONTH
}

/// Effective hourly wage.
///
/// An hourly salary is returned unchanged; a monthly salary is divided by
/// the estimated monthly hours.  Positive whenever the salary and schedule
/// are positive, which validation guarantees.
pub fn hourly_rate(
    salary: f64,
    salary_type: SalaryType,
    work_days_per_week: u8,
    hours_per_day: f64,
) -> f64 {
    match salary_type {
        SalaryType::Hourly => salary,
        SalaryType::Monthly => salary / monthly_hours(work_days_per_week, hours_per_day),
    }
}

/// Work time needed to earn `value` at `hourly_rate`, expressed in hours,
/// days and weeks.  Days and weeks are plain divisions of the hour figure,
/// never rounded here; presentation decides how to round.
pub fn work_time(
    value: f64,
    hourly_rate: f64,
    work_days_per_week: u8,
    hours_per_day: f64,
) -> WorkTime {
    let hours = value / hourly_rate;
    let days = hours / hours_per_day;
    let weeks = days / f64::from(work_days_per_week);
    WorkTime { hours, days, weeks }
}

/// Salary normalized to a monthly figure regardless of the input unit.
pub fn monthly_equivalent(
    salary: f64,
    salary_type: SalaryType,
    work_days_per_week: u8,
    hours_per_day: f64,
) -> f64 {
    match salary_type {
        SalaryType::Monthly => salary,
        SalaryType::Hourly => salary * monthly_hours(work_days_per_week, hours_per_day),
    }
}

/// Percent of monthly-equivalent income that `value` consumes.
pub fn salary_percentage(
    value: f64,
    salary: f64,
    salary_type: SalaryType,
    work_days_per_week: u8,
    hours_per_day: f64,
) -> f64 {
    let monthly = monthly_equivalent(salary, salary_type, work_days_per_week, hours_per_day);
    (value / monthly) * 100.0
}

/// Computes the result for a purchase paid in full.
pub fn compute_cash(input: &CalculationInput) -> CalculationResult {
    let rate = hourly_rate(
        input.salary,
        input.salary_type,
        input.work_days_per_week,
        input.hours_per_day,
    );
    let percentage = salary_percentage(
        input.item_value,
        input.salary,
        input.salary_type,
        input.work_days_per_week,
        input.hours_per_day,
    );
    CalculationResult {
        hourly_rate: rate,
        work_time: work_time(
            input.item_value,
            rate,
            input.work_days_per_week,
            input.hours_per_day,
        ),
        breakdown: PaymentBreakdown::Cash {
            salary_percentage: percentage,
            impact: classify_impact(percentage, PaymentType::Cash),
        },
    }
}

/// Computes the result for a purchase paid in installments.
///
/// Work time is measured against the total obligation, not one monthly
/// installment.  Plan fields missing in breach of the input contract
/// degrade to zero rather than aborting.
pub fn compute_installment(input: &CalculationInput) -> CalculationResult {
    let installment_value = input.installment_value.unwrap_or(0.0);
    let installment_count = input.installment_count.unwrap_or(0);
    let total_value = installment_value * f64::from(installment_count);

    let rate = hourly_rate(
        input.salary,
        input.salary_type,
        input.work_days_per_week,
        input.hours_per_day,
    );
    let installment_percentage = salary_percentage(
        installment_value,
        input.salary,
        input.salary_type,
        input.work_days_per_week,
        input.hours_per_day,
    );
    let total_percentage = salary_percentage(
        total_value,
        input.salary,
        input.salary_type,
        input.work_days_per_week,
        input.hours_per_day,
    );
    CalculationResult {
        hourly_rate: rate,
        work_time: work_time(total_value, rate, input.work_days_per_week, input.hours_per_day),
        breakdown: PaymentBreakdown::Installment {
            installment_value,
            installment_count,
            total_value,
            installment_percentage,
            total_percentage,
            installment_impact: classify_impact(installment_percentage, PaymentType::Installment),
            total_value_alert: classify_total_value(total_percentage),
        },
    }
}

/// Runs the calculation appropriate for the input's payment mode.
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    match input.payment_type {
        PaymentType::Cash => compute_cash(input),
        PaymentType::Installment => compute_installment(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::Severity;

    const EPS: f64 = 1e-9;

    fn monthly_cash_input() -> CalculationInput {
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
    fn hourly_salary_passes_through_unchanged() {
        assert_eq!(hourly_rate(25.0, SalaryType::Hourly, 5, 8.0), 25.0);
        assert_eq!(hourly_rate(25.0, SalaryType::Hourly, 6, 4.0), 25.0);
        assert_eq!(hourly_rate(17.99, SalaryType::Hourly, 1, 24.0), 17.99);
    }

    #[test]
    fn monthly_salary_divides_by_monthly_hours() {
        let rate = hourly_rate(3000.0, SalaryType::Monthly, 5, 8.0);
        assert!((rate - 3000.0 / 173.2).abs() < EPS);
    }

    #[test]
    fn work_time_units_come_from_one_base_quantity() {
        let time = work_time(500.0, 17.32, 5, 8.0);
        assert!((time.days * 8.0 - time.hours).abs() < EPS);
        assert!((time.weeks * 5.0 - time.days).abs() < EPS);
    }

    #[test]
    fn monthly_equivalent_is_identity_for_monthly_salaries() {
        assert_eq!(monthly_equivalent(3000.0, SalaryType::Monthly, 3, 6.0), 3000.0);
    }

    #[test]
    fn monthly_equivalent_scales_hourly_salaries_up() {
        let monthly = monthly_equivalent(25.0, SalaryType::Hourly, 5, 8.0);
        assert!((monthly - 4330.0).abs() < EPS);
    }

    #[test]
    fn cash_scenario_monthly_salary() {
        // R$ 3000 per month, 5 days of 8 hours, buying a R$ 500 item.
        let result = compute_cash(&monthly_cash_input());
        assert!((result.hourly_rate - 17.321016166281755).abs() < EPS);
        assert!((result.work_time.hours - 28.866666666666667).abs() < EPS);
        assert!((result.work_time.days - 3.6083333333333334).abs() < EPS);
        assert!((result.work_time.weeks - 0.7216666666666667).abs() < EPS);
        match result.breakdown {
            PaymentBreakdown::Cash {
                salary_percentage,
                impact,
            } => {
                assert!((salary_percentage - 50.0 / 3.0).abs() < EPS);
                assert_eq!(impact.severity, Severity::Moderate);
                assert_eq!(impact.title, "Moderada");
            }
            PaymentBreakdown::Installment { .. } => panic!("expected a cash breakdown"),
        }
    }

    #[test]
    fn cash_scenario_hourly_salary() {
        // R$ 25 per hour buying a R$ 1000 item: the rate is untouched and
        // the hour figure is an exact division.
        let input = CalculationInput {
            salary_type: SalaryType::Hourly,
            salary: 25.0,
            item_value: 1000.0,
            ..monthly_cash_input()
        };
        let result = compute_cash(&input);
        assert_eq!(result.hourly_rate, 25.0);
        assert_eq!(result.work_time.hours, 40.0);
        match result.breakdown {
            PaymentBreakdown::Cash {
                salary_percentage, ..
            } => {
                // 1000 out of 25 * 173.2 = 4330 per month.
                assert!((salary_percentage - 100_000.0 / 4330.0).abs() < EPS);
            }
            PaymentBreakdown::Installment { .. } => panic!("expected a cash breakdown"),
        }
    }

    #[test]
    fn installment_scenario_ten_of_three_hundred() {
        let input = CalculationInput {
            payment_type: PaymentType::Installment,
            installment_value: Some(300.0),
            installment_count: Some(10),
            ..monthly_cash_input()
        };
        let result = compute_installment(&input);
        // Work time covers the whole R$ 3000 obligation, a full month of
        // work, not the R$ 500 item price.
        assert!((result.work_time.hours - 173.2).abs() < EPS);
        match result.breakdown {
            PaymentBreakdown::Installment {
                total_value,
                installment_percentage,
                total_percentage,
                installment_impact,
                total_value_alert,
                ..
            } => {
                assert_eq!(total_value, 3000.0);
                assert!((installment_percentage - 10.0).abs() < EPS);
                assert_eq!(installment_impact.title, "Segura");
                assert!((total_percentage - 100.0).abs() < EPS);
                assert_eq!(total_value_alert.level, "Alto risco");
                assert_eq!(total_value_alert.severity, Severity::VeryImprudent);
            }
            PaymentBreakdown::Cash { .. } => panic!("expected an installment breakdown"),
        }
    }

    #[test]
    fn calculate_dispatches_on_payment_type() {
        let cash = calculate(&monthly_cash_input());
        assert!(matches!(cash.breakdown, PaymentBreakdown::Cash { .. }));

        let input = CalculationInput {
            payment_type: PaymentType::Installment,
            installment_value: Some(100.0),
            installment_count: Some(3),
            ..monthly_cash_input()
        };
        let plan = calculate(&input);
        assert!(matches!(plan.breakdown, PaymentBreakdown::Installment { .. }));
    }

    #[test]
    fn calculate_is_deterministic() {
        let input = monthly_cash_input();
        assert_eq!(calculate(&input), calculate(&input));
    }

    #[test]
    fn cash_mode_ignores_stray_installment_fields() {
        let input = CalculationInput {
            installment_value: Some(999.0),
            installment_count: Some(99),
            ..monthly_cash_input()
        };
        assert_eq!(calculate(&input), calculate(&monthly_cash_input()));
    }

    #[test]
    fn missing_plan_fields_degrade_to_zero() {
        // Contract breach, not reachable through validate::build.
        let input = CalculationInput {
            payment_type: PaymentType::Installment,
            ..monthly_cash_input()
        };
        let result = compute_installment(&input);
        assert_eq!(result.work_time.hours, 0.0);
        match result.breakdown {
            PaymentBreakdown::Installment {
                total_value,
                installment_percentage,
                ..
            } => {
                assert_eq!(total_value, 0.0);
                assert_eq!(installment_percentage, 0.0);
            }
            PaymentBreakdown::Cash { .. } => panic!("expected an installment breakdown"),
        }
    }
}
