//! Input validation.
//!
//! The engine never checks its inputs, so this module is the single front
//! door that turns raw form values into a typed
//! [`CalculationInput`].  Checks run in the order the original form lays
//! the fields out and stop at the first violation; each failure carries
//! one of the fixed user-facing alert strings.

use thiserror::Error;

use crate::models::{CalculationInput, PaymentType, SalaryType};

/// Form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Salary,
    ItemValue,
    WorkDays,
    HoursPerDay,
    InstallmentValue,
    InstallmentCount,
}

impl Field {
    /// The alert shown for this field, verbatim from the form.
    fn alert(self) -> &'static str {
        match self {
            Field::Salary => "Por favor, informe um salário válido.",
            Field::ItemValue => "Por favor, informe um valor válido para o bem/serviço.",
            Field::WorkDays => "Por favor, informe dias de trabalho entre 1 e 7.",
            Field::HoursPerDay => "Por favor, informe horas por dia entre 1 e 24.",
            Field::InstallmentValue => "Por favor, informe um valor válido para a parcela.",
            Field::InstallmentCount => "Por favor, informe um número válido de parcelas.",
        }
    }
}

/// Why an input was rejected.
///
/// Missing and non-positive values surface the same per-field alert; the
/// variants stay distinct so callers can still react to the cause.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was not supplied.
    #[error("{}", .0.alert())]
    MissingValue(Field),
    /// A money amount was zero, negative or not a number.
    #[error("{}", .0.alert())]
    NonPositiveValue(Field),
    /// A schedule field fell outside its allowed range.
    #[error("{}", .0.alert())]
    OutOfRangeSchedule(Field),
    /// An installment field was absent or invalid in installment mode.
    #[error("{}", .0.alert())]
    MissingInstallmentFields(Field),
}

/// Raw form values as submitted, before any validation.  `None` models a
/// field the user left empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawInput {
    pub salary_type: SalaryType,
    pub payment_type: PaymentType,
    pub salary: Option<f64>,
    pub item_value: Option<f64>,
    pub work_days_per_week: Option<u32>,
    pub hours_per_day: Option<f64>,
    pub installment_value: Option<f64>,
    pub installment_count: Option<u32>,
}

fn require_positive(value: Option<f64>, field: Field) -> Result<f64, ValidationError> {
    match value {
        None => Err(ValidationError::MissingValue(field)),
        Some(v) if v > 0.0 => Ok(v),
        Some(_) => Err(ValidationError::NonPositiveValue(field)),
    }
}

/// Validates `raw` and builds the typed engine input.
///
/// The item value is required in both payment modes; the installment pair
/// is required only in installment mode and dropped entirely in cash mode,
/// where stray values are not an error.
pub fn build(raw: RawInput) -> Result<CalculationInput, ValidationError> {
    let salary = require_positive(raw.salary, Field::Salary)?;
    let item_value = require_positive(raw.item_value, Field::ItemValue)?;

    let work_days = raw
        .work_days_per_week
        .ok_or(ValidationError::MissingValue(Field::WorkDays))?;
    if !(1..=7).contains(&work_days) {
        return Err(ValidationError::OutOfRangeSchedule(Field::WorkDays));
    }

    let hours_per_day = raw
        .hours_per_day
        .ok_or(ValidationError::MissingValue(Field::HoursPerDay))?;
    if !(hours_per_day > 0.0 && hours_per_day <= 24.0) {
        return Err(ValidationError::OutOfRangeSchedule(Field::HoursPerDay));
    }

    let (installment_value, installment_count) = match raw.payment_type {
        PaymentType::Cash => (None, None),
        PaymentType::Installment => {
            let value = match raw.installment_value {
                Some(v) if v > 0.0 => v,
                _ => {
                    return Err(ValidationError::MissingInstallmentFields(
                        Field::InstallmentValue,
                    ))
                }
            };
            let count = match raw.installment_count {
                Some(n) if n > 0 => n,
                _ => {
                    return Err(ValidationError::MissingInstallmentFields(
                        Field::InstallmentCount,
                    ))
                }
            };
            (Some(value), Some(count))
        }
    };

    Ok(CalculationInput {
        salary_type: raw.salary_type,
        payment_type: raw.payment_type,
        salary,
        item_value,
        work_days_per_week: work_days as u8,
        hours_per_day,
        installment_value,
        installment_count,
    })
}
