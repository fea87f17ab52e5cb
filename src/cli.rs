//! Command line front end.
//!
//! Plays the role of the form in the original calculator: it collects the
//! same inputs as flags, funnels them through [`crate::validate::build`],
//! runs the engine and prints either the text report or the JSON result.

use anyhow::Result;
use clap::builder::PossibleValue;
use clap::{Parser, ValueEnum};

use crate::models::{PaymentType, SalaryType};
use crate::validate::{self, RawInput};
use crate::{engine, report};

#[derive(Parser, Debug)]
#[command(
    name = "granacalc",
    version,
    about = "Shows how much of your working time a purchase really costs"
)]
struct Args {
    /// Monthly salary, or hourly rate with `--salary-type hourly` (R$)
    #[arg(long)]
    salary: Option<f64>,

    /// Whether the salary is a monthly amount or an hourly rate
    #[arg(long, value_enum, default_value = "monthly")]
    salary_type: SalaryType,

    /// Cash purchase or installment plan
    #[arg(long, value_enum, default_value = "cash")]
    payment_type: PaymentType,

    /// Price of the item or service (R$)
    #[arg(long)]
    item_value: Option<f64>,

    /// Worked days per week
    #[arg(long, default_value_t = 5)]
    work_days: u32,

    /// Worked hours per day
    #[arg(long, default_value_t = 8.0)]
    hours_per_day: f64,

    /// Value of one installment (R$), installment mode only
    #[arg(long)]
    installment_value: Option<f64>,

    /// Number of installments, installment mode only
    #[arg(long)]
    installment_count: Option<u32>,

    /// Print the raw result as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

impl Args {
    fn raw_input(&self) -> RawInput {
        RawInput {
            salary_type: self.salary_type,
            payment_type: self.payment_type,
            salary: self.salary,
            item_value: self.item_value,
            work_days_per_week: Some(self.work_days),
            hours_per_day: Some(self.hours_per_day),
            installment_value: self.installment_value,
            installment_count: self.installment_count,
        }
    }
}

// Flag values mirror the serde wire names, so a JSON result can be fed
// back as arguments without translation.

impl ValueEnum for SalaryType {
    fn value_variants<'a>() -> &'a [Self] {
        &[SalaryType::Monthly, SalaryType::Hourly]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            SalaryType::Monthly => PossibleValue::new("monthly"),
            SalaryType::Hourly => PossibleValue::new("hourly"),
        })
    }
}

impl ValueEnum for PaymentType {
    fn value_variants<'a>() -> &'a [Self] {
        &[PaymentType::Cash, PaymentType::Installment]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            PaymentType::Cash => PossibleValue::new("cash"),
            PaymentType::Installment => PossibleValue::new("installment"),
        })
    }
}

/// Parses the command line, validates the form and prints the result.
///
/// Validation failures carry the same alert strings the original form
/// shows; they bubble up so the binary can exit non-zero.
pub fn run() -> Result<()> {
    let args = Args::parse();
    let input = validate::build(args.raw_input())?;
    let result = engine::calculate(&input);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", report::render(&input, &result));
    }
    Ok(())
}
