//! GranaCalc library crate.
//!
//! This crate exposes the purchase time-cost calculator as reusable
//! modules.  External applications may depend on the `granacalc` crate,
//! build a [`models::CalculationInput`] through `validate::build` and call
//! into `engine::calculate` directly, or drive the whole command line flow
//! via `cli::run`.

pub mod cli;
pub mod engine;
pub mod impact;
pub mod models;
pub mod report;
pub mod validate;
