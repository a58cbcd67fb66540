//! Error types for schedule generation.
//!
//! Every failure is detected before any schedule content is returned:
//! `generate_schedule` is all-or-nothing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors raised during schedule generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The credit principal is zero or negative.
    #[error("invalid principal: {principal}")]
    InvalidPrincipal {
        /// The rejected principal amount.
        principal: Decimal,
    },

    /// The term is zero or does not exceed the deferment period.
    #[error("invalid term: {term_months} months with {deferment_months} months deferment")]
    InvalidTerm {
        /// Total term in months.
        term_months: u32,
        /// Deferment (interest-only) months.
        deferment_months: u32,
    },

    /// The payment day is outside 1..=31.
    #[error("invalid payment day: {day} (expected 1..=31)")]
    InvalidPaymentDay {
        /// The rejected day of month.
        day: u32,
    },

    /// No rate point in the timeline covers the requested date.
    #[error("no applicable rate on {date}")]
    NoApplicableRate {
        /// The date for which a rate was requested.
        date: NaiveDate,
    },

    /// Adjustments plus amortization would drive the balance negative
    /// before the term completes.
    #[error("balance underflow on {date}: outstanding principal would become {balance}")]
    BalanceUnderflow {
        /// Date of the event that caused the underflow.
        date: NaiveDate,
        /// The negative balance that would have resulted.
        balance: Decimal,
    },

    /// Final-period reconciliation cannot zero the balance within the
    /// rounding tolerance. Signals malformed adjustment data.
    #[error("rounding tolerance exceeded: final-period residual {residual}")]
    RoundingToleranceExceeded {
        /// Balance left over when entering the final period.
        residual: Decimal,
    },

    /// An adjustment is dated before the credit start or on/after the
    /// final due date, so it cannot be assigned to any period.
    #[error("adjustment on {date} falls outside the schedule")]
    AdjustmentOutOfRange {
        /// The adjustment's effective date.
        date: NaiveDate,
    },
}
