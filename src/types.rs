//! Input and output data types for schedule generation.
//!
//! All types are plain data: the surrounding application sources them from
//! storage and serializes the results to its API or report consumers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The amortization method of a credit contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Fixed rate, level total payment across all amortizing periods.
    ClassicAnnuity,
    /// Fixed rate, level principal instalment; total payment declines.
    ClassicDifferentiated,
    /// Floating rate; the payment is re-leveled whenever the period rate
    /// changes or the balance is adjusted.
    FloatingAnnuity,
    /// Floating rate, level principal instalment; each period's interest
    /// uses that period's own weighted-average rate.
    FloatingDifferentiated,
}

impl Method {
    /// Whether the method follows the rate timeline over the loan's life.
    ///
    /// Classic methods freeze the rate in effect on the start date and
    /// ignore later rate points.
    pub fn is_floating(&self) -> bool {
        matches!(self, Method::FloatingAnnuity | Method::FloatingDifferentiated)
    }

    /// Whether the method levels the total payment (as opposed to the
    /// principal instalment).
    pub fn is_annuity(&self) -> bool {
        matches!(self, Method::ClassicAnnuity | Method::FloatingAnnuity)
    }
}

/// The terms of one credit contract, immutable for one schedule run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditTerms {
    /// The principal amount of the loan. Must be positive.
    pub principal: Decimal,
    /// The total number of monthly periods.
    pub term_months: u32,
    /// The date the credit is issued; interest accrues from this date.
    pub start_date: NaiveDate,
    /// The amortization method.
    pub method: Method,
    /// Initial interest-only months during which no principal is due.
    /// Must be strictly less than `term_months`.
    pub deferment_months: u32,
    /// Due day of month, 1..=31. Clamped to the last day of short months.
    pub payment_day: u32,
}

/// An annual interest rate taking effect on a given date (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    /// Annual rate as a percentage, e.g. `9.90` meaning 9.90%.
    pub annual_percent: Decimal,
    /// First date on which this rate applies.
    pub effective_date: NaiveDate,
}

impl RatePoint {
    pub fn new(annual_percent: Decimal, effective_date: NaiveDate) -> Self {
        RatePoint {
            annual_percent,
            effective_date,
        }
    }
}

/// An out-of-schedule change to the outstanding principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrincipalAdjustment {
    /// Signed amount: positive increases the outstanding principal,
    /// negative is an extraordinary repayment.
    pub amount: Decimal,
    /// The date the adjustment takes effect.
    pub effective_date: NaiveDate,
    /// Free-form annotation, carried through untouched.
    pub note: Option<String>,
}

/// One period of the generated schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// 1-based period number, `1..=term_months`.
    pub period_number: u32,
    /// The date this period's payment is due.
    pub due_date: NaiveDate,
    /// Principal portion of the payment.
    pub principal_due: Decimal,
    /// Interest portion of the payment.
    pub interest_due: Decimal,
    /// `principal_due + interest_due`.
    pub total_due: Decimal,
    /// Outstanding principal after this period's principal is applied.
    pub remaining_balance: Decimal,
    /// Time-weighted annual rate in effect during this period.
    pub average_rate: Decimal,
}

/// Aggregate totals over a whole schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTotals {
    /// Sum of `total_due` across all periods.
    pub total_payments: Decimal,
    /// Sum of `interest_due` across all periods.
    pub total_interest: Decimal,
    /// `total_payments - principal`.
    pub overpayment: Decimal,
}

/// The full result of one schedule run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// One item per period, ordered by period number.
    pub items: Vec<ScheduleItem>,
    /// Aggregate totals over `items`.
    pub totals: ScheduleTotals,
}
