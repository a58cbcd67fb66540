//! `credit_schedule` is a Rust library for generating loan amortization
//! schedules.
//!
//! Given a credit's terms, an interest-rate timeline and a list of
//! out-of-schedule principal adjustments, it deterministically produces the
//! full period-by-period payment schedule and its aggregate totals. Four
//! amortization methods are supported:
//! - **classic-annuity**: fixed rate, level total payment.
//! - **classic-differentiated**: fixed rate, level principal instalment,
//!   declining total payment.
//! - **floating-annuity**: the payment is re-leveled whenever the rate
//!   changes or the principal is adjusted.
//! - **floating-differentiated**: level principal instalment, each period's
//!   interest at that period's time-weighted rate.
//!
//! Interest accrues on actual elapsed days over a 365-day basis. The engine
//! is a pure function of its inputs: no I/O, no shared state, safe to call
//! from any number of threads.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use credit_schedule::{
//!     CreditTerms, Method, RatePoint, RateTimeline, generate_schedule,
//! };
//! use rust_decimal_macros::dec;
//!
//! let terms = CreditTerms {
//!     principal: dec!(10_000_000),
//!     term_months: 36,
//!     start_date: NaiveDate::from_ymd_opt(2023, 7, 14).unwrap(),
//!     method: Method::FloatingDifferentiated,
//!     deferment_months: 6,
//!     payment_day: 20,
//! };
//! let rates = RateTimeline::new(vec![
//!     RatePoint::new(dec!(9.90), NaiveDate::from_ymd_opt(2023, 7, 14).unwrap()),
//!     RatePoint::new(dec!(9.28), NaiveDate::from_ymd_opt(2023, 10, 1).unwrap()),
//! ]);
//!
//! let schedule = generate_schedule(&terms, &rates, &[]).unwrap();
//! assert_eq!(schedule.items.len(), 36);
//! println!("first payment: {:.2}", schedule.items[0].total_due);
//! println!("total interest: {:.2}", schedule.totals.total_interest);
//! ```

mod balance;
mod calendar;
mod error;
mod rates;
mod schedule;
mod strategy;
mod types;

pub use error::{ScheduleError, ScheduleResult};
pub use rates::RateTimeline;
pub use schedule::generate_schedule;
pub use types::{
    CreditTerms, Method, PrincipalAdjustment, RatePoint, Schedule, ScheduleItem, ScheduleTotals,
};
