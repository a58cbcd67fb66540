//! Per-period principal/interest split for the four amortization methods.
//!
//! The four methods collapse into two payment shapes (level total payment
//! vs. level principal instalment); floating-ness decides which rate the
//! assembler feeds in and whether a rate change re-levels the annuity.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::types::Method;

const DAYS_PER_YEAR: Decimal = dec!(365);

/// Interest accrued on `balance` at `annual_percent` over `days` actual
/// days, on a 365-day basis.
pub(crate) fn accrue_interest(balance: Decimal, annual_percent: Decimal, days: i64) -> Decimal {
    balance * (annual_percent / dec!(100)) * (Decimal::from(days) / DAYS_PER_YEAR)
}

/// Level payment of the standard annuity formula
/// `PMT = B * i(1 + i)^n / ((1 + i)^n - 1)` with nominal monthly rate
/// `i = annual_percent / 1200`. A zero rate degenerates to `B / n`.
fn annuity_payment(balance: Decimal, annual_percent: Decimal, periods: u32) -> Decimal {
    let monthly_rate = annual_percent / dec!(1200);
    if monthly_rate.is_zero() {
        return balance / Decimal::from(periods);
    }
    let compounded = (dec!(1) + monthly_rate).powu(periods.into());
    balance * (monthly_rate * compounded) / (compounded - dec!(1))
}

/// Tagged-variant amortization strategy, holding the current solve state.
///
/// The solve is lazy: state is cleared on an adjustment (and, for floating
/// annuities, invalidated by a rate change) and re-solved at the next
/// amortizing period from the then-current balance and remaining term.
/// A re-solve only looks forward; emitted periods are never revised.
#[derive(Debug)]
pub(crate) enum Strategy {
    /// Level total payment; principal is the payment minus interest.
    Annuity {
        /// Payment of the current leveling, along with the rate it was
        /// solved at. `None` until amortization begins or after an
        /// adjustment.
        solve: Option<(Decimal, Decimal)>,
        /// Re-solve when the period rate moves off the solved rate.
        releveled_by_rate: bool,
    },
    /// Level principal instalment; independent of the rate.
    Differentiated {
        /// Instalment of the current split, `None` until (re)computed.
        instalment: Option<Decimal>,
    },
}

impl Strategy {
    pub fn for_method(method: Method) -> Self {
        if method.is_annuity() {
            Strategy::Annuity {
                solve: None,
                releveled_by_rate: method.is_floating(),
            }
        } else {
            Strategy::Differentiated { instalment: None }
        }
    }

    /// Invalidates the current solve after a principal adjustment.
    pub fn on_adjustment(&mut self) {
        match self {
            Strategy::Annuity { solve, .. } => *solve = None,
            Strategy::Differentiated { instalment } => *instalment = None,
        }
    }

    /// Principal due for one amortizing period.
    ///
    /// `balance` is the balance entering the period, `annual_percent` the
    /// period's applicable rate, `interest` the already-accrued interest for
    /// the period, and `remaining_periods` counts this period and all that
    /// follow it.
    pub fn principal_due(
        &mut self,
        balance: Decimal,
        annual_percent: Decimal,
        interest: Decimal,
        remaining_periods: u32,
    ) -> Decimal {
        match self {
            Strategy::Annuity {
                solve,
                releveled_by_rate,
            } => {
                let payment = match solve {
                    Some((payment, solved_rate))
                        if !(*releveled_by_rate && *solved_rate != annual_percent) =>
                    {
                        *payment
                    }
                    _ => {
                        let payment = annuity_payment(balance, annual_percent, remaining_periods);
                        *solve = Some((payment, annual_percent));
                        payment
                    }
                };
                payment - interest
            }
            Strategy::Differentiated { instalment } => *instalment.get_or_insert_with(|| {
                balance / Decimal::from(remaining_periods)
            }),
        }
    }
}
