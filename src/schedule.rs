//! Schedule assembly: one linear pass over the periods.

use rust_decimal::Decimal;

use crate::balance::{BalanceTracker, ROUNDING_TOLERANCE};
use crate::calendar::due_dates;
use crate::error::{ScheduleError, ScheduleResult};
use crate::rates::RateTimeline;
use crate::strategy::{Strategy, accrue_interest};
use crate::types::{CreditTerms, PrincipalAdjustment, Schedule, ScheduleItem, ScheduleTotals};

/// Generates the full period-by-period payment schedule and its totals.
///
/// A single forward pass: each period applies the adjustments that fall
/// into it, resolves the applicable rate, splits the payment via the
/// selected method and feeds the principal back into the running balance.
/// Re-leveling after a rate change or adjustment only looks forward;
/// already-emitted periods are never revised.
///
/// Emitted money fields are rounded to 2 decimal places and rates to 4;
/// the running balance is kept at full precision internally. The final
/// period's principal absorbs the accumulated rounding and day-count
/// residual so the last `remaining_balance` is exactly zero.
///
/// An adjustment effective exactly on a due date belongs to the following
/// period: period k covers adjustments dated in `[due(k-1), due(k))`, with
/// the start date standing in for `due(0)`.
///
/// # Errors
///
/// Fails fast with the taxonomy of [`ScheduleError`]; no partial schedule
/// is ever returned.
pub fn generate_schedule(
    terms: &CreditTerms,
    rates: &RateTimeline,
    adjustments: &[PrincipalAdjustment],
) -> ScheduleResult<Schedule> {
    validate(terms)?;

    let due = due_dates(terms.start_date, terms.payment_day, terms.term_months)?;
    let final_due = due[due.len() - 1];
    for adj in adjustments {
        if adj.effective_date < terms.start_date || adj.effective_date >= final_due {
            return Err(ScheduleError::AdjustmentOutOfRange {
                date: adj.effective_date,
            });
        }
    }

    // Classic methods freeze the rate in effect on the start date; later
    // rate points are ignored.
    let fixed_rate = if terms.method.is_floating() {
        None
    } else {
        Some(rates.rate_at(terms.start_date)?)
    };

    let mut tracker = BalanceTracker::new(terms.principal, adjustments);
    let mut strategy = Strategy::for_method(terms.method);
    let mut items = Vec::with_capacity(terms.term_months as usize);
    let mut period_start = terms.start_date;

    for (idx, &due_date) in due.iter().enumerate() {
        let period_number = idx as u32 + 1;

        if tracker.apply_adjustments_before(due_date)? {
            strategy.on_adjustment();
        }

        let rate = match fixed_rate {
            Some(rate) => rate,
            None => rates.weighted_average_rate(period_start, due_date)?,
        };
        let days = (due_date - period_start).num_days();
        let balance = tracker.balance();
        let interest = accrue_interest(balance, rate, days);

        let principal = if period_number <= terms.deferment_months {
            Decimal::ZERO
        } else if period_number == terms.term_months {
            // Final-period reconciliation: the whole remaining balance
            // becomes principal, zeroing the loan.
            if balance < -ROUNDING_TOLERANCE {
                return Err(ScheduleError::RoundingToleranceExceeded { residual: balance });
            }
            balance
        } else {
            let remaining = terms.term_months - period_number + 1;
            strategy.principal_due(balance, rate, interest, remaining)
        };

        tracker.apply_scheduled(due_date, principal)?;

        let principal_due = principal.round_dp(2);
        let interest_due = interest.round_dp(2);
        items.push(ScheduleItem {
            period_number,
            due_date,
            principal_due,
            interest_due,
            total_due: principal_due + interest_due,
            remaining_balance: tracker.balance().round_dp(2),
            average_rate: rate.round_dp(4),
        });
        period_start = due_date;
    }

    let total_payments: Decimal = items.iter().map(|item| item.total_due).sum();
    let total_interest: Decimal = items.iter().map(|item| item.interest_due).sum();
    let totals = ScheduleTotals {
        total_payments,
        total_interest,
        overpayment: total_payments - terms.principal,
    };

    Ok(Schedule { items, totals })
}

fn validate(terms: &CreditTerms) -> ScheduleResult<()> {
    if terms.principal <= Decimal::ZERO {
        return Err(ScheduleError::InvalidPrincipal {
            principal: terms.principal,
        });
    }
    if terms.term_months == 0 || terms.term_months <= terms.deferment_months {
        return Err(ScheduleError::InvalidTerm {
            term_months: terms.term_months,
            deferment_months: terms.deferment_months,
        });
    }
    Ok(())
}
