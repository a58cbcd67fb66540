//! Running outstanding-principal state for one schedule run.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{ScheduleError, ScheduleResult};
use crate::types::PrincipalAdjustment;

/// Residual the final period is allowed to absorb, in currency units.
pub(crate) const ROUNDING_TOLERANCE: Decimal = dec!(0.01);

/// Owns the outstanding principal, applying scheduled amortization and
/// unscheduled adjustments in date order.
///
/// The tracker is local to one `generate_schedule` call; it holds the
/// full-precision balance, never the rounded figures emitted in the items.
#[derive(Debug)]
pub(crate) struct BalanceTracker {
    balance: Decimal,
    adjustments: Vec<PrincipalAdjustment>,
    cursor: usize,
}

impl BalanceTracker {
    /// Starts tracking at the credit principal. Adjustments are sorted by
    /// effective date (stable) so equal-dated adjustments keep input order.
    pub fn new(principal: Decimal, adjustments: &[PrincipalAdjustment]) -> Self {
        let mut adjustments = adjustments.to_vec();
        adjustments.sort_by_key(|a| a.effective_date);
        BalanceTracker {
            balance: principal,
            adjustments,
            cursor: 0,
        }
    }

    /// Current outstanding principal.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Applies every pending adjustment dated strictly before `cutoff`,
    /// in order. Returns whether any adjustment was applied, so the caller
    /// can trigger re-amortization.
    ///
    /// # Errors
    ///
    /// `BalanceUnderflow` if an adjustment would drive the balance below
    /// zero; this is malformed data, never silently clamped.
    pub fn apply_adjustments_before(&mut self, cutoff: NaiveDate) -> ScheduleResult<bool> {
        let mut applied = false;
        while let Some(adj) = self.adjustments.get(self.cursor) {
            if adj.effective_date >= cutoff {
                break;
            }
            let next = self.balance + adj.amount;
            if next < Decimal::ZERO {
                return Err(ScheduleError::BalanceUnderflow {
                    date: adj.effective_date,
                    balance: next,
                });
            }
            self.balance = next;
            self.cursor += 1;
            applied = true;
        }
        Ok(applied)
    }

    /// Reduces the balance by one period's scheduled principal.
    ///
    /// # Errors
    ///
    /// `BalanceUnderflow` if the principal exceeds the balance by more than
    /// the rounding tolerance. The assembler reconciles the final period
    /// before calling, so this only fires on malformed adjustment data.
    pub fn apply_scheduled(&mut self, due_date: NaiveDate, principal: Decimal) -> ScheduleResult<()> {
        let next = self.balance - principal;
        if next < -ROUNDING_TOLERANCE {
            return Err(ScheduleError::BalanceUnderflow {
                date: due_date,
                balance: next,
            });
        }
        self.balance = next;
        Ok(())
    }
}
