//! Interest-rate timeline: point-in-time lookup and time-weighted averages.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{ScheduleError, ScheduleResult};
use crate::types::RatePoint;

/// An immutable, date-ordered sequence of rate points.
///
/// Lookup is a binary search over the sorted points; the timeline is built
/// once per schedule run and never mutated, so repeated calls with different
/// timelines never share state.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use credit_schedule::{RatePoint, RateTimeline};
/// use rust_decimal_macros::dec;
///
/// let timeline = RateTimeline::new(vec![
///     RatePoint::new(dec!(9.90), NaiveDate::from_ymd_opt(2023, 7, 14).unwrap()),
///     RatePoint::new(dec!(9.28), NaiveDate::from_ymd_opt(2023, 10, 1).unwrap()),
/// ]);
/// let rate = timeline.rate_at(NaiveDate::from_ymd_opt(2023, 11, 5).unwrap()).unwrap();
/// assert_eq!(rate, dec!(9.28));
/// ```
#[derive(Debug, Clone)]
pub struct RateTimeline {
    points: Vec<RatePoint>,
}

impl RateTimeline {
    /// Builds a timeline, sorting the points by effective date.
    ///
    /// The sort is stable: of two points sharing an effective date, the
    /// later one in the input wins lookups on that date.
    pub fn new(mut points: Vec<RatePoint>) -> Self {
        points.sort_by_key(|p| p.effective_date);
        RateTimeline { points }
    }

    /// Number of rate points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the timeline holds no points at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the annual rate of the latest point whose effective date is
    /// on or before `date`.
    ///
    /// # Errors
    ///
    /// `NoApplicableRate` if every point takes effect after `date`.
    pub fn rate_at(&self, date: NaiveDate) -> ScheduleResult<Decimal> {
        let idx = self.points.partition_point(|p| p.effective_date <= date);
        if idx == 0 {
            return Err(ScheduleError::NoApplicableRate { date });
        }
        Ok(self.points[idx - 1].annual_percent)
    }

    /// Day-count-weighted mean annual rate over the half-open interval
    /// `[start, end)`.
    ///
    /// The interval is split at every rate boundary strictly inside it and
    /// each sub-interval's rate is weighted by its day count. A floating
    /// rate changing mid-period must blend into the period's interest; the
    /// rate at either endpoint alone would be wrong.
    ///
    /// A zero-length interval degenerates to `rate_at(start)`.
    pub fn weighted_average_rate(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ScheduleResult<Decimal> {
        let total_days = (end - start).num_days();
        if total_days <= 0 {
            return self.rate_at(start);
        }

        let mut weighted = Decimal::ZERO;
        let mut segment_start = start;
        for point in &self.points {
            if point.effective_date <= segment_start {
                continue;
            }
            if point.effective_date >= end {
                break;
            }
            let days = (point.effective_date - segment_start).num_days();
            weighted += self.rate_at(segment_start)? * Decimal::from(days);
            segment_start = point.effective_date;
        }
        let days = (end - segment_start).num_days();
        weighted += self.rate_at(segment_start)? * Decimal::from(days);

        Ok(weighted / Decimal::from(total_days))
    }
}
