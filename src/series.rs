//! Point-in-time projections for charting.
//!
//! A series is a lazy, finite iterator over `(period, value)` pairs. It keeps
//! no state beyond its position, so cloning it (or building it again from the
//! same inputs) replays the same values.

use std::iter::FusedIterator;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult, OrOverflow};
use crate::growth::{SipFactors, check_lump_sum, compound_whole_years};
use crate::types::{Money, Rate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Monthly,
    Yearly,
}

impl Granularity {
    pub fn months_per_period(self) -> u32 {
        match self {
            Granularity::Monthly => 1,
            Granularity::Yearly => 12,
        }
    }

    /// Whole periods in a horizon. A yearly series over 30 months has 2 points.
    pub fn periods_in(self, months: u32) -> u32 {
        months / self.months_per_period()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// 1-based period index (month or year, depending on the series).
    pub period: u32,
    pub value: Money,
}

#[derive(Debug, Clone)]
pub struct GrowthSeries<F> {
    value_at: F,
    next: u32,
    remaining: u32,
}

/// Builds a series that evaluates `value_at(period)` for each period in
/// `1..=periods`, on demand.
pub fn produce_growth_series<F>(value_at: F, periods: u32) -> GrowthSeries<F>
where
    F: Fn(u32) -> FinanceResult<Money>,
{
    GrowthSeries {
        value_at,
        next: 1,
        remaining: periods,
    }
}

impl<F> Iterator for GrowthSeries<F>
where
    F: Fn(u32) -> FinanceResult<Money>,
{
    type Item = FinanceResult<SeriesPoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let period = self.next;
        self.remaining -= 1;
        // Stays at u32::MAX once the last period has been handed out.
        self.next = self.next.saturating_add(1);
        Some((self.value_at)(period).map(|value| SeriesPoint { period, value }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl<F> ExactSizeIterator for GrowthSeries<F> where F: Fn(u32) -> FinanceResult<Money> {}

impl<F> FusedIterator for GrowthSeries<F> where F: Fn(u32) -> FinanceResult<Money> {}

/// SIP corpus after each month or year of contributions.
pub fn sip_series(
    monthly_contribution: Money,
    monthly_rate: Rate,
    months: u32,
    granularity: Granularity,
) -> FinanceResult<GrowthSeries<impl Fn(u32) -> FinanceResult<Money> + Clone>> {
    if months == 0 {
        return Err(FinanceError::invalid("months", "must be at least 1"));
    }
    let factors = SipFactors::new(monthly_contribution, monthly_rate)?;
    let step = granularity.months_per_period();

    Ok(produce_growth_series(
        move |period| factors.value_after(period * step),
        granularity.periods_in(months),
    ))
}

/// Lump-sum value at the end of each year.
pub fn lump_sum_series(
    principal: Money,
    annual_rate: Rate,
    years: u32,
) -> FinanceResult<GrowthSeries<impl Fn(u32) -> FinanceResult<Money> + Clone>> {
    check_lump_sum(principal, annual_rate)?;
    if years == 0 {
        return Err(FinanceError::invalid("years", "must be at least 1"));
    }

    Ok(produce_growth_series(
        move |year| compound_whole_years(principal, annual_rate, year),
        years,
    ))
}

/// Installments paid so far on a loan, over a horizon that may outlast the
/// loan. The value stays flat once the tenure is over.
pub fn cumulative_payment_series(
    emi: Money,
    tenure_months: u32,
    horizon_months: u32,
    granularity: Granularity,
) -> FinanceResult<GrowthSeries<impl Fn(u32) -> FinanceResult<Money> + Clone>> {
    if emi < Decimal::ZERO {
        return Err(FinanceError::invalid("emi", "must not be negative"));
    }
    if tenure_months == 0 || horizon_months == 0 {
        return Err(FinanceError::invalid(
            "tenure_months",
            "tenure and horizon must be at least 1 month",
        ));
    }
    let step = granularity.months_per_period();

    Ok(produce_growth_series(
        move |period| {
            let paid_months = (period * step).min(tenure_months);
            emi.checked_mul(Decimal::from(paid_months))
                .or_overflow("cumulative installments")
        },
        granularity.periods_in(horizon_months),
    ))
}
