//! Future value of SIP contributions and lump sums, and the drag of an
//! expense ratio on compounded returns.

use log::trace;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::error::{FinanceError, FinanceResult, OrOverflow};
use crate::rates::monthly_rate;
use crate::types::{ExpenseImpact, GrowthResult, InvestmentPlan, Money, Rate};

/// Constants of the SIP annuity-due formula, derived once and reused for
/// every horizon.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SipFactors {
    contribution: Money,
    rate: Rate,
    growth: Decimal,
}

impl SipFactors {
    pub(crate) fn new(contribution: Money, monthly_rate: Rate) -> FinanceResult<Self> {
        if contribution < Decimal::ZERO {
            return Err(FinanceError::invalid(
                "monthly_contribution",
                "must not be negative",
            ));
        }
        if monthly_rate <= -Decimal::ONE {
            return Err(FinanceError::invalid(
                "monthly_rate",
                "must be greater than -100%",
            ));
        }
        let growth = Decimal::ONE
            .checked_add(monthly_rate)
            .or_overflow("SIP growth factor")?;
        Ok(SipFactors {
            contribution,
            rate: monthly_rate,
            growth,
        })
    }

    /// Corpus after `months` contributions, rounded to 2 decimal places.
    pub(crate) fn value_after(&self, months: u32) -> FinanceResult<Money> {
        let periods = Decimal::from(months);
        if self.rate.is_zero() {
            return self
                .contribution
                .checked_mul(periods)
                .or_overflow("SIP future value")
                .map(|fv| fv.round_dp(2));
        }

        let factor = self
            .growth
            .checked_powu(months.into())
            .or_overflow("SIP compounding factor")?;
        let fv = (factor - Decimal::ONE)
            .checked_div(self.rate)
            .and_then(|v| v.checked_mul(self.growth))
            .and_then(|v| v.checked_mul(self.contribution))
            .or_overflow("SIP future value")?;
        Ok(fv.round_dp(2))
    }
}

/// Future value of a fixed monthly contribution.
///
/// Contributions are made at the start of each month, so each one compounds
/// for one extra period (annuity due):
/// FV = C * [((1 + i)^n - 1) / i] * (1 + i).
/// This matches how the SIP products being modelled are assumed to credit
/// returns; confirm against the product rules before relying on it for an
/// end-of-month plan. A zero rate gives `C * n`.
///
/// The result is rounded to 2 decimal places using round-half-to-even.
///
/// # Errors
///
/// `InvalidParameter` for a negative contribution, a zero horizon or a rate
/// at or below -100%. `NumericOverflow` when the corpus is not representable.
pub fn compute_sip_future_value(
    monthly_contribution: Money,
    monthly_rate: Rate,
    months: u32,
) -> FinanceResult<Money> {
    if months == 0 {
        return Err(FinanceError::invalid("months", "must be at least 1"));
    }
    SipFactors::new(monthly_contribution, monthly_rate)?.value_after(months)
}

/// `principal * (1 + annual_rate)^years`, unrounded.
///
/// Zero and negative rates are valid; a negative rate models a loss.
pub fn compute_lump_sum_future_value(principal: Money, annual_rate: Rate, years: u32) -> FinanceResult<Money> {
    check_lump_sum(principal, annual_rate)?;
    if years == 0 {
        return Err(FinanceError::invalid("years", "must be at least 1"));
    }
    compound_whole_years(principal, annual_rate, years)
}

/// Compounds a lump sum at the gross rate and at the rate net of the expense
/// ratio, and reports the difference.
///
/// An expense ratio at or above `annual_rate` is accepted as is: the net value
/// then shows the fee eating past the gains.
pub fn compute_expense_adjusted_value(
    principal: Money,
    annual_rate: Rate,
    expense_ratio: Rate,
    years: u32,
) -> FinanceResult<ExpenseImpact> {
    if principal <= Decimal::ZERO {
        return Err(FinanceError::invalid("principal", "must be positive"));
    }
    if expense_ratio < Decimal::ZERO {
        return Err(FinanceError::invalid("expense_ratio", "must not be negative"));
    }
    let gross_future_value = compute_lump_sum_future_value(principal, annual_rate, years)?;
    let net_rate = annual_rate
        .checked_sub(expense_ratio)
        .or_overflow("net annual return")?;
    let net_future_value = compute_lump_sum_future_value(principal, net_rate, years)?;

    Ok(ExpenseImpact {
        loss: gross_future_value - net_future_value,
        gross_future_value,
        net_future_value,
    })
}

/// SIP growth of a plan, at its return net of any expense ratio.
pub fn sip_growth(plan: &InvestmentPlan) -> FinanceResult<GrowthResult> {
    let months = plan.duration_months();
    let future_value = compute_sip_future_value(
        plan.contribution(),
        monthly_rate(plan.net_annual_return()?),
        months,
    )?;
    let total_contributed = plan
        .contribution()
        .checked_mul(Decimal::from(months))
        .or_overflow("SIP contributions")?;

    trace!("sip of {} for {months} months: {future_value}", plan.contribution());
    Ok(GrowthResult {
        future_value,
        total_contributed,
        gain: future_value - total_contributed,
    })
}

/// Lump-sum growth of a plan, at its return net of any expense ratio.
pub fn lump_sum_growth(plan: &InvestmentPlan) -> FinanceResult<GrowthResult> {
    let future_value = compound_over_months(
        plan.contribution(),
        plan.net_annual_return()?,
        plan.duration_months(),
    )?;

    Ok(GrowthResult {
        future_value,
        total_contributed: plan.contribution(),
        gain: future_value - plan.contribution(),
    })
}

/// Gross vs net value of a lump-sum plan.
pub fn expense_impact(plan: &InvestmentPlan) -> FinanceResult<ExpenseImpact> {
    if plan.contribution().is_zero() {
        return Err(FinanceError::invalid("contribution", "must be positive"));
    }
    let months = plan.duration_months();
    let gross_future_value = compound_over_months(plan.contribution(), plan.annual_return(), months)?;
    let net_future_value = compound_over_months(plan.contribution(), plan.net_annual_return()?, months)?;

    Ok(ExpenseImpact {
        loss: gross_future_value - net_future_value,
        gross_future_value,
        net_future_value,
    })
}

pub(crate) fn check_lump_sum(principal: Money, annual_rate: Rate) -> FinanceResult<()> {
    if principal < Decimal::ZERO {
        return Err(FinanceError::invalid("principal", "must not be negative"));
    }
    if annual_rate < -Decimal::ONE {
        return Err(FinanceError::invalid(
            "annual_rate",
            "cannot lose more than 100% per year",
        ));
    }
    Ok(())
}

pub(crate) fn compound_whole_years(principal: Money, annual_rate: Rate, years: u32) -> FinanceResult<Money> {
    Decimal::ONE
        .checked_add(annual_rate)
        .and_then(|base| base.checked_powu(years.into()))
        .and_then(|factor| principal.checked_mul(factor))
        .or_overflow("lump sum future value")
}

/// Annual compounding over a horizon in months. Horizons that are not whole
/// years use a fractional exponent.
fn compound_over_months(principal: Money, annual_rate: Rate, months: u32) -> FinanceResult<Money> {
    check_lump_sum(principal, annual_rate)?;
    if months % 12 == 0 {
        return compound_whole_years(principal, annual_rate, months / 12);
    }

    let base = Decimal::ONE
        .checked_add(annual_rate)
        .or_overflow("lump sum growth factor")?;
    if base.is_zero() {
        return Ok(Decimal::ZERO);
    }
    let years = Decimal::from(months) / dec!(12);
    base.checked_powd(years)
        .and_then(|factor| principal.checked_mul(factor))
        .or_overflow("lump sum future value")
}
