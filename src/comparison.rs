//! Short tenure vs long tenure plus a SIP of the EMI difference.

use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization::amortize;
use crate::error::{FinanceError, FinanceResult, OrOverflow};
use crate::growth::compute_sip_future_value;
use crate::rates::monthly_rate;
use crate::series::{Granularity, cumulative_payment_series, sip_series};
use crate::types::{ComparisonResult, GrowthResult, LoanTerms, Money, Rate};

/// One point of the "loan payments vs investment growth" projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub period: u32,
    /// SIP corpus built from the monthly surplus so far.
    pub sip_value: Money,
    /// Installments paid so far on the short-term loan.
    pub emi_paid: Money,
}

/// Compares paying a loan off over the short tenure against the long tenure
/// with the EMI difference invested every month.
///
/// The surplus is invested for the whole long-term tenure at
/// `sip_return / 12` per month.
///
/// # Arguments
///
/// * `short_term_loan` - Terms of the faster repayment.
/// * `long_term_loan` - Terms of the slower repayment, typically the same
///   principal and rate over more months.
/// * `sip_return` - Expected annual SIP return as a fraction.
///
/// # Errors
///
/// `DegenerateComparison` when the long-term EMI is not strictly below the
/// short-term EMI, since that leaves nothing (or less than nothing) to invest.
pub fn compare(
    short_term_loan: &LoanTerms,
    long_term_loan: &LoanTerms,
    sip_return: Rate,
) -> FinanceResult<ComparisonResult> {
    if sip_return <= -Decimal::ONE {
        return Err(FinanceError::invalid(
            "sip_return",
            "must be greater than -100%",
        ));
    }

    let emi_short_term = amortize(short_term_loan)?;
    let emi_long_term = amortize(long_term_loan)?;
    let monthly_surplus = emi_short_term.emi - emi_long_term.emi;
    if monthly_surplus <= Decimal::ZERO {
        warn!(
            "long-term EMI {} over {} months is not below short-term EMI {} over {} months",
            emi_long_term.emi,
            emi_long_term.tenure_months,
            emi_short_term.emi,
            emi_short_term.tenure_months
        );
        return Err(FinanceError::DegenerateComparison {
            short_term_emi: emi_short_term.emi,
            long_term_emi: emi_long_term.emi,
        });
    }

    let months = long_term_loan.tenure_months();
    let future_value = compute_sip_future_value(monthly_surplus, monthly_rate(sip_return), months)?;
    let total_contributed = monthly_surplus
        .checked_mul(Decimal::from(months))
        .or_overflow("SIP contributions")?;

    debug!("surplus {monthly_surplus}/month for {months} months grows to {future_value}");
    Ok(ComparisonResult {
        emi_short_term,
        emi_long_term,
        monthly_surplus,
        sip_projection: GrowthResult {
            future_value,
            total_contributed,
            gain: future_value - total_contributed,
        },
    })
}

/// Projects the SIP corpus alongside the installments paid on the short-term
/// loan, over the long-term tenure.
///
/// The inputs go through [`compare`] first, so a degenerate comparison is
/// rejected before any point is produced.
pub fn projection_series(
    short_term_loan: &LoanTerms,
    long_term_loan: &LoanTerms,
    sip_return: Rate,
    granularity: Granularity,
) -> FinanceResult<impl Iterator<Item = FinanceResult<ProjectionPoint>> + Clone + use<>> {
    let result = compare(short_term_loan, long_term_loan, sip_return)?;
    let horizon = long_term_loan.tenure_months();

    let sip = sip_series(
        result.monthly_surplus,
        monthly_rate(sip_return),
        horizon,
        granularity,
    )?;
    let paid = cumulative_payment_series(
        result.emi_short_term.emi,
        short_term_loan.tenure_months(),
        horizon,
        granularity,
    )?;

    Ok(sip.zip(paid).map(|(sip, paid)| -> FinanceResult<ProjectionPoint> {
        let sip = sip?;
        let paid = paid?;
        Ok(ProjectionPoint {
            period: sip.period,
            sip_value: sip.value,
            emi_paid: paid.value,
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn loan(months: u32) -> LoanTerms {
        LoanTerms::new(dec!(1_200_000), dec!(0.085), months).unwrap()
    }

    #[test]
    fn test_compare_ten_vs_twenty_years() {
        let result = compare(&loan(120), &loan(240), dec!(0.12)).unwrap();

        assert_eq!(result.emi_short_term.emi, dec!(14878.28));
        assert_eq!(result.emi_long_term.emi, dec!(10413.88));
        assert_eq!(result.monthly_surplus, dec!(4464.40));
        assert_eq!(
            result.sip_projection.future_value,
            compute_sip_future_value(dec!(4464.40), dec!(0.01), 240).unwrap()
        );
        assert_eq!(result.sip_projection.total_contributed, dec!(1_071_456));
        assert!(result.sip_projection.gain > dec!(3_000_000));
    }

    #[test]
    fn test_compare_rejects_swapped_tenures() {
        let result = compare(&loan(240), &loan(120), dec!(0.12));
        match result {
            Err(FinanceError::DegenerateComparison {
                short_term_emi,
                long_term_emi,
            }) => {
                assert_eq!(short_term_emi, dec!(10413.88));
                assert_eq!(long_term_emi, dec!(14878.28));
            }
            other => panic!("expected DegenerateComparison, got {other:?}"),
        }
    }

    #[test]
    fn test_compare_rejects_equal_tenures() {
        let result = compare(&loan(120), &loan(120), dec!(0.12));
        assert!(matches!(result, Err(FinanceError::DegenerateComparison { .. })));
    }

    #[test]
    fn test_compare_rejects_impossible_sip_return() {
        let result = compare(&loan(120), &loan(240), dec!(-1));
        assert!(matches!(result, Err(FinanceError::InvalidParameter { .. })));
    }

    #[test]
    fn test_compare_zero_sip_return_just_accumulates_surplus() {
        let result = compare(&loan(120), &loan(240), Decimal::ZERO).unwrap();
        assert_eq!(result.sip_projection.future_value, dec!(1_071_456));
        assert_eq!(result.sip_projection.gain, Decimal::ZERO);
    }

    #[test]
    fn test_projection_series_yearly() {
        let points: Vec<ProjectionPoint> =
            projection_series(&loan(120), &loan(240), dec!(0.12), Granularity::Yearly)
                .unwrap()
                .collect::<FinanceResult<_>>()
                .unwrap();

        assert_eq!(points.len(), 20);
        assert_eq!(points[0].emi_paid, dec!(14878.28) * dec!(12));
        assert_eq!(points[9].emi_paid, dec!(1_785_393.60));
        assert_eq!(points[19].emi_paid, dec!(1_785_393.60));

        let result = compare(&loan(120), &loan(240), dec!(0.12)).unwrap();
        assert_eq!(points[19].sip_value, result.sip_projection.future_value);
    }

    #[test]
    fn test_projection_series_rejects_degenerate_inputs() {
        assert!(projection_series(&loan(240), &loan(120), dec!(0.12), Granularity::Monthly).is_err());
    }
}
