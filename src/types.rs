use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult, OrOverflow};

/// Currency amounts.
pub type Money = Decimal;

/// Rates expressed as fractions (0.085 = 8.5%). Never as percentages.
pub type Rate = Decimal;

/// Terms of a fixed-rate, fixed-tenure loan.
///
/// Fields are private so a `LoanTerms` can only exist in a validated state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanTerms {
    /// The amount borrowed.
    principal: Money,
    /// The annual interest rate as a fraction.
    annual_rate: Rate,
    /// The number of monthly installments.
    tenure_months: u32,
}

impl LoanTerms {
    /// Builds loan terms, rejecting a non-positive principal, a rate outside
    /// `(0, 1)` or a zero tenure.
    pub fn new(principal: Money, annual_rate: Rate, tenure_months: u32) -> FinanceResult<Self> {
        if principal <= Decimal::ZERO {
            return Err(FinanceError::invalid("principal", "must be positive"));
        }
        if annual_rate <= Decimal::ZERO || annual_rate >= Decimal::ONE {
            return Err(FinanceError::invalid(
                "annual_rate",
                format!("must be a fraction in (0, 1), got {annual_rate}"),
            ));
        }
        if tenure_months == 0 {
            return Err(FinanceError::invalid("tenure_months", "must be at least 1"));
        }

        Ok(LoanTerms {
            principal,
            annual_rate,
            tenure_months,
        })
    }

    /// The amount borrowed.
    pub fn principal(&self) -> Money {
        self.principal
    }

    /// The annual interest rate as a fraction (0.085 for 8.5%).
    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    /// The number of monthly installments.
    pub fn tenure_months(&self) -> u32 {
        self.tenure_months
    }
}

/// A periodic (SIP) or one-time (lump sum) investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvestmentPlan {
    /// Monthly amount for a SIP, one-time amount for a lump sum.
    contribution: Money,
    /// The expected annual return before fees, as a fraction.
    annual_return: Rate,
    /// The investment horizon in months.
    duration_months: u32,
    /// The annual fee deducted from the return, as a fraction.
    expense_ratio: Rate,
}

impl InvestmentPlan {
    /// Builds a plan with no expense ratio.
    ///
    /// `contribution` is monthly for a SIP and one-time for a lump sum.
    pub fn new(contribution: Money, annual_return: Rate, duration_months: u32) -> FinanceResult<Self> {
        if contribution < Decimal::ZERO {
            return Err(FinanceError::invalid("contribution", "must not be negative"));
        }
        if annual_return <= -Decimal::ONE {
            return Err(FinanceError::invalid(
                "annual_return",
                "must be greater than -100%",
            ));
        }
        if duration_months == 0 {
            return Err(FinanceError::invalid("duration_months", "must be at least 1"));
        }

        Ok(InvestmentPlan {
            contribution,
            annual_return,
            duration_months,
            expense_ratio: Decimal::ZERO,
        })
    }

    /// Sets the annual expense ratio. A ratio at or above the annual return is
    /// accepted; see [`InvestmentPlan::ensure_positive_net_return`].
    pub fn with_expense_ratio(self, expense_ratio: Rate) -> FinanceResult<Self> {
        if expense_ratio < Decimal::ZERO {
            return Err(FinanceError::invalid("expense_ratio", "must not be negative"));
        }
        Ok(InvestmentPlan {
            expense_ratio,
            ..self
        })
    }

    /// For callers that treat a non-positive net return as invalid input.
    pub fn ensure_positive_net_return(&self) -> FinanceResult<()> {
        if self.expense_ratio >= self.annual_return {
            return Err(FinanceError::invalid(
                "expense_ratio",
                format!(
                    "{} leaves no positive return on {}",
                    self.expense_ratio, self.annual_return
                ),
            ));
        }
        Ok(())
    }

    /// Monthly amount for a SIP, one-time amount for a lump sum.
    pub fn contribution(&self) -> Money {
        self.contribution
    }

    /// The expected annual return before fees, as a fraction.
    pub fn annual_return(&self) -> Rate {
        self.annual_return
    }

    /// The investment horizon in months.
    pub fn duration_months(&self) -> u32 {
        self.duration_months
    }

    /// The annual fee deducted from the return, as a fraction.
    pub fn expense_ratio(&self) -> Rate {
        self.expense_ratio
    }

    /// The annual return left after the expense ratio.
    ///
    /// # Errors
    ///
    /// `NumericOverflow` when the difference is not representable.
    pub fn net_annual_return(&self) -> FinanceResult<Rate> {
        self.annual_return
            .checked_sub(self.expense_ratio)
            .or_overflow("net annual return")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// The number of monthly installments.
    pub tenure_months: u32,
    /// The fixed monthly installment, rounded to 2 decimal places.
    pub emi: Money,
    /// The sum of all installments: `emi * tenure_months`.
    pub total_paid: Money,
    /// The part of the installments that is not principal.
    pub total_interest: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthResult {
    /// The projected value at the end of the horizon.
    pub future_value: Money,
    /// The amount paid in over the horizon.
    pub total_contributed: Money,
    /// Wealth gained: `future_value - total_contributed`. Negative on a loss.
    pub gain: Money,
}

/// Effect of an expense ratio on a compounded lump sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseImpact {
    /// Value compounded at the full annual return.
    pub gross_future_value: Money,
    /// Value compounded at the return net of the expense ratio.
    pub net_future_value: Money,
    /// `gross_future_value - net_future_value`.
    pub loss: Money,
}

/// Outcome of "short tenure" vs "long tenure and invest the EMI difference".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Repayment over the shorter tenure.
    pub emi_short_term: AmortizationResult,
    /// Repayment over the longer tenure.
    pub emi_long_term: AmortizationResult,
    /// `emi_short_term.emi - emi_long_term.emi`, always positive.
    pub monthly_surplus: Money,
    /// The surplus invested monthly over the long-term tenure.
    pub sip_projection: GrowthResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_loan_terms_accessors() {
        let terms = LoanTerms::new(dec!(1_200_000), dec!(0.085), 120).unwrap();
        assert_eq!(terms.principal(), dec!(1_200_000));
        assert_eq!(terms.annual_rate(), dec!(0.085));
        assert_eq!(terms.tenure_months(), 120);
    }

    #[rstest]
    #[case(dec!(0), dec!(0.085), 120, "principal")]
    #[case(dec!(-5), dec!(0.085), 120, "principal")]
    #[case(dec!(1000), dec!(0), 120, "annual_rate")]
    #[case(dec!(1000), dec!(-0.01), 120, "annual_rate")]
    #[case(dec!(1000), dec!(1), 120, "annual_rate")]
    #[case(dec!(1000), dec!(0.085), 0, "tenure_months")]
    fn test_loan_terms_rejects(
        #[case] principal: Decimal,
        #[case] rate: Decimal,
        #[case] months: u32,
        #[case] expected_field: &str,
    ) {
        match LoanTerms::new(principal, rate, months) {
            Err(FinanceError::InvalidParameter { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_plan_defaults_to_zero_expense_ratio() {
        let plan = InvestmentPlan::new(dec!(5000), dec!(0.12), 120).unwrap();
        assert_eq!(plan.expense_ratio(), Decimal::ZERO);
        assert_eq!(plan.net_annual_return().unwrap(), dec!(0.12));
    }

    #[test]
    fn test_plan_accepts_expense_at_or_above_return() {
        let plan = InvestmentPlan::new(dec!(1000), dec!(0.02), 12)
            .unwrap()
            .with_expense_ratio(dec!(0.03))
            .unwrap();
        assert_eq!(plan.net_annual_return().unwrap(), dec!(-0.01));
        assert!(plan.ensure_positive_net_return().is_err());
    }

    #[test]
    fn test_plan_strict_net_return_passes_when_positive() {
        let plan = InvestmentPlan::new(dec!(1000), dec!(0.12), 12)
            .unwrap()
            .with_expense_ratio(dec!(0.015))
            .unwrap();
        assert!(plan.ensure_positive_net_return().is_ok());
    }

    #[rstest]
    #[case(dec!(-1), dec!(0.12), 12)]
    #[case(dec!(100), dec!(-1), 12)]
    #[case(dec!(100), dec!(0.12), 0)]
    fn test_plan_rejects(#[case] contribution: Decimal, #[case] ret: Decimal, #[case] months: u32) {
        assert!(InvestmentPlan::new(contribution, ret, months).is_err());
    }

    #[test]
    fn test_plan_rejects_negative_expense_ratio() {
        let plan = InvestmentPlan::new(dec!(100), dec!(0.12), 12).unwrap();
        assert!(plan.with_expense_ratio(dec!(-0.001)).is_err());
    }
}
