//! Boundary input records, in the percentage units a person types in.
//!
//! These are the only types that accept percentages; converting them yields
//! the fraction-based value objects the calculators work with.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::comparison::{ProjectionPoint, compare, projection_series};
use crate::defaults;
use crate::error::{FinanceError, FinanceResult};
use crate::rates::percent_to_fraction;
use crate::series::Granularity;
use crate::types::{ComparisonResult, InvestmentPlan, LoanTerms, Money, Rate};

/// Input parameters for a loan-vs-SIP comparison.
///
/// Missing fields in a deserialized document fall back to the defaults in
/// [`crate::defaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonInput {
    /// The loan amount, shared by both repayment options.
    pub principal: Money,
    /// The annual loan interest rate as a percentage (e.g., 8.5 for 8.5%).
    pub interest_per_year: Decimal,
    pub short_tenure_months: u32,
    pub long_tenure_months: u32,
    /// The expected annual SIP return as a percentage.
    pub sip_return_per_year: Decimal,
}

impl Default for ComparisonInput {
    fn default() -> Self {
        ComparisonInput {
            principal: defaults::LOAN_AMOUNT,
            interest_per_year: defaults::ANNUAL_INTEREST_RATE * dec!(100),
            short_tenure_months: defaults::SHORT_TENURE_MONTHS,
            long_tenure_months: defaults::LONG_TENURE_MONTHS,
            sip_return_per_year: defaults::SIP_ANNUAL_RETURN * dec!(100),
        }
    }
}

/// A validated comparison, in fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub short_term: LoanTerms,
    pub long_term: LoanTerms,
    pub sip_return: Rate,
}

impl ComparisonInput {
    pub fn into_scenario(self) -> FinanceResult<Scenario> {
        let annual_rate = percent_to_fraction(self.interest_per_year);
        Ok(Scenario {
            short_term: LoanTerms::new(self.principal, annual_rate, self.short_tenure_months)?,
            long_term: LoanTerms::new(self.principal, annual_rate, self.long_tenure_months)?,
            sip_return: percent_to_fraction(self.sip_return_per_year),
        })
    }
}

impl Scenario {
    pub fn compare(&self) -> FinanceResult<ComparisonResult> {
        compare(&self.short_term, &self.long_term, self.sip_return)
    }

    pub fn projection(&self, granularity: Granularity) -> FinanceResult<Vec<ProjectionPoint>> {
        projection_series(&self.short_term, &self.long_term, self.sip_return, granularity)?.collect()
    }
}

/// Converts the input and runs the comparison in one step.
pub fn calculate_comparison(input: ComparisonInput) -> FinanceResult<ComparisonResult> {
    input.into_scenario()?.compare()
}

/// Input parameters for a SIP or lump-sum investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    /// Monthly contribution for a SIP, one-time amount for a lump sum.
    pub amount: Money,
    /// The expected annual return as a percentage.
    pub return_per_year: Decimal,
    /// The annual expense ratio as a percentage (e.g., 0.5 for 0.5%).
    #[serde(default)]
    pub expense_ratio_per_year: Decimal,
    pub years: u32,
}

impl InvestmentInput {
    pub fn into_plan(self) -> FinanceResult<InvestmentPlan> {
        let months = self
            .years
            .checked_mul(12)
            .ok_or_else(|| FinanceError::invalid("years", "horizon too long"))?;
        InvestmentPlan::new(self.amount, percent_to_fraction(self.return_per_year), months)?
            .with_expense_ratio(percent_to_fraction(self.expense_ratio_per_year))
    }
}
