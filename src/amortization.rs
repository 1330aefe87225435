//! Equated monthly installment (EMI) amortization for fixed-rate loans.

use log::trace;
use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{FinanceError, FinanceResult, OrOverflow};
use crate::rates::monthly_rate;
use crate::types::{AmortizationResult, LoanTerms, Money, Rate};

/// Calculates the fixed monthly installment that fully repays a loan.
///
/// The annuity formula is: EMI = P * [r(1 + r)^n] / [(1 + r)^n - 1]
/// where `r` is `annual_rate / 12`. The result is rounded to 2 decimal places
/// using round-half-to-even.
///
/// # Arguments
///
/// * `principal` - The loan amount.
/// * `annual_rate` - The annual interest rate as a fraction (not percentage).
/// * `tenure_months` - The number of monthly installments.
///
/// # Errors
///
/// `InvalidParameter` for a non-positive principal or rate, or a zero tenure.
/// `NumericOverflow` when `(1 + r)^n` or the installment cannot be represented.
pub fn compute_emi(principal: Money, annual_rate: Rate, tenure_months: u32) -> FinanceResult<Money> {
    if principal <= Decimal::ZERO {
        return Err(FinanceError::invalid("principal", "must be positive"));
    }
    if annual_rate <= Decimal::ZERO {
        return Err(FinanceError::invalid(
            "annual_rate",
            "must be positive for an amortizing loan",
        ));
    }
    if tenure_months == 0 {
        return Err(FinanceError::invalid("tenure_months", "must be at least 1"));
    }

    let r = monthly_rate(annual_rate);
    let r_plus_1_pow_n = Decimal::ONE
        .checked_add(r)
        .and_then(|base| base.checked_powu(tenure_months.into()))
        .or_overflow("EMI compounding factor")?;
    let denominator = r_plus_1_pow_n - Decimal::ONE;
    if denominator.is_zero() {
        // Rate too small to move (1 + r)^n away from 1 at decimal precision.
        return Err(FinanceError::overflow("EMI denominator"));
    }

    let emi = principal
        .checked_mul(r)
        .and_then(|v| v.checked_mul(r_plus_1_pow_n))
        .and_then(|v| v.checked_div(denominator))
        .or_overflow("EMI")?;

    trace!("emi for {principal} at {annual_rate} over {tenure_months} months: {emi}");
    Ok(emi.round_dp(2))
}

/// Total interest paid over the life of the loan: `emi * tenure_months - principal`.
///
/// The value is exact (no further rounding), so it always equals the product
/// of the installment and tenure less the principal.
///
/// # Errors
///
/// `InconsistentResult` when the installments repay less than the principal,
/// which means `emi` does not belong to this principal and tenure.
pub fn compute_total_interest(principal: Money, emi: Money, tenure_months: u32) -> FinanceResult<Money> {
    let total_paid = emi
        .checked_mul(Decimal::from(tenure_months))
        .or_overflow("total paid")?;
    let total_interest = total_paid
        .checked_sub(principal)
        .or_overflow("total interest")?;
    if total_interest < Decimal::ZERO {
        return Err(FinanceError::InconsistentResult(format!(
            "EMI {emi} over {tenure_months} months repays less than principal {principal}"
        )));
    }
    Ok(total_interest)
}

/// Runs the full EMI calculation for a set of loan terms.
pub fn amortize(terms: &LoanTerms) -> FinanceResult<AmortizationResult> {
    let tenure_months = terms.tenure_months();
    let emi = compute_emi(terms.principal(), terms.annual_rate(), tenure_months)?;
    let total_interest = compute_total_interest(terms.principal(), emi, tenure_months)?;
    let total_paid = terms
        .principal()
        .checked_add(total_interest)
        .or_overflow("total paid")?;

    Ok(AmortizationResult {
        tenure_months,
        emi,
        total_paid,
        total_interest,
    })
}
