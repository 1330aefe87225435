//! Rate unit conversions.
//!
//! Everything inside this crate works with fractions. Percentages (the units
//! people type into a form) are converted here and nowhere else.

use rust_decimal_macros::dec;

use crate::types::Rate;

/// Converts a percentage such as `8.5` into the fraction `0.085`.
pub fn percent_to_fraction(percent: Rate) -> Rate {
    percent / dec!(100)
}

/// Nominal monthly rate for an annual rate: `annual / 12`.
///
/// Loans and SIPs both use this convention, not the effective
/// `(1 + annual)^(1/12) - 1`.
pub fn monthly_rate(annual_rate: Rate) -> Rate {
    annual_rate / dec!(12)
}
