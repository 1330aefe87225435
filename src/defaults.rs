//! Default scenario: a 12 lakh home loan at 8.5%, cleared in 10 years or
//! stretched to 20 with the difference invested at 12%.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const LOAN_AMOUNT: Decimal = dec!(1_200_000);
pub const ANNUAL_INTEREST_RATE: Decimal = dec!(0.085);
pub const SHORT_TENURE_MONTHS: u32 = 10 * 12;
pub const LONG_TENURE_MONTHS: u32 = 20 * 12;
pub const SIP_ANNUAL_RETURN: Decimal = dec!(0.12);
/// The surplus is invested for as long as the longer loan runs.
pub const SIP_DURATION_MONTHS: u32 = LONG_TENURE_MONTHS;
