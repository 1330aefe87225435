//! `emi_sip_analyzer` is a Rust library for comparing home loan repayment
//! against investing.
//!
//! It answers one question: is it better to clear a loan quickly, or to take
//! the longer tenure and invest the EMI difference every month? To get there
//! it provides closed-form calculators for:
//! - **EMI (Equated Monthly Installment)**: the fixed payment that amortizes a
//!   fixed-rate loan over its tenure, and the interest it implies.
//! - **SIP (Systematic Investment Plan)**: the future value of a fixed monthly
//!   contribution, plus lump-sum compounding.
//! - **Expense ratio**: how much an annual fee erodes a compounded lump sum.
//!
//! All rates are fractions (`0.085` for 8.5%). Percentages are only accepted by
//! the input records in [`input`], which convert them through
//! [`rates::percent_to_fraction`].
//!
//! ## Usage
//!
//! ```rust
//! use emi_sip_analyzer::{compare, LoanTerms};
//! use rust_decimal_macros::dec;
//!
//! fn main() {
//!     let short_term = LoanTerms::new(dec!(1_200_000), dec!(0.085), 120).unwrap();
//!     let long_term = LoanTerms::new(dec!(1_200_000), dec!(0.085), 240).unwrap();
//!
//!     match compare(&short_term, &long_term, dec!(0.12)) {
//!         Ok(result) => {
//!             println!("EMI (10 Years): {:.2}", result.emi_short_term.emi);
//!             println!("EMI (20 Years): {:.2}", result.emi_long_term.emi);
//!             println!("Monthly SIP:    {:.2}", result.monthly_surplus);
//!             println!("SIP Corpus:     {:.2}", result.sip_projection.future_value);
//!         }
//!         Err(e) => {
//!             eprintln!("Error comparing scenarios: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod amortization;
pub mod comparison;
pub mod defaults;
pub mod error;
pub mod growth;
pub mod input;
pub mod rates;
pub mod report;
pub mod series;
pub mod types;

pub use amortization::{amortize, compute_emi, compute_total_interest};
pub use comparison::{ProjectionPoint, compare, projection_series};
pub use error::{FinanceError, FinanceResult};
pub use growth::{
    compute_expense_adjusted_value, compute_lump_sum_future_value, compute_sip_future_value,
    expense_impact, lump_sum_growth, sip_growth,
};
pub use input::{ComparisonInput, InvestmentInput, Scenario, calculate_comparison};
pub use report::{ReportEntries, ReportLine};
pub use series::{Granularity, GrowthSeries, SeriesPoint, produce_growth_series};
pub use types::{
    AmortizationResult, ComparisonResult, ExpenseImpact, GrowthResult, InvestmentPlan, LoanTerms,
    Money, Rate,
};
