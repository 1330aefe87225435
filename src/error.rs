use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinanceError {
    #[error("Invalid parameter: {field}: {reason}")]
    InvalidParameter { field: String, reason: String },

    #[error(
        "Degenerate comparison: long-term EMI {long_term_emi} is not below short-term EMI {short_term_emi}"
    )]
    DegenerateComparison {
        short_term_emi: Decimal,
        long_term_emi: Decimal,
    },

    #[error("Numeric overflow in {context}")]
    NumericOverflow { context: String },

    #[error("Inconsistent result: {0}")]
    InconsistentResult(String),
}

pub type FinanceResult<T> = Result<T, FinanceError>;

impl FinanceError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        FinanceError::InvalidParameter {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(context: &str) -> Self {
        FinanceError::NumericOverflow {
            context: context.into(),
        }
    }
}

/// Turns the `None` of a checked decimal operation into `NumericOverflow`.
pub(crate) trait OrOverflow {
    fn or_overflow(self, context: &str) -> FinanceResult<Decimal>;
}

impl OrOverflow for Option<Decimal> {
    fn or_overflow(self, context: &str) -> FinanceResult<Decimal> {
        self.ok_or_else(|| FinanceError::overflow(context))
    }
}
