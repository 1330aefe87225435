//! Labelled result lines for report generators.
//!
//! Values stay raw decimals; the currency symbol, separators and display
//! precision are left to whatever renders the report.

use serde::{Deserialize, Serialize};

use crate::types::{ComparisonResult, ExpenseImpact, GrowthResult, Money};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub label: String,
    pub value: Money,
}

impl ReportLine {
    fn new(label: impl Into<String>, value: Money) -> Self {
        ReportLine {
            label: label.into(),
            value,
        }
    }
}

pub trait ReportEntries {
    fn report_lines(&self) -> Vec<ReportLine>;
}

impl ReportEntries for ComparisonResult {
    fn report_lines(&self) -> Vec<ReportLine> {
        let short = tenure_label(self.emi_short_term.tenure_months);
        let long = tenure_label(self.emi_long_term.tenure_months);
        vec![
            ReportLine::new(format!("EMI ({short})"), self.emi_short_term.emi),
            ReportLine::new(format!("EMI ({long})"), self.emi_long_term.emi),
            ReportLine::new(format!("Interest ({short})"), self.emi_short_term.total_interest),
            ReportLine::new(format!("Interest ({long})"), self.emi_long_term.total_interest),
            ReportLine::new("Monthly SIP", self.monthly_surplus),
            ReportLine::new(format!("SIP Corpus ({long})"), self.sip_projection.future_value),
        ]
    }
}

impl ReportEntries for GrowthResult {
    fn report_lines(&self) -> Vec<ReportLine> {
        vec![
            ReportLine::new("Total Invested", self.total_contributed),
            ReportLine::new("Estimated Value", self.future_value),
            ReportLine::new("Wealth Gained", self.gain),
        ]
    }
}

impl ReportEntries for ExpenseImpact {
    fn report_lines(&self) -> Vec<ReportLine> {
        vec![
            ReportLine::new("Future Value (Gross)", self.gross_future_value),
            ReportLine::new("Future Value (Net)", self.net_future_value),
            ReportLine::new("Loss due to Expense Ratio", self.loss),
        ]
    }
}

fn tenure_label(months: u32) -> String {
    match (months / 12, months % 12) {
        (1, 0) => "1 Year".to_string(),
        (years, 0) => format!("{years} Years"),
        (_, _) if months == 1 => "1 Month".to_string(),
        _ => format!("{months} Months"),
    }
}
