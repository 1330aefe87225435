use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use emi_sip_analyzer::series::{lump_sum_series, sip_series};
use emi_sip_analyzer::{
    ComparisonInput, Granularity, InvestmentInput, ReportEntries, SeriesPoint, expense_impact,
    lump_sum_growth, rates, sip_growth,
};

/// Home loan vs SIP analyzer
#[derive(Parser)]
#[command(
    name = "loan_vs_sip",
    version,
    about = "Compare clearing a home loan early against investing the EMI difference",
    long_about = "Closed-form EMI, SIP, lump-sum and expense-ratio calculations. \
                  Rates are given as percentages on the command line; results are \
                  printed as JSON with raw decimal values."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Short tenure vs long tenure plus a SIP of the EMI difference
    Compare(CompareArgs),
    /// Future value of a monthly SIP
    Sip(InvestmentArgs),
    /// Future value of a one-time investment
    LumpSum(InvestmentArgs),
    /// Gross vs net value of a lump sum under an expense ratio
    Expense(InvestmentArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SeriesArg {
    Monthly,
    Yearly,
}

impl From<SeriesArg> for Granularity {
    fn from(arg: SeriesArg) -> Self {
        match arg {
            SeriesArg::Monthly => Granularity::Monthly,
            SeriesArg::Yearly => Granularity::Yearly,
        }
    }
}

#[derive(Args)]
struct CompareArgs {
    /// Path to a JSON scenario; flags below override its fields
    #[arg(long)]
    input: Option<PathBuf>,
    /// Loan amount
    #[arg(long)]
    principal: Option<Decimal>,
    /// Annual loan interest rate in percent
    #[arg(long)]
    interest: Option<Decimal>,
    #[arg(long)]
    short_months: Option<u32>,
    #[arg(long)]
    long_months: Option<u32>,
    /// Expected annual SIP return in percent
    #[arg(long)]
    sip_return: Option<Decimal>,
    /// Also print the SIP vs EMI-paid projection
    #[arg(long)]
    series: Option<SeriesArg>,
}

#[derive(Args)]
struct InvestmentArgs {
    /// Monthly contribution (sip) or one-time amount (lump-sum, expense)
    #[arg(long)]
    amount: Decimal,
    /// Expected annual return in percent
    #[arg(long = "return", default_value = "12")]
    annual_return: Decimal,
    /// Annual expense ratio in percent
    #[arg(long, default_value = "0")]
    expense_ratio: Decimal,
    #[arg(long, default_value_t = 10)]
    years: u32,
    /// Also print a year-by-year series
    #[arg(long)]
    series: bool,
}

impl InvestmentArgs {
    fn to_input(&self) -> InvestmentInput {
        InvestmentInput {
            amount: self.amount,
            return_per_year: self.annual_return,
            expense_ratio_per_year: self.expense_ratio,
            years: self.years,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Compare(args) => run_compare(args),
        Commands::Sip(args) => run_sip(args),
        Commands::LumpSum(args) => run_lump_sum(args),
        Commands::Expense(args) => run_expense(args),
    };

    match result {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default()),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn run_compare(args: CompareArgs) -> Result<Value> {
    let mut input = match &args.input {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse '{}'", path.display()))?
        }
        None => ComparisonInput::default(),
    };
    if let Some(principal) = args.principal {
        input.principal = principal;
    }
    if let Some(interest) = args.interest {
        input.interest_per_year = interest;
    }
    if let Some(months) = args.short_months {
        input.short_tenure_months = months;
    }
    if let Some(months) = args.long_months {
        input.long_tenure_months = months;
    }
    if let Some(sip_return) = args.sip_return {
        input.sip_return_per_year = sip_return;
    }

    info!("comparing {input:?}");
    let scenario = input.into_scenario().context("Invalid comparison input")?;
    let result = scenario.compare().context("Comparison failed")?;
    let series = match args.series {
        Some(granularity) => Some(
            scenario
                .projection(granularity.into())
                .context("Projection failed")?,
        ),
        None => None,
    };

    Ok(json!({
        "result": result,
        "report": result.report_lines(),
        "series": series,
    }))
}

fn run_sip(args: InvestmentArgs) -> Result<Value> {
    let plan = args.to_input().into_plan().context("Invalid SIP input")?;
    let result = sip_growth(&plan).context("SIP calculation failed")?;
    let series = if args.series {
        let points = sip_series(
            plan.contribution(),
            rates::monthly_rate(plan.net_annual_return()?),
            plan.duration_months(),
            Granularity::Yearly,
        )?
        .collect::<Result<Vec<SeriesPoint>, _>>()?;
        Some(points)
    } else {
        None
    };

    Ok(json!({
        "result": result,
        "report": result.report_lines(),
        "series": series,
    }))
}

fn run_lump_sum(args: InvestmentArgs) -> Result<Value> {
    let plan = args.to_input().into_plan().context("Invalid lump sum input")?;
    let result = lump_sum_growth(&plan).context("Lump sum calculation failed")?;
    let series = if args.series {
        Some(yearly_lump_sum(plan.contribution(), plan.net_annual_return()?, args.years)?)
    } else {
        None
    };

    Ok(json!({
        "result": result,
        "report": result.report_lines(),
        "series": series,
    }))
}

fn run_expense(args: InvestmentArgs) -> Result<Value> {
    let plan = args.to_input().into_plan().context("Invalid expense ratio input")?;
    let result = expense_impact(&plan).context("Expense ratio calculation failed")?;
    let series = if args.series {
        Some(json!({
            "gross": yearly_lump_sum(plan.contribution(), plan.annual_return(), args.years)?,
            "net": yearly_lump_sum(plan.contribution(), plan.net_annual_return()?, args.years)?,
        }))
    } else {
        None
    };

    Ok(json!({
        "result": result,
        "report": result.report_lines(),
        "series": series,
    }))
}

fn yearly_lump_sum(principal: Decimal, annual_rate: Decimal, years: u32) -> Result<Vec<SeriesPoint>> {
    let points = lump_sum_series(principal, annual_rate, years)?.collect::<Result<Vec<_>, _>>()?;
    Ok(points)
}
