use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tax_cli::app::{self, DeductionOverrides};
use tax_core::{OrganizationType, Position, TaxRecord};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Progressive net tax calculator.
///
/// Computes gross tax from the bracket schedule, subtracts the dependent,
/// group insurance and provident fund deductions, and prints the net tax
/// owed by one employee.
#[derive(Debug, Parser)]
#[command(name = "tax-calc", version, about)]
struct Cli {
    /// Employee name, used only for display.
    #[arg(long, default_value = "Employee")]
    name: String,

    /// Total annual income.
    #[arg(long, allow_negative_numbers = true)]
    income: Decimal,

    /// Employment position (Regular or Contract).
    #[arg(long, default_value = "Regular")]
    position: Position,

    /// Organization type (Government, Private or Corporate).
    #[arg(long)]
    organization: OrganizationType,

    /// The employee has children in school.
    #[arg(long, default_value_t = false)]
    children_in_school: bool,

    /// CSV file with `min_income,max_income,rate` rows replacing the built-in brackets.
    #[arg(long)]
    brackets: Option<PathBuf>,

    /// Flat deduction for children in school.
    #[arg(long)]
    dependent_deduction: Option<Decimal>,

    /// Provident fund rate for non-government employees.
    #[arg(long)]
    nppf_rate: Option<Decimal>,

    /// Group insurance rate for corporate employees.
    #[arg(long)]
    gis_rate: Option<Decimal>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let overrides = DeductionOverrides {
        dependent_deduction: cli.dependent_deduction,
        nppf_rate: cli.nppf_rate,
        gis_rate: cli.gis_rate,
    };
    let schedule = app::load_schedule(cli.brackets.as_deref(), &overrides)?;

    let record = TaxRecord::new(
        cli.income,
        cli.position,
        cli.organization,
        cli.children_in_school,
    );

    let summary = app::estimate(&cli.name, &record, &schedule)?;
    info!("{}", summary);

    Ok(())
}
