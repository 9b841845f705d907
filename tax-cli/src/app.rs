//! Glue between the command line and the calculator.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tax_core::calculations::common::format_amount;
use tax_core::{DeductionRates, NetTaxCalculator, NetTaxResult, TaxRecord, TaxSchedule};
use tax_data::ScheduleLoader;
use tracing::{debug, info};

/// Optional overrides for the default deduction amounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeductionOverrides {
    pub dependent_deduction: Option<Decimal>,
    pub nppf_rate: Option<Decimal>,
    pub gis_rate: Option<Decimal>,
}

impl DeductionOverrides {
    pub fn apply(
        &self,
        base: DeductionRates,
    ) -> DeductionRates {
        DeductionRates {
            dependent_deduction: self.dependent_deduction.unwrap_or(base.dependent_deduction),
            nppf_rate: self.nppf_rate.unwrap_or(base.nppf_rate),
            gis_rate: self.gis_rate.unwrap_or(base.gis_rate),
        }
    }
}

/// Builds the schedule to calculate with.
///
/// Uses the built-in brackets unless `brackets` points at a CSV file.
pub fn load_schedule(
    brackets: Option<&Path>,
    overrides: &DeductionOverrides,
) -> Result<TaxSchedule> {
    let default = TaxSchedule::default();
    let deductions = overrides.apply(default.deductions().clone());

    match brackets {
        Some(path) => {
            info!("loading bracket schedule from {}", path.display());
            ScheduleLoader::load_from_file(path, deductions)
                .with_context(|| format!("Failed to load schedule: {}", path.display()))
        }
        None => TaxSchedule::new(default.brackets().to_vec(), deductions)
            .context("Invalid deduction overrides"),
    }
}

/// The calculated tax for a named employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSummary {
    pub name: String,
    pub result: NetTaxResult,
}

impl fmt::Display for TaxSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{} has to pay ${} in taxes.",
            self.name,
            format_amount(self.result.net_tax)
        )
    }
}

/// Calculates net tax for `record`. `name` is only used for display.
pub fn estimate(
    name: &str,
    record: &TaxRecord,
    schedule: &TaxSchedule,
) -> Result<TaxSummary> {
    debug!(
        employee = name,
        position = %record.position,
        organization = %record.organization_type,
        "calculating net tax"
    );

    let result = NetTaxCalculator::new(schedule)
        .calculate(record)
        .with_context(|| format!("Failed to calculate tax for {name}"))?;

    debug!(
        "gross {} - dependent {} - gis {} - nppf {} = net {}",
        format_amount(result.gross_tax),
        format_amount(result.dependent_deduction),
        format_amount(result.gis_deduction),
        format_amount(result.nppf_deduction),
        format_amount(result.net_tax),
    );

    Ok(TaxSummary {
        name: name.to_string(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tax_core::{OrganizationType, Position};

    use super::*;

    #[test]
    fn overrides_replace_only_given_values() {
        let overrides = DeductionOverrides {
            gis_rate: Some(dec!(0.03)),
            ..Default::default()
        };

        let rates = overrides.apply(DeductionRates::default());

        assert_eq!(rates.gis_rate, dec!(0.03));
        assert_eq!(rates.nppf_rate, dec!(0.05));
        assert_eq!(rates.dependent_deduction, dec!(500));
    }

    #[test]
    fn load_schedule_without_file_uses_builtin_brackets() {
        let schedule = load_schedule(None, &DeductionOverrides::default()).unwrap();

        assert_eq!(schedule, TaxSchedule::default());
    }

    #[test]
    fn load_schedule_rejects_invalid_override() {
        let overrides = DeductionOverrides {
            nppf_rate: Some(dec!(2)),
            ..Default::default()
        };

        let result = load_schedule(None, &overrides);

        assert!(result.is_err());
    }

    #[test]
    fn summary_display_matches_greeting_format() {
        let record = TaxRecord::new(
            dec!(600000),
            Position::Regular,
            OrganizationType::Corporate,
            true,
        );

        let summary = estimate("Dorji", &record, &TaxSchedule::default()).unwrap();

        assert_eq!(summary.to_string(), "Dorji has to pay $57500.00 in taxes.");
    }

    #[test]
    fn estimate_propagates_invalid_input() {
        let record = TaxRecord::new(
            dec!(-100),
            Position::Regular,
            OrganizationType::Private,
            false,
        );

        let err = estimate("Kinley", &record, &TaxSchedule::default()).unwrap_err();

        assert!(err.to_string().contains("Kinley"));
        assert!(format!("{err:#}").contains("total income cannot be negative"));
    }
}
