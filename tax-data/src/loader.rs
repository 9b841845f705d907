use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{DeductionRates, ScheduleError, TaxBracket, TaxSchedule};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a bracket schedule.
#[derive(Debug, Error)]
pub enum ScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("cannot open schedule file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),
}

impl From<csv::Error> for ScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        ScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single row from a bracket schedule CSV file.
///
/// - `min_income`: lower bound of the bracket (inclusive)
/// - `max_income`: upper bound of the bracket (exclusive, empty for unlimited)
/// - `rate`: the marginal tax rate as a decimal (e.g., 0.10 for 10%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaxBracketRecord {
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

impl From<&TaxBracketRecord> for TaxBracket {
    fn from(record: &TaxBracketRecord) -> Self {
        TaxBracket::new(record.min_income, record.max_income, record.rate)
    }
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for bracket schedules stored as CSV.
///
/// Rows must be ordered by `min_income`; the resulting schedule is validated
/// by [`TaxSchedule::new`].
pub struct ScheduleLoader;

impl ScheduleLoader {
    /// Parse bracket records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TaxBracketRecord>, ScheduleLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TaxBracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parse and validate a schedule, pairing the brackets with `deductions`.
    pub fn load<R: Read>(
        reader: R,
        deductions: DeductionRates,
    ) -> Result<TaxSchedule, ScheduleLoaderError> {
        let records = Self::parse(reader)?;
        debug!(brackets = records.len(), "parsed bracket schedule");

        let brackets = records.iter().map(TaxBracket::from).collect();
        Ok(TaxSchedule::new(brackets, deductions)?)
    }

    /// Load a schedule from a CSV file on disk.
    pub fn load_from_file(
        path: &Path,
        deductions: DeductionRates,
    ) -> Result<TaxSchedule, ScheduleLoaderError> {
        let file = File::open(path).map_err(|source| ScheduleLoaderError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load(file, deductions)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const TEST_CSV: &str = r#"min_income,max_income,rate
0,50000,0.00
50000,100000,0.10
100000,200000,0.15
200000,,0.20
"#;

    #[test]
    fn parse_valid_csv() {
        let records = ScheduleLoader::parse(TEST_CSV.as_bytes()).unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(
            records[1],
            TaxBracketRecord {
                min_income: dec!(50000),
                max_income: Some(dec!(100000)),
                rate: dec!(0.10),
            }
        );
    }

    #[test]
    fn parse_empty_max_income_as_none() {
        let records = ScheduleLoader::parse(TEST_CSV.as_bytes()).unwrap();

        assert_eq!(records[3].max_income, None);
    }

    #[test]
    fn parse_whitespace_max_income_as_none() {
        let csv = "min_income,max_income,rate\n0,  ,0.25\n";

        let records = ScheduleLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(records[0].max_income, None);
    }

    #[test]
    fn parse_rejects_invalid_decimal() {
        let csv = "min_income,max_income,rate\n0,lots,0.10\n";

        let result = ScheduleLoader::parse(csv.as_bytes());

        assert!(matches!(result, Err(ScheduleLoaderError::CsvParse(_))));
    }

    #[test]
    fn parse_rejects_missing_column() {
        let csv = "min_income,rate\n0,0.10\n";

        let result = ScheduleLoader::parse(csv.as_bytes());

        assert!(matches!(result, Err(ScheduleLoaderError::CsvParse(_))));
    }

    #[test]
    fn load_builds_default_equivalent_schedule() {
        let schedule = ScheduleLoader::load(TEST_CSV.as_bytes(), DeductionRates::default()).unwrap();

        assert_eq!(schedule, TaxSchedule::default());
    }

    #[test]
    fn load_rejects_bounded_last_bracket() {
        let csv = "min_income,max_income,rate\n0,50000,0.00\n50000,100000,0.10\n";

        let result = ScheduleLoader::load(csv.as_bytes(), DeductionRates::default());

        assert!(matches!(
            result,
            Err(ScheduleLoaderError::Schedule(ScheduleError::LastBracketBounded(_)))
        ));
    }

    #[test]
    fn load_rejects_empty_file() {
        let csv = "min_income,max_income,rate\n";

        let result = ScheduleLoader::load(csv.as_bytes(), DeductionRates::default());

        assert!(matches!(
            result,
            Err(ScheduleLoaderError::Schedule(ScheduleError::NoTaxBrackets))
        ));
    }
}
