//! The bracket schedule and deduction rates used by the calculator.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

use super::{DeductionRates, TaxBracket};

/// Errors raised when a [`TaxSchedule`] is malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("no tax brackets provided")]
    NoTaxBrackets,

    #[error("first bracket must start at zero income, got {0}")]
    BracketsNotFromZero(Decimal),

    #[error("bracket starting at {found} does not continue from previous bracket ending at {expected}")]
    NonContiguousBrackets { expected: Decimal, found: Decimal },

    #[error("bracket starting at {0} is empty")]
    EmptyBracket(Decimal),

    #[error("unbounded bracket starting at {0} must be the last bracket")]
    UnboundedBracketNotLast(Decimal),

    #[error("last bracket starting at {0} must be unbounded")]
    LastBracketBounded(Decimal),

    #[error("tax rate must be between 0 and 1, got {0}")]
    InvalidTaxRate(Decimal),

    #[error("deduction rate must be between 0 and 1, got {0}")]
    InvalidDeductionRate(Decimal),

    #[error("dependent deduction must be non-negative, got {0}")]
    NegativeDependentDeduction(Decimal),
}

/// An ordered, contiguous set of brackets covering `[0, ∞)` plus the
/// deduction rates applied after gross tax.
///
/// The [`Default`] schedule is:
///
/// | Income range        | Rate |
/// |---------------------|------|
/// | 0 – 50,000          | 0%   |
/// | 50,000 – 100,000    | 10%  |
/// | 100,000 – 200,000   | 15%  |
/// | 200,000 and above   | 20%  |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
    deductions: DeductionRates,
}

impl TaxSchedule {
    /// Builds a schedule after checking the brackets tile `[0, ∞)` in order.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if the brackets are empty, do not start at
    /// zero, leave gaps or overlaps, have an unbounded bracket anywhere but
    /// last, or if any rate lies outside `[0, 1]`.
    pub fn new(
        brackets: Vec<TaxBracket>,
        deductions: DeductionRates,
    ) -> Result<Self, ScheduleError> {
        validate_brackets(&brackets)?;
        validate_deductions(&deductions)?;
        Ok(Self {
            brackets,
            deductions,
        })
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    pub fn deductions(&self) -> &DeductionRates {
        &self.deductions
    }
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(50000)), dec!(0.00)),
                TaxBracket::new(dec!(50000), Some(dec!(100000)), dec!(0.10)),
                TaxBracket::new(dec!(100000), Some(dec!(200000)), dec!(0.15)),
                TaxBracket::new(dec!(200000), None, dec!(0.20)),
            ],
            deductions: DeductionRates::default(),
        }
    }
}

fn is_rate(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE
}

fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), ScheduleError> {
    let first = brackets.first().ok_or(ScheduleError::NoTaxBrackets)?;
    if first.min_income != Decimal::ZERO {
        return Err(ScheduleError::BracketsNotFromZero(first.min_income));
    }

    let last_index = brackets.len() - 1;
    let mut expected_min = Decimal::ZERO;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.min_income != expected_min {
            return Err(ScheduleError::NonContiguousBrackets {
                expected: expected_min,
                found: bracket.min_income,
            });
        }
        if !is_rate(bracket.tax_rate) {
            return Err(ScheduleError::InvalidTaxRate(bracket.tax_rate));
        }

        match bracket.max_income {
            Some(_) if index == last_index => {
                return Err(ScheduleError::LastBracketBounded(bracket.min_income));
            }
            Some(max) if max <= bracket.min_income => {
                return Err(ScheduleError::EmptyBracket(bracket.min_income));
            }
            Some(max) => expected_min = max,
            None if index != last_index => {
                return Err(ScheduleError::UnboundedBracketNotLast(bracket.min_income));
            }
            None => {}
        }
    }

    Ok(())
}

fn validate_deductions(deductions: &DeductionRates) -> Result<(), ScheduleError> {
    if deductions.dependent_deduction < Decimal::ZERO {
        return Err(ScheduleError::NegativeDependentDeduction(
            deductions.dependent_deduction,
        ));
    }
    for rate in [deductions.nppf_rate, deductions.gis_rate] {
        if !is_rate(rate) {
            return Err(ScheduleError::InvalidDeductionRate(rate));
        }
    }
    Ok(())
}
