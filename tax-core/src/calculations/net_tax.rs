//! Progressive net tax calculation.
//!
//! Gross tax is computed from the bracket schedule, then deductions are
//! subtracted in a fixed order:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Gross tax from the progressive brackets |
//! | 2    | Dependent deduction (flat amount, children in school only) |
//! | 3    | Group insurance (GIS): income × GIS rate, corporate only |
//! | 4    | Provident fund (NPPF): income × NPPF rate, waived for government |
//! | 5    | Net tax: Step 1 − Step 2 − Step 3 − Step 4 |
//!
//! Net tax is not clamped and is negative whenever deductions exceed gross tax.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::NetTaxCalculator;
//! use tax_core::{OrganizationType, Position, TaxRecord, TaxSchedule};
//!
//! let schedule = TaxSchedule::default();
//! let record = TaxRecord::new(
//!     dec!(600000),
//!     Position::Regular,
//!     OrganizationType::Corporate,
//!     true,
//! );
//!
//! let result = NetTaxCalculator::new(&schedule).calculate(&record).unwrap();
//!
//! assert_eq!(result.gross_tax, dec!(100000));
//! assert_eq!(result.net_tax, dec!(57500));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{OrganizationType, Position, TaxRecord, TaxSchedule};

/// Errors that can occur during net tax calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetTaxError {
    /// Total income was negative.
    #[error("total income cannot be negative, got {0}")]
    InvalidInput(Decimal),
}

/// Breakdown of a net tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetTaxResult {
    /// Tax from the bracket schedule before any deduction.
    pub gross_tax: Decimal,

    /// Flat deduction for children in school, or zero.
    pub dependent_deduction: Decimal,

    /// Group insurance deduction, or zero for non-corporate employers.
    pub gis_deduction: Decimal,

    /// Provident fund deduction, or zero for government employers.
    pub nppf_deduction: Decimal,

    /// Gross tax less all deductions. May be negative.
    pub net_tax: Decimal,
}

impl NetTaxResult {
    /// Sum of every deduction applied.
    pub fn total_deductions(&self) -> Decimal {
        self.dependent_deduction + self.gis_deduction + self.nppf_deduction
    }

    /// True when deductions exceed gross tax.
    pub fn is_refund(&self) -> bool {
        self.net_tax < Decimal::ZERO
    }
}

/// Calculator for net tax over a borrowed [`TaxSchedule`].
#[derive(Debug, Clone)]
pub struct NetTaxCalculator<'a> {
    schedule: &'a TaxSchedule,
}

impl<'a> NetTaxCalculator<'a> {
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self { schedule }
    }

    /// Calculates gross tax, each deduction and the resulting net tax.
    ///
    /// The record's `position` does not affect the result.
    ///
    /// # Errors
    ///
    /// Returns [`NetTaxError::InvalidInput`] if `total_income` is negative.
    pub fn calculate(
        &self,
        record: &TaxRecord,
    ) -> Result<NetTaxResult, NetTaxError> {
        let income = record.total_income;
        if income < Decimal::ZERO {
            return Err(NetTaxError::InvalidInput(income));
        }

        let gross_tax = self.gross_tax(income);
        let nppf_deduction = self.nppf_deduction(income, record.organization_type);
        let dependent_deduction = self.dependent_deduction(record.has_children_in_school);
        let gis_deduction = self.gis_deduction(income, record.organization_type);

        let net_tax = self.net_tax(gross_tax, dependent_deduction, gis_deduction, nppf_deduction);

        debug!(
            income = %income,
            organization = %record.organization_type,
            gross_tax = %gross_tax,
            dependent_deduction = %dependent_deduction,
            gis_deduction = %gis_deduction,
            nppf_deduction = %nppf_deduction,
            net_tax = %net_tax,
            "net tax calculated"
        );

        if net_tax < Decimal::ZERO {
            warn!(
                net_tax = %net_tax,
                gross_tax = %gross_tax,
                "deductions exceed gross tax; net tax is negative"
            );
        }

        Ok(NetTaxResult {
            gross_tax,
            dependent_deduction,
            gis_deduction,
            nppf_deduction,
            net_tax,
        })
    }

    /// Sums the taxed portion of each bracket up to and including the one
    /// containing `income`.
    fn gross_tax(
        &self,
        income: Decimal,
    ) -> Decimal {
        let mut tax = Decimal::ZERO;
        for bracket in self.schedule.brackets() {
            tax += bracket.tax_on(income);
            if bracket.contains(income) {
                break;
            }
        }
        tax
    }

    fn dependent_deduction(
        &self,
        has_children_in_school: bool,
    ) -> Decimal {
        if has_children_in_school {
            self.schedule.deductions().dependent_deduction
        } else {
            Decimal::ZERO
        }
    }

    fn gis_deduction(
        &self,
        income: Decimal,
        organization_type: OrganizationType,
    ) -> Decimal {
        if organization_type.has_group_insurance() {
            income * self.schedule.deductions().gis_rate
        } else {
            Decimal::ZERO
        }
    }

    fn nppf_deduction(
        &self,
        income: Decimal,
        organization_type: OrganizationType,
    ) -> Decimal {
        if organization_type.pays_provident_fund() {
            income * self.schedule.deductions().nppf_rate
        } else {
            Decimal::ZERO
        }
    }

    fn net_tax(
        &self,
        gross_tax: Decimal,
        dependent_deduction: Decimal,
        gis_deduction: Decimal,
        nppf_deduction: Decimal,
    ) -> Decimal {
        let running = gross_tax - dependent_deduction - gis_deduction;
        running - nppf_deduction
    }
}

/// Computes net tax for one taxpayer using the default [`TaxSchedule`].
///
/// # Errors
///
/// Returns [`NetTaxError::InvalidInput`] if `total_income` is negative.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::OrganizationType;
/// use tax_core::calculations::compute_net_tax;
///
/// let net = compute_net_tax(dec!(400000), OrganizationType::Government, false).unwrap();
///
/// assert_eq!(net, dec!(60000));
/// ```
pub fn compute_net_tax(
    total_income: Decimal,
    organization_type: OrganizationType,
    has_children_in_school: bool,
) -> Result<Decimal, NetTaxError> {
    let schedule = TaxSchedule::default();
    let record = TaxRecord::new(
        total_income,
        Position::default(),
        organization_type,
        has_children_in_school,
    );
    NetTaxCalculator::new(&schedule)
        .calculate(&record)
        .map(|result| result.net_tax)
}
