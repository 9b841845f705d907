use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Amounts and rates for the deductions subtracted from gross tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRates {
    /// Flat amount subtracted when the taxpayer has children in school.
    pub dependent_deduction: Decimal,

    /// Provident fund rate applied to total income for non-government employees.
    pub nppf_rate: Decimal,

    /// Group insurance rate applied to total income for corporate employees.
    pub gis_rate: Decimal,
}

impl Default for DeductionRates {
    fn default() -> Self {
        Self {
            dependent_deduction: dec!(500),
            nppf_rate: dec!(0.05),
            gis_rate: dec!(0.02),
        }
    }
}
