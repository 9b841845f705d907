use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A half-open income range `[min_income, max_income)` taxed at `tax_rate`.
///
/// `max_income` of `None` means the bracket has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        min_income: Decimal,
        max_income: Option<Decimal>,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            min_income,
            max_income,
            tax_rate,
        }
    }

    /// Whether `income` falls inside this bracket.
    pub fn contains(
        &self,
        income: Decimal,
    ) -> bool {
        income >= self.min_income && self.max_income.is_none_or(|max| income < max)
    }

    /// Tax owed on the part of `income` that lies inside this bracket.
    pub fn tax_on(
        &self,
        income: Decimal,
    ) -> Decimal {
        if income <= self.min_income {
            return Decimal::ZERO;
        }
        let top = match self.max_income {
            Some(max) => income.min(max),
            None => income,
        };
        (top - self.min_income) * self.tax_rate
    }
}
