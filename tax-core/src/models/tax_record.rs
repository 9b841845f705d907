use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrganizationType, Position};

/// The inputs for a single net tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRecord {
    /// Annual income. Must be non-negative.
    pub total_income: Decimal,
    pub position: Position,
    pub organization_type: OrganizationType,
    pub has_children_in_school: bool,
}

impl TaxRecord {
    pub fn new(
        total_income: Decimal,
        position: Position,
        organization_type: OrganizationType,
        has_children_in_school: bool,
    ) -> Self {
        Self {
            total_income,
            position,
            organization_type,
            has_children_in_school,
        }
    }
}
