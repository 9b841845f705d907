mod deduction_rates;
mod organization_type;
mod position;
mod tax_bracket;
mod tax_record;
mod tax_schedule;

pub use deduction_rates::DeductionRates;
pub use organization_type::{CategoryParseError, OrganizationType};
pub use position::Position;
pub use tax_bracket::TaxBracket;
pub use tax_record::TaxRecord;
pub use tax_schedule::{ScheduleError, TaxSchedule};
