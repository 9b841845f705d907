mod loader;

pub use loader::{ScheduleLoader, ScheduleLoaderError, TaxBracketRecord};
