pub mod calculations;
pub mod models;

pub use calculations::{NetTaxCalculator, NetTaxError, NetTaxResult, compute_net_tax};
pub use models::*;
