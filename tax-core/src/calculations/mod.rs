//! Tax calculation modules.
//!
//! This module provides the progressive net tax calculator and the rounding
//! helpers used when presenting its results.

pub mod common;
pub mod net_tax;

pub use net_tax::{NetTaxCalculator, NetTaxError, NetTaxResult, compute_net_tax};
