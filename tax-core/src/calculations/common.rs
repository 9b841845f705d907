//! Presentation helpers for calculated amounts.
//!
//! The calculator keeps full decimal precision. Amounts are rounded only
//! when they are shown to a person.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to two decimal places, with midpoints going away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(57500.125)), dec!(57500.13));
/// assert_eq!(round_half_up(dec!(-3300.125)), dec!(-3300.13));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two decimal places.
///
/// Negative amounts keep their sign so refunds stay visible.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}
