//! Percent change between two closes.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::core::AlertError;

/// Which way the price moved. A flat day counts as [`Direction::Up`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The indicator placed between the symbol and the percentage.
    pub const fn glyph(self) -> &'static str {
        match self {
            Direction::Up => "🔺",
            Direction::Down => "🔻",
        }
    }
}

/// Signed percent change, kept unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceChange {
    percent: Decimal,
}

impl PriceChange {
    /// The exact change, e.g. `-12.5` for a 12.5% drop.
    pub fn percent(&self) -> f64 {
        self.percent.to_f64().unwrap_or(f64::NAN)
    }

    /// The exact change as a decimal.
    pub const fn as_decimal(&self) -> Decimal {
        self.percent
    }

    pub fn direction(&self) -> Direction {
        if self.percent.is_sign_negative() && !self.percent.is_zero() {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Absolute change rounded to a whole percent, ties to even.
    pub fn rounded_magnitude(&self) -> Decimal {
        self.percent.abs().round().normalize()
    }
}

/// `(recent - previous) * 100 / previous`.
///
/// # Errors
///
/// Returns [`AlertError::Division`] when `previous` is zero.
pub fn compute_change(recent: Decimal, previous: Decimal) -> Result<PriceChange, AlertError> {
    if previous.is_zero() {
        return Err(AlertError::Division);
    }
    let percent = recent
        .checked_sub(previous)
        .and_then(|diff| diff.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| {
            AlertError::DataShape(format!("price change overflows: {recent} vs {previous}"))
        })?
        .checked_div(previous)
        .ok_or(AlertError::Division)?;
    Ok(PriceChange { percent })
}
