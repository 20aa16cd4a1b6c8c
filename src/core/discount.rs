use crate::domain::model::DiscountRequest;
use crate::utils::error::{KitError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parses the shortest decimal form of `value`, so `2.01` is exactly `2.01`
/// rather than its binary approximation. Values outside `Decimal` range fail.
fn to_decimal(value: f64) -> Result<Decimal> {
    Decimal::from_str(&value.to_string()).map_err(|_| KitError::InvalidInput)
}

/// Half-up (midpoint away from zero) rounding to `places` decimals.
fn round_to(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

fn to_f64(value: Decimal) -> Result<f64> {
    // via the printed form so the result is the f64 nearest to that literal
    value
        .normalize()
        .to_string()
        .parse::<f64>()
        .map_err(|_| KitError::InvalidInput)
}

/// Returns `price` reduced by `discount_percent`, rounded to 2 decimals.
///
/// Arithmetic is done in decimal. Rounding is two-stage: the product is
/// rounded half-up to 3 decimals first and that result to 2. So `0.005625` at
/// 20% gives `0.01` (`0.0045 -> 0.005 -> 0.01`). A 0% discount does no
/// arithmetic and is rounded once; a 100% discount is exactly zero.
pub fn calculate_discount(price: f64, discount_percent: f64) -> Result<f64> {
    if !price.is_finite()
        || !discount_percent.is_finite()
        || price <= 0.0
        || !(0.0..=100.0).contains(&discount_percent)
    {
        return Err(KitError::InvalidInput);
    }

    if discount_percent == 100.0 {
        return Ok(0.0);
    }

    let price = to_decimal(price)?;
    if discount_percent == 0.0 {
        return to_f64(round_to(price, 2));
    }

    let hundred = Decimal::ONE_HUNDRED;
    let factor = (hundred - to_decimal(discount_percent)?) / hundred;
    let raw = price.checked_mul(factor).ok_or(KitError::InvalidInput)?;

    to_f64(round_to(round_to(raw, 3), 2))
}

impl DiscountRequest {
    pub fn calculate(&self) -> Result<f64> {
        calculate_discount(self.price, self.discount_percent)
    }
}
