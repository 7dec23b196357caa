//! Price conversion between the API and storage representations.
//!
//! The API carries prices as plain `f64` numbers; the `products.price`
//! column is `NUMERIC(10, 2)`, read and written as [`Decimal`]. Both
//! directions go through the shortest decimal string of the value, so any
//! price the column can hold survives a write/read cycle bit-for-bit.
//!
//! Values the column would silently round (more than two fractional
//! digits) or overflow are rejected instead of being coerced.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Fractional digits stored by the `products.price` column.
pub const PRICE_SCALE: u32 = 2;

/// Largest price the `NUMERIC(10, 2)` column can hold.
/// 9_999_999_999 hundredths, split into the low and mid 32-bit words.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceError {
    #[error("price must be a finite number")]
    NotFinite,

    #[error("price must be greater than zero")]
    NotPositive,

    #[error("price has {scale} fractional digits (max 2)")]
    TooPrecise { scale: u32 },

    #[error("price exceeds the maximum of 99999999.99")]
    TooLarge,

    #[error("stored price {0} cannot be represented as a number")]
    Unrepresentable(Decimal),
}

/// Convert an API price into its storage form.
pub fn to_storage(price: f64) -> Result<Decimal, PriceError> {
    if !price.is_finite() {
        return Err(PriceError::NotFinite);
    }
    if price <= 0.0 {
        return Err(PriceError::NotPositive);
    }
    // `Display` for f64 is the shortest string that parses back to the same value
    // and never uses exponent notation.
    let decimal = Decimal::from_str(&price.to_string()).map_err(|_| PriceError::TooLarge)?;
    if decimal.scale() > PRICE_SCALE {
        return Err(PriceError::TooPrecise {
            scale: decimal.scale(),
        });
    }
    if decimal > MAX_PRICE {
        return Err(PriceError::TooLarge);
    }
    Ok(decimal)
}

/// Convert a stored price back into its API form.
pub fn from_storage(price: Decimal) -> Result<f64, PriceError> {
    price
        .to_string()
        .parse::<f64>()
        .map_err(|_| PriceError::Unrepresentable(price))
}
