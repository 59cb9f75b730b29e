//! Decoding of fixed-width amount results
//!
//! View calls return a single `uint256` word. Amounts use the 18-decimal
//! fixed-point convention, so `10^18` base units decode to `1.0`.
//!
//! The lenient decoders never fail: anything that is not a 32-byte word
//! decodes to zero. The `try_` variants report why a result was rejected.

use alloy::primitives::{hex, utils::format_units, U256};
use log::warn;
use crate::errors::DecodeError;

/// Number of fractional digits in decoded amounts
pub const AMOUNT_DECIMALS: u8 = 18;

/// Size of one ABI word
const WORD_SIZE: usize = 32;

/// A decoded amount, kept both exact and scaled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount {
    /// Base units as returned by the contract
    pub raw: U256,
    /// `raw / 10^18`
    pub value: f64,
}

impl Amount {
    pub const ZERO: Self = Self { raw: U256::ZERO, value: 0.0 };

    /// Scale a base-unit amount by `10^-18`
    ///
    /// The integer is formatted at full precision before the final
    /// floating conversion.
    pub fn from_raw(raw: U256) -> Self {
        if raw.is_zero() {
            return Self::ZERO;
        }
        let value = format_units(raw, AMOUNT_DECIMALS)
            .ok()
            .and_then(|formatted| formatted.parse::<f64>().ok())
            .unwrap_or_default();
        Self { raw, value }
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// The greater of two amounts, compared on base units
    pub fn max(self, other: Self) -> Self {
        if other.raw > self.raw { other } else { self }
    }
}

/// Decode a raw call result, rejecting anything but a single word
///
/// An empty result (returned for calls into accounts without code) is
/// treated as zero.
pub fn try_decode_amount(raw: &[u8]) -> Result<Amount, DecodeError> {
    match raw.len() {
        0 => Ok(Amount::ZERO),
        WORD_SIZE => Ok(Amount::from_raw(U256::from_be_slice(raw))),
        len => Err(DecodeError::Length(len)),
    }
}

/// Decode a textual result, with or without `0x`
pub fn try_decode_amount_hex(raw: &str) -> Result<Amount, DecodeError> {
    let digits = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")).unwrap_or(raw);
    let bytes = hex::decode(digits).map_err(|e| DecodeError::Hex(e.to_string()))?;
    try_decode_amount(&bytes)
}

/// Decode a raw call result, degrading malformed input to zero
pub fn decode_amount(raw: &[u8]) -> Amount {
    try_decode_amount(raw).unwrap_or_else(|e| {
        warn!("treating malformed call result as zero: {e}");
        Amount::ZERO
    })
}

/// Textual counterpart of [`decode_amount`]
pub fn decode_amount_hex(raw: &str) -> Amount {
    try_decode_amount_hex(raw).unwrap_or_else(|e| {
        warn!("treating malformed call result as zero: {e}");
        Amount::ZERO
    })
}
