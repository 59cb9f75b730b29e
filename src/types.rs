//! Core types for eligibility checking
//!
//! This module defines the data structures shared by the pipeline:
//! - Validated account addresses and method selectors
//! - Call payloads sent to the contract
//! - Per-address outcomes and the summary derived from them

use std::{fmt, str::FromStr};
pub use alloy::primitives::{Address, Bytes, Selector, U256};
use alloy::primitives::{hex, keccak256};
use serde::{Deserialize, Serialize};
use crate::{
    errors::{ConfigError, ValidationError},
    utils::decode_utils::Amount,
};

/// An account address that passed format validation
///
/// Input is accepted case-insensitively, with or without a `0x` prefix.
/// The canonical form is 40 lowercase hex characters without prefix;
/// `Display` adds the `0x` back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckedAddress(Address);

impl CheckedAddress {
    /// Normalize and validate a raw address string
    ///
    /// # Returns
    /// * `Ok(CheckedAddress)` - if exactly 40 hex characters remain after
    ///   lowercasing and stripping an optional `0x`
    /// * `Err(ValidationError::InvalidAddress)` - otherwise
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let lower = input.to_lowercase();
        let digits = lower.strip_prefix("0x").unwrap_or(&lower);
        if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidAddress);
        }
        let address = Address::from_str(digits).map_err(|_| ValidationError::InvalidAddress)?;
        Ok(Self(address))
    }

    /// 40 lowercase hex characters, no prefix
    pub fn canonical(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_address(&self) -> Address {
        self.0
    }
}

impl fmt::Display for CheckedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.canonical())
    }
}

impl From<Address> for CheckedAddress {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

/// 4-byte identifier of a contract view function
///
/// Serialized as `0x`-prefixed hex text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MethodSelector(Selector);

impl MethodSelector {
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(Selector::new(bytes))
    }

    /// Derive the selector from a Solidity signature, e.g. `"eligible(address)"`
    pub fn from_signature(signature: &str) -> Self {
        let hash = keccak256(signature.as_bytes());
        Self(Selector::from_slice(&hash[..4]))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl FromStr for MethodSelector {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|_| ConfigError::InvalidSelector(s.to_string()))?;
        let bytes: [u8; 4] = bytes
            .try_into()
            .map_err(|_| ConfigError::InvalidSelector(s.to_string()))?;
        Ok(Self::new(bytes))
    }
}

impl TryFrom<String> for MethodSelector {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MethodSelector> for String {
    fn from(selector: MethodSelector) -> Self {
        selector.to_string()
    }
}

impl fmt::Display for MethodSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Calldata for one view call: selector followed by one 32-byte argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallPayload(pub(crate) Bytes);

impl CallPayload {
    pub fn as_bytes(&self) -> &Bytes {
        &self.0
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

/// How malformed call results are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Malformed results count as amount 0
    #[default]
    Lenient,
    /// Malformed results fail the address
    Strict,
}

/// Result of checking one address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityOutcome {
    /// `0x`-prefixed canonical address, or the input as given when it failed
    pub address: String,
    pub is_eligible: bool,
    /// Eligible amount in whole tokens (18 decimals)
    pub amount: f64,
    /// Eligible amount in base units
    pub raw_amount: U256,
    pub error: Option<String>,
}

impl EligibilityOutcome {
    /// Outcome of a successful resolution
    pub fn resolved(address: &CheckedAddress, amount: Amount) -> Self {
        Self {
            address: address.to_string(),
            is_eligible: !amount.is_zero(),
            amount: amount.value,
            raw_amount: amount.raw,
            error: None,
        }
    }

    /// Terminal outcome for an address that could not be resolved
    pub fn failed(address: &str, error: impl ToString) -> Self {
        Self {
            address: address.to_string(),
            is_eligible: false,
            amount: 0.0,
            raw_amount: U256::ZERO,
            error: Some(error.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Aggregate over a sequence of outcomes
///
/// Always derived with [`SummaryReport::from_outcomes`]; never stored on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryReport {
    pub eligible: usize,
    pub not_eligible: usize,
    pub errors: usize,
    /// Sum of `amount` over eligible outcomes
    pub total_amount: f64,
    /// Sum of `raw_amount` over eligible outcomes
    pub total_raw_amount: U256,
}

impl SummaryReport {
    pub fn from_outcomes(outcomes: &[EligibilityOutcome]) -> Self {
        let mut report = Self::default();
        for outcome in outcomes {
            match (&outcome.error, outcome.is_eligible) {
                (Some(_), _) => report.errors += 1,
                (None, true) => {
                    report.eligible += 1;
                    report.total_amount += outcome.amount;
                    report.total_raw_amount = report.total_raw_amount.saturating_add(outcome.raw_amount);
                }
                (None, false) => report.not_eligible += 1,
            }
        }
        report
    }

    /// Number of outcomes the report was built from
    pub fn total(&self) -> usize {
        self.eligible + self.not_eligible + self.errors
    }
}
