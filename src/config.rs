//! Run configuration
//!
//! An [`EligibilityConfig`] is built once at startup, from a JSON file
//! and/or command-line overrides, and passed by reference to the resolver
//! and batch constructors. Unset fields fall back to defaults; `validate`
//! rejects anything the pipeline cannot run without.

use std::{fs, path::Path, time::Duration};
use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use crate::{
    errors::ConfigError,
    throttle::DEFAULT_REQUEST_DELAY,
    types::{DecodePolicy, MethodSelector},
};

/// Per-call timeout applied when none is configured
pub const DEFAULT_CALL_TIMEOUT_MS: u64 = 30_000;

/// Complete eligibility-check configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EligibilityConfig {
    /// HTTP(S) or WS(S) endpoint
    pub rpc_url: String,
    /// Contract exposing the two check methods
    pub contract: Address,
    /// Selectors of the two `fn(address) view returns (uint256)` checks
    pub check_selectors: [MethodSelector; 2],
    /// Pause between addresses, in milliseconds
    pub delay_ms: u64,
    /// Per-call timeout in milliseconds; `None` disables it
    pub call_timeout_ms: Option<u64>,
    pub decode_policy: DecodePolicy,
    /// Addresses to check, in report order
    pub addresses: Vec<String>,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            rpc_url: String::new(),
            contract: Address::ZERO,
            check_selectors: [MethodSelector::default(); 2],
            delay_ms: DEFAULT_REQUEST_DELAY.as_millis() as u64,
            call_timeout_ms: Some(DEFAULT_CALL_TIMEOUT_MS),
            decode_policy: DecodePolicy::Lenient,
            addresses: Vec::new(),
        }
    }
}

impl EligibilityConfig {
    /// Configuration for `contract` with the two check selectors and defaults
    /// for everything else
    pub fn new(contract: Address, check_selectors: [MethodSelector; 2]) -> Self {
        Self { contract, check_selectors, ..Default::default() }
    }

    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn call_timeout(&self) -> Option<Duration> {
        self.call_timeout_ms.map(Duration::from_millis)
    }

    /// Check that a batch can run with this configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rpc_url.trim().is_empty() {
            return Err(ConfigError::MissingRpcUrl);
        }
        if self.contract.is_zero() {
            return Err(ConfigError::MissingContract);
        }
        if let Some(index) = self.check_selectors.iter().position(MethodSelector::is_zero) {
            return Err(ConfigError::MissingSelector(index + 1));
        }
        if self.addresses.is_empty() {
            return Err(ConfigError::NoAddresses);
        }
        Ok(())
    }
}

/// Parse an address list: one entry per line, blank lines and `#` comments
/// skipped
///
/// Entries are not validated here; malformed ones become error outcomes.
pub fn parse_address_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read an address list file, see [`parse_address_list`]
pub fn read_address_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_address_list(&contents))
}
