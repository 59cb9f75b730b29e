//! Error types for eligibility checking
//!
//! This module defines the error handling used across the crate:
//! - Startup errors (provider connection, configuration)
//! - Per-address errors (validation, transport, decoding)
//! - Conversion of per-address failures into outcome messages

use std::{path::PathBuf, time::Duration};
use thiserror::Error;

/// Top-level error type for claim-check
///
/// Only errors raised before a batch starts reach the caller through this
/// type. Per-address failures are folded into outcomes by the resolver.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Errors occurring while connecting to the endpoint
    #[error("Failed to initialize client: {0}")]
    Init(#[from] InitError),

    /// Invalid or incomplete configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Initialization-specific errors
///
/// These errors occur during the setup phase of the RPC client,
/// typically related to network connectivity and configuration.
#[derive(Debug, Error)]
pub enum InitError {
    /// Invalid or malformed RPC URL
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    /// WebSocket connection establishment errors
    #[error("WebSocket connection failed: {0}")]
    WsConnection(String),

    /// Chain ID retrieval errors
    #[error("Failed to get chain ID: {0}")]
    ChainId(String),
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("RPC URL is not set")]
    MissingRpcUrl,

    #[error("Contract address is not set")]
    MissingContract,

    /// A check selector was left at its zero default
    #[error("Check selector #{0} is not set")]
    MissingSelector(usize),

    #[error("No addresses to check")]
    NoAddresses,

    #[error("Invalid method selector '{0}': expected 4 hex bytes")]
    InvalidSelector(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Address validation errors
///
/// The display text is what ends up in the outcome, so it stays fixed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid address format")]
    InvalidAddress,
}

/// Failures of a single read-only contract call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Network, endpoint or protocol-level failure
    #[error("RPC request failed: {0}")]
    Rpc(String),

    /// The node executed the call and it reverted
    #[error("Call reverted: {0}")]
    Reverted(String),

    /// No response within the configured per-call timeout
    #[error("Call timed out after {0:?}")]
    Timeout(Duration),
}

/// Malformed call results, only surfaced under strict decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("expected a 32-byte word, got {0} bytes")]
    Length(usize),

    #[error("invalid hex: {0}")]
    Hex(String),
}

/// Why a single address could not be resolved
///
/// Never leaves the resolver; it is rendered into
/// [`EligibilityOutcome::error`](crate::types::EligibilityOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Malformed call result: {0}")]
    Decode(#[from] DecodeError),
}
