//! Utility functions for read-only contract calls
//!
//! # Modules
//!
//! - [`call_utils`]: Calldata encoding
//!   - `selector(address)` payloads with ABI word padding
//!
//! - [`decode_utils`]: Result decoding
//!   - 18-decimal fixed-point amounts
//!   - Lenient and strict decoding
//!
//! - [`error_utils`]: Revert handling
//!   - `Error(string)` and `Panic(uint256)` reason extraction
//!
//! # Example
//!
//! ```
//! use claim_check::{
//!     types::{CheckedAddress, MethodSelector},
//!     utils::{call_utils::encode_call, decode_utils::decode_amount_hex},
//! };
//!
//! let address = CheckedAddress::parse("0x28C6c06298d514Db089934071355E5743bf21d60").unwrap();
//! let payload = encode_call(MethodSelector::from_signature("balanceOf(address)"), &address);
//! assert_eq!(payload.as_bytes().len(), 36);
//!
//! let amount = decode_amount_hex("0x0000000000000000000000000000000000000000000000000de0b6b3a7640000");
//! assert_eq!(amount.value, 1.0);
//! ```

/// Calldata encoding utilities
pub mod call_utils;

/// Amount decoding utilities
pub mod decode_utils;

/// Revert reason utilities
pub mod error_utils;
