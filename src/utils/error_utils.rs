//! Revert data rendering for failed view calls
//!
//! A reverted `eth_call` may carry ABI-encoded error data. Two standard
//! shapes are understood:
//! - `Error(string)` (selector `0x08c379a0`), raised by `require`/`revert`
//! - `Panic(uint256)` (selector `0x4e487b71`), raised by failed assertions,
//!   overflow and similar
//!
//! Anything else is shown as hex.

use alloy::{
    dyn_abi::{DynSolType, DynSolValue},
    primitives::hex,
};

const ERROR_STRING_SELECTOR: [u8; 4] = [0x08, 0xc3, 0x79, 0xa0];
const PANIC_SELECTOR: [u8; 4] = [0x4e, 0x48, 0x7b, 0x71];

/// Decode a standard revert reason
///
/// # Returns
/// * `Some(String)` - the `Error(string)` message or a panic description
/// * `None` - if the data is not one of the two standard shapes
pub fn decode_revert_reason(output: &[u8]) -> Option<String> {
    if output.len() < 4 {
        return None;
    }
    let (selector, body) = output.split_at(4);

    if selector == ERROR_STRING_SELECTOR {
        return match DynSolType::String.abi_decode(body) {
            Ok(DynSolValue::String(reason)) => Some(reason),
            _ => None,
        };
    }
    if selector == PANIC_SELECTOR {
        return match DynSolType::Uint(256).abi_decode(body) {
            Ok(DynSolValue::Uint(code, _)) => Some(panic_description(code.saturating_to::<u64>())),
            _ => None,
        };
    }
    None
}

/// Render revert data for an error message, falling back to hex
pub fn describe_revert(output: &[u8]) -> String {
    match decode_revert_reason(output) {
        Some(reason) => reason,
        None if output.is_empty() => "execution reverted".to_string(),
        None => format!("execution reverted with data 0x{}", hex::encode(output)),
    }
}

fn panic_description(code: u64) -> String {
    let reason = match code {
        0x01 => "Assertion failed",
        0x11 => "Arithmetic overflow",
        0x12 => "Division by zero",
        0x21 => "Invalid enum value",
        0x22 => "Invalid storage byte array",
        0x31 => "Pop on empty array",
        0x32 => "Array index out of bounds",
        0x41 => "Out of memory",
        0x51 => "Call to zero-initialized function",
        code => return format!("Panic: Unknown error code (0x{:x})", code),
    };
    format!("Panic: {reason}")
}
