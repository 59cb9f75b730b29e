//! Calldata encoding for single-address view calls
//!
//! Builds `selector ‖ address` payloads using the standard fixed-width ABI
//! argument encoding (the 20-byte address left-padded to a 32-byte slot).

use alloy::dyn_abi::DynSolValue;
use crate::types::{CallPayload, CheckedAddress, MethodSelector};

/// Encode a call to `selector(address)`
///
/// The address type guarantees the argument was validated, so encoding
/// cannot fail.
///
/// # Returns
/// A 36-byte payload: 4 selector bytes, 12 zero bytes, 20 address bytes
pub fn encode_call(selector: MethodSelector, address: &CheckedAddress) -> CallPayload {
    let argument = DynSolValue::Address(address.as_address()).abi_encode();
    let mut data = Vec::with_capacity(4 + argument.len());
    data.extend_from_slice(selector.as_slice());
    data.extend_from_slice(&argument);
    CallPayload(data.into())
}
