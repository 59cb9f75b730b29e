//! Extension points of the eligibility pipeline
//!
//! # Key Traits
//! - `RpcClient`: Issue read-only contract calls against an endpoint
//! - `Throttle`: Pace consecutive requests in a batch

use std::{future::Future, sync::Arc};
use alloy::primitives::{Address, Bytes};
use crate::errors::TransportError;

/// A remote endpoint able to execute read-only contract calls
///
/// Implementations must allow several calls to be in flight at once; the
/// resolver issues two calls per address concurrently.
pub trait RpcClient: Send + Sync {
    /// Execute `data` against `contract` and return the raw return data
    ///
    /// Network, endpoint and revert failures are reported as
    /// [`TransportError`].
    fn call(
        &self,
        contract: Address,
        data: Bytes,
    ) -> impl Future<Output = Result<Bytes, TransportError>> + Send;
}

impl<T: RpcClient> RpcClient for Arc<T> {
    fn call(
        &self,
        contract: Address,
        data: Bytes,
    ) -> impl Future<Output = Result<Bytes, TransportError>> + Send {
        (**self).call(contract, data)
    }
}

/// Pacing strategy applied between consecutive addresses of a batch
pub trait Throttle: Send + Sync {
    /// Wait until the next request may start
    fn pause(&self) -> impl Future<Output = ()> + Send;
}
