//! Per-address eligibility resolution
//!
//! For one address the resolver:
//! 1. normalizes and validates the input,
//! 2. encodes one call per configured check selector,
//! 3. issues both calls concurrently and waits for both,
//! 4. decodes both results and keeps the larger amount.
//!
//! Every failure is turned into an [`EligibilityOutcome`] with `error` set;
//! `resolve` never returns an error to its caller.

use std::time::Duration;
use alloy::primitives::{Address, Bytes};
use log::{debug, warn};
use crate::{
    config::EligibilityConfig,
    errors::{ResolveError, TransportError},
    traits::RpcClient,
    types::{CallPayload, CheckedAddress, DecodePolicy, EligibilityOutcome, MethodSelector},
    utils::{
        call_utils::encode_call,
        decode_utils::{decode_amount, try_decode_amount, Amount},
    },
};

/// Resolves eligibility of single addresses against one contract
pub struct EligibilityResolver<R> {
    client: R,
    contract: Address,
    check_selectors: [MethodSelector; 2],
    call_timeout: Option<Duration>,
    decode_policy: DecodePolicy,
}

impl<R: RpcClient> EligibilityResolver<R> {
    pub fn new(client: R, config: &EligibilityConfig) -> Self {
        Self {
            client,
            contract: config.contract,
            check_selectors: config.check_selectors,
            call_timeout: config.call_timeout(),
            decode_policy: config.decode_policy,
        }
    }

    pub fn client(&self) -> &R {
        &self.client
    }

    /// Resolve one address into an outcome
    ///
    /// Failed outcomes keep the address string exactly as given.
    pub async fn resolve(&self, address: &str) -> EligibilityOutcome {
        match self.try_resolve(address).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("{address}: {err}");
                EligibilityOutcome::failed(address, err)
            }
        }
    }

    async fn try_resolve(&self, address: &str) -> Result<EligibilityOutcome, ResolveError> {
        let account = CheckedAddress::parse(address)?;
        let [first, second] = self.check_selectors;

        let (first_raw, second_raw) = tokio::try_join!(
            self.call(encode_call(first, &account)),
            self.call(encode_call(second, &account)),
        )?;

        let amount = self.decode(&first_raw)?.max(self.decode(&second_raw)?);
        debug!("{account}: amount {} ({} base units)", amount.value, amount.raw);
        Ok(EligibilityOutcome::resolved(&account, amount))
    }

    /// Issue one call, bounded by the per-call timeout if configured
    async fn call(&self, payload: CallPayload) -> Result<Bytes, TransportError> {
        let call = self.client.call(self.contract, payload.into_bytes());
        match self.call_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| TransportError::Timeout(limit))?,
            None => call.await,
        }
    }

    fn decode(&self, raw: &[u8]) -> Result<Amount, ResolveError> {
        match self.decode_policy {
            DecodePolicy::Lenient => Ok(decode_amount(raw)),
            DecodePolicy::Strict => Ok(try_decode_amount(raw)?),
        }
    }
}
