//! Sequential batch resolution
//!
//! Addresses are resolved one at a time, in input order, with the
//! configured [`Throttle`] awaited between consecutive addresses. A failing
//! address yields an error outcome and the batch carries on, so the output
//! always has exactly one outcome per input.

use log::info;
use crate::{
    config::EligibilityConfig,
    resolver::EligibilityResolver,
    throttle::FixedDelay,
    traits::{RpcClient, Throttle},
    types::{EligibilityOutcome, SummaryReport},
};

/// Batch driver over an [`EligibilityResolver`]
pub struct BatchResolver<R, T = FixedDelay> {
    resolver: EligibilityResolver<R>,
    throttle: T,
}

impl<R: RpcClient> BatchResolver<R, FixedDelay> {
    /// Resolver and fixed inter-address delay both taken from `config`
    pub fn from_config(client: R, config: &EligibilityConfig) -> Self {
        Self::new(EligibilityResolver::new(client, config), FixedDelay(config.delay()))
    }
}

impl<R: RpcClient, T: Throttle> BatchResolver<R, T> {
    pub fn new(resolver: EligibilityResolver<R>, throttle: T) -> Self {
        Self { resolver, throttle }
    }

    pub fn resolver(&self) -> &EligibilityResolver<R> {
        &self.resolver
    }

    /// Resolve every address in order
    ///
    /// # Returns
    /// One outcome per input address, in input order
    pub async fn resolve_all<I, S>(&self, addresses: I) -> Vec<EligibilityOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut addresses = addresses.into_iter().peekable();
        let mut outcomes = Vec::with_capacity(addresses.size_hint().0);

        while let Some(address) = addresses.next() {
            let address = address.as_ref();
            info!("[{}] checking {address}", outcomes.len() + 1);
            outcomes.push(self.resolver.resolve(address).await);

            if addresses.peek().is_some() {
                self.throttle.pause().await;
            }
        }
        outcomes
    }
}

/// Aggregate outcomes into a summary
pub fn summarize(outcomes: &[EligibilityOutcome]) -> SummaryReport {
    SummaryReport::from_outcomes(outcomes)
}
