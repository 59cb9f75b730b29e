// tests/common/mod.rs
#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    future::Future,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};
use alloy::primitives::{address, Address, Bytes, U256};
use claim_check::{
    errors::TransportError,
    types::MethodSelector,
    EligibilityConfig, RpcClient, Throttle,
};

pub const CONTRACT: Address = address!("1111111111111111111111111111111111111111");
pub const CHECK_ONE: MethodSelector = MethodSelector::new([0xaa, 0x00, 0x00, 0x01]);
pub const CHECK_TWO: MethodSelector = MethodSelector::new([0xaa, 0x00, 0x00, 0x02]);

/// Amount in whole tokens as 18-decimal base units
pub fn tokens(whole: u64) -> U256 {
    U256::from(whole) * U256::from(1_000_000_000_000_000_000u64)
}

pub fn word(value: U256) -> Bytes {
    Bytes::from(value.to_be_bytes::<32>().to_vec())
}

pub fn test_config() -> EligibilityConfig {
    let mut config = EligibilityConfig::new(CONTRACT, [CHECK_ONE, CHECK_TWO]);
    config.rpc_url = "http://localhost:8545".to_string();
    config.delay_ms = 0;
    config
}

enum Reply {
    Data(Bytes),
    Slow(Bytes, Duration),
    Fail(TransportError),
    Hang,
}

/// Scripted in-memory endpoint
///
/// Unscripted calls return a zero word.
#[derive(Default)]
pub struct MockRpcClient {
    replies: HashMap<(MethodSelector, Address), Bytes>,
    failing: HashSet<MethodSelector>,
    hanging: HashSet<MethodSelector>,
    delays: HashMap<MethodSelector, Duration>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    seen: Mutex<Vec<(Address, Bytes)>>,
}

impl MockRpcClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_amount(mut self, selector: MethodSelector, account: Address, amount: U256) -> Self {
        self.replies.insert((selector, account), word(amount));
        self
    }

    pub fn with_reply(mut self, selector: MethodSelector, account: Address, data: Bytes) -> Self {
        self.replies.insert((selector, account), data);
        self
    }

    /// Every call with `selector` fails at the transport level
    pub fn failing(mut self, selector: MethodSelector) -> Self {
        self.failing.insert(selector);
        self
    }

    /// Every call with `selector` never completes
    pub fn hanging(mut self, selector: MethodSelector) -> Self {
        self.hanging.insert(selector);
        self
    }

    /// Every call with `selector` answers only after `delay`
    pub fn slow(mut self, selector: MethodSelector, delay: Duration) -> Self {
        self.delays.insert(selector, delay);
        self
    }

    /// Highest number of calls that were awaiting a reply at the same time
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Calldata of every call received, in arrival order
    pub fn seen(&self) -> Vec<(Address, Bytes)> {
        self.seen.lock().unwrap().clone()
    }

    fn reply(&self, data: &Bytes) -> Reply {
        let selector = MethodSelector::new(data[..4].try_into().unwrap());
        let account = Address::from_slice(&data[16..36]);
        if self.hanging.contains(&selector) {
            return Reply::Hang;
        }
        if self.failing.contains(&selector) {
            return Reply::Fail(TransportError::Rpc("connection reset".to_string()));
        }
        let data = self
            .replies
            .get(&(selector, account))
            .cloned()
            .unwrap_or_else(|| word(U256::ZERO));
        match self.delays.get(&selector) {
            Some(delay) => Reply::Slow(data, *delay),
            None => Reply::Data(data),
        }
    }
}

impl RpcClient for MockRpcClient {
    fn call(
        &self,
        contract: Address,
        data: Bytes,
    ) -> impl Future<Output = Result<Bytes, TransportError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.reply(&data);
        self.seen.lock().unwrap().push((contract, data));
        async move {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
            let result = match reply {
                Reply::Data(data) => Ok(data),
                Reply::Slow(data, delay) => {
                    tokio::time::sleep(delay).await;
                    Ok(data)
                }
                Reply::Fail(err) => Err(err),
                Reply::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Err(TransportError::Rpc("unreachable".to_string()))
                }
            };
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            result
        }
    }
}

/// Throttle that only counts how often it was awaited
#[derive(Default, Clone)]
pub struct CountingThrottle {
    pub pauses: Arc<AtomicUsize>,
}

impl CountingThrottle {
    pub fn count(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

impl Throttle for CountingThrottle {
    fn pause(&self) -> impl Future<Output = ()> + Send {
        self.pauses.fetch_add(1, Ordering::SeqCst);
        std::future::ready(())
    }
}
