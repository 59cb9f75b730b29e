//! Request pacing for batch resolution

use std::{future::Future, time::Duration};
use crate::traits::Throttle;

/// Default pause between two addresses
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Sleep for a fixed duration between requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        Self(DEFAULT_REQUEST_DELAY)
    }
}

impl Throttle for FixedDelay {
    fn pause(&self) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(self.0)
    }
}

/// No pacing at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDelay;

impl Throttle for NoDelay {
    fn pause(&self) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}
