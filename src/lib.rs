//! # claim-check
//!
//! Batch eligibility checking for token allocations through read-only
//! contract calls.
//!
//! ## Core Features
//!
//! - **Call Encoding**
//!   - `selector(address)` calldata with ABI word padding
//!
//! - **Result Decoding**
//!   - 18-decimal fixed-point amounts at full 256-bit precision
//!   - Malformed results degrade to zero, or fail the address under the
//!     strict policy
//!
//! - **Resolution**
//!   - Two independent check methods queried concurrently per address
//!   - Eligible amount is the larger of the two
//!   - Per-address failure isolation
//!
//! - **Batching**
//!   - Sequential, order-preserving, throttled between addresses
//!   - Summary counts and totals
//!
//! ## Features
//!
//! - `rustls-tls`: Uses rustls as the TLS implementation instead of native-tls (OpenSSL).
//!
//!   Usage example:
//!   ```toml
//!   [dependencies]
//!   claim-check = { version = "0.1", default-features = false, features = ["rustls-tls"] }
//!   ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use claim_check::{
//!     AlloyRpcClient, BatchResolver, EligibilityConfig, SummaryReport,
//!     types::MethodSelector,
//! };
//! use alloy::primitives::address;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = EligibilityConfig::new(
//!     address!("1111111111111111111111111111111111111111"),
//!     [
//!         MethodSelector::from_signature("claimableAmount(address)"),
//!         MethodSelector::from_signature("bonusAmount(address)"),
//!     ],
//! );
//! let client = AlloyRpcClient::connect("https://eth.llamarpc.com").await?;
//! let batch = BatchResolver::from_config(client, &config);
//!
//! let outcomes = batch
//!     .resolve_all(["0x28C6c06298d514Db089934071355E5743bf21d60"])
//!     .await;
//! let summary = SummaryReport::from_outcomes(&outcomes);
//! println!("{} eligible, total {}", summary.eligible, summary.total_amount);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - `types`: Addresses, selectors, outcomes and summaries
//! - `utils`: Encoding, decoding and revert helpers
//! - `traits`: `RpcClient` and `Throttle` extension points
//! - `provider`: alloy-backed `RpcClient`
//! - `resolver`: Single-address resolution
//! - `batch`: Sequential batch resolution
//! - `throttle`: Pacing strategies
//! - `config`: Run configuration
//! - `errors`: Error types

pub mod types;
pub mod utils;
pub mod traits;
pub mod errors;
pub mod config;
pub mod provider;
pub mod resolver;
pub mod batch;
pub mod throttle;

// Re-export only the essential types and functions
pub use batch::{summarize, BatchResolver};
pub use config::EligibilityConfig;
pub use provider::AlloyRpcClient;
pub use resolver::EligibilityResolver;
pub use traits::{RpcClient, Throttle};
pub use types::{EligibilityOutcome, SummaryReport};
