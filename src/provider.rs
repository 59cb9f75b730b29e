//! alloy-backed RPC client
//!
//! Connects to an HTTP(S) or WebSocket endpoint and serves
//! [`RpcClient::call`] with `eth_call` at the latest block.

use std::future::Future;
use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes},
    providers::{DynProvider, Provider, ProviderBuilder, WsConnect},
    rpc::types::TransactionRequest,
    transports::{RpcError, TransportErrorKind},
};
use log::debug;
use crate::{
    config::EligibilityConfig,
    errors::{CheckError, InitError, TransportError},
    traits::RpcClient,
    utils::error_utils::describe_revert,
};

/// Connect a provider from an RPC URL
///
/// URLs starting with `http` use the HTTP transport; everything else is
/// treated as a WebSocket endpoint.
pub async fn get_provider(rpc_url: &str) -> Result<DynProvider, InitError> {
    let provider = if rpc_url.starts_with("http") {
        let url = rpc_url
            .parse()
            .map_err(|_| InitError::InvalidRpcUrl(rpc_url.to_string()))?;
        ProviderBuilder::new().connect_http(url).erased()
    } else {
        let ws_connect = WsConnect::new(rpc_url);
        ProviderBuilder::new()
            .connect_ws(ws_connect)
            .await
            .map_err(|e| InitError::WsConnection(e.to_string()))?
            .erased()
    };
    Ok(provider)
}

/// [`RpcClient`] over an alloy provider
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct AlloyRpcClient {
    provider: DynProvider,
}

impl AlloyRpcClient {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }

    /// Connect to `rpc_url`
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// use claim_check::provider::AlloyRpcClient;
    /// let client = AlloyRpcClient::connect("https://eth.llamarpc.com").await?;
    /// println!("chain id {}", client.chain_id().await?);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(rpc_url: &str) -> Result<Self, InitError> {
        Ok(Self::new(get_provider(rpc_url).await?))
    }

    /// Validate `config`, connect to its endpoint and check that it answers
    ///
    /// # Returns
    /// The client together with the endpoint's chain id
    pub async fn from_config(config: &EligibilityConfig) -> Result<(Self, u64), CheckError> {
        config.validate()?;
        let client = Self::connect(&config.rpc_url).await?;
        let chain_id = client.chain_id().await?;
        Ok((client, chain_id))
    }

    /// Fetch the chain id, used as a reachability check before a batch
    pub async fn chain_id(&self) -> Result<u64, InitError> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| InitError::ChainId(e.to_string()))
    }
}

impl RpcClient for AlloyRpcClient {
    fn call(
        &self,
        contract: Address,
        data: Bytes,
    ) -> impl Future<Output = Result<Bytes, TransportError>> + Send {
        let tx = TransactionRequest::default().with_to(contract).with_input(data);
        async move {
            debug!("eth_call to {contract}");
            self.provider.call(tx).await.map_err(transport_error)
        }
    }
}

/// Classify an alloy RPC error, rendering revert data when present
fn transport_error(err: RpcError<TransportErrorKind>) -> TransportError {
    if let Some(payload) = err.as_error_resp() {
        if let Some(data) = payload.as_revert_data() {
            return TransportError::Reverted(describe_revert(&data));
        }
        if payload.message.contains("revert") {
            return TransportError::Reverted(payload.message.to_string());
        }
    }
    TransportError::Rpc(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::{address, hex},
        rpc::json_rpc::ErrorPayload,
        sol_types::{Revert, SolError},
    };
    use crate::{errors::ConfigError, types::MethodSelector};

    fn error_response(json: &str) -> RpcError<TransportErrorKind> {
        let payload: ErrorPayload = serde_json::from_str(json).unwrap();
        RpcError::ErrorResp(payload)
    }

    #[test]
    fn test_revert_data_is_decoded() {
        let data = Revert { reason: "Not eligible".to_string() }.abi_encode();
        let err = error_response(&format!(
            r#"{{"code":3,"message":"execution reverted","data":"{}"}}"#,
            hex::encode_prefixed(data)
        ));
        assert_eq!(
            transport_error(err),
            TransportError::Reverted("Not eligible".to_string())
        );
    }

    #[test]
    fn test_revert_without_data_keeps_message() {
        let err = error_response(r#"{"code":-32000,"message":"execution reverted"}"#);
        assert_eq!(
            transport_error(err),
            TransportError::Reverted("execution reverted".to_string())
        );
    }

    #[test]
    fn test_other_failures_are_rpc_errors() {
        let err = error_response(r#"{"code":-32005,"message":"rate limit exceeded"}"#);
        assert!(matches!(
            transport_error(err),
            TransportError::Rpc(message) if message.contains("rate limit exceeded")
        ));

        let err = RpcError::Transport(TransportErrorKind::BackendGone);
        assert!(matches!(transport_error(err), TransportError::Rpc(_)));
    }

    #[tokio::test]
    async fn test_from_config_rejects_invalid_config_before_connecting() {
        let mut config = EligibilityConfig::new(
            address!("1111111111111111111111111111111111111111"),
            [
                MethodSelector::new([0xaa, 0, 0, 1]),
                MethodSelector::new([0xaa, 0, 0, 2]),
            ],
        );
        config.addresses.push("0x0000000000000000000000000000000000000001".to_string());

        let err = AlloyRpcClient::from_config(&config).await.err().unwrap();
        assert!(matches!(err, CheckError::Config(ConfigError::MissingRpcUrl)));

        config.rpc_url = "http://not a url".to_string();
        let err = AlloyRpcClient::from_config(&config).await.err().unwrap();
        assert!(matches!(err, CheckError::Init(InitError::InvalidRpcUrl(_))));
    }
}
