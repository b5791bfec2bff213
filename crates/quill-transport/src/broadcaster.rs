//! Transaction broadcasting over the HTTP capability.

use std::future::Future;

use quill_transaction::Transaction;
use serde::Deserialize;

use crate::http::{HttpClient, HttpClientRequest};
use crate::TransportError;

/// Result of a successful broadcast.
#[derive(Debug, Clone)]
pub struct BroadcastSuccess {
    /// The transaction id acknowledged by the network.
    pub txid: String,
    /// Human-readable status message from the endpoint.
    pub message: String,
}

/// Trait for broadcasting transactions to the network.
pub trait Broadcaster {
    /// Broadcast a transaction.
    ///
    /// # Returns
    /// `Ok(BroadcastSuccess)` once the endpoint acknowledges the
    /// transaction, or a transport error describing the failure.
    fn broadcast(
        &self,
        tx: &Transaction,
    ) -> impl Future<Output = Result<BroadcastSuccess, TransportError>> + Send;
}

/// JSON reply shape of a node-style broadcast endpoint.
#[derive(Debug, Deserialize)]
struct NodeBroadcastReply {
    txid: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Broadcasts raw transaction hex to a node-style JSON endpoint.
///
/// Generic over the HTTP capability so the same broadcaster works with
/// the native adapter, the stub, or a test double.
#[derive(Debug, Clone)]
pub struct NodeBroadcaster<C> {
    url: String,
    client: C,
}

impl<C> NodeBroadcaster<C> {
    /// Create a broadcaster posting to the given endpoint URL.
    pub fn new(url: impl Into<String>, client: C) -> Self {
        NodeBroadcaster {
            url: url.into(),
            client,
        }
    }
}

impl<C> Broadcaster for NodeBroadcaster<C>
where
    C: HttpClient + Sync,
{
    async fn broadcast(&self, tx: &Transaction) -> Result<BroadcastSuccess, TransportError> {
        let payload = serde_json::json!({ "txhex": tx.to_hex() });
        let body = serde_json::to_vec(&payload)
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
        let request = HttpClientRequest::post(&self.url, body)
            .header("Content-Type", "application/json");

        let response = self.client.fetch(request).await?;
        if !response.ok() {
            return Err(TransportError::Broadcast {
                status: response.status,
                detail: response.text(),
            });
        }

        let reply: NodeBroadcastReply = response.json()?;
        match reply.txid {
            Some(txid) => Ok(BroadcastSuccess {
                txid,
                message: reply.message.unwrap_or_default(),
            }),
            None => Err(TransportError::InvalidResponse(
                "broadcast reply is missing txid".to_string(),
            )),
        }
    }
}
