//! Async HTTP client for the node gateway API.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, Url};
use serde::{Serialize, de::DeserializeOwned};

use crate::codec::{JsonCodec, StandardCodec};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::types::*;

/// Transport settings of a [`NodeClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Idle connections kept per host. Polling clients reuse these instead of
    /// reconnecting on every call.
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    /// Transport-level timeout applied to every request. Prefer per-call
    /// deadlines through [`Context::with_timeout`].
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: 100,
            pool_idle_timeout: Some(Duration::from_secs(90)),
            connect_timeout: None,
            request_timeout: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    pub fn with_pool_idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    fn build_transport(&self) -> Result<Client> {
        let mut builder = Client::builder()
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .pool_idle_timeout(self.pool_idle_timeout)
            .user_agent(self.user_agent.as_str());
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}

/// Async client for the node gateway HTTP API.
///
/// Clones share one connection pool, and calls may run concurrently from any
/// number of tasks.
///
/// # Example
///
/// ```no_run
/// use celestia_node_client::{Context, NodeClient};
///
/// #[tokio::main]
/// async fn main() -> celestia_node_client::Result<()> {
///     let client = NodeClient::local()?;
///     let head = client.head(&Context::background()).await?;
///     println!("Chain {} at height {}", head.header.chain_id, head.header.height);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NodeClient<C = StandardCodec> {
    client: Client,
    base_url: Url,
    codec: C,
}

impl NodeClient {
    /// Create a client for the gateway at `base_url` with default settings.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a client with custom transport settings.
    pub fn with_config(base_url: &str, config: ClientConfig) -> Result<Self> {
        Self::with_codec(base_url, config, StandardCodec)
    }

    /// Create a client for a gateway on the local machine (localhost:26659).
    pub fn local() -> Result<Self> {
        Self::new("http://localhost:26659")
    }
}

impl<C: JsonCodec> NodeClient<C> {
    /// Create a client that encodes and decodes bodies with `codec`.
    pub fn with_codec(base_url: &str, config: ClientConfig, codec: C) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", parsed.scheme())));
        }

        Ok(Self {
            client: config.build_transport()?,
            base_url: parsed,
            codec,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append `segments` to the base URL, percent-encoding each one so that
    /// caller-supplied IDs cannot change the shape of the path.
    ///
    /// Empty and dot segments are rejected: `url` silently skips `.` and `..`
    /// when appending, and an empty segment turns `balance/{address}` into
    /// `balance/`.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(segment) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(Error::InvalidPathSegment {
                segment: segment.to_string(),
            });
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            })?
            .pop_if_empty()
            .extend(segments.iter());
        Ok(url)
    }

    async fn get<R: DeserializeOwned>(&self, ctx: &Context, segments: &[&str]) -> Result<R> {
        let url = self.endpoint(segments)?;
        ctx.run(async {
            tracing::debug!(method = "GET", %url, "sending gateway request");
            let response = self.client.get(url).send().await?;
            self.decode(response).await
        })
        .await
    }

    async fn post<B, R>(&self, ctx: &Context, segments: &[&str], body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let payload = self.codec.encode(body)?;
        ctx.run(async {
            tracing::debug!(
                method = "POST",
                %url,
                bytes = payload.len(),
                "sending gateway request"
            );
            let response = self
                .client
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .body(payload)
                .send()
                .await?;
            self.decode(response).await
        })
        .await
    }

    async fn decode<R: DeserializeOwned>(&self, response: Response) -> Result<R> {
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        tracing::trace!(status, bytes = body.len(), "received gateway response");
        self.codec
            .decode(&body)
            .map_err(|source| Error::Decode { status, source })
    }

    // ── Headers ──────────────────────────────────────────────────

    /// Returns the tip (head) of the node's current chain.
    pub async fn head(&self, ctx: &Context) -> Result<HeaderResponse> {
        self.get(ctx, &["head"]).await
    }

    /// Returns the header at `height`.
    pub async fn header(&self, ctx: &Context, height: u64) -> Result<HeaderResponse> {
        self.get(ctx, &["header", &height.to_string()]).await
    }

    // ── Namespaces ───────────────────────────────────────────────

    /// Returns the original messages of namespace `namespace_id` (hex) in the
    /// block at `height`.
    pub async fn namespaced_data(
        &self,
        ctx: &Context,
        namespace_id: &str,
        height: u64,
    ) -> Result<NamespaceData> {
        let height = height.to_string();
        self.get(ctx, &["namespaced_data", namespace_id, "height", &height])
            .await
    }

    /// Returns the shares of namespace `namespace_id` (hex) in the latest block.
    pub async fn namespaced_shares(
        &self,
        ctx: &Context,
        namespace_id: &str,
    ) -> Result<NamespaceData> {
        self.get(ctx, &["namespaced_shares", namespace_id]).await
    }

    /// Returns the shares of namespace `namespace_id` (hex) in the block at
    /// `height`.
    pub async fn namespaced_shares_by_height(
        &self,
        ctx: &Context,
        namespace_id: &str,
        height: u64,
    ) -> Result<NamespaceShares> {
        let height = height.to_string();
        self.get(ctx, &["namespaced_shares", namespace_id, "height", &height])
            .await
    }

    // ── Availability ─────────────────────────────────────────────

    /// Returns whether the block at `height` is available, and the probability
    /// of that based on the samples collected so far.
    pub async fn data_available(
        &self,
        ctx: &Context,
        height: u64,
    ) -> Result<DataAvailableResponse> {
        self.get(ctx, &["data_available", &height.to_string()]).await
    }

    // ── Accounts ─────────────────────────────────────────────────

    /// Returns the balance of the node's default account.
    pub async fn balance(&self, ctx: &Context) -> Result<Balance> {
        self.get(ctx, &["balance"]).await
    }

    /// Returns the balance of `address`.
    pub async fn balance_of(&self, ctx: &Context, address: &str) -> Result<Balance> {
        self.get(ctx, &["balance", address]).await
    }

    // ── Transactions ─────────────────────────────────────────────

    /// Submits a signed transaction to the node's consensus connection.
    pub async fn submit_tx(&self, ctx: &Context, tx: &SubmitTx) -> Result<SubmittedTx> {
        self.post(ctx, &["submit_tx"], tx).await
    }

    /// Has the node construct, sign and submit a PayForData message.
    pub async fn submit_pfd(&self, ctx: &Context, pfd: &SubmitPfd) -> Result<SubmittedPfd> {
        self.post(ctx, &["submit_pfd"], pfd).await
    }
}
