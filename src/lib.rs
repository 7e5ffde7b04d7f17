//! Typed async client for the Celestia data-availability node gateway API.
//!
//! The gateway exposes chain headers, namespaced data and shares, data
//! availability results and account balances over HTTP, and accepts signed
//! transactions and PayForData submissions.
//!
//! # Features
//!
//! - **`types` module**: request/response types of every endpoint, plus the
//!   namespace encoding helpers. Available with no additional features.
//! - **`client` module** (enabled by default): an async client built on
//!   `reqwest`, with per-call deadlines and cancellation through [`Context`].
//!
//! # Quick start
//!
//! ```no_run
//! use celestia_node_client::{Context, NodeClient, namespace_id};
//!
//! #[tokio::main]
//! async fn main() -> celestia_node_client::Result<()> {
//!     let client = NodeClient::local()?;
//!     let ctx = Context::background();
//!
//!     let head = client.head(&ctx).await?;
//!     let namespace = namespace_id("DCBNOWAP3dM=")?;
//!     let data = client
//!         .namespaced_data(&ctx, &namespace, head.header.height)
//!         .await?;
//!     for message in data.get_bytes()? {
//!         println!("{} bytes", message.len());
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod namespace_helpers;
pub mod types;

pub use error::{Error, Result};
pub use namespace_helpers::namespace_id;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod codec;
#[cfg(feature = "client")]
mod context;

#[cfg(feature = "client")]
pub use client::{ClientConfig, NodeClient};
#[cfg(feature = "client")]
pub use context::{Canceller, Context};

pub use types::*;
