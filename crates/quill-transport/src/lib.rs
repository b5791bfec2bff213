/// Quill SDK - HTTP transport capability and broadcasting.
///
/// Exposes the minimal fetch-like client contract, a native adapter and
/// an always-failing stub selected by environment probing, and a
/// broadcaster that posts raw transactions over the capability.

pub mod broadcaster;
pub mod http;

mod error;
pub use broadcaster::{BroadcastSuccess, Broadcaster, NodeBroadcaster};
pub use error::TransportError;
pub use http::{default_http_client, DefaultHttpClient, HttpClient, NoHttpClient};

#[cfg(feature = "native")]
pub use http::NativeHttpClient;
