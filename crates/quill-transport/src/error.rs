/// Error types for HTTP transport and broadcasting.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// No HTTP implementation is available in this environment.
    #[error("no method available to perform HTTP request")]
    NoClientAvailable,

    /// The request could not be constructed (e.g. a bad method name).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The underlying HTTP client failed.
    #[cfg(feature = "native")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be interpreted.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The remote endpoint rejected the broadcast.
    #[error("broadcast rejected ({status}): {detail}")]
    Broadcast {
        /// HTTP status code of the rejection.
        status: u16,
        /// Response body or failure description.
        detail: String,
    },
}
