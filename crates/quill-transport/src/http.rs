//! The minimal fetch-like HTTP capability.
//!
//! Callers hold a single operation: perform a request, get a
//! response-like result asynchronously. The concrete implementation is
//! chosen once at startup by `default_http_client`: a native adapter
//! when one is compiled in, otherwise a stub that fails every request.
//! The stub is a legitimate variant, not an error escape hatch; code
//! that never touches the network runs unchanged with it.

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::TransportError;

/// An HTTP request: method, URL, headers, and an optional body.
#[derive(Debug, Clone)]
pub struct HttpClientRequest {
    /// Request method, e.g. "GET" or "POST".
    pub method: String,
    /// Absolute request URL.
    pub url: String,
    /// Header name/value pairs, sent in order.
    pub headers: Vec<(String, String)>,
    /// Request body, if any.
    pub body: Option<Vec<u8>>,
}

impl HttpClientRequest {
    /// Build a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        HttpClientRequest {
            method: "GET".to_string(),
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Build a POST request with a body.
    pub fn post(url: impl Into<String>, body: Vec<u8>) -> Self {
        HttpClientRequest {
            method: "POST".to_string(),
            url: url.into(),
            headers: Vec::new(),
            body: Some(body),
        }
    }

    /// Append a header, returning the request for chaining.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// An HTTP response: status code and raw body.
#[derive(Debug, Clone)]
pub struct HttpClientResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpClientResponse {
    /// Check whether the status code indicates success (2xx).
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Return the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the body as JSON.
    ///
    /// # Returns
    /// The decoded value, or `InvalidResponse` if the body is not valid
    /// JSON for the target type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| TransportError::InvalidResponse(e.to_string()))
    }
}

/// The transport capability: perform one request asynchronously.
pub trait HttpClient {
    /// Perform the request and return the response.
    ///
    /// # Arguments
    /// * `request` - The request to perform.
    ///
    /// # Returns
    /// The response, or a transport error.
    fn fetch(
        &self,
        request: HttpClientRequest,
    ) -> impl Future<Output = Result<HttpClientResponse, TransportError>> + Send;
}

/// Native HTTP adapter backed by reqwest.
#[cfg(feature = "native")]
#[derive(Debug, Clone, Default)]
pub struct NativeHttpClient {
    client: reqwest::Client,
}

#[cfg(feature = "native")]
impl NativeHttpClient {
    /// Create a new adapter with a default reqwest client.
    pub fn new() -> Self {
        NativeHttpClient {
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(feature = "native")]
impl HttpClient for NativeHttpClient {
    async fn fetch(
        &self,
        request: HttpClientRequest,
    ) -> Result<HttpClientResponse, TransportError> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|_| TransportError::InvalidRequest(request.method.clone()))?;

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(HttpClientResponse { status, body })
    }
}

/// The stub used when no HTTP implementation is available. Every
/// request fails with `NoClientAvailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHttpClient;

impl HttpClient for NoHttpClient {
    async fn fetch(
        &self,
        _request: HttpClientRequest,
    ) -> Result<HttpClientResponse, TransportError> {
        Err(TransportError::NoClientAvailable)
    }
}

/// The client selected by `default_http_client`.
#[derive(Debug, Clone)]
pub enum DefaultHttpClient {
    /// Native reqwest-backed adapter.
    #[cfg(feature = "native")]
    Native(NativeHttpClient),
    /// No implementation available; every request fails.
    Unavailable(NoHttpClient),
}

impl HttpClient for DefaultHttpClient {
    async fn fetch(
        &self,
        request: HttpClientRequest,
    ) -> Result<HttpClientResponse, TransportError> {
        match self {
            #[cfg(feature = "native")]
            DefaultHttpClient::Native(client) => client.fetch(request).await,
            DefaultHttpClient::Unavailable(client) => client.fetch(request).await,
        }
    }
}

/// Select an HTTP client for this environment.
///
/// With the `native` feature enabled on a non-wasm target this is the
/// reqwest adapter; otherwise the always-failing stub.
pub fn default_http_client() -> DefaultHttpClient {
    #[cfg(all(feature = "native", not(target_arch = "wasm32")))]
    {
        DefaultHttpClient::Native(NativeHttpClient::new())
    }
    #[cfg(not(all(feature = "native", not(target_arch = "wasm32"))))]
    {
        DefaultHttpClient::Unavailable(NoHttpClient)
    }
}
