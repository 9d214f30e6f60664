//! The transport collaborator seam.
//!
//! # Design
//! [`Transport`] is the only place the crate touches the network. It takes
//! a fully built `WireRequest` and reports either a completed exchange or a
//! `TransportError` that already distinguishes the cases the dispatch
//! classification cares about: an expired deadline, an exchange that ended
//! without a usable response, and everything else. `ReqwestTransport` is
//! the production implementation; tests substitute scripted transports.

use std::error::Error;
use std::fmt;
use std::future::Future;
use std::time::Duration;

use crate::http::{HttpMethod, WireRequest, WireResponse};

/// A transport-level failure, before any HTTP status exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The transport deadline expired before the exchange completed.
    Timeout,

    /// The exchange completed without a usable response or body.
    Incomplete,

    /// Any other transport failure (DNS, connect, reset), as a message.
    Other(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Timeout => write!(f, "request deadline expired"),
            TransportError::Incomplete => {
                write!(f, "connection closed before a usable response arrived")
            }
            TransportError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl Error for TransportError {}

/// Executes one wire request and returns the completed exchange.
///
/// Implementations are shared, read-only collaborators: one transport
/// value serves any number of concurrent fetches.
pub trait Transport: Send + Sync + 'static {
    fn fetch(
        &self,
        request: WireRequest,
    ) -> impl Future<Output = Result<WireResponse, TransportError>> + Send;
}

/// Production transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already configured client (proxies, TLS options, pools).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// A transport whose every request carries the given deadline.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TransportError::Other(err.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn fetch(
        &self,
        request: WireRequest,
    ) -> impl Future<Output = Result<WireResponse, TransportError>> + Send {
        let client = self.client.clone();
        async move {
            let WireRequest { method, url, headers, body } = request;

            let mut builder = client.request(to_reqwest_method(method), url);
            for (name, value) in &headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = body {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(classify_send_error)?;
            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .map(|(name, value)| {
                    (name.to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned())
                })
                .collect();

            // The exchange itself finished; losing the body here means the
            // response is unusable, not that the network call failed.
            let body = response.bytes().await.map_err(|err| {
                if err.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::Incomplete
                }
            })?;

            Ok(WireResponse { status, headers, body })
        }
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

fn classify_send_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Other(err.to_string())
    }
}
