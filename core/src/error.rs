//! Error taxonomy for request building and dispatch.
//!
//! # Design
//! `HttpError` is the closed set of failure kinds a dispatch can produce.
//! Every failure is returned as data; nothing is panicked across the public
//! boundary. Status-classified variants carry the full `WireResponse` so
//! callers can inspect the status code and raw body when deciding whether
//! to retry on their side. Pre-network failures keep their precise cause in
//! `BuildError` but surface through the single `InvalidRequest` kind, since
//! from the caller's perspective no exchange was attempted either way.

use std::error::Error;
use std::fmt;

use crate::http::WireResponse;
use crate::transport::TransportError;

/// Boxed error type used for caller-supplied parse failures.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// A failure while turning a typed request into a [`WireRequest`].
///
/// [`WireRequest`]: crate::http::WireRequest
#[derive(Debug)]
pub enum BuildError {
    /// The request has no base URL.
    MissingBaseUrl,

    /// The base URL cannot take appended path segments.
    InvalidUrl,

    /// The query payload encoded to something other than a JSON object.
    UnsupportedQuery,

    /// The query payload could not be encoded at all.
    EncodeQuery(serde_json::Error),

    /// The body payload could not be serialized to JSON.
    EncodeBody(serde_json::Error),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingBaseUrl => write!(f, "request has no base URL"),
            BuildError::InvalidUrl => write!(f, "base URL and path do not form a valid URL"),
            BuildError::UnsupportedQuery => {
                write!(f, "query parameters must encode to a JSON object")
            }
            BuildError::EncodeQuery(err) => write!(f, "query encoding failed: {err}"),
            BuildError::EncodeBody(err) => write!(f, "body serialization failed: {err}"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BuildError::EncodeQuery(err) | BuildError::EncodeBody(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors returned by the dispatch client.
#[derive(Debug)]
pub enum HttpError {
    /// The request could not be built; no network attempt was made.
    InvalidRequest(BuildError),

    /// The exchange ended without a usable response or body.
    FailedConnect,

    /// A transport-level failure that is not a timeout.
    Network(TransportError),

    /// The server returned 401.
    Unauthorized { response: WireResponse },

    /// The server returned 403.
    Forbidden { response: WireResponse },

    /// The transport deadline expired (`response` is `None`) or the server
    /// returned 408 (`response` carries the exchange).
    Timeout { response: Option<WireResponse> },

    /// Any other non-2xx status.
    BadStatus { response: WireResponse },

    /// The response body could not be decoded into the declared type.
    Parse(BoxError),
}

impl From<BuildError> for HttpError {
    fn from(err: BuildError) -> Self {
        HttpError::InvalidRequest(err)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::InvalidRequest(err) => write!(f, "invalid request: {err}"),
            HttpError::FailedConnect => write!(f, "failed to connect to the server"),
            HttpError::Network(err) => write!(f, "network error: {err}"),
            HttpError::Unauthorized { response } => {
                write!(f, "unauthorized (HTTP {})", response.status)
            }
            HttpError::Forbidden { response } => {
                write!(f, "forbidden (HTTP {})", response.status)
            }
            HttpError::Timeout { response } => match response {
                Some(response) => write!(f, "request timed out (HTTP {})", response.status),
                None => write!(f, "request timed out"),
            },
            HttpError::BadStatus { response } => {
                write!(f, "bad HTTP status code: {}", response.status)
            }
            HttpError::Parse(err) => write!(f, "parse error: {err}"),
        }
    }
}

impl Error for HttpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HttpError::InvalidRequest(err) => Some(err),
            HttpError::Network(err) => Some(err),
            HttpError::Parse(err) => Some(&**err),
            _ => None,
        }
    }
}
