//! The typed request contract.
//!
//! # Design
//! A type implementing [`Request`] statically carries everything one HTTP
//! call needs: where it goes, what it sends, and what it expects back. The
//! trait supplies defaults for the common case (GET, JSON headers, no
//! payloads, decode the body as `Response`), so a minimal request only
//! declares its base URL, path, and response type. Request values are
//! immutable and consumed per call; they hold no connection state.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::BoxError;
use crate::header::HeaderFields;
use crate::http::{HttpMethod, WireResponse};

/// Sentinel payload type for requests without a query or body.
///
/// Serializes to JSON `null`, which the request builder treats as "no
/// payload" — it never reaches the wire as `{}` or `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoContent;

/// A value describing one HTTP call plus its payload and response shapes.
pub trait Request {
    /// Query payload, encoded into the URL query string.
    type Query: Serialize;
    /// Body payload, serialized to JSON bytes.
    type Body: Serialize;
    /// The decoded response type.
    type Response: DeserializeOwned;

    /// The endpoint this request targets. `None` fails the build before
    /// any network attempt.
    fn base_url(&self) -> Option<Url>;

    /// Path appended to the base URL as relative segments.
    fn path(&self) -> &str;

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn headers(&self) -> HeaderFields {
        HeaderFields::default_headers()
    }

    fn query(&self) -> Option<&Self::Query> {
        None
    }

    fn body(&self) -> Option<&Self::Body> {
        None
    }

    /// Turn the raw response into the declared `Response` type.
    ///
    /// Only invoked for 2xx exchanges. Must be pure; a returned error is
    /// surfaced to the caller as a parse failure.
    fn parse(&self, response: &WireResponse) -> Result<Self::Response, BoxError> {
        Ok(serde_json::from_slice(&response.body)?)
    }
}
