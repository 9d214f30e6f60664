//! Wire-level HTTP types.
//!
//! # Design
//! `WireRequest` and `WireResponse` describe one HTTP exchange as plain
//! data. The request builder produces a `WireRequest`, the transport turns
//! it into a `WireResponse`, and neither type knows anything about the
//! typed request that produced it. All fields are owned so the values can
//! move freely into spawned tasks and error variants.

use std::collections::BTreeMap;
use std::fmt;

use bytes::Bytes;
use url::Url;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common `Content-Type` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    ApplicationJson,
    TextHtml,
    ApplicationXml,
    MultipartFormData,
    UrlEncoded,
    TextPlain,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::ApplicationJson => "application/json",
            ContentType::TextHtml => "text/html",
            ContentType::ApplicationXml => "application/xml",
            ContentType::MultipartFormData => "multipart/form-data",
            ContentType::UrlEncoded => "application/x-www-form-urlencoded",
            ContentType::TextPlain => "text/plain",
        }
    }
}

/// Well-known header names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKey {
    ContentType,
    Accept,
    AcceptEncoding,
    CacheControl,
}

impl HeaderKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderKey::ContentType => "Content-Type",
            HeaderKey::Accept => "Accept",
            HeaderKey::AcceptEncoding => "Accept-Encoding",
            HeaderKey::CacheControl => "Cache-Control",
        }
    }
}

/// A fully resolved HTTP request, ready to hand to a [`Transport`].
///
/// Produced by [`RequestBuilder::build`] and owned by the dispatch client
/// for the duration of one send.
///
/// [`Transport`]: crate::transport::Transport
/// [`RequestBuilder::build`]: crate::builder::RequestBuilder::build
#[derive(Debug, Clone)]
pub struct WireRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Bytes>,
}

/// A completed HTTP exchange as seen by the transport.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}
