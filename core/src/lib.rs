//! Typed, declarative HTTP client core.
//!
//! # Overview
//! A caller describes one HTTP call as a value implementing [`Request`]:
//! the type statically carries its base URL, path, method, headers, query
//! and body payload types, and the response type it decodes into. The
//! [`RequestBuilder`] turns that value into a [`WireRequest`] without any
//! I/O, and the [`HttpClient`] sends it over a [`Transport`] and classifies
//! the outcome into the closed [`HttpError`] taxonomy.
//!
//! # Design
//! - Building is pure and separate from dispatch, so URL, query, header,
//!   and body construction is testable without a network.
//! - One private classification routine backs both the awaitable and the
//!   callback call surfaces; the two cannot disagree on an outcome.
//! - Failures are returned as data with their status, raw body, and cause
//!   attached; nothing is retried or cached — one call, one exchange, one
//!   result.
//! - The transport is a trait seam: `ReqwestTransport` in production,
//!   scripted transports in tests.

pub mod builder;
pub mod client;
pub mod error;
pub mod header;
pub mod http;
pub mod request;
pub mod transport;

pub use builder::RequestBuilder;
pub use client::HttpClient;
pub use error::{BoxError, BuildError, HttpError};
pub use header::{HeaderField, HeaderFields};
pub use http::{ContentType, HeaderKey, HttpMethod, WireRequest, WireResponse};
pub use request::{NoContent, Request};
pub use transport::{ReqwestTransport, Transport, TransportError};
