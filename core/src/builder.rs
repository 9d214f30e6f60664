//! Pure construction of wire requests from typed requests.
//!
//! # Design
//! `RequestBuilder` is a stateless value configured once (optional default
//! headers) and reused across calls. `build` performs no I/O: it resolves
//! the URL, encodes the query through an intermediate JSON mapping, merges
//! headers, and serializes the body. Every failure is a `BuildError`; the
//! dispatch client folds those into `InvalidRequest` before any network
//! attempt.

use bytes::Bytes;
use serde_json::Value;

use crate::error::BuildError;
use crate::header::HeaderFields;
use crate::http::WireRequest;
use crate::request::Request;

/// Builds [`WireRequest`] values from typed requests.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    default_headers: HeaderFields,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder whose defaults are merged under every request's own
    /// headers. Request headers win on name collisions.
    pub fn with_default_headers(default_headers: HeaderFields) -> Self {
        Self { default_headers }
    }

    pub fn build<R: Request>(&self, request: &R) -> Result<WireRequest, BuildError> {
        let base = request.base_url().ok_or(BuildError::MissingBaseUrl)?;

        let mut url = base;
        {
            let mut segments = url.path_segments_mut().map_err(|_| BuildError::InvalidUrl)?;
            segments.pop_if_empty();
            for segment in request.path().split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
        }

        if let Some(query) = request.query() {
            let encoded = serde_json::to_value(query).map_err(BuildError::EncodeQuery)?;
            match encoded {
                // The empty-payload sentinel: no query string at all.
                Value::Null => {}
                Value::Object(map) => {
                    let pairs: Vec<(String, String)> = map
                        .into_iter()
                        .filter_map(|(name, value)| scalar_string(&value).map(|v| (name, v)))
                        .collect();
                    if !pairs.is_empty() {
                        url.query_pairs_mut().extend_pairs(pairs);
                    }
                }
                _ => return Err(BuildError::UnsupportedQuery),
            }
        }

        let headers = self.default_headers.merged(&request.headers()).to_map();

        let body = match request.body() {
            None => None,
            Some(body) => {
                let encoded = serde_json::to_value(body).map_err(BuildError::EncodeBody)?;
                if encoded.is_null() {
                    None
                } else {
                    let bytes = serde_json::to_vec(&encoded).map_err(BuildError::EncodeBody)?;
                    Some(Bytes::from(bytes))
                }
            }
        };

        let wire = WireRequest {
            method: request.method(),
            url,
            headers,
            body,
        };
        tracing::debug!(method = %wire.method, url = %wire.url, "built wire request");
        Ok(wire)
    }
}

/// Natural string form of a scalar JSON value.
///
/// `null`, arrays, and objects have no scalar form and their entries are
/// omitted from the query string.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use url::Url;

    use super::*;
    use crate::http::HttpMethod;
    use crate::request::NoContent;

    #[derive(Serialize)]
    struct SearchQuery {
        page: u32,
        search: Option<String>,
        tag: Option<String>,
    }

    #[derive(Serialize)]
    struct CreateNote {
        title: String,
        pinned: bool,
    }

    struct SearchRequest {
        base: Option<Url>,
        query: Option<SearchQuery>,
    }

    impl Request for SearchRequest {
        type Query = SearchQuery;
        type Body = NoContent;
        type Response = serde_json::Value;

        fn base_url(&self) -> Option<Url> {
            self.base.clone()
        }

        fn path(&self) -> &str {
            "search"
        }

        fn query(&self) -> Option<&SearchQuery> {
            self.query.as_ref()
        }
    }

    struct CreateRequest {
        body: CreateNote,
    }

    impl Request for CreateRequest {
        type Query = NoContent;
        type Body = CreateNote;
        type Response = serde_json::Value;

        fn base_url(&self) -> Option<Url> {
            Url::parse("https://api.example.com/v1").ok()
        }

        fn path(&self) -> &str {
            "notes"
        }

        fn method(&self) -> HttpMethod {
            HttpMethod::Post
        }

        fn body(&self) -> Option<&CreateNote> {
            Some(&self.body)
        }
    }

    struct SentinelQueryRequest {
        query: NoContent,
    }

    impl Request for SentinelQueryRequest {
        type Query = NoContent;
        type Body = NoContent;
        type Response = serde_json::Value;

        fn base_url(&self) -> Option<Url> {
            Url::parse("https://api.example.com").ok()
        }

        fn path(&self) -> &str {
            "ping"
        }

        fn query(&self) -> Option<&NoContent> {
            Some(&self.query)
        }
    }

    fn base() -> Option<Url> {
        Url::parse("https://api.example.com/v1").ok()
    }

    #[test]
    fn missing_base_url_fails_the_build() {
        let request = SearchRequest { base: None, query: None };
        let err = RequestBuilder::new().build(&request).unwrap_err();
        assert!(matches!(err, BuildError::MissingBaseUrl));
    }

    #[test]
    fn path_is_appended_to_the_base_path() {
        let request = SearchRequest { base: base(), query: None };
        let wire = RequestBuilder::new().build(&request).unwrap();
        assert_eq!(wire.url.as_str(), "https://api.example.com/v1/search");
    }

    #[test]
    fn trailing_slash_on_the_base_is_harmless() {
        let request = SearchRequest {
            base: Url::parse("https://api.example.com/v1/").ok(),
            query: None,
        };
        let wire = RequestBuilder::new().build(&request).unwrap();
        assert_eq!(wire.url.as_str(), "https://api.example.com/v1/search");
    }

    #[test]
    fn cannot_be_a_base_url_is_rejected() {
        let request = SearchRequest {
            base: Url::parse("mailto:someone@example.com").ok(),
            query: None,
        };
        let err = RequestBuilder::new().build(&request).unwrap_err();
        assert!(matches!(err, BuildError::InvalidUrl));
    }

    #[test]
    fn absent_query_produces_no_query_string() {
        let request = SearchRequest { base: base(), query: None };
        let wire = RequestBuilder::new().build(&request).unwrap();
        assert_eq!(wire.url.query(), None);
    }

    #[test]
    fn sentinel_query_produces_no_query_string() {
        let request = SentinelQueryRequest { query: NoContent };
        let wire = RequestBuilder::new().build(&request).unwrap();
        assert_eq!(wire.url.query(), None);
    }

    #[test]
    fn null_valued_query_entries_are_omitted() {
        let request = SearchRequest {
            base: base(),
            query: Some(SearchQuery {
                page: 2,
                search: Some("rust".to_string()),
                tag: None,
            }),
        };
        let wire = RequestBuilder::new().build(&request).unwrap();
        assert_eq!(wire.url.query(), Some("page=2&search=rust"));
    }

    #[test]
    fn query_encoding_to_zero_entries_means_no_query_string() {
        #[derive(Serialize)]
        struct AllOptional {
            search: Option<String>,
        }
        static ALL_NONE: AllOptional = AllOptional { search: None };

        struct AllOptionalRequest;
        impl Request for AllOptionalRequest {
            type Query = AllOptional;
            type Body = NoContent;
            type Response = serde_json::Value;
            fn base_url(&self) -> Option<Url> {
                Url::parse("https://api.example.com").ok()
            }
            fn path(&self) -> &str {
                "search"
            }
            fn query(&self) -> Option<&AllOptional> {
                Some(&ALL_NONE)
            }
        }

        let wire = RequestBuilder::new().build(&AllOptionalRequest).unwrap();
        assert_eq!(wire.url.query(), None);
    }

    #[test]
    fn non_object_query_is_rejected() {
        struct ListQueryRequest;
        impl Request for ListQueryRequest {
            type Query = Vec<u32>;
            type Body = NoContent;
            type Response = serde_json::Value;
            fn base_url(&self) -> Option<Url> {
                Url::parse("https://api.example.com").ok()
            }
            fn path(&self) -> &str {
                "items"
            }
            fn query(&self) -> Option<&Vec<u32>> {
                Some(&EMPTY)
            }
        }
        static EMPTY: Vec<u32> = Vec::new();

        let err = RequestBuilder::new().build(&ListQueryRequest).unwrap_err();
        assert!(matches!(err, BuildError::UnsupportedQuery));
    }

    #[test]
    fn body_is_serialized_to_json_bytes() {
        let request = CreateRequest {
            body: CreateNote { title: "Buy milk".to_string(), pinned: true },
        };
        let wire = RequestBuilder::new().build(&request).unwrap();
        assert_eq!(wire.method, HttpMethod::Post);

        let body: serde_json::Value = serde_json::from_slice(&wire.body.unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["pinned"], true);
    }

    #[test]
    fn request_headers_override_builder_defaults() {
        use crate::header::HeaderField;

        let defaults = HeaderFields::new(vec![
            HeaderField::new("Content-Type", "text/plain"),
            HeaderField::new("Accept", "application/json"),
        ]);
        let request = SearchRequest { base: base(), query: None };
        let wire = RequestBuilder::with_default_headers(defaults).build(&request).unwrap();

        // The request's default header set carries the JSON content type,
        // which wins over the builder's text/plain.
        assert_eq!(wire.headers.get("Content-Type").map(String::as_str), Some("application/json"));
        assert_eq!(wire.headers.get("Accept").map(String::as_str), Some("application/json"));
    }

    #[test]
    fn query_values_are_url_escaped() {
        let request = SearchRequest {
            base: base(),
            query: Some(SearchQuery {
                page: 1,
                search: Some("hello world".to_string()),
                tag: None,
            }),
        };
        let wire = RequestBuilder::new().build(&request).unwrap();
        let query = wire.url.query().unwrap();
        assert!(!query.contains(' '), "space must be escaped: {query}");
    }
}
