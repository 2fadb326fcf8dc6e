//! Response envelope shared by every outcome of a lookup.
//!
//! All responses, including errors, are marked uncacheable and carry a
//! fresh entity tag, so that intermediaries never serve a stale value.

use axum::body::Body;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, ETAG, EXPIRES, LAST_MODIFIED, PRAGMA};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const TEXT_HTML: &str = "text/html; charset=UTF-8";

const NO_CACHE: &str = "no-store, no-cache, must-revalidate, proxy-revalidate";
const CACHE_STATUS: &str = "cf-cache-status";

/// Status, headers and body of a single response.
#[derive(Debug)]
pub struct ResponseEnvelope {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ResponseEnvelope {
    /// A plain-text response with the no-cache header set.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: no_cache_headers(Utc::now()),
            body: body.into(),
        }
    }

    /// 200 with a plain-text body.
    pub fn text(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// 200 with an HTML body.
    pub fn html(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body).with_content_type(TEXT_HTML)
    }

    pub fn with_content_type(mut self, content_type: &'static str) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

fn no_cache_headers(now: DateTime<Utc>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(NO_CACHE));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(EXPIRES, HeaderValue::from_static("0"));
    if let Ok(etag) = HeaderValue::from_str(&generate_etag()) {
        headers.insert(ETAG, etag);
    }
    if let Ok(date) = HeaderValue::from_str(&http_date(now)) {
        headers.insert(LAST_MODIFIED, date);
    }
    headers.insert(CACHE_STATUS, HeaderValue::from_static("DYNAMIC"));
    headers
}

/// A random strong entity tag, e.g. `"3f2a..."`.
pub fn generate_etag() -> String {
    format!("\"{}\"", Uuid::new_v4().simple())
}

/// Formats a timestamp as an HTTP date (IMF-fixdate).
pub fn http_date(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
