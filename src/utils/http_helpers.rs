use axum::http::header::HOST;
use axum::http::uri::Authority;
use axum::http::{HeaderMap, Uri};

/// Host name the client addressed, without the port.
///
/// Taken from the `Host` header, falling back to the request URI's authority.
/// Returns an empty string when neither is present.
pub fn request_host(headers: &HeaderMap, uri: &Uri) -> String {
    headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Authority>().ok())
        .map(|authority| authority.host().to_string())
        .or_else(|| uri.host().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_host(host: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static(host));
        headers
    }

    #[test]
    fn test_host_header_without_port() {
        let uri: Uri = "/passwd/config".parse().unwrap();
        assert_eq!(
            request_host(&headers_with_host("kv.example.com"), &uri),
            "kv.example.com"
        );
    }

    #[test]
    fn test_host_header_port_is_stripped() {
        let uri: Uri = "/passwd/config".parse().unwrap();
        assert_eq!(
            request_host(&headers_with_host("kv.example.com:8080"), &uri),
            "kv.example.com"
        );
    }

    #[test]
    fn test_falls_back_to_uri_authority() {
        let uri: Uri = "http://fallback.example.com:9000/passwd/config".parse().unwrap();
        assert_eq!(request_host(&HeaderMap::new(), &uri), "fallback.example.com");
    }

    #[test]
    fn test_missing_host_is_empty() {
        let uri: Uri = "/passwd/config".parse().unwrap();
        assert_eq!(request_host(&HeaderMap::new(), &uri), "");
    }
}
