use super::RequestError;

/// Token substituted when the first path segment is empty.
pub const NULL_TOKEN: &str = "null";

/// The token and key carried by a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    pub token: String,
    /// Lower-cased key, `None` when the key segment is empty.
    pub key: Option<String>,
}

impl ParsedPath {
    pub fn require_key(&self) -> Result<&str, RequestError> {
        self.key.as_deref().ok_or(RequestError::MissingKey)
    }
}

/// Splits `/{token}/{key}[/...]` into its token and key.
///
/// Only the segment count is checked here; an empty key is reported later by
/// [`ParsedPath::require_key`], after the token has been verified.
pub fn parse_path(path: &str) -> Result<ParsedPath, RequestError> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let mut segments = path.split('/');

    let (Some(token), Some(key)) = (segments.next(), segments.next()) else {
        return Err(RequestError::MalformedPath);
    };

    let token = if token.is_empty() { NULL_TOKEN } else { token };
    let key = (!key.is_empty()).then(|| key.to_lowercase());

    Ok(ParsedPath {
        token: token.to_string(),
        key,
    })
}
