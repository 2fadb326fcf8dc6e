use tracing::debug;

use super::RequestError;

/// Checks the presented token against the configured one.
///
/// Plain equality; the token is a long-lived shared secret, not a hardened credential.
pub fn authenticate(presented: &str, expected: &str) -> Result<(), RequestError> {
    if presented == expected {
        Ok(())
    } else {
        debug!("Rejected request with mismatching token");
        Err(RequestError::Unauthorized)
    }
}
