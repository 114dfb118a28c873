//! Client request token generation.

use uuid::Uuid;

/// Generate a fresh idempotency token for a `ClientRequestToken` field.
///
/// The service deduplicates create operations by this token; callers that
/// retry a request must reuse the token from the first attempt rather than
/// generating a new one.
#[must_use]
pub fn new_client_request_token() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique_and_uuid_shaped() {
        let a = new_client_request_token();
        let b = new_client_request_token();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
        assert_eq!(a.chars().filter(|c| *c == '-').count(), 4);
    }
}
