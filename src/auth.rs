use tonic::{metadata::MetadataValue, IntoRequest, Request};

// Wraps the message in a request and, when an API token is given, adds
// it as a Bearer authorization header. A token that does not form a
// valid header value is dropped; the server will reject the
// unauthorized request.
pub fn with_token<T>(msg: T, token: Option<&str>) -> Request<T> {
    let mut req = msg.into_request();

    if let Some(token) = token {
        if let Ok(val) = MetadataValue::try_from(format!("Bearer {token}")) {
            req.metadata_mut().insert("authorization", val);
        }
    }

    req
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_bearer_header() {
        let req = with_token((), Some("secret-token"));

        let val = req.metadata().get("authorization").unwrap();
        assert_eq!("Bearer secret-token", val.to_str().unwrap());
    }

    #[test]
    fn no_token_means_no_header() {
        let req = with_token((), None);

        assert!(req.metadata().get("authorization").is_none());
    }

    #[test]
    fn invalid_token_is_dropped() {
        let req = with_token((), Some("bad\ntoken"));

        assert!(req.metadata().get("authorization").is_none());
    }
}
