use std::fmt;

// Domain-level failure modes for upstream catalog calls. Every variant maps
// to the same external 500 contract; the distinction exists for diagnostics.
#[derive(Debug)]
pub enum CatalogError {
    Transport(String),
    UpstreamStatus { status: u16, message: Option<String> },
    Decode(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Transport(err) => write!(f, "catalog transport error: {err}"),
            CatalogError::UpstreamStatus { status, message } => {
                if let Some(message) = message {
                    write!(f, "catalog upstream error {status}: {message}")
                } else {
                    write!(f, "catalog upstream error {status}")
                }
            }
            CatalogError::Decode(err) => write!(f, "catalog response decode error: {err}"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_upstream_status_carries_a_message_then_display_includes_it() {
        let err = CatalogError::UpstreamStatus {
            status: 404,
            message: Some("no asteroid found with id 99999".to_string()),
        };

        assert_eq!(
            err.to_string(),
            "catalog upstream error 404: no asteroid found with id 99999"
        );
    }

    #[test]
    fn when_upstream_status_has_no_message_then_display_names_the_status_alone() {
        let err = CatalogError::UpstreamStatus {
            status: 503,
            message: None,
        };

        assert_eq!(err.to_string(), "catalog upstream error 503");
    }

    #[test]
    fn when_transport_fails_then_display_names_the_transport_layer() {
        let err = CatalogError::Transport("connection refused".to_string());

        assert_eq!(err.to_string(), "catalog transport error: connection refused");
    }
}
