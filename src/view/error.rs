use thiserror::Error;

/// Catalog fetch failed.
///
/// Network errors, non-2xx responses and malformed payloads all end up here.
/// The cause is kept for logging; the message never shows it.
#[derive(Debug, Error)]
#[error("Error fetching products")]
pub struct LoadError {
    #[source]
    cause: anyhow::Error,
}

impl LoadError {
    pub fn new(cause: anyhow::Error) -> Self {
        Self { cause }
    }

    pub fn cause(&self) -> &anyhow::Error {
        &self.cause
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_hides_cause() {
        let error = LoadError::new(anyhow::anyhow!("error decoding response body"));

        assert_eq!(error.to_string(), "Error fetching products");
        assert_eq!(
            error.source().map(ToString::to_string).as_deref(),
            Some("error decoding response body")
        );
    }
}
