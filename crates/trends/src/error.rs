/// Errors from fetching or parsing a single trend feed.
#[derive(Debug, thiserror::Error)]
pub enum TrendError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The feed returned a non-2xx status code.
    #[error("Feed returned HTTP {0}")]
    HttpStatus(u16),

    /// The body exceeded the configured size cap.
    #[error("Feed body exceeds {limit} bytes")]
    TooLarge { limit: usize },

    /// The body was not UTF-8 or not well-formed XML.
    #[error("Feed parse error: {0}")]
    Parse(String),
}
