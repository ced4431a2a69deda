use thiserror::Error;

/// Errors returned by the data API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A point query was attempted with no product selected. Raised before
    /// any request is built, never retried.
    #[error("product id is missing, cannot build point query")]
    MissingProductId,

    /// A point query was attempted with no date selected. Raised before
    /// any request is built, never retried.
    #[error("date is missing, cannot build point query")]
    MissingDate,

    /// Network, TLS, or non-2xx failure from the underlying HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("json deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL was not parseable.
    #[error("invalid base url '{0}'")]
    InvalidBaseUrl(String),
}
