use thiserror::Error;

/// A unified error type for this library.
///
/// Every variant is raised while *building* something (a descriptor, a host
/// list, a request target). Producing a URI from a built descriptor never
/// fails.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// A required field was absent or empty.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A host or joined request URL could not be parsed.
    #[error("URL Error: {0}")]
    Url(#[from] url::ParseError),

    /// Serde (de)serialization error.
    #[error("Serde JSON error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// A `k=v&k2=v2` query string could not be decoded.
    #[error("Query decode error: {0}")]
    QueryDecode(#[from] serde_urlencoded::de::Error),

    /// A configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand for the "required field missing" case.
pub(crate) fn missing(field: &str) -> EndpointError {
    EndpointError::InvalidArgument(format!("`{field}` is required and must not be empty"))
}
