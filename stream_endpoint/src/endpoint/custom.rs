use super::{EndpointDescriptor, QueryParams};
use crate::error::{missing, EndpointError};

/// Endpoint with a caller-chosen path, for APIs whose URL shape the
/// built-in descriptors don't cover (e.g. newer enterprise stream versions).
#[derive(Debug, Clone)]
pub struct CustomPathEndpoint {
    path: String,
    query: QueryParams,
}

impl CustomPathEndpoint {
    /// Wrap `path` as-is. Fails if it is empty.
    pub fn new(path: impl Into<String>) -> Result<Self, EndpointError> {
        let path = path.into();
        if path.is_empty() {
            return Err(missing("path"));
        }
        Ok(Self {
            path,
            query: QueryParams::new(),
        })
    }
}

impl EndpointDescriptor for CustomPathEndpoint {
    fn path(&self) -> &str {
        &self.path
    }

    fn query_parameters(&self) -> &QueryParams {
        &self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    const PATH: &str = "/stream/powertrack/accounts/acct/publishers/twitter/prod.json";

    #[test]
    fn test_uri_without_params_is_path() {
        let ep = CustomPathEndpoint::new(PATH).unwrap();
        assert_eq!(ep.uri(), PATH);
        assert_eq!(ep.query_param_string(), "");
    }

    #[test]
    fn test_uri_with_params_in_insertion_order() {
        let ep = CustomPathEndpoint::new(PATH).unwrap();
        ep.add_query_parameter("a", "1");
        ep.add_query_parameter("b", "2");
        assert_eq!(ep.uri(), format!("{PATH}?a=1&b=2"));
        assert_eq!(ep.query_param_string(), "a=1&b=2");
    }

    #[test]
    fn test_remove_param() {
        let ep = CustomPathEndpoint::new("/p").unwrap();
        ep.add_query_parameter("a", "1");
        ep.add_query_parameter("b", "2");
        ep.remove_query_parameter("a");
        ep.remove_query_parameter("never-added");
        assert_eq!(ep.uri(), "/p?b=2");
        ep.remove_query_parameter("b");
        assert_eq!(ep.uri(), "/p");
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = CustomPathEndpoint::new("").unwrap_err();
        assert!(matches!(err, EndpointError::InvalidArgument(_)));
    }

    #[test]
    fn test_no_op_mutators() {
        let ep = CustomPathEndpoint::new("/p").unwrap();
        ep.set_backfill_count(5);
        ep.set_api_version("2");
        ep.add_post_parameter("track", "rust");
        ep.remove_post_parameter("track");
        assert_eq!(ep.uri(), "/p");
        assert_eq!(ep.post_param_string(), None);
        assert_eq!(ep.http_method().as_str(), "GET");
    }

    #[test]
    #[traced_test]
    fn test_uri_is_logged() {
        let ep = CustomPathEndpoint::new("/p").unwrap();
        ep.add_query_parameter("a", "1");
        ep.uri();
        assert!(logs_contain("/p?a=1"));
    }
}
