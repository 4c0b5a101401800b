//! Streaming endpoint descriptors.
//!
//! A descriptor tells a streaming HTTP client *what* to request: the method,
//! the path plus query string, and (never, here) a POST body. The client asks
//! for the URI again on every connection attempt, so callers may tweak query
//! parameters between reconnects from any thread.

mod custom;
mod enterprise;
mod query;

pub use custom::CustomPathEndpoint;
pub use enterprise::{EnterpriseTrackEndpoint, EnterpriseTrackEndpointBuilder, DEFAULT_PUBLISHER};
pub use query::QueryParams;

use std::fmt::Debug;

use http::Method;

use crate::util::with_query;

/// Capability every streaming endpoint exposes to the HTTP client.
///
/// Implementors supply [`path`](Self::path) and
/// [`query_parameters`](Self::query_parameters); everything else is
/// provided. The backfill, API-version and POST-parameter mutators are part
/// of the client-facing contract but have no effect on GET-only endpoints.
pub trait EndpointDescriptor: Debug + Send + Sync {
    /// Request path, without query string.
    fn path(&self) -> &str;

    /// Backing store for the query string.
    fn query_parameters(&self) -> &QueryParams;

    fn http_method(&self) -> Method {
        Method::GET
    }

    /// `path` alone, or `path?k=v&...` when parameters are present.
    fn uri(&self) -> String {
        let uri = with_query(self.path(), &self.query_param_string());
        tracing::debug!(%uri, "Computed stream URI");
        uri
    }

    fn post_param_string(&self) -> Option<String> {
        None
    }

    fn query_param_string(&self) -> String {
        self.query_parameters().to_query_string()
    }

    fn add_query_parameter(&self, name: &str, value: &str) {
        self.query_parameters().insert(name, value);
    }

    fn remove_query_parameter(&self, name: &str) {
        self.query_parameters().remove(name);
    }

    fn set_backfill_count(&self, _count: i32) {}

    fn set_api_version(&self, _version: &str) {}

    fn add_post_parameter(&self, _name: &str, _value: &str) {}

    fn remove_post_parameter(&self, _name: &str) {}
}
