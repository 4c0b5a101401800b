//! Turning a descriptor into a request target.
//!
//! Nothing here touches the network: [`prepare_request`] only shapes a
//! `reqwest::RequestBuilder` that the streaming client sends on its own.

use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::endpoint::EndpointDescriptor;
use crate::error::EndpointError;
use crate::util::build_url;

/// Join `endpoint.path()` onto `host` and attach the descriptor's query.
///
/// The query is set as a whole, never re-parsed: `&`/`=` stay as they are,
/// while bytes that can't appear in a query (`#`, spaces, control
/// characters) are percent-encoded so no parameter ends up in a fragment.
pub fn request_url(host: &Url, endpoint: &dyn EndpointDescriptor) -> Result<Url, EndpointError> {
    let mut url = Url::parse(&build_url(host.as_str(), endpoint.path()))?;
    let query = endpoint.query_param_string();
    if !query.is_empty() {
        url.set_query(Some(&query));
    }
    Ok(url)
}

/// Build (but do not send) the request for `endpoint` against `host`.
pub fn prepare_request(
    http: &Client,
    host: &Url,
    endpoint: &dyn EndpointDescriptor,
) -> Result<RequestBuilder, EndpointError> {
    let url = request_url(host, endpoint)?;
    let mut req = http
        .request(endpoint.http_method(), url)
        .header("Accept", "application/json");

    if let Some(body) = endpoint.post_param_string() {
        req = req
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body);
    }

    Ok(req)
}
