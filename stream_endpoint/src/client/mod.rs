mod hosts;
mod request;

pub use hosts::{HttpHosts, ENTERPRISE_STREAM_HOST_V2, STREAM_HOST};
pub use request::{prepare_request, request_url};
