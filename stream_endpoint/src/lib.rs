//! # Stream Endpoint
//!
//! Request-target descriptors for a Twitter/X streaming HTTP client. A
//! descriptor supplies the method, path and query string the client uses on
//! every connection attempt; the client owns everything network-related.
//!
//! Two descriptors are provided:
//! * [`CustomPathEndpoint`] wraps any path the caller hands in.
//! * [`EnterpriseTrackEndpoint`] builds the enterprise PowerTrack path
//!   `/stream/{product}/accounts/{account}/publishers/{publisher}/{label}.json`.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod util;

pub use client::*;
pub use config::{EndpointConfig, EndpointKind};
pub use endpoint::*;
pub use error::EndpointError;
