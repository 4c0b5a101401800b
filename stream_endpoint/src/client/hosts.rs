use std::sync::atomic::{AtomicUsize, Ordering};

use url::Url;

use crate::error::EndpointError;

/// Public filtered/sample stream host.
pub const STREAM_HOST: &str = "https://stream.twitter.com";
/// Enterprise (Gnip 2.0) stream host.
pub const ENTERPRISE_STREAM_HOST_V2: &str = "https://gnip-stream.twitter.com";

/// Base URLs a streaming client rotates through on reconnect.
#[derive(Debug)]
pub struct HttpHosts {
    hosts: Vec<Url>,
    cursor: AtomicUsize,
}

impl HttpHosts {
    /// Parse every entry up front. An empty list is rejected.
    pub fn new<I, S>(hosts: I) -> Result<Self, EndpointError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let hosts = hosts
            .into_iter()
            .map(|h| Url::parse(h.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if hosts.is_empty() {
            return Err(EndpointError::InvalidArgument(
                "at least one host is required".into(),
            ));
        }
        Ok(Self {
            hosts,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Single-host convenience.
    pub fn single(host: &str) -> Result<Self, EndpointError> {
        Self::new([host])
    }

    /// Next host, round-robin. Safe to call from several threads.
    pub fn next_host(&self) -> &Url {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed) % self.hosts.len();
        &self.hosts[i]
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_robin_wraps() {
        let hosts = HttpHosts::new(["https://a.example", "https://b.example"]).unwrap();
        let seen: Vec<_> = (0..5)
            .map(|_| hosts.next_host().host_str().unwrap().to_string())
            .collect();
        assert_eq!(
            seen,
            ["a.example", "b.example", "a.example", "b.example", "a.example"]
        );
    }

    #[test]
    fn test_empty_rejected() {
        let none: [&str; 0] = [];
        assert!(matches!(
            HttpHosts::new(none),
            Err(EndpointError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bad_url_rejected() {
        assert!(matches!(
            HttpHosts::single("not a url"),
            Err(EndpointError::Url(_))
        ));
    }

    #[test]
    fn test_known_hosts_parse() {
        let hosts = HttpHosts::new([STREAM_HOST, ENTERPRISE_STREAM_HOST_V2]).unwrap();
        assert_eq!(hosts.len(), 2);
    }
}
