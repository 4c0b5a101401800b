//! Serializable description of a stream endpoint.
//!
//! Lets tools pick a descriptor from a JSON file or from `STREAM_*`
//! environment variables instead of code.

use std::{env, fs, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::endpoint::{CustomPathEndpoint, EndpointDescriptor, EnterpriseTrackEndpoint};
use crate::error::{missing, EndpointError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointKind {
    Custom,
    #[default]
    Enterprise,
}

/// Endpoint settings. Required fields are optional here so that their
/// absence surfaces as [`EndpointError::InvalidArgument`] from
/// [`build`](Self::build) rather than as a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default)]
    pub kind: EndpointKind,
    pub path: Option<String>,
    pub account: Option<String>,
    pub publisher: Option<String>,
    pub product: Option<String>,
    pub label: Option<String>,
    /// Non-positive values disable backfill.
    pub backfill_minutes: Option<i64>,
    /// Extra query parameters, added in order after construction.
    #[serde(default)]
    pub query: IndexMap<String, String>,
}

impl EndpointConfig {
    pub fn from_json(json: &str) -> Result<Self, EndpointError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EndpointError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Read `STREAM_*` variables. Unset variables stay `None`.
    pub fn from_env() -> Result<Self, EndpointError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EndpointError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind = match lookup("STREAM_KIND").as_deref() {
            None | Some("enterprise") => EndpointKind::Enterprise,
            Some("custom") => EndpointKind::Custom,
            Some(other) => {
                return Err(EndpointError::InvalidArgument(format!(
                    "unknown STREAM_KIND `{other}` (expected `custom` or `enterprise`)"
                )))
            }
        };

        let backfill_minutes = lookup("STREAM_BACKFILL_MINUTES")
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|e| {
                    EndpointError::InvalidArgument(format!(
                        "STREAM_BACKFILL_MINUTES `{raw}` is not an integer: {e}"
                    ))
                })
            })
            .transpose()?;

        let query = match lookup("STREAM_QUERY") {
            Some(raw) => serde_urlencoded::from_str::<Vec<(String, String)>>(&raw)?
                .into_iter()
                .collect(),
            None => IndexMap::new(),
        };

        Ok(Self {
            kind,
            path: lookup("STREAM_PATH"),
            account: lookup("STREAM_ACCOUNT"),
            publisher: lookup("STREAM_PUBLISHER"),
            product: lookup("STREAM_PRODUCT"),
            label: lookup("STREAM_LABEL"),
            backfill_minutes,
            query,
        })
    }

    /// Build the configured descriptor.
    pub fn build(&self) -> Result<Box<dyn EndpointDescriptor>, EndpointError> {
        let endpoint: Box<dyn EndpointDescriptor> = match self.kind {
            EndpointKind::Custom => {
                self.warn_unused(&[
                    ("account", self.account.is_some()),
                    ("publisher", self.publisher.is_some()),
                    ("product", self.product.is_some()),
                    ("label", self.label.is_some()),
                    ("backfill_minutes", self.backfill_minutes.is_some()),
                ]);
                let path = self.path.clone().ok_or_else(|| missing("path"))?;
                Box::new(CustomPathEndpoint::new(path)?)
            }
            EndpointKind::Enterprise => {
                self.warn_unused(&[("path", self.path.is_some())]);
                let mut builder = EnterpriseTrackEndpoint::builder();
                if let Some(account) = &self.account {
                    builder = builder.account(account.as_str());
                }
                if let Some(publisher) = &self.publisher {
                    builder = builder.publisher(publisher.as_str());
                }
                if let Some(product) = &self.product {
                    builder = builder.product(product.as_str());
                }
                if let Some(label) = &self.label {
                    builder = builder.label(label.as_str());
                }
                let minutes = self.backfill_minutes.unwrap_or(0);
                if minutes < 0 {
                    tracing::debug!(minutes, "Negative backfill ignored");
                }
                let minutes = u32::try_from(minutes.max(0)).map_err(|_| {
                    EndpointError::InvalidArgument(format!(
                        "`backfill_minutes` {minutes} is out of range (max {})",
                        u32::MAX
                    ))
                })?;
                Box::new(builder.backfill_minutes(minutes).build()?)
            }
        };

        for (name, value) in &self.query {
            endpoint.add_query_parameter(name, value);
        }
        Ok(endpoint)
    }

    fn warn_unused(&self, fields: &[(&str, bool)]) {
        for (field, set) in fields {
            if *set {
                tracing::warn!(field = *field, kind = ?self.kind, "Config field ignored for this endpoint kind");
            }
        }
    }
}
