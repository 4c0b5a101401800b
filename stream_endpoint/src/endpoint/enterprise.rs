use super::{EndpointDescriptor, QueryParams};
use crate::error::{missing, EndpointError};

/// Publisher used when none is given.
pub const DEFAULT_PUBLISHER: &str = "twitter";

const BACKFILL_PARAM: &str = "backfillMinutes";

/// Enterprise PowerTrack-style endpoint:
/// `/stream/{product}/accounts/{account}/publishers/{publisher}/{label}.json`.
///
/// The path is fixed at construction. A positive backfill window becomes an
/// ordinary `backfillMinutes` query parameter.
#[derive(Debug, Clone)]
pub struct EnterpriseTrackEndpoint {
    account: String,
    publisher: String,
    product: String,
    label: String,
    path: String,
    query: QueryParams,
}

impl EnterpriseTrackEndpoint {
    /// Endpoint for the default publisher, without backfill.
    pub fn new(
        account: impl Into<String>,
        product: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<Self, EndpointError> {
        Self::builder()
            .account(account)
            .product(product)
            .label(label)
            .build()
    }

    pub fn builder() -> EnterpriseTrackEndpointBuilder {
        EnterpriseTrackEndpointBuilder::default()
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl EndpointDescriptor for EnterpriseTrackEndpoint {
    fn path(&self) -> &str {
        &self.path
    }

    fn query_parameters(&self) -> &QueryParams {
        &self.query
    }
}

/// Builder for [`EnterpriseTrackEndpoint`].
#[derive(Debug, Clone, Default)]
pub struct EnterpriseTrackEndpointBuilder {
    account: Option<String>,
    publisher: Option<String>,
    product: Option<String>,
    label: Option<String>,
    backfill_minutes: u32,
}

impl EnterpriseTrackEndpointBuilder {
    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Defaults to [`DEFAULT_PUBLISHER`].
    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// `0` (the default) disables backfill.
    pub fn backfill_minutes(mut self, minutes: u32) -> Self {
        self.backfill_minutes = minutes;
        self
    }

    /// Validate and build. Fails on the first absent identifier; a value that
    /// is empty or whitespace-only counts as absent, since it would leave an
    /// empty path segment.
    pub fn build(self) -> Result<EnterpriseTrackEndpoint, EndpointError> {
        let account = required(self.account, "account")?;
        let product = required(self.product, "product")?;
        let label = required(self.label, "label")?;
        let publisher = required(
            Some(self.publisher.unwrap_or_else(|| DEFAULT_PUBLISHER.to_string())),
            "publisher",
        )?;

        let path = format!(
            "/stream/{}/accounts/{}/publishers/{}/{}.json",
            product.trim(),
            account.trim(),
            publisher.trim(),
            label.trim()
        );

        let query = QueryParams::new();
        if self.backfill_minutes > 0 {
            query.insert(BACKFILL_PARAM, &self.backfill_minutes.to_string());
        }

        Ok(EnterpriseTrackEndpoint {
            account,
            publisher,
            product,
            label,
            path,
            query,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, EndpointError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}
