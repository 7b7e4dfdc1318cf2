//! Record source - the backend collaborator boundary
//!
//! The engine only needs "give me the deals" and "give me the commissions".
//! How the collection was obtained is the source's business; its failures
//! reach the caller unchanged. A failed fetch is an error, never an empty
//! collection and never sample data.

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use shared::error::ErrorCode;
use shared::models::{CommissionRecord, DealRecord};

/// Resource class served by a record source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Deals,
    Commissions,
}

impl Resource {
    /// File name inside a JSON export directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Resource::Deals => "deals.json",
            Resource::Commissions => "commissions.json",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Deals => write!(f, "deals"),
            Resource::Commissions => write!(f, "commissions"),
        }
    }
}

/// Record source error type
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source could not be read
    #[error("{resource} unavailable at {}: {source}", .path.display())]
    Unavailable {
        resource: Resource,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The payload was valid JSON but not a record array
    #[error("{resource} payload is not a JSON array")]
    NotAnArray { resource: Resource },

    /// The payload could not be decoded into records
    #[error("{resource} payload could not be decoded: {source}")]
    Decode {
        resource: Resource,
        source: serde_json::Error,
    },
}

impl SourceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Unavailable { .. } => ErrorCode::SourceUnavailable,
            Self::NotAnArray { .. } | Self::Decode { .. } => ErrorCode::SourcePayloadInvalid,
        }
    }

    pub fn resource(&self) -> Resource {
        match self {
            Self::Unavailable { resource, .. }
            | Self::NotAnArray { resource }
            | Self::Decode { resource, .. } => *resource,
        }
    }
}

/// Result type for record source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Backend collaborator serving raw record collections
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Every deal the caller may see
    async fn fetch_deals(&self) -> SourceResult<Vec<DealRecord>>;

    /// Commissions, optionally restricted to one sales agent
    async fn fetch_commissions(&self, agent_id: Option<i64>)
    -> SourceResult<Vec<CommissionRecord>>;
}

/// Decode a JSON record array, distinguishing "not an array" from bad records
pub fn decode_records<T: DeserializeOwned>(
    resource: Resource,
    bytes: &[u8],
) -> SourceResult<Vec<T>> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|source| SourceError::Decode { resource, source })?;
    if !value.is_array() {
        return Err(SourceError::NotAnArray { resource });
    }
    serde_json::from_value(value).map_err(|source| SourceError::Decode { resource, source })
}

fn for_agent(commissions: Vec<CommissionRecord>, agent_id: Option<i64>) -> Vec<CommissionRecord> {
    match agent_id {
        Some(id) => commissions
            .into_iter()
            .filter(|c| c.sales_agent_id == id)
            .collect(),
        None => commissions,
    }
}

/// Reads a JSON export directory holding `deals.json` and `commissions.json`
#[derive(Debug, Clone)]
pub struct JsonExportSource {
    dir: PathBuf,
}

impl JsonExportSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn load<T: DeserializeOwned>(&self, resource: Resource) -> SourceResult<Vec<T>> {
        let path = self.dir.join(resource.file_name());
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| SourceError::Unavailable {
                resource,
                path: path.clone(),
                source,
            })?;
        let records = decode_records(resource, &bytes)?;
        tracing::debug!(%resource, path = %path.display(), count = records.len(), "Loaded records");
        Ok(records)
    }
}

#[async_trait]
impl RecordSource for JsonExportSource {
    async fn fetch_deals(&self) -> SourceResult<Vec<DealRecord>> {
        self.load(Resource::Deals).await
    }

    async fn fetch_commissions(
        &self,
        agent_id: Option<i64>,
    ) -> SourceResult<Vec<CommissionRecord>> {
        let commissions = self.load(Resource::Commissions).await?;
        Ok(for_agent(commissions, agent_id))
    }
}

/// Serves fixed in-memory collections
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    deals: Vec<DealRecord>,
    commissions: Vec<CommissionRecord>,
}

impl StaticSource {
    pub fn new(deals: Vec<DealRecord>, commissions: Vec<CommissionRecord>) -> Self {
        Self { deals, commissions }
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    async fn fetch_deals(&self) -> SourceResult<Vec<DealRecord>> {
        Ok(self.deals.clone())
    }

    async fn fetch_commissions(
        &self,
        agent_id: Option<i64>,
    ) -> SourceResult<Vec<CommissionRecord>> {
        Ok(for_agent(self.commissions.clone(), agent_id))
    }
}
