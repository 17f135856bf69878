#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Moorage deals API.
//!
//! These types mirror the JSON payloads served by the deals backend so the
//! UI decodes the contract in exactly one place. Everything here is a
//! read-only snapshot: records are never mutated after decoding.

use serde::{Deserialize, Serialize};

/// A content identifier, either a bare string or the linked-object form
/// (`{"/": "bafy..."}`) some endpoints emit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CidRef {
    /// Bare CID string.
    Plain(String),
    /// Linked-object CID wrapper.
    Linked {
        /// The wrapped CID string.
        #[serde(rename = "/")]
        cid: String,
    },
}

impl CidRef {
    /// The CID string regardless of wire shape.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(cid) | Self::Linked { cid } => cid,
        }
    }
}

/// Data-transfer progress reported for a deal's payload movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    /// Payload staged locally; the transfer has not started.
    Staged,
    /// Transfer requested from the provider but not yet moving data.
    Requested,
    /// Bytes are actively moving to the provider.
    Ongoing,
    /// All bytes delivered to the provider.
    Completed,
    /// The transfer stopped with an error.
    Failed,
    /// The transfer was cancelled before completion.
    Cancelled,
}

/// The data-movement sub-process attached to a deal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Transfer channel identifier, when the provider reported one.
    #[serde(default)]
    pub id: Option<String>,
    /// Current progress state.
    pub status: TransferStatus,
}

/// Post-activation sector lifecycle reported by the chain.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SectorStatus {
    /// Published but not yet proven.
    #[default]
    Pending,
    /// Sector is proven and active.
    Active,
    /// Sector contents are sealed.
    Sealed,
    /// Provider is repairing a faulted sector.
    Repairing,
}

/// Confirmation record present only once a deal reaches the chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OnChainState {
    /// Epoch at which the sector landed on chain; zero or negative until
    /// the deal is confirmed.
    #[serde(default)]
    pub sector_start_epoch: i64,
    /// Sector lifecycle state.
    #[serde(default)]
    pub sector: SectorStatus,
}

impl OnChainState {
    /// Whether the chain has confirmed the deal's sector.
    #[must_use]
    pub const fn confirmed(&self) -> bool {
        self.sector_start_epoch > 0
    }
}

/// An agreement record representing a storage commitment for a piece of
/// content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    /// Local database identifier.
    pub id: u64,
    /// Identifier of the content this deal covers.
    #[serde(default)]
    pub content: u64,
    /// On-chain deal identifier, once published.
    #[serde(default)]
    pub deal_id: Option<u64>,
    /// Whether the payload finished transferring to the provider.
    #[serde(default)]
    pub transferred: bool,
    /// Whether the deal failed terminally.
    #[serde(default)]
    pub failed: bool,
    /// Whether the provider was slashed for this deal.
    #[serde(default)]
    pub slashed: bool,
    /// Creation timestamp (RFC 3339), when reported.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Aggregate content record returned by the status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Local content identifier.
    pub id: u64,
    /// Display name, absent for unnamed uploads.
    #[serde(default)]
    pub name: Option<String>,
    /// Content identifier for retrieval.
    #[serde(default)]
    pub cid: Option<CidRef>,
    /// Payload size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Target number of independent successful deals.
    #[serde(default)]
    pub replication: u64,
    /// Identifier of the aggregate bucket holding this content, or zero
    /// when the content stands alone.
    #[serde(default)]
    pub aggregated_in: u64,
}

impl Content {
    /// Identifier of the aggregate parent, when this content is part of a
    /// larger bucket.
    #[must_use]
    pub const fn aggregated_parent(&self) -> Option<u64> {
        if self.aggregated_in > 0 {
            Some(self.aggregated_in)
        } else {
            None
        }
    }

    /// The content's CID string, when present.
    #[must_use]
    pub fn cid_str(&self) -> Option<&str> {
        self.cid.as_ref().map(CidRef::as_str)
    }
}

/// One deal observation: the deal record plus its at-most-one transfer and
/// at-most-one on-chain record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DealEntry {
    /// The deal record, absent for never-attempted content.
    #[serde(default)]
    pub deal: Option<Deal>,
    /// Transfer progress, once data movement has been scheduled.
    #[serde(default)]
    pub transfer: Option<Transfer>,
    /// Chain confirmation, once the deal is published.
    #[serde(default)]
    pub on_chain_state: Option<OnChainState>,
}

/// Payload of `GET /content/status/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentStatusResponse {
    /// The content record, absent when the backend has no details yet.
    #[serde(default)]
    pub content: Option<Content>,
    /// All observed deals for this content.
    #[serde(default)]
    pub deals: Vec<DealEntry>,
    /// Failure count pre-computed by the backend.
    #[serde(default)]
    pub failures_count: u64,
}

/// List row of `GET /content/deals`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentSummary {
    /// Local content identifier.
    pub id: u64,
    /// Display name, absent for unnamed uploads.
    #[serde(default)]
    pub name: Option<String>,
    /// Original upload filename, when the name is unset.
    #[serde(default)]
    pub filename: Option<String>,
    /// Content identifier for retrieval.
    #[serde(default)]
    pub cid: Option<CidRef>,
    /// Payload size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Creation timestamp (RFC 3339), when reported.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Number of files aggregated into the same deal bucket.
    #[serde(default)]
    pub aggregated_files: u64,
}

/// Authenticated session record; the UI only checks for its presence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    /// Account identifier.
    pub id: u64,
    /// Display handle, when set.
    #[serde(default)]
    pub username: Option<String>,
}

/// Decodes either a successful payload or the backend's `{"error": ...}`
/// failure convention. Failures carry no structured code beyond the
/// message.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ApiEnvelope<T> {
    /// The backend reported an error instead of a payload.
    Failure {
        /// Human-readable error message.
        error: String,
    },
    /// Successfully decoded payload.
    Success(T),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_response_decodes_full_payload() {
        let raw = r#"{
            "content": {
                "id": 42,
                "name": "photos.car",
                "cid": {"/": "bafybeigdyrzt5s"},
                "size": 1048576,
                "replication": 6,
                "aggregatedIn": 0
            },
            "deals": [
                {
                    "deal": {"id": 7, "content": 42, "dealId": 99001, "transferred": true},
                    "transfer": {"id": "ch-12", "status": "completed"},
                    "onChainState": {"sectorStartEpoch": 1200, "sector": "active"}
                },
                {
                    "deal": {"id": 8, "content": 42, "failed": true}
                }
            ],
            "failuresCount": 1
        }"#;
        let status: ContentStatusResponse = serde_json::from_str(raw).unwrap();
        let content = status.content.unwrap();
        assert_eq!(content.cid_str(), Some("bafybeigdyrzt5s"));
        assert_eq!(content.aggregated_parent(), None);
        assert_eq!(status.deals.len(), 2);
        assert!(status.deals[0].on_chain_state.as_ref().unwrap().confirmed());
        assert_eq!(
            status.deals[0].transfer.as_ref().unwrap().status,
            TransferStatus::Completed
        );
        assert!(status.deals[1].transfer.is_none());
        assert_eq!(status.failures_count, 1);
    }

    #[test]
    fn aggregated_parent_reports_bucket() {
        let raw = r#"{"id": 5, "aggregatedIn": 77}"#;
        let content: Content = serde_json::from_str(raw).unwrap();
        assert_eq!(content.aggregated_parent(), Some(77));
        assert_eq!(content.cid_str(), None);
    }

    #[test]
    fn cid_decodes_both_wire_shapes() {
        let plain: CidRef = serde_json::from_str(r#""bafyplain""#).unwrap();
        assert_eq!(plain.as_str(), "bafyplain");
        let linked: CidRef = serde_json::from_str(r#"{"/": "bafylinked"}"#).unwrap();
        assert_eq!(linked.as_str(), "bafylinked");
    }

    #[test]
    fn unconfirmed_chain_state_defaults() {
        let chain: OnChainState = serde_json::from_str("{}").unwrap();
        assert!(!chain.confirmed());
        assert_eq!(chain.sector, SectorStatus::Pending);
    }

    #[test]
    fn envelope_prefers_failure_branch() {
        let failure: ApiEnvelope<Vec<ContentSummary>> =
            serde_json::from_str(r#"{"error": "no such content"}"#).unwrap();
        assert_eq!(
            failure,
            ApiEnvelope::Failure {
                error: "no such content".to_string()
            }
        );
        let success: ApiEnvelope<Vec<ContentSummary>> =
            serde_json::from_str(r#"[{"id": 1, "size": 10}]"#).unwrap();
        let ApiEnvelope::Success(rows) = success else {
            panic!("expected payload");
        };
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].aggregated_files, 0);
    }
}
