//! Pure logic behind the per-content status card: deal tallies, failure
//! visibility, and the replication progress note.

use crate::core::status::{DealStatus, classify};
use moorage_api_models::{CidRef, Content, ContentSummary, DealEntry};

/// One rendered deal line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DealRow {
    /// Stable render key: the deal's database id when present, else the
    /// entry's position in the payload.
    pub key: u64,
    /// Classified status for the observation.
    pub status: DealStatus,
    /// On-chain deal identifier, once published.
    pub chain_deal_id: Option<u64>,
}

/// Classified rows plus success/failure counts for one content item.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DealTally {
    /// All deal rows in payload order.
    pub rows: Vec<DealRow>,
    /// Deals confirmed on chain.
    pub successes: usize,
    /// Deals that failed, before or after transfer.
    pub failures: usize,
}

/// Classify every entry and count successes and failures.
#[must_use]
pub fn tally(entries: &[DealEntry]) -> DealTally {
    let mut out = DealTally::default();
    for (index, entry) in entries.iter().enumerate() {
        let status = classify(
            entry.deal.as_ref(),
            entry.transfer.as_ref(),
            entry.on_chain_state.as_ref(),
        );
        if status.is_success() {
            out.successes += 1;
        }
        if status.is_failure() {
            out.failures += 1;
        }
        out.rows.push(DealRow {
            key: entry.deal.as_ref().map_or(index as u64, |deal| deal.id),
            status,
            chain_deal_id: entry.deal.as_ref().and_then(|deal| deal.deal_id),
        });
    }
    out
}

/// Rows to render given the presentational failure toggle. Hiding failures
/// never touches the underlying tally.
#[must_use]
pub fn visible_rows(rows: &[DealRow], show_failures: bool) -> Vec<DealRow> {
    rows.iter()
        .filter(|row| show_failures || !row.status.is_failure())
        .cloned()
        .collect()
}

/// Replication progress summary for the card footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplicationNote {
    /// Every targeted deal is confirmed on chain.
    BackedUp,
    /// Still working toward the target.
    InProgress {
        /// Confirmed on-chain deals so far.
        successes: usize,
        /// Target replication factor.
        target: u64,
    },
}

impl ReplicationNote {
    /// Message text for the note.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::BackedUp => "Your data is backed up to the Filecoin Network".to_string(),
            Self::InProgress { successes, target } => format!(
                "Moorage is working on {target} successful on chain deals. {successes} / {target}"
            ),
        }
    }
}

/// Summarise replication progress; `None` when the content has no
/// replication target to report against.
#[must_use]
pub fn replication_note(successes: usize, content: Option<&Content>) -> Option<ReplicationNote> {
    let target = content.map(|c| c.replication).filter(|&r| r > 0)?;
    if successes as u64 == target {
        Some(ReplicationNote::BackedUp)
    } else {
        Some(ReplicationNote::InProgress { successes, target })
    }
}

/// Display name for the card header. Absent content renders a placeholder
/// and aggregate buckets render as the root path.
#[must_use]
pub fn display_name(content: Option<&Content>) -> String {
    let name = content.and_then(|c| c.name.as_deref()).unwrap_or("...");
    if name == "aggregate" {
        "/".to_string()
    } else {
        name.to_string()
    }
}

/// Note shown when the deal bucket aggregates more files than the one
/// being displayed. `None` for unaggregated content.
#[must_use]
pub fn aggregation_note(aggregated_files: u64) -> Option<String> {
    if aggregated_files <= 1 {
        return None;
    }
    let extra = aggregated_files - 1;
    Some(format!(
        "{extra} additional {} in this deal",
        crate::core::format::pluralize("file", extra)
    ))
}

/// Label for a listed entity. Falls back from name to filename to CID, and
/// rewrites aggregate buckets to a root-path label.
#[must_use]
pub fn file_label(summary: &ContentSummary) -> String {
    if summary.name.as_deref() == Some("aggregate") {
        return "./".to_string();
    }
    summary
        .name
        .as_deref()
        .or(summary.filename.as_deref())
        .or_else(|| summary.cid.as_ref().map(CidRef::as_str))
        .unwrap_or("...")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use moorage_api_models::{
        CidRef, Deal, OnChainState, SectorStatus, Transfer, TransferStatus,
    };

    fn content(replication: u64) -> Content {
        Content {
            id: 42,
            name: Some("photos.car".to_string()),
            cid: Some(CidRef::Plain("bafytest".to_string())),
            size: 2048,
            replication,
            aggregated_in: 0,
        }
    }

    fn active_entry(id: u64) -> DealEntry {
        DealEntry {
            deal: Some(Deal {
                id,
                content: 42,
                deal_id: Some(90_000 + id),
                transferred: true,
                failed: false,
                slashed: false,
                created_at: None,
            }),
            transfer: Some(Transfer {
                id: None,
                status: TransferStatus::Completed,
            }),
            on_chain_state: Some(OnChainState {
                sector_start_epoch: 1000,
                sector: SectorStatus::Active,
            }),
        }
    }

    fn failed_entry(id: u64) -> DealEntry {
        DealEntry {
            deal: Some(Deal {
                id,
                content: 42,
                deal_id: None,
                transferred: false,
                failed: true,
                slashed: false,
                created_at: None,
            }),
            transfer: None,
            on_chain_state: None,
        }
    }

    #[test]
    fn tally_counts_successes_and_failures() {
        let entries = vec![active_entry(1), failed_entry(2), active_entry(3)];
        let tally = tally(&entries);
        assert_eq!(tally.successes, 2);
        assert_eq!(tally.failures, 1);
        assert_eq!(tally.rows.len(), 3);
        assert_eq!(tally.rows[0].chain_deal_id, Some(90_001));
        assert_eq!(tally.rows[1].status, DealStatus::Failed);
    }

    #[test]
    fn failure_rows_hide_behind_the_toggle() {
        let tally = tally(&[active_entry(1), failed_entry(2)]);
        let hidden = visible_rows(&tally.rows, false);
        assert_eq!(hidden.len(), 1);
        assert_eq!(hidden[0].status, DealStatus::ActiveOnChain);
        let shown = visible_rows(&tally.rows, true);
        assert_eq!(shown.len(), 2);
        // The underlying tally is untouched either way.
        assert_eq!(tally.failures, 1);
    }

    #[test]
    fn entries_without_deals_key_by_position() {
        let entries = vec![DealEntry {
            deal: None,
            transfer: None,
            on_chain_state: None,
        }];
        let tally = tally(&entries);
        assert_eq!(tally.rows[0].key, 0);
        assert_eq!(tally.rows[0].status, DealStatus::Staged);
    }

    #[test]
    fn full_replication_reports_backed_up() {
        let note = replication_note(6, Some(&content(6))).unwrap();
        assert_eq!(note, ReplicationNote::BackedUp);
        assert_eq!(
            note.message(),
            "Your data is backed up to the Filecoin Network"
        );
    }

    #[test]
    fn partial_replication_reports_progress() {
        let note = replication_note(3, Some(&content(6))).unwrap();
        assert!(note.message().contains("3 / 6"));
    }

    #[test]
    fn missing_target_yields_no_note() {
        assert_eq!(replication_note(3, Some(&content(0))), None);
        assert_eq!(replication_note(3, None), None);
    }

    #[test]
    fn aggregation_notes_count_the_other_files() {
        assert_eq!(aggregation_note(0), None);
        assert_eq!(aggregation_note(1), None);
        assert_eq!(
            aggregation_note(2).as_deref(),
            Some("1 additional file in this deal")
        );
        assert_eq!(
            aggregation_note(5).as_deref(),
            Some("4 additional files in this deal")
        );
    }

    #[test]
    fn file_labels_fall_back_to_filename_then_cid() {
        let mut summary = ContentSummary {
            id: 7,
            name: Some("report.pdf".to_string()),
            filename: Some("upload-7.bin".to_string()),
            cid: Some(CidRef::Plain("bafylist".to_string())),
            size: 10,
            created_at: None,
            aggregated_files: 0,
        };
        assert_eq!(file_label(&summary), "report.pdf");
        summary.name = None;
        assert_eq!(file_label(&summary), "upload-7.bin");
        summary.filename = None;
        assert_eq!(file_label(&summary), "bafylist");
        summary.cid = None;
        assert_eq!(file_label(&summary), "...");
        summary.name = Some("aggregate".to_string());
        assert_eq!(file_label(&summary), "./");
    }

    #[test]
    fn names_fall_back_and_rewrite_aggregates() {
        assert_eq!(display_name(Some(&content(6))), "photos.car");
        assert_eq!(display_name(None), "...");
        let unnamed = Content {
            name: None,
            ..content(6)
        };
        assert_eq!(display_name(Some(&unnamed)), "...");
        let aggregate = Content {
            name: Some("aggregate".to_string()),
            ..content(6)
        };
        assert_eq!(display_name(Some(&aggregate)), "/");
    }
}
