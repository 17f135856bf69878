//! Deal status classification.
//!
//! # Design
//! - One total function maps every (deal, transfer, on-chain) observation
//!   to exactly one label; the fallback is an explicit [`DealStatus::Unknown`].
//! - Chain confirmation always beats transient transfer status, and a
//!   failure after a completed transfer is distinguished from an early one.

use moorage_api_models::{Deal, OnChainState, SectorStatus, Transfer, TransferStatus};

/// Human-facing status of one deal observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DealStatus {
    /// Content staged locally; no deal attempted yet.
    Staged,
    /// Deal proposed; waiting on the provider before data moves.
    Asking,
    /// Payload is transferring to the provider.
    Transferring,
    /// Deal confirmed on chain.
    ActiveOnChain,
    /// Sector holding the deal is sealed.
    Sealed,
    /// Provider is repairing the sector holding the deal.
    Repairing,
    /// Deal failed before the payload finished transferring.
    Failed,
    /// Deal failed after the payload had fully transferred.
    FailedAfterTransfer,
    /// Observation did not match any known lifecycle shape.
    Unknown,
}

/// Badge category for rendering a status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    /// Nothing happening yet.
    Muted,
    /// Waiting on a counterparty.
    Neutral,
    /// Work in progress.
    Progress,
    /// Confirmed healthy state.
    Success,
    /// Degraded but recovering.
    Warning,
    /// Terminal failure.
    Danger,
}

impl StatusTone {
    /// CSS class for the badge span.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Muted => "pill muted",
            Self::Neutral => "pill",
            Self::Progress => "pill live",
            Self::Success => "pill ok",
            Self::Warning => "pill warn",
            Self::Danger => "pill error",
        }
    }
}

impl DealStatus {
    /// Display label for the status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Staged => "Staged",
            Self::Asking => "Asking",
            Self::Transferring => "Transferring",
            Self::ActiveOnChain => "Active on chain",
            Self::Sealed => "Sealed",
            Self::Repairing => "Repairing",
            Self::Failed => "Failed",
            Self::FailedAfterTransfer => "Failed after transfer",
            Self::Unknown => "Unknown",
        }
    }

    /// Badge category used by the status icon.
    #[must_use]
    pub const fn tone(self) -> StatusTone {
        match self {
            Self::Staged | Self::Unknown => StatusTone::Muted,
            Self::Asking => StatusTone::Neutral,
            Self::Transferring => StatusTone::Progress,
            Self::ActiveOnChain | Self::Sealed => StatusTone::Success,
            Self::Repairing => StatusTone::Warning,
            Self::Failed | Self::FailedAfterTransfer => StatusTone::Danger,
        }
    }

    /// Whether this status counts against the replication target.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failed | Self::FailedAfterTransfer)
    }

    /// Whether this status counts toward the replication target. Sealed and
    /// repairing sectors still hold a confirmed deal.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::ActiveOnChain | Self::Sealed | Self::Repairing)
    }
}

/// Classify one deal observation. Precedence, first match wins:
///
/// 1. sealed / repairing sector;
/// 2. chain-confirmed deal;
/// 3. failed transfer after the payload had transferred;
/// 4. failed transfer or failed/slashed deal;
/// 5. transfer in flight;
/// 6. deal proposed, transfer not started;
/// 7. no deal yet;
/// 8. [`DealStatus::Unknown`].
#[must_use]
pub fn classify(
    deal: Option<&Deal>,
    transfer: Option<&Transfer>,
    on_chain: Option<&OnChainState>,
) -> DealStatus {
    if let Some(chain) = on_chain {
        match chain.sector {
            SectorStatus::Sealed => return DealStatus::Sealed,
            SectorStatus::Repairing => return DealStatus::Repairing,
            SectorStatus::Pending | SectorStatus::Active => {}
        }
        if chain.confirmed() {
            return DealStatus::ActiveOnChain;
        }
    }

    let transfer_failed = transfer.is_some_and(|t| {
        matches!(
            t.status,
            TransferStatus::Failed | TransferStatus::Cancelled
        )
    });
    if transfer_failed {
        if deal.is_some_and(|d| d.transferred) {
            return DealStatus::FailedAfterTransfer;
        }
        return DealStatus::Failed;
    }
    if deal.is_some_and(|d| d.failed || d.slashed) {
        return DealStatus::Failed;
    }
    if transfer.is_some_and(|t| {
        matches!(
            t.status,
            TransferStatus::Requested | TransferStatus::Ongoing
        )
    }) {
        return DealStatus::Transferring;
    }
    match (deal, transfer) {
        (Some(_), None) => DealStatus::Asking,
        (Some(_), Some(t)) if t.status == TransferStatus::Staged => DealStatus::Asking,
        (None, _) => DealStatus::Staged,
        _ => DealStatus::Unknown,
    }
}
