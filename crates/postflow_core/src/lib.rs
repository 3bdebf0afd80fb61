//! Core domain logic for PostFlow campaign content planning.
//! This crate is the single source of truth for business invariants.

pub mod calendar;
pub mod db;
pub mod engine;
pub mod filter;
pub mod logging;
pub mod model;
pub mod provider;
pub mod service;
pub mod store;

pub use calendar::date_key::{DateKey, InvalidDateKey};
pub use calendar::drag::{resolve_day_drop, resolve_pool_drop, DragPayload, DropAction};
pub use calendar::month::MonthCursor;
pub use calendar::schedule::Schedule;
pub use engine::mutation::MutationOutcome;
pub use filter::post_filter::{available_tones, FeatureFilter, PostFilter};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::campaign::{
    AnalysisReport, BrandInput, GenerationSettings, PostFormat, ToneSuggestion,
};
pub use model::post::{
    Caption, EngagementPrediction, Post, PostDraft, PostId, PostVariations,
};
pub use model::project::{Project, ProjectId};
pub use provider::decode::decode_or_default;
pub use provider::spi::{GenerativeProvider, ProviderError, ProviderResult};
pub use service::campaign_service::{
    CampaignService, Outcome, ServiceError, ServiceResult, SkipReason,
};
pub use service::inflight::{ActionKind, InFlightTracker};
pub use store::snapshot_store::{
    SnapshotStore, SqliteSnapshotStore, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
