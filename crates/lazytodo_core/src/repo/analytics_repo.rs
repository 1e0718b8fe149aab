//! Analytics aggregator over the singleton analytics document.
//!
//! # Responsibility
//! - Read the current counters.
//! - Apply additive deltas and recompute the completion rate.
//!
//! # Invariants
//! - Deltas are additive; absolute values are never written by callers.
//! - Every applied delta stamps `last_updated`.

use crate::model::analytics::{Analytics, AnalyticsDelta};
use crate::model::ids::now_timestamp;
use crate::store::{Collection, JsonStore, StoreResult};
use log::debug;

/// Repository interface for the analytics singleton.
pub trait AnalyticsRepository {
    fn get_analytics(&self) -> StoreResult<Analytics>;
    /// Adds `delta` to the stored counters and returns the new singleton.
    fn apply_delta(&self, delta: &AnalyticsDelta) -> StoreResult<Analytics>;
}

/// JSON-store-backed analytics aggregator.
#[derive(Debug, Clone, Copy)]
pub struct JsonAnalyticsRepository<'store> {
    store: &'store JsonStore,
}

impl<'store> JsonAnalyticsRepository<'store> {
    pub fn new(store: &'store JsonStore) -> Self {
        Self { store }
    }
}

impl AnalyticsRepository for JsonAnalyticsRepository<'_> {
    fn get_analytics(&self) -> StoreResult<Analytics> {
        self.store.load(Collection::Analytics)
    }

    fn apply_delta(&self, delta: &AnalyticsDelta) -> StoreResult<Analytics> {
        let guard = self.store.lock(Collection::Analytics)?;
        let mut analytics: Analytics = guard.load()?;
        analytics.apply(delta, now_timestamp());
        guard.save(&analytics)?;

        debug!(
            "event=analytics_apply module=repo status=ok tasks_created={} tasks_completed={} tasks_archived={} projects_created={} notes_created={}",
            delta.tasks_created,
            delta.tasks_completed,
            delta.tasks_archived,
            delta.projects_created,
            delta.notes_created
        );
        Ok(analytics)
    }
}
