//! Domain records persisted by the JSON store.
//!
//! # Responsibility
//! - Define the on-disk shape of tasks, projects, notes and analytics.
//! - Define create/patch inputs and the merge rules updates apply.
//!
//! # Invariants
//! - Field names are camelCase on disk.
//! - Optional fields are omitted when absent, so absent-vs-empty survives
//!   a load/save round trip.
//! - Cross-record references are weak ids; nothing here enforces them.

pub mod analytics;
pub mod ids;
pub mod note;
pub mod project;
pub mod task;
