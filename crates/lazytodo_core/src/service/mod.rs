//! Core use-case services.
//!
//! # Responsibility
//! - Compose repository calls into the read models and shortcuts that
//!   callers (pages, CLI) need.
//! - Keep callers decoupled from the storage layout.
//!
//! # Invariants
//! - Services never write collections directly; all mutations go through
//!   repository contracts so analytics stay in step.
//! - Project membership is computed from `Task::project_id`, never from the
//!   legacy `Project::tasks` list.

pub mod dashboard;
pub mod note_service;
pub mod project_service;
pub mod task_service;

use crate::model::ids::parse_timestamp;

/// Sorts newest first by the timestamp `key` returns.
///
/// Stable for equal instants; unparsable timestamps sort last.
pub(crate) fn sort_newest_first<T>(items: &mut [T], key: impl Fn(&T) -> &str) {
    items.sort_by_cached_key(|item| std::cmp::Reverse(parse_timestamp(key(item))));
}

#[cfg(test)]
mod tests {
    use super::sort_newest_first;

    #[test]
    fn newest_first_puts_unparsable_last() {
        let mut stamps = vec![
            "2024-01-01T00:00:00.000Z",
            "garbage",
            "2024-03-01T00:00:00.000Z",
            "2024-02-01T00:00:00+01:00",
        ];
        sort_newest_first(&mut stamps, |value| *value);
        assert_eq!(
            stamps,
            vec![
                "2024-03-01T00:00:00.000Z",
                "2024-02-01T00:00:00+01:00",
                "2024-01-01T00:00:00.000Z",
                "garbage",
            ]
        );
    }
}
