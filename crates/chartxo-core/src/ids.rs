//! ID formatting helpers.
//!
//! IDs are `{prefix}-{unix millis}{6 random digits}`, which keeps them sortable
//! by creation time. Callers that hold a collection pass a `taken` check to
//! [`unique_prefixed_id`] so two entries never share an ID, even under a
//! frozen clock.

use chrono::{DateTime, Utc};

pub const PREFIX_SCAN: &str = "scn";
pub const PREFIX_NOTIFICATION: &str = "ntf";

const SUFFIX_SPACE: u32 = 1_000_000;

/// Format an ID for the given prefix and creation time.
#[must_use]
pub fn prefixed_id(prefix: &str, at: DateTime<Utc>) -> String {
    let suffix = rand::random::<u32>() % SUFFIX_SPACE;
    format!("{prefix}-{}{suffix:06}", at.timestamp_millis())
}

/// Like [`prefixed_id`], drawing again until `taken` rejects the candidate.
#[must_use]
pub fn unique_prefixed_id(prefix: &str, at: DateTime<Utc>, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = prefixed_id(prefix, at);
        if !taken(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn id_carries_prefix_and_millis() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let id = prefixed_id(PREFIX_SCAN, at);
        assert!(id.starts_with("scn-1700000000123"), "got {id}");
        assert_eq!(id.len(), "scn-".len() + 13 + 6);
    }

    #[test]
    fn unique_id_skips_taken_candidates() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let mut seen = HashSet::new();
        for _ in 0..2_000 {
            let id = unique_prefixed_id(PREFIX_SCAN, at, |c| seen.contains(c));
            assert!(seen.insert(id));
        }
        assert_eq!(seen.len(), 2_000);
    }
}
