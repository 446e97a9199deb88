//! Entity id generation.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

/// Generates `<prefix>-<millis>-<seq>` ids.
///
/// The sequence number is monotonic for the lifetime of the generator, so two
/// ids minted within the same millisecond still differ.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self, prefix: &str, now: DateTime<Utc>) -> String {
        let seq = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}-{}", prefix, now.timestamp_millis(), seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_millisecond_ids_are_distinct() {
        let ids = IdGenerator::new();
        let now = Utc::now();

        let generated: HashSet<String> = (0..1000).map(|_| ids.next_id("run", now)).collect();

        assert_eq!(generated.len(), 1000);
    }

    #[test]
    fn test_id_format() {
        let ids = IdGenerator::new();
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

        assert_eq!(ids.next_id("score", now), "score-1700000000000-0");
        assert_eq!(ids.next_id("score", now), "score-1700000000000-1");
    }
}
