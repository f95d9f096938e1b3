use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identifier of a record inside an in-memory collection.
///
/// New records get the creation time in milliseconds since the epoch, the
/// same value a browser's `Date.now()` yields. Seed records use small numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(RecordId)
            .map_err(|e| ValidationError::Invalid {
                field: "id",
                reason: e.to_string(),
            })
    }
}

/// Clock based id source.
///
/// Ids are strictly increasing: when the clock has not moved past the last
/// issued id (two records in the same millisecond, or a seed id from the
/// future) the next id is `last + 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator that never hands out `floor` or anything below it.
    pub fn after(floor: RecordId) -> Self {
        Self { last: floor.0 }
    }

    pub fn next(&mut self) -> RecordId {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }

    pub fn next_at(&mut self, now_millis: i64) -> RecordId {
        let id = if now_millis > self.last {
            now_millis
        } else {
            self.last + 1
        };
        self.last = id;
        RecordId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_millisecond_ids_are_bumped() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(1_700_000_000_000);
        let b = ids.next_at(1_700_000_000_000);
        let c = ids.next_at(1_700_000_000_000);
        assert_eq!(a, RecordId(1_700_000_000_000));
        assert_eq!(b, RecordId(1_700_000_000_001));
        assert_eq!(c, RecordId(1_700_000_000_002));
    }

    #[test]
    fn test_clock_moving_forward_is_used_directly() {
        let mut ids = IdGenerator::after(RecordId(10));
        assert_eq!(ids.next_at(5), RecordId(11));
        assert_eq!(ids.next_at(500), RecordId(500));
    }

    #[test]
    fn test_parse_record_id() {
        assert_eq!(" 42 ".parse::<RecordId>(), Ok(RecordId(42)));
        assert!("abc".parse::<RecordId>().is_err());
    }
}
