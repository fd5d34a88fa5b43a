//! RFC 3339 timestamp parsing into the `{ seconds, nanos }` pair that the
//! canonical vote encoder signs over.

use time::{
    format_description::well_known::Rfc3339,
    OffsetDateTime,
};

/// A point in time represented the way the wire format carries it: signed,
/// unbounded seconds since the Unix epoch, plus a `[0, 1_000_000_000)`
/// nanosecond fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    pub seconds: i128,
    pub nanos: u32,
}

impl Time {
    /// Parses an RFC 3339 timestamp with an optional `.fffffffff` fractional
    /// part of up to 9 digits. A missing fraction parses to `nanos = 0`.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let parsed = OffsetDateTime::parse(s, &Rfc3339).map_err(|_| TimeError(s.to_string()))?;
        Ok(Self {
            seconds: i128::from(parsed.unix_timestamp()),
            nanos: parsed.nanosecond(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to parse `{0}` as an RFC 3339 timestamp")]
pub struct TimeError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_precision_timestamp() {
        let time = Time::parse("2023-07-05T19:02:55.206600022Z").unwrap();
        assert_eq!(time.nanos, 206_600_022);
    }

    #[test]
    fn parses_timestamp_without_fraction() {
        let time = Time::parse("2023-07-05T19:02:55Z").unwrap();
        assert_eq!(time.nanos, 0);
    }

    #[test]
    fn rejects_malformed_timestamp() {
        assert!(Time::parse("not a timestamp").is_err());
    }
}
