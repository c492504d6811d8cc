use crate::reducer::parse_count;

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// An episode length split for editing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationParts {
    pub h: u64,
    pub m: u64,
    pub s: u64,
}

/// Which part of a [`DurationParts`] an input edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationPart {
    Hours,
    Minutes,
    Seconds,
}

/// Splits a total number of seconds into hours, minutes and seconds.
#[must_use]
pub const fn decode(total: u64) -> DurationParts {
    DurationParts {
        h: total / SECONDS_PER_HOUR,
        m: total % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
        s: total % SECONDS_PER_MINUTE,
    }
}

/// Joins the parts back into a total number of seconds.
#[must_use]
pub const fn encode(parts: DurationParts) -> u64 {
    parts
        .h
        .saturating_mul(SECONDS_PER_HOUR)
        .saturating_add(parts.m.saturating_mul(SECONDS_PER_MINUTE))
        .saturating_add(parts.s)
}

/// Applies a raw input to one part. Minutes and seconds outside `[0, 60)`
/// fall back to 0. Hours only need to be non-negative.
#[must_use]
pub fn duration_update(
    parts: DurationParts,
    part: DurationPart,
    raw: &str,
) -> DurationParts {
    let n = parse_count(raw);

    match part {
        DurationPart::Hours => DurationParts { h: n, ..parts },
        DurationPart::Minutes => DurationParts {
            m: below_sixty(n),
            ..parts
        },
        DurationPart::Seconds => DurationParts {
            s: below_sixty(n),
            ..parts
        },
    }
}

const fn below_sixty(n: u64) -> u64 {
    if n < SECONDS_PER_MINUTE { n } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_decode_example() {
        let parts = DurationParts { h: 1, m: 30, s: 15 };

        assert_eq!(encode(parts), 5415);
        assert_eq!(decode(5415), parts);
    }

    #[test]
    fn test_round_trip() {
        for n in (0..10_000).chain([86_399, 86_400, 360_000, 1 << 40]) {
            assert_eq!(encode(decode(n)), n);
        }
    }

    #[test]
    fn test_decode_ranges() {
        for n in (0..20_000).step_by(7) {
            let parts = decode(n);
            assert!(parts.m < 60);
            assert!(parts.s < 60);
        }
    }

    #[test]
    fn test_encode_saturates_out_of_range_parts() {
        let huge_minutes = DurationParts {
            h: 0,
            m: u64::MAX,
            s: 5,
        };
        let huge_hours = DurationParts {
            h: u64::MAX / 2,
            m: 59,
            s: 59,
        };

        assert_eq!(encode(huge_minutes), u64::MAX);
        assert_eq!(encode(huge_hours), u64::MAX);
    }

    #[test]
    fn test_zero() {
        assert_eq!(decode(0), DurationParts::default());
        assert_eq!(encode(DurationParts::default()), 0);
    }

    #[test]
    fn test_duration_update_clamps_minutes_and_seconds() {
        let parts = DurationParts { h: 1, m: 2, s: 3 };

        assert_eq!(
            duration_update(parts, DurationPart::Minutes, "59"),
            DurationParts { h: 1, m: 59, s: 3 }
        );
        assert_eq!(
            duration_update(parts, DurationPart::Minutes, "60"),
            DurationParts { h: 1, m: 0, s: 3 }
        );
        assert_eq!(
            duration_update(parts, DurationPart::Seconds, "-4"),
            DurationParts { h: 1, m: 2, s: 0 }
        );
        assert_eq!(
            duration_update(parts, DurationPart::Seconds, "x"),
            DurationParts { h: 1, m: 2, s: 0 }
        );
    }

    #[test]
    fn test_duration_update_hours_unbounded() {
        let parts = DurationParts::default();

        assert_eq!(duration_update(parts, DurationPart::Hours, "120").h, 120);
        assert_eq!(duration_update(parts, DurationPart::Hours, "-1").h, 0);
    }
}
