use chrono::{DateTime, Utc};

/// Time remaining until a match starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Expired,
}

pub const EXPIRED_LABEL: &str = "Match is starting!";

pub fn time_left(target: DateTime<Utc>, now: DateTime<Utc>) -> Countdown {
    let total = (target - now).num_seconds();
    if total <= 0 {
        return Countdown::Expired;
    }
    Countdown::Remaining {
        days: total / 86_400,
        hours: (total / 3_600) % 24,
        minutes: (total / 60) % 60,
        seconds: total % 60,
    }
}

impl Countdown {
    pub fn is_expired(&self) -> bool {
        matches!(self, Countdown::Expired)
    }

    pub fn label(&self) -> String {
        match self {
            Countdown::Remaining {
                days,
                hours,
                minutes,
                seconds,
            } => format!("{}d : {:02}h : {:02}m : {:02}s", days, hours, minutes, seconds),
            Countdown::Expired => EXPIRED_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_breakdown() {
        let now = Utc.with_ymd_and_hms(2025, 2, 10, 12, 0, 0).unwrap();
        let target = now + Duration::days(2) + Duration::hours(3) + Duration::minutes(4) + Duration::seconds(5);
        assert_eq!(
            time_left(target, now),
            Countdown::Remaining {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
        assert_eq!(time_left(target, now).label(), "2d : 03h : 04m : 05s");
    }

    #[test]
    fn test_expired_at_and_after_start() {
        let now = Utc.with_ymd_and_hms(2025, 2, 10, 12, 0, 0).unwrap();
        assert!(time_left(now, now).is_expired());
        assert_eq!(time_left(now - Duration::seconds(1), now).label(), EXPIRED_LABEL);
    }

    #[test]
    fn test_sub_second_remaining_is_expired() {
        let now = Utc.with_ymd_and_hms(2025, 2, 10, 12, 0, 0).unwrap();
        assert!(time_left(now + Duration::milliseconds(400), now).is_expired());
    }
}
