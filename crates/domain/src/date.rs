use chrono::prelude::*;
use std::str::FromStr;
use thiserror::Error;

/// All civil-time math in the engine is pinned to this single offset
/// (UTC+08:00), regardless of the host timezone.
pub const FIXED_OFFSET_HOURS: i32 = 8;

pub fn fixed_offset() -> FixedOffset {
    FixedOffset::east_opt(FIXED_OFFSET_HOURS * 3600).expect("+08:00 is a valid offset")
}

/// The given instant expressed on the fixed-offset civil clock.
pub fn civil_datetime(instant: DateTime<Utc>) -> DateTime<FixedOffset> {
    instant.with_timezone(&fixed_offset())
}

/// Calendar date of the given instant in the fixed offset.
pub fn civil_date(instant: DateTime<Utc>) -> NaiveDate {
    civil_datetime(instant).date_naive()
}

/// Minutes elapsed since civil midnight, in `0..1440`.
pub fn minute_of_day(instant: DateTime<Utc>) -> u32 {
    let civil = civil_datetime(instant);
    civil.hour() * 60 + civil.minute()
}

/// Civil wall clock formatted as `HH:MM`.
pub fn format_civil_hhmm(instant: DateTime<Utc>) -> String {
    civil_datetime(instant).format("%H:%M").to_string()
}

/// A wall-clock time of day without a date, parsed from `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemindTime {
    pub hour: u32,
    pub minute: u32,
}

impl RemindTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub fn total_minutes(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

#[derive(Error, Debug)]
pub enum InvalidRemindTimeError {
    #[error("Remind time: {0} is malformed, expected wall clock `HH:MM`")]
    Malformed(String),
}

impl FromStr for RemindTime {
    type Err = InvalidRemindTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidRemindTimeError::Malformed(s.to_string());

        let parts = s.split(':').collect::<Vec<_>>();
        // A trailing seconds segment is tolerated, some clients store `HH:MM:SS`.
        if parts.len() != 2 && parts.len() != 3 {
            return Err(malformed());
        }
        let hour = parts[0].parse::<u32>().map_err(|_| malformed())?;
        let minute = parts[1].parse::<u32>().map_err(|_| malformed())?;
        if hour > 23 || minute > 59 {
            return Err(malformed());
        }

        Ok(Self { hour, minute })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_remind_times() {
        let valid_times = vec![
            ("09:00", 9, 0),
            ("9:5", 9, 5),
            ("00:00", 0, 0),
            ("23:59", 23, 59),
            ("08:30:00", 8, 30),
        ];

        for (time, hour, minute) in valid_times {
            let parsed = time.parse::<RemindTime>().expect("Valid remind time");
            assert_eq!(parsed, RemindTime::new(hour, minute));
        }
    }

    #[test]
    fn it_rejects_invalid_remind_times() {
        let invalid_times = vec!["", "9", "24:00", "09:60", "9am", "09-30", "ab:cd", "1:2:3:4"];

        for time in invalid_times {
            assert!(time.parse::<RemindTime>().is_err());
        }
    }

    #[test]
    fn it_computes_total_minutes() {
        assert_eq!(RemindTime::new(0, 0).total_minutes(), 0);
        assert_eq!(RemindTime::new(9, 0).total_minutes(), 540);
        assert_eq!(RemindTime::new(23, 59).total_minutes(), 1439);
    }

    #[test]
    fn it_converts_instants_to_the_fixed_civil_clock() {
        // 00:30 UTC is 08:30 on the +08:00 clock, same calendar day
        let instant = Utc.with_ymd_and_hms(2025, 1, 10, 0, 30, 0).unwrap();
        assert_eq!(
            civil_date(instant),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
        );
        assert_eq!(minute_of_day(instant), 8 * 60 + 30);
        assert_eq!(format_civil_hhmm(instant), "08:30");
    }

    #[test]
    fn it_rolls_the_civil_date_over_at_civil_midnight() {
        // 20:00 UTC on the 9th is 04:00 on the 10th in the fixed offset
        let instant = Utc.with_ymd_and_hms(2025, 1, 9, 20, 0, 0).unwrap();
        assert_eq!(
            civil_date(instant),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
        );
        assert_eq!(minute_of_day(instant), 4 * 60);
    }
}
