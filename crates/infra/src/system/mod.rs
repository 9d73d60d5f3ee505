use chrono::{DateTime, NaiveDate, Utc};
use taskflow_domain::date;

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;

    /// The calendar date of `now` on the fixed-offset civil clock
    fn today(&self) -> NaiveDate {
        date::civil_date(self.now())
    }
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
