use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current point in time.
///
/// All calendar-day computations (e.g. the daily transaction limit) are performed on the UTC date
/// of [`now`](Clock::now).
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// A [`Clock`] backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
