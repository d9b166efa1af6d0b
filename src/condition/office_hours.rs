//! The office-hours window used by the cadence condition

use chrono::{DateTime, Local, NaiveTime};

use crate::listener::BuildListener;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fixed local-time window a build must fall strictly inside.
///
/// Both boundaries are exclusive: an evaluation at exactly the start or
/// end instant is outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfficeHours {
    start: NaiveTime,
    end: NaiveTime,
}

impl Default for OfficeHours {
    /// The standard window: strictly between 08:59:59 and 17:30:00.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(8, 59, 59).expect("window start is a valid time"),
            end: NaiveTime::from_hms_opt(17, 30, 0).expect("window end is a valid time"),
        }
    }
}

impl OfficeHours {
    /// Whether `now` lies strictly inside the window on its own calendar
    /// day, in the evaluator's local time zone.
    ///
    /// Writes one line naming the window start, the current time, and the
    /// window end to `listener` before deciding. The boundary timestamps
    /// are built from `now`'s date plus the fixed time components; `now`
    /// itself is never mutated.
    pub fn contains(&self, now: DateTime<Local>, listener: &dyn BuildListener) -> bool {
        let date = now.date_naive();
        let start = date.and_time(self.start);
        let end = date.and_time(self.end);
        let current = now.naive_local();
        listener.info(&format!(
            "Office hours: start {}, now {}, end {}",
            start.format(TIMESTAMP_FORMAT),
            current.format(TIMESTAMP_FORMAT),
            end.format(TIMESTAMP_FORMAT)
        ));
        start < current && current < end
    }
}
