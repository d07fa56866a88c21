// src/model/calendar.rs

use serde::Serialize;
use std::fmt;

/// Length of the simulated week.
pub const DAYS_PER_WEEK: usize = 7;

/// Day of the simulated week. Day index 0 is always a Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Maps an absolute day index onto the weekly cycle.
    pub fn from_day(day: usize) -> Self {
        Self::ALL[day % DAYS_PER_WEEK]
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Sat | Weekday::Sun)
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// True when `day mod 7` is 5 or 6.
pub fn is_weekend(day: usize) -> bool {
    Weekday::from_day(day).is_weekend()
}

pub fn day_name(day: usize) -> &'static str {
    Weekday::from_day(day).short_name()
}
