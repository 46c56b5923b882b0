//! Rest-day set supplied by the user.

use std::fmt;

use jiff::civil::Weekday;

use crate::error::{EngineError, Result};

/// The set of weekdays a learner has opted out of scheduling.
///
/// Membership is interpreted against the plan's local calendar dates; no
/// timezone shifting is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestDays {
    // Indexed by Monday-zero weekday offset.
    days: [bool; 7],
}

impl RestDays {
    /// Build a rest-day set from user-supplied weekday labels.
    ///
    /// Accepts English weekday names and their three-letter abbreviations,
    /// case-insensitively ("Mon", "monday", "WED"). Unknown labels are
    /// rejected as invalid input.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        let mut days = [false; 7];
        for label in labels {
            let weekday = parse_weekday(label.as_ref()).ok_or_else(|| {
                EngineError::invalid_input(
                    "rest_days",
                    format!(
                        "Unknown weekday label: '{}'. Use Mon..Sun or full names",
                        label.as_ref()
                    ),
                )
            })?;
            days[weekday.to_monday_zero_offset() as usize] = true;
        }
        Ok(Self { days })
    }

    /// Whether the given weekday is a rest day.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.days[weekday.to_monday_zero_offset() as usize]
    }

    /// True when no weekday is excluded.
    pub fn is_empty(&self) -> bool {
        !self.days.iter().any(|d| *d)
    }

    /// Full-name labels of the excluded weekdays, Monday first.
    pub fn labels(&self) -> Vec<&'static str> {
        WEEKDAYS
            .iter()
            .filter(|w| self.contains(**w))
            .map(|w| weekday_name(*w))
            .collect()
    }
}

impl fmt::Display for RestDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&self.labels().join(", "))
        }
    }
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// Full English name for a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
        Weekday::Sunday => "Sunday",
    }
}

fn parse_weekday(label: &str) -> Option<Weekday> {
    match label.trim().to_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Monday),
        "tue" | "tues" | "tuesday" => Some(Weekday::Tuesday),
        "wed" | "wednesday" => Some(Weekday::Wednesday),
        "thu" | "thur" | "thurs" | "thursday" => Some(Weekday::Thursday),
        "fri" | "friday" => Some(Weekday::Friday),
        "sat" | "saturday" => Some(Weekday::Saturday),
        "sun" | "sunday" => Some(Weekday::Sunday),
        _ => None,
    }
}
