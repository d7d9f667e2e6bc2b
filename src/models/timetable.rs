use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Schedule grouping key. There is no Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Lowercase key used in storage and forms
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
        }
    }

    /// Capitalized name for headings
    pub fn display_name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }

    /// Map a calendar weekday onto a schedule day (`None` on Sunday)
    pub fn from_weekday(weekday: chrono::Weekday) -> Option<Day> {
        use chrono::Weekday;
        match weekday {
            Weekday::Mon => Some(Day::Monday),
            Weekday::Tue => Some(Day::Tuesday),
            Weekday::Wed => Some(Day::Wednesday),
            Weekday::Thu => Some(Day::Thursday),
            Weekday::Fri => Some(Day::Friday),
            Weekday::Sat => Some(Day::Saturday),
            Weekday::Sun => None,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| AppError::InvalidDay(s.to_string()))
    }
}

/// One scheduled period or break within a day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    /// Start time, `HH:MM`
    pub start: String,
    /// End time, `HH:MM`
    pub end: String,
    pub subject: String,
}

impl Period {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            subject: subject.into(),
        }
    }

    pub fn is_break(&self) -> bool {
        self.subject.to_lowercase() == crate::constants::BREAK_SUBJECT
    }
}

/// Row of the `timetable` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TimetableEntry {
    pub id: i64,
    pub username: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
}

impl From<TimetableEntry> for Period {
    fn from(entry: TimetableEntry) -> Self {
        Period {
            start: entry.start_time,
            end: entry.end_time,
            subject: entry.subject,
        }
    }
}

/// A user's periods grouped by day, Monday first
///
/// Within a day periods keep the order they were added in; the store
/// hands them over sorted by start time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekTimetable {
    days: BTreeMap<Day, Vec<Period>>,
}

impl WeekTimetable {
    pub fn push(&mut self, day: Day, period: Period) {
        self.days.entry(day).or_default().push(period);
    }

    /// Periods of one day, empty if the day has none
    pub fn day(&self, day: Day) -> &[Period] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days with at least one period, Monday to Saturday
    pub fn iter(&self) -> impl Iterator<Item = (Day, &[Period])> {
        self.days.iter().map(|(day, periods)| (*day, periods.as_slice()))
    }
}

impl FromIterator<TimetableEntry> for WeekTimetable {
    fn from_iter<I: IntoIterator<Item = TimetableEntry>>(iter: I) -> Self {
        let mut week = WeekTimetable::default();
        for entry in iter {
            match entry.day.parse::<Day>() {
                Ok(day) => week.push(day, entry.into()),
                Err(_) => {
                    tracing::warn!(
                        "Skipping timetable entry {} with unknown day {:?}",
                        entry.id,
                        entry.day
                    );
                }
            }
        }
        week
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, day: &str, start: &str, subject: &str) -> TimetableEntry {
        TimetableEntry {
            id,
            username: "alice".to_string(),
            day: day.to_string(),
            start_time: start.to_string(),
            end_time: "23:59".to_string(),
            subject: subject.to_string(),
        }
    }

    #[test]
    fn test_day_parse() {
        assert_eq!("monday".parse::<Day>().unwrap(), Day::Monday);
        assert_eq!("saturday".parse::<Day>().unwrap(), Day::Saturday);
        assert!(matches!("sunday".parse::<Day>(), Err(AppError::InvalidDay(_))));
        // Keys are lowercase only
        assert!("Monday".parse::<Day>().is_err());
    }

    #[test]
    fn test_day_from_weekday() {
        assert_eq!(Day::from_weekday(chrono::Weekday::Wed), Some(Day::Wednesday));
        assert_eq!(Day::from_weekday(chrono::Weekday::Sun), None);
    }

    #[test]
    fn test_is_break_is_case_insensitive() {
        assert!(Period::new("10:00", "10:15", "Break").is_break());
        assert!(Period::new("10:00", "10:15", "BREAK").is_break());
        assert!(!Period::new("10:00", "10:15", "Lunch Break").is_break());
    }

    #[test]
    fn test_week_groups_by_day_in_weekday_order() {
        let week: WeekTimetable = vec![
            entry(1, "friday", "08:00", "Physics"),
            entry(2, "monday", "09:00", "Math"),
            entry(3, "monday", "10:00", "Chemistry"),
        ]
        .into_iter()
        .collect();

        let days: Vec<Day> = week.iter().map(|(day, _)| day).collect();
        assert_eq!(days, vec![Day::Monday, Day::Friday]);

        let monday: Vec<&str> = week
            .day(Day::Monday)
            .iter()
            .map(|p| p.subject.as_str())
            .collect();
        assert_eq!(monday, vec!["Math", "Chemistry"]);
        assert!(week.day(Day::Tuesday).is_empty());
    }

    #[test]
    fn test_week_skips_unknown_days() {
        let week: WeekTimetable = vec![entry(1, "sunday", "08:00", "Rest")]
            .into_iter()
            .collect();
        assert!(week.is_empty());
    }
}
