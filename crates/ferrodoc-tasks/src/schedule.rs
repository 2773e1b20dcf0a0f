//! Weekly schedules: ordered lists of (weekday, time-of-day) moments.

use std::fmt;
use std::ops::{Add, RangeInclusive};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in week order, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

/// A wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub const NOON: TimeOfDay = TimeOfDay {
        hour: 12,
        minute: 0,
    };

    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }
}

impl FromStr for TimeOfDay {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TaskError::InvalidTime(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let digits = |field: &str| field.bytes().all(|b| b.is_ascii_digit());
        if hour.is_empty()
            || hour.len() > 2
            || minute.len() != 2
            || !digits(hour)
            || !digits(minute)
        {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        TimeOfDay::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TaskError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleMoment {
    pub weekday: Weekday,
    pub time: TimeOfDay,
}

/// Moments in the order they were declared. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule(Vec<ScheduleMoment>);

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single moment: `day` at `time` (`"HH:MM"`).
    pub fn on(day: Weekday, time: &str) -> Result<Self> {
        let time = time.parse()?;
        Ok(Self(vec![ScheduleMoment { weekday: day, time }]))
    }

    /// `day` at 12:00.
    pub fn mid_day(day: Weekday) -> Self {
        Self(vec![ScheduleMoment {
            weekday: day,
            time: TimeOfDay::NOON,
        }])
    }

    /// Every day in the inclusive range at `time`, in week order.
    /// A reversed range yields an empty schedule.
    pub fn range_on(days: RangeInclusive<Weekday>, time: &str) -> Result<Self> {
        let time: TimeOfDay = time.parse()?;
        let moments = Weekday::ALL
            .into_iter()
            .filter(|day| days.contains(day))
            .map(|weekday| ScheduleMoment { weekday, time })
            .collect();
        Ok(Self(moments))
    }

    /// Adds `time` on every weekday already present, once per distinct day
    /// in first-seen order.
    pub fn also_at(mut self, time: &str) -> Result<Self> {
        let time: TimeOfDay = time.parse()?;
        let mut days: Vec<Weekday> = Vec::new();
        for moment in &self.0 {
            if !days.contains(&moment.weekday) {
                days.push(moment.weekday);
            }
        }
        self.0
            .extend(days.into_iter().map(|weekday| ScheduleMoment { weekday, time }));
        Ok(self)
    }

    pub fn join(mut self, other: Schedule) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn moments(&self) -> &[ScheduleMoment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Add for Schedule {
    type Output = Schedule;

    fn add(self, rhs: Schedule) -> Schedule {
        self.join(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment(weekday: Weekday, hour: u8, minute: u8) -> ScheduleMoment {
        ScheduleMoment {
            weekday,
            time: TimeOfDay::new(hour, minute).unwrap(),
        }
    }

    #[test]
    fn test_parse_time() {
        assert_eq!("12:00".parse::<TimeOfDay>().unwrap(), TimeOfDay::NOON);
        assert_eq!("4:05".parse::<TimeOfDay>().unwrap(), TimeOfDay::new(4, 5).unwrap());
        assert_eq!(TimeOfDay::new(4, 5).unwrap().to_string(), "04:05");
    }

    #[test]
    fn test_invalid_times() {
        for input in [
            "", "12", "24:00", "12:60", "12:5", "ab:cd", "123:00", ":30", "+1:00", "12:+5",
            "+9:+9", "-1:00", " 9:00",
        ] {
            assert!(
                matches!(input.parse::<TimeOfDay>(), Err(TaskError::InvalidTime(_))),
                "'{}' should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_join_keeps_order() {
        let s = Schedule::on(Weekday::Monday, "12:00").unwrap()
            + Schedule::on(Weekday::Saturday, "12:00").unwrap();
        assert_eq!(
            s.moments(),
            &[moment(Weekday::Monday, 12, 0), moment(Weekday::Saturday, 12, 0)]
        );
    }

    #[test]
    fn test_also_at_adds_per_distinct_day() {
        let s = Schedule::on(Weekday::Monday, "12:00")
            .and_then(|s| s.also_at("20:00"))
            .and_then(|s| s.also_at("04:00"))
            .unwrap();
        assert_eq!(
            s.moments(),
            &[
                moment(Weekday::Monday, 12, 0),
                moment(Weekday::Monday, 20, 0),
                moment(Weekday::Monday, 4, 0),
            ]
        );
    }

    #[test]
    fn test_range_on() {
        let s = Schedule::range_on(Weekday::Monday..=Weekday::Friday, "12:00").unwrap();
        assert_eq!(s.len(), 5);
        assert_eq!(s.moments()[0].weekday, Weekday::Monday);
        assert_eq!(s.moments()[4].weekday, Weekday::Friday);

        let reversed = Schedule::range_on(Weekday::Friday..=Weekday::Monday, "12:00").unwrap();
        assert!(reversed.is_empty());
    }

    #[test]
    fn test_mid_day() {
        assert_eq!(
            Schedule::mid_day(Weekday::Sunday).moments(),
            &[moment(Weekday::Sunday, 12, 0)]
        );
    }

    #[test]
    fn test_serde_time_as_string() {
        let s = Schedule::mid_day(Weekday::Tuesday);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"[{"weekday":"tuesday","time":"12:00"}]"#);

        let bad = r#"[{"weekday":"tuesday","time":"25:00"}]"#;
        assert!(serde_json::from_str::<Schedule>(bad).is_err());
    }
}
