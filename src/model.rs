// src/model.rs
//! Course schedule records.
//!
//! Shapes are persisted as JSON under each course name, using the flat field
//! names of the registration page (`day_first`, `time_second`, ...).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Class number of a section.
///
/// Conversion from the page is best-effort: anything that is not an integer
/// is kept verbatim as `Text` rather than rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassNumber {
    Id(i64),
    Text(String),
}

impl ClassNumber {
    /// Sentinel for a section that has not been started yet.
    pub const UNASSIGNED: ClassNumber = ClassNumber::Id(-1);

    /// `Id` only when the number prints back as exactly `text`, so `00123`
    /// and `+5` stay textual and survive export unchanged.
    pub fn from_cell(text: &str) -> Self {
        match text.parse::<i64>() {
            Ok(n) if n.to_string() == text => ClassNumber::Id(n),
            _ => ClassNumber::Text(s!(text)),
        }
    }

    pub fn is_assigned(&self) -> bool {
        *self != Self::UNASSIGNED
    }
}

impl Default for ClassNumber {
    fn default() -> Self {
        Self::UNASSIGNED
    }
}

impl fmt::Display for ClassNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassNumber::Id(n) => write!(f, "{n}"),
            ClassNumber::Text(t) => f.write_str(t),
        }
    }
}

/// One meeting: day, time and room as printed on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Slot {
    pub day: String,
    pub time: String,
    pub room: String,
}

impl Slot {
    pub fn new(day: impl Into<String>, time: impl Into<String>, room: impl Into<String>) -> Self {
        Self { day: day.into(), time: time.into(), room: room.into() }
    }
}

/// First slot always, second slot as a whole or not at all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleRecord", into = "ScheduleRecord")]
pub struct Schedule {
    pub first: Slot,
    pub second: Option<Slot>,
}

impl Schedule {
    pub fn single(first: Slot) -> Self {
        Self { first, second: None }
    }
}

/// Persisted (flat) form of `Schedule`.
#[derive(Clone, Serialize, Deserialize)]
struct ScheduleRecord {
    day_first: String,
    time_first: String,
    room_first: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    day_second: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_second: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    room_second: Option<String>,
}

impl TryFrom<ScheduleRecord> for Schedule {
    type Error = String;

    fn try_from(r: ScheduleRecord) -> Result<Self, Self::Error> {
        let second = match (r.day_second, r.time_second, r.room_second) {
            (Some(day), Some(time), Some(room)) => Some(Slot { day, time, room }),
            (None, None, None) => None,
            _ => return Err(s!("second schedule slot is partially populated")),
        };
        Ok(Schedule {
            first: Slot { day: r.day_first, time: r.time_first, room: r.room_first },
            second,
        })
    }
}

impl From<Schedule> for ScheduleRecord {
    fn from(s: Schedule) -> Self {
        let (day_second, time_second, room_second) = match s.second {
            Some(Slot { day, time, room }) => (Some(day), Some(time), Some(room)),
            None => (None, None, None),
        };
        ScheduleRecord {
            day_first: s.first.day,
            time_first: s.first.time,
            room_first: s.first.room,
            day_second,
            time_second,
            room_second,
        }
    }
}

/// One offered section of a course.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub class_number: ClassNumber,
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prof: Option<String>,
}

impl Section {
    /// Blank section carrying the unassigned sentinel.
    pub fn blank() -> Self {
        Self::default()
    }
}
