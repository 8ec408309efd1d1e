//! Logbook output types and the fixed action-label vocabulary.
//!
//! Serialized field names pin the legacy chart API: each day carries its
//! entry list under `logbook` and the sealed summaries under the
//! `timeSpentIn*` keys.

use serde::{Deserialize, Serialize};

// Action labels -------------------------------------------------------------
pub const ACTION_PRE_TRIP: &str = "Pre-trip";
pub const ACTION_PICKUP: &str = "Pickup";
pub const ACTION_DROP_OFF: &str = "Drop-off";
pub const ACTION_REFUEL: &str = "Refueling";
pub const ACTION_BREAK: &str = "30-minute break";
pub const ACTION_SLEEPER_RESET: &str = "10-hour Reset";
pub const ACTION_SLEEPER_RESET_PART_1: &str = "10-hour Reset (Part 1)";
pub const ACTION_SLEEPER_RESET_PART_2: &str = "10-hour Reset (Part 2)";

/// Duty status drawn on one chart row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DutyStatus {
    OffDuty,
    OnDuty,
    Driving,
    Sleeper,
}

impl DutyStatus {
    /// Wire/chart name of the status row.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OffDuty => "off-duty",
            Self::OnDuty => "on-duty",
            Self::Driving => "driving",
            Self::Sleeper => "sleeper",
        }
    }
}

/// One timestamped duty-status event.
///
/// Entries are events, not pre-filled intervals: consecutive entries on the
/// same day define the drawn interval. `action` is omitted from the wire when
/// the event carries no label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Clock position in [0, 24].
    pub hour: f64,
    #[serde(rename = "row")]
    pub status: DutyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl LogEntry {
    #[must_use]
    pub fn new(hour: f64, status: DutyStatus, action: Option<&str>) -> Self {
        Self {
            hour,
            status,
            action: action.map(str::to_owned),
        }
    }
}

/// One calendar day of the logbook: ordered entries plus summaries sealed
/// once at day close.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayLog {
    #[serde(rename = "logbook")]
    pub entries: Vec<LogEntry>,
    /// Minutes of required driving already elapsed when this day opened.
    #[serde(rename = "totalTimeTraveled", default)]
    pub total_time_traveled_mins: f64,
    #[serde(rename = "timeSpentInOffDuty", default)]
    pub off_duty_hrs: f64,
    #[serde(rename = "timeSpentInOnDuty", default)]
    pub on_duty_hrs: f64,
    #[serde(rename = "timeSpentInDriving", default)]
    pub driving_hrs: f64,
    #[serde(rename = "timeSpentInSleeperBerth", default)]
    pub sleeper_hrs: f64,
}

impl DayLog {
    /// Open a fresh day with the driving minutes elapsed so far.
    #[must_use]
    pub fn open(total_time_traveled_mins: f64) -> Self {
        Self {
            total_time_traveled_mins,
            ..Self::default()
        }
    }

    /// Sum of the four sealed summaries.
    #[must_use]
    pub fn summary_total(&self) -> f64 {
        self.off_duty_hrs + self.on_duty_hrs + self.driving_hrs + self.sleeper_hrs
    }
}
