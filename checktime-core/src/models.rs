//! Data shapes exchanged with the CheckTime server.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public holiday. `id` is assigned server-side; dates are unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub description: String,
}

/// A one-day deviation from the active work schedule: adjusted check-in and
/// check-out times, or a full day off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayOverride {
    pub date: NaiveDate,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_day_off: bool,
}

/// A date range with its own weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulePeriod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// One weekday's working hours within a period. `day_of_week` follows the
/// server's convention: 0 = Monday through 6 = Sunday. Times are "HH:MM".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day_of_week: u8,
    pub check_in_time: String,
    pub check_out_time: String,
}

fn default_true() -> bool {
    true
}
