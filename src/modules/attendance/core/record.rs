use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Column headers, in field order, used by the table view and the spreadsheet export.
pub const ATTENDANCE_COLUMNS: [&str; 5] =
    ["Date", "Employee ID", "Employee Name", "Status", "Timestamp"];

/// Sub-second digits kept on a submission timestamp. A spreadsheet datetime cell holds
/// milliseconds, so anything finer would not survive an export.
pub const TIMESTAMP_SUBSEC_DIGITS: u16 = 3;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Remote,
    #[serde(rename = "On Leave")]
    #[strum(serialize = "On Leave")]
    OnLeave,
}

/// One form submission. Never mutated after it is appended to a session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub employee_id: String,
    pub employee_name: String,
    pub status: AttendanceStatus,
    pub timestamp: NaiveDateTime,
}
