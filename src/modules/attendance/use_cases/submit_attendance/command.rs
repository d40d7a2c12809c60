// What the attendance form sends. Fields are taken as-is; empty ids and names are accepted.

use crate::modules::attendance::core::record::AttendanceStatus;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAttendance {
    pub date: NaiveDate,
    pub employee_id: String,
    pub employee_name: String,
    pub status: AttendanceStatus,
}
