// Shared test fixture for the SubmitAttendance command.
// The canonical submission lives in json/submit_attendance.json.

use crate::modules::attendance::core::record::{AttendanceRecord, AttendanceStatus};
use crate::modules::attendance::use_cases::submit_attendance::command::SubmitAttendance;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAttendanceDto {
    pub date: NaiveDate,
    pub employee_id: String,
    pub employee_name: String,
    pub status: AttendanceStatus,
}

pub struct SubmitAttendanceBuilder {
    inner: SubmitAttendance,
}

impl Default for SubmitAttendanceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitAttendanceBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/submit_attendance.json")
                .unwrap();
        let dto: SubmitAttendanceDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: SubmitAttendance {
                date: dto.date,
                employee_id: dto.employee_id,
                employee_name: dto.employee_name,
                status: dto.status,
            },
        }
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn employee_name(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_name = v.into();
        self
    }

    pub fn status(mut self, v: AttendanceStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> SubmitAttendance {
        self.inner
    }
}

/// 2024-01-10 09:30:00.
pub fn fixed_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 10)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

pub fn make_attendance_record() -> AttendanceRecord {
    let command = SubmitAttendanceBuilder::new().build();
    AttendanceRecord {
        date: command.date,
        employee_id: command.employee_id,
        employee_name: command.employee_name,
        status: command.status,
        timestamp: fixed_instant(),
    }
}

#[cfg(test)]
mod submit_attendance_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = SubmitAttendanceBuilder::default().build();
        assert_eq!(built.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(built.employee_id, "E1");
        assert_eq!(built.employee_name, "Alice");
        assert_eq!(built.status, AttendanceStatus::Present);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = SubmitAttendanceBuilder::new()
            .date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
            .employee_id("E9")
            .employee_name("Bob")
            .status(AttendanceStatus::Absent)
            .build();

        assert_eq!(custom.date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(custom.employee_id, "E9");
        assert_eq!(custom.employee_name, "Bob");
        assert_eq!(custom.status, AttendanceStatus::Absent);
    }
}
