// Rendered state of one session's attendance log.
//
// Responsibilities
// - Show the informational message instead of a table while the log is empty.
// - Offer the export link only once at least one record exists.

use crate::modules::attendance::core::record::{ATTENDANCE_COLUMNS, AttendanceRecord};
use crate::shared::infrastructure::session_store::SessionId;
use serde::Serialize;

pub const NO_RECORDS_MESSAGE: &str = "No attendance records yet. Please submit the form above.";
pub const EXPORT_FILE_NAME: &str = "employee_attendance.xlsx";
pub const EXPORT_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportLink {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttendanceView {
    Empty {
        message: &'static str,
    },
    Records {
        count: usize,
        columns: [&'static str; 5],
        records: Vec<AttendanceRecord>,
        export: ExportLink,
    },
}

impl AttendanceView {
    pub fn render(session_id: SessionId, records: Vec<AttendanceRecord>) -> Self {
        if records.is_empty() {
            return AttendanceView::Empty {
                message: NO_RECORDS_MESSAGE,
            };
        }
        AttendanceView::Records {
            count: records.len(),
            columns: ATTENDANCE_COLUMNS,
            records,
            export: ExportLink {
                file_name: EXPORT_FILE_NAME,
                mime_type: EXPORT_MIME_TYPE,
                href: format!("/sessions/{session_id}/attendance/export"),
            },
        }
    }

    pub fn export_available(&self) -> bool {
        matches!(self, AttendanceView::Records { .. })
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        match self {
            AttendanceView::Empty { .. } => &[],
            AttendanceView::Records { records, .. } => records,
        }
    }
}
