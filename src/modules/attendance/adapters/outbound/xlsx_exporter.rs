// Spreadsheet adapter for the attendance export port.
//
// Purpose
// - Write the full log as a single "Attendance" sheet: header row, then one row per record.
//
// Responsibilities
// - Dates become Excel date cells, timestamps Excel datetime cells, everything else strings,
//   so a reader gets back the values that were submitted.
// - No index column.

use crate::modules::attendance::core::record::{ATTENDANCE_COLUMNS, AttendanceRecord};
use crate::modules::attendance::use_cases::export_attendance::exporter_port::{
    AttendanceExporter, SpreadsheetError,
};
use rust_xlsxwriter::{Format, FormatBorder, Workbook, XlsxError};

pub const SHEET_NAME: &str = "Attendance";

const DATE_FORMAT: &str = "yyyy-mm-dd";
const TIMESTAMP_FORMAT: &str = "yyyy-mm-dd hh:mm:ss.000";

#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxAttendanceExporter;

impl XlsxAttendanceExporter {
    fn write_workbook(&self, records: &[AttendanceRecord]) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();

        let header = Format::new().set_bold().set_border(FormatBorder::Thin);
        let date = Format::new().set_num_format(DATE_FORMAT);
        let timestamp = Format::new().set_num_format(TIMESTAMP_FORMAT);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, title) in ATTENDANCE_COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header)?;
        }
        worksheet.set_column_width(0, 12)?;
        worksheet.set_column_width(1, 14)?;
        worksheet.set_column_width(2, 24)?;
        worksheet.set_column_width(3, 10)?;
        worksheet.set_column_width(4, 24)?;

        for (index, record) in records.iter().enumerate() {
            let row = index as u32 + 1;
            worksheet.write_date_with_format(row, 0, &record.date, &date)?;
            worksheet.write_string(row, 1, record.employee_id.as_str())?;
            worksheet.write_string(row, 2, record.employee_name.as_str())?;
            worksheet.write_string(row, 3, record.status.as_ref())?;
            worksheet.write_datetime_with_format(row, 4, &record.timestamp, &timestamp)?;
        }

        workbook.save_to_buffer()
    }
}

impl AttendanceExporter for XlsxAttendanceExporter {
    fn export(&self, records: &[AttendanceRecord]) -> Result<Vec<u8>, SpreadsheetError> {
        self.write_workbook(records)
            .map_err(|e| SpreadsheetError(e.to_string()))
    }
}
