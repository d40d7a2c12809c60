use crate::modules::attendance::core::record::AttendanceRecord;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("spreadsheet serialization failed: {0}")]
pub struct SpreadsheetError(pub String);

/// Serializes a full attendance log into spreadsheet bytes.
pub trait AttendanceExporter: Send + Sync {
    fn export(&self, records: &[AttendanceRecord]) -> Result<Vec<u8>, SpreadsheetError>;
}
