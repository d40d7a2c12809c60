use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::core::view::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
use crate::modules::attendance::use_cases::export_attendance::exporter_port::{
    AttendanceExporter, SpreadsheetError,
};
use crate::shared::infrastructure::session_store::{SessionId, SessionStore, SessionStoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("no attendance records to export")]
    NoRecords,

    #[error(transparent)]
    Spreadsheet(#[from] SpreadsheetError),

    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

pub struct ExportAttendanceHandler<TStore, TExporter>
where
    TStore: SessionStore<AttendanceRecord> + 'static,
    TExporter: AttendanceExporter + 'static,
{
    store: Arc<TStore>,
    exporter: Arc<TExporter>,
}

impl<TStore, TExporter> ExportAttendanceHandler<TStore, TExporter>
where
    TStore: SessionStore<AttendanceRecord> + 'static,
    TExporter: AttendanceExporter + 'static,
{
    pub fn new(store: Arc<TStore>, exporter: Arc<TExporter>) -> Self {
        Self { store, exporter }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<ExportedFile, ExportError> {
        let records = self.store.list_all(session_id).await?;
        if records.is_empty() {
            return Err(ExportError::NoRecords);
        }

        let bytes = self.exporter.export(&records).inspect_err(|e| {
            tracing::error!(error = %e, %session_id, "attendance export failed");
        })?;
        tracing::info!(%session_id, rows = records.len(), bytes = bytes.len(), "attendance exported");

        Ok(ExportedFile {
            file_name: EXPORT_FILE_NAME,
            mime_type: EXPORT_MIME_TYPE,
            bytes,
        })
    }
}
