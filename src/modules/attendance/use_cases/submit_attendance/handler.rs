use crate::modules::attendance::core::record::{AttendanceRecord, TIMESTAMP_SUBSEC_DIGITS};
use crate::modules::attendance::core::view::AttendanceView;
use crate::modules::attendance::use_cases::submit_attendance::command::SubmitAttendance;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::session_store::{SessionId, SessionStore, SessionStoreError};
use chrono::SubsecRound;
use std::sync::Arc;
use thiserror::Error;

pub const RECORDED_MESSAGE: &str = "Attendance recorded!";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub message: &'static str,
    pub view: AttendanceView,
}

pub struct SubmitAttendanceHandler<TStore>
where
    TStore: SessionStore<AttendanceRecord> + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
}

impl<TStore> SubmitAttendanceHandler<TStore>
where
    TStore: SessionStore<AttendanceRecord> + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Appends one record stamped with the current instant, then re-renders the whole log.
    pub async fn handle(
        &self,
        session_id: SessionId,
        command: SubmitAttendance,
    ) -> Result<SubmitOutcome, ApplicationError> {
        let record = AttendanceRecord {
            date: command.date,
            employee_id: command.employee_id,
            employee_name: command.employee_name,
            status: command.status,
            timestamp: self.clock.now().trunc_subsecs(TIMESTAMP_SUBSEC_DIGITS),
        };
        let records = self.store.append(session_id, record).await?;
        tracing::info!(%session_id, count = records.len(), "attendance recorded");

        Ok(SubmitOutcome {
            message: RECORDED_MESSAGE,
            view: AttendanceView::render(session_id, records),
        })
    }
}
