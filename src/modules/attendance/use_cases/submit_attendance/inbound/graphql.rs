use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::{Local, NaiveDate};

use crate::modules::attendance::core::record::AttendanceStatus;
use crate::modules::attendance::use_cases::list_attendance::inbound::graphql::GqlAttendanceView;
use crate::modules::attendance::use_cases::submit_attendance::command::SubmitAttendance;
use crate::shared::infrastructure::session_store::SessionId;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSubmitOutcome {
    pub message: String,
    pub view: GqlAttendanceView,
}

#[derive(Default)]
pub struct SubmitAttendanceMutation;

#[Object]
impl SubmitAttendanceMutation {
    async fn submit_attendance(
        &self,
        context: &Context<'_>,
        session_id: ID,
        date: Option<String>,
        employee_id: String,
        employee_name: String,
        status: String,
    ) -> GqlResult<GqlSubmitOutcome> {
        let state = context.data_unchecked::<AppState>();
        let session_id = session_id
            .parse::<SessionId>()
            .map_err(|_| async_graphql::Error::new("malformed session id"))?;
        let date = match date {
            Some(raw) => raw
                .parse::<NaiveDate>()
                .map_err(|e| async_graphql::Error::new(format!("invalid date: {e}")))?,
            None => Local::now().date_naive(),
        };
        let status = status
            .parse::<AttendanceStatus>()
            .map_err(|_| async_graphql::Error::new(format!("unknown status: {status}")))?;

        let command = SubmitAttendance {
            date,
            employee_id,
            employee_name,
            status,
        };
        let outcome = state
            .submit_handler
            .handle(session_id, command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(GqlSubmitOutcome {
            message: outcome.message.to_string(),
            view: outcome.view.into(),
        })
    }
}
