use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::core::view::AttendanceView;
use crate::shared::infrastructure::session_store::SessionId;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlAttendanceRecord {
    pub date: String,
    pub employee_id: String,
    pub employee_name: String,
    pub status: String,
    pub timestamp: String,
}

impl From<AttendanceRecord> for GqlAttendanceRecord {
    fn from(r: AttendanceRecord) -> Self {
        Self {
            date: r.date.to_string(),
            employee_id: r.employee_id,
            employee_name: r.employee_name,
            status: r.status.to_string(),
            timestamp: r.timestamp.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlAttendanceView {
    pub count: u64,
    pub message: Option<String>,
    pub export_href: Option<String>,
    pub records: Vec<GqlAttendanceRecord>,
}

impl From<AttendanceView> for GqlAttendanceView {
    fn from(view: AttendanceView) -> Self {
        match view {
            AttendanceView::Empty { message } => Self {
                count: 0,
                message: Some(message.to_string()),
                export_href: None,
                records: Vec::new(),
            },
            AttendanceView::Records {
                count,
                records,
                export,
                ..
            } => Self {
                count: u64::try_from(count).unwrap_or(u64::MAX),
                message: None,
                export_href: Some(export.href),
                records: records.into_iter().map(Into::into).collect(),
            },
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn attendance(&self, context: &Context<'_>, session_id: ID) -> GqlResult<GqlAttendanceView> {
        let state = context.data_unchecked::<AppState>();
        let session_id = session_id
            .parse::<SessionId>()
            .map_err(|_| async_graphql::Error::new("malformed session id"))?;
        let view = state.list_handler.handle(session_id).await?;
        Ok(view.into())
    }
}
