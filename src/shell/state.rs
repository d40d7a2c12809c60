use crate::modules::attendance::adapters::outbound::xlsx_exporter::XlsxAttendanceExporter;
use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::use_cases::export_attendance::handler::ExportAttendanceHandler;
use crate::modules::attendance::use_cases::list_attendance::handler::ListAttendanceHandler;
use crate::modules::attendance::use_cases::session_lifecycle::handler::SessionLifecycleHandler;
use crate::modules::attendance::use_cases::submit_attendance::handler::SubmitAttendanceHandler;
use crate::modules::product_showcase::core::dataset::ProductCatalog;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::session_store::in_memory::InMemorySessionStore;
use std::sync::Arc;

pub type AttendanceStore = InMemorySessionStore<AttendanceRecord>;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionLifecycleHandler<AttendanceStore>>,
    pub submit_handler: Arc<SubmitAttendanceHandler<AttendanceStore>>,
    pub list_handler: Arc<ListAttendanceHandler<AttendanceStore>>,
    pub export_handler: Arc<ExportAttendanceHandler<AttendanceStore, XlsxAttendanceExporter>>,
    pub catalog: Arc<ProductCatalog>,
}

impl AppState {
    pub fn new(store: Arc<AttendanceStore>, clock: Arc<dyn Clock>, catalog: ProductCatalog) -> Self {
        Self {
            sessions: Arc::new(SessionLifecycleHandler::new(store.clone())),
            submit_handler: Arc::new(SubmitAttendanceHandler::new(store.clone(), clock)),
            list_handler: Arc::new(ListAttendanceHandler::new(store.clone())),
            export_handler: Arc::new(ExportAttendanceHandler::new(
                store,
                Arc::new(XlsxAttendanceExporter),
            )),
            catalog: Arc::new(catalog),
        }
    }
}
