use crate::modules::product_showcase::core::dataset::{DEFAULT_SEED, ProductCatalog};
use crate::shared::core::clock::FixedClock;
use crate::shell::state::{AppState, AttendanceStore};
use crate::tests::fixtures::commands::submit_attendance::fixed_instant;
use chrono::NaiveDate;
use std::sync::Arc;

pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
}

pub fn make_test_state() -> AppState {
    AppState::new(
        Arc::new(AttendanceStore::new()),
        Arc::new(FixedClock(fixed_instant())),
        ProductCatalog::generate(DEFAULT_SEED, test_today()),
    )
}

pub fn make_offline_state() -> AppState {
    let mut store = AttendanceStore::new();
    store.toggle_offline();
    AppState::new(
        Arc::new(store),
        Arc::new(FixedClock(fixed_instant())),
        ProductCatalog::generate(DEFAULT_SEED, test_today()),
    )
}
