//! Integration test for a full comparison editor session.
//!
//! Walks the editor lifecycle end to end against the in-memory store:
//! open (seeded), edit, save, reopen, reorder, save again, and the
//! failed-save path that must leave the local grid untouched.

use std::sync::Arc;

use carebridge_core::adapters::memory::InMemoryComparisonStore;
use carebridge_core::application::handlers::comparison::{
    LoadComparisonTableHandler, SaveComparisonTableHandler,
};
use carebridge_core::domain::comparison::{CellValue, ComparisonTable, FeatureRow};
use carebridge_core::domain::foundation::PartnerId;

fn partner() -> PartnerId {
    PartnerId::new("hosp-apex").unwrap()
}

#[tokio::test]
async fn editor_session_edit_save_reload() {
    let store = Arc::new(InMemoryComparisonStore::new());
    let load = LoadComparisonTableHandler::new(store.clone());
    let save = SaveComparisonTableHandler::new(store.clone());

    // First open: nothing saved yet, the seed populates the editor.
    let mut table = load.handle(&partner()).await.unwrap();
    assert_eq!(table, ComparisonTable::seeded());

    // The partner sells a corporate plan; mark the new column.
    table.add_plan("Corporate").unwrap();
    assert!(table.is_aligned());
    let corporate = table.plan_count() - 1;
    for row in 0..table.feature_count() {
        table.set_cell(row, corporate, CellValue::Included);
    }
    table.add_feature("Dental Cover").unwrap();
    table.set_cell(4, corporate, CellValue::Text("on request".to_string()));

    save.handle(&partner(), &table).await.unwrap();

    // Reopening the editor shows the saved grid, not the seed.
    let reloaded = load.handle(&partner()).await.unwrap();
    assert_eq!(reloaded, table);

    // A different partner still starts from the seed.
    let other = load
        .handle(&PartnerId::new("hosp-other").unwrap())
        .await
        .unwrap();
    assert_eq!(other, ComparisonTable::seeded());
}

#[tokio::test]
async fn editor_session_reorder_persists() {
    let store = Arc::new(InMemoryComparisonStore::new());
    let load = LoadComparisonTableHandler::new(store.clone());
    let save = SaveComparisonTableHandler::new(store.clone());

    let mut table = load.handle(&partner()).await.unwrap();
    let mut order: Vec<_> = table.rows().iter().map(FeatureRow::id).collect();
    order.rotate_left(1);

    table.reorder(&order).unwrap();
    save.handle(&partner(), &table).await.unwrap();

    let reloaded = load.handle(&partner()).await.unwrap();
    let reloaded_order: Vec<_> = reloaded.rows().iter().map(FeatureRow::id).collect();
    assert_eq!(reloaded_order, order);
}

#[tokio::test]
async fn failed_save_keeps_local_grid_for_retry() {
    let rejecting = Arc::new(InMemoryComparisonStore::rejecting_saves());
    let save = SaveComparisonTableHandler::new(rejecting.clone());

    let mut table = ComparisonTable::seeded();
    table.add_plan("Corporate").unwrap();
    let before = table.clone();

    let err = save.handle(&partner(), &table).await.unwrap_err();
    assert!(!err.display_message().is_empty());

    // Local state is the source of truth; nothing rolled back.
    assert_eq!(table, before);
    assert_eq!(rejecting.saved_count(), 0);

    // Retrying against a healthy store succeeds with the same grid.
    let healthy = Arc::new(InMemoryComparisonStore::new());
    SaveComparisonTableHandler::new(healthy.clone())
        .handle(&partner(), &table)
        .await
        .unwrap();
    assert_eq!(healthy.saved_count(), 1);
}
