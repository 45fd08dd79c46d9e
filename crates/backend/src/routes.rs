use std::sync::Arc;

use axum::{routing::get, Router};
use contracts::domain::a001_discount::aggregate::DiscountFields;
use contracts::domain::a002_tax::aggregate::TaxFields;
use contracts::domain::a003_protein_plan::aggregate::ProteinPlanFields;
use contracts::domain::a004_supplier::aggregate::SupplierFields;
use contracts::domain::a005_ingredient_category::aggregate::IngredientCategoryFields;
use contracts::domain::a006_week::aggregate::WeekFields;
use contracts::shared::logger::EventLogger;
use sea_orm::DatabaseConnection;

use crate::domain::common::{ResourceService, SeedData, ServiceOptions, SqlRecordStore};
use crate::handlers;

/// Справочник `F` по адресу `/api/{collection}`
fn resource<F: SeedData>(
    router: Router,
    conn: &DatabaseConnection,
    logger: &Arc<dyn EventLogger>,
    options: ServiceOptions,
) -> Router {
    let store = Arc::new(SqlRecordStore::<F>::new(conn.clone()));
    let service = ResourceService::new(store, logger.clone(), options);
    let path = format!("/api/{}", F::descriptor().collection_name);
    router.nest(&path, handlers::resource::router(Arc::new(service)))
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(
    conn: DatabaseConnection,
    logger: Arc<dyn EventLogger>,
    options: ServiceOptions,
) -> Router {
    let router = Router::new().route("/health", get(|| async { "ok" }));

    let router = resource::<DiscountFields>(router, &conn, &logger, options);
    let router = resource::<TaxFields>(router, &conn, &logger, options);
    let router = resource::<ProteinPlanFields>(router, &conn, &logger, options);
    let router = resource::<SupplierFields>(router, &conn, &logger, options);
    let router = resource::<IngredientCategoryFields>(router, &conn, &logger, options);
    let router = resource::<WeekFields>(router, &conn, &logger, options);

    // System logs
    let logs = Router::new()
        .route(
            "/",
            get(handlers::logs::list_all)
                .post(handlers::logs::create)
                .delete(handlers::logs::clear_all),
        )
        .with_state(conn);

    router.nest("/api/logs", logs)
}
