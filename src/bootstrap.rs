use std::sync::Arc;
use thiserror::Error;

use crate::adapters::mock::{
    CarService as MockCarService, MaintenanceStore as MockMaintenanceStore,
    NotificationService as MockNotificationService,
    VehicleStatusPublisher as MockVehicleStatusPublisher, VisitStore as MockVisitStore,
};
use crate::adapters::postgres::{
    PostgresCarService, PostgresMaintenanceStore, PostgresStatusOutbox, PostgresVisitStore,
};
use crate::application::visit::ServiceDependencies;
use crate::config::{AppConfig, StorageBackend};

/// 起動時のエラー
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// 設定に応じてアダプターを組み立てる
///
/// 通知配信は外部サービスの責務のため、どの保存先でもログ出力のみ行う。
pub async fn build_dependencies(
    config: &AppConfig,
) -> Result<ServiceDependencies, BootstrapError> {
    match config.storage {
        StorageBackend::Postgres => postgres_dependencies(config).await,
        StorageBackend::Memory => Ok(memory_dependencies(config)),
    }
}

/// PostgreSQLのアダプター一式（マイグレーション適用済み）
pub async fn postgres_dependencies(
    config: &AppConfig,
) -> Result<ServiceDependencies, BootstrapError> {
    tracing::info!("Database URL: {}", config.redacted_database_url());

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(ServiceDependencies {
        visit_store: Arc::new(PostgresVisitStore::new(pool.clone())),
        maintenance_store: Arc::new(PostgresMaintenanceStore::new(pool.clone())),
        car_service: Arc::new(PostgresCarService::new(pool.clone())),
        notification_service: Arc::new(MockNotificationService::new()),
        status_publisher: Arc::new(PostgresStatusOutbox::new(pool)),
    })
}

/// インメモリのアダプター一式
///
/// 車両と整備種別は設定のシードから登録する。再起動で予約は消える。
pub fn memory_dependencies(config: &AppConfig) -> ServiceDependencies {
    tracing::warn!("Using in-memory storage; data is lost on restart");

    let car_service = MockCarService::new();
    for car in &config.seed_cars {
        car_service.insert_car(car.clone());
    }

    let maintenance_store = MockMaintenanceStore::new();
    for name in &config.seed_maintenance_types {
        maintenance_store.add_maintenance_type(name);
    }

    tracing::info!(
        cars = config.seed_cars.len(),
        maintenance_types = config.seed_maintenance_types.len(),
        "seeded in-memory reference data"
    );

    ServiceDependencies {
        visit_store: Arc::new(MockVisitStore::new()),
        maintenance_store: Arc::new(maintenance_store),
        car_service: Arc::new(car_service),
        notification_service: Arc::new(MockNotificationService::new()),
        status_publisher: Arc::new(MockVehicleStatusPublisher::new()),
    }
}
