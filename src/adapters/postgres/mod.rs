pub mod car_service;
pub mod maintenance_store;
pub mod status_outbox;
pub mod visit_store;

// パブリックに型を再エクスポート
pub use car_service::CarService as PostgresCarService;
pub use maintenance_store::MaintenanceStore as PostgresMaintenanceStore;
pub use status_outbox::StatusOutbox as PostgresStatusOutbox;
pub use visit_store::VisitStore as PostgresVisitStore;
