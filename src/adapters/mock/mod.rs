pub mod car_service;
pub mod maintenance_store;
pub mod notification_service;
pub mod vehicle_status_publisher;
pub mod visit_store;

#[allow(unused_imports)]
pub use car_service::CarService;
#[allow(unused_imports)]
pub use maintenance_store::MaintenanceStore;
#[allow(unused_imports)]
pub use notification_service::NotificationService;
#[allow(unused_imports)]
pub use vehicle_status_publisher::VehicleStatusPublisher;
#[allow(unused_imports)]
pub use visit_store::VisitStore;
