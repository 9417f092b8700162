#[allow(unused_imports)]
pub mod car_service;
#[allow(unused_imports)]
pub mod maintenance_store;
#[allow(unused_imports)]
pub mod notification_service;
#[allow(unused_imports)]
pub mod vehicle_status_publisher;
#[allow(unused_imports)]
pub mod visit_store;

#[allow(unused_imports)]
pub use car_service::*;
#[allow(unused_imports)]
pub use maintenance_store::*;
#[allow(unused_imports)]
pub use notification_service::*;
#[allow(unused_imports)]
pub use vehicle_status_publisher::*;
#[allow(unused_imports)]
pub use visit_store::*;
