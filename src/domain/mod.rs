pub mod car;
pub mod commands;
pub mod errors;
pub mod events;
pub mod maintenance;
pub mod value_objects;
pub mod visit;

pub use car::*;
pub use errors::*;
pub use events::*;
pub use maintenance::*;
pub use value_objects::*;
