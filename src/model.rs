pub mod api_model;
pub mod coordinate;
pub mod db_model;
pub mod registration;
pub mod route;
pub mod stop;
pub mod vehicle;

pub use coordinate::*;
pub use registration::*;
pub use route::*;
pub use stop::*;
pub use vehicle::*;
