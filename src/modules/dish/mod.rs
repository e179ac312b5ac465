pub mod repository;
pub mod validation;

mod routes;

pub use routes::get_router;
