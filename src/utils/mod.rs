pub mod error;
pub mod extract;
pub mod id;
pub mod seed;
pub mod validation;
