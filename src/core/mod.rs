pub mod catalog;
pub mod errors;
pub mod services;
