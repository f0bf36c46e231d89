pub mod config;
pub mod external;
pub mod log;
