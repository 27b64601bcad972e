pub mod analyze;
pub mod config;
pub mod dispatch;
pub mod schema;
