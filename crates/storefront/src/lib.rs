pub mod abstract_trait;
pub mod config;
pub mod di;
pub mod domain;
pub mod handler;
pub mod middleware;
pub mod model;
pub mod repository;
pub mod service;
pub mod state;
pub mod utils;

/// Embedded schema migrations, applied on startup and by the test suites.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
