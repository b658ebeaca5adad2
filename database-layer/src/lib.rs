//! Repository layer for Paroki Engine
//!
//! PostgreSQL-backed storage for churches, zones (wilayah), duty positions,
//! mass schedules, service events and per-event usher assignments. The
//! backing store is selected through [`DatabaseConfig`] with an explicit
//! [`DatabaseBackend`] value; callers hold the repository behind the
//! [`ScheduleRepository`] trait for the lifetime of the process.

pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;

pub use config::{build_repository, DatabaseBackend, DatabaseConfig};
pub use connection::DatabasePool;
pub use error::{DatabaseError, DatabaseResult};
pub use models::*;
pub use postgres::PostgresScheduleRepository;
pub use repository::ScheduleRepository;
