//! Explicit backing-store configuration.
//!
//! The backend is a declared enum value, not something inferred from the
//! connection URL; adding a store means adding a variant here and an
//! implementation of [`ScheduleRepository`].

use std::str::FromStr;
use std::sync::Arc;

use crate::connection::DatabasePool;
use crate::error::{DatabaseError, DatabaseResult};
use crate::postgres::PostgresScheduleRepository;
use crate::repository::ScheduleRepository;

/// Supported backing stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
}

impl FromStr for DatabaseBackend {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(DatabaseError::ConfigurationError(format!(
                "Unknown database backend: {other}. Supported: postgres"
            ))),
        }
    }
}

/// Database configuration resolved once at process start.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub backend: DatabaseBackend,
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Read configuration from the environment.
    ///
    /// `DATABASE_URL` is required; `DATABASE_BACKEND` defaults to `postgres`;
    /// `DATABASE_MAX_CONNECTIONS` defaults to 20.
    pub fn from_env() -> DatabaseResult<Self> {
        let backend = std::env::var("DATABASE_BACKEND")
            .unwrap_or_else(|_| "postgres".to_string())
            .parse::<DatabaseBackend>()?;

        let url = std::env::var("DATABASE_URL").map_err(|_| {
            DatabaseError::ConfigurationError("DATABASE_URL must be set".to_string())
        })?;

        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(20);

        Ok(Self {
            backend,
            url,
            max_connections,
        })
    }
}

/// Connect to the configured store and build the repository handle shared for
/// the process lifetime.
pub async fn build_repository(
    config: &DatabaseConfig,
) -> DatabaseResult<Arc<dyn ScheduleRepository>> {
    match config.backend {
        DatabaseBackend::Postgres => {
            let pool = DatabasePool::new(&config.url, config.max_connections).await?;
            Ok(Arc::new(PostgresScheduleRepository::new(pool)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_parses_known_names() {
        assert_eq!(
            "postgres".parse::<DatabaseBackend>().unwrap(),
            DatabaseBackend::Postgres
        );
        assert_eq!(
            "PostgreSQL".parse::<DatabaseBackend>().unwrap(),
            DatabaseBackend::Postgres
        );
    }

    #[test]
    fn backend_rejects_unknown_names() {
        let err = "mysql".parse::<DatabaseBackend>().unwrap_err();
        assert!(matches!(err, DatabaseError::ConfigurationError(_)));
        assert!(err.to_string().contains("mysql"));
    }

    #[test]
    fn backend_rejects_url_schemes() {
        // Selection is by declared name, never by sniffing a connection URL.
        assert!("postgres://localhost/paroki"
            .parse::<DatabaseBackend>()
            .is_err());
    }
}
