use sqlx::PgPool;

use crate::app_error::AppError;

pub mod subscription;

/// Read-only access to the subscriptions store.
#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound,
            sqlx::Error::PoolTimedOut => {
                tracing::error!("subscriptions pool exhausted");
                AppError::Database("connection pool timed out".into())
            }
            other => {
                tracing::error!(error = ?other, "subscription query failed");
                AppError::Database("subscription query failed".into())
            }
        }
    }
}
