use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the pool used for subscription lookups. Fails fast at startup
/// when the database is unreachable.
pub async fn init_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
        .map_err(|e| anyhow::anyhow!("could not reach subscriptions database: {e}"))?;

    info!(max_connections = MAX_CONNECTIONS, "subscriptions database pool ready");
    Ok(pool)
}
