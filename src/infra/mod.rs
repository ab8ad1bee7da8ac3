use crate::{adapters::persistence::PostgresPersistence, infra::db::init_pool};

pub mod app;
pub mod config;
pub mod db;
pub mod http_client;
pub mod setup;
pub mod stripe_client;
pub mod stripe_portal_adapter;
pub mod supabase_auth;

pub async fn postgres_persistence(database_url: &str) -> anyhow::Result<PostgresPersistence> {
    Ok(PostgresPersistence::new(init_pool(database_url).await?))
}
