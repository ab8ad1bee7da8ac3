use std::net::{Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

use crate::domain::entities::entitlement::{DEFAULT_FALLBACK_PATH, DEFAULT_UPGRADE_PATH};
use crate::infra::stripe_client::STRIPE_API_BASE;

pub struct AppConfig {
    pub stripe_secret_key: SecretString,
    /// Overridable so the service can run against stripe-mock locally.
    pub stripe_api_base: String,
    pub supabase_url: Url,
    pub supabase_anon_key: SecretString,
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Empty means any origin (`*`).
    pub cors_origins: Vec<HeaderValue>,
    /// Shown on the help page when set.
    pub contact_phone: Option<String>,
    /// Where the premium route guard sends callers without an active subscription.
    pub premium_fallback_path: String,
    pub upgrade_path: String,
    pub enable_debug_routes: bool,
    /// JSON log file, in addition to console output.
    pub log_json_file: Option<String>,
}

impl AppConfig {
    /// Reads configuration from the environment.
    ///
    /// Missing required variables panic inside `get_env`; a malformed
    /// `CORS_ORIGIN` is returned as an error.
    pub fn from_env() -> anyhow::Result<Self> {
        let stripe_secret_key = SecretString::new(get_env::<String>("STRIPE_SECRET_KEY").into());
        let stripe_api_base: String =
            get_env_default("STRIPE_API_BASE", STRIPE_API_BASE.to_string());
        let supabase_url: Url = get_env("SUPABASE_URL");
        let supabase_anon_key = SecretString::new(get_env::<String>("SUPABASE_ANON_KEY").into());
        let database_url: String = get_env("DATABASE_URL");

        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            SocketAddr::from((Ipv4Addr::LOCALHOST, 3001)),
        );
        let cors_origins = parse_cors_origins(&get_env_default(
            "CORS_ORIGIN",
            String::from("*"),
        ))?;

        let contact_phone = std::env::var("CONTACT_PHONE")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let premium_fallback_path: String =
            get_env_default("PREMIUM_FALLBACK_PATH", DEFAULT_FALLBACK_PATH.to_string());
        let upgrade_path: String = get_env_default("UPGRADE_PATH", DEFAULT_UPGRADE_PATH.to_string());
        // Exposes raw billing identifiers.
        let enable_debug_routes: bool = get_env_default("ENABLE_DEBUG_ROUTES", false);
        let log_json_file = std::env::var("LOG_JSON_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Ok(Self {
            stripe_secret_key,
            stripe_api_base,
            supabase_url,
            supabase_anon_key,
            database_url,
            bind_addr,
            cors_origins,
            contact_phone,
            premium_fallback_path,
            upgrade_path,
            enable_debug_routes,
            log_json_file,
        })
    }
}

/// `*` (or nothing) allows any origin; otherwise a comma-separated origin list.
pub fn parse_cors_origins(raw: &str) -> anyhow::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "*")
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| anyhow::anyhow!("invalid CORS_ORIGIN entry {origin:?}: {e}"))
        })
        .collect()
}
