//! Outbound HTTP client factory.
//!
//! Every client talking to Stripe or Supabase is built here so they share the
//! same timeout behaviour.

use reqwest::Client;
use std::time::Duration;

/// TCP handshake + TLS.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total request/response time for third-party API calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("esttetica-api/", env!("CARGO_PKG_VERSION"));

pub fn try_build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .timeout(DEFAULT_REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
}
