use crate::{
    adapters::http::app_state::AppState,
    application::{
        ports::{billing_portal::BillingPortalProvider, identity_provider::IdentityProvider},
        use_cases::{
            billing_portal::BillingPortalUseCases,
            subscription::{SubscriptionRepo, SubscriptionUseCases},
        },
    },
    domain::entities::{entitlement::EntitlementGate, stripe_mode::StripeMode},
    infra::{
        config::AppConfig, http_client::try_build_client, postgres_persistence,
        stripe_client::StripeClient, stripe_portal_adapter::StripeBillingPortal,
        supabase_auth::SupabaseAuthClient,
    },
};
use secrecy::{ExposeSecret, SecretString};
use std::fs::File;
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let stripe_mode = StripeMode::from_secret_key(config.stripe_secret_key.expose_secret())
        .ok_or_else(|| {
            anyhow::anyhow!("STRIPE_SECRET_KEY must be a Stripe secret key (sk_/rk_ prefix)")
        })?;
    info!(stripe_mode = %stripe_mode, "Stripe configured");

    let http_client = try_build_client()?;

    let postgres_arc = Arc::new(postgres_persistence(&config.database_url).await?);

    let identity = Arc::new(SupabaseAuthClient::new(
        http_client.clone(),
        &config.supabase_url,
        SecretString::new(config.supabase_anon_key.expose_secret().into()),
    )) as Arc<dyn IdentityProvider>;

    let stripe = StripeClient::new(
        http_client,
        SecretString::new(config.stripe_secret_key.expose_secret().into()),
        config.stripe_api_base.clone(),
    );
    let portal = Arc::new(StripeBillingPortal::new(stripe)) as Arc<dyn BillingPortalProvider>;

    let subscription_use_cases = Arc::new(SubscriptionUseCases::new(
        identity,
        postgres_arc.clone() as Arc<dyn SubscriptionRepo>,
    ));

    let billing_portal_use_cases = Arc::new(BillingPortalUseCases::new(
        subscription_use_cases.clone(),
        portal,
    ));

    let entitlement_gate = Arc::new(EntitlementGate::new(
        config.premium_fallback_path.clone(),
        config.upgrade_path.clone(),
    ));

    Ok(AppState {
        config: Arc::new(config),
        subscription_use_cases,
        billing_portal_use_cases,
        entitlement_gate,
    })
}

pub fn init_tracing(log_json_file: Option<&str>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "esttetica_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), only when configured
    let json_layer = match log_json_file {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| anyhow::anyhow!("cannot create log file {path}: {e}"))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file))
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
