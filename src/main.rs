use dotenvy::dotenv;
use tracing::info;

use esttetica_api::infra::{
    app::create_app,
    config::AppConfig,
    setup::{init_app_state, init_tracing},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(config.log_json_file.as_deref())?;

    let app_state = init_app_state(config).await?;

    let listener = tokio::net::TcpListener::bind(app_state.config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "esttetica api listening");

    let app = create_app(app_state);

    axum::serve(listener, app).await?;

    Ok(())
}
