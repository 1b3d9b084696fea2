use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use users_api::{
    config::{Config, LogFormat},
    database::{pool::create_pool, schema::ensure_schema},
    routes, AppState,
};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let pool = create_pool(&config);
    let policy = config.schema_retry_policy();

    if config.wait_for_schema {
        ensure_schema(&pool, policy).await?;
    } else {
        let pool = pool.clone();
        tokio::spawn(async move {
            if let Err(e) = ensure_schema(&pool, policy).await {
                error!(error = %e, "schema initialization abandoned");
            }
        });
    }

    let app = routes::router(AppState::new(pool));

    let addr: SocketAddr = config.server_address().parse()?;
    info!("API server running on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
