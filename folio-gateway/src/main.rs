//! Entry point for the `folio-gateway` HTTP server.

use std::{net::SocketAddr, sync::Arc};

use folio_gateway::{
    config::GatewayConfig,
    rate_limit::RateLimiter,
    routes::{create_router, RelayState},
};
use folio_mailer::SmtpMailer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Local development convenience; deployed environments set real vars.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let mailer = match SmtpMailer::new(&config.mailer) {
        Ok(m) => m,
        Err(e) => {
            tracing::error!(error = %e, "failed to build smtp mailer");
            std::process::exit(1);
        }
    };

    let state = Arc::new(RelayState {
        api_key: config.api_key.clone(),
        mail_from: config.mailer.from.clone(),
        mail_to: config.mailer.to.clone(),
        transport: Arc::new(mailer),
        limiter: RateLimiter::new(config.rate_window, config.rate_max_requests),
    });
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.listen_addr, "portfolio-backend listening");

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
