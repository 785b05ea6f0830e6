use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use huddle::server::{
    config::Config, error::Error, model::app::AppState, router, service::auth::IdentityVerifier,
    startup,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("huddle=debug,tower_http=debug")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let identity = IdentityVerifier::from_config(&config)?;
    let db = startup::connect_to_database(&config).await?;

    let app = router::routes()
        .with_state(AppState { db, identity })
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = startup::bind_listener(&config).await?;

    tracing::info!(
        "Starting server, accepting @{} identities",
        config.allowed_email_domain
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
