use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, RestConfig, router};
use clinic_core::{ClinicRegistry, SharedRegistry};

/// Main entry point for the clinic service
///
/// Builds one in-memory registry for the lifetime of the process and serves it over
/// REST. State is not persisted; restarting the process starts an empty clinic.
///
/// # Environment Variables
/// - `CLINIC_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `CLINIC_ENABLE_SWAGGER`: serve Swagger UI at `/swagger-ui` (default: "true")
/// - `RUST_LOG`: log filter, added to the default `clinic=info` directive
///
/// # Errors
/// Returns an error if:
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_run=info".parse()?)
                .add_directive("clinic_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = RestConfig::from_env()?;

    let state = AppState {
        registry: SharedRegistry::new(ClinicRegistry::new()),
    };
    let app = router(state, cfg.swagger_enabled());

    tracing::info!("++ Starting clinic REST on {}", cfg.addr());
    if cfg.swagger_enabled() {
        tracing::info!("Swagger UI at http://{}/swagger-ui", cfg.addr());
    }

    let listener = tokio::net::TcpListener::bind(cfg.addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
