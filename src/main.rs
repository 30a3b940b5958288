use axum::Router;
use freight_estimator::config::Config;
use freight_estimator::db::{HubRepository, PgHubRepository, PgProductCatalog, ProductCatalog};
use freight_estimator::services::FreightEstimator;
use freight_estimator::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "freight_estimator=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting freight estimator API server");

    let cities = config
        .freight
        .load_city_registry()
        .map_err(|e| format!("Failed to load city registry: {}", e))?;
    tracing::info!(
        "Configuration loaded: {} cities, {} pricing tiers, fallback hub '{}'",
        cities.len(),
        config.freight.tiers.tiers().len(),
        config.freight.fallback_hub.name
    );

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = freight_estimator::db::create_pool(&config.database_url).await?;
    tracing::info!("Database connection established");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&db_pool).await?;
    tracing::info!("Database migrations completed");

    // Initialize services
    let hub_repo: Arc<dyn HubRepository> = Arc::new(PgHubRepository::new(db_pool.clone()));
    let catalog: Arc<dyn ProductCatalog> = Arc::new(PgProductCatalog::new(db_pool));
    let estimator = FreightEstimator::new(&config.freight, Arc::new(cities), hub_repo, catalog);

    let state = Arc::new(AppState { estimator });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", freight_estimator::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
