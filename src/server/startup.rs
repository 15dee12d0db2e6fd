use std::{sync::Arc, time::Duration};

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    router,
    state::AppState,
};

const DEFAULT_LOG_FILTER: &str = "marketplace=info,tower_http=info";
const RATE_LIMIT_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date
/// before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}

/// Builds the complete application router.
///
/// `/api` is rate limited per client IP, which requires serving the router with
/// `into_make_service_with_connect_info::<SocketAddr>()`. The OpenAPI document is
/// served through Swagger UI at `/api/docs`.
///
/// # Arguments
/// - `state` - Shared application state
/// - `config` - Rate limit and CORS settings
///
/// # Returns
/// - `Ok(Router)` - Router ready to serve
/// - `Err(AppError::ConfigErr)` - Rate limit or CORS settings are unusable
pub fn build_app(state: AppState, config: &Config) -> Result<Router, AppError> {
    let (api, mut openapi) = router::api_router().split_for_parts();
    let (sockets, socket_doc) = router::socket_router().split_for_parts();
    openapi.merge(socket_doc);

    let app = Router::new()
        .merge(rate_limited(api, config)?)
        .merge(sockets)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi))
        .with_state(state)
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Wraps `routes` in a per-IP token bucket allowing `rate_limit_per_second` sustained
/// requests with bursts of `rate_limit_burst`.
///
/// Spawns a task that periodically forgets idle clients, so this must run inside the
/// Tokio runtime.
fn rate_limited(
    routes: Router<AppState>,
    config: &Config,
) -> Result<Router<AppState>, AppError> {
    let replenish_ms = (1000 / config.rate_limit_per_second.max(1)).max(1);

    let governor_config = GovernorConfigBuilder::default()
        .key_extractor(PeerIpKeyExtractor)
        .per_millisecond(replenish_ms)
        .burst_size(config.rate_limit_burst)
        .finish()
        .ok_or_else(|| {
            ConfigError::InvalidRateLimit(format!(
                "{} per second with burst {}",
                config.rate_limit_per_second, config.rate_limit_burst
            ))
        })?;

    let limiter = governor_config.limiter().clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(RATE_LIMIT_CLEANUP_INTERVAL).await;
            limiter.retain_recent();
        }
    });

    Ok(routes.layer(GovernorLayer::new(Arc::new(governor_config))))
}

fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let Some(origin) = &config.cors_origin else {
        return Ok(CorsLayer::permissive());
    };

    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
        name: "CORS_ORIGIN".to_string(),
        value: origin.clone(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]))
}
