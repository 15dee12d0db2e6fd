use std::net::SocketAddr;

use marketplace::server::{
    config::Config, error::AppError, middleware::claims::TokenDecoder, startup, state::AppState,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing();

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, TokenDecoder::new(&config.jwt_secret));

    let app = startup::build_app(state, &config)?;

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
