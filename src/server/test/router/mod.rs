use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, factory, token};
use tower::ServiceExt;

use crate::server::{
    config::Config, middleware::claims::TokenDecoder, startup::build_app, state::AppState,
};

mod catalog;
mod orders;

/// Application router over an in-memory database with every table created.
struct TestApp {
    app: Router,
    db: DatabaseConnection,
    _context: TestContext,
}

fn test_config(burst: u32) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: token::TEST_JWT_SECRET.to_string(),
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        cors_origin: None,
        rate_limit_per_second: 1,
        rate_limit_burst: burst,
    }
}

impl TestApp {
    async fn new() -> Self {
        Self::with_config(test_config(1000)).await
    }

    async fn with_config(config: Config) -> Self {
        let context = TestBuilder::new()
            .with_tracking_tables()
            .build()
            .await
            .unwrap();
        let db = context.db.clone().unwrap();

        let state = AppState::new(db.clone(), TokenDecoder::new(&config.jwt_secret));
        let app = build_app(state, &config).unwrap();

        Self {
            app,
            db,
            _context: context,
        }
    }

    /// Sends a request as `subject`, or anonymously when `None`.
    async fn request(
        &self,
        method: Method,
        uri: &str,
        subject: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(subject) = subject {
            let bearer = token::bearer_token(subject).unwrap();
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", bearer));
        }

        let mut request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40000))));

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }

    async fn get(&self, uri: &str, subject: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, subject, None).await
    }
}
