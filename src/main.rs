mod config;
mod db;
mod dtos;
mod error;
mod handler;
mod models;
mod routes;
mod utils;

use std::sync::Arc;

use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use config::Config;
use dotenv::dotenv;
use routes::create_router;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::filter::LevelFilter;

use crate::db::db::DBClient;

static MIGRATOR: Migrator = sqlx::migrate!();

#[derive(Debug, Clone)]
pub struct AppState {
    pub env: Config,
    pub db_client: DBClient,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    dotenv().ok();

    let config = Config::init();

    let pool = match PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            tracing::info!("connection to the database is successful");
            pool
        }
        Err(err) => {
            tracing::error!("failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = MIGRATOR.run(&pool).await {
        tracing::error!("failed to run database migrations: {:?}", err);
        std::process::exit(1);
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ]);

    let app_state = Arc::new(AppState {
        env: config.clone(),
        db_client: DBClient::new(pool),
    });

    let app = create_router(app_state).layer(cors);

    tracing::info!("server is running on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .unwrap();

    axum::serve(listener, app).await.unwrap();
}
