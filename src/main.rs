use dotenvy::dotenv;
use std::net::SocketAddr;
use tower_http::catch_panic::CatchPanicLayer;

use club_admin::config::AppConfig;
use club_admin::database::{self, schema};
use club_admin::remote::SqliteBackend;
use club_admin::web;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!(database_url = %config.database_url, "connecting to database");

    let pool = database::connect(&config.database_url)
        .await
        .expect("cannot connect to DATABASE_URL");
    schema::ensure_schema(&pool)
        .await
        .expect("cannot create schema");

    let app = web::router(SqliteBackend::new(pool)).layer(CatchPanicLayer::new());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("cannot parse HOST/PORT");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback: SocketAddr = format!("{}:{}", config.host, config.port.saturating_add(1))
                .parse()
                .expect("cannot parse fallback address");
            tracing::warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("cannot bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().expect("listener has no local address");
    tracing::info!("club admin API listening on http://{}", bound_addr);

    axum::serve(listener, app).await.expect("server error");
}
