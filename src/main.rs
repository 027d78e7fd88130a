//! Server: loads settings, connects to postgres, applies migrations, serves the book routes.

use books_api::{app_router, db, migration, telemetry, AppState, PgBookStore, Settings};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;
    telemetry::init(settings.log_format);

    let pool = db::connect(&settings.db).await?;
    migration::run(&pool).await?;

    let store = PgBookStore::new(
        pool.clone(),
        settings.query_timeout,
        tracing::info_span!("book_store"),
    );
    let state = AppState::new(Arc::new(store), tracing::info_span!("books_http"));
    let app = app_router(&settings.api_base, state);

    let listener = TcpListener::bind(settings.listen_addr()).await?;
    tracing::info!(base = %settings.api_base, "listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
