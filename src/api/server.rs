use crate::api::routes;
use crate::config::FunctionsConfig;
use crate::errors::Result;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// Starts and runs the HTTP server using Axum web framework
///
/// Binds `server.host:server.port`, logs the URL of every registered
/// function and serves until Ctrl-C or SIGTERM is received.
///
/// # Arguments
/// * `config` - Validated functions configuration
///
/// # Returns
/// * `Result<()>` - Ok after a graceful shutdown, Error if binding or serving fails
pub async fn launch_server(config: FunctionsConfig) -> Result<()> {
    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    let addr = listener.local_addr()?;

    info!(
        max_instances = config.global.max_instances,
        "Functions host listening on http://{}", addr
    );
    for function in &config.functions {
        info!("  {}: http://{}/{}", function.name, addr, function.name);
    }

    serve(listener, routes::app(&config), shutdown_signal()).await
}

/// Serves `app` on an already bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Functions host stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutting down...");
}
