use super::{ServeError, ServerConfig, browser};
use axum::Router;
use std::future::Future;
use std::io;
use std::net::TcpListener;
use std::path::Path;
use tokio::signal;
use tower_http::services::ServeDir;
use tracing::{info, warn};

const RULE: &str = "============================================================";

/// Bind the configured address once.
///
/// There is no retry on another port: the test pages hard-code the port.
pub fn bind(config: &ServerConfig) -> Result<TcpListener, ServeError> {
    TcpListener::bind((config.bind, config.port)).map_err(|e| match e.kind() {
        io::ErrorKind::AddrInUse => ServeError::PortInUse { port: config.port },
        _ => ServeError::Startup(e),
    })
}

/// Router serving `root` as static files.
pub fn router(root: &Path) -> Router {
    Router::new().fallback_service(ServeDir::new(root))
}

/// Startup banner listing the served directory and test page URLs.
pub fn banner(config: &ServerConfig, root: &Path) -> String {
    let mut lines = vec![
        "🚀 [TEST SERVER] Starting HTTP server...".to_string(),
        format!("📁 [TEST SERVER] Serving directory: {}", root.display()),
        format!("🌐 [TEST SERVER] Server running on: {}", config.base_url()),
    ];
    for page in &config.test_pages {
        lines.push(format!(
            "🔗 [TEST SERVER] {}: {}",
            page.description,
            config.page_url(&page.path)
        ));
    }
    lines.push(RULE.to_string());
    lines.push("✅ [TEST SERVER] Server started successfully!".to_string());
    lines.push("📋 [TEST SERVER] Available test pages:".to_string());
    for page in &config.test_pages {
        lines.push(format!("   - {} ({})", page.path, page.description));
    }
    lines.push(RULE.to_string());
    lines.push("🛑 [TEST SERVER] Press Ctrl+C to stop the server".to_string());
    lines.join("\n")
}

/// Serve `root` on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, root: &Path, shutdown: F) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    listener.set_nonblocking(true)?;
    let listener = tokio::net::TcpListener::from_std(listener)?;
    let addr = listener.local_addr()?;
    info!(%addr, root = %root.display(), "serving static files");

    axum::serve(listener, router(root))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!(%addr, "server stopped");
    Ok(())
}

/// Bind, announce, open the browser, and serve until Ctrl+C.
pub async fn run(config: &ServerConfig) -> Result<(), ServeError> {
    let listener = bind(config)?;
    let root = std::fs::canonicalize(&config.root)?;

    println!("{}\n", banner(config, &root));

    if config.open_browser {
        let url = config.open_url();
        println!("🌐 [TEST SERVER] Opening test page: {url}");
        if let Err(e) = browser::open_in_browser(&url) {
            warn!(%url, error = %e, "could not open browser");
        }
    }

    serve(listener, &root, wait_for_ctrl_c()).await
}

async fn wait_for_ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        // Without a handler the server runs until the process is killed.
        warn!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}
