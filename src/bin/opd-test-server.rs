use clap::Parser;
use opd_deck::serve::{self, DEFAULT_OPEN_PATH, DEFAULT_PORT, ServeError, ServerConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Serve the HTML test pages over HTTP.
#[derive(Parser)]
#[clap(author, version, about)]
struct ServerArgs {
    #[clap(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
    /// Directory to serve
    #[clap(short, long, default_value = ".")]
    dir: PathBuf,
    /// Page opened in the browser at startup
    #[clap(long, default_value = DEFAULT_OPEN_PATH)]
    open: String,
    #[clap(long)]
    no_browser: bool,
    #[clap(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = ServerArgs::parse();
    setup_logging(args.log_level.as_deref());

    let config = ServerConfig {
        root: args.dir,
        port: args.port,
        open_path: args.open,
        open_browser: !args.no_browser,
        ..Default::default()
    };

    match serve::run(&config).await {
        Ok(()) => {
            println!("\n🛑 [TEST SERVER] Server stopped by user");
            ExitCode::SUCCESS
        },
        Err(ServeError::PortInUse { port }) => {
            println!("❌ [TEST SERVER] Port {port} is already in use!");
            println!("💡 [TEST SERVER] Try using a different port or stop the existing server");
            println!(
                "💡 [TEST SERVER] You can also manually open: {}",
                config.open_url()
            );
            ExitCode::FAILURE
        },
        Err(ServeError::Startup(e)) => {
            println!("❌ [TEST SERVER] Error starting server: {e}");
            ExitCode::FAILURE
        },
    }
}

fn setup_logging(log_level: Option<&str>) {
    let log_level = match log_level.unwrap_or("info").to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("tower_http=warn,{log_level}")))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
