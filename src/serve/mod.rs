//! Static-file server for the HTML test pages.
//!
//! Serves one directory over HTTP on a fixed port until Ctrl+C, and opens a
//! designated page in the default browser at startup.

// Submodule declarations
mod browser;
mod server;

// Re-exports
pub use browser::open_in_browser;
pub use server::{banner, bind, router, run, serve};

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use thiserror::Error;

/// Port the test pages expect the server on.
pub const DEFAULT_PORT: u16 = 8000;

/// Page opened in the browser at startup.
pub const DEFAULT_OPEN_PATH: &str = "test-cors-fix.html";

/// A page listed in the startup banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPage {
    pub path: String,
    pub description: String,
}

impl TestPage {
    pub fn new(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory served at `/`
    pub root: PathBuf,
    pub port: u16,
    pub bind: IpAddr,
    /// Path, relative to the server root, opened in the browser
    pub open_path: String,
    pub open_browser: bool,
    pub test_pages: Vec<TestPage>,
}

impl ServerConfig {
    /// Base URL shown to the user.
    pub fn base_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// URL of a page under the server root.
    pub fn page_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }

    /// URL opened in the browser at startup.
    pub fn open_url(&self) -> String {
        self.page_url(&self.open_path)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            port: DEFAULT_PORT,
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            open_path: DEFAULT_OPEN_PATH.to_string(),
            open_browser: true,
            test_pages: vec![
                TestPage::new("test-cors-fix.html", "CORS troubleshooting"),
                TestPage::new("test-doctors-api.html", "Full API testing"),
            ],
        }
    }
}

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("port {port} is already in use")]
    PortInUse { port: u16 },

    #[error("{0}")]
    Startup(#[from] std::io::Error),
}
