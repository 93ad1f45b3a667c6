// Configuration module entry point
// Layers defaults, an optional docserve.toml, and DOCSERVE_* environment
// variables into a typed Config

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig, SiteConfig};

impl Config {
    /// Load configuration from the default `docserve.toml` location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("docserve")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("DOCSERVE"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 4000)?
            .set_default("site.root_dir", ".")?
            .set_default(
                "site.index_files",
                vec!["index.html".to_string(), "index.htm".to_string()],
            )?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
