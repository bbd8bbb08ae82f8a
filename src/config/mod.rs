// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig, StorageConfig,
};

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("FILESERVE"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 7000)?
            .set_default("storage.root", "files")?
            .set_default("storage.landing_page", "index.html")?
            .set_default("http.server_name", "FileServe/0.1")?
            .set_default("http.enable_cors", true)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Base URL used to build content links in metadata responses
    pub fn content_url_base(&self) -> String {
        self.http
            .base_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", self.server.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 7000,
                workers: None,
            },
            storage: StorageConfig {
                root: "files".to_string(),
                landing_page: "index.html".to_string(),
            },
            http: HttpConfig {
                server_name: "FileServe/0.1".to_string(),
                enable_cors: true,
                base_url: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: true,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
        }
    }

    #[test]
    fn test_socket_addr() {
        let cfg = base_config();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 7000);
        assert!(addr.is_ipv4());
    }

    #[test]
    fn test_content_url_base_derived_from_port() {
        let cfg = base_config();
        assert_eq!(cfg.content_url_base(), "http://localhost:7000");
    }

    #[test]
    fn test_content_url_base_override() {
        let mut cfg = base_config();
        cfg.http.base_url = Some("https://cdn.example.com".to_string());
        assert_eq!(cfg.content_url_base(), "https://cdn.example.com");
    }
}
