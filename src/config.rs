use clap::Parser;
use std::path::PathBuf;

/// Neomorphic Oasis - login page server
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "OASIS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "OASIS_PORT", default_value = "3000")]
    pub port: String,

    /// Base URL for the application
    #[arg(long, env = "OASIS_BASE_URL")]
    pub base_url: Option<String>,

    /// Static files directory
    #[arg(long, env = "OASIS_STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,
}

impl Config {
    /// Get the base URL, defaulting to http://host:port if not set
    pub fn get_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.host, self.port))
    }

    pub fn get_bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["oasis-login"]);
        assert_eq!(config.get_bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.static_dir, PathBuf::from("./static"));
    }

    #[test]
    fn test_base_url_falls_back_to_bind_address() {
        let config = Config::parse_from(["oasis-login", "--host", "0.0.0.0", "--port", "8080"]);
        assert_eq!(config.get_base_url(), "http://0.0.0.0:8080");

        let config = Config::parse_from(["oasis-login", "--base-url", "https://oasis.example"]);
        assert_eq!(config.get_base_url(), "https://oasis.example");
    }
}
