use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::net::SocketAddr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
const DEFAULT_WORKER_THREADS: usize = 4;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

fn default_host() -> String { DEFAULT_HOST.into() }
fn default_port() -> u16 { DEFAULT_PORT }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: DEFAULT_PORT, worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file first, then `SERVER_HOST`/`SERVER_PORT`/`TOKIO_WORKER_THREADS`,
    /// then built-in defaults.
    pub fn load_or_env() -> Result<Self> {
        match Self::load_and_validate() {
            Ok(cfg) => Ok(cfg),
            Err(_) => {
                let mut cfg = Self { server: ServerConfig::from_env() };
                cfg.normalize_and_validate()?;
                Ok(cfg)
            }
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| default_host());
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        Self { host, port, worker_threads }
    }

    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let mut cfg = load_from_str("").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn explicit_values_are_kept() {
        let mut cfg = load_from_str("[server]\nhost = \"127.0.0.1\"\nport = 9090\nworker_threads = 2\n").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.bind_addr().unwrap().to_string(), "127.0.0.1:9090");
        assert_eq!(cfg.server.worker_threads, Some(2));
    }

    #[test]
    fn blank_host_and_zero_workers_are_normalized() {
        let mut cfg = load_from_str("[server]\nhost = \"  \"\nport = 8000\nworker_threads = 0\n").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, DEFAULT_HOST);
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut cfg = load_from_str("[server]\nport = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/nonexistent/marketplace-config.toml").is_err());
    }
}
