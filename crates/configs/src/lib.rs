use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Top-level config file shape. Every section is optional; a missing file is
/// not an error because all values have env fallbacks and defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceFileConfig,
    #[serde(default)]
    pub dashboard: DashboardFileConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ServiceFileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DashboardFileConfig {
    pub user_service_url: Option<String>,
    pub product_service_url: Option<String>,
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

/// Resolved configuration for one resource service: where to listen and the
/// storage connection string (a JSON file path).
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub data_path: String,
}

impl ServiceConfig {
    /// Resolve from config file, then env (`SERVICE_HOST`, `PORT`,
    /// `DATA_PATH`), then defaults derived from the resource name.
    pub fn load(resource: &str, default_port: u16) -> Result<Self> {
        let file = load_default().map(|c| c.service).unwrap_or_default();

        let host = env_str("SERVICE_HOST")
            .or(file.host)
            .unwrap_or_else(|| "127.0.0.1".to_string());
        let port = env_str("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .or(file.port)
            .unwrap_or(default_port);
        let data_path = env_str("DATA_PATH")
            .or(file.data_path)
            .unwrap_or_else(|| format!("data/{resource}.json"));

        let cfg = Self { host, port, data_path };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn bind_addr(&self) -> Result<std::net::SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(anyhow!("service host must not be empty"));
        }
        if self.port == 0 {
            return Err(anyhow!("service port must be in 1..=65535"));
        }
        if self.data_path.trim().is_empty() {
            return Err(anyhow!("data_path must not be empty; set DATA_PATH or [service].data_path"));
        }
        Ok(())
    }
}

/// Resolved configuration for the dashboard: one base URL per service.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub user_service_url: String,
    pub product_service_url: String,
}

impl DashboardConfig {
    /// Resolve from config file, then env (`USER_SERVICE_URL`,
    /// `PRODUCT_SERVICE_URL`), then local-development defaults.
    pub fn load() -> Result<Self> {
        let file = load_default().map(|c| c.dashboard).unwrap_or_default();

        let user_service_url = env_str("USER_SERVICE_URL")
            .or(file.user_service_url)
            .unwrap_or_else(|| "http://127.0.0.1:4001".to_string());
        let product_service_url = env_str("PRODUCT_SERVICE_URL")
            .or(file.product_service_url)
            .unwrap_or_else(|| "http://127.0.0.1:4002".to_string());

        let cfg = Self { user_service_url, product_service_url };
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("user_service_url", &self.user_service_url),
            ("product_service_url", &self.product_service_url),
        ] {
            if url.trim().is_empty() {
                return Err(anyhow!("{name} must not be empty"));
            }
            let lower = url.to_lowercase();
            if !(lower.starts_with("http://") || lower.starts_with("https://")) {
                return Err(anyhow!("{name} must start with http:// or https://"));
            }
        }
        Ok(())
    }
}

fn env_str(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
