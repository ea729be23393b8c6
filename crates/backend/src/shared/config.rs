use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server.host '{}': {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Location of the month-keyed JSON data files.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DataConfig {
    pub dir: String,
    pub customers_file: String,
    pub cities_file: String,
    pub products_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: "data".to_string(),
            customers_file: "allCountryData.json".to_string(),
            cities_file: "allCityData.json".to_string(),
            products_file: "allProductData.json".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[data]
dir = "data"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Resolves `data.dir`.
///
/// Absolute paths are used as is. A relative path is looked up next to the
/// executable first, then relative to the working directory.
pub fn get_data_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.data.dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Some(exe_dir) = exe_dir() {
        let candidate = exe_dir.join(dir);
        if candidate.is_dir() {
            return candidate;
        }
    }

    dir.to_path_buf()
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.data.dir, "data");
        assert_eq!(config.data.products_file, "allProductData.json");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.data.customers_file, "allCountryData.json");
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 4000,
        };
        assert_eq!(server.socket_addr().unwrap().to_string(), "127.0.0.1:4000");

        let bad = ServerConfig {
            host: "localhost:80".to_string(),
            port: 1,
        };
        assert!(bad.socket_addr().is_err());
    }

    #[test]
    fn test_absolute_data_dir_is_kept() {
        let dir = std::env::temp_dir();
        let config = Config {
            data: DataConfig {
                dir: dir.to_string_lossy().into_owned(),
                ..DataConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(get_data_dir(&config), dir);
    }
}
