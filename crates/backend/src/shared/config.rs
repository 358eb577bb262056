use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub seed: SeedConfig,
    #[serde(default)]
    pub access: AccessConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AccessConfig {
    /// Workspaces where only read verbs are allowed
    #[serde(default)]
    pub read_only_workspaces: Vec<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[seed]
path = "data/workspaces.json"

[access]
read_only_workspaces = []
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve the seed file path.
/// Relative paths are looked up next to the executable first, then in the
/// current directory.
pub fn get_seed_path(config: &Config) -> PathBuf {
    let seed_path = Path::new(&config.seed.path);

    if seed_path.is_absolute() {
        return seed_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(seed_path);
            if resolved_path.exists() {
                return resolved_path;
            }
        }
    }

    PathBuf::from(seed_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.seed.path, "data/workspaces.json");
        assert!(config.access.read_only_workspaces.is_empty());
    }

    #[test]
    fn test_optional_sections_default() {
        let config: Config = toml::from_str(
            r#"
            [seed]
            path = "/srv/console/seed.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.access.read_only_workspaces.is_empty());
        assert_eq!(
            get_seed_path(&config),
            PathBuf::from("/srv/console/seed.json")
        );
    }
}
