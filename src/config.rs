use serde::Deserialize;
use std::path::PathBuf;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQLite connection URL, e.g. `sqlite:/var/lib/jazzkeys/jazzkeys.db`
    pub database_url: String,
    /// Port to listen on
    pub port: u16,
    /// Whether `database_url` came from the `DATABASE_URL` variable
    #[serde(skip)]
    pub database_url_from_env: bool,
}

impl Default for Config {
    fn default() -> Self {
        let db_path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jazzkeys")
            .join("jazzkeys.db");
        Self {
            database_url: format!("sqlite:{}", db_path.display()),
            port: DEFAULT_PORT,
            database_url_from_env: false,
        }
    }
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Like [`Config::load`], reading variables through `env`.
    pub fn load_with(
        config_path: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| env("JAZZKEYS_CONFIG").map(PathBuf::from))
            .unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            config = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;
        }

        if let Some(url) = env("DATABASE_URL") {
            config.database_url = url;
            config.database_url_from_env = true;
        }
        if let Some(port) = env("PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        Ok(config)
    }

    /// Default config file path: ~/.config/jazzkeys/config.yaml
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jazzkeys")
            .join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidPort(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    e
                )
            }
            ConfigError::InvalidPort(value) => write!(f, "Invalid PORT '{}'", value),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.database_url.starts_with("sqlite:"));
        assert!(config.database_url.ends_with("jazzkeys.db"));
        assert_eq!(config.port, 8000);
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_load_no_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load_with(Some(config_path), no_env).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "database_url: sqlite:/custom/path/jazz.db").unwrap();

        let config = Config::load_with(Some(config_path), no_env).unwrap();
        assert_eq!(config.database_url, "sqlite:/custom/path/jazz.db");
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(!config.database_url_from_env);
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "database_url: sqlite:fromfile.db").unwrap();
        writeln!(file, "port: 9000").unwrap();

        let env: HashMap<&str, &str> =
            HashMap::from([("DATABASE_URL", "sqlite:fromenv.db"), ("PORT", "9100")]);
        let config = Config::load_with(Some(config_path), |key| {
            env.get(key).map(|v| v.to_string())
        })
        .unwrap();

        assert_eq!(config.database_url, "sqlite:fromenv.db");
        assert!(config.database_url_from_env);
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn test_config_path_from_env() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("custom.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "port: 9200").unwrap();

        let path = config_path.display().to_string();
        let config = Config::load_with(None, |key| {
            (key == "JAZZKEYS_CONFIG").then(|| path.clone())
        })
        .unwrap();
        assert_eq!(config.port, 9200);
    }

    #[test]
    fn test_database_url_in_file_is_not_from_env() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "database_url: sqlite:fromfile.db").unwrap();
        writeln!(file, "database_url_from_env: true").unwrap();

        let config = Config::load_with(Some(config_path), |key| {
            (key == "PORT").then(|| "8100".to_string())
        })
        .unwrap();
        assert_eq!(config.database_url, "sqlite:fromfile.db");
        assert!(!config.database_url_from_env);
    }

    #[test]
    fn test_invalid_port_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let result = Config::load_with(Some(config_path), |key| {
            (key == "PORT").then(|| "not-a-port".to_string())
        });
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid PORT 'not-a-port'"));
    }

    #[test]
    fn test_invalid_yaml_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "invalid: yaml: content: [").unwrap();

        let result = Config::load_with(Some(config_path), no_env);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
