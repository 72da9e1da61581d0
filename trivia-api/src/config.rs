use crate::pagination::DEFAULT_PAGE_SIZE;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub pagination: PaginationConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaginationConfig {
    pub page_size: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    /// `"*"` allows any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
            database: DatabaseConfig {
                path: get_default_db_path(),
            },
            pagination: PaginationConfig {
                page_size: DEFAULT_PAGE_SIZE,
            },
            cors: CorsConfig {
                allowed_origins: vec!["*".to_string()],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: None,
            },
        }
    }
}

impl ApiConfig {
    /// Layered load: defaults, `./trivia-api.toml`, `<config dir>/trivia/api.toml`,
    /// `explicit` (must exist when given), then `TRIVIA_API_*` environment
    /// variables such as `TRIVIA_API_SERVER__PORT=9000`.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?
            .add_source(File::with_name("trivia-api").required(false));

        if let Some(path) = get_user_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path.to_path_buf()));
        }

        let builder = builder.add_source(
            Environment::with_prefix("TRIVIA_API")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins"),
        );

        Self::finish(builder)
    }

    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = ApiConfig::default();

        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default(
                "database.path",
                defaults.database.path.to_string_lossy().to_string(),
            )?
            .set_default("pagination.page_size", defaults.pagination.page_size as u64)?
            .set_default("cors.allowed_origins", defaults.cors.allowed_origins)?
            .set_default("logging.level", defaults.logging.level)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let mut config: ApiConfig = builder.build()?.try_deserialize()?;

        // Expand tilde in database path
        if config.database.path.starts_with("~") {
            if let Some(home) = dirs::home_dir() {
                let path_str = config.database.path.to_string_lossy();
                let expanded = path_str.replacen('~', &home.to_string_lossy(), 1);
                config.database.path = PathBuf::from(expanded);
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pagination.page_size == 0 {
            return Err(ConfigError::Message(
                "pagination.page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("trivia/api.toml"))
}

fn get_default_db_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join("trivia/trivia.db")
    } else {
        PathBuf::from("trivia.db")
    }
}
