use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ServerConfig, UserServiceConfig,
    WebSocketConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub websocket: WebSocketConfig,
    pub user_service: UserServiceConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// 1. `HD_CONFIG_DIR` if set, else `./.hd/`
    /// 2. Create the directory if missing
    /// 3. Read `config.toml` when present, else defaults
    /// 4. Apply `HD_*` environment overrides
    ///
    /// Does NOT validate; call `validate()` afterwards.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// `HD_CONFIG_DIR` > `./.hd/`
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.websocket.validate()?;
        self.user_service.validate()?;
        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary. Secrets are never logged.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!(
            "  database: {} (pool {})",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: {} (secret {}, leeway {}s)",
            self.auth.jwt_algorithm,
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.leeway_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );
        info!(
            "  websocket: buffer={}, heartbeat={}s/{}s, handshake={}s",
            self.websocket.send_buffer_size,
            self.websocket.heartbeat_interval_secs,
            self.websocket.heartbeat_timeout_secs,
            self.websocket.handshake_timeout_secs
        );
        info!(
            "  user_service: {} (timeout={}s, retries={}, backoff={}ms)",
            self.user_service.base_url,
            self.user_service.timeout_secs,
            self.user_service.max_retries,
            self.user_service.backoff_ms
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("HD_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("HD_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "HD_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // Database
        Self::apply_env_string("HD_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "HD_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("HD_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_string("HD_AUTH_JWT_ALGORITHM", &mut self.auth.jwt_algorithm);
        Self::apply_env_parse("HD_AUTH_LEEWAY_SECS", &mut self.auth.leeway_secs);

        // Logging
        Self::apply_env_parse("HD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("HD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("HD_LOG_FILE", &mut self.logging.file);

        // WebSocket
        Self::apply_env_parse(
            "HD_WS_SEND_BUFFER_SIZE",
            &mut self.websocket.send_buffer_size,
        );
        Self::apply_env_parse(
            "HD_WS_HEARTBEAT_INTERVAL_SECS",
            &mut self.websocket.heartbeat_interval_secs,
        );
        Self::apply_env_parse(
            "HD_WS_HEARTBEAT_TIMEOUT_SECS",
            &mut self.websocket.heartbeat_timeout_secs,
        );
        Self::apply_env_parse(
            "HD_WS_HANDSHAKE_TIMEOUT_SECS",
            &mut self.websocket.handshake_timeout_secs,
        );

        // User service
        Self::apply_env_string("HD_USER_SERVICE_URL", &mut self.user_service.base_url);
        Self::apply_env_parse(
            "HD_USER_SERVICE_TIMEOUT_SECS",
            &mut self.user_service.timeout_secs,
        );
        Self::apply_env_parse(
            "HD_USER_SERVICE_MAX_RETRIES",
            &mut self.user_service.max_retries,
        );
        Self::apply_env_parse(
            "HD_USER_SERVICE_BACKOFF_MS",
            &mut self.user_service.backoff_ms,
        );
        Self::apply_env_option_string(
            "HD_USER_SERVICE_TOKEN",
            &mut self.user_service.service_token,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
