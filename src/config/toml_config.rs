use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_SENDER: &str = "noreply@digital-me.dev";
pub const DEFAULT_STAGE_DELAY_MS: u64 = 300;
pub const DEFAULT_SINK_TIMEOUT_SECONDS: u64 = 10;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("Invalid regex: env placeholder"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub sink: SinkConfig,
    #[serde(default)]
    pub playground: PlaygroundConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// 未設定時使用內建的 data/profile.toml
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Log,
    Webhook,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    pub r#type: SinkKind,
    pub endpoint: Option<String>,
    /// 收件人，未設定時使用 profile 的 email
    pub recipient: Option<String>,
    pub sender: String,
    pub auth_token: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            r#type: SinkKind::Log,
            endpoint: None,
            recipient: None,
            sender: DEFAULT_SENDER.to_string(),
            auth_token: None,
            timeout_seconds: DEFAULT_SINK_TIMEOUT_SECONDS,
        }
    }
}

impl SinkConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub stage_delay_ms: u64,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            stage_delay_ms: DEFAULT_STAGE_DELAY_MS,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONTACT_WEBHOOK_URL})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_socket_addr("server.bind", &self.server.bind)?;

        if let Some(path) = &self.profile.path {
            validation::validate_path("profile.path", path)?;
        }

        if self.sink.r#type == SinkKind::Webhook {
            let endpoint = validation::validate_required_field("sink.endpoint", &self.sink.endpoint)?;
            validation::validate_url("sink.endpoint", endpoint)?;
        }

        if let Some(token) = &self.sink.auth_token {
            validation::validate_non_empty_string("sink.auth_token", token)?;
        }

        if let Some(recipient) = &self.sink.recipient {
            validation::validate_email("sink.recipient", recipient)?;
        }
        validation::validate_email("sink.sender", &self.sink.sender)?;
        validation::validate_range("sink.timeout_seconds", self.sink.timeout_seconds, 1, 120)?;
        validation::validate_range(
            "playground.stage_delay_ms",
            self.playground.stage_delay_ms,
            0,
            5000,
        )?;

        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        validation::validate_socket_addr("server.bind", &self.server.bind)
    }

    pub fn stage_delay(&self) -> Duration {
        Duration::from_millis(self.playground.stage_delay_ms)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
