use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub reporting: ReportingConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub proxy: ProxyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    /// Local address of the proxy's stats API.
    #[serde(default = "default_api_addr")]
    pub api_addr: String,
    /// Overall budget (connect + read) for one stats query.
    #[serde(default = "default_stats_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_addr() -> String {
    "127.0.0.1:10085".into()
}

fn default_stats_timeout_secs() -> u64 {
    2
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            api_addr: default_api_addr(),
            timeout_secs: default_stats_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// How often the background reporter pushes stats to the chat.
    #[serde(default = "default_report_interval_secs")]
    pub interval_secs: u64,
}

fn default_report_interval_secs() -> u64 {
    300
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_report_interval_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

impl TelegramConfig {
    /// Overrides file values from BOT_TOKEN / CHAT_ID (container deployments
    /// pass the credential through the environment, not the config file).
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var("BOT_TOKEN")
            && !token.is_empty()
        {
            self.bot_token = Some(token);
        }
        if let Ok(chat_id) = std::env::var("CHAT_ID")
            && !chat_id.is_empty()
        {
            self.chat_id = Some(chat_id);
        }
    }

    /// Token and chat id, when both are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.bot_token.as_deref(), self.chat_id.as_deref()) {
            (Some(token), Some(chat_id)) if !token.is_empty() && !chat_id.is_empty() => {
                Some((token, chat_id))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    /// Proxy binary, resolved via PATH.
    #[serde(default = "default_proxy_binary")]
    pub binary: String,
    #[serde(default = "default_template_path")]
    pub template_path: String,
    /// Rendered config destination; must be writable at runtime.
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_proxy_binary() -> String {
    "xray".into()
}

fn default_template_path() -> String {
    "/config.json.tpl".into()
}

fn default_output_path() -> String {
    "/tmp/config.json".into()
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            binary: default_proxy_binary(),
            template_path: default_template_path(),
            output_path: default_output_path(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read config {}: {}", path, e))?;
        let mut config: AppConfig = toml::from_str(&s)?;
        config.telegram.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.stats.api_addr.is_empty(),
            "stats.api_addr must be non-empty"
        );
        anyhow::ensure!(
            self.stats.timeout_secs > 0,
            "stats.timeout_secs must be > 0, got {}",
            self.stats.timeout_secs
        );
        anyhow::ensure!(
            self.reporting.interval_secs > 0,
            "reporting.interval_secs must be > 0, got {}",
            self.reporting.interval_secs
        );
        anyhow::ensure!(
            self.telegram.bot_token.is_some() == self.telegram.chat_id.is_some(),
            "telegram.bot_token and telegram.chat_id must be set together"
        );
        anyhow::ensure!(
            !self.proxy.binary.is_empty(),
            "proxy.binary must be non-empty"
        );
        anyhow::ensure!(
            !self.proxy.template_path.is_empty(),
            "proxy.template_path must be non-empty"
        );
        anyhow::ensure!(
            !self.proxy.output_path.is_empty(),
            "proxy.output_path must be non-empty"
        );
        Ok(())
    }
}
