// Proxy config rendering: placeholder substitution into the runtime config

use anyhow::Context;
use std::path::Path;

/// Values substituted into the config template. Read once from the
/// environment at startup; defaults match the container image.
#[derive(Debug, Clone)]
pub struct PlaceholderValues {
    pub proto: String,
    pub user_id: String,
    pub ws_path: String,
    pub network: String,
    pub port: String,
    pub speed_limit: String,
    pub host: String,
}

fn getenv(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl PlaceholderValues {
    pub fn from_env() -> Self {
        Self {
            proto: getenv("PROTO", "vless"),
            // USER_ID preferred, UUID kept as the legacy variable name
            user_id: getenv("USER_ID", &getenv("UUID", "changeme")),
            ws_path: getenv("WS_PATH", "/ws"),
            network: getenv("NETWORK", "ws"),
            port: getenv("PORT", "8080"),
            // 3000 KB/s
            speed_limit: getenv("SPEED_LIMIT", "300000"),
            host: getenv("HOST", "localhost"),
        }
    }
}

/// Replaces every `__NAME__` placeholder; unknown placeholders are left as-is.
pub fn substitute(template: &str, vars: &PlaceholderValues) -> String {
    let pairs = [
        ("__PROTO__", vars.proto.as_str()),
        ("__USER_ID__", vars.user_id.as_str()),
        ("__WS_PATH__", vars.ws_path.as_str()),
        ("__NETWORK__", vars.network.as_str()),
        ("__PORT__", vars.port.as_str()),
        ("__SPEED_LIMIT__", vars.speed_limit.as_str()),
        ("__HOST__", vars.host.as_str()),
    ];
    let mut rendered = template.to_string();
    for (placeholder, value) in pairs {
        rendered = rendered.replace(placeholder, value);
    }
    rendered
}

/// Reads the template, substitutes placeholders, and writes the rendered
/// config to a writable location.
pub fn render_config(
    template_path: &Path,
    output_path: &Path,
    vars: &PlaceholderValues,
) -> anyhow::Result<()> {
    let template = std::fs::read_to_string(template_path)
        .with_context(|| format!("failed to read template {}", template_path.display()))?;
    let rendered = substitute(&template, vars);
    std::fs::write(output_path, rendered)
        .with_context(|| format!("failed to write config {}", output_path.display()))?;
    Ok(())
}
