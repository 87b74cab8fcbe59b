use std::env;

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub horizon_url: String,
    pub http_enabled: bool,
    pub http_timeout_ms: u64,
    pub poll_interval_ms: u64,
    pub payments_limit: u32,
    pub copy_tooltip_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            horizon_url: "https://horizon.stellar.org".to_owned(),
            http_enabled: true,
            http_timeout_ms: 10_000,
            poll_interval_ms: 5_000,
            payments_limit: 20,
            copy_tooltip_ms: 1_500,
        }
    }
}

impl ViewerConfig {
    /// Defaults overridden by `ACCOUNT_VIEWER_*` variables. Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(url) = env::var("ACCOUNT_VIEWER_HORIZON_URL") {
            if !url.trim().is_empty() {
                cfg.horizon_url = url.trim().trim_end_matches('/').to_owned();
            }
        }
        if let Some(v) = env_parse::<bool>("ACCOUNT_VIEWER_HTTP_ENABLED") {
            cfg.http_enabled = v;
        }
        if let Some(v) = env_parse::<u64>("ACCOUNT_VIEWER_HTTP_TIMEOUT_MS") {
            cfg.http_timeout_ms = v;
        }
        if let Some(v) = env_parse::<u64>("ACCOUNT_VIEWER_POLL_INTERVAL_MS") {
            cfg.poll_interval_ms = v.max(250);
        }
        if let Some(v) = env_parse::<u32>("ACCOUNT_VIEWER_PAYMENTS_LIMIT") {
            cfg.payments_limit = v.clamp(1, 200);
        }
        if let Some(v) = env_parse::<u64>("ACCOUNT_VIEWER_COPY_TOOLTIP_MS") {
            cfg.copy_tooltip_ms = v;
        }
        cfg
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(variable = name, value = %raw, "ignoring unparseable config value");
            None
        }
    }
}
