use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid PORT value `{0}`")]
    Port(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub port: u16,
    pub teams_page_url: String,
    pub team_selector: String,
    pub api_base_url: String,
    pub season: String,
    pub user_agent: String,
    /// Per-request timeout for outbound calls. Unset means wait forever.
    pub request_timeout_seconds: Option<u64>,
    /// Run the four stats sources at once instead of one after another.
    pub concurrent_sources: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            teams_page_url: "https://www.robotevents.com/robot-competitions/vex-robotics-competition/RE-VRC-18-6082.html".into(),
            team_selector: "#data-table > tbody > tr > td:first-of-type".into(),
            api_base_url: "https://api.vexdb.io/v1".into(),
            season: "current".into(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) VexScoutBot/0.1".into(),
            request_timeout_seconds: None,
            concurrent_sources: true,
        }
    }
}

/// Loads the config file at `path`, falling back to defaults when it does not exist,
/// then applies the `PORT` environment override.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let mut config = match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content)?,
        Err(e) if e.kind() == ErrorKind::NotFound => AppConfig::default(),
        Err(e) => return Err(e.into()),
    };
    apply_port_override(&mut config, std::env::var("PORT").ok().as_deref())?;
    Ok(config)
}

fn apply_port_override(config: &mut AppConfig, port: Option<&str>) -> Result<(), ConfigError> {
    if let Some(raw) = port {
        config.port = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Port(raw.to_string()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "season": "2018-2019", "request_timeout_seconds": 15 }"#).unwrap();
        assert_eq!(config.season, "2018-2019");
        assert_eq!(config.request_timeout_seconds, Some(15));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.api_base_url, "https://api.vexdb.io/v1");
        assert!(config.concurrent_sources);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config("does-not-exist/config.json").unwrap();
        assert_eq!(config.team_selector, "#data-table > tbody > tr > td:first-of-type");
        assert!(config.request_timeout_seconds.is_none());
    }

    #[test]
    fn port_override() {
        let mut config = AppConfig::default();
        apply_port_override(&mut config, None).unwrap();
        assert_eq!(config.port, 5000);

        apply_port_override(&mut config, Some("8080")).unwrap();
        assert_eq!(config.port, 8080);

        let err = apply_port_override(&mut config, Some("eighty")).unwrap_err();
        assert!(matches!(err, ConfigError::Port(ref p) if p == "eighty"));
    }
}
