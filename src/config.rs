use serde::Deserialize;
use std::collections::HashMap;

/// Server configuration, fixed at startup.
///
/// Loaded from a YAML file named by the `WICKET_CONFIG` env var
/// (default `wicket.yaml`). A missing file means built-in defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,

    /// Route aliases: logical path -> physical path.
    pub routes: HashMap<String, String>,

    /// Path prefixes that are always forbidden, checked against the
    /// route-resolved target.
    pub private: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub backlog: u32,

    /// Document root for static file lookup.
    pub root: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            backlog: 10,
            root: ".".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            routes: HashMap::new(),
            private: vec!["/.git".to_string(), "/.env".to_string()],
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let path =
            std::env::var("WICKET_CONFIG").unwrap_or_else(|_| "wicket.yaml".to_string());

        match std::fs::read_to_string(&path) {
            Ok(text) => match Self::from_yaml(&text) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!(file = %path, error = %e, "Invalid config file, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
