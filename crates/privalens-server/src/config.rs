use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Artificial per-call delay in milliseconds, simulating crawl latency
    #[serde(default)]
    pub delay_ms: u64,

    /// Per-call analysis timeout in seconds. An overdue analysis becomes
    /// an error-bearing entry for its URL only.
    #[serde(default = "default_analysis_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logging: LoggingConfig::default(),
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            timeout_secs: default_analysis_timeout_secs(),
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let config = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml::from_str(&contents)?
        } else {
            // Default to YAML
            serde_yaml::from_str(&contents)?
        };

        Ok(config)
    }

    /// Merge environment variables into config (env vars take precedence)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("PRIVALENS_HOST") {
            self.host = val;
        }

        if let Ok(val) = std::env::var("PRIVALENS_PORT") {
            if let Ok(port) = val.parse::<u16>() {
                self.port = port;
            }
        }

        if let Ok(val) = std::env::var("PRIVALENS_LOG_LEVEL") {
            self.logging.level = val;
        }

        if let Ok(val) = std::env::var("PRIVALENS_ANALYZER_DELAY_MS") {
            if let Ok(delay) = val.parse::<u64>() {
                self.analyzer.delay_ms = delay;
            }
        }

        if let Ok(val) = std::env::var("PRIVALENS_ANALYSIS_TIMEOUT_SECS") {
            if let Ok(timeout) = val.parse::<u64>() {
                self.analyzer.timeout_secs = timeout;
            }
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_analysis_timeout_secs() -> u64 {
    30
}
