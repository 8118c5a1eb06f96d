use std::env;

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Custom log directory path (overrides auto-detection)
    pub custom_log_dir: Option<String>,

    /// Log filter for console output (default: "currency_text=info")
    pub console_log_level: String,

    /// Log filter for the application log file (default: "debug")
    pub file_log_level: String,

    /// Write the JSON access log (default: true)
    pub access_enabled: bool,

    /// Write the JSON application log (default: true)
    pub application_enabled: bool,

    /// Slow request threshold in milliseconds (default: 1000)
    pub slow_request_threshold_ms: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            custom_log_dir: None,
            console_log_level: "currency_text=info".to_string(),
            file_log_level: "debug".to_string(),
            access_enabled: true,
            application_enabled: true,
            slow_request_threshold_ms: 1000,
        }
    }
}

impl LogConfig {
    /// Load logging configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("CURRENCY_TEXT_LOG_DIR") {
            config.custom_log_dir = Some(dir);
        }

        if let Some(level) = lookup("RUST_LOG") {
            config.console_log_level = level;
        }

        if let Some(level) = lookup("CURRENCY_TEXT_FILE_LOG_LEVEL") {
            config.file_log_level = level;
        }

        if let Some(val) = lookup("LOG_ACCESS_ENABLED") {
            config.access_enabled = val.to_lowercase() == "true";
        }

        if let Some(val) = lookup("LOG_APPLICATION_ENABLED") {
            config.application_enabled = val.to_lowercase() == "true";
        }

        if let Some(threshold) = lookup("LOG_SLOW_REQUEST_THRESHOLD_MS").and_then(|v| v.parse().ok()) {
            config.slow_request_threshold_ms = threshold;
        }

        config
    }
}
