use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_serial_port")]
    pub serial_port: String,
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_sensor_category")]
    pub sensor_category: String,
    #[serde(default = "default_sensor_label")]
    pub sensor_label: String,
    #[serde(default = "default_reconnect_initial_ms")]
    pub reconnect_initial_ms: u64,
    #[serde(default = "default_reconnect_max_ms")]
    pub reconnect_max_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            serial_port: default_serial_port(),
            baud_rate: default_baud_rate(),
            poll_interval_secs: default_poll_interval_secs(),
            sensor_category: default_sensor_category(),
            sensor_label: default_sensor_label(),
            reconnect_initial_ms: default_reconnect_initial_ms(),
            reconnect_max_ms: default_reconnect_max_ms(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("could not parse YAML in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Config {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let path_display = path_ref.display().to_string();
        let text = fs::read_to_string(path_ref).map_err(|source| ConfigError::Read {
            path: path_display.clone(),
            source,
        })?;

        let cfg: Config = serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path_display,
            source,
        })?;

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.serial_port.trim().is_empty() {
            return Err(ConfigError::Validation(
                "serial_port must not be empty".to_string(),
            ));
        }
        if self.baud_rate < 1200 {
            return Err(ConfigError::Validation(
                "baud_rate must be >= 1200".to_string(),
            ));
        }
        if self.poll_interval_secs < 1 {
            return Err(ConfigError::Validation(
                "poll_interval_secs must be >= 1".to_string(),
            ));
        }
        if self.sensor_category.trim().is_empty() {
            return Err(ConfigError::Validation(
                "sensor_category must not be empty".to_string(),
            ));
        }
        if self.sensor_label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "sensor_label must not be empty".to_string(),
            ));
        }
        if self.reconnect_initial_ms < 1 {
            return Err(ConfigError::Validation(
                "reconnect_initial_ms must be >= 1".to_string(),
            ));
        }
        if self.reconnect_max_ms < self.reconnect_initial_ms {
            return Err(ConfigError::Validation(
                "reconnect_max_ms must be >= reconnect_initial_ms".to_string(),
            ));
        }

        Ok(())
    }

    pub fn example_yaml() -> &'static str {
        include_str!("../config.yaml.example")
    }
}

fn default_serial_port() -> String {
    if cfg!(windows) {
        "COM3".to_string()
    } else {
        "/dev/ttyUSB0".to_string()
    }
}

const fn default_baud_rate() -> u32 {
    115_200
}

const fn default_poll_interval_secs() -> u64 {
    2
}

fn default_sensor_category() -> String {
    "Temperature".to_string()
}

fn default_sensor_label() -> String {
    "CPU Core".to_string()
}

const fn default_reconnect_initial_ms() -> u64 {
    500
}

const fn default_reconnect_max_ms() -> u64 {
    8_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        Config::default()
            .validate()
            .expect("default configuration must be valid");
    }

    #[test]
    fn example_yaml_parses_and_validates() {
        let cfg: Config =
            serde_yaml::from_str(Config::example_yaml()).expect("example must parse");
        cfg.validate().expect("example must validate");
        assert_eq!(cfg.baud_rate, 115_200);
        assert_eq!(cfg.poll_interval_secs, 2);
        assert_eq!(cfg.sensor_category, "Temperature");
        assert_eq!(cfg.sensor_label, "CPU Core");
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let cfg: Config = serde_yaml::from_str("serial_port: /dev/ttyACM1\n").unwrap();
        assert_eq!(cfg.serial_port, "/dev/ttyACM1");
        assert_eq!(cfg.baud_rate, 115_200);
        assert_eq!(cfg.sensor_label, "CPU Core");
    }

    #[test]
    fn rejects_empty_port() {
        let mut cfg = Config::default();
        cfg.serial_port = "  ".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_interval() {
        let mut cfg = Config::default();
        cfg.poll_interval_secs = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_low_baud() {
        let mut cfg = Config::default();
        cfg.baud_rate = 300;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_backoff_max_below_initial() {
        let mut cfg = Config::default();
        cfg.reconnect_initial_ms = 2_000;
        cfg.reconnect_max_ms = 1_000;
        assert!(cfg.validate().is_err());
    }
}
