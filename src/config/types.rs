use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::load::TransitionPolicy;
use crate::ui::presentation::PercentRounding;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the page behind the splash screen is fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Page to load when none is given on the command line.
    #[serde(default)]
    pub url: Option<String>,
    /// Whole-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Body lines kept for the content surface (default: 200).
    #[serde(default = "default_preview_lines")]
    pub preview_lines: usize,
    /// Delay between scripted events in `--simulate` mode (default: 120).
    #[serde(default = "default_simulate_step_ms")]
    pub simulate_step_ms: u64,
}

/// Splash screen presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Animation tick in milliseconds (default: 80).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub percent_rounding: PercentRounding,
    #[serde(default)]
    pub transitions: TransitionPolicy,
    /// Text drawn as the pulsing logo.
    #[serde(default = "default_logo")]
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; the terminal belongs to the UI.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_user_agent() -> String {
    format!("feathers-splash/{}", env!("CARGO_PKG_VERSION"))
}

fn default_preview_lines() -> usize {
    200
}

fn default_simulate_step_ms() -> u64 {
    120
}

fn default_tick_rate_ms() -> u64 {
    80
}

fn default_logo() -> String {
    "7 FEATHERS".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl LoaderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }

    pub fn simulate_step(&self) -> Duration {
        Duration::from_millis(self.simulate_step_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            user_agent: default_user_agent(),
            preview_lines: default_preview_lines(),
            simulate_step_ms: default_simulate_step_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            percent_rounding: PercentRounding::default(),
            transitions: TransitionPolicy::default(),
            logo: default_logo(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
