use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

const MAX_DELAY_MS: u64 = 10_000;
const MAX_JITTER_MS: u64 = 1_000;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Simulated network latency, in milliseconds per operation weight.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LatencyConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_lookup_ms")]
    pub lookup_ms: u64,
    #[serde(default = "default_light_ms")]
    pub light_ms: u64,
    #[serde(default = "default_search_ms")]
    pub search_ms: u64,
    #[serde(default = "default_standard_ms")]
    pub standard_ms: u64,
    #[serde(default = "default_heavy_ms")]
    pub heavy_ms: u64,
    #[serde(default)]
    pub jitter_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            lookup_ms: default_lookup_ms(),
            light_ms: default_light_ms(),
            search_ms: default_search_ms(),
            standard_ms: default_standard_ms(),
            heavy_ms: default_heavy_ms(),
            jitter_ms: 0,
        }
    }
}

impl LatencyConfig {
    /// All delays zeroed; used by tests and batch tooling.
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }
}

fn default_enabled() -> bool { true }
fn default_lookup_ms() -> u64 { 150 }
fn default_light_ms() -> u64 { 200 }
fn default_search_ms() -> u64 { 250 }
fn default_standard_ms() -> u64 { 300 }
fn default_heavy_ms() -> u64 { 400 }

/// Where seed records come from. `dir = None` uses the built-in dataset.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct SeedConfig {
    #[serde(default)]
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_log_format() -> String { "compact".to_string() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_str(&content)
}

pub fn parse_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.seed.normalize();
        self.logging.normalize();
        self.latency.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl SeedConfig {
    fn normalize(&mut self) {
        // 空字符串视为未配置，回退到内置数据
        if self.dir.as_deref().is_some_and(|d| d.trim().is_empty()) {
            self.dir = None;
        }
    }
}

impl LatencyConfig {
    pub fn validate(&self) -> Result<()> {
        let delays = [
            ("lookup_ms", self.lookup_ms),
            ("light_ms", self.light_ms),
            ("search_ms", self.search_ms),
            ("standard_ms", self.standard_ms),
            ("heavy_ms", self.heavy_ms),
        ];
        for (name, value) in delays {
            if value > MAX_DELAY_MS {
                return Err(anyhow!("latency.{name} must be <= {MAX_DELAY_MS}"));
            }
        }
        if self.jitter_ms > MAX_JITTER_MS {
            return Err(anyhow!("latency.jitter_ms must be <= {MAX_JITTER_MS}"));
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        self.format = self.format.trim().to_ascii_lowercase();
        if self.format.is_empty() {
            self.format = default_log_format();
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.format.as_str() {
            "compact" | "json" => Ok(()),
            other => Err(anyhow!("logging.format must be compact or json, got {other}")),
        }
    }
}
