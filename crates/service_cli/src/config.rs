//! CLI configuration management
//!
//! Settings come from, lowest to highest priority: defaults, a TOML file,
//! environment variables (`BITGEN_SEED`, `BITGEN_STATE`), then command-line
//! flags.

use std::path::Path;
use std::str::FromStr;

use bitgen_core::{Xoroshiro128, Xoroshiro128State};
use bitgen_legacy::LegacyDistribution;
use rand_core::SeedableRng;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Default seed when neither a seed nor a state is given.
pub const DEFAULT_SEED: u64 = 12345;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid count: {0}. Must be at least 1")]
    InvalidCount(usize),

    #[error("Invalid chunk length: {0}. Must be at least 1")]
    InvalidChunkLength(usize),

    #[error("Invalid precision: {0}. Must be between 1 and 17")]
    InvalidPrecision(usize),

    #[error("Invalid output format: {0}. Must be one of: text, json")]
    InvalidFormat(String),

    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Output formats for sampled values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Text,
    /// A single JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// 64-bit seed expanded by SplitMix64
    pub seed: u64,
    /// Explicit generator state `s0:s1`, overriding `seed`
    pub state: Option<String>,
    /// Number of values per command
    pub count: usize,
    /// Values per stream in parallel fills
    pub chunk_len: usize,
    /// Significant digits in text output
    pub precision: usize,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Default distribution for `sample` and `summary`
    #[serde(deserialize_with = "deserialize_distribution")]
    pub distribution: LegacyDistribution,
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_distribution<'de, D>(deserializer: D) -> Result<LegacyDistribution, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LegacyDistribution::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            state: None,
            count: 10,
            chunk_len: 4096,
            precision: 17,
            format: OutputFormat::Text,
            distribution: LegacyDistribution::StandardNormal,
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads the file at `path` if it exists, otherwise starts from defaults,
    /// then applies environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            debug!(path = %path.display(), "loading configuration file");
            Self::from_file(path)?
        } else {
            debug!(path = %path.display(), "configuration file not found, using defaults");
            Self::default()
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `BITGEN_SEED` and `BITGEN_STATE` if set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_values(
            std::env::var("BITGEN_SEED").ok().as_deref(),
            std::env::var("BITGEN_STATE").ok().as_deref(),
        )
    }

    /// Applies environment values: a seed replaces any file state, and a
    /// state, applied last, wins over both.
    fn apply_env_values(&mut self, seed: Option<&str>, state: Option<&str>) -> Result<(), ConfigError> {
        if let Some(seed) = seed {
            self.seed = parse_seed(seed)
                .map_err(|_| ConfigError::EnvError(format!("BITGEN_SEED '{}' is not a u64", seed)))?;
            self.state = None;
        }
        if let Some(state) = state {
            self.state = Some(state.to_string());
        }
        Ok(())
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidCount(self.count));
        }
        if self.chunk_len == 0 {
            return Err(ConfigError::InvalidChunkLength(self.chunk_len));
        }
        if self.precision == 0 || self.precision > 17 {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        if let Some(state) = &self.state {
            parse_state(state)?;
        }
        self.distribution
            .validate()
            .map_err(|e| ConfigError::InvalidDistribution(e.to_string()))?;
        Ok(())
    }

    /// Builds the generator described by `state`, or by `seed` if unset.
    pub fn generator(&self) -> Result<Xoroshiro128, ConfigError> {
        match &self.state {
            Some(state) => parse_state(state),
            None => Ok(Xoroshiro128::seed_from_u64(self.seed)),
        }
    }

    /// Merges command-line overrides (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(seed) = cli.seed {
            self.seed = seed;
            self.state = None;
        }
        if let Some(state) = &cli.state {
            self.state = Some(state.clone());
        }
        if let Some(count) = cli.count {
            self.count = count;
        }
        if let Some(chunk_len) = cli.chunk_len {
            self.chunk_len = chunk_len;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
    }
}

/// Command-line overrides shared by every command
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Seed override
    pub seed: Option<u64>,
    /// State override
    pub state: Option<String>,
    /// Count override
    pub count: Option<usize>,
    /// Chunk length override
    pub chunk_len: Option<usize>,
    /// Output format override
    pub format: Option<OutputFormat>,
}

/// Builds configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(path: &Path, cli: &CliOverrides) -> Result<CliConfig, ConfigError> {
    let mut config = CliConfig::load(path)?;
    config.merge_with_cli(cli);
    config.validate()?;
    Ok(config)
}

/// Parses a decimal or `0x`-prefixed hexadecimal seed.
pub fn parse_seed(s: &str) -> Result<u64, std::num::ParseIntError> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    }
}

fn parse_state(s: &str) -> Result<Xoroshiro128, ConfigError> {
    let state = Xoroshiro128State::from_str(s).map_err(|e| ConfigError::InvalidState(e.to_string()))?;
    Xoroshiro128::try_from(state).map_err(|e| ConfigError::InvalidState(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.state, None);
        assert_eq!(config.count, 10);
        assert_eq!(config.chunk_len, 4096);
        assert_eq!(config.precision, 17);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.distribution, LegacyDistribution::StandardNormal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("TEXT").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("csv").is_err());
    }

    #[test]
    fn test_toml_parsing() {
        let config: CliConfig = toml::from_str(
            r#"
            seed = 42
            count = 100
            distribution = "gamma:2.5,1.5"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.count, 100);
        assert_eq!(config.chunk_len, 4096);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(
            config.distribution,
            LegacyDistribution::Gamma { shape: 2.5, scale: 1.5 }
        );
    }

    #[test]
    fn test_toml_rejects_unknown_distribution() {
        let result: Result<CliConfig, _> = toml::from_str(r#"distribution = "zipf:2""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation() {
        let config = CliConfig { count: 0, ..CliConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCount(0))));

        let config = CliConfig { precision: 18, ..CliConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPrecision(18))));

        let config = CliConfig {
            state: Some("0:0".to_string()),
            ..CliConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidState(_))));

        let config = CliConfig {
            distribution: LegacyDistribution::Beta { a: 1.0, b: -1.0 },
            ..CliConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDistribution(_))));
    }

    #[test]
    fn test_generator_from_state_or_seed() {
        let config = CliConfig {
            state: Some("0x1:0x2".to_string()),
            ..CliConfig::default()
        };
        assert_eq!(config.generator().unwrap().state(), Xoroshiro128State::new(1, 2));

        let config = CliConfig { seed: 42, ..CliConfig::default() };
        assert_eq!(config.generator().unwrap(), Xoroshiro128::seed_from_u64(42));
    }

    #[test]
    fn test_cli_seed_overrides_file_state() {
        let mut config = CliConfig {
            state: Some("0x1:0x2".to_string()),
            ..CliConfig::default()
        };
        config.merge_with_cli(&CliOverrides {
            seed: Some(7),
            count: Some(3),
            ..CliOverrides::default()
        });
        assert_eq!(config.state, None);
        assert_eq!(config.seed, 7);
        assert_eq!(config.count, 3);
    }

    #[test]
    fn test_env_seed_overrides_file_state() {
        let path = std::env::temp_dir().join(format!("bitgen-env-seed-{}.toml", std::process::id()));
        std::fs::write(&path, "state = \"0x1:0x2\"\n").unwrap();
        let mut config = CliConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.state.as_deref(), Some("0x1:0x2"));

        config.apply_env_values(Some("5"), None).unwrap();
        assert_eq!(config.seed, 5);
        assert_eq!(config.state, None);
        assert_eq!(config.generator().unwrap(), Xoroshiro128::seed_from_u64(5));
    }

    #[test]
    fn test_env_state_wins_over_env_seed() {
        let mut config = CliConfig::default();
        config.apply_env_values(Some("5"), Some("0x3:0x4")).unwrap();
        assert_eq!(config.seed, 5);
        assert_eq!(config.generator().unwrap().state(), Xoroshiro128State::new(3, 4));
    }

    #[test]
    fn test_env_seed_must_be_numeric() {
        let mut config = CliConfig::default();
        let err = config.apply_env_values(Some("five"), None).unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(_)));
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("42").unwrap(), 42);
        assert_eq!(parse_seed("0xff").unwrap(), 255);
        assert!(parse_seed("-1").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        if std::env::var_os("BITGEN_SEED").is_some() || std::env::var_os("BITGEN_STATE").is_some() {
            return;
        }
        let path = Path::new("definitely-not-here-bitgen.toml");
        assert_eq!(CliConfig::load(path).unwrap(), CliConfig::default());
    }

    proptest! {
        #[test]
        fn prop_seed_parses_decimal_and_hex(seed in any::<u64>()) {
            prop_assert_eq!(parse_seed(&seed.to_string()).unwrap(), seed);
            prop_assert_eq!(parse_seed(&format!("{:#x}", seed)).unwrap(), seed);
        }

        #[test]
        fn prop_state_text_builds_same_generator(s0 in any::<u64>(), s1 in 1u64..) {
            let text = Xoroshiro128State::new(s0, s1).to_string();
            let config = CliConfig { state: Some(text), ..CliConfig::default() };
            prop_assert_eq!(config.generator().unwrap().state(), Xoroshiro128State::new(s0, s1));
        }
    }
}
