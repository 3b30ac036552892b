//! Application Configuration
//!
//! Configuration for the PoW pipeline. Defaults reproduce the reference run:
//! nickname `zwg`, searches at 4 then 5 zeros, the 4-zero message signed with a
//! 2048-bit key.

use std::str::FromStr;

use platform::rsa::DEFAULT_KEY_BITS;

use crate::domain::value_objects::{Difficulty, Nickname};
use crate::error::{PowError, PowResult};

pub const ENV_NICKNAME: &str = "POW_NICKNAME";
pub const ENV_DIFFICULTIES: &str = "POW_DIFFICULTIES";
pub const ENV_SIGNING_DIFFICULTY: &str = "POW_SIGNING_DIFFICULTY";
pub const ENV_RSA_BITS: &str = "POW_RSA_BITS";
pub const ENV_PROGRESS_INTERVAL: &str = "POW_PROGRESS_INTERVAL";
pub const ENV_MAX_ATTEMPTS: &str = "POW_MAX_ATTEMPTS";
pub const ENV_OUTPUT_FORMAT: &str = "POW_OUTPUT_FORMAT";

/// How the final report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = PowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(PowError::InvalidConfig(format!(
                "{ENV_OUTPUT_FORMAT} must be `text` or `json`, got `{other}`"
            ))),
        }
    }
}

/// PoW application configuration
#[derive(Debug, Clone)]
pub struct PowConfig {
    /// Identity string appended to each nonce
    pub nickname: Nickname,
    /// Searches to run, in order
    pub difficulties: Vec<Difficulty>,
    /// Which search result is signed
    pub signing_difficulty: Difficulty,
    /// RSA modulus size in bits
    pub rsa_bits: usize,
    /// Attempts between progress notifications
    pub progress_interval: u64,
    /// Optional cap on attempts per search
    pub max_attempts: Option<u64>,
    /// Report format
    pub output_format: OutputFormat,
}

impl Default for PowConfig {
    fn default() -> Self {
        Self {
            nickname: Nickname::default(),
            difficulties: vec![Difficulty::clamped(4), Difficulty::clamped(5)],
            signing_difficulty: Difficulty::clamped(4),
            rsa_bits: DEFAULT_KEY_BITS,
            progress_interval: 10_000,
            max_attempts: None,
            output_format: OutputFormat::Text,
        }
    }
}

impl PowConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> PowResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> PowResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_NICKNAME) {
            config.nickname = Nickname::new(raw);
        }
        if let Some(raw) = lookup(ENV_DIFFICULTIES) {
            config.difficulties = raw
                .split(',')
                .map(|part| parse_difficulty(ENV_DIFFICULTIES, part))
                .collect::<PowResult<Vec<_>>>()?;
        }
        if let Some(raw) = lookup(ENV_SIGNING_DIFFICULTY) {
            config.signing_difficulty = parse_difficulty(ENV_SIGNING_DIFFICULTY, &raw)?;
        }
        if let Some(raw) = lookup(ENV_RSA_BITS) {
            config.rsa_bits = parse_number(ENV_RSA_BITS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_PROGRESS_INTERVAL) {
            config.progress_interval = parse_number(ENV_PROGRESS_INTERVAL, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_ATTEMPTS) {
            config.max_attempts = Some(parse_number(ENV_MAX_ATTEMPTS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_OUTPUT_FORMAT) {
            config.output_format = raw.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// The RSA key size is left to the key generation stage, which reports
    /// unsupported sizes itself.
    pub fn validate(&self) -> PowResult<()> {
        if self.difficulties.is_empty() {
            return Err(PowError::InvalidConfig(
                "at least one difficulty is required".to_string(),
            ));
        }
        if !self.difficulties.contains(&self.signing_difficulty) {
            return Err(PowError::InvalidConfig(format!(
                "signing difficulty {} is not among the searched difficulties",
                self.signing_difficulty
            )));
        }
        if self.progress_interval == 0 {
            return Err(PowError::InvalidConfig(
                "progress interval must be positive".to_string(),
            ));
        }
        if self.max_attempts == Some(0) {
            return Err(PowError::InvalidConfig(
                "max attempts must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> PowResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| PowError::InvalidConfig(format!("{key}: `{}` is not valid: {e}", raw.trim())))
}

fn parse_difficulty(key: &str, raw: &str) -> PowResult<Difficulty> {
    let zeros: u8 = parse_number(key, raw)?;
    Difficulty::new(zeros).ok_or_else(|| {
        PowError::InvalidConfig(format!(
            "{key}: difficulty {zeros} exceeds {} hex digits",
            Difficulty::MAX
        ))
    })
}
