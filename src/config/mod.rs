//! Configuration management for the demo binary

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::Level;

/// Environment variable prefix, e.g. `STATUS_RESULT_LOG_LEVEL`
pub const ENV_PREFIX: &str = "STATUS_RESULT";

/// Base name of the optional configuration file
pub const CONFIG_FILE: &str = "status-result";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid log level: {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    /// One walk-through per flag; `true` produces a success
    #[serde(deserialize_with = "deserialize_flags")]
    pub flags: Vec<bool>,
}

// Environment values reach serde as a bare bool (single value, parsed) or a
// list of strings (split on `,`, not parsed); TOML gives bools.
fn deserialize_flags<'de, D>(deserializer: D) -> Result<Vec<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FlagsVisitor)
}

fn parse_flag<E: de::Error>(value: &str, expected: &dyn de::Expected) -> Result<bool, E> {
    value
        .trim()
        .to_lowercase()
        .parse()
        .map_err(|_| E::invalid_value(de::Unexpected::Str(value), expected))
}

struct FlagsVisitor;

impl<'de> Visitor<'de> for FlagsVisitor {
    type Value = Vec<bool>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a flag or a list of flags")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Vec<bool>, E> {
        Ok(vec![value])
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Vec<bool>, E> {
        parse_flag(value, &self).map(|flag| vec![flag])
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec<bool>, A::Error> {
        let mut flags = Vec::new();
        while let Some(Flag(flag)) = seq.next_element()? {
            flags.push(flag);
        }
        Ok(flags)
    }
}

/// One list element, as a bool or its string form
struct Flag(bool);

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FlagVisitor;

        impl<'de> Visitor<'de> for FlagVisitor {
            type Value = Flag;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a boolean flag")
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<Flag, E> {
                Ok(Flag(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Flag, E> {
                parse_flag(value, &self).map(Flag)
            }
        }

        deserializer.deserialize_any(FlagVisitor)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            flags: vec![true, false],
        }
    }
}

impl Config {
    /// Layer defaults, `status-result.toml` and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(::config::Config::try_from(&Config::default())?)
            .add_source(::config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("flags"),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.level()?;
        Ok(config)
    }

    /// Parse a TOML document, filling missing keys with defaults
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(source)?;
        config.level()?;
        Ok(config)
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
