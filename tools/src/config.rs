use regex::Regex;
use serde::Deserialize;
use std::{fs, path::Path};
use tle_types::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file. {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file. {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Satellite configuration contains an invalid 'matches' regex. {0}")]
    Regex(#[from] regex::Error),
    #[error("Satellite configuration entry {0} must contain one of the fields 'id', 'name', or 'matches'")]
    MissingSelector(usize),
}

/// tle-decode configuration
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Label for the configuration, only logged
    pub name: Option<String>,
    /// Single-line JSON output
    pub compact: Option<bool>,
    /// Satellites to keep, all of them when empty
    #[serde(alias = "satellite")]
    pub satellites: Vec<Satellite>,
}

/// Selects records by catalog number, exact name, or a regex over the
/// name and catalog number. The first field present is used.
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Satellite {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub matches: Option<String>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_str_checked(&content)
    }

    pub fn from_str_checked(s: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(s)?;
        cfg.record_filter()?;
        Ok(cfg)
    }

    pub fn compact(&self) -> bool {
        self.compact.unwrap_or(false)
    }

    pub fn record_filter(&self) -> Result<RecordFilter, ConfigError> {
        let selectors = self
            .satellites
            .iter()
            .enumerate()
            .map(|(idx, sat)| sat.selector(idx))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RecordFilter { selectors })
    }
}

impl Satellite {
    fn selector(&self, idx: usize) -> Result<Selector, ConfigError> {
        if let Some(id) = self.id {
            Ok(Selector::Id(id))
        } else if let Some(name) = self.name.as_ref() {
            Ok(Selector::Name(name.trim().to_owned()))
        } else if let Some(regex) = self.matches.as_ref() {
            Ok(Selector::Matches(Regex::new(regex)?))
        } else {
            Err(ConfigError::MissingSelector(idx))
        }
    }
}

#[derive(Clone, Debug)]
enum Selector {
    Id(u32),
    Name(String),
    Matches(Regex),
}

impl Selector {
    fn matches(&self, record: &SatelliteRecord) -> bool {
        match self {
            Selector::Id(id) => *id == record.satellite_catalog_number,
            Selector::Name(name) => *name == record.object_name,
            Selector::Matches(re) => {
                re.is_match(&record.object_name)
                    || re.is_match(&record.satellite_catalog_number.to_string())
            }
        }
    }
}

/// Compiled satellite selection of a [`Config`]
#[derive(Clone, Debug)]
pub struct RecordFilter {
    selectors: Vec<Selector>,
}

impl RecordFilter {
    pub fn matches(&self, record: &SatelliteRecord) -> bool {
        self.selectors.is_empty() || self.selectors.iter().any(|s| s.matches(record))
    }

    pub fn apply(&self, records: Vec<SatelliteRecord>) -> Vec<SatelliteRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}
