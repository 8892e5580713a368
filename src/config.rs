use std::{collections::HashMap, path::Path, time::Duration};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    model::{
        request::{DEFAULT_CONFIGURATIONS, DEFAULT_VERSION},
        split_list, Architecture, Module, ParseError, Platform, ResolutionRequest,
    },
    resolver::IndexSettings,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error while loading configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Parse(#[from] ParseError),
}

/// Effective settings after layering the configuration file and the environment over the
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FxResolveConfig {
    pub modules: Vec<Module>,
    pub version: String,
    pub platform: Platform,
    pub architecture: Architecture,
    pub configurations: Vec<String>,
    pub index: IndexSettings,
}

impl FxResolveConfig {
    /// Loads `file` when it exists, then `FXRESOLVE_*` environment variables.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        RawConfig::load(file, None)?.try_into()
    }

    pub fn request(&self) -> ResolutionRequest {
        ResolutionRequest::new(
            self.modules.iter().copied(),
            self.version.clone(),
            self.platform.clone(),
            self.architecture.clone(),
            self.configurations.iter().cloned(),
        )
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
enum ListValue {
    Delimited(String),
    Items(Vec<String>),
}

impl ListValue {
    fn items(&self) -> Vec<String> {
        match self {
            ListValue::Delimited(value) => split_list(value).map(str::to_owned).collect(),
            ListValue::Items(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct RawConfig {
    modules: Option<ListValue>,
    version: Option<String>,
    platform: Option<Platform>,
    architecture: Option<Architecture>,
    configurations: Option<ListValue>,
    #[serde(default)]
    index: IndexConfig,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct IndexConfig {
    endpoint: Option<String>,
    rows: Option<u32>,
    /// Connect timeout in seconds.
    timeout: Option<u64>,
}

impl RawConfig {
    fn load(
        file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(File::from(file).format(FileFormat::Toml).required(false));
        }
        builder
            .add_source(
                Environment::with_prefix("FXRESOLVE")
                    .separator("_")
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }
}

impl TryFrom<RawConfig> for FxResolveConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let modules = match raw.modules {
            Some(modules) => modules
                .items()
                .iter()
                .map(|module| module.parse())
                .collect::<Result<Vec<Module>, ParseError>>()?,
            None => vec![Module::Base],
        };
        let configurations = match raw.configurations {
            Some(configurations) => configurations.items(),
            None => DEFAULT_CONFIGURATIONS.map(str::to_owned).to_vec(),
        };
        let defaults = IndexSettings::default();
        Ok(FxResolveConfig {
            modules,
            version: raw.version.unwrap_or_else(|| DEFAULT_VERSION.to_owned()),
            platform: raw.platform.unwrap_or_else(Platform::current),
            architecture: raw.architecture.unwrap_or_else(Architecture::current),
            configurations,
            index: IndexSettings {
                endpoint: raw.index.endpoint.unwrap_or(defaults.endpoint),
                rows: raw.index.rows.unwrap_or(defaults.rows),
                connect_timeout: raw
                    .index
                    .timeout
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.connect_timeout),
            },
        })
    }
}
