use std::collections::BTreeSet;

use super::{Architecture, Coordinate, Module, Platform};

pub const DEFAULT_VERSION: &str = "#latest#";
pub const DEFAULT_CONFIGURATIONS: [&str; 2] = ["implementation", "testImplementation"];

/// What the build asks for in one reconciliation cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub modules: BTreeSet<Module>,
    pub version: String,
    pub platform: Platform,
    pub architecture: Architecture,
    /// Ordered and without duplicates.
    pub configurations: Vec<String>,
}

impl ResolutionRequest {
    pub fn new(
        modules: impl IntoIterator<Item = Module>,
        version: impl Into<String>,
        platform: Platform,
        architecture: Architecture,
        configurations: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut unique = Vec::new();
        for configuration in configurations {
            if !unique.contains(&configuration) {
                unique.push(configuration);
            }
        }
        ResolutionRequest {
            modules: modules.into_iter().collect(),
            version: version.into(),
            platform,
            architecture,
            configurations: unique,
        }
    }

    pub fn targets(&self, configuration: &str) -> bool {
        self.configurations.iter().any(|c| c == configuration)
    }
}

impl Default for ResolutionRequest {
    fn default() -> Self {
        ResolutionRequest::new(
            [Module::Base],
            DEFAULT_VERSION,
            Platform::current(),
            Architecture::current(),
            DEFAULT_CONFIGURATIONS.map(str::to_owned),
        )
    }
}

/// A named dependency set of the host build and the notations it currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfiguration {
    pub name: String,
    pub dependencies: Vec<Coordinate>,
}

impl BuildConfiguration {
    pub fn new(name: impl Into<String>, dependencies: Vec<Coordinate>) -> Self {
        BuildConfiguration {
            name: name.into(),
            dependencies,
        }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }
}
