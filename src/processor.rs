use log::{debug, info};
use thiserror::Error;

use crate::{
    graph::ModuleGraph,
    model::{module::ARTIFACT_GROUP, BuildConfiguration, Coordinate, ResolutionRequest, VersionSpec},
    platform::{PlatformError, PlatformModifier},
    resolver::ResolverChain,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReconcileError {
    #[error(transparent)]
    UnsupportedPlatform(#[from] PlatformError),
    #[error("Cannot resolve version {version} of {artifact}")]
    CannotResolveVersion { artifact: String, version: String },
}

/// A dependency to attach to, or detach from, a named build configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationChange {
    pub configuration: String,
    pub coordinate: Coordinate,
}

impl ConfigurationChange {
    fn new(configuration: &str, coordinate: Coordinate) -> Self {
        ConfigurationChange {
            configuration: configuration.to_owned(),
            coordinate,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub to_add: Vec<ConfigurationChange>,
    pub to_remove: Vec<ConfigurationChange>,
}

/// Turns a [`ResolutionRequest`] into the dependency changes the host build has to apply.
///
/// Every call recomputes everything from the request; callers re-run it whenever any part of
/// the request changes.
pub struct DependencyProcessor {
    graph: ModuleGraph,
    chain: ResolverChain,
    group: String,
}

impl DependencyProcessor {
    pub fn new(chain: ResolverChain) -> Self {
        DependencyProcessor {
            graph: ModuleGraph::new(),
            chain,
            group: ARTIFACT_GROUP.to_owned(),
        }
    }

    pub fn graph(&self) -> &ModuleGraph {
        &self.graph
    }

    pub fn reconcile(
        &mut self,
        request: &ResolutionRequest,
        configurations: &[BuildConfiguration],
    ) -> Result<Reconciliation, ReconcileError> {
        let mut reconciliation = Reconciliation {
            to_remove: self.stale_dependencies(request, configurations),
            ..Default::default()
        };

        if request.modules.is_empty() {
            debug!("No modules selected, nothing to add");
            return Ok(reconciliation);
        }

        let coordinates = self.resolve_coordinates(request)?;
        for name in &request.configurations {
            if !configurations.iter().any(|c| &c.name == name) {
                debug!("Configuration {} does not exist, skipping", name);
                continue;
            }
            reconciliation.to_add.extend(
                coordinates
                    .iter()
                    .map(|coordinate| ConfigurationChange::new(name, coordinate.clone())),
            );
        }
        Ok(reconciliation)
    }

    /// Fully qualified coordinates of every module the request needs.
    pub fn resolve_coordinates(
        &mut self,
        request: &ResolutionRequest,
    ) -> Result<Vec<Coordinate>, ReconcileError> {
        let modules = self.graph.resolve_closure(&request.modules);
        let Some(representative) = modules.first().copied() else {
            return Ok(Vec::new());
        };
        let classifier = PlatformModifier::resolve(&request.platform, &request.architecture)?;

        // Releases publish every module in lockstep, one lookup is enough.
        let version = match VersionSpec::parse(&request.version) {
            VersionSpec::Literal(version) => version,
            VersionSpec::SpecialCase(_) => {
                let artifact = representative.artifact_name();
                self.chain
                    .resolve(&self.group, &artifact, &request.version, None)
                    .ok_or_else(|| ReconcileError::CannotResolveVersion {
                        artifact,
                        version: request.version.clone(),
                    })?
                    .version
            }
        };
        info!(
            "Using version {} ({}) for {} modules",
            version,
            classifier,
            modules.len()
        );

        Ok(modules
            .into_iter()
            .map(|module| {
                Coordinate::new(
                    self.group.as_str(),
                    module.artifact_name(),
                    version.as_str(),
                    Some(classifier.to_owned()),
                )
            })
            .collect())
    }

    fn stale_dependencies(
        &self,
        request: &ResolutionRequest,
        configurations: &[BuildConfiguration],
    ) -> Vec<ConfigurationChange> {
        configurations
            .iter()
            .filter(|configuration| !request.targets(&configuration.name))
            .flat_map(|configuration| {
                configuration
                    .dependencies
                    .iter()
                    .filter(|dependency| dependency.group == self.group)
                    .map(|dependency| ConfigurationChange::new(&configuration.name, dependency.clone()))
            })
            .collect()
    }
}
