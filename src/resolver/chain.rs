use log::{debug, info, warn};

use crate::{
    cache::ArtifactCache,
    model::{ArtifactCoordinate, VersionSpec},
};

use super::RepositoryResolver;

/// Tries every registered resolver in registration order and caches special case resolutions.
///
/// The cache is owned by the chain and is not synchronized: share a chain between threads only
/// behind a lock.
#[derive(Default)]
pub struct ResolverChain {
    resolvers: Vec<Box<dyn RepositoryResolver + Send>>,
    cache: ArtifactCache,
}

impl ResolverChain {
    pub fn new(cache: ArtifactCache) -> Self {
        ResolverChain {
            resolvers: Vec::new(),
            cache,
        }
    }

    /// Appends a resolver; resolvers registered first take priority.
    pub fn register(&mut self, resolver: impl RepositoryResolver + Send + 'static) -> &mut Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    pub fn register_boxed(&mut self, resolver: Box<dyn RepositoryResolver + Send>) -> &mut Self {
        self.resolvers.push(resolver);
        self
    }

    pub fn with(mut self, resolver: impl RepositoryResolver + Send + 'static) -> Self {
        self.register(resolver);
        self
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    pub fn cache(&self) -> &ArtifactCache {
        &self.cache
    }

    /// Resolves `version` for the artifact. A literal version is its own answer and is returned
    /// without consulting any resolver.
    pub fn resolve(
        &mut self,
        group: &str,
        artifact: &str,
        version: &str,
        classifier: Option<&str>,
    ) -> Option<ArtifactCoordinate> {
        let spec = VersionSpec::parse(version);
        let token = match &spec {
            VersionSpec::Literal(version) => {
                return Some(literal_artifact(group, artifact, version, classifier));
            }
            VersionSpec::SpecialCase(token) => token.clone(),
        };

        if let Some(cached) = self.cache.lookup(&token) {
            debug!("Using cached resolution of {} for {}:{}", spec, group, artifact);
            return Some(cached.clone());
        }

        for resolver in &self.resolvers {
            match resolver.resolve(group, artifact, &spec, classifier) {
                Ok(Some(found)) => {
                    info!("Resolved {} to {} using {}", spec, found.version, resolver.name());
                    self.cache.insert(&token, found.clone());
                    return Some(found);
                }
                Ok(None) => {
                    debug!("{} has no match for {}:{} {}", resolver.name(), group, artifact, spec)
                }
                Err(error) => warn!(
                    "Could not resolve {}:{} {} using {}: {}",
                    group,
                    artifact,
                    spec,
                    resolver.name(),
                    error
                ),
            }
        }
        None
    }
}

fn literal_artifact(
    group: &str,
    artifact: &str,
    version: &str,
    classifier: Option<&str>,
) -> ArtifactCoordinate {
    ArtifactCoordinate {
        id: format!("{}:{}:{}", group, artifact, version),
        group: group.to_owned(),
        artifact: artifact.to_owned(),
        version: version.to_owned(),
        classifiers: classifier.map(str::to_owned).into_iter().collect(),
        ..Default::default()
    }
}
