use std::time::Duration;

use thiserror::Error;

use crate::{
    cache::{ArtifactCache, DEFAULT_CAPACITY},
    processor::DependencyProcessor,
    resolver::{IndexSettings, RemoteIndexResolver, RepositoryResolver, ResolveError, ResolverChain},
    FxResolve,
};

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Could not create the index client: {0}")]
    Client(#[from] ResolveError),
}

pub struct FxResolveBuilder {
    index: IndexSettings,
    cache_capacity: usize,
    mirrors: Vec<IndexSettings>,
    resolvers: Vec<Box<dyn RepositoryResolver + Send>>,
    remote: bool,
}

impl Default for FxResolveBuilder {
    fn default() -> Self {
        FxResolveBuilder {
            index: IndexSettings::default(),
            cache_capacity: DEFAULT_CAPACITY,
            mirrors: Vec::new(),
            resolvers: Vec::new(),
            remote: true,
        }
    }
}

impl FxResolveBuilder {
    /// Settings of the primary search index.
    ///
    /// Defaults to Maven Central.
    pub fn index(mut self, settings: IndexSettings) -> Self {
        self.index = settings;
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.index.endpoint = endpoint.into();
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.index.rows = rows;
        self
    }

    /// Defaults to 10 seconds.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.index.connect_timeout = timeout;
        self
    }

    /// Additional search index tried when the ones before it find nothing.
    pub fn mirror(mut self, settings: IndexSettings) -> Self {
        self.mirrors.push(settings);
        self
    }

    /// Custom resolver tried after the search indexes.
    pub fn resolver(mut self, resolver: impl RepositoryResolver + Send + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Skip the search indexes and only use the resolvers registered with
    /// [`FxResolveBuilder::resolver`].
    pub fn offline(mut self) -> Self {
        self.remote = false;
        self
    }

    /// Maximum number of special case resolutions kept in memory.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn try_build(self) -> Result<FxResolve, BuildError> {
        let Self {
            index,
            cache_capacity,
            mirrors,
            resolvers,
            remote,
        } = self;

        let mut chain = ResolverChain::new(ArtifactCache::with_capacity(cache_capacity));
        if remote {
            for settings in std::iter::once(index).chain(mirrors) {
                chain.register(RemoteIndexResolver::new(settings)?);
            }
        }
        for resolver in resolvers {
            chain.register_boxed(resolver);
        }

        Ok(FxResolve {
            processor: DependencyProcessor::new(chain),
        })
    }
}
