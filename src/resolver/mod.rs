mod chain;
#[cfg(test)]
pub(crate) mod fake;
mod remote;

use thiserror::Error;

use crate::model::{ArtifactCoordinate, VersionSpec};

pub use chain::ResolverChain;
pub use remote::{IndexSettings, RemoteIndexResolver, DEFAULT_ENDPOINT};

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Error while decoding index response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Special case `{token}` is not a valid pattern: {source}")]
    InvalidPattern {
        token: String,
        #[source]
        source: regex_lite::Error,
    },
}

/// Resolves a version request into one concrete artifact published by a backing index.
///
/// `Ok(None)` means nothing matched. Errors are failures to ask the index at all.
pub trait RepositoryResolver {
    fn name(&self) -> &str;

    fn resolve(
        &self,
        group: &str,
        artifact: &str,
        version: &VersionSpec,
        classifier: Option<&str>,
    ) -> Result<Option<ArtifactCoordinate>, ResolveError>;
}
