use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use crate::model::{version::VersionFilter, ArtifactCoordinate, VersionSpec};

use super::{RepositoryResolver, ResolveError};

/// Resolver answering from a fixed candidate list and counting its invocations.
pub struct FakeResolver {
    pub name: &'static str,
    pub versions: Vec<&'static str>,
    pub fail: bool,
    pub calls: Arc<AtomicUsize>,
}

impl FakeResolver {
    pub fn new(name: &'static str, versions: Vec<&'static str>) -> Self {
        FakeResolver {
            name,
            versions,
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(name: &'static str) -> Self {
        FakeResolver {
            fail: true,
            ..Self::new(name, vec![])
        }
    }
}

impl RepositoryResolver for FakeResolver {
    fn name(&self) -> &str {
        self.name
    }

    fn resolve(
        &self,
        group: &str,
        artifact: &str,
        version: &VersionSpec,
        _classifier: Option<&str>,
    ) -> Result<Option<ArtifactCoordinate>, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(serde_json::from_str::<u8>("").unwrap_err().into());
        }
        let filter = VersionFilter::for_spec(version).unwrap();
        Ok(self
            .versions
            .iter()
            .find(|candidate| filter.matches(candidate))
            .map(|candidate| ArtifactCoordinate {
                group: group.to_owned(),
                artifact: artifact.to_owned(),
                version: candidate.to_string(),
                tags: vec![self.name.to_owned()],
                ..Default::default()
            }))
    }
}
