use std::collections::BTreeSet;

use crate::{
    model::{Architecture, BuildConfiguration, Coordinate, Module, Platform, ResolutionRequest},
    platform::{PlatformError, PlatformModifier},
    processor::{DependencyProcessor, ReconcileError, Reconciliation},
};

mod builder;

pub use builder::{BuildError, FxResolveBuilder};

pub struct FxResolve {
    processor: DependencyProcessor,
}

impl FxResolve {
    pub fn builder() -> FxResolveBuilder {
        FxResolveBuilder::default()
    }

    /// Computes the dependency changes needed to bring `configurations` in line with `request`.
    pub fn reconcile(
        &mut self,
        request: &ResolutionRequest,
        configurations: &[BuildConfiguration],
    ) -> Result<Reconciliation, ReconcileError> {
        self.processor.reconcile(request, configurations)
    }

    /// Fully qualified coordinates for the request, one per module of the closure.
    pub fn coordinates(&mut self, request: &ResolutionRequest) -> Result<Vec<Coordinate>, ReconcileError> {
        self.processor.resolve_coordinates(request)
    }

    pub fn closure(&self, modules: &[Module]) -> BTreeSet<Module> {
        self.processor.graph().resolve_closure(modules)
    }

    pub fn classifier(
        platform: &Platform,
        architecture: &Architecture,
    ) -> Result<&'static str, PlatformError> {
        PlatformModifier::resolve(platform, architecture)
    }

    pub fn archive_suffix(
        platform: &Platform,
        architecture: &Architecture,
    ) -> Result<&'static str, PlatformError> {
        PlatformModifier::resolve_archive_suffix(platform, architecture)
    }
}
