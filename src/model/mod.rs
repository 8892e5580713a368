use thiserror::Error;

pub mod artifact;
pub mod module;
pub mod request;
pub mod target;
pub mod version;

pub use artifact::{ArtifactCoordinate, Coordinate};
pub use module::Module;
pub use request::{BuildConfiguration, ResolutionRequest};
pub use target::{Architecture, Platform};
pub use version::VersionSpec;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown module `{0}`")]
    UnknownModule(String),
    #[error("Coordinate `{0}` must have between two and four `:` separated segments")]
    MalformedCoordinate(String),
    #[error("Coordinate `{0}` has an empty segment")]
    EmptyCoordinateSegment(String),
}

/// Splits a `;` delimited list, dropping blank entries.
pub(crate) fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(';').map(str::trim).filter(|item| !item.is_empty())
}
