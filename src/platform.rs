use thiserror::Error;

use crate::model::{Architecture, Platform};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("Platform {platform} ({architecture}) is not supported")]
    UnsupportedPlatform {
        platform: Platform,
        architecture: Architecture,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Unix,
    Mac,
    Windows,
}

impl Family {
    fn of(platform: &Platform) -> Option<Family> {
        match platform {
            Platform::Linux | Platform::Solaris | Platform::FreeBsd => Some(Family::Unix),
            Platform::MacOs => Some(Family::Mac),
            Platform::Windows => Some(Family::Windows),
            Platform::Unknown(_) => None,
        }
    }
}

struct Row {
    family: Family,
    classifier: &'static str,
    classifier_arm64: &'static str,
    archive: &'static str,
    archive_arm64: &'static str,
}

static TABLE: [Row; 3] = [
    Row {
        family: Family::Unix,
        classifier: "linux",
        classifier_arm64: "linux-aarch64",
        archive: "linux-x86_64",
        archive_arm64: "linux-aarch_64",
    },
    Row {
        family: Family::Mac,
        classifier: "mac",
        classifier_arm64: "mac-aarch64",
        archive: "osx-x86_64",
        archive_arm64: "osx-aarch_64",
    },
    // Only x86_64 builds are published for Windows.
    Row {
        family: Family::Windows,
        classifier: "win",
        classifier_arm64: "win",
        archive: "windows-x86_64",
        archive_arm64: "windows-x86_64",
    },
];

/// Maps a target platform to the artifact classifier the repository publishes for it.
pub struct PlatformModifier;

impl PlatformModifier {
    pub fn resolve(
        platform: &Platform,
        architecture: &Architecture,
    ) -> Result<&'static str, PlatformError> {
        let row = Self::row(platform, architecture)?;
        Ok(if architecture.is_arm64() {
            row.classifier_arm64
        } else {
            row.classifier
        })
    }

    /// Suffix used by the downloadable SDK bundles, e.g. `osx-aarch_64`.
    pub fn resolve_archive_suffix(
        platform: &Platform,
        architecture: &Architecture,
    ) -> Result<&'static str, PlatformError> {
        let row = Self::row(platform, architecture)?;
        Ok(if architecture.is_arm64() {
            row.archive_arm64
        } else {
            row.archive
        })
    }

    fn row(platform: &Platform, architecture: &Architecture) -> Result<&'static Row, PlatformError> {
        Family::of(platform)
            .and_then(|family| TABLE.iter().find(|row| row.family == family))
            .ok_or_else(|| PlatformError::UnsupportedPlatform {
                platform: platform.clone(),
                architecture: architecture.clone(),
            })
    }
}
