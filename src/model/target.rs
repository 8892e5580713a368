use std::{
    convert::Infallible,
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer};

/// Operating system an artifact is built for.
///
/// Names that are not recognized are kept as [`Platform::Unknown`] so that the failure surfaces
/// where a classifier is actually needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Solaris,
    FreeBsd,
    MacOs,
    Windows,
    Unknown(String),
}

impl Platform {
    /// Platform of the host this binary was compiled for.
    pub fn current() -> Self {
        std::env::consts::OS.into()
    }
}

impl From<&str> for Platform {
    fn from(value: &str) -> Self {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "linux" => Platform::Linux,
            "solaris" | "sunos" | "illumos" => Platform::Solaris,
            "freebsd" | "free_bsd" => Platform::FreeBsd,
            "macos" | "mac" | "osx" | "darwin" => Platform::MacOs,
            "windows" | "win" => Platform::Windows,
            _ => Platform::Unknown(value.to_owned()),
        }
    }
}

impl FromStr for Platform {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(value.into())
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Linux => f.write_str("linux"),
            Platform::Solaris => f.write_str("solaris"),
            Platform::FreeBsd => f.write_str("freebsd"),
            Platform::MacOs => f.write_str("macos"),
            Platform::Windows => f.write_str("windows"),
            Platform::Unknown(name) => f.write_str(name),
        }
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(String::deserialize(deserializer)?.as_str().into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Architecture {
    X86,
    X86_64,
    Arm,
    Aarch64,
    Unknown(String),
}

impl Architecture {
    pub fn current() -> Self {
        std::env::consts::ARCH.into()
    }

    pub fn is_arm64(&self) -> bool {
        self == &Architecture::Aarch64
    }
}

impl From<&str> for Architecture {
    fn from(value: &str) -> Self {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "x86" | "i386" | "i586" | "i686" => Architecture::X86,
            "x86_64" | "amd64" | "x64" => Architecture::X86_64,
            "arm" | "armv7" => Architecture::Arm,
            "aarch64" | "arm64" => Architecture::Aarch64,
            _ => Architecture::Unknown(value.to_owned()),
        }
    }
}

impl FromStr for Architecture {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(value.into())
    }
}

impl Display for Architecture {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Architecture::X86 => f.write_str("x86"),
            Architecture::X86_64 => f.write_str("x86_64"),
            Architecture::Arm => f.write_str("arm"),
            Architecture::Aarch64 => f.write_str("aarch64"),
            Architecture::Unknown(name) => f.write_str(name),
        }
    }
}

impl<'de> Deserialize<'de> for Architecture {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(String::deserialize(deserializer)?.as_str().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn parse_platform_aliases() {
        assert_eq!(Platform::from("Darwin"), Platform::MacOs);
        assert_eq!(Platform::from(" WIN "), Platform::Windows);
        assert_eq!(Platform::from("sunos"), Platform::Solaris);
        assert_eq!(
            Platform::from("haiku"),
            Platform::Unknown("haiku".to_owned())
        );
    }

    #[test]
    fn parse_architecture_aliases() {
        assert_eq!(Architecture::from("arm64"), Architecture::Aarch64);
        assert_eq!(Architecture::from("AMD64"), Architecture::X86_64);
        assert!(!Architecture::from("arm").is_arm64());
    }

    #[test]
    fn current_host_is_recognized_on_ci_targets() {
        if cfg!(any(target_os = "linux", target_os = "macos", target_os = "windows")) {
            assert!(!matches!(Platform::current(), Platform::Unknown(_)));
        }
    }
}
