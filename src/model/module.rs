use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer};

use super::{split_list, ParseError};

/// Group every module artifact is published under.
pub const ARTIFACT_GROUP: &str = "org.openjfx";

/// A feature module of the framework.
///
/// [`Module::All`] is not a module but a wildcard standing for the whole catalog. It never
/// formats to an artifact; the graph expands it before anything is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Module {
    Base,
    Graphics,
    Controls,
    Fxml,
    Media,
    Swing,
    Web,
    All,
}

impl Module {
    /// Every concrete module, wildcard excluded.
    pub const CATALOG: [Module; 7] = [
        Module::Base,
        Module::Graphics,
        Module::Controls,
        Module::Fxml,
        Module::Media,
        Module::Swing,
        Module::Web,
    ];

    pub fn is_wildcard(self) -> bool {
        self == Module::All
    }

    pub fn id(self) -> &'static str {
        match self {
            Module::Base => "base",
            Module::Graphics => "graphics",
            Module::Controls => "controls",
            Module::Fxml => "fxml",
            Module::Media => "media",
            Module::Swing => "swing",
            Module::Web => "web",
            Module::All => "all",
        }
    }

    /// Artifact name, e.g. `javafx-controls`.
    pub fn artifact_name(self) -> String {
        if self.is_wildcard() {
            return String::new();
        }
        format!("javafx-{}", self.id())
    }

    /// Name used on the module path, e.g. `javafx.controls`.
    pub fn module_name(self) -> String {
        if self.is_wildcard() {
            return String::new();
        }
        format!("javafx.{}", self.id())
    }

    /// `group:artifact`, the base every coordinate of this module is built from.
    pub fn coordinate_base(self) -> String {
        if self.is_wildcard() {
            return String::new();
        }
        format!("{}:{}", ARTIFACT_GROUP, self.artifact_name())
    }

    pub fn coordinate(self, version: &str) -> String {
        if self.is_wildcard() {
            return String::new();
        }
        format!("{}:{}", self.coordinate_base(), version)
    }

    pub fn classified_coordinate(self, version: &str, classifier: &str) -> String {
        if self.is_wildcard() {
            return String::new();
        }
        format!("{}:{}", self.coordinate(version), classifier)
    }

    /// Parses a `;` delimited module list such as `"controls; fxml"`.
    pub fn parse_list(value: &str) -> Result<Vec<Module>, ParseError> {
        split_list(value).map(Module::from_str).collect()
    }
}

impl Display for Module {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Module {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let lower = value.to_ascii_lowercase();
        std::iter::once(Module::All)
            .chain(Module::CATALOG)
            .find(|module| module.id() == lower)
            .ok_or_else(|| ParseError::UnknownModule(value.to_owned()))
    }
}

impl<'de> Deserialize<'de> for Module {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
