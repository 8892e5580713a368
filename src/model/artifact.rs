use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::ParseError;

/// An artifact record as published by a package index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactCoordinate {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "g", alias = "group", default)]
    pub group: String,
    #[serde(rename = "a", alias = "artifact", default)]
    pub artifact: String,
    #[serde(rename = "v", alias = "version", default)]
    pub version: String,
    #[serde(rename = "p", alias = "prototype", alias = "packaging", default)]
    pub packaging: String,
    #[serde(rename = "ec", alias = "classifiers", default)]
    pub classifiers: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ArtifactCoordinate {
    pub fn coordinate(&self, classifier: Option<&str>) -> Coordinate {
        Coordinate {
            group: self.group.clone(),
            artifact: self.artifact.clone(),
            version: self.version.clone(),
            classifier: classifier.map(str::to_owned),
        }
    }
}

/// A `group:artifact:version[:classifier]` dependency notation.
///
/// The version is optional only when parsing notations found in an existing build
/// configuration; everything produced by this crate carries one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub classifier: Option<String>,
}

impl Coordinate {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
        classifier: Option<String>,
    ) -> Self {
        Coordinate {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            classifier,
        }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)?;
        if !self.version.is_empty() || self.classifier.is_some() {
            write!(f, ":{}", self.version)?;
        }
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        Ok(())
    }
}

impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let segments = value.trim().split(':').collect::<Vec<_>>();
        let (group, artifact, version, classifier) = match segments.as_slice() {
            [group, artifact] => (*group, *artifact, "", None),
            [group, artifact, version] => (*group, *artifact, *version, None),
            [group, artifact, version, classifier] => {
                (*group, *artifact, *version, Some(*classifier))
            }
            _ => return Err(ParseError::MalformedCoordinate(value.to_owned())),
        };
        if group.is_empty() || artifact.is_empty() || classifier.is_some_and(str::is_empty) {
            return Err(ParseError::EmptyCoordinateSegment(value.to_owned()));
        }
        Ok(Coordinate::new(
            group,
            artifact,
            version,
            classifier.map(str::to_owned),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn format_four_segments() {
        let coordinate = Coordinate::new(
            "org.openjfx",
            "javafx-base",
            "21.0.1",
            Some("linux-aarch64".to_owned()),
        );
        assert_eq!(
            coordinate.to_string(),
            "org.openjfx:javafx-base:21.0.1:linux-aarch64"
        );
        assert_eq!(coordinate.to_string().parse::<Coordinate>().unwrap(), coordinate);
    }

    #[test]
    fn parse_without_version() {
        let coordinate = "org.slf4j:slf4j-api".parse::<Coordinate>().unwrap();
        assert_eq!(coordinate.group, "org.slf4j");
        assert_eq!(coordinate.version, "");
        assert_eq!(coordinate.to_string(), "org.slf4j:slf4j-api");
    }

    #[test]
    fn parse_malformed() {
        assert_eq!(
            "org.openjfx".parse::<Coordinate>(),
            Err(ParseError::MalformedCoordinate("org.openjfx".to_owned()))
        );
        assert_eq!(
            ":javafx-base:21".parse::<Coordinate>(),
            Err(ParseError::EmptyCoordinateSegment(":javafx-base:21".to_owned()))
        );
    }

    #[test]
    fn deserialize_index_record_with_aliases() {
        let short = r#"{"id":"org.openjfx:javafx-base:21.0.1","g":"org.openjfx","a":"javafx-base","v":"21.0.1","p":"jar","ec":["-linux.jar",".pom"],"tags":["javafx"]}"#;
        let long = r#"{"id":"org.openjfx:javafx-base:21.0.1","group":"org.openjfx","artifact":"javafx-base","version":"21.0.1","prototype":"jar","classifiers":["-linux.jar",".pom"],"tags":["javafx"]}"#;
        let short = serde_json::from_str::<ArtifactCoordinate>(short).unwrap();
        let long = serde_json::from_str::<ArtifactCoordinate>(long).unwrap();
        assert_eq!(short, long);
        assert_eq!(short.version, "21.0.1");
        assert_eq!(short.classifiers, vec!["-linux.jar", ".pom"]);
    }
}
