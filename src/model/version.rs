use std::{
    fmt::{Display, Formatter},
    sync::OnceLock,
};

use regex_lite::Regex;

/// A requested version: either the literal version to use or a symbolic special case
/// written between `#` delimiters, e.g. `#latest#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionSpec {
    Literal(String),
    SpecialCase(String),
}

fn special_case_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("#(.+)#").expect("special case pattern is valid"))
}

impl VersionSpec {
    pub fn parse(raw: &str) -> VersionSpec {
        match special_case_pattern().captures(raw) {
            Some(captures) => VersionSpec::SpecialCase(captures[1].trim().to_owned()),
            None => VersionSpec::Literal(raw.to_owned()),
        }
    }

    pub fn is_special_case(&self) -> bool {
        matches!(self, VersionSpec::SpecialCase(_))
    }

    /// The special case token, or an empty string for a literal version.
    pub fn token(&self) -> &str {
        match self {
            VersionSpec::Literal(_) => "",
            VersionSpec::SpecialCase(token) => token,
        }
    }

    pub fn literal(&self) -> Option<&str> {
        match self {
            VersionSpec::Literal(version) => Some(version),
            VersionSpec::SpecialCase(_) => None,
        }
    }
}

impl Display for VersionSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionSpec::Literal(version) => f.write_str(version),
            VersionSpec::SpecialCase(token) => write!(f, "#{}#", token),
        }
    }
}

/// How the candidates returned for a special case are filtered.
#[derive(Debug, Clone)]
pub enum VersionFilter {
    /// No special case: the first candidate wins.
    Any,
    /// Numeric dotted versions only, e.g. `21.0.1`.
    Latest,
    /// Early access builds, e.g. `22-ea+27`.
    Early,
    /// A user supplied regular expression matched anywhere in the version.
    Pattern(Regex),
}

const LATEST_PATTERN: &str = r"^(\d+\.)*(\*|\d+)$";
const EARLY_PATTERN: &str = r"^(\d+\.)*(\d+-ea\+\d+)$";

impl VersionFilter {
    pub fn from_token(token: &str) -> Result<VersionFilter, regex_lite::Error> {
        Ok(match token.trim() {
            "" => VersionFilter::Any,
            "latest" => VersionFilter::Latest,
            "early" => VersionFilter::Early,
            other => VersionFilter::Pattern(Regex::new(other)?),
        })
    }

    pub fn for_spec(spec: &VersionSpec) -> Result<VersionFilter, regex_lite::Error> {
        Self::from_token(spec.token())
    }

    pub fn matches(&self, version: &str) -> bool {
        static LATEST: OnceLock<Regex> = OnceLock::new();
        static EARLY: OnceLock<Regex> = OnceLock::new();
        match self {
            VersionFilter::Any => true,
            VersionFilter::Latest => LATEST
                .get_or_init(|| Regex::new(LATEST_PATTERN).expect("latest pattern is valid"))
                .is_match(version),
            VersionFilter::Early => EARLY
                .get_or_init(|| Regex::new(EARLY_PATTERN).expect("early pattern is valid"))
                .is_match(version),
            VersionFilter::Pattern(pattern) => pattern.is_match(version),
        }
    }
}
