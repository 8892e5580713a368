use std::time::Duration;

use log::{debug, trace};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::model::{version::VersionFilter, ArtifactCoordinate, VersionSpec};

use super::{RepositoryResolver, ResolveError};

pub const DEFAULT_ENDPOINT: &str = "https://search.maven.org/solrsearch/select";
const DEFAULT_ROWS: u32 = 20;
const CONNECT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("fxresolve/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSettings {
    /// Search endpoint, queried with `q`, `core`, `rows` and `wt` parameters.
    pub endpoint: String,
    /// Maximum number of candidates requested per query.
    pub rows: u32,
    pub connect_timeout: Duration,
}

impl Default for IndexSettings {
    fn default() -> Self {
        IndexSettings {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            rows: DEFAULT_ROWS,
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ResponseHeader {
    #[serde(default)]
    status: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchContent {
    #[serde(rename = "numFound", alias = "found", default)]
    found: u64,
    #[serde(alias = "artifacts", alias = "content", default)]
    docs: Vec<ArtifactCoordinate>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    status: Option<i64>,
    #[serde(rename = "responseHeader", default)]
    header: Option<ResponseHeader>,
    #[serde(default)]
    response: SearchContent,
}

impl SearchResponse {
    fn status(&self) -> Option<i64> {
        self.status
            .or_else(|| self.header.as_ref().and_then(|header| header.status))
    }
}

/// Resolver backed by a Solr style artifact search API such as the one of Maven Central.
pub struct RemoteIndexResolver {
    client: Client,
    settings: IndexSettings,
}

impl RemoteIndexResolver {
    pub fn new(settings: IndexSettings) -> Result<Self, ResolveError> {
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(client, settings))
    }

    pub fn with_client(client: Client, settings: IndexSettings) -> Self {
        RemoteIndexResolver { client, settings }
    }

    /// Search expression for the index. Special cases cannot be filtered by the index, so the
    /// version clause is only present for literal versions.
    pub fn query(
        group: &str,
        artifact: &str,
        version: &VersionSpec,
        classifier: Option<&str>,
    ) -> String {
        let mut query = format!("g:{} AND a:{}", group, artifact);
        if let Some(version) = version.literal() {
            query.push_str(&format!(" AND v:{}", version));
        }
        if let Some(classifier) = classifier {
            query.push_str(&format!(" AND l:{}", classifier));
        }
        query
    }

    fn search(&self, query: &str) -> Result<Option<Vec<ArtifactCoordinate>>, ResolveError> {
        trace!("Querying {} with `{}`", self.settings.endpoint, query);
        let rows = self.settings.rows.to_string();
        let response = self
            .client
            .get(&self.settings.endpoint)
            .query(&[("q", query), ("core", "gav"), ("rows", rows.as_str()), ("wt", "json")])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            debug!("Index responded with {} to `{}`", status, query);
            return Ok(None);
        }

        let body = serde_json::from_str::<SearchResponse>(&response.text()?)?;
        trace!(
            "Index status {:?}, {} artifacts found",
            body.status(),
            body.response.found
        );
        if body.response.docs.is_empty() {
            return Ok(None);
        }
        Ok(Some(body.response.docs))
    }
}

impl RepositoryResolver for RemoteIndexResolver {
    fn name(&self) -> &str {
        &self.settings.endpoint
    }

    fn resolve(
        &self,
        group: &str,
        artifact: &str,
        version: &VersionSpec,
        classifier: Option<&str>,
    ) -> Result<Option<ArtifactCoordinate>, ResolveError> {
        let filter =
            VersionFilter::for_spec(version).map_err(|source| ResolveError::InvalidPattern {
                token: version.token().to_owned(),
                source,
            })?;

        let query = Self::query(group, artifact, version, classifier);
        let Some(candidates) = self.search(&query)? else {
            debug!("No artifacts found for `{}`", query);
            return Ok(None);
        };

        // Candidates keep the relevance order of the index.
        let found = candidates
            .into_iter()
            .find(|candidate| filter.matches(&candidate.version));
        if found.is_none() {
            debug!("No artifact version matches {} for `{}`", version, query);
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mockito::{Matcher, Server, ServerGuard};
    use pretty_assertions::assert_eq;

    fn resolver(server: &ServerGuard) -> RemoteIndexResolver {
        RemoteIndexResolver::new(IndexSettings {
            endpoint: format!("{}/solrsearch/select", server.url()),
            ..Default::default()
        })
        .unwrap()
    }

    fn body(versions: &[&str]) -> String {
        let docs = versions
            .iter()
            .map(|version| {
                serde_json::json!({
                    "id": format!("org.openjfx:javafx-base:{}", version),
                    "g": "org.openjfx",
                    "a": "javafx-base",
                    "v": version,
                    "p": "jar",
                    "ec": ["-linux.jar", ".pom"],
                    "tags": ["javafx"],
                })
            })
            .collect::<Vec<_>>();
        serde_json::json!({
            "responseHeader": { "status": 0 },
            "response": { "numFound": docs.len(), "start": 0, "docs": docs },
        })
        .to_string()
    }

    fn special(token: &str) -> VersionSpec {
        VersionSpec::SpecialCase(token.to_owned())
    }

    #[test]
    fn build_query() {
        assert_eq!(
            RemoteIndexResolver::query(
                "org.openjfx",
                "javafx-base",
                &VersionSpec::Literal("21.0.1".to_owned()),
                Some("linux")
            ),
            "g:org.openjfx AND a:javafx-base AND v:21.0.1 AND l:linux"
        );
        assert_eq!(
            RemoteIndexResolver::query("org.openjfx", "javafx-base", &special("latest"), None),
            "g:org.openjfx AND a:javafx-base"
        );
    }

    #[test]
    fn latest_skips_early_access() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "g:org.openjfx AND a:javafx-base".into()),
                Matcher::UrlEncoded("core".into(), "gav".into()),
                Matcher::UrlEncoded("rows".into(), "20".into()),
                Matcher::UrlEncoded("wt".into(), "json".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body(&["21.0.1-ea+3", "21.0.1", "21"]))
            .create();

        let found = resolver(&server)
            .resolve("org.openjfx", "javafx-base", &special("latest"), None)
            .unwrap()
            .unwrap();
        assert_eq!(found.version, "21.0.1");
        assert_eq!(found.packaging, "jar");
        mock.assert();
    }

    #[test]
    fn early_picks_first_early_access() {
        let mut server = Server::new();
        server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(body(&["21.0.1", "22-ea+16", "22-ea+15"]))
            .create();

        let found = resolver(&server)
            .resolve("org.openjfx", "javafx-base", &special("early"), None)
            .unwrap();
        assert_eq!(found.map(|a| a.version), Some("22-ea+16".to_owned()));
    }

    #[test]
    fn custom_pattern_and_blank_token() {
        let mut server = Server::new();
        server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(body(&["22-ea+16", "21.0.1", "17.0.8"]))
            .expect(2)
            .create();
        let resolver = resolver(&server);

        let found = resolver
            .resolve("org.openjfx", "javafx-base", &special(r"^17\."), None)
            .unwrap();
        assert_eq!(found.map(|a| a.version), Some("17.0.8".to_owned()));

        let found = resolver
            .resolve("org.openjfx", "javafx-base", &special(""), None)
            .unwrap();
        assert_eq!(found.map(|a| a.version), Some("22-ea+16".to_owned()));
    }

    #[test]
    fn literal_version_is_sent_to_the_index() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::UrlEncoded(
                "q".into(),
                "g:org.openjfx AND a:javafx-base AND v:21.0.1 AND l:win".into(),
            ))
            .with_status(200)
            .with_body(body(&["21.0.1"]))
            .create();

        let found = resolver(&server)
            .resolve(
                "org.openjfx",
                "javafx-base",
                &VersionSpec::Literal("21.0.1".to_owned()),
                Some("win"),
            )
            .unwrap();
        assert_eq!(found.map(|a| a.version), Some("21.0.1".to_owned()));
        mock.assert();
    }

    #[test]
    fn no_documents_is_not_found() {
        let mut server = Server::new();
        server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(body(&[]))
            .create();

        let found = resolver(&server)
            .resolve(
                "org.openjfx",
                "javafx-base",
                &VersionSpec::Literal("1.0.0".to_owned()),
                None,
            )
            .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn no_matching_candidate_is_not_found() {
        let mut server = Server::new();
        server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(body(&["22-ea+16"]))
            .create();

        let found = resolver(&server)
            .resolve("org.openjfx", "javafx-base", &special("latest"), None)
            .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn http_error_status_is_not_found() {
        let mut server = Server::new();
        server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::Any)
            .with_status(503)
            .create();

        let found = resolver(&server)
            .resolve("org.openjfx", "javafx-base", &special("latest"), None)
            .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let mut server = Server::new();
        server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create();

        let error = resolver(&server)
            .resolve("org.openjfx", "javafx-base", &special("latest"), None)
            .unwrap_err();
        assert!(matches!(error, ResolveError::Decode(_)));
    }

    #[test]
    fn invalid_pattern_makes_no_request() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::Any)
            .expect(0)
            .create();

        let error = resolver(&server)
            .resolve("org.openjfx", "javafx-base", &special("21.("), None)
            .unwrap_err();
        assert!(matches!(error, ResolveError::InvalidPattern { .. }));
        mock.assert();
    }

    #[test]
    fn status_at_top_level_and_aliases() {
        let body = r#"{"status": 0, "response": {"found": 1, "artifacts": [{"group": "org.openjfx", "artifact": "javafx-base", "version": "21"}]}}"#;
        let response = serde_json::from_str::<SearchResponse>(body).unwrap();
        assert_eq!(response.status(), Some(0));
        assert_eq!(response.response.found, 1);
        assert_eq!(response.response.docs[0].version, "21");
    }
}
