use crate::utils::error::Result;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_SERVER: &str = "https://rest.ensembl.org";

const HUMAN_SPECIES: &str = "homo_sapiens";

/// Subset of the Ensembl homology response this tool consumes. Everything
/// else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct HomologyResponse {
    #[serde(default)]
    data: Vec<HomologyGroup>,
}

#[derive(Debug, Deserialize)]
struct HomologyGroup {
    #[serde(default)]
    homologies: Vec<Homology>,
}

#[derive(Debug, Deserialize)]
struct Homology {
    target: HomologyTarget,
}

#[derive(Debug, Deserialize)]
struct HomologyTarget {
    id: String,
    #[serde(default)]
    species: String,
    #[serde(default)]
    perc_id: Option<f64>,
    #[serde(default)]
    perc_pos: Option<f64>,
}

/// A human ortholog extracted from a homology response.
#[derive(Debug, Clone, PartialEq)]
pub struct HumanOrtholog {
    pub id: String,
    pub identity: Option<f64>,
    pub positivity: Option<f64>,
}

/// Read-only client for the Ensembl REST homology endpoint.
pub struct EnsemblClient {
    client: Client,
    server: String,
}

impl EnsemblClient {
    pub fn new(server: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let server = server.into().trim_end_matches('/').to_string();
        Ok(Self { client, server })
    }

    /// Looks up the human ortholog for a rat gene identifier.
    ///
    /// Returns `Ok(None)` when the response carries no homo_sapiens homology.
    /// A timeout or HTTP error status surfaces as `Err`, which callers treat
    /// as a failed lookup for that identifier only.
    pub async fn get_human_ortholog(&self, gene: &str) -> Result<Option<HumanOrtholog>> {
        let url = format!(
            "{}/homology/symbol/rattus_norvegicus/{}?content-type=application/json",
            self.server, gene
        );
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let body: HomologyResponse = response.error_for_status()?.json().await?;
        Ok(extract_human_ortholog(body))
    }
}

fn extract_human_ortholog(body: HomologyResponse) -> Option<HumanOrtholog> {
    body.data
        .into_iter()
        .next()?
        .homologies
        .into_iter()
        .find(|h| h.target.species == HUMAN_SPECIES)
        .map(|h| HumanOrtholog {
            id: h.target.id,
            identity: percentage_in_range(h.target.perc_id),
            positivity: percentage_in_range(h.target.perc_pos),
        })
}

// The API reports alignment percentages in [0, 100]; anything outside that
// range is treated as absent rather than propagated into the report.
fn percentage_in_range(value: Option<f64>) -> Option<f64> {
    value.filter(|v| (0.0..=100.0).contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> EnsemblClient {
        EnsemblClient::new(server.base_url(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_lookup_returns_human_ortholog() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/homology/symbol/rattus_norvegicus/ENSRNOG00000016516");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "data": [{
                        "id": "ENSRNOG00000016516",
                        "homologies": [{
                            "type": "ortholog_one2one",
                            "target": {
                                "id": "ENSG00000142192",
                                "species": "homo_sapiens",
                                "perc_id": 91.5,
                                "perc_pos": 95.0
                            }
                        }]
                    }]
                }));
        });

        let client = client_for(&server);
        let ortholog = client
            .get_human_ortholog("ENSRNOG00000016516")
            .await
            .unwrap()
            .unwrap();

        api_mock.assert();
        assert_eq!(ortholog.id, "ENSG00000142192");
        assert_eq!(ortholog.identity, Some(91.5));
        assert_eq!(ortholog.positivity, Some(95.0));
    }

    #[tokio::test]
    async fn test_lookup_skips_non_human_homologies() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/homology/symbol/rattus_norvegicus/ENSRNOG00000019404");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "data": [{
                        "homologies": [{
                            "target": {
                                "id": "ENSMUSG00000022749",
                                "species": "mus_musculus",
                                "perc_id": 97.0,
                                "perc_pos": 98.0
                            }
                        }]
                    }]
                }));
        });

        let client = client_for(&server);
        let ortholog = client
            .get_human_ortholog("ENSRNOG00000019404")
            .await
            .unwrap();

        assert!(ortholog.is_none());
    }

    #[tokio::test]
    async fn test_lookup_with_empty_homologies_is_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/homology/symbol/rattus_norvegicus/ENSRNOG00000016516");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"data": [{"homologies": []}]}));
        });

        let client = client_for(&server);
        let ortholog = client
            .get_human_ortholog("ENSRNOG00000016516")
            .await
            .unwrap();

        assert!(ortholog.is_none());
    }

    #[tokio::test]
    async fn test_lookup_http_error_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/homology/symbol/rattus_norvegicus/ENSRNOG00000016516");
            then.status(500);
        });

        let client = client_for(&server);
        let result = client.get_human_ortholog("ENSRNOG00000016516").await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_out_of_range_percentages_are_dropped() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/homology/symbol/rattus_norvegicus/ENSRNOG00000016516");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "data": [{
                        "homologies": [{
                            "target": {
                                "id": "ENSG00000142192",
                                "species": "homo_sapiens",
                                "perc_id": 120.0,
                                "perc_pos": -3.5
                            }
                        }]
                    }]
                }));
        });

        let client = client_for(&server);
        let ortholog = client
            .get_human_ortholog("ENSRNOG00000016516")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(ortholog.id, "ENSG00000142192");
        assert_eq!(ortholog.identity, None);
        assert_eq!(ortholog.positivity, None);
    }
}
