//! MyHealthfinder topic-search client.
//!
//! `GET {base}/topicsearch.json?keyword=...` returns
//! `Result.Resources.Resource[]`; each entry carries `Title`,
//! `MyHFDescription` and `AccessibleVersion`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use mindcare_core::config::DEFAULT_HEALTH_API_BASE_URL;
use mindcare_core::health::{DEFAULT_HEALTH_KEYWORD, HealthInfoProvider, HealthResource};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const MENTAL_HEALTH_RESOURCE_LIMIT: usize = 3;
const WELLNESS_KEYWORD: &str = "wellness";

/// Client for the MyHealthfinder public API.
#[derive(Clone)]
pub struct HealthFinderClient {
    client: Client,
    base_url: String,
}

impl HealthFinderClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All resources returned for `keyword`, in response order.
    pub async fn search(&self, keyword: &str) -> Result<Vec<HealthResource>> {
        let url = format!("{}/topicsearch.json", self.base_url);
        debug!(keyword, "querying MyHealthfinder");

        let response = self
            .client
            .get(&url)
            .query(&[("keyword", keyword)])
            .send()
            .await
            .with_context(|| format!("MyHealthfinder request failed for '{keyword}'"))?
            .error_for_status()
            .context("MyHealthfinder returned an error status")?;

        let body = response
            .text()
            .await
            .context("Failed to read MyHealthfinder response")?;

        parse_resources(&body)
    }
}

impl Default for HealthFinderClient {
    fn default() -> Self {
        Self::new(DEFAULT_HEALTH_API_BASE_URL)
    }
}

#[async_trait]
impl HealthInfoProvider for HealthFinderClient {
    async fn lookup(&self, keyword: &str) -> Result<Option<HealthResource>> {
        Ok(self.search(keyword).await?.into_iter().next())
    }

    async fn mental_health_resources(&self) -> Result<Vec<HealthResource>> {
        let mut resources = self.search(DEFAULT_HEALTH_KEYWORD).await?;
        resources.truncate(MENTAL_HEALTH_RESOURCE_LIMIT);
        Ok(resources)
    }

    async fn wellness_tip(&self) -> Result<Option<HealthResource>> {
        self.lookup(WELLNESS_KEYWORD).await
    }
}

#[derive(Deserialize)]
struct TopicSearchResponse {
    #[serde(rename = "Result")]
    result: Option<SearchResult>,
}

#[derive(Deserialize)]
struct SearchResult {
    #[serde(rename = "Resources")]
    resources: Option<Resources>,
}

#[derive(Deserialize)]
struct Resources {
    #[serde(rename = "Resource", default)]
    resource: Vec<ResourceDto>,
}

#[derive(Deserialize)]
struct ResourceDto {
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "MyHFDescription", default)]
    description: String,
    #[serde(rename = "AccessibleVersion", default)]
    url: String,
}

impl From<ResourceDto> for HealthResource {
    fn from(dto: ResourceDto) -> Self {
        HealthResource {
            title: dto.title,
            description: dto.description,
            url: dto.url,
        }
    }
}

/// Parses a topic-search body into resources.
///
/// A body without `Result.Resources.Resource` yields an empty list; only
/// malformed JSON is an error.
pub fn parse_resources(body: &str) -> Result<Vec<HealthResource>> {
    let parsed: TopicSearchResponse =
        serde_json::from_str(body).context("Failed to parse MyHealthfinder response")?;

    Ok(parsed
        .result
        .and_then(|r| r.resources)
        .map(|r| r.resource.into_iter().map(HealthResource::from).collect())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Result": {
            "Error": "False",
            "Total": 2,
            "Resources": {
                "Resource": [
                    {
                        "Type": "Topic",
                        "Id": "30",
                        "Title": "Talk with Your Doctor About Depression",
                        "MyHFDescription": "Depression is a serious illness.",
                        "AccessibleVersion": "https://health.gov/myhealthfinder/depression"
                    },
                    {
                        "Title": "Manage Stress",
                        "AccessibleVersion": "https://health.gov/myhealthfinder/stress"
                    }
                ]
            }
        }
    }"#;

    #[test]
    fn test_parse_resources() {
        let resources = parse_resources(SAMPLE).unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].title, "Talk with Your Doctor About Depression");
        assert_eq!(resources[0].description, "Depression is a serious illness.");
        assert_eq!(resources[1].description, "");
        assert_eq!(resources[1].url, "https://health.gov/myhealthfinder/stress");
    }

    #[test]
    fn test_parse_without_resources() {
        assert!(parse_resources(r#"{"Result":{"Error":"True"}}"#).unwrap().is_empty());
        assert!(parse_resources("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed() {
        assert!(parse_resources("<html>").is_err());
    }

    #[test]
    fn test_base_url_trimmed() {
        let client = HealthFinderClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(HealthFinderClient::default().base_url(), DEFAULT_HEALTH_API_BASE_URL);
    }
}
