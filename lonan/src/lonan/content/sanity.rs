use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::model::{CompanyInfo, Partner, Post, Project, Service, Testimonial};
use super::queries::{self, Query};
use super::source::{ContentError, ContentSource};
use crate::lonan::config::SanityConfig;

/// Runs GROQ queries against the Sanity HTTP query API.
#[derive(Clone, Debug)]
pub struct SanityClient {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

impl SanityClient {
    pub fn new(cfg: &SanityConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: query_endpoint(cfg),
            token: cfg.token.clone().filter(|t| !t.is_empty()),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch<T: DeserializeOwned>(&self, query: &Query) -> Result<T, ContentError> {
        let mut pairs = vec![("query".to_string(), query.groq.to_string())];
        pairs.extend(
            query
                .params
                .iter()
                .map(|(name, value)| (format!("${name}"), value.to_string())),
        );

        let mut request = self.http.get(&self.endpoint).query(&pairs);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        debug!("content query returned {} bytes", bytes.len());
        let envelope: QueryResponse<T> =
            serde_json::from_slice(&bytes).map_err(|source| ContentError::Decode {
                what: "query response".into(),
                source,
            })?;
        Ok(envelope.result)
    }

    async fn fetch_list<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>, ContentError> {
        let list: Option<Vec<T>> = self.fetch(query).await?;
        Ok(list.unwrap_or_default())
    }
}

pub fn query_endpoint(cfg: &SanityConfig) -> String {
    let host = if cfg.use_cdn {
        "apicdn.sanity.io"
    } else {
        "api.sanity.io"
    };
    let version = cfg.api_version.trim_start_matches('v');
    format!(
        "https://{}.{}/v{}/data/query/{}",
        cfg.project_id, host, version, cfg.dataset
    )
}

#[async_trait]
impl ContentSource for SanityClient {
    async fn company_info(&self) -> Result<Option<CompanyInfo>, ContentError> {
        self.fetch(&queries::company_info()).await
    }

    async fn services(&self) -> Result<Vec<Service>, ContentError> {
        self.fetch_list(&queries::services()).await
    }

    async fn service_by_slug(&self, slug: &str) -> Result<Option<Service>, ContentError> {
        self.fetch(&queries::service_by_slug(slug)).await
    }

    async fn partners(&self) -> Result<Vec<Partner>, ContentError> {
        self.fetch_list(&queries::partners()).await
    }

    async fn featured_projects(&self, limit: usize) -> Result<Vec<Project>, ContentError> {
        self.fetch_list(&queries::featured_projects(limit)).await
    }

    async fn featured_testimonials(
        &self,
        limit: usize,
    ) -> Result<Vec<Testimonial>, ContentError> {
        self.fetch_list(&queries::featured_testimonials(limit)).await
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentError> {
        self.fetch(&queries::post_by_slug(slug)).await
    }
}
