use std::path::PathBuf;

use async_trait::async_trait;

use super::model::{CompanyInfo, Partner, Post, Project, Service, Testimonial};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("request to the content API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("content API answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("reading fixture {}: {source}", path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only access to the site's documents. Every call is an idempotent read.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn company_info(&self) -> Result<Option<CompanyInfo>, ContentError>;

    /// All services, ordered by display order.
    async fn services(&self) -> Result<Vec<Service>, ContentError>;

    async fn service_by_slug(&self, slug: &str) -> Result<Option<Service>, ContentError>;

    /// All partners, ordered by display order.
    async fn partners(&self) -> Result<Vec<Partner>, ContentError>;

    /// Featured projects by display order, at most `limit`.
    async fn featured_projects(&self, limit: usize) -> Result<Vec<Project>, ContentError>;

    /// Featured testimonials, newest first, at most `limit`.
    async fn featured_testimonials(&self, limit: usize)
    -> Result<Vec<Testimonial>, ContentError>;

    async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentError>;
}
