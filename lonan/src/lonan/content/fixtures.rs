use std::cmp::Ordering;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use super::model::{CompanyInfo, Partner, Post, Project, Service, Testimonial};
use super::source::{ContentError, ContentSource};

/// Answers the site's queries from JSON files shaped like the query results.
///
/// Expected files (all optional): `company_info.json`, `services.json`,
/// `partners.json`, `projects.json`, `testimonials.json`, `posts.json`.
#[derive(Clone, Debug)]
pub struct FixtureSource {
    root: PathBuf,
}

impl FixtureSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, ContentError> {
        let path = self.root.join(name);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("fixture {} missing, treating as empty", path.display());
                return Ok(None);
            }
            Err(source) => return Err(ContentError::Fixture { path, source }),
        };

        serde_json::from_slice(&raw).map_err(|source| ContentError::Decode {
            what: path.display().to_string(),
            source,
        })
    }

    async fn read_list<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, ContentError> {
        let list: Option<Option<Vec<T>>> = self.read(name).await?;
        Ok(list.flatten().unwrap_or_default())
    }
}

/// `order asc` with unordered documents last.
fn by_display_order(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[async_trait]
impl ContentSource for FixtureSource {
    async fn company_info(&self) -> Result<Option<CompanyInfo>, ContentError> {
        let info: Option<Option<CompanyInfo>> = self.read("company_info.json").await?;
        Ok(info.flatten())
    }

    async fn services(&self) -> Result<Vec<Service>, ContentError> {
        let mut services: Vec<Service> = self.read_list("services.json").await?;
        services.sort_by(|a, b| by_display_order(a.order, b.order));
        Ok(services)
    }

    async fn service_by_slug(&self, slug: &str) -> Result<Option<Service>, ContentError> {
        let services: Vec<Service> = self.read_list("services.json").await?;
        Ok(services
            .into_iter()
            .find(|s| s.slug.as_deref() == Some(slug)))
    }

    async fn partners(&self) -> Result<Vec<Partner>, ContentError> {
        let mut partners: Vec<Partner> = self.read_list("partners.json").await?;
        partners.sort_by(|a, b| by_display_order(a.order, b.order));
        Ok(partners)
    }

    async fn featured_projects(&self, limit: usize) -> Result<Vec<Project>, ContentError> {
        let mut projects: Vec<Project> = self
            .read_list::<Project>("projects.json")
            .await?
            .into_iter()
            .filter(|p| p.featured)
            .collect();
        projects.sort_by(|a, b| by_display_order(a.order, b.order));
        projects.truncate(limit);
        Ok(projects)
    }

    async fn featured_testimonials(
        &self,
        limit: usize,
    ) -> Result<Vec<Testimonial>, ContentError> {
        let mut testimonials: Vec<Testimonial> = self
            .read_list::<Testimonial>("testimonials.json")
            .await?
            .into_iter()
            .filter(|t| t.featured)
            .collect();
        testimonials.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        testimonials.truncate(limit);
        Ok(testimonials)
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentError> {
        let posts: Vec<Post> = self.read_list("posts.json").await?;
        Ok(posts.into_iter().find(|p| p.slug.as_deref() == Some(slug)))
    }
}
