use futures_util::try_join;
use log::debug;

use super::model::{CompanyInfo, Partner, Project, Service, Testimonial};
use super::source::{ContentError, ContentSource};

#[derive(Clone, Copy, Debug)]
pub struct HomeLimits {
    pub projects: usize,
    pub testimonials: usize,
}

impl Default for HomeLimits {
    fn default() -> Self {
        Self {
            projects: 8,
            testimonials: 6,
        }
    }
}

/// Everything the home page renders from.
#[derive(Clone, Debug, Default)]
pub struct HomeContent {
    pub company_info: Option<CompanyInfo>,
    pub services: Vec<Service>,
    pub partners: Vec<Partner>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
}

/// Issue the five home queries concurrently and join them.
///
/// The first failing query fails the whole load.
pub async fn load_home(
    source: &dyn ContentSource,
    limits: HomeLimits,
) -> Result<HomeContent, ContentError> {
    let (company_info, services, partners, projects, testimonials) = try_join!(
        source.company_info(),
        source.services(),
        source.partners(),
        source.featured_projects(limits.projects),
        source.featured_testimonials(limits.testimonials),
    )?;

    debug!(
        "home content: company_info={} services={} partners={} projects={} testimonials={}",
        company_info.is_some(),
        services.len(),
        partners.len(),
        projects.len(),
        testimonials.len()
    );

    Ok(HomeContent {
        company_info,
        services,
        partners,
        projects,
        testimonials,
    })
}
