pub mod handlers;
pub mod lonan;

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, http::header, middleware::Logger, web};
use anyhow::Context;
use handlebars::Handlebars;
use log::info;
use walkdir::WalkDir;

use crate::lonan::SiteConfig;
use crate::lonan::config::ContentBackend;
use crate::lonan::content::{ContentSource, FixtureSource, SanityClient};
use crate::lonan::widgets::{LogSink, SubmissionSink};

/// Shared, read-only state handed to every worker.
pub struct AppState {
    pub config: SiteConfig,
    pub content: Arc<dyn ContentSource>,
    pub submissions: Arc<dyn SubmissionSink>,
}

impl AppState {
    pub fn new(
        config: SiteConfig,
        content: Arc<dyn ContentSource>,
        submissions: Arc<dyn SubmissionSink>,
    ) -> Self {
        Self {
            config,
            content,
            submissions,
        }
    }

    /// Content source picked by `content.source`, with submissions going to the log.
    pub fn from_config(config: SiteConfig) -> Self {
        let content: Arc<dyn ContentSource> = match config.content.source {
            ContentBackend::Sanity => {
                let client = SanityClient::new(&config.sanity);
                info!("Reading content from {}", client.endpoint());
                Arc::new(client)
            }
            ContentBackend::Fixtures => {
                let root = config.content.fixtures_path();
                info!("Reading content fixtures from {}", root.display());
                Arc::new(FixtureSource::new(root))
            }
        };
        Self::new(config, content, Arc::new(LogSink))
    }
}

pub async fn run() -> io::Result<()> {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded environment from {}", path.display());
    }
    let config = SiteConfig::load();
    let server_cfg = config.server.clone();

    info!(
        "Lonan is listening on: http://{}:{}",
        server_cfg.host, server_cfg.port
    );
    // Build the shared Handlebars registry once for all workers.
    let handlebars = web::Data::new(build_handlebars().map_err(io::Error::other)?);
    let state = web::Data::new(AppState::from_config(config));
    let static_dir = server_cfg.static_path();
    let cors_origins = server_cfg.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(handlebars.clone())
            .wrap(build_cors(&cors_origins))
            .configure(handlers::config)
            .service(
                Files::new("/static", &static_dir)
                    .prefer_utf8(true)
                    .use_last_modified(true),
            )
    })
    .bind((server_cfg.host.as_str(), server_cfg.port))?
    .run()
    .await
}

pub fn build_cors(origins: &[String]) -> Cors {
    let base = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT]);

    if origins.iter().any(|o| o == "*") {
        return base.allow_any_origin();
    }

    origins
        .iter()
        .fold(base, |c, origin| c.allowed_origin(origin))
}

/// Registry over the crate's `templates/` directory.
pub fn build_handlebars() -> anyhow::Result<Handlebars<'static>> {
    load_templates(&Path::new(env!("CARGO_MANIFEST_DIR")).join("templates"))
}

/// Register every `.hbs` file under `templates_dir`: top-level files become
/// templates named by their stem, nested files become partials named by
/// their relative path (`components/header`).
pub fn load_templates(templates_dir: &Path) -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();

    for entry in WalkDir::new(templates_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file() && e.path().extension() == Some(OsStr::new("hbs")))
    {
        let path = entry.path();
        let rel = path
            .strip_prefix(templates_dir)
            .context("template outside the templates directory")?;
        let rel_no_ext = rel.with_extension("");
        let name = rel_no_ext.to_string_lossy().replace('\\', "/");

        if rel.parent().map(|p| p == Path::new("")).unwrap_or(true) {
            handlebars
                .register_template_file(&name, path)
                .with_context(|| format!("failed to register template {name}"))?;
        } else {
            let partial_src = fs::read_to_string(path)
                .with_context(|| format!("failed to read partial {name}"))?;
            handlebars
                .register_partial(&name, partial_src)
                .with_context(|| format!("failed to register partial {name}"))?;
        }
    }

    Ok(handlebars)
}
