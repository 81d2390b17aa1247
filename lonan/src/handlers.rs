use actix_web::http::{StatusCode, header};
use actix_web::{
    HttpRequest, HttpResponse, HttpResponseBuilder, Responder, ResponseError, get, post, web,
};
use chrono::Utc;
use futures_util::try_join;
use handlebars::Handlebars;
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::AppState;
use crate::lonan::content::load_home;
use crate::lonan::content::model::CompanyInfo;
use crate::lonan::errors::SiteError;
use crate::lonan::i18n::{CookieStore, Language, LanguageState};
use crate::lonan::scripts::inline_script;
use crate::lonan::styles::compiled_styles;
use crate::lonan::views::{self, Chrome};
use crate::lonan::widgets::{ContactForm, ContactSubmission, FormError, ModalStack};

type Templates = web::Data<Handlebars<'static>>;

pub fn config(conf: &mut web::ServiceConfig) {
    let api_scope = web::scope("/api").service(healthcheck_handler);

    conf.service(api_scope)
        .service(stylesheet_handler)
        .service(home_handler)
        .service(service_handler)
        .service(post_handler)
        .service(toggle_language_handler)
        .service(set_language_handler)
        .service(contact_handler)
        .default_service(web::to(not_found_handler));
}

#[get("/health")]
pub async fn healthcheck_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "pong" }))
}

#[get("/static/site.css")]
pub async fn stylesheet_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(compiled_styles())
}

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    open: Option<String>,
    sent: Option<String>,
}

#[get("/")]
pub async fn home_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    hb: Templates,
    query: web::Query<HomeQuery>,
) -> HttpResponse {
    let language = request_language(&req, &state);
    let modals = query
        .open
        .as_deref()
        .map(ModalStack::from_query)
        .unwrap_or_default();
    let form = if query.sent.as_deref() == Some("1") {
        ContactForm::sent()
    } else {
        ContactForm::default()
    };

    let result = render_home(&req, &state, &hb, language, &modals, &form, StatusCode::OK).await;
    respond(&req, &state, &hb, language, result)
}

async fn render_home(
    req: &HttpRequest,
    state: &AppState,
    hb: &Handlebars<'static>,
    language: Language,
    modals: &ModalStack,
    form: &ContactForm,
    status: StatusCode,
) -> Result<HttpResponse, SiteError> {
    let content = load_home(state.content.as_ref(), state.config.content.home_limits()).await?;
    debug!(
        "home: {} services, {} partners, {} projects, {} testimonials",
        content.services.len(),
        content.partners.len(),
        content.projects.len(),
        content.testimonials.len()
    );

    let chrome = chrome(req, state, language, "/", content.company_info.as_ref());
    let view = views::home(&chrome, Some(&content), modals, form);
    render(hb, "index", &view, HttpResponse::build(status))
}

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    image: Option<String>,
}

#[get("/services/{slug}")]
pub async fn service_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    hb: Templates,
    path: web::Path<String>,
    query: web::Query<ImageQuery>,
) -> HttpResponse {
    let language = request_language(&req, &state);
    let slug = path.into_inner();
    let image = query
        .image
        .as_deref()
        .and_then(|i| i.parse().ok())
        .unwrap_or(0);

    let result = async {
        let (info, service) = try_join!(
            state.content.company_info(),
            state.content.service_by_slug(&slug)
        )?;
        if service.is_none() {
            debug!("no published service for {slug}, rendering placeholder");
        }
        let chrome = chrome(&req, &state, language, req.path(), info.as_ref());
        let view = views::service_page(&chrome, &slug, service.as_ref(), image);
        render(&hb, "service", &view, HttpResponse::Ok())
    }
    .await;
    respond(&req, &state, &hb, language, result)
}

#[get("/blog/{slug}")]
pub async fn post_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    hb: Templates,
    path: web::Path<String>,
) -> HttpResponse {
    let language = request_language(&req, &state);
    let slug = path.into_inner();

    let result = async {
        let (info, post) = try_join!(
            state.content.company_info(),
            state.content.post_by_slug(&slug)
        )?;
        let chrome = chrome(&req, &state, language, req.path(), info.as_ref());
        let view = views::post_page(&chrome, post.as_ref());
        let status = if post.is_some() {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        };
        render(&hb, "post", &view, HttpResponse::build(status))
    }
    .await;
    respond(&req, &state, &hb, language, result)
}

#[derive(Debug, Deserialize)]
pub struct NextQuery {
    next: Option<String>,
}

/// Only same-site absolute paths are followed after a language switch.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(n) if n.starts_with('/') && !n.starts_with("//") && !n.contains('\\') => n,
        _ => "/",
    }
}

#[get("/lang/toggle")]
pub async fn toggle_language_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<NextQuery>,
) -> HttpResponse {
    let mut language = LanguageState::initialize(
        CookieStore::from_request(&req),
        state.config.site.default_language,
    );
    let now = language.toggle();
    debug!("language toggled to {now}");
    redirect(safe_next(query.next.as_deref()), Some(language.into_store()))
}

#[get("/lang/{code}")]
pub async fn set_language_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    hb: Templates,
    path: web::Path<String>,
    query: web::Query<NextQuery>,
) -> HttpResponse {
    let default = state.config.site.default_language;
    let chosen = match path.parse::<Language>() {
        Ok(language) => language,
        Err(err) => {
            debug!("{err}");
            let language = request_language(&req, &state);
            return error_page(&req, &state, &hb, language, SiteError::NotFound(req.path().into()));
        }
    };

    let mut language = LanguageState::initialize(CookieStore::from_request(&req), default);
    language.set(chosen);
    redirect(safe_next(query.next.as_deref()), Some(language.into_store()))
}

#[post("/contact")]
pub async fn contact_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    hb: Templates,
    fields: web::Form<ContactSubmission>,
) -> HttpResponse {
    let language = request_language(&req, &state);
    let mut form = ContactForm::new(fields.into_inner());

    let status = match form.submit(state.submissions.as_ref()).await {
        Ok(()) => return redirect("/?sent=1#contact", None),
        Err(FormError::Invalid(errors)) => {
            debug!("contact form rejected: {} invalid field(s)", errors.len());
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Err(err) => {
            error!("contact submission failed: {err:#}");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    let result = render_home(
        &req,
        &state,
        &hb,
        language,
        &ModalStack::new(),
        &form,
        status,
    )
    .await;
    respond(&req, &state, &hb, language, result)
}

pub async fn not_found_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    hb: Templates,
) -> HttpResponse {
    let language = request_language(&req, &state);
    error_page(&req, &state, &hb, language, SiteError::NotFound(req.path().into()))
}

fn request_language(req: &HttpRequest, state: &AppState) -> Language {
    LanguageState::initialize(
        CookieStore::from_request(req),
        state.config.site.default_language,
    )
    .language()
}

fn chrome<'a>(
    req: &'a HttpRequest,
    state: &'a AppState,
    language: Language,
    path: &'a str,
    info: Option<&'a CompanyInfo>,
) -> Chrome<'a> {
    Chrome {
        language,
        path,
        return_to: req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/"),
        info,
        settings: &state.config.site,
        now: Utc::now(),
    }
}

fn redirect(location: &str, cookies: Option<CookieStore>) -> HttpResponse {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location));
    for cookie in cookies.map(CookieStore::into_cookies).unwrap_or_default() {
        builder.cookie(cookie);
    }
    builder.finish()
}

#[derive(Serialize)]
struct Rendered<'a, T> {
    #[serde(flatten)]
    view: &'a T,
    script: String,
}

fn render<T: Serialize>(
    hb: &Handlebars<'static>,
    template: &'static str,
    view: &T,
    mut builder: HttpResponseBuilder,
) -> Result<HttpResponse, SiteError> {
    let data = Rendered {
        view,
        script: inline_script(),
    };
    let body = hb
        .render(template, &data)
        .map_err(|source| SiteError::Render { template, source })?;
    Ok(builder.content_type("text/html; charset=utf-8").body(body))
}

fn respond(
    req: &HttpRequest,
    state: &AppState,
    hb: &Handlebars<'static>,
    language: Language,
    result: Result<HttpResponse, SiteError>,
) -> HttpResponse {
    result.unwrap_or_else(|err| error_page(req, state, hb, language, err))
}

fn error_page(
    req: &HttpRequest,
    state: &AppState,
    hb: &Handlebars<'static>,
    language: Language,
    err: SiteError,
) -> HttpResponse {
    let status = err.status();
    if status.is_server_error() {
        error!("{} {} failed: {}", req.method(), req.path(), err.trace());
    } else {
        debug!("{} {}: {err}", req.method(), req.path());
    }

    let chrome = chrome(req, state, language, req.path(), None);
    let view = views::error_page(&chrome, status.as_u16(), Some(err.trace()));
    render(hb, "error", &view, HttpResponse::build(status)).unwrap_or_else(|render_err| {
        warn!("error page failed to render: {}", render_err.trace());
        err.error_response()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_must_stay_on_site() {
        assert_eq!(safe_next(Some("/services/printing?image=2")), "/services/printing?image=2");
        assert_eq!(safe_next(Some("//evil.example")), "/");
        assert_eq!(safe_next(Some("https://evil.example")), "/");
        assert_eq!(safe_next(Some("/\\evil.example")), "/");
        assert_eq!(safe_next(None), "/");
    }
}
