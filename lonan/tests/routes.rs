use std::path::Path;
use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use async_trait::async_trait;

use lonan::lonan::content::model::{CompanyInfo, Partner, Post, Project, Service, Testimonial};
use lonan::lonan::content::{ContentError, ContentSource, FixtureSource};
use lonan::lonan::i18n::COOKIE_NAME;
use lonan::lonan::links;
use lonan::lonan::widgets::{LogSink, Modal, ModalStack};
use lonan::lonan::SiteConfig;
use lonan::{AppState, build_handlebars, handlers};

fn fixtures_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures"))
}

fn state_with(content: Arc<dyn ContentSource>) -> web::Data<AppState> {
    web::Data::new(AppState::new(
        SiteConfig::default(),
        content,
        Arc::new(LogSink),
    ))
}

macro_rules! app {
    ($content:expr) => {
        test::init_service(
            App::new()
                .app_data(state_with($content))
                .app_data(web::Data::new(build_handlebars().unwrap()))
                .configure(handlers::config),
        )
        .await
    };
}

async fn body_of(resp: actix_web::dev::ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Every query fails the way an unreachable CMS would.
struct DownSource;

fn outage<T>() -> Result<T, ContentError> {
    Err(ContentError::Status {
        status: 503,
        body: "maintenance".into(),
    })
}

#[async_trait]
impl ContentSource for DownSource {
    async fn company_info(&self) -> Result<Option<CompanyInfo>, ContentError> {
        outage()
    }
    async fn services(&self) -> Result<Vec<Service>, ContentError> {
        outage()
    }
    async fn service_by_slug(&self, _slug: &str) -> Result<Option<Service>, ContentError> {
        outage()
    }
    async fn partners(&self) -> Result<Vec<Partner>, ContentError> {
        outage()
    }
    async fn featured_projects(&self, _limit: usize) -> Result<Vec<Project>, ContentError> {
        outage()
    }
    async fn featured_testimonials(
        &self,
        _limit: usize,
    ) -> Result<Vec<Testimonial>, ContentError> {
        outage()
    }
    async fn post_by_slug(&self, _slug: &str) -> Result<Option<Post>, ContentError> {
        outage()
    }
}

#[actix_web::test]
async fn health_check_answers_pong() {
    let app = app!(Arc::new(FixtureSource::new(fixtures_dir())));
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_of(resp).await.contains("pong"));
}

#[actix_web::test]
async fn home_renders_arabic_by_default() {
    let app = app!(Arc::new(FixtureSource::new(fixtures_dir())));
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_of(resp).await;
    assert!(html.contains(r#"lang="ar" dir="rtl""#));
    assert!(html.contains("لونان"));
    assert!(html.contains("الطباعة"));
    assert!(html.contains("https://wa.me/966570157777"));
    assert!(!html.contains("Unfeatured project"));
}

#[actix_web::test]
async fn home_follows_language_cookie() {
    let app = app!(Arc::new(FixtureSource::new(fixtures_dir())));
    let req = test::TestRequest::get()
        .uri("/")
        .cookie(actix_web::cookie::Cookie::new(COOKIE_NAME, "en"))
        .to_request();
    let html = body_of(test::call_service(&app, req).await).await;
    assert!(html.contains(r#"lang="en" dir="ltr""#));
    assert!(html.contains("Printing"));
    assert!(html.contains("Our booth was the talk of the exhibition."));
}

#[actix_web::test]
async fn empty_content_shows_placeholders() {
    let empty = tempfile::tempdir().unwrap();
    let app = app!(Arc::new(FixtureSource::new(empty.path())));
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_of(resp).await;
    assert!(html.contains("يرجى إضافة المحتوى من لوحة التحكم"));
    assert!(html.contains("لونان"));
}

#[actix_web::test]
async fn open_query_renders_modal_open_and_locks_scroll() {
    let app = app!(Arc::new(FixtureSource::new(fixtures_dir())));
    let req = test::TestRequest::get()
        .uri("/?open=service:printing")
        .to_request();
    let html = body_of(test::call_service(&app, req).await).await;
    assert!(html.contains(r#"class="modal is-open" id="modal-service-printing""#));
    assert!(html.contains("scroll-locked"));
}

#[actix_web::test]
async fn slugs_with_url_delimiters_reach_their_service() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("services.json"),
        r#"[{
            "_id": "service-pack",
            "title": { "ar": "تغليف", "en": "Packaging" },
            "slug": "print,pack & co",
            "features": [{ "ar": "علب مطبوعة", "en": "Printed boxes" }]
        }]"#,
    )
    .unwrap();
    let app = app!(Arc::new(FixtureSource::new(dir.path())));

    let modal = Modal::Service("print,pack & co".into());
    let href = ModalStack::new().with(Modal::About).with(modal.clone()).href("/");
    let html = body_of(test::call_service(&app, test::TestRequest::get().uri(&href).to_request()).await).await;
    assert!(html.contains(&format!(r#"class="modal is-open" id="{}""#, modal.dom_id())));
    assert!(html.contains("scroll-locked"));

    let page = links::local_path(&["services", "print,pack & co"]);
    assert_eq!(page, "/services/print,pack%20&%20co");
    assert!(html.contains(r#"href="/services/print,pack%20&amp;%20co""#));
    let resp = test::call_service(&app, test::TestRequest::get().uri(&page).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_of(resp).await.contains("علب مطبوعة"));
}

#[actix_web::test]
async fn language_toggle_sets_cookie_and_redirects() {
    let app = app!(Arc::new(FixtureSource::new(fixtures_dir())));
    let req = test::TestRequest::get()
        .uri("/lang/toggle?next=/services/printing")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/services/printing"
    );
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == COOKIE_NAME)
        .unwrap();
    assert_eq!(cookie.value(), "en");
}

#[actix_web::test]
async fn language_toggle_ignores_offsite_next() {
    let app = app!(Arc::new(FixtureSource::new(fixtures_dir())));
    let req = test::TestRequest::get()
        .uri("/lang/toggle?next=//evil.example")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
}

#[actix_web::test]
async fn unknown_language_code_is_not_found() {
    let app = app!(Arc::new(FixtureSource::new(fixtures_dir())));
    let resp = test::call_service(&app, test::TestRequest::get().uri("/lang/fr").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn unknown_route_renders_localized_404() {
    let app = app!(Arc::new(FixtureSource::new(fixtures_dir())));
    let resp = test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let html = body_of(resp).await;
    assert!(html.contains("الصفحة المطلوبة غير موجودة."));
    assert!(html.contains("العودة للرئيسية"));
}

#[actix_web::test]
async fn service_page_renders_detail_or_placeholder() {
    let app = app!(Arc::new(FixtureSource::new(fixtures_dir())));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/services/printing").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_of(resp).await;
    assert!(html.contains("بطاقات أعمال"));
    assert!(html.contains(r#"href="/#services""#));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/services/unknown").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn post_page_renders_body_or_404() {
    let app = app!(Arc::new(FixtureSource::new(fixtures_dir())));

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/blog/choosing-a-shop-sign").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_of(resp).await;
    assert!(html.contains("<strong>بعيد</strong>"));
    assert!(html.contains("<ul><li>الإضاءة</li><li>حجم الخط</li></ul>"));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/blog/missing").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn invalid_contact_form_is_rerendered_with_errors() {
    let app = app!(Arc::new(FixtureSource::new(fixtures_dir())));
    let req = test::TestRequest::post()
        .uri("/contact")
        .set_form([("name", ""), ("phone", "0500000000"), ("email", "nope"), ("service", "")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_of(resp).await;
    assert!(html.contains("هذا الحقل مطلوب"));
    assert!(html.contains(r#"value="0500000000""#));
}

#[actix_web::test]
async fn valid_contact_form_redirects_to_confirmation() {
    let app = app!(Arc::new(FixtureSource::new(fixtures_dir())));
    let req = test::TestRequest::post()
        .uri("/contact")
        .set_form([
            ("name", "Sara"),
            ("phone", "0500000000"),
            ("email", ""),
            ("service", "Printing & Packaging"),
            ("message", "Need 500 cards"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/?sent=1#contact"
    );

    let html = body_of(test::call_service(&app, test::TestRequest::get().uri("/?sent=1").to_request()).await).await;
    assert!(html.contains("تم إرسال رسالتك بنجاح!"));
}

#[actix_web::test]
async fn content_outage_is_a_server_error_page() {
    let app = app!(Arc::new(DownSource));
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_of(resp).await;
    assert!(html.contains("خطأ"));
    assert!(!html.contains("maintenance"));
}
