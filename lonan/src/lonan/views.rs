//! Page view models handed to the handlebars templates.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::lonan::config::SiteSettings;
use crate::lonan::content::HomeContent;
use crate::lonan::content::model::{CompanyInfo, Post, Service};
use crate::lonan::content::portable_text;
use crate::lonan::i18n::{Language, labels, lookup};
use crate::lonan::links;
use crate::lonan::sections::{
    self, AboutView, ContactView, HeroView, LinkView, PartnersView, RenderContext, SectionState,
    ServiceDetailView, ServicesView, SocialView, TestimonialCard,
};
use crate::lonan::widgets::{ContactForm, LoadingScreen, ModalStack};

const DEFAULT_TITLE: &str = "لونان للدعاية والإعلان | Lonan Advertising";
const KEYWORDS: &str =
    "لونان, دعاية, إعلان, تسويق, القصيم, بريدة, السعودية, تصميم, لوحات, طباعة, هوية بصرية, سوشيال ميديا";
const DEFAULT_DESCRIPTION: (&str, &str) = (
    "لونان للتسويق والدعاية والإعلان - شركة سعودية متكاملة متخصصة في تقديم حلول إبداعية وواقعية تجمع بين الدعاية والإعلان والتسويق الإلكتروني منذ أكثر من 20 عاماً",
    "Lonan Marketing & Advertising - a comprehensive Saudi company specializing in creative and realistic solutions combining advertising and digital marketing for over 20 years",
);
const DEFAULT_OG_DESCRIPTION: (&str, &str) = (
    "شركة سعودية متكاملة متخصصة في تقديم حلول إبداعية للدعاية والإعلان والتسويق الإلكتروني",
    "A comprehensive Saudi company specializing in creative advertising and digital marketing solutions",
);
const FOOTER_ABOUT: (&str, &str) = (
    "شركة سعودية متكاملة متخصصة في تقديم حلول إبداعية وواقعية تجمع بين الدعاية والإعلان والتسويق الإلكتروني منذ أكثر من 20 عاماً.",
    "A comprehensive Saudi company specializing in creative and realistic solutions combining advertising and digital marketing for over 20 years.",
);
const FOOTER_ABOUT_LIMIT: usize = 150;
const NAV_SECTIONS: &[&str] = &["home", "about", "services", "partners", "contact"];

#[derive(Clone, Debug, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: &'static str,
    pub og_title: String,
    pub og_description: String,
    pub og_locale: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct HeaderView {
    pub brand: String,
    pub suffix: String,
    pub logo: Option<String>,
    pub nav: Vec<NavItem>,
    pub quote_href: String,
    pub switch_label: String,
    pub switch_next: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct FooterView {
    pub company_name: String,
    pub suffix: String,
    pub logo: Option<String>,
    pub about: String,
    pub social: Vec<SocialView>,
    pub quick_links: Vec<NavItem>,
    pub address: Option<String>,
    pub phones: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub year: i32,
}

/// Shared page chrome: document language, meta tags, header and footer.
#[derive(Clone, Debug, Serialize)]
pub struct PageView {
    pub lang: &'static str,
    pub dir: &'static str,
    pub is_rtl: bool,
    pub labels: BTreeMap<&'static str, String>,
    pub meta: PageMeta,
    pub fonts_href: String,
    pub header: HeaderView,
    pub footer: FooterView,
    pub whatsapp_href: String,
    pub scroll_locked: bool,
    pub dev_mode: bool,
}

/// Inputs every page needs to build its chrome.
#[derive(Clone, Copy, Debug)]
pub struct Chrome<'a> {
    pub language: Language,
    /// Path of the current page, used for in-page anchors.
    pub path: &'a str,
    /// Path and query to come back to after switching language.
    pub return_to: &'a str,
    pub info: Option<&'a CompanyInfo>,
    pub settings: &'a SiteSettings,
    pub now: DateTime<Utc>,
}

impl Chrome<'_> {
    fn label(&self, key: &str) -> String {
        lookup(self.language, key).into_owned()
    }

    fn anchor(&self, id: &str) -> String {
        if self.path == "/" {
            format!("#{id}")
        } else {
            format!("/#{id}")
        }
    }

    fn render_context<'m>(&'m self, modals: &'m ModalStack) -> RenderContext<'m> {
        RenderContext {
            language: self.language,
            modals,
            path: self.path,
        }
    }
}

pub fn page(chrome: &Chrome, meta: PageMeta, modals: &ModalStack) -> PageView {
    let language = chrome.language;
    PageView {
        lang: language.code(),
        dir: language.direction().as_str(),
        is_rtl: language.is_rtl(),
        labels: labels(language),
        meta,
        fonts_href: chrome.settings.fonts_href.clone(),
        header: header(chrome, modals),
        footer: footer(chrome, modals),
        whatsapp_href: links::whatsapp(
            chrome.info.and_then(|i| i.whatsapp.as_deref()),
            &chrome.settings.whatsapp_fallback,
        ),
        scroll_locked: modals.scroll_locked(),
        dev_mode: chrome.settings.dev_mode,
    }
}

fn nav(chrome: &Chrome) -> Vec<NavItem> {
    NAV_SECTIONS
        .iter()
        .map(|&id| NavItem {
            id,
            label: chrome.label(id),
            href: chrome.anchor(id),
        })
        .collect()
}

pub fn header(chrome: &Chrome, modals: &ModalStack) -> HeaderView {
    let ctx = chrome.render_context(modals);
    HeaderView {
        brand: ctx.company_name(chrome.info),
        suffix: chrome.label("advertising"),
        logo: chrome.info.and_then(|i| i.logo.clone()),
        nav: nav(chrome),
        quote_href: chrome.anchor("contact"),
        switch_label: chrome.label("switchLanguage"),
        switch_next: chrome.return_to.to_string(),
    }
}

/// First `limit` characters of `text`, with an ellipsis when it was cut.
pub fn excerpt(text: &str, limit: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(limit).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

pub fn footer(chrome: &Chrome, modals: &ModalStack) -> FooterView {
    let language = chrome.language;
    let info = chrome.info;
    let about = info
        .map(|i| i.about.resolve(language))
        .filter(|a| !a.is_empty())
        .map(|a| excerpt(&a, FOOTER_ABOUT_LIMIT))
        .unwrap_or_else(|| language.pick(FOOTER_ABOUT.0, FOOTER_ABOUT.1).to_string());
    let phones = info.map(|i| i.phones().join(" - ")).filter(|p| !p.is_empty());
    let present = |v: Option<&String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

    FooterView {
        company_name: chrome.render_context(modals).company_name(info),
        suffix: chrome.label("advertising"),
        logo: info.and_then(|i| i.logo.clone()),
        about,
        social: sections::social(info),
        quick_links: nav(chrome),
        address: info
            .map(|i| i.address.resolve(language))
            .filter(|a| !a.is_empty()),
        phones,
        email: present(info.and_then(|i| i.email.as_ref())),
        website: present(info.and_then(|i| i.website.as_ref())),
        year: chrome.now.year(),
    }
}

// ---------------------------------------------------------------------------
// Home

#[derive(Clone, Debug, Serialize)]
pub struct OrbitItem {
    pub title: String,
    pub icon: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoadingView {
    pub name: String,
    pub logo: Option<String>,
    pub orbit: Vec<OrbitItem>,
    pub min_duration_ms: u128,
}

#[derive(Clone, Debug, Serialize)]
pub struct HomeView {
    pub page: PageView,
    pub loading: LoadingView,
    pub hero: HeroView,
    pub about: SectionState<AboutView>,
    pub services: SectionState<ServicesView>,
    pub partners: SectionState<PartnersView>,
    pub testimonials: SectionState<Vec<TestimonialCard>>,
    pub contact: ContactView,
}

fn company_title(info: Option<&CompanyInfo>) -> String {
    info.and_then(|i| i.company_name.ar.as_deref())
        .filter(|n| !n.trim().is_empty())
        .map(|ar| {
            let en = info
                .and_then(|i| i.company_name.en.as_deref())
                .filter(|n| !n.trim().is_empty())
                .unwrap_or("Lonan Advertising");
            format!("{ar} | {en}")
        })
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

pub fn home_meta(language: Language, info: Option<&CompanyInfo>) -> PageMeta {
    let title = company_title(info);
    PageMeta {
        description: info
            .map(|i| i.about.resolve(language))
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| language.pick(DEFAULT_DESCRIPTION.0, DEFAULT_DESCRIPTION.1).into()),
        keywords: KEYWORDS,
        og_title: title.clone(),
        og_description: info
            .map(|i| i.tagline.resolve(language))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| {
                language
                    .pick(DEFAULT_OG_DESCRIPTION.0, DEFAULT_OG_DESCRIPTION.1)
                    .into()
            }),
        og_locale: language.og_locale(),
        title,
    }
}

fn loading(chrome: &Chrome, modals: &ModalStack, content: Option<&HomeContent>) -> LoadingView {
    let language = chrome.language;
    let services: &[Service] = content.map(|c| c.services.as_slice()).unwrap_or_default();
    let orbit = if services.is_empty() {
        (0..LoadingScreen::orbit_count(0))
            .map(|_| OrbitItem {
                title: String::new(),
                icon: "default".into(),
            })
            .collect()
    } else {
        services
            .iter()
            .map(|s| OrbitItem {
                title: s.title.resolve(language),
                icon: sections::icon_key(s.icon.as_deref()).to_string(),
            })
            .collect()
    };

    LoadingView {
        name: chrome.render_context(modals).company_name(chrome.info),
        logo: chrome.info.and_then(|i| i.logo.clone()),
        orbit,
        min_duration_ms: LoadingScreen::default().min_duration().as_millis(),
    }
}

pub fn home(
    chrome: &Chrome,
    content: Option<&HomeContent>,
    modals: &ModalStack,
    form: &ContactForm,
) -> HomeView {
    let ctx = chrome.render_context(modals);
    HomeView {
        page: page(chrome, home_meta(chrome.language, chrome.info), modals),
        loading: loading(chrome, modals, content),
        hero: sections::hero(&ctx, chrome.info),
        about: sections::about(&ctx, content),
        services: sections::services(&ctx, content),
        partners: sections::partners(&ctx, content),
        testimonials: sections::testimonials(&ctx, content),
        contact: sections::contact(
            &ctx,
            content,
            form,
            &chrome.settings.whatsapp_fallback,
            Duration::from_secs(chrome.settings.confirmation_seconds),
        ),
    }
}

// ---------------------------------------------------------------------------
// Service page

#[derive(Clone, Debug, Serialize)]
pub struct ServicePageView {
    pub page: PageView,
    /// Slug as requested, shown when the service has no published page.
    pub heading: String,
    pub detail: Option<ServiceDetailView>,
    pub back_href: &'static str,
}

pub fn service_page(
    chrome: &Chrome,
    slug: &str,
    service: Option<&Service>,
    image_index: usize,
) -> ServicePageView {
    let language = chrome.language;
    let detail = service.map(|s| {
        sections::service_detail(language, s, image_index, |i| {
            format!("{}?image={i}", chrome.path)
        })
    });
    let heading = detail
        .as_ref()
        .map(|d| d.title.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| slug.to_string());
    let brand = language.pick("لونان للدعاية والإعلان", "Lonan Advertising");
    let description = detail
        .as_ref()
        .map(|d| d.description.clone())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| {
            language
                .pick(
                    "خدمات لونان للدعاية والإعلان - حلول متكاملة لنجاح أعمالك",
                    "Lonan advertising services - integrated solutions for your business success",
                )
                .into()
        });
    let title = format!("{heading} | {brand}");

    ServicePageView {
        page: page(
            chrome,
            PageMeta {
                og_title: title.clone(),
                og_description: description.clone(),
                title,
                description,
                keywords: KEYWORDS,
                og_locale: language.og_locale(),
            },
            &ModalStack::new(),
        ),
        heading,
        detail,
        back_href: "/#services",
    }
}

// ---------------------------------------------------------------------------
// Blog post

#[derive(Clone, Debug, Serialize)]
pub struct PostView {
    pub title: String,
    pub image: Option<String>,
    pub published: Option<String>,
    pub published_iso: Option<String>,
    pub body_html: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct PostPageView {
    pub page: PageView,
    pub post: Option<PostView>,
    pub cta: LinkView,
}

const ARABIC_MONTHS: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر", "أكتوبر",
    "نوفمبر", "ديسمبر",
];

/// Long-form date in the reader's language, e.g. `5 March 2024`.
pub fn long_date(language: Language, date: &DateTime<Utc>) -> String {
    match language {
        Language::Ar => format!(
            "{} {} {}",
            date.day(),
            ARABIC_MONTHS[date.month0() as usize],
            date.year()
        ),
        Language::En => date.format("%-d %B %Y").to_string(),
    }
}

pub fn post_page(chrome: &Chrome, post: Option<&Post>) -> PostPageView {
    let language = chrome.language;
    let site = language.pick("لونان", "Lonan");
    let title = post.and_then(|p| p.title.clone()).filter(|t| !t.trim().is_empty());

    let meta = PageMeta {
        title: format!(
            "{} | {site}",
            title.clone().unwrap_or_else(|| chrome.label("blog"))
        ),
        description: post
            .and_then(|p| p.excerpt.clone())
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| {
                language
                    .pick("مدونة لونان للدعاية والإعلان", "Lonan advertising blog")
                    .into()
            }),
        keywords: KEYWORDS,
        og_title: String::new(),
        og_description: String::new(),
        og_locale: language.og_locale(),
    };
    let meta = PageMeta {
        og_title: meta.title.clone(),
        og_description: meta.description.clone(),
        ..meta
    };

    let page = page(chrome, meta, &ModalStack::new());
    PostPageView {
        cta: LinkView {
            text: chrome.label("contactUs"),
            href: page.whatsapp_href.clone(),
        },
        page,
        post: post.map(|p| PostView {
            title: title.unwrap_or_default(),
            image: p.image.clone(),
            published: p.published_at.as_ref().map(|d| long_date(language, d)),
            published_iso: p.published_at.as_ref().map(|d| d.to_rfc3339()),
            body_html: portable_text::to_html(&p.body),
        }),
    }
}

// ---------------------------------------------------------------------------
// Errors

#[derive(Clone, Debug, Serialize)]
pub struct ErrorView {
    pub page: PageView,
    pub status: u16,
    pub heading: String,
    pub details: String,
    /// Error chain, only filled in dev mode.
    pub trace: Option<String>,
}

pub fn error_page(chrome: &Chrome, status: u16, trace: Option<String>) -> ErrorView {
    let not_found = status == 404;
    let heading = if not_found {
        "404".to_string()
    } else {
        chrome.label("errorHeading")
    };
    let details = if not_found {
        chrome.label("notFoundDetails")
    } else {
        chrome.label("errorDetails")
    };
    let title = format!("{} | {}", chrome.label("errorTitle"), heading);

    ErrorView {
        page: page(
            chrome,
            PageMeta {
                og_title: title.clone(),
                og_description: details.clone(),
                title,
                description: details.clone(),
                keywords: KEYWORDS,
                og_locale: chrome.language.og_locale(),
            },
            &ModalStack::new(),
        ),
        status,
        heading,
        details,
        trace: trace.filter(|_| chrome.settings.dev_mode),
    }
}
