//! Per-section view models.
//!
//! Each home section decides from its own data whether it renders content
//! or the "add content from the dashboard" placeholder. Text is resolved to
//! the active language here, so templates only print strings.

use std::time::Duration;

use serde::Serialize;
use serde::ser::SerializeStruct;

use crate::lonan::content::HomeContent;
use crate::lonan::content::model::{CompanyInfo, Partner, Project, Service, Testimonial};
use crate::lonan::i18n::{Language, LocalizedText, lookup};
use crate::lonan::links;
use crate::lonan::widgets::{
    ContactForm, Counter, FormStatus, Gallery, Modal, ModalStack, ScrollReveal,
    contact_form::service_options,
};

/// Render state of one section.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionState<T> {
    /// Content has not been fetched yet.
    Loading,
    /// Fetched, but nothing to show: render the placeholder.
    Empty,
    Populated(T),
}

impl<T> SectionState<T> {
    /// `None` content is still loading; otherwise `is_empty` picks the branch.
    pub fn classify<D>(
        data: Option<&D>,
        is_empty: impl FnOnce(&D) -> bool,
        build: impl FnOnce(&D) -> T,
    ) -> Self {
        match data {
            None => Self::Loading,
            Some(d) if is_empty(d) => Self::Empty,
            Some(d) => Self::Populated(build(d)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn populated(&self) -> Option<&T> {
        match self {
            Self::Populated(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Serialize> Serialize for SectionState<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SectionState", 4)?;
        s.serialize_field("loading", &self.is_loading())?;
        s.serialize_field("empty", &self.is_empty())?;
        s.serialize_field("populated", &self.populated().is_some())?;
        s.serialize_field("data", &self.populated())?;
        s.end()
    }
}

/// What every section builder needs besides its data.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    pub language: Language,
    pub modals: &'a ModalStack,
    /// Path the page was served from; modal links point back here.
    pub path: &'a str,
}

impl RenderContext<'_> {
    fn text(&self, value: &LocalizedText) -> String {
        value.resolve(self.language)
    }

    fn label(&self, key: &str) -> String {
        lookup(self.language, key).into_owned()
    }

    fn modal(&self, modal: Modal) -> ModalView {
        ModalView {
            dom_id: modal.dom_id(),
            key: modal.to_string(),
            open: self.modals.is_open(&modal),
            open_href: self.modals.with(modal.clone()).href(self.path),
            close_href: self.modals.without(&modal).href(self.path),
        }
    }

    /// Brand name, falling back to the agency name in the active language.
    pub fn company_name(&self, info: Option<&CompanyInfo>) -> String {
        info.map(|i| self.text(&i.company_name))
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.language.pick("لونان", "Lonan").to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModalView {
    pub dom_id: String,
    pub key: String,
    pub open: bool,
    pub open_href: String,
    pub close_href: String,
}

// ---------------------------------------------------------------------------
// Hero

#[derive(Clone, Debug, Serialize)]
pub struct CounterView {
    pub target: u64,
    pub prefix: &'static str,
    pub label: String,
    pub duration_ms: u128,
    pub initial: u64,
}

impl CounterView {
    fn new(counter: &Counter, label: String) -> Self {
        Self {
            target: counter.target(),
            prefix: "+",
            label,
            duration_ms: counter.duration().as_millis(),
            initial: counter.value(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct HeroView {
    pub name: String,
    pub suffix: String,
    pub tagline: String,
    pub hero_image: Option<String>,
    pub logo: Option<String>,
    pub stats: Vec<CounterView>,
}

pub fn hero(ctx: &RenderContext, info: Option<&CompanyInfo>) -> HeroView {
    let tagline = info
        .map(|i| ctx.text(&i.tagline))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| ctx.label("oneStopShop"));
    let duration = Duration::from_millis(2000);

    HeroView {
        name: ctx.company_name(info),
        suffix: ctx.label("advertising"),
        tagline,
        hero_image: info.and_then(|i| i.hero_image.clone()),
        logo: info.and_then(|i| i.logo.clone()),
        stats: vec![
            CounterView::new(&Counter::new(20, duration), ctx.label("yearsExperience")),
            CounterView::new(&Counter::new(500, duration), ctx.label("happyClients")),
        ],
    }
}

// ---------------------------------------------------------------------------
// About

#[derive(Clone, Debug, Serialize)]
pub struct AboutView {
    pub company_name: String,
    pub about: Option<String>,
    pub vision: String,
    pub mission: String,
    pub about_modal: ModalView,
    pub vision_modal: ModalView,
}

const DEFAULT_VISION: (&str, &str) = (
    "أن نكون الخيار الأول للحلول الإعلانية والتسويق الإلكتروني في المملكة، بمعايير عالمية وهوية سعودية راسخة.",
    "To be the first choice for advertising and digital marketing solutions in the Kingdom, with global standards and a strong Saudi identity.",
);

const DEFAULT_MISSION: (&str, &str) = (
    "أن نصنع لكل عميل بصمة إعلانية مميزة تجمع بين الإبداع والجودة والسرعة، وتواكب الفعاليات والمناسبات المحلية بروح سعودية أصيلة.",
    "To create a distinctive advertising footprint for each client that combines creativity, quality, and speed, keeping up with local events and occasions with an authentic Saudi spirit.",
);

pub fn about_is_empty(info: &CompanyInfo) -> bool {
    info.about.is_empty() && info.vision.is_empty() && info.mission.is_empty()
}

pub fn about(ctx: &RenderContext, content: Option<&HomeContent>) -> SectionState<AboutView> {
    match content {
        None => SectionState::Loading,
        Some(c) => match c.company_info.as_ref() {
            None => SectionState::Empty,
            Some(info) => SectionState::classify(Some(info), about_is_empty, |info| AboutView {
                company_name: ctx.company_name(Some(info)),
                about: Some(ctx.text(&info.about)).filter(|a| !a.is_empty()),
                vision: info
                    .vision
                    .resolve_or(ctx.language, ctx.language.pick(DEFAULT_VISION.0, DEFAULT_VISION.1)),
                mission: info.mission.resolve_or(
                    ctx.language,
                    ctx.language.pick(DEFAULT_MISSION.0, DEFAULT_MISSION.1),
                ),
                about_modal: ctx.modal(Modal::About),
                vision_modal: ctx.modal(Modal::VisionMission),
            }),
        },
    }
}

// ---------------------------------------------------------------------------
// Services

#[derive(Clone, Debug, Serialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub active: bool,
    pub href: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct GalleryView {
    pub images: Vec<GalleryImage>,
    pub current: Option<String>,
    pub current_alt: String,
    pub badge: String,
    pub navigable: bool,
    pub previous_href: String,
    pub next_href: String,
}

impl GalleryView {
    /// `href` maps an image index to the link that shows it.
    pub fn build(images: &[String], index: usize, title: &str, href: impl Fn(usize) -> String) -> Self {
        let gallery = Gallery::at(images.len(), index);
        let alt = |i: usize| format!("{title} - {}", i + 1);

        Self {
            images: images
                .iter()
                .enumerate()
                .map(|(i, src)| GalleryImage {
                    src: src.clone(),
                    alt: alt(i),
                    active: i == gallery.index(),
                    href: href(i),
                })
                .collect(),
            current: images.get(gallery.index()).cloned(),
            current_alt: alt(gallery.index()),
            badge: gallery.badge(),
            navigable: gallery.navigable(),
            previous_href: href(gallery.previous_index()),
            next_href: href(gallery.next_index()),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ServiceDetailView {
    pub title: String,
    /// The title in the other language, shown as a subtitle.
    pub subtitle: Option<String>,
    pub description: String,
    pub icon: String,
    pub image: Option<String>,
    pub features: Vec<String>,
    pub gallery: GalleryView,
}

/// Icons with dedicated artwork; anything else renders the default icon.
const KNOWN_ICONS: &[&str] = &[
    "digital-marketing",
    "outdoor-signage",
    "printing",
    "trophies-gifts",
    "events",
    "laser-cutting",
];

pub fn icon_key(icon: Option<&str>) -> &str {
    icon.filter(|i| KNOWN_ICONS.contains(i)).unwrap_or("default")
}

pub fn service_detail(
    language: Language,
    service: &Service,
    image_index: usize,
    href: impl Fn(usize) -> String,
) -> ServiceDetailView {
    let title = service
        .title
        .resolve_or(language, language.pick("خدمة", "Service"));
    let subtitle = match language {
        Language::Ar => service.title.en.as_deref(),
        Language::En => service.title.ar.as_deref(),
    };
    ServiceDetailView {
        subtitle: subtitle
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != title)
            .map(String::from),
        gallery: GalleryView::build(&service.gallery, image_index, &title, href),
        description: service.description.resolve(language),
        icon: icon_key(service.icon.as_deref()).to_string(),
        image: service.image.clone(),
        features: service
            .features
            .iter()
            .map(|f| f.resolve(language))
            .filter(|f| !f.is_empty())
            .collect(),
        title,
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ServiceCard {
    pub id: String,
    pub page_href: Option<String>,
    pub preview_features: Vec<String>,
    pub delay_ms: u64,
    pub modal: ModalView,
    pub detail: ServiceDetailView,
}

#[derive(Clone, Debug, Serialize)]
pub struct AudienceItem {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ServicesView {
    pub cards: Vec<ServiceCard>,
    pub audience: Vec<AudienceItem>,
    pub reveal_threshold: f64,
}

fn service_modal_key(service: &Service) -> String {
    service
        .slug
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| service.id.clone())
}

pub fn services(ctx: &RenderContext, content: Option<&HomeContent>) -> SectionState<ServicesView> {
    SectionState::classify(
        content.map(|c| &c.services),
        |services| services.is_empty(),
        |services| ServicesView {
            cards: services
                .iter()
                .enumerate()
                .map(|(i, service)| service_card(ctx, i, service))
                .collect(),
            audience: [
                ("🏪", "businessOwners", "businessDesc"),
                ("🎓", "educational", "educationalDesc"),
                ("🏢", "companies", "companiesDesc"),
                ("🎉", "individuals", "individualsDesc"),
            ]
            .into_iter()
            .map(|(icon, title, desc)| AudienceItem {
                icon,
                title: ctx.label(title),
                description: ctx.label(desc),
            })
            .collect(),
            reveal_threshold: ScrollReveal::default().threshold(),
        },
    )
}

fn service_card(ctx: &RenderContext, position: usize, service: &Service) -> ServiceCard {
    let detail = service_detail(ctx.language, service, 0, |_| String::new());
    ServiceCard {
        id: service.id.clone(),
        page_href: service
            .slug
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| links::local_path(&["services", s])),
        preview_features: detail.features.iter().take(2).cloned().collect(),
        delay_ms: position as u64 * 150 + 200,
        modal: ctx.modal(Modal::Service(service_modal_key(service))),
        detail,
    }
}

// ---------------------------------------------------------------------------
// Partners and portfolio

#[derive(Clone, Debug, Serialize)]
pub struct PartnerCard {
    pub name: String,
    pub logo: Option<String>,
    pub initial: String,
    pub href: String,
    pub external: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub cover: Option<String>,
    pub client: Option<String>,
    pub category: Option<String>,
    pub modal: ModalView,
    pub gallery: GalleryView,
}

#[derive(Clone, Debug, Serialize)]
pub struct PartnersView {
    pub partners: Vec<PartnerCard>,
    pub projects: Vec<ProjectCard>,
}

pub fn partners_is_empty(content: &HomeContent) -> bool {
    content.partners.is_empty() && content.projects.is_empty()
}

pub fn partners(ctx: &RenderContext, content: Option<&HomeContent>) -> SectionState<PartnersView> {
    SectionState::classify(content, partners_is_empty, |c| PartnersView {
        partners: c.partners.iter().map(partner_card).collect(),
        projects: c.projects.iter().map(|p| project_card(ctx, p)).collect(),
    })
}

fn partner_card(partner: &Partner) -> PartnerCard {
    let name = partner
        .name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "Partner".into());
    let website = partner.website.as_deref().filter(|w| !w.trim().is_empty());
    PartnerCard {
        initial: partner
            .name
            .as_deref()
            .and_then(|n| n.trim().chars().next())
            .map(String::from)
            .unwrap_or_else(|| "؟".into()),
        name,
        logo: partner.logo.clone(),
        href: website.map(links::website).unwrap_or_else(|| "#".into()),
        external: website.is_some(),
    }
}

fn project_card(ctx: &RenderContext, project: &Project) -> ProjectCard {
    let title = ctx.text(&project.title);
    ProjectCard {
        description: ctx.text(&project.description),
        cover: project.images.first().cloned(),
        client: project.client.clone().filter(|c| !c.trim().is_empty()),
        category: project
            .service
            .as_ref()
            .map(|s| ctx.text(&s.title))
            .filter(|t| !t.is_empty()),
        modal: ctx.modal(Modal::Project(project.id.clone())),
        gallery: GalleryView::build(&project.images, 0, &title, |_| String::new()),
        title,
    }
}

// ---------------------------------------------------------------------------
// Testimonials

#[derive(Clone, Debug, Serialize)]
pub struct TestimonialCard {
    pub client_name: String,
    pub company: Option<String>,
    pub quote: String,
    pub stars: Vec<u8>,
    pub avatar: Option<String>,
}

pub fn testimonials(
    ctx: &RenderContext,
    content: Option<&HomeContent>,
) -> SectionState<Vec<TestimonialCard>> {
    SectionState::classify(
        content.map(|c| &c.testimonials),
        |t| t.iter().all(|t| t.quote.is_empty()),
        |t| {
            t.iter()
                .filter(|t| !t.quote.is_empty())
                .map(|t| testimonial_card(ctx, t))
                .collect()
        },
    )
}

fn testimonial_card(ctx: &RenderContext, t: &Testimonial) -> TestimonialCard {
    TestimonialCard {
        client_name: t.client_name.clone().unwrap_or_default(),
        company: t.company.clone().filter(|c| !c.trim().is_empty()),
        quote: ctx.text(&t.quote),
        stars: (1..=t.stars()).collect(),
        avatar: t.avatar.clone(),
    }
}

// ---------------------------------------------------------------------------
// Contact

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinkView {
    pub text: String,
    pub href: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SocialView {
    pub network: &'static str,
    pub href: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ContactInfoView {
    pub address: Option<String>,
    pub phones: Vec<LinkView>,
    pub email: Option<LinkView>,
    pub website: Option<LinkView>,
    pub social: Vec<SocialView>,
}

#[derive(Clone, Debug, Serialize)]
pub struct FormFieldView {
    pub value: String,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ServiceOption {
    pub value: String,
    pub selected: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct ContactFormView {
    pub sent: bool,
    pub name: FormFieldView,
    pub phone: FormFieldView,
    pub email: FormFieldView,
    pub service: FormFieldView,
    pub message: FormFieldView,
    pub service_options: Vec<ServiceOption>,
    pub confirmation_ms: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct ContactView {
    pub info: SectionState<ContactInfoView>,
    pub whatsapp_href: String,
    pub form: ContactFormView,
}

pub fn contact_info_is_empty(info: &CompanyInfo) -> bool {
    info.address.is_empty()
        && info.phones().is_empty()
        && [&info.email, &info.website, &info.whatsapp]
            .iter()
            .all(|v| v.as_deref().is_none_or(|s| s.trim().is_empty()))
        && info
            .social_links
            .as_ref()
            .is_none_or(|s| s.entries().is_empty())
}

pub fn social(info: Option<&CompanyInfo>) -> Vec<SocialView> {
    info.and_then(|i| i.social_links.as_ref())
        .map(|s| {
            s.entries()
                .into_iter()
                .map(|(network, href)| SocialView {
                    network,
                    href: href.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn contact(
    ctx: &RenderContext,
    content: Option<&HomeContent>,
    form: &ContactForm,
    whatsapp_fallback: &str,
    confirmation: Duration,
) -> ContactView {
    let info = content.map(|c| c.company_info.as_ref());
    let info_state = match info {
        None => SectionState::Loading,
        Some(None) => SectionState::Empty,
        Some(Some(i)) => SectionState::classify(Some(i), contact_info_is_empty, |i| {
            contact_info(ctx, i)
        }),
    };

    ContactView {
        info: info_state,
        whatsapp_href: links::whatsapp(
            info.flatten().and_then(|i| i.whatsapp.as_deref()),
            whatsapp_fallback,
        ),
        form: contact_form(ctx, form, confirmation),
    }
}

fn contact_info(ctx: &RenderContext, info: &CompanyInfo) -> ContactInfoView {
    ContactInfoView {
        address: Some(ctx.text(&info.address)).filter(|a| !a.is_empty()),
        phones: info
            .phones()
            .into_iter()
            .map(|p| LinkView {
                text: p.to_string(),
                href: links::tel(p),
            })
            .collect(),
        email: info
            .email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .map(|e| LinkView {
                text: e.trim().to_string(),
                href: links::mailto(e),
            }),
        website: info
            .website
            .as_deref()
            .filter(|w| !w.trim().is_empty())
            .map(|w| LinkView {
                text: w.trim().to_string(),
                href: links::website(w),
            }),
        social: social(Some(info)),
    }
}

fn contact_form(ctx: &RenderContext, form: &ContactForm, confirmation: Duration) -> ContactFormView {
    let fields = form.fields();
    let field = |name: &str, value: &str| FormFieldView {
        value: value.to_string(),
        error: form
            .errors()
            .iter()
            .find(|e| e.field == name)
            .map(|e| ctx.label(e.message)),
    };

    ContactFormView {
        sent: form.status() == FormStatus::Sent,
        name: field("name", &fields.name),
        phone: field("phone", &fields.phone),
        email: field("email", &fields.email),
        service: field("service", &fields.service),
        message: field("message", &fields.message),
        service_options: service_options(ctx.language)
            .into_iter()
            .map(|value| ServiceOption {
                selected: value == fields.service,
                value,
            })
            .collect(),
        confirmation_ms: confirmation.as_millis() as u64,
    }
}
