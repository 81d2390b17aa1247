//! GROQ queries, one per document type.
//!
//! Bilingual `field`/`fieldEn` pairs are projected into `{ "ar", "en" }`
//! objects so they deserialize straight into `LocalizedText`.

use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    pub groq: &'static str,
    pub params: Vec<(&'static str, Value)>,
}

impl Query {
    pub fn new(groq: &'static str) -> Self {
        Self {
            groq,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.params.push((name, value.into()));
        self
    }
}

pub const COMPANY_INFO: &str = r#"*[_type == "companyInfo"][0] {
  "companyName": {"ar": companyName, "en": companyNameEn},
  "tagline": {"ar": tagline, "en": taglineEn},
  "about": {"ar": about, "en": aboutEn},
  "vision": {"ar": vision, "en": visionEn},
  "mission": {"ar": mission, "en": missionEn},
  "address": {"ar": address, "en": addressEn},
  "logo": logo.asset->url,
  "logoLight": logoLight.asset->url,
  "heroImage": heroImage.asset->url,
  phone1,
  phone2,
  whatsapp,
  email,
  website,
  socialLinks
}"#;

macro_rules! service_fields {
    () => {
        r#"_id,
  "title": {"ar": title, "en": titleEn},
  "slug": slug.current,
  "description": {"ar": description, "en": descriptionEn},
  icon,
  "image": image.asset->url,
  "gallery": gallery[].asset->url,
  "features": features[]{"ar": text, "en": textEn},
  order"#
    };
}

pub const SERVICES: &str = concat!(
    r#"*[_type == "service"] | order(order asc) {
  "#,
    service_fields!(),
    "\n}"
);

pub const SERVICE_BY_SLUG: &str = concat!(
    r#"*[_type == "service" && slug.current == $slug][0] {
  "#,
    service_fields!(),
    "\n}"
);

pub const PARTNERS: &str = r#"*[_type == "partner"] | order(order asc) {
  _id,
  name,
  "logo": logo.asset->url,
  website,
  order
}"#;

pub const FEATURED_PROJECTS: &str = r#"*[_type == "project" && featured == true] | order(order asc)[0...$limit] {
  _id,
  "title": {"ar": title, "en": titleEn},
  "description": {"ar": description, "en": descriptionEn},
  "images": images[].asset->url,
  client,
  featured,
  order,
  "service": service->{"slug": slug.current, "title": {"ar": title, "en": titleEn}}
}"#;

pub const FEATURED_TESTIMONIALS: &str = r#"*[_type == "testimonial" && featured == true] | order(_createdAt desc)[0...$limit] {
  _id,
  _createdAt,
  clientName,
  company,
  "quote": {"ar": quote, "en": quoteEn},
  "avatar": avatar.asset->url,
  rating,
  featured
}"#;

pub const POST_BY_SLUG: &str = r#"*[_type == "post" && slug.current == $slug][0] {
  title,
  "slug": slug.current,
  excerpt,
  "image": image.asset->url,
  publishedAt,
  body
}"#;

pub fn company_info() -> Query {
    Query::new(COMPANY_INFO)
}

pub fn services() -> Query {
    Query::new(SERVICES)
}

pub fn service_by_slug(slug: &str) -> Query {
    Query::new(SERVICE_BY_SLUG).param("slug", slug)
}

pub fn partners() -> Query {
    Query::new(PARTNERS)
}

pub fn featured_projects(limit: usize) -> Query {
    Query::new(FEATURED_PROJECTS).param("limit", limit)
}

pub fn featured_testimonials(limit: usize) -> Query {
    Query::new(FEATURED_TESTIMONIALS).param("limit", limit)
}

pub fn post_by_slug(slug: &str) -> Query {
    Query::new(POST_BY_SLUG).param("slug", slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_queries_share_projection() {
        assert!(SERVICES.contains("order(order asc)"));
        assert!(SERVICE_BY_SLUG.contains("$slug"));
        for q in [SERVICES, SERVICE_BY_SLUG] {
            assert!(q.contains(r#""features": features[]{"ar": text, "en": textEn}"#));
            assert!(q.trim_end().ends_with('}'));
        }
    }

    #[test]
    fn limits_are_parameters() {
        let q = featured_projects(8);
        assert_eq!(q.params, vec![("limit", Value::from(8))]);
        assert!(q.groq.contains("[0...$limit]"));

        let q = featured_testimonials(6);
        assert!(q.groq.contains("order(_createdAt desc)"));
        assert_eq!(q.params[0].1, Value::from(6));
    }

    #[test]
    fn slug_queries_bind_the_slug() {
        let q = post_by_slug("hello");
        assert_eq!(q.params, vec![("slug", Value::from("hello"))]);
    }
}
