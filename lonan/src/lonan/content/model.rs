use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lonan::content::portable_text::Block;
use crate::lonan::i18n::LocalizedText;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(default)]
    pub company_name: LocalizedText,
    #[serde(default)]
    pub tagline: LocalizedText,
    #[serde(default)]
    pub about: LocalizedText,
    #[serde(default)]
    pub vision: LocalizedText,
    #[serde(default)]
    pub mission: LocalizedText,
    #[serde(default)]
    pub address: LocalizedText,
    pub logo: Option<String>,
    pub logo_light: Option<String>,
    pub hero_image: Option<String>,
    pub phone1: Option<String>,
    pub phone2: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
}

impl CompanyInfo {
    pub fn phones(&self) -> Vec<&str> {
        [self.phone1.as_deref(), self.phone2.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.trim().is_empty())
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub snapchat: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub tiktok: Option<String>,
}

impl SocialLinks {
    /// Configured profiles in display order, as `(network, url)`.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("snapchat", self.snapchat.as_deref()),
            ("instagram", self.instagram.as_deref()),
            ("twitter", self.twitter.as_deref()),
            ("facebook", self.facebook.as_deref()),
            ("linkedin", self.linkedin.as_deref()),
            ("tiktok", self.tiktok.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, url)| url.filter(|u| !u.trim().is_empty()).map(|u| (name, u)))
        .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: LocalizedText,
    pub slug: Option<String>,
    #[serde(default)]
    pub description: LocalizedText,
    pub icon: Option<String>,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub gallery: Vec<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub features: Vec<LocalizedText>,
    pub order: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub order: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceRef {
    pub slug: Option<String>,
    #[serde(default)]
    pub title: LocalizedText,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub images: Vec<String>,
    pub client: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub order: Option<f64>,
    pub service: Option<ServiceRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: String,
    pub client_name: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub quote: LocalizedText,
    pub rating: Option<f64>,
    pub avatar: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(rename = "_createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Testimonial {
    /// Star count for display, kept inside the 1..=5 range the studio enforces.
    pub fn stars(&self) -> u8 {
        self.rating
            .filter(|r| r.is_finite())
            .map(|r| r.round().clamp(1.0, 5.0) as u8)
            .unwrap_or(5)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub body: Vec<Block>,
}

/// GROQ returns `null` for projected arrays that were never authored.
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_info_reads_projected_pairs() {
        let json = r#"{
            "companyName": {"ar": "لونان", "en": "Lonan"},
            "vision": {"ar": "رؤية", "en": null},
            "phone1": "0500000000",
            "phone2": "",
            "socialLinks": {"instagram": "https://instagram.com/lonan"}
        }"#;
        let info: CompanyInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.company_name.en.as_deref(), Some("Lonan"));
        assert_eq!(info.vision.en, None);
        assert!(info.about.is_empty());
        assert_eq!(info.phones(), vec!["0500000000"]);
        let social = info.social_links.unwrap();
        assert_eq!(
            social.entries(),
            vec![("instagram", "https://instagram.com/lonan")]
        );
    }

    #[test]
    fn service_tolerates_null_arrays() {
        let json = r#"{"_id": "s1", "title": {"ar": "طباعة"}, "gallery": null, "features": null}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert!(service.gallery.is_empty());
        assert!(service.features.is_empty());
    }

    #[test]
    fn stars_stay_in_range() {
        let mut t = Testimonial {
            rating: Some(4.0),
            ..Default::default()
        };
        assert_eq!(t.stars(), 4);
        t.rating = Some(9.0);
        assert_eq!(t.stars(), 5);
        t.rating = Some(0.0);
        assert_eq!(t.stars(), 1);
        t.rating = None;
        assert_eq!(t.stars(), 5);
    }
}
