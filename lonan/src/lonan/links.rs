//! Outbound links built from company contact details.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").expect("static regex"));
static NON_DIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9+]").expect("static regex"));
static SITE_ROOT: Lazy<Url> = Lazy::new(|| Url::parse("http://site.invalid/").expect("static url"));

/// Site-relative path with each segment percent encoded.
pub fn local_path(segments: &[&str]) -> String {
    let mut url = SITE_ROOT.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    url.path().to_string()
}

/// `https://wa.me/<digits>` for `number`, or for `fallback` when `number` has no digits.
pub fn whatsapp(number: Option<&str>, fallback: &str) -> String {
    let digits = number
        .map(|n| NON_DIGITS.replace_all(n, "").into_owned())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| NON_DIGITS.replace_all(fallback, "").into_owned());
    format!("https://wa.me/{digits}")
}

pub fn tel(number: &str) -> String {
    format!("tel:{}", NON_DIAL.replace_all(number, ""))
}

pub fn mailto(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// Website as entered in the CMS, with a scheme added when it was left out.
pub fn website(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_strips_formatting() {
        assert_eq!(
            whatsapp(Some("+966 57-015 7777"), "1"),
            "https://wa.me/966570157777"
        );
    }

    #[test]
    fn whatsapp_uses_fallback_when_missing_or_digitless() {
        assert_eq!(whatsapp(None, "966570157777"), "https://wa.me/966570157777");
        assert_eq!(
            whatsapp(Some("n/a"), "+966 570157777"),
            "https://wa.me/966570157777"
        );
    }

    #[test]
    fn tel_keeps_leading_plus() {
        assert_eq!(tel("+966 (57) 015-7777"), "tel:+966570157777");
    }

    #[test]
    fn local_path_encodes_cms_slugs() {
        assert_eq!(local_path(&["services", "printing"]), "/services/printing");
        assert_eq!(
            local_path(&["services", "a b#c?d/e"]),
            "/services/a%20b%23c%3Fd%2Fe"
        );
        assert_eq!(local_path(&["services", "50%"]), "/services/50%25");
    }

    #[test]
    fn website_gets_a_scheme() {
        assert_eq!(website("lonan.sa"), "https://lonan.sa");
        assert_eq!(website(" http://lonan.sa "), "http://lonan.sa");
        assert_eq!(mailto(" info@lonan.sa"), "mailto:info@lonan.sa");
    }
}
