use std::path::{Path, PathBuf};

use confik::{Configuration, EnvSource};
use serde::{Deserialize, Serialize};

use self::yaml::YamlFileSource;
use crate::lonan::content::HomeLimits;
use crate::lonan::i18n::Language;

#[derive(Debug, Clone, Serialize, Deserialize, Configuration)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Directory served under `/static`, relative to the crate manifest.
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            cors_origins: vec![],
            static_dir: "static".into(),
        }
    }
}

impl ServerConfig {
    pub fn static_path(&self) -> PathBuf {
        resolve_path(Path::new(env!("CARGO_MANIFEST_DIR")), &self.static_dir)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Configuration)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    #[confik(secret)]
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}

impl Default for SanityConfig {
    fn default() -> Self {
        Self {
            project_id: "k9rryuyc".into(),
            dataset: "production".into(),
            api_version: "2024-01-01".into(),
            use_cdn: false,
            token: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Configuration)]
#[serde(rename_all = "lowercase")]
#[confik(forward(serde(rename_all = "lowercase")))]
pub enum ContentBackend {
    Sanity,
    Fixtures,
}

#[derive(Debug, Clone, Serialize, Deserialize, Configuration)]
pub struct ContentConfig {
    pub source: ContentBackend,
    /// Relative paths resolve against the crate manifest directory.
    pub fixtures_dir: String,
    pub featured_projects_limit: usize,
    pub featured_testimonials_limit: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: ContentBackend::Sanity,
            fixtures_dir: "fixtures".into(),
            featured_projects_limit: 8,
            featured_testimonials_limit: 6,
        }
    }
}

impl ContentConfig {
    pub fn home_limits(&self) -> HomeLimits {
        HomeLimits {
            projects: self.featured_projects_limit,
            testimonials: self.featured_testimonials_limit,
        }
    }

    pub fn fixtures_path(&self) -> PathBuf {
        resolve_path(Path::new(env!("CARGO_MANIFEST_DIR")), &self.fixtures_dir)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Configuration)]
pub struct SiteSettings {
    pub default_language: Language,
    /// Used for WhatsApp links when the CMS has no number.
    pub whatsapp_fallback: String,
    /// How long the browser keeps the "message sent" confirmation up.
    pub confirmation_seconds: u64,
    /// Shows error details on the error page.
    pub dev_mode: bool,
    pub fonts_href: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            default_language: Language::Ar,
            whatsapp_fallback: "966570157777".into(),
            confirmation_seconds: 3,
            dev_mode: false,
            fonts_href: "https://fonts.googleapis.com/css2?family=Tajawal:wght@400;500;700;800;900&family=Cairo:wght@400;500;600;700;800;900&family=Poppins:wght@400;500;600;700;800;900&display=swap".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Configuration)]
pub struct SiteConfig {
    pub server: ServerConfig,
    pub sanity: SanityConfig,
    pub content: ContentConfig,
    pub site: SiteSettings,
}

impl SiteConfig {
    /// Load configuration from `config.yml` (if present) and environment variables.
    /// Falls back to the compiled-in defaults when parsing fails.
    pub fn load() -> Self {
        let config_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.yml");
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Self {
        let mut builder = SiteConfig::builder();

        if config_path.exists() {
            builder.override_with(YamlFileSource::new(config_path));
        }

        builder.override_with(EnvSource::new().allow_secrets());

        match builder.try_build() {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!(
                    "Failed to load {} or env overrides: {err}. Using defaults.",
                    config_path.display()
                );
                SiteConfig::default()
            }
        }
    }
}

pub fn resolve_path(base: &Path, path: &str) -> PathBuf {
    let candidate = PathBuf::from(path);
    if candidate.is_absolute() {
        candidate
    } else {
        base.join(path)
    }
}

mod yaml {
    use std::error::Error;
    use std::path::PathBuf;

    use confik::Source;
    use serde::de::DeserializeOwned;
    use serde_yaml;

    #[derive(Debug)]
    pub struct YamlFileSource {
        path: PathBuf,
    }

    impl YamlFileSource {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }
    }

    impl<T> Source<T> for YamlFileSource
    where
        T: DeserializeOwned + confik::ConfigurationBuilder,
    {
        fn allows_secrets(&self) -> bool {
            false
        }

        fn provide(&self) -> Result<T, Box<dyn Error + Sync + Send>> {
            let contents = std::fs::read_to_string(&self.path)?;
            let parsed = serde_yaml::from_str(&contents)?;
            Ok(parsed)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn reads_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(
            &path,
            r#"
server:
  host: 0.0.0.0
  port: 9000
  cors_origins: ["*"]
  static_dir: public
sanity:
  project_id: abc
  dataset: staging
  api_version: "2024-01-01"
  use_cdn: true
content:
  source: fixtures
  fixtures_dir: /tmp/lonan-fixtures
  featured_projects_limit: 4
  featured_testimonials_limit: 2
site:
  default_language: en
  whatsapp_fallback: "966500000000"
  confirmation_seconds: 5
  dev_mode: true
  fonts_href: https://fonts.example/css
"#,
        )
        .unwrap();

        let cfg = SiteConfig::load_from(&path);
        assert_eq!(cfg.server.port, 9000);
        assert!(cfg.server.static_path().ends_with("public"));
        assert_eq!(cfg.sanity.dataset, "staging");
        assert_eq!(cfg.content.source, ContentBackend::Fixtures);
        assert_eq!(
            cfg.content.fixtures_path(),
            PathBuf::from("/tmp/lonan-fixtures")
        );
        assert_eq!(cfg.content.home_limits().projects, 4);
        assert_eq!(cfg.site.default_language, Language::En);
        assert!(cfg.site.dev_mode);
    }

    #[test]
    fn unreadable_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "server: [not, a, map]").unwrap();

        let cfg = SiteConfig::load_from(&path);
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.site.default_language, Language::Ar);
        assert_eq!(cfg.content.featured_testimonials_limit, 6);
    }

    #[test]
    fn relative_fixture_dir_resolves_against_manifest() {
        let cfg = ContentConfig::default();
        assert!(cfg.fixtures_path().ends_with("fixtures"));
        assert!(cfg.fixtures_path().is_absolute());
    }
}
