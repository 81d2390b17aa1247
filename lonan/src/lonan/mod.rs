pub mod cache;
pub mod config;
pub mod content;
pub mod errors;
pub mod i18n;
pub mod links;
pub mod scripts;
pub mod sections;
pub mod styles;
pub mod views;
pub mod widgets;

pub use config::SiteConfig;
pub use errors::SiteError;
pub use i18n::{Language, LanguageState};
