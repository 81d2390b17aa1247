use std::collections::HashMap;

use actix_web::HttpRequest;
use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use log::debug;

use super::{Direction, Language};

/// Key under which the chosen language code is persisted.
pub const COOKIE_NAME: &str = "lonan-language";

/// Where the visitor's language choice lives between page loads.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.save(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Reads preferences from request cookies and queues writes as response cookies.
#[derive(Debug, Default)]
pub struct CookieStore {
    incoming: HashMap<String, String>,
    outgoing: Vec<Cookie<'static>>,
}

impl CookieStore {
    pub fn from_request(req: &HttpRequest) -> Self {
        let incoming = match req.cookies() {
            Ok(cookies) => cookies
                .iter()
                .map(|c| (c.name().to_string(), c.value().to_string()))
                .collect(),
            Err(err) => {
                debug!("ignoring unparsable cookies: {err}");
                HashMap::new()
            }
        };

        Self {
            incoming,
            outgoing: Vec::new(),
        }
    }

    /// Cookies that must be attached to the response.
    pub fn into_cookies(self) -> Vec<Cookie<'static>> {
        self.outgoing
    }
}

impl PreferenceStore for CookieStore {
    fn load(&self, key: &str) -> Option<String> {
        self.incoming.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.incoming.insert(key.to_string(), value.to_string());
        self.outgoing.retain(|c| c.name() != key);
        self.outgoing.push(
            Cookie::build(key.to_string(), value.to_string())
                .path("/")
                .max_age(Duration::days(365))
                .same_site(SameSite::Lax)
                .finish(),
        );
    }
}

/// The active language for one render, plus its persistence.
#[derive(Debug)]
pub struct LanguageState<S> {
    language: Language,
    store: S,
}

impl<S: PreferenceStore> LanguageState<S> {
    /// Start from `default` unless the store holds a valid earlier choice.
    pub fn initialize(store: S, default: Language) -> Self {
        let language = store
            .load(COOKIE_NAME)
            .and_then(|code| code.parse().ok())
            .unwrap_or(default);
        Self { language, store }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }

    pub fn set(&mut self, language: Language) {
        self.language = language;
        self.store.save(COOKIE_NAME, language.code());
    }

    pub fn toggle(&mut self) -> Language {
        self.set(self.language.other());
        self.language
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
