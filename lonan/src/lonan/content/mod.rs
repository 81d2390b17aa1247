pub mod fixtures;
pub mod loader;
pub mod model;
pub mod portable_text;
pub mod queries;
pub mod sanity;
pub mod source;

pub use fixtures::FixtureSource;
pub use loader::{HomeContent, HomeLimits, load_home};
pub use sanity::SanityClient;
pub use source::{ContentError, ContentSource};
