use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::lonan::content::ContentError;

/// Failures a page handler can end in.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no page at {0}")]
    NotFound(String),
    #[error("content unavailable")]
    Content(#[from] ContentError),
    #[error("failed to render template `{template}`")]
    Render {
        template: &'static str,
        #[source]
        source: handlebars::RenderError,
    },
}

impl SiteError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Content(_) | Self::Render { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Every message in the source chain, one per line.
    pub fn trace(&self) -> String {
        anyhow::Chain::new(self)
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Bare response for when the localized error page itself cannot be rendered.
impl ResponseError for SiteError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status())
            .content_type("text/plain; charset=utf-8")
            .body(self.status().canonical_reason().unwrap_or("Error"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = SiteError::NotFound("/nope".into());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.trace(), "no page at /nope");
    }

    #[test]
    fn content_errors_keep_their_cause() {
        let err = SiteError::from(ContentError::Status {
            status: 503,
            body: "maintenance".into(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let trace = err.trace();
        assert!(trace.starts_with("content unavailable\n"));
        assert!(trace.contains("503"));
    }
}
