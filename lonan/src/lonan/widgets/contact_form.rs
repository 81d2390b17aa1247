use async_trait::async_trait;
use log::info;
use serde::{Deserialize, Serialize};

use crate::lonan::i18n::Language;

/// Service choices offered in the form's select, `(arabic, english)`.
pub const SERVICE_OPTIONS: &[(&str, &str)] = &[
    ("التسويق الإلكتروني", "Digital Marketing"),
    ("اللوحات والإعلانات الخارجية", "Outdoor Signage"),
    ("الطباعة والتغليف", "Printing & Packaging"),
    ("الهدايا والدروع", "Trophies & Gifts"),
    ("تجهيز الفعاليات", "Events"),
    ("قص الليزر والأكريليك", "Laser Cutting"),
];

pub fn service_options(language: Language) -> Vec<String> {
    SERVICE_OPTIONS
        .iter()
        .map(|(ar, en)| language.pick(ar, en).to_string())
        .chain(std::iter::once(
            crate::lonan::i18n::lookup(language, "other").into_owned(),
        ))
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    /// Dictionary key of the message to show.
    pub message: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    Editing,
    Submitting,
    Sent,
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),
    #[error("a submission is already in flight")]
    Busy,
    #[error("submission was not accepted: {0}")]
    Rejected(#[source] anyhow::Error),
}

/// Receives accepted contact requests.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> anyhow::Result<()>;
}

/// Records submissions in the log until a real endpoint is wired up.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn submit(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        info!(
            "contact request from {} ({}) for {:?}: {} chars",
            submission.name,
            submission.phone,
            submission.service,
            submission.message.chars().count()
        );
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    fields: ContactSubmission,
    status: FormStatus,
    errors: Vec<FieldError>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(ContactSubmission::default())
    }
}

impl ContactForm {
    pub fn new(fields: ContactSubmission) -> Self {
        Self {
            fields,
            status: FormStatus::Editing,
            errors: Vec::new(),
        }
    }

    /// A form showing the post-submit confirmation.
    pub fn sent() -> Self {
        Self {
            status: FormStatus::Sent,
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let required = [
            ("name", &self.fields.name),
            ("phone", &self.fields.phone),
            ("service", &self.fields.service),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(FieldError {
                    field,
                    message: "fieldRequired",
                });
            }
        }

        let email = self.fields.email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            errors.push(FieldError {
                field: "email",
                message: "invalidEmail",
            });
        }
        errors
    }

    pub async fn submit(&mut self, sink: &dyn SubmissionSink) -> Result<(), FormError> {
        if self.status == FormStatus::Submitting {
            return Err(FormError::Busy);
        }

        self.errors = self.validate();
        if !self.errors.is_empty() {
            self.status = FormStatus::Editing;
            return Err(FormError::Invalid(self.errors.clone()));
        }

        self.status = FormStatus::Submitting;
        match sink.submit(&self.fields).await {
            Ok(()) => {
                self.status = FormStatus::Sent;
                Ok(())
            }
            Err(err) => {
                self.status = FormStatus::Editing;
                Err(FormError::Rejected(err))
            }
        }
    }

    /// Confirmation period over: clear the fields for a fresh request.
    pub fn reset(&mut self) {
        self.fields = ContactSubmission::default();
        self.errors.clear();
        self.status = FormStatus::Editing;
    }
}

fn looks_like_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
}
