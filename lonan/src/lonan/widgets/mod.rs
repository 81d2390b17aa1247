//! Interactive widget state.
//!
//! The server uses these to render the initial markup and the no-script
//! navigation links. In the browser `templates/assets/scripts/site.js` does
//! the stepping, so the time and event driven methods (`Counter::tick`,
//! `ScrollReveal::observe`, `ModalStack::handle_escape`, `ContactForm::reset`,
//! `LoadingScreen::phase`) are reference models of that script. Only the
//! tests call them.

pub mod contact_form;
pub mod counter;
pub mod gallery;
pub mod loading;
pub mod modal;
pub mod reveal;

pub use contact_form::{
    ContactForm, ContactSubmission, FieldError, FormError, FormStatus, LogSink, SubmissionSink,
};
pub use counter::{Counter, CounterPhase};
pub use gallery::Gallery;
pub use loading::{LoadingPhase, LoadingScreen};
pub use modal::{Modal, ModalStack};
pub use reveal::ScrollReveal;
