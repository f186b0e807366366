//! State management module
//!
//! This module holds the session-scoped state driven by a front-end:
//! browsing criteria, the submission wizard, the comment input and the
//! contact form

pub mod comments;
pub mod contact;
pub mod context;
pub mod store;
pub mod wizard;

// Re-export commonly used state components
pub use comments::CommentComposer;
pub use contact::ContactForm;
pub use context::AppContext;
pub use store::AppStore;
pub use wizard::{StagedFile, StagingReport, SubmissionWizard, WizardStep};
