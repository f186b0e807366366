//! Contact form state

use std::sync::Arc;
use crate::i18n::I18n;
use crate::models::{ContactCategory, ContactMessage};
use crate::services::ContactService;
use crate::utils::errors::Result;
use crate::utils::logging::log_validation_failure;

#[derive(Debug, Clone)]
pub struct ContactForm {
    i18n: Arc<I18n>,
    category: ContactCategory,
    email: String,
    subject: String,
    message: String,
    sending: bool,
    sent: bool,
    error: Option<String>,
}

impl ContactForm {
    pub fn new(i18n: Arc<I18n>) -> Self {
        Self {
            i18n,
            category: ContactCategory::default(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            sending: false,
            sent: false,
            error: None,
        }
    }

    /// Category choices with their translated labels
    pub fn category_options(&self) -> Vec<(ContactCategory, String)> {
        ContactCategory::ALL
            .into_iter()
            .map(|c| (c, self.i18n.t_default(c.label_key(), None)))
            .collect()
    }

    pub fn category(&self) -> ContactCategory {
        self.category
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    // Editing any field clears the inline error
    pub fn set_category(&mut self, category: ContactCategory) {
        self.category = category;
        self.error = None;
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
        self.error = None;
    }

    pub fn set_subject(&mut self, subject: &str) {
        self.subject = subject.to_string();
        self.error = None;
    }

    pub fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
        self.error = None;
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn is_sent(&self) -> bool {
        self.sent
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit button caption
    pub fn send_label(&self) -> String {
        let key = if self.sending { "Contact.sending" } else { "Contact.send" };
        self.i18n.t_default(key, None)
    }

    /// Title and body of the confirmation panel once a message went out
    pub fn success_notice(&self) -> Option<(String, String)> {
        self.sent.then(|| {
            (
                self.i18n.t_default("Contact.successTitle", None),
                self.i18n.t_default("Contact.successMessage", None),
            )
        })
    }

    pub async fn submit(&mut self, contact: &ContactService) -> Result<()> {
        self.error = None;

        let message = match ContactMessage::new(self.category, &self.email, &self.subject, &self.message) {
            Ok(message) => message,
            Err(e) => {
                log_validation_failure("contact", e.field, &e.message);
                self.error = Some(e.message.clone());
                return Err(e.into());
            }
        };

        self.sending = true;
        let result = contact.send(&message).await;
        self.sending = false;

        match result {
            Ok(()) => {
                self.clear_fields();
                self.sent = true;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message(&self.i18n));
                Err(e)
            }
        }
    }

    /// Back to an empty form, dismissing the confirmation
    pub fn reset(&mut self) {
        self.clear_fields();
        self.sent = false;
        self.error = None;
    }

    fn clear_fields(&mut self) {
        self.category = ContactCategory::default();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}
