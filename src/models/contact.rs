//! Contact form message model

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::utils::errors::ValidationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactCategory {
    #[default]
    General,
    Technical,
    Content,
    Report,
    Suggestion,
}

impl ContactCategory {
    pub const ALL: [ContactCategory; 5] = [
        ContactCategory::General,
        ContactCategory::Technical,
        ContactCategory::Content,
        ContactCategory::Report,
        ContactCategory::Suggestion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactCategory::General => "general",
            ContactCategory::Technical => "technical",
            ContactCategory::Content => "content",
            ContactCategory::Report => "report",
            ContactCategory::Suggestion => "suggestion",
        }
    }

    /// Translation key of the option label
    pub fn label_key(&self) -> &'static str {
        match self {
            ContactCategory::General => "Contact.categoryGeneral",
            ContactCategory::Technical => "Contact.categoryTechnical",
            ContactCategory::Content => "Contact.categoryContent",
            ContactCategory::Report => "Contact.categoryReport",
            ContactCategory::Suggestion => "Contact.categorySuggestion",
        }
    }
}

impl fmt::Display for ContactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated message for the site operators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub category: ContactCategory,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        category: ContactCategory,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, ValidationError> {
        let (email, subject, message) = (email.trim(), subject.trim(), message.trim());

        let missing = [("email", email), ("subject", subject), ("message", message)]
            .into_iter()
            .find(|(_, value)| value.is_empty());
        if let Some((field, _)) = missing {
            return Err(ValidationError::new(field, "すべての必須項目を入力してください"));
        }
        if !email.contains('@') {
            return Err(ValidationError::new("email", "有効なメールアドレスを入力してください"));
        }

        Ok(Self {
            category,
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}
