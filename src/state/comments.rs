//! Review comment input for the spot detail view

use std::sync::Arc;
use crate::i18n::{I18n, params};
use crate::models::{NewReview, REVIEW_MAX_CHARS, Review};
use crate::services::MutationService;
use crate::utils::errors::Result;
use crate::utils::helpers::clip_chars;

#[derive(Debug, Clone)]
pub struct CommentComposer {
    i18n: Arc<I18n>,
    spot_id: String,
    text: String,
    submitting: bool,
    error: Option<String>,
    notice: Option<String>,
}

impl CommentComposer {
    pub fn new(spot_id: impl Into<String>, i18n: Arc<I18n>) -> Self {
        Self {
            i18n,
            spot_id: spot_id.into(),
            text: String::new(),
            submitting: false,
            error: None,
            notice: None,
        }
    }

    pub fn spot_id(&self) -> &str {
        &self.spot_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the input; anything past the length limit is cut off
    pub fn set_text(&mut self, text: &str) {
        self.text = clip_chars(text, REVIEW_MAX_CHARS);
    }

    /// Counter shown under the input, e.g. 「12/126文字」
    pub fn counter_label(&self) -> String {
        self.i18n.t_default(
            "Comments.counter",
            Some(&params([("count", self.text.chars().count()), ("max", REVIEW_MAX_CHARS)])),
        )
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.text.trim().is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Confirmation shown after a successful post
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss(&mut self) {
        self.error = None;
        self.notice = None;
    }

    pub async fn submit(&mut self, mutations: &MutationService) -> Result<Review> {
        self.error = None;
        self.notice = None;

        let new_review = match NewReview::new(self.spot_id.clone(), &self.text) {
            Ok(review) => review,
            Err(e) => {
                self.error = Some(e.message.clone());
                return Err(e.into());
            }
        };

        self.submitting = true;
        let result = mutations.create_review(new_review).await;
        self.submitting = false;

        match result {
            Ok(review) => {
                self.text.clear();
                self.notice = Some(self.i18n.t_default("Comments.submitted", None));
                Ok(review)
            }
            Err(e) => {
                self.error = Some(e.user_message(&self.i18n));
                Err(e)
            }
        }
    }
}
