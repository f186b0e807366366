//! Spot submission wizard
//!
//! Five-step form state machine. Each step gates forward navigation on its
//! own required fields; the last step submits the draft through the mutation
//! service. Attachments are checked and staged here but never uploaded.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::config::UploadConfig;
use crate::i18n::{I18n, params};
use crate::models::{Spot, SpotDraft};
use crate::services::MutationService;
use crate::utils::errors::{KidSpotsError, Result, UploadError, ValidationError};
use crate::utils::helpers::format_bytes;
use crate::utils::logging::log_validation_failure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    BasicInfo,
    Location,
    AgeRange,
    Amenities,
    Media,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::BasicInfo,
        WizardStep::Location,
        WizardStep::AgeRange,
        WizardStep::Amenities,
        WizardStep::Media,
    ];

    pub fn index(&self) -> usize {
        match self {
            WizardStep::BasicInfo => 0,
            WizardStep::Location => 1,
            WizardStep::AgeRange => 2,
            WizardStep::Amenities => 3,
            WizardStep::Media => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "基本情報",
            WizardStep::Location => "場所・時間",
            WizardStep::AgeRange => "対象年齢",
            WizardStep::Amenities => "設備・サービス",
            WizardStep::Media => "画像・完了",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "施設の名前とカテゴリを入力",
            WizardStep::Location => "住所と営業時間を設定",
            WizardStep::AgeRange => "利用できる年齢層を指定",
            WizardStep::Amenities => "利用可能な設備を選択",
            WizardStep::Media => "写真をアップロードして完了",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Whether the draft satisfies this step's required fields
    pub fn is_satisfied_by(&self, draft: &SpotDraft) -> bool {
        self.missing_field(draft).is_none()
    }

    /// The first required field of this step the draft leaves empty
    pub fn missing_field(&self, draft: &SpotDraft) -> Option<ValidationError> {
        let check = match self {
            WizardStep::BasicInfo => draft.check_name(),
            WizardStep::Location => draft.check_address(),
            WizardStep::AgeRange | WizardStep::Amenities | WizardStep::Media => Ok(()),
        };
        check.err()
    }
}

/// An attachment selected by the user, held in memory only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedFile {
    pub name: String,
    pub content_type: String,
    pub size: u64,
}

impl StagedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size,
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    pub fn size_label(&self) -> String {
        format_bytes(self.size)
    }

    pub fn check(&self, limits: &UploadConfig) -> std::result::Result<(), UploadError> {
        let type_allowed = limits
            .allowed_mime_prefixes
            .iter()
            .any(|prefix| self.content_type.starts_with(prefix.as_str()))
            || limits.allowed_mime_types.iter().any(|t| t == &self.content_type);
        if !type_allowed {
            return Err(UploadError::UnsupportedType {
                name: self.name.clone(),
                content_type: self.content_type.clone(),
            });
        }

        if self.size > limits.max_file_size_bytes {
            return Err(UploadError::TooLarge {
                name: self.name.clone(),
                size: self.size,
                limit: limits.max_file_size_bytes,
            });
        }

        Ok(())
    }
}

/// Outcome of one file selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagingReport {
    /// Names of the files that were staged
    pub accepted: Vec<String>,
    /// Files dropped for their type or size
    pub rejected: Vec<UploadError>,
}

#[derive(Debug, Clone)]
pub struct SubmissionWizard {
    i18n: Arc<I18n>,
    limits: UploadConfig,
    open: bool,
    step: WizardStep,
    draft: SpotDraft,
    files: Vec<StagedFile>,
    submitting: bool,
    error: Option<String>,
    success_modal_open: bool,
}

impl SubmissionWizard {
    pub fn new(limits: UploadConfig, i18n: Arc<I18n>) -> Self {
        Self {
            i18n,
            limits,
            open: false,
            step: WizardStep::BasicInfo,
            draft: SpotDraft::default(),
            files: Vec::new(),
            submitting: false,
            error: None,
            success_modal_open: false,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &SpotDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut SpotDraft {
        &mut self.draft
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    /// Attachment limits this wizard checks against
    pub fn limits(&self) -> &UploadConfig {
        &self.limits
    }

    /// Caption under the file picker, e.g. 「2/5ファイル」
    pub fn file_count_label(&self) -> String {
        self.i18n.t_default(
            "Wizard.fileCount",
            Some(&params([("count", self.files.len()), ("max", self.limits.max_files)])),
        )
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn success_modal_open(&self) -> bool {
        self.success_modal_open
    }

    pub fn can_advance(&self) -> bool {
        !self.submitting && self.step.is_satisfied_by(&self.draft)
    }

    /// Move forward one step; does nothing while the current step is invalid
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        match self.step.previous() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Completion percentage shown by the progress bar
    pub fn progress_percent(&self) -> u8 {
        let last = WizardStep::ALL.len() - 1;
        u8::try_from(self.step.index() * 100 / last).unwrap_or(100)
    }

    /// True on the last step once every step's required fields are filled
    pub fn can_submit(&self) -> bool {
        !self.submitting
            && self.step.is_last()
            && WizardStep::ALL.iter().all(|s| s.is_satisfied_by(&self.draft))
    }

    /// Check and stage a batch of selected files
    ///
    /// Files with a bad type or size are dropped individually. If the
    /// remaining files would exceed the attachment limit, none are staged.
    pub fn stage_files(&mut self, selected: Vec<StagedFile>) -> Result<StagingReport> {
        let mut report = StagingReport::default();
        let mut valid = Vec::new();

        for file in selected {
            match file.check(&self.limits) {
                Ok(()) => valid.push(file),
                Err(e) => {
                    debug!(file = %file.name, error = %e, "Attachment rejected");
                    report.rejected.push(e);
                }
            }
        }

        if self.files.len() + valid.len() > self.limits.max_files {
            let err = KidSpotsError::from(UploadError::TooManyFiles {
                limit: self.limits.max_files,
            });
            self.error = Some(err.user_message(&self.i18n));
            return Err(err);
        }

        report.accepted = valid.iter().map(|f| f.name.clone()).collect();
        self.files.extend(valid);
        self.error = None;
        Ok(report)
    }

    pub fn remove_file(&mut self, index: usize) -> Option<StagedFile> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn close_success_modal(&mut self) {
        self.success_modal_open = false;
    }

    /// Close and discard everything without submitting
    pub fn cancel(&mut self) {
        self.reset();
        self.open = false;
    }

    /// Validate the draft and create the spot
    ///
    /// On success the wizard resets, closes and shows the confirmation
    /// modal. On failure the draft is kept and the alert text is stored.
    pub async fn submit(&mut self, mutations: &MutationService) -> Result<Spot> {
        if !self.step.is_last() {
            return Err(KidSpotsError::InvalidStateTransition {
                from: self.step.label().to_string(),
                to: "submitted".to_string(),
            });
        }
        let missing = WizardStep::ALL
            .iter()
            .find_map(|step| step.missing_field(&self.draft).map(|e| (*step, e)));
        if let Some((step, e)) = missing {
            log_validation_failure("spot_wizard", e.field, &e.message);
            self.step = step;
            self.error = Some(e.message.clone());
            return Err(e.into());
        }

        self.submitting = true;
        self.error = None;
        let result = mutations.create_spot(&self.draft).await;
        self.submitting = false;

        match result {
            Ok(spot) => {
                info!(
                    spot_id = %spot.id,
                    attachments = self.files.len(),
                    "Spot submitted for review"
                );
                self.reset();
                self.open = false;
                self.success_modal_open = true;
                Ok(spot)
            }
            Err(e) => {
                self.error = Some(e.user_message(&self.i18n));
                Err(e)
            }
        }
    }

    fn reset(&mut self) {
        self.step = WizardStep::BasicInfo;
        self.draft = SpotDraft::default();
        self.files.clear();
        self.submitting = false;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::i18n::bundled;

    fn wizard() -> SubmissionWizard {
        let mut wizard = SubmissionWizard::new(Settings::default().uploads, Arc::new(bundled()));
        wizard.open();
        wizard
    }

    fn photo(name: &str) -> StagedFile {
        StagedFile::new(name, "image/jpeg", 200 * 1024)
    }

    #[test]
    fn test_next_is_noop_without_name() {
        let mut wizard = wizard();
        assert!(!wizard.next());
        assert_eq!(wizard.step(), WizardStep::BasicInfo);

        wizard.draft_mut().name = "   ".to_string();
        assert!(!wizard.next());

        wizard.draft_mut().name = "中央公園".to_string();
        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::Location);
        assert!(!wizard.next());
    }

    #[test]
    fn test_navigation_and_progress() {
        let mut wizard = wizard();
        wizard.draft_mut().name = "中央公園".to_string();
        wizard.draft_mut().address = "東京都渋谷区".to_string();

        assert_eq!(wizard.progress_percent(), 0);
        while wizard.next() {}
        assert_eq!(wizard.step(), WizardStep::Media);
        assert_eq!(wizard.progress_percent(), 100);
        assert!(wizard.can_submit());

        assert!(wizard.back());
        assert_eq!(wizard.step(), WizardStep::Amenities);
        assert_eq!(wizard.progress_percent(), 75);
        assert!(!wizard.can_submit());
    }

    #[test]
    fn test_back_on_first_step() {
        let mut wizard = wizard();
        assert!(!wizard.back());
        assert_eq!(wizard.step().previous(), None);
    }

    #[test]
    fn test_cancel_resets_and_closes() {
        let mut wizard = wizard();
        wizard.draft_mut().name = "中央公園".to_string();
        wizard.next();
        wizard.stage_files(vec![photo("a.jpg")]).unwrap();

        wizard.cancel();
        assert!(!wizard.is_open());
        assert_eq!(wizard.step(), WizardStep::BasicInfo);
        assert!(wizard.draft().name.is_empty());
        assert!(wizard.files().is_empty());
    }

    #[test]
    fn test_sixth_file_is_rejected() {
        let mut wizard = wizard();
        let five = (0..5).map(|i| photo(&format!("{}.jpg", i))).collect();
        assert_eq!(wizard.stage_files(five).unwrap().accepted.len(), 5);

        let err = wizard.stage_files(vec![photo("6.jpg")]).unwrap_err();
        assert!(matches!(err, KidSpotsError::Upload(UploadError::TooManyFiles { limit: 5 })));
        assert_eq!(wizard.files().len(), 5);
        assert_eq!(wizard.error(), Some("画像・PDFは最大5つまでアップロードできます"));
    }

    #[test]
    fn test_bad_type_and_size_are_dropped() {
        let mut wizard = wizard();
        let report = wizard
            .stage_files(vec![
                StagedFile::new("map.pdf", "application/pdf", 1024),
                StagedFile::new("notes.txt", "text/plain", 10),
                StagedFile::new("huge.png", "image/png", 10 * 1024 * 1024 + 1),
                StagedFile::new("edge.png", "image/png", 10 * 1024 * 1024),
            ])
            .unwrap();

        assert_eq!(report.accepted, vec!["map.pdf", "edge.png"]);
        assert_eq!(report.rejected.len(), 2);
        assert!(matches!(report.rejected[1], UploadError::TooLarge { .. }));
    }

    #[test]
    fn test_remove_file() {
        let mut wizard = wizard();
        wizard.stage_files(vec![photo("a.jpg"), photo("b.jpg")]).unwrap();
        assert_eq!(wizard.remove_file(0).unwrap().name, "a.jpg");
        assert!(wizard.remove_file(5).is_none());
        assert_eq!(wizard.files().len(), 1);
        assert_eq!(wizard.files()[0].size_label(), "200.0 KB");
        assert_eq!(wizard.file_count_label(), "1/5ファイル");
    }

    #[test]
    fn test_missing_field_per_step() {
        let draft = SpotDraft {
            name: "中央公園".to_string(),
            ..Default::default()
        };
        assert!(WizardStep::BasicInfo.missing_field(&draft).is_none());
        assert_eq!(WizardStep::Location.missing_field(&draft).unwrap().field, "address");
        assert!(WizardStep::Media.missing_field(&draft).is_none());
    }

    #[test]
    fn test_step_labels() {
        let labels: Vec<_> = WizardStep::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["基本情報", "場所・時間", "対象年齢", "設備・サービス", "画像・完了"]);
    }
}
