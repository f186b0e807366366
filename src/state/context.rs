//! Application context
//!
//! `AppContext` wires settings, the catalog, services, translations and the
//! shared browsing store together. Front-ends receive it explicitly.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use crate::Settings;
use crate::ServiceFactory;
use crate::utils::errors::Result;
use crate::{
    DatabaseService,
    i18n::I18n,
    models::{Review, Spot},
    services::ModerationPanel,
    state::{comments::CommentComposer, contact::ContactForm, store::AppStore, wizard::SubmissionWizard},
};

/// Application-wide context containing services and settings
#[derive(Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub database: Arc<DatabaseService>,
    pub services: Arc<ServiceFactory>,
    pub i18n: Arc<I18n>,
    pub store: Arc<RwLock<AppStore>>,
}

impl AppContext {
    pub fn new(settings: Settings, database: DatabaseService, i18n: I18n) -> Self {
        let services = ServiceFactory::new(&settings, database.clone());
        Self {
            settings,
            database: Arc::new(database),
            services: Arc::new(services),
            i18n: Arc::new(i18n),
            store: Arc::new(RwLock::new(AppStore::new())),
        }
    }

    /// Build the context from settings, loading translations from disk
    pub async fn from_settings(settings: Settings) -> Result<Self> {
        let database = DatabaseService::from_config(&settings.catalog);

        let mut i18n = I18n::new(&settings.i18n);
        i18n.load_translations().await?;

        info!(
            app = %settings.app.name,
            languages = ?settings.i18n.supported_languages,
            "Application context ready"
        );
        Ok(Self::new(settings, database, i18n))
    }

    /// A closed wizard; the per-file size cap comes from the saved admin settings
    pub async fn new_wizard(&self) -> SubmissionWizard {
        let admin = self.services.moderation_service.settings().await;
        SubmissionWizard::new(admin.upload_limits(&self.settings.uploads), self.i18n.clone())
    }

    pub fn new_comment_composer(&self, spot_id: &str) -> CommentComposer {
        CommentComposer::new(spot_id, self.i18n.clone())
    }

    pub fn new_contact_form(&self) -> ContactForm {
        ContactForm::new(self.i18n.clone())
    }

    pub fn spots_panel(&self) -> ModerationPanel<Spot> {
        ModerationPanel::new(&self.settings.admin)
    }

    pub fn reviews_panel(&self) -> ModerationPanel<Review> {
        ModerationPanel::new(&self.settings.admin)
    }
}
