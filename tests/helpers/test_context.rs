//! Test context for unified test setup

use std::sync::Arc;
use tempfile::TempDir;
use KidSpots::{
    config::Settings,
    database::DatabaseService,
    i18n::I18n,
    services::{CatalogBackend, ServiceFactory},
    AppContext,
};

/// The bundled Japanese resource bundle
pub const JA_BUNDLE: &str = include_str!("../../translations/ja.json");

/// Everything a test needs, with logs written to a temporary directory
pub struct TestContext {
    pub context: AppContext,
    pub settings: Settings,
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Seeded catalog, no simulated latency
    pub fn new() -> Self {
        Self::with_settings(test_settings())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut settings = settings;
        settings.logging.file_path = temp_dir.path().join("kidspots.log").to_string_lossy().into_owned();

        let database = DatabaseService::from_config(&settings.catalog);
        let context = AppContext::new(settings.clone(), database, test_i18n(&settings));

        Self {
            context,
            settings,
            temp_dir,
        }
    }

    /// Services built on a custom backend, sharing this context's settings
    pub fn services_with(&self, backend: Arc<dyn CatalogBackend>) -> ServiceFactory {
        ServiceFactory::with_backend(&self.settings, backend)
    }

    pub fn services(&self) -> &ServiceFactory {
        &self.context.services
    }
}

/// Default settings with every simulated delay removed
pub fn test_settings() -> Settings {
    Settings::without_latency()
}

pub fn test_i18n(settings: &Settings) -> I18n {
    let mut i18n = I18n::new(&settings.i18n);
    i18n.load_bundle("ja", JA_BUNDLE).expect("Bundled translations must parse");
    i18n
}
