//! KidSpots
//!
//! Boots the catalog with the configured settings and logs a summary of
//! what a visitor and a moderator would see.

use anyhow::Context;
use chrono::{Datelike, Utc};
use tracing::{info, warn};

use KidSpots::{
    config::Settings,
    i18n::params,
    services::AdminStats,
    utils::logging,
    AppContext,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenv::dotenv() {
        eprintln!("No .env file loaded: {}", e);
    }

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", KidSpots::info());
    if settings.moderation.auto_approval {
        warn!("Auto-approval is enabled: submissions skip moderation");
    }

    info!("Loading translations and catalog...");
    let context = AppContext::from_settings(settings).await?;
    let services = &context.services;

    let criteria = context.store.read().await.criteria();
    let (visible, admin_data) = futures::join!(
        services.spot_service.fetch(&criteria),
        services.moderation_service.load()
    );
    let visible = visible?;
    let stats = AdminStats::compute(&admin_data?);

    let lang = context.i18n.default_language().to_string();
    info!(
        "{}",
        context.i18n.t(
            "HomePage.resultCount",
            &lang,
            Some(&params([("count", visible.len())]))
        )
    );
    info!(
        total_spots = stats.total_spots,
        visible_spots = stats.visible_spots,
        publish_rate = stats.publish_rate,
        total_reviews = stats.total_reviews,
        pending = stats.pending,
        "Catalog summary"
    );
    info!(
        "{}",
        context.i18n.t(
            "Footer.copyright",
            &lang,
            Some(&params([("year", Utc::now().year())]))
        )
    );

    Ok(())
}
