//! Admin moderation: listing, search, pagination, stats and settings

mod helpers;

use helpers::*;
use KidSpots::{
    models::Category,
    services::{AdminSettings, AdminStats, ReviewRow, SpotRow},
    KidSpotsError,
};

#[tokio::test]
async fn test_admin_listing_includes_hidden_entries() {
    let ctx = TestContext::new();
    let services = ctx.services();
    services.mutation_service.refresh().await.unwrap();
    services.mutation_service.set_spot_visibility("4", false).await.unwrap();
    services.mutation_service.set_review_visibility("2", false).await.unwrap();

    let admin = services.moderation_service.load().await.unwrap();
    assert_eq!(admin.spots.len(), 6);
    assert_eq!(admin.reviews.len(), 4);

    let visible = services.spot_service.fetch(&Default::default()).await.unwrap();
    assert_eq!(visible.len(), 5);

    let stats = services.moderation_service.stats().await.unwrap();
    assert_eq!(stats.visible_spots, 5);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.publish_rate, 83);
}

#[tokio::test]
async fn test_spots_panel_search_and_rows() {
    let ctx = TestContext::new();
    let admin = ctx.services().moderation_service.load().await.unwrap();

    let mut panel = ctx.context.spots_panel();
    panel.set_rows_per_page(5).unwrap();
    let page = panel.page_of(&admin.spots);
    assert_eq!(page.label(&ctx.context.i18n), "1-5 / 6件");

    panel.set_page(1);
    let page = panel.page_of(&admin.spots);
    assert_eq!(page.label(&ctx.context.i18n), "6-6 / 6件");
    assert_eq!(page.items[0].id, "6");

    panel.set_search_query("区立");
    let page = panel.page_of(&admin.spots);
    assert_eq!(page.count, 1);
    let row = SpotRow::new(&page.items[0], &ctx.context.i18n);
    assert_eq!(row.category_label, Category::Center.label());
    assert_eq!(row.visibility_label, "公開");
}

#[tokio::test]
async fn test_deleted_spot_disappears_with_its_reviews() {
    let ctx = TestContext::new();
    let services = ctx.services();
    services.moderation_service.load().await.unwrap();

    services.mutation_service.delete_spot("1").await.unwrap();

    let admin = services.moderation_service.load().await.unwrap();
    assert!(admin.spots.iter().all(|s| s.id != "1"));
    assert!(admin.reviews.iter().all(|r| r.spot_id != "1"));

    // The backend agrees after a refetch
    services.moderation_service.invalidate().await;
    let refetched = services.moderation_service.load().await.unwrap();
    assert_eq!(refetched, admin);

    let err = services.spot_service.detail("1").await.unwrap_err();
    assert!(matches!(err, KidSpotsError::SpotNotFound { .. }));
}

#[tokio::test]
async fn test_review_rows_and_comment_flow() {
    let ctx = TestContext::new();
    let services = ctx.services();
    services.moderation_service.load().await.unwrap();

    let mut composer = ctx.context.new_comment_composer("2");
    composer.set_text("ランチがおいしかったです");
    let review = composer.submit(&services.mutation_service).await.unwrap();
    assert!(composer.text().is_empty());
    assert!(composer.notice().is_some());

    let admin = services.moderation_service.load().await.unwrap();
    let mut panel = ctx.context.reviews_panel();
    panel.set_search_query("ランチ");
    let page = panel.page_of(&admin.reviews);
    assert_eq!(page.count, 2);

    let row = ReviewRow::new(admin.reviews.iter().find(|r| r.id == review.id).unwrap(), &ctx.context.i18n);
    assert_eq!(row.spot_name, "ママカフェ ひなた");
    assert_eq!(row.visibility_label, "非公開");

    services.mutation_service.set_review_visibility(&review.id, true).await.unwrap();
    let detail = services.spot_service.detail("2").await.unwrap();
    assert_eq!(detail.reviews.len(), 2);
}

#[tokio::test]
async fn test_saved_settings_change_new_submission_visibility() {
    let ctx = TestContext::new();
    let services = ctx.services();

    let mut settings = services.moderation_service.settings().await;
    assert!(!settings.auto_approval);
    settings.auto_approval = true;
    services.moderation_service.save_settings(settings).await.unwrap();

    let spot = services
        .mutation_service
        .create_spot(&valid_draft("すぐ公開される施設"))
        .await
        .unwrap();
    assert!(spot.is_visible);
}

#[tokio::test]
async fn test_invalid_settings_are_not_saved() {
    let ctx = TestContext::new();
    let services = ctx.services();

    let err = services
        .moderation_service
        .save_settings(AdminSettings {
            admin_email: "invalid".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, KidSpotsError::Validation(_)));
    assert_eq!(
        services.moderation_service.settings().await.admin_email,
        "admin@childcare-spots.jp"
    );
}

#[test]
fn test_stats_for_empty_catalog() {
    let stats = AdminStats::compute(&Default::default());
    assert_eq!(stats.total_spots, 0);
    assert_eq!(stats.publish_rate, 0);
    assert_eq!(stats.by_category.len(), Category::ALL.len());
}
