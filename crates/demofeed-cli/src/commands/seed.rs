use std::path::Path;

use anyhow::{Context, Result};
use demofeed_core::error::Result as StoreResult;
use demofeed_core::feedback::{
    Attendee, FeedbackContext, FeedbackType, NewFeedbackItem, Priority, Sentiment, SessionOutcome,
};
use demofeed_core::{FeedbackStore, SharedFeedbackStore};
use demofeed_infrastructure::FeedbackArchive;

const DEFAULT_OPERATOR: &str = "demo";

/// Appends two recorded sample demos to the archive.
///
/// The archive stays locked from load to save, so concurrent seeds both land.
pub async fn run(store: &SharedFeedbackStore, archive: Option<&Path>) -> Result<()> {
    let archive = FeedbackArchive::open(archive).context("Failed to locate archive")?;

    let total = archive
        .update_shared(store, |s| {
            let operator = s
                .config()
                .operator
                .clone()
                .unwrap_or_else(|| DEFAULT_OPERATOR.to_string());
            record_baptist_health(s, &operator)?;
            record_mercy_regional(s, &operator)
        })
        .await
        .with_context(|| format!("Failed to update {}", archive.path().display()))?;

    println!(
        "✓ Seeded 2 sessions into {} ({} total)",
        archive.path().display(),
        total
    );
    Ok(())
}

fn record_baptist_health(store: &mut FeedbackStore, operator: &str) -> StoreResult<()> {
    store.start_session(
        "Baptist Health",
        vec![Attendee::new("Jane", "CMO", "executive")],
    )?;

    store.add_feedback_item(
        NewFeedbackItem::new(
            FeedbackType::PainPoint,
            Sentiment::Negative,
            Priority::High,
            "Too many false alerts",
            operator,
        )
        .with_context(FeedbackContext {
            persona: Some("executive".to_string()),
            domain: Some("alarms".to_string()),
            ..Default::default()
        })
        .with_tag("alerts")
        .actionable(true),
    );

    store.end_session(
        SessionOutcome::Pilot,
        Some(120_000.0),
        Some("Strong interest".to_string()),
    )?;
    Ok(())
}

fn record_mercy_regional(store: &mut FeedbackStore, operator: &str) -> StoreResult<()> {
    store.start_session(
        "Mercy Regional",
        vec![
            Attendee::new("Sam", "Director of Biomed", "specialist"),
            Attendee::new("Priya", "VP Nursing", "executive"),
        ],
    )?;

    store.add_feedback_item(
        NewFeedbackItem::new(
            FeedbackType::Quote,
            Sentiment::Positive,
            Priority::Medium,
            "We spend hours every shift looking for pumps",
            operator,
        )
        .with_context(FeedbackContext {
            persona: Some("executive".to_string()),
            domain: Some("assets".to_string()),
            kpi: Some("search-time".to_string()),
            ..Default::default()
        }),
    );

    store.add_feedback_item(
        NewFeedbackItem::new(
            FeedbackType::FeatureRequest,
            Sentiment::Neutral,
            Priority::Critical,
            "PM schedule export to the CMMS",
            operator,
        )
        .with_context(FeedbackContext {
            persona: Some("specialist".to_string()),
            domain: Some("assets".to_string()),
            kpi: Some("pm-compliance".to_string()),
            ..Default::default()
        })
        .with_tag("integration")
        .with_follow_up("Confirm CMMS vendor")
        .actionable(true),
    );

    store.end_session(SessionOutcome::Won, Some(85_000.0), None)?;
    Ok(())
}
