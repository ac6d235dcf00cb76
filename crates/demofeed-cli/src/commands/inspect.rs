use std::path::Path;

use anyhow::{Context, Result};
use demofeed_core::feedback::{
    FeedbackItem, FeedbackSession, FeedbackType, Priority, Sentiment, SessionOutcome,
};
use demofeed_core::{FeedbackStore, SharedFeedbackStore};
use demofeed_infrastructure::FeedbackArchive;

/// Opens the archive and imports it into `store`.
pub async fn load_archive(
    store: &SharedFeedbackStore,
    path: Option<&Path>,
) -> Result<FeedbackArchive> {
    let archive = FeedbackArchive::open(path).context("Failed to locate archive")?;
    archive
        .load_into_shared(store)
        .await
        .with_context(|| format!("Failed to load {}", archive.path().display()))?;
    Ok(archive)
}

pub async fn stats(store: &SharedFeedbackStore, archive: Option<&Path>, json: bool) -> Result<()> {
    load_archive(store, archive).await?;
    let stats = store.feedback_stats().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Feedback items: {} ({} actionable)", stats.total, stats.actionable);
    println!("\nBy type:");
    for (t, n) in &stats.by_type {
        println!("  {:<16} {}", t.to_string(), n);
    }
    println!("\nBy sentiment:");
    for (s, n) in &stats.by_sentiment {
        println!("  {:<16} {}", s.to_string(), n);
    }
    println!("\nBy priority:");
    for (p, n) in &stats.by_priority {
        println!("  {:<16} {}", p.to_string(), n);
    }
    Ok(())
}

pub async fn sessions(
    store: &SharedFeedbackStore,
    archive: Option<&Path>,
    customer: Option<String>,
    outcome: Option<SessionOutcome>,
) -> Result<()> {
    load_archive(store, archive).await?;

    let mut sessions = match &customer {
        Some(c) => store.sessions_by_customer(c).await,
        None => store.all_sessions().await,
    };
    if let Some(outcome) = outcome {
        sessions.retain(|s| s.outcome == outcome);
    }

    if sessions.is_empty() {
        println!("No sessions found.");
        return Ok(());
    }
    for session in &sessions {
        println!("{}", format_session(session));
    }
    Ok(())
}

/// Field filters for the `feedback` command. Unset fields match everything.
#[derive(Debug, Default)]
pub struct FeedbackFilter {
    pub feedback_type: Option<FeedbackType>,
    pub priority: Option<Priority>,
    pub sentiment: Option<Sentiment>,
    pub domain: Option<String>,
    pub tag: Option<String>,
    pub actionable: bool,
}

impl FeedbackFilter {
    pub fn apply(&self, store: &FeedbackStore) -> Vec<FeedbackItem> {
        let base = match self.feedback_type {
            Some(t) => store.feedback_by_type(t),
            None => store.all_feedback_items(),
        };

        base.into_iter()
            .filter(|i| self.priority.is_none_or(|p| i.priority == p))
            .filter(|i| self.sentiment.is_none_or(|s| i.sentiment == s))
            .filter(|i| {
                self.domain
                    .as_deref()
                    .is_none_or(|d| i.context.domain.as_deref() == Some(d))
            })
            .filter(|i| self.tag.as_deref().is_none_or(|t| i.has_tag(t)))
            .filter(|i| !self.actionable || i.actionable)
            .cloned()
            .collect()
    }
}

pub async fn feedback(
    store: &SharedFeedbackStore,
    archive: Option<&Path>,
    filter: &FeedbackFilter,
) -> Result<()> {
    load_archive(store, archive).await?;
    let items = store.with_store(|s| filter.apply(s)).await;

    if items.is_empty() {
        println!("No feedback found.");
        return Ok(());
    }
    for item in &items {
        println!("{}", format_item(item));
    }
    Ok(())
}

pub async fn pipeline(store: &SharedFeedbackStore, archive: Option<&Path>) -> Result<()> {
    load_archive(store, archive).await?;
    let summary = store.pipeline_summary().await;

    println!("Closed sessions: {}", summary.sessions);
    for (outcome, n) in &summary.by_outcome {
        println!("  {:<8} {}", outcome.to_string(), n);
    }
    println!("Win rate:         {:.0}%", summary.win_rate() * 100.0);
    println!("Total deal value: ${:.0}", summary.total_deal_value);
    println!("Won deal value:   ${:.0}", summary.won_deal_value);
    Ok(())
}

fn format_session(session: &FeedbackSession) -> String {
    let deal = session
        .deal_value
        .map(|v| format!("${:.0}", v))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}  {:<24} {:<8} {:>3} min  {:>2} items  {}",
        session.date.format("%Y-%m-%d %H:%M"),
        session.customer,
        session.outcome.to_string(),
        session.duration,
        session.feedback_items.len(),
        deal
    )
}

fn format_item(item: &FeedbackItem) -> String {
    let mut line = format!(
        "[{}/{}/{}] {}",
        item.feedback_type, item.priority, item.sentiment, item.content
    );
    if item.actionable {
        line.push_str(" (actionable)");
    }
    if !item.tags.is_empty() {
        line.push_str(&format!(" #{}", item.tags.join(" #")));
    }
    if let Some(follow_up) = &item.follow_up {
        line.push_str(&format!("\n    follow-up: {}", follow_up));
    }
    line
}
