//! Feedback capture domain module.
//!
//! # Module Structure
//!
//! - `model`: Sessions, feedback items, and their enumerations
//! - `store`: Session lifecycle and analytics queries (`FeedbackStore`)
//! - `shared`: Lock-guarded handle for use across tasks (`SharedFeedbackStore`)
//! - `stats`: Aggregates (`FeedbackStats`, `PipelineSummary`)
//! - `export`: The JSON export document
//!
//! # Usage
//!
//! ```
//! use demofeed_core::feedback::{
//!     Attendee, FeedbackStore, FeedbackType, NewFeedbackItem, Priority, Sentiment,
//!     SessionOutcome,
//! };
//!
//! let mut store = FeedbackStore::new();
//! store
//!     .start_session("Baptist Health", vec![Attendee::new("Jane", "CMO", "executive")])
//!     .unwrap();
//! store.add_feedback_item(
//!     NewFeedbackItem::new(
//!         FeedbackType::PainPoint,
//!         Sentiment::Negative,
//!         Priority::High,
//!         "Too many false alerts",
//!         "SE1",
//!     )
//!     .actionable(true),
//! );
//! store
//!     .end_session(SessionOutcome::Pilot, Some(120_000.0), Some("Strong interest".into()))
//!     .unwrap();
//!
//! assert_eq!(store.actionable_feedback().len(), 1);
//! ```

pub mod export;
mod model;
mod shared;
mod stats;
mod store;


// Re-export public API
pub use model::{
    Attendee, FeedbackContext, FeedbackItem, FeedbackSession, FeedbackType, NewFeedbackItem,
    Priority, Sentiment, SessionOutcome,
};
pub use shared::SharedFeedbackStore;
pub use stats::{FeedbackStats, PipelineSummary};
pub use store::FeedbackStore;
