pub mod clock;
pub mod config;
pub mod error;
pub mod feedback;

// Re-export common types
pub use clock::{Clock, SystemClock};
pub use config::{DuplicateStartPolicy, StoreConfig};
pub use error::FeedbackError;
pub use feedback::{FeedbackStore, SharedFeedbackStore};
