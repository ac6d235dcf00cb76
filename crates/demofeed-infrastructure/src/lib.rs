pub mod archive;
pub mod config_loader;
pub mod paths;
pub mod storage;

pub use crate::archive::FeedbackArchive;
pub use crate::config_loader::load_store_config;
pub use crate::paths::DemofeedPaths;
