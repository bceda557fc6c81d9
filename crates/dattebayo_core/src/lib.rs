pub mod catalog;
pub mod domain;

pub use catalog::{capitalize_first, display_name, COLLECTION_NAMES, TAGS};
pub use domain::{ApiMetadata, ServerInfo, TagInfo, API_METADATA, SERVERS};
