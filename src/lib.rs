pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod http;
pub mod search;
pub mod server;
pub mod tools;
pub mod tracing;

pub use config::SiteConfig;
pub use content::{ContentSource, SiteContent, StaticContent};
pub use error::ContentError;
pub use search::{ScoredRecord, SearchEngine, SearchableRecord};
pub use server::SiteServer;
