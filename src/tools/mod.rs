pub mod list_projects;
pub mod list_sections;
pub mod list_tags;
pub mod search;

pub use list_projects::*;
pub use list_sections::*;
pub use list_tags::*;
pub use search::*;
