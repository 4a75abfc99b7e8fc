//! Project listings loaded from `projects.toml`.

use crate::error::ContentError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A portfolio project. Only projects with a `link` can be navigated to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl Project {
    /// The external link, if present and non-blank.
    pub fn navigable_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ProjectsFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Load the `[[projects]]` array from `path`, in file order.
///
/// A missing file means the site has no projects.
pub fn load_projects(path: &Path) -> Result<Vec<Project>, ContentError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Projects file {} does not exist", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(ContentError::io(path, e)),
    };

    parse_projects(&contents, path)
}

pub(crate) fn parse_projects(contents: &str, path: &Path) -> Result<Vec<Project>, ContentError> {
    let file: ProjectsFile = toml::from_str(contents).map_err(|source| ContentError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.projects)
}

/// The first `count` projects, which the home page features.
pub fn featured_projects(projects: &[Project], count: usize) -> &[Project] {
    &projects[..count.min(projects.len())]
}
