//! Site configuration: where content lives and where the HTTP boundary listens.

use crate::cli::Cli;
use std::borrow::Cow;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Directory under the content root holding post files.
pub const POSTS_DIR: &str = "posts";

/// File under the content root listing projects.
pub const PROJECTS_FILE: &str = "projects.toml";

/// Resolved locations of the site's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub content_dir: PathBuf,
    pub posts_dir: PathBuf,
    pub projects_file: PathBuf,
}

impl SiteConfig {
    /// Lay out the standard `posts/` and `projects.toml` paths under a content root.
    pub fn from_content_dir(content_dir: impl Into<PathBuf>) -> Self {
        let content_dir = content_dir.into();
        Self {
            posts_dir: content_dir.join(POSTS_DIR),
            projects_file: content_dir.join(PROJECTS_FILE),
            content_dir,
        }
    }

    /// Build from parsed command-line arguments, expanding `~`.
    pub fn from_cli(cli: &Cli) -> Self {
        let raw = cli.content_dir.to_string_lossy();
        Self::from_content_dir(PathBuf::from(expand_tilde(&raw).as_ref()))
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpConfig {
    pub bind: SocketAddr,
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
///
/// Returns `Cow::Borrowed` if no expansion needed, `Cow::Owned` if expanded.
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
