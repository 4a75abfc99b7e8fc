//! Content collaborators: the post and project lists the search engine reads.
//!
//! The engine only ever sees the [`ContentSource`] trait. [`SiteContent`] reads the
//! content directory afresh on every call; [`StaticContent`] serves fixed lists.

pub mod posts;
pub mod projects;
pub mod sections;
pub mod tags;

pub use posts::{Breadcrumb, Post, PostDate, TagCount};
pub use projects::Project;
pub use sections::SectionNode;

use crate::config::SiteConfig;
use crate::error::ContentError;
use std::sync::Arc;

/// Read-only access to the site's posts and projects.
pub trait ContentSource: Send + Sync {
    /// All posts, newest first.
    fn list_posts(&self) -> Result<Vec<Post>, ContentError>;

    /// All projects, in listing order, including those without a link.
    fn list_projects(&self) -> Result<Vec<Project>, ContentError>;
}

impl<T: ContentSource + ?Sized> ContentSource for Arc<T> {
    fn list_posts(&self) -> Result<Vec<Post>, ContentError> {
        (**self).list_posts()
    }

    fn list_projects(&self) -> Result<Vec<Project>, ContentError> {
        (**self).list_projects()
    }
}

impl<T: ContentSource + ?Sized> ContentSource for &T {
    fn list_posts(&self) -> Result<Vec<Post>, ContentError> {
        (**self).list_posts()
    }

    fn list_projects(&self) -> Result<Vec<Project>, ContentError> {
        (**self).list_projects()
    }
}

/// Filesystem-backed content. Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct SiteContent {
    config: SiteConfig,
}

impl SiteContent {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

impl ContentSource for SiteContent {
    fn list_posts(&self) -> Result<Vec<Post>, ContentError> {
        posts::load_posts(&self.config.posts_dir)
    }

    fn list_projects(&self) -> Result<Vec<Project>, ContentError> {
        projects::load_projects(&self.config.projects_file)
    }
}

/// In-memory content, for embedding callers and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticContent {
    pub posts: Vec<Post>,
    pub projects: Vec<Project>,
}

impl StaticContent {
    pub fn new(posts: Vec<Post>, projects: Vec<Project>) -> Self {
        Self { posts, projects }
    }
}

impl ContentSource for StaticContent {
    fn list_posts(&self) -> Result<Vec<Post>, ContentError> {
        Ok(self.posts.clone())
    }

    fn list_projects(&self) -> Result<Vec<Project>, ContentError> {
        Ok(self.projects.clone())
    }
}
