//! Merges static pages, posts and projects into one list of searchable records.

use crate::content::{ContentSource, Post, Project};
use crate::error::ContentError;
use ahash::AHashSet;
use serde::Serialize;

/// Separator between section names in a post's breadcrumb description.
const SECTION_SEPARATOR: &str = " › ";

/// Separator between the breadcrumb and the post summary.
const SUMMARY_SEPARATOR: &str = " • ";

/// Hand-maintained site pages: (title, description, url).
const STATIC_PAGES: &[(&str, &str, &str)] = &[
    ("Home", "Main landing page", "/"),
    ("About", "Learn more about me", "/about"),
    ("Projects", "View all my projects", "/projects"),
    ("Blog", "Read my blog posts", "/blog"),
    ("Reads", "My reading list and recommendations", "/reads"),
    ("Contact", "Get in touch with me", "/contact"),
];

/// Where a record came from. Not used in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Page,
    Post,
    Project,
}

/// One navigable piece of content, rebuilt for every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchableRecord {
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl SearchableRecord {
    fn page(title: &str, description: &str, url: &str) -> Self {
        Self {
            kind: RecordKind::Page,
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            tags: Vec::new(),
        }
    }

    fn from_post(post: Post) -> Self {
        let section_path = post.section_segments().join(SECTION_SEPARATOR);
        let description = if section_path.is_empty() {
            post.summary
        } else {
            format!("{}{}{}", section_path, SUMMARY_SEPARATOR, post.summary)
        };

        Self {
            kind: RecordKind::Post,
            url: format!("/blog/{}", post.slug),
            title: post.title,
            description,
            tags: post.tags,
        }
    }

    /// `None` for projects without a navigable link.
    fn from_project(project: Project) -> Option<Self> {
        let url = project.navigable_link()?.to_string();
        Some(Self {
            kind: RecordKind::Project,
            title: project.title,
            description: project.description,
            url,
            tags: project.tags,
        })
    }
}

/// Builds the corpus: pages, then posts, then linked projects, each in source order.
///
/// Records with a blank title, or whose url repeats an earlier record's, are
/// dropped with a warning so every kept record is titled and uniquely addressable.
pub fn build_corpus<S: ContentSource + ?Sized>(
    source: &S,
) -> Result<Vec<SearchableRecord>, ContentError> {
    let posts = source.list_posts()?;
    let projects = source.list_projects()?;

    let pages = STATIC_PAGES
        .iter()
        .map(|&(title, description, url)| SearchableRecord::page(title, description, url));
    let posts = posts.into_iter().map(SearchableRecord::from_post);
    let projects = projects.into_iter().filter_map(SearchableRecord::from_project);

    let mut seen_urls = AHashSet::new();
    let corpus = pages
        .chain(posts)
        .chain(projects)
        .filter(|record| {
            if record.title.trim().is_empty() {
                tracing::warn!("Skipping {:?} at {} with an empty title", record.kind, record.url);
                return false;
            }
            if !seen_urls.insert(record.url.clone()) {
                tracing::warn!("Skipping {:?} with duplicate url {}", record.kind, record.url);
                return false;
            }
            true
        })
        .collect();

    Ok(corpus)
}
