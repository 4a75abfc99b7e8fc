//! Blog post discovery and metadata queries.
//!
//! Posts are `.mdx` (or `.md`) files under the posts directory, possibly nested in
//! section folders. The slug is the relative path without extension, always joined
//! with `/` (`program/hello-world`). Each file opens with a TOML front-matter block:
//!
//! ```text
//! +++
//! title = "Hello World"
//! date = 2024-03-01
//! summary = "First post"
//! tags = ["Meta"]
//! +++
//! ```

use super::tags::slug_to_tag;
use crate::error::ContentError;
use ahash::AHashMap;
use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::path::{Component, Path};

/// Front-matter delimiter line.
const FRONT_MATTER_FENCE: &str = "+++";

/// File extensions recognized as posts.
const POST_EXTENSIONS: &[&str] = &["mdx", "md"];

/// Post metadata as listed by the content source. The body is not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub summary: String,
    pub tags: Vec<String>,
}

impl Post {
    /// Section folders the post lives under, outermost first. Empty for root-level posts.
    pub fn section_segments(&self) -> Vec<&str> {
        let mut segments: Vec<&str> = self.slug.split('/').collect();
        segments.pop();
        segments
    }
}

#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,
    date: toml::Value,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    tags: Vec<String>,
}

/// A tag and the number of posts carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// A step in a section path, e.g. `product` then `product/reviews`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub name: String,
    pub path: String,
}

/// Calendar day a post was published, used for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PostDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PostDate {
    fn new(year: u16, month: u8, day: u8) -> Option<Self> {
        let valid = (1..=12).contains(&month) && (1..=31).contains(&day);
        valid.then_some(Self { year, month, day })
    }
}

/// Parse a front-matter date: a TOML date or date-time (`2024-04-01`,
/// `2024-04-01T10:00:00Z`) or an unpadded `2024-9-1`. Any time of day is ignored.
pub fn post_date(raw: &str) -> Option<PostDate> {
    let raw = raw.trim();
    if let Ok(datetime) = raw.parse::<toml::value::Datetime>() {
        let date = datetime.date?;
        return PostDate::new(date.year, date.month, date.day);
    }

    let day_part = raw.split(['T', 't', ' ']).next()?;
    let mut parts = day_part.split('-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    PostDate::new(year, month, day)
}

/// Load every post under `dir`, newest first.
///
/// A missing directory is an empty site, not an error. Posts sharing a date are
/// ordered by slug.
pub fn load_posts(dir: &Path) -> Result<Vec<Post>, ContentError> {
    if !dir.exists() {
        tracing::debug!("Posts directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }

    let mut posts = Vec::new();
    let walker = WalkBuilder::new(dir)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let is_post = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| POST_EXTENSIONS.contains(&ext));
        if !is_post {
            continue;
        }

        let Some(slug) = slug_for(dir, path) else {
            tracing::warn!("Skipping post with non-UTF-8 path: {}", path.display());
            continue;
        };

        let contents =
            std::fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        posts.push(parse_post(slug, &contents, path)?);
    }

    posts.sort_by_cached_key(|post| (Reverse(post_date(&post.date)), post.slug.clone()));

    tracing::debug!("Loaded {} posts from {}", posts.len(), dir.display());
    Ok(posts)
}

/// Relative path from `root` to `path` without extension, joined with `/`.
fn slug_for(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let segments = relative
        .components()
        .map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some(segments.join("/"))
}

/// Parse a post file's front matter. `path` is only used for error reporting.
pub(crate) fn parse_post(slug: String, contents: &str, path: &Path) -> Result<Post, ContentError> {
    let block = front_matter(contents).ok_or_else(|| ContentError::FrontMatter {
        path: path.to_path_buf(),
        reason: format!("expected a block delimited by `{}` lines", FRONT_MATTER_FENCE),
    })?;

    let meta: FrontMatter = toml::from_str(block).map_err(|source| ContentError::Toml {
        path: path.to_path_buf(),
        source,
    })?;

    let date = match meta.date {
        toml::Value::String(date) => date,
        toml::Value::Datetime(date) => date.to_string(),
        other => {
            return Err(ContentError::FrontMatter {
                path: path.to_path_buf(),
                reason: format!("`date` must be a date or string, found {}", other.type_str()),
            });
        }
    };

    if post_date(&date).is_none() {
        return Err(ContentError::FrontMatter {
            path: path.to_path_buf(),
            reason: format!("unrecognized `date` {:?}", date),
        });
    }

    Ok(Post {
        slug,
        title: meta.title,
        date,
        summary: meta.summary,
        tags: meta.tags,
    })
}

/// Extract the text between the opening and closing fence lines.
fn front_matter(contents: &str) -> Option<&str> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut lines = contents.split_inclusive('\n');

    let opening = lines.next()?;
    if opening.trim() != FRONT_MATTER_FENCE {
        return None;
    }

    let start = opening.len();
    let mut end = start;
    for line in lines {
        if line.trim() == FRONT_MATTER_FENCE {
            return Some(&contents[start..end]);
        }
        end += line.len();
    }

    None
}

/// Every distinct tag, sorted.
pub fn all_tags(posts: &[Post]) -> Vec<String> {
    posts
        .iter()
        .flat_map(|post| post.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Tag usage counts, most used first. Ties keep first-seen order.
pub fn tags_with_counts(posts: &[Post]) -> Vec<TagCount> {
    let mut positions: AHashMap<&str, usize> = AHashMap::new();
    let mut counts: Vec<TagCount> = Vec::new();

    for tag in posts.iter().flat_map(|post| &post.tags) {
        if let Some(&idx) = positions.get(tag.as_str()) {
            counts[idx].count += 1;
        } else {
            positions.insert(tag.as_str(), counts.len());
            counts.push(TagCount {
                tag: tag.clone(),
                count: 1,
            });
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Posts carrying the tag named by a URL slug (`embedded-systems`), case-insensitively.
pub fn posts_by_tag<'a>(posts: &'a [Post], tag_slug: &str) -> Vec<&'a Post> {
    let wanted = slug_to_tag(tag_slug).to_lowercase();
    posts
        .iter()
        .filter(|post| post.tags.iter().any(|tag| tag.to_lowercase() == wanted))
        .collect()
}

/// Posts at or below a section path. An empty path selects every post.
pub fn posts_by_section<'a>(posts: &'a [Post], section_path: &str) -> Vec<&'a Post> {
    if section_path.is_empty() {
        return posts.iter().collect();
    }
    let prefix = format!("{}/", section_path);
    posts
        .iter()
        .filter(|post| post.slug.starts_with(&prefix))
        .collect()
}

/// Top-level section folders, sorted.
pub fn top_level_sections(posts: &[Post]) -> Vec<String> {
    subsections(posts, "")
}

/// Immediate child folders of a section path, sorted. An empty path lists top-level sections.
///
/// Only folders count: a post file directly inside `section_path` is not a subsection,
/// so a root-level `hello-world` post does not make `hello-world` a top-level section.
pub fn subsections(posts: &[Post], section_path: &str) -> Vec<String> {
    let prefix = if section_path.is_empty() {
        String::new()
    } else {
        format!("{}/", section_path)
    };

    posts
        .iter()
        .filter_map(|post| post.slug.strip_prefix(prefix.as_str()))
        .filter_map(|remainder| remainder.split_once('/'))
        .map(|(folder, _)| folder)
        .filter(|folder| !folder.is_empty())
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Breadcrumb trail for a section path: `a/b` yields `a` then `a/b`.
pub fn breadcrumbs(section_path: &str) -> Vec<Breadcrumb> {
    let mut crumbs = Vec::new();
    let mut path = String::new();

    for segment in section_path.split('/').filter(|s| !s.is_empty()) {
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(segment);
        crumbs.push(Breadcrumb {
            name: segment.to_string(),
            path: path.clone(),
        });
    }

    crumbs
}
