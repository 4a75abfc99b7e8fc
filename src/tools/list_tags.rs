//! Tag listing for the blog's tag index and tag pages.

use crate::content::posts::{all_tags, posts_by_tag, tags_with_counts};
use crate::content::tags::tag_to_slug;
use crate::content::{ContentSource, Post, TagCount};
use crate::error::ContentError;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListTagsRequest {
    /// Tag slug (e.g. "embedded-systems") whose posts should be listed
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    #[serde(flatten)]
    pub tag: TagCount,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListTagsResponse {
    /// Every tag, most used first
    pub tags: Vec<TagEntry>,
    /// Every tag name, alphabetically
    pub all: Vec<String>,
    /// Posts for the requested tag, newest first; empty when no tag was requested
    pub posts: Vec<Post>,
}

pub fn handle_list_tags<S: ContentSource + ?Sized>(
    source: &S,
    request: &ListTagsRequest,
) -> Result<ListTagsResponse, ContentError> {
    let posts = source.list_posts()?;

    let tags = tags_with_counts(&posts)
        .into_iter()
        .map(|tag| TagEntry {
            slug: tag_to_slug(&tag.tag),
            tag,
        })
        .collect();

    let selected = request
        .tag
        .as_deref()
        .map(|slug| posts_by_tag(&posts, slug).into_iter().cloned().collect())
        .unwrap_or_default();

    Ok(ListTagsResponse {
        tags,
        all: all_tags(&posts),
        posts: selected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::StaticContent;
    use assert2::{check, let_assert};

    fn post(slug: &str, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            title: slug.to_string(),
            date: "2024-01-01".to_string(),
            summary: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn source() -> StaticContent {
        StaticContent::new(
            vec![
                post("one", &["Embedded Systems", "C"]),
                post("two", &["Embedded Systems"]),
            ],
            vec![],
        )
    }

    #[test]
    fn test_lists_counts_with_slugs() {
        let_assert!(Ok(response) = handle_list_tags(&source(), &ListTagsRequest::default()));
        check!(response.tags.len() == 2);
        check!(response.tags[0].tag.tag == "Embedded Systems");
        check!(response.tags[0].tag.count == 2);
        check!(response.tags[0].slug == "embedded-systems");
        check!(response.all == vec!["C", "Embedded Systems"]);
        check!(response.posts.is_empty());
    }

    #[test]
    fn test_selects_posts_by_slug() {
        let request = ListTagsRequest {
            tag: Some("c".to_string()),
        };
        let_assert!(Ok(response) = handle_list_tags(&source(), &request));
        let slugs: Vec<&str> = response.posts.iter().map(|p| p.slug.as_str()).collect();
        check!(slugs == vec!["one"]);
    }

    #[test]
    fn test_entry_serializes_flat() {
        let_assert!(Ok(response) = handle_list_tags(&source(), &ListTagsRequest::default()));
        let json = serde_json::to_value(&response.tags[1]).unwrap();
        check!(json["tag"] == "C");
        check!(json["count"] == 1);
        check!(json["slug"] == "c");
    }
}
