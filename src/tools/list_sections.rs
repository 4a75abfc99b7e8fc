//! Section tree and section browsing for the blog sidebar.

use crate::content::posts::{breadcrumbs, posts_by_section, subsections, top_level_sections};
use crate::content::sections::build_hierarchy;
use crate::content::{Breadcrumb, ContentSource, Post, SectionNode};
use crate::error::ContentError;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListSectionsRequest {
    /// Section path such as "product/reviews"; omit for the whole blog
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSectionsResponse {
    pub tree: SectionNode,
    /// Every folder path in the tree, depth-first
    pub paths: Vec<String>,
    /// Top-level folders, alphabetically
    pub sections: Vec<String>,
    /// Immediate child folders of the requested path
    pub subsections: Vec<String>,
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Posts at or below the requested path, newest first
    pub posts: Vec<Post>,
}

pub fn handle_list_sections<S: ContentSource + ?Sized>(
    source: &S,
    request: &ListSectionsRequest,
) -> Result<ListSectionsResponse, ContentError> {
    let posts = source.list_posts()?;
    let path = request.path.as_deref().unwrap_or("").trim_matches('/');

    let tree = build_hierarchy(&posts);
    let paths = tree.descendant_paths();

    Ok(ListSectionsResponse {
        sections: top_level_sections(&posts),
        subsections: subsections(&posts, path),
        breadcrumbs: breadcrumbs(path),
        posts: posts_by_section(&posts, path).into_iter().cloned().collect(),
        tree,
        paths,
    })
}
