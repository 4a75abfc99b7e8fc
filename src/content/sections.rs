//! Section hierarchy derived from post slugs, used for sidebar filters.

use super::posts::Post;
use serde::Serialize;

/// Name of the synthetic root node.
pub const ROOT_SECTION_NAME: &str = "All Posts";

/// A folder in the post tree. `post_count` includes posts in every nested folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionNode {
    pub name: String,
    pub path: String,
    pub children: Vec<SectionNode>,
    pub post_count: usize,
}

impl SectionNode {
    fn new(name: &str, path: String) -> Self {
        Self {
            name: name.to_string(),
            path,
            children: Vec::new(),
            post_count: 0,
        }
    }

    fn child_mut(&mut self, name: &str) -> &mut Self {
        let idx = match self.children.iter().position(|child| child.name == name) {
            Some(idx) => idx,
            None => {
                let path = if self.path.is_empty() {
                    name.to_string()
                } else {
                    format!("{}/{}", self.path, name)
                };
                self.children.push(Self::new(name, path));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }

    fn sort_recursive(&mut self) {
        self.children.sort_by(|a, b| a.name.cmp(&b.name));
        for child in &mut self.children {
            child.sort_recursive();
        }
    }

    /// Paths of every folder below this node, depth-first in child order.
    pub fn descendant_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths(&mut paths);
        paths
    }

    fn collect_paths(&self, paths: &mut Vec<String>) {
        for child in &self.children {
            paths.push(child.path.clone());
            child.collect_paths(paths);
        }
    }
}

/// Build the folder tree. The root counts every post; root-level posts add no folders.
pub fn build_hierarchy(posts: &[Post]) -> SectionNode {
    let mut root = SectionNode::new(ROOT_SECTION_NAME, String::new());
    root.post_count = posts.len();

    for post in posts {
        let mut node = &mut root;
        for segment in post.section_segments() {
            node = node.child_mut(segment);
            node.post_count += 1;
        }
    }

    root.sort_recursive();
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn post(slug: &str) -> Post {
        Post {
            slug: slug.to_string(),
            title: slug.to_string(),
            date: "2024-01-01".to_string(),
            summary: String::new(),
            tags: vec![],
        }
    }

    #[test]
    fn test_hierarchy_counts_nested_posts() {
        let posts = vec![
            post("hello"),
            post("product/reviews/keyboard"),
            post("product/reviews/mouse"),
            post("product/launch"),
            post("embedded/stm32/timers"),
        ];
        let root = build_hierarchy(&posts);

        check!(root.name == ROOT_SECTION_NAME);
        check!(root.path.is_empty());
        check!(root.post_count == 5);

        let names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
        check!(names == vec!["embedded", "product"]);

        let product = &root.children[1];
        check!(product.path == "product");
        check!(product.post_count == 3);
        check!(product.children.len() == 1);
        check!(product.children[0].path == "product/reviews");
        check!(product.children[0].post_count == 2);
    }

    #[test]
    fn test_descendant_paths_preorder() {
        let posts = vec![
            post("b/x/one"),
            post("a/two"),
            post("b/three"),
        ];
        check!(build_hierarchy(&posts).descendant_paths() == vec!["a", "b", "b/x"]);
    }

    #[test]
    fn test_empty_site() {
        let root = build_hierarchy(&[]);
        check!(root.post_count == 0);
        check!(root.children.is_empty());
        check!(root.descendant_paths().is_empty());
    }
}
