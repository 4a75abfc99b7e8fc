//! Project listing for the projects page and the home page's featured strip.

use crate::content::projects::featured_projects;
use crate::content::{ContentSource, Project};
use crate::error::ContentError;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListProjectsRequest {
    /// Return only the first N projects, as featured on the home page
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListProjectsResponse {
    /// Projects in listing order, including those without a link
    pub projects: Vec<Project>,
}

pub fn handle_list_projects<S: ContentSource + ?Sized>(
    source: &S,
    request: &ListProjectsRequest,
) -> Result<ListProjectsResponse, ContentError> {
    let mut projects = source.list_projects()?;

    if let Some(count) = request.count {
        let featured = featured_projects(&projects, count).len();
        projects.truncate(featured);
    }

    Ok(ListProjectsResponse { projects })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::StaticContent;
    use assert2::{check, let_assert};
    use rstest::rstest;

    fn project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            description: String::new(),
            tags: vec![],
            link: None,
            github: None,
        }
    }

    fn source() -> StaticContent {
        StaticContent::new(vec![], vec![project("One"), project("Two"), project("Three")])
    }

    #[rstest]
    #[case(None, vec!["One", "Two", "Three"])]
    #[case(Some(2), vec!["One", "Two"])]
    #[case(Some(0), vec![])]
    #[case(Some(10), vec!["One", "Two", "Three"])]
    fn test_list_projects(#[case] count: Option<usize>, #[case] expected: Vec<&str>) {
        let request = ListProjectsRequest { count };
        let_assert!(Ok(response) = handle_list_projects(&source(), &request));
        let titles: Vec<&str> = response.projects.iter().map(|p| p.title.as_str()).collect();
        check!(titles == expected);
    }
}
