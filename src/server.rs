//! MCP server exposing site search and listings as tools.

use crate::content::ContentSource;
use crate::search::SearchEngine;
use crate::tools::{
    ListProjectsRequest, ListSectionsRequest, ListTagsRequest, SearchOutcome, SearchRequest,
    handle_list_projects, handle_list_sections, handle_list_tags, handle_search,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use std::sync::Arc;

/// Engine over a type-erased content source, shared across tool calls.
pub type SharedEngine = Arc<SearchEngine<Arc<dyn ContentSource>>>;

/// MCP server over a shared search engine.
#[derive(Clone)]
pub struct SiteServer {
    engine: SharedEngine,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for SiteServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteServer").finish_non_exhaustive()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Failed to encode response: {}", e))
}

async fn run_blocking<T, F>(f: F) -> Result<T, String>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| format!("Task failed: {}", e))
}

#[tool_router]
impl SiteServer {
    pub fn new(engine: SharedEngine) -> Self {
        Self {
            engine,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Search the site's pages, blog posts and projects. Returns JSON `{ results: [...] }` ranked by relevance, at most 20 entries."
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        let engine = Arc::clone(&self.engine);
        let outcome = run_blocking(move || handle_search(&engine, &request))
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Search task failed: {}", e);
                SearchOutcome::failed()
            });

        let body = to_json(&outcome.response)?;
        if outcome.is_ok() { Ok(body) } else { Err(body) }
    }

    #[tool(
        description = "List blog tags with post counts and URL slugs. Pass a tag slug to also list that tag's posts."
    )]
    async fn list_tags(
        &self,
        Parameters(request): Parameters<ListTagsRequest>,
    ) -> std::result::Result<String, String> {
        let engine = Arc::clone(&self.engine);
        let response = run_blocking(move || handle_list_tags(engine.source(), &request))
            .await?
            .map_err(|e| e.to_string())?;
        to_json(&response)
    }

    #[tool(
        description = "Show the blog's section tree. Pass a section path such as 'product/reviews' to list its subsections, breadcrumbs and posts."
    )]
    async fn list_sections(
        &self,
        Parameters(request): Parameters<ListSectionsRequest>,
    ) -> std::result::Result<String, String> {
        let engine = Arc::clone(&self.engine);
        let response = run_blocking(move || handle_list_sections(engine.source(), &request))
            .await?
            .map_err(|e| e.to_string())?;
        to_json(&response)
    }

    #[tool(
        description = "List portfolio projects in display order. Pass a count to get only the featured first N."
    )]
    async fn list_projects(
        &self,
        Parameters(request): Parameters<ListProjectsRequest>,
    ) -> std::result::Result<String, String> {
        let engine = Arc::clone(&self.engine);
        let response = run_blocking(move || handle_list_projects(engine.source(), &request))
            .await?
            .map_err(|e| e.to_string())?;
        to_json(&response)
    }
}

#[tool_handler]
impl ServerHandler for SiteServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "folio-search: relevance search over a personal site's pages, blog posts and projects. \
                 Use search for free-text queries, list_tags and list_sections to browse the blog, \
                 list_projects for the portfolio."
                    .to_string(),
            )
    }
}
