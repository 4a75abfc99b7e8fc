use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "folio-search")]
#[command(about = "Relevance search over a personal site's pages, posts and projects", long_about = None)]
pub struct Cli {
    /// Site content root containing `posts/` and `projects.toml`
    #[arg(long, env = "FOLIO_CONTENT_DIR", default_value = ".", global = true)]
    pub content_dir: PathBuf,
    /// Emit logs as JSON lines instead of compact text
    #[arg(long, env = "FOLIO_LOG_JSON", global = true)]
    pub log_json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve `GET /api/search?q=` over HTTP
    ServeHttp {
        #[arg(long, env = "FOLIO_BIND", default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },
    /// Serve the search tools over MCP on stdio
    ServeMcp,
    /// Run one query and print the JSON response
    Query { text: String },
}
