use anyhow::Context;
use clap::Parser;
use folio_search::cli::{Cli, Commands};
use folio_search::config::HttpConfig;
use folio_search::content::ContentSource;
use folio_search::tools::{SearchRequest, handle_search};
use folio_search::tracing::LogFormat;
use folio_search::{SearchEngine, SiteConfig, SiteContent, SiteServer, http};
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    folio_search::tracing::init_with(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    });

    let config = SiteConfig::from_cli(&cli);
    tracing::debug!(
        "Content from {} (posts: {}, projects: {})",
        config.content_dir.display(),
        config.posts_dir.display(),
        config.projects_file.display()
    );
    let content = SiteContent::new(config);

    match cli.command {
        Commands::ServeHttp { bind } => {
            let engine = Arc::new(SearchEngine::new(content));
            http::serve(engine, HttpConfig { bind }).await?;
        }
        Commands::ServeMcp => {
            tracing::info!("Starting folio-search MCP server");

            let source: Arc<dyn ContentSource> = Arc::new(content);
            let server = SiteServer::new(Arc::new(SearchEngine::new(source)));
            let service = server.serve(stdio()).await.inspect_err(|e| {
                tracing::error!("Error serving MCP server: {:?}", e);
            })?;
            service.waiting().await?;
        }
        Commands::Query { text } => {
            let engine = SearchEngine::new(content);
            let outcome = handle_search(&engine, &SearchRequest { query: text });
            let body = serde_json::to_string_pretty(&outcome.response)
                .context("Failed to encode results")?;
            println!("{}", body);
            if !outcome.is_ok() {
                anyhow::bail!("Search failed; see log for details");
            }
        }
    }

    Ok(())
}
