//! Shared test fixtures for integration tests.
//!
//! Each test gets its own content root in a temp directory, laid out the way the
//! site keeps it:
//!
//! ```text
//! <root>/posts/<section>/<slug>.mdx   (+++ TOML front matter +++)
//! <root>/projects.toml                ([[projects]] array)
//! ```
//!
//! # Available Fixtures
//!
//! - `empty_site`: a content root with nothing in it
//! - `sample_site`: a handful of nested posts and projects, some without links

use folio_search::{SearchEngine, SiteConfig, SiteContent};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file, creating parent directories as needed.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }
}

/// A content root plus helpers for writing posts and projects into it.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct SiteFixture {
    pub workspace: TempWorkspace,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl SiteFixture {
    pub fn new() -> Self {
        folio_search::tracing::init();
        Self {
            workspace: TempWorkspace::new(),
        }
    }

    pub fn config(&self) -> SiteConfig {
        SiteConfig::from_content_dir(self.workspace.path())
    }

    pub fn content(&self) -> SiteContent {
        SiteContent::new(self.config())
    }

    pub fn engine(&self) -> SearchEngine<SiteContent> {
        SearchEngine::new(self.content())
    }

    /// Writes `posts/<slug>.mdx` with TOML front matter.
    pub fn write_post(&self, slug: &str, title: &str, date: &str, summary: &str, tags: &[&str]) {
        let tags = tags
            .iter()
            .map(|t| format!("{:?}", t))
            .collect::<Vec<_>>()
            .join(", ");
        let contents = format!(
            "+++\ntitle = {:?}\ndate = {}\nsummary = {:?}\ntags = [{}]\n+++\n\nBody of {}.\n",
            title, date, summary, tags, slug
        );
        self.workspace
            .create_file(&format!("posts/{}.mdx", slug), &contents);
    }

    /// Writes a raw file under `posts/`.
    pub fn write_raw_post(&self, relative: &str, contents: &str) {
        self.workspace
            .create_file(&format!("posts/{}", relative), contents);
    }

    pub fn write_projects(&self, contents: &str) {
        self.workspace.create_file("projects.toml", contents);
    }
}

#[fixture]
pub fn empty_site() -> SiteFixture {
    SiteFixture::new()
}

#[fixture]
pub fn sample_site() -> SiteFixture {
    let site = SiteFixture::new();
    site.write_post(
        "embedded/stm32/getting-started",
        "Getting Started with STM32",
        "2024-04-01",
        "Blinking an LED with HAL and CubeMX",
        &["STM32", "Embedded Systems"],
    );
    site.write_post(
        "embedded/arduino-car",
        "Arduino Line Follower",
        "2023-11-12",
        "Small robot car",
        &["Arduino", "Embedded Systems"],
    );
    site.write_post(
        "hello-world",
        "Hello World",
        "\"2022-01-05\"",
        "First post on this site",
        &["Meta"],
    );
    site.write_projects(
        r#"
[[projects]]
title = "Weather Station"
description = "ESP32 sensor node reporting to dashboard"
tags = ["ESP32", "IoT"]
link = "https://github.com/example/weather-station"

[[projects]]
title = "Secret Prototype"
description = "Not published yet"
tags = ["Prototype"]

[[projects]]
title = "Blank Link"
description = "Link left empty"
link = "   "
"#,
    );
    site
}
