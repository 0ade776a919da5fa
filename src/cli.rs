//! Command-line front end: fetch posts through a [`PostsStore`] and print
//! the resulting state.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::api::PostsClient;
use crate::config::{Config, ConfigError};
use crate::posts::{PostsStore, PostsStoreState};

#[derive(Debug, Parser)]
#[command(name = "postdeck", version, about = "Browse blog posts from a paginated REST API")]
pub struct Cli {
    /// Config file to load instead of ~/.config/postdeck/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL from config
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Fetch one page of posts
    Page {
        /// 1-based page number
        #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Fetch the whole collection and show its first page
    All,
}

impl Cli {
    /// Load config from `--config` (or the default location) and apply
    /// command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::resolve(self.config.as_deref())?;

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
            config.validate()?;
        }

        Ok(config)
    }
}

/// Run one command. A failed fetch prints the store's error to stderr and
/// yields a failure exit code.
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = cli.load_config()?;
    let client = PostsClient::new(&config.api)?;
    tracing::debug!(endpoint = %client.endpoint(), "Using posts endpoint");

    let store = PostsStore::new(Arc::new(client));
    match cli.command {
        Command::Page { page } => store.fetch_page(page).await,
        Command::All => store.fetch_all_posts().await,
    }

    let state = store.snapshot();
    if let Some(error) = &state.error {
        eprintln!("Error: {}", error);
        return Ok(ExitCode::FAILURE);
    }

    print!("{}", render(&state));
    Ok(ExitCode::SUCCESS)
}

/// One `<id>\t<title>` line per post on the current page, then a summary.
pub fn render(state: &PostsStoreState) -> String {
    let mut out = String::new();
    for post in &state.posts {
        let _ = writeln!(
            out,
            "{}\t{}",
            display_field(post.id()),
            display_field(post.get("title"))
        );
    }
    let _ = writeln!(
        out,
        "page {}/{} ({} loaded)",
        state.current_page,
        state.total_pages,
        state.all_posts.len()
    );
    out
}

/// Strings print without quotes; missing or null fields print as nothing.
fn display_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
