//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::query::ReviewQuery;

/// Fetch reviews from a WordPress-style REST API.
#[derive(Parser, Debug)]
#[command(name = "reviewkit", version, about = "Fetch and cache reviews from a REST API")]
pub struct Cli {
    /// Config file (default: ~/.config/reviewkit/config.toml).
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Override `api.site_url` from the config file.
    #[arg(long, global = true)]
    pub site: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one page of reviews.
    List {
        /// Query parameters as key=value (e.g. paged=2 search=tea).
        #[arg(value_name = "KEY=VALUE")]
        params: Vec<String>,
    },

    /// Fetch a single review by slug.
    Get {
        slug: String,
    },

    /// Print the default config file path.
    ConfigPath,
}

impl Commands {
    /// Parse `List` params into a query.
    pub fn list_query(params: &[String]) -> Result<ReviewQuery, crate::query::ParseParamError> {
        params.join("&").parse()
    }
}
