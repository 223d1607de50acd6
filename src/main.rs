use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use serde_json::json;

use reviewkit::cli::{Cli, Commands};
use reviewkit::config::Config;
use reviewkit::logging::init_tracing;
use reviewkit::store::selectors;
use reviewkit::{Dispatcher, FetchProps, HttpReviewsApi, QueryReviews, Review, ReviewStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::ConfigPath = cli.command {
        println!("{}", Config::config_path().display());
        return Ok(());
    }

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    if let Some(site) = cli.site {
        config.api.site_url = site;
    }
    init_tracing(&config.logging);
    config.validate()?;

    let api = HttpReviewsApi::new(&config)?;
    let dispatcher = Arc::new(Dispatcher::new(api, ReviewStore::new()));
    let mut connector = QueryReviews::new(dispatcher.clone());
    let store = dispatcher.store();

    match cli.command {
        Commands::List { params } => {
            let query = Commands::list_query(&params)?;
            connector.update(FetchProps::query(query.clone())).await;

            let output = store.read(|state| {
                let reviews = selectors::get_reviews_for_query(state, &query)?;
                let reviews: Vec<&Review> = reviews.iter().map(Arc::as_ref).collect();
                Some(json!({
                    "query": query.canonical_key(),
                    "total_pages": selectors::get_total_pages_for_query(state, &query),
                    "reviews": reviews,
                }))
            });
            match output {
                Some(output) => println!("{}", serde_json::to_string_pretty(&output)?),
                None => {
                    let error = store
                        .read(|state| selectors::get_error_for_query(state, &query).map(str::to_string));
                    bail!(error.unwrap_or_else(|| "request did not complete".to_string()));
                }
            }
        }
        Commands::Get { slug } => {
            connector.update(FetchProps::slug(slug.clone())).await;

            match store.read(|state| selectors::get_review_by_slug(state, &slug)) {
                Some(review) => println!("{}", serde_json::to_string_pretty(review.as_ref())?),
                None => {
                    let error = store
                        .read(|state| selectors::get_error_for_review(state, &slug).map(str::to_string));
                    bail!(error.unwrap_or_else(|| format!("review '{}' not found", slug)));
                }
            }
        }
        Commands::ConfigPath => {}
    }

    Ok(())
}
