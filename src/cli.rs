// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

use clap::{Args, Parser, Subcommand};
use resfind_core::catalog::{resolve_sort_order, SEARCH_TYPES, SORT_OPTIONS};
use resfind_core::config::Config;
use resfind_core::{ResourceQuery, TypeTag};
use resfind_delivery::{fetch_resources, DeliveryClient};

#[derive(Debug, Parser)]
#[command(name = "resfind", about = "Search the tools & resources catalog")]
pub struct Cli {
    /// Write debug logs to /tmp/resfind-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Query the content repository and print the matching entries as JSON.
    Search(SearchArgs),
    /// Print the search-type and sort-option catalogs as JSON.
    Catalog,
}

#[derive(Debug, Clone, Default, Args)]
pub struct SearchArgs {
    /// Free-text search terms.
    #[arg(long)]
    pub terms: Option<String>,
    /// Resource type to include (repeatable).
    #[arg(long = "resource-type")]
    pub resource_types: Vec<String>,
    /// Funding program to include (repeatable).
    #[arg(long = "program")]
    pub programs: Vec<String>,
    /// Category filter, e.g. `Tool`.
    #[arg(long)]
    pub category: Option<String>,
    /// Content sub-tag: developedBySparc or codeathon (repeatable).
    #[arg(long = "tag", value_parser = clap::value_parser!(TypeTag))]
    pub tags: Vec<TypeTag>,
    /// Sort option id, label (A-Z, Z-A) or raw field path.
    #[arg(long)]
    pub sort: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub skip: Option<u32>,
}

impl SearchArgs {
    /// Translate flags into the inbound query. Repeatable flags that were not
    /// given at all stay unset rather than becoming empty filters.
    pub fn to_query(&self) -> ResourceQuery {
        ResourceQuery {
            resource_types: non_empty(&self.resource_types),
            funding_programs: non_empty(&self.programs),
            category: self.category.clone(),
            terms: self.terms.clone(),
            sort_order: self
                .sort
                .as_deref()
                .map(|s| resolve_sort_order(s).to_owned()),
            type_tags: self.tags.iter().map(|t| t.as_str().to_owned()).collect(),
            limit: self.limit,
            skip: self.skip,
        }
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}

/// Both static catalogs as one JSON document.
pub fn catalog_json() -> serde_json::Value {
    serde_json::json!({
        "searchTypes": SEARCH_TYPES,
        "sortOptions": SORT_OPTIONS,
    })
}

/// Execute a parsed [`Command`], returning the JSON to print.
pub async fn run(command: &Command, config: &Config) -> anyhow::Result<serde_json::Value> {
    match command {
        Command::Catalog => Ok(catalog_json()),
        Command::Search(args) => {
            let client = DeliveryClient::from_config(&config.delivery)?;
            let page = fetch_resources(
                &client,
                &config.delivery.resource_content_type,
                &args.to_query(),
            )
            .await;
            tracing::info!(items = page.items().count(), total = ?page.total(), "search finished");
            Ok(serde_json::to_value(page)?)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
