// src/main.rs
//
// CLI: run the server, or run one catalog operation and print the JSON.

use anyhow::{anyhow, Result};
use cake_catalog::{
    catalog::{Catalog, Related},
    config::Config,
    query::FilterParams,
    server,
    store::{CatalogStore, MemoryStore, MongoStore},
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cake-catalog")]
struct Cli {
    /// Serve from a JSON seed file instead of MongoDB.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    Serve {
        /// Bind address, defaults to 0.0.0.0:$PORT
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    Search {
        q: String,
    },
    Suggest {
        q: String,
    },
    Filter {
        #[arg(long, default_value = "all")]
        category: String,
        #[arg(long, default_value = "all")]
        flavour: String,
        #[arg(long, default_value = "all")]
        weight: String,
        #[arg(long, default_value = "all")]
        veg: String,
        #[arg(long, default_value = "all")]
        sort: String,
    },
    Facets,
    Cake {
        id: String,
    },
    Related {
        id: String,
    },
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let store: Arc<dyn CatalogStore> = match &cli.data {
        Some(path) => Arc::new(MemoryStore::open(path)?),
        None => Arc::new(MongoStore::from_config(&config)),
    };
    let catalog = Catalog::new(store.clone());

    match cli.cmd {
        Cmd::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], config.port)));
            server::serve(store, bind).await
        }
        Cmd::Search { q } => print_json(&catalog.search(&q).await?),
        Cmd::Suggest { q } => print_json(&catalog.search_suggestions(&q).await?),
        Cmd::Filter {
            category,
            flavour,
            weight,
            veg,
            sort,
        } => {
            let params = FilterParams {
                category: Some(category),
                flavour: Some(flavour),
                weight: Some(weight),
                veg: Some(veg),
                sort: Some(sort),
            };
            print_json(&catalog.filtered_cakes(&params).await?)
        }
        Cmd::Facets => print_json(&catalog.filter_options().await?),
        Cmd::Cake { id } => match catalog.cake(&id).await? {
            Some(cake) => print_json(&cake),
            None => Err(anyhow!("Cake not found")),
        },
        Cmd::Related { id } => match catalog.related_cakes(&id).await? {
            Related::Found(cakes) => print_json(&cakes),
            Related::SourceMissing => Err(anyhow!("Cake not found")),
        },
        Cmd::Ping => {
            catalog.ping().await?;
            println!("DB Connected Successfully");
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
