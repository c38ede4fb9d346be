use anyhow::Context;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "shopctl")]
#[command(about = "Admin CLI for the shop catalog API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect the category tree
    Categories {
        #[command(subcommand)]
        command: commands::categories::CategoryCommands,
    },
    /// List and search products
    Products {
        #[command(subcommand)]
        command: commands::products::ProductCommands,
    },
    /// List brands
    Brands {
        #[command(subcommand)]
        command: commands::brands::BrandCommands,
    },
    /// List discounts
    Discounts {
        #[command(subcommand)]
        command: commands::discounts::DiscountCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = shopctl_core::load_app_config_from_env().context("configuration error")?;
    init_tracing(&config.log_level);

    let credentials = shopctl_client::Credentials {
        api_key: config.api_key.clone(),
        logistics_api_key: config.logistics_api_key.clone(),
    };
    let client = shopctl_client::CatalogClient::new(
        &config.api_base_url,
        credentials,
        config.request_timeout_secs,
    )?
    .with_prefetch_timeout(config.prefetch_timeout_secs);

    match cli.command {
        Commands::Categories { command } => {
            commands::categories::run(&client, &config, command).await
        }
        Commands::Products { command } => commands::products::run(&client, &config, command).await,
        Commands::Brands { command } => commands::brands::run(&client, &config, command).await,
        Commands::Discounts { command } => commands::discounts::run(&client, &config, command).await,
    }
}

fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
