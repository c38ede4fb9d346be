//! Brand commands.

use clap::Subcommand;
use shopctl_client::{CatalogClient, FetchAllOptions};
use shopctl_core::AppConfig;

#[derive(Debug, Subcommand)]
pub enum BrandCommands {
    /// List brands
    List,
}

pub async fn run(
    client: &CatalogClient,
    config: &AppConfig,
    command: BrandCommands,
) -> anyhow::Result<()> {
    match command {
        BrandCommands::List => run_list(client, config).await,
    }
}

async fn run_list(client: &CatalogClient, config: &AppConfig) -> anyhow::Result<()> {
    let options = FetchAllOptions {
        page_size: config.page_size,
        ..FetchAllOptions::default()
    };
    let collected = client.list_all_brands(&options).await?;
    if let Some(truncation) = &collected.truncation {
        eprintln!("warning: brand list is incomplete ({truncation})");
    }
    if collected.items.is_empty() {
        println!("no brands found");
        return Ok(());
    }

    let header = format!("{:<8}{:<28}{:<28}ACTIVE", "ID", "NAME", "SLUG");
    println!("{header}");
    for brand in &collected.items {
        println!(
            "{:<8}{:<28}{:<28}{}",
            brand.id,
            super::truncate(&brand.name, 24),
            super::truncate(&brand.slug, 24),
            super::yes_no(brand.is_active)
        );
    }

    Ok(())
}
