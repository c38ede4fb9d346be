//! Discount commands.

use clap::Subcommand;
use shopctl_client::{CatalogClient, ListQuery};
use shopctl_core::format::format_date;
use shopctl_core::AppConfig;

#[derive(Debug, Subcommand)]
pub enum DiscountCommands {
    /// List discounts
    List,
}

pub async fn run(
    client: &CatalogClient,
    config: &AppConfig,
    command: DiscountCommands,
) -> anyhow::Result<()> {
    match command {
        DiscountCommands::List => run_list(client, config).await,
    }
}

async fn run_list(client: &CatalogClient, config: &AppConfig) -> anyhow::Result<()> {
    let query = ListQuery {
        limit: config.page_size,
        ..ListQuery::default()
    };
    let page = client.list_discounts(&query).await?;
    if page.items.is_empty() {
        println!("no discounts found");
        return Ok(());
    }

    let header = format!(
        "{:<8}{:<28}{:<10}{:<12}{:<12}ACTIVE",
        "ID", "NAME", "PERCENT", "STARTS", "ENDS"
    );
    println!("{header}");
    for discount in &page.items {
        let percent = discount
            .percent
            .map_or_else(|| "\u{2014}".to_owned(), |p| format!("{p}%"));
        let starts = discount
            .starts_at
            .map_or_else(|| "\u{2014}".to_owned(), format_date);
        let ends = discount
            .ends_at
            .map_or_else(|| "\u{2014}".to_owned(), format_date);
        println!(
            "{:<8}{:<28}{:<10}{:<12}{:<12}{}",
            discount.id,
            super::truncate(&discount.name, 24),
            percent,
            starts,
            ends,
            super::yes_no(discount.is_active)
        );
    }

    Ok(())
}
