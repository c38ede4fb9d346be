//! Product commands: listing with optional stock enrichment, search.

use clap::Subcommand;
use shopctl_client::{CancelToken, CatalogClient, ProductQuery, SearchOptions};
use shopctl_core::format::format_price;
use shopctl_core::{AppConfig, Product, StockLevel};

/// Available units at or below this count display as "low stock".
const LOW_STOCK_THRESHOLD: i64 = 5;

#[derive(Debug, Subcommand)]
pub enum ProductCommands {
    /// List products
    List {
        /// Filter by category id
        #[arg(long)]
        category: Option<i64>,

        #[arg(long, default_value_t = 50)]
        limit: u32,

        /// Include a stock column (one extra request per row)
        #[arg(long)]
        stock: bool,
    },
    /// Search products by id, name, slug, or SKU
    Search { query: String },
}

pub async fn run(
    client: &CatalogClient,
    config: &AppConfig,
    command: ProductCommands,
) -> anyhow::Result<()> {
    match command {
        ProductCommands::List {
            category,
            limit,
            stock,
        } => run_list(client, config, category, limit, stock).await,
        ProductCommands::Search { query } => run_search(client, config, &query).await,
    }
}

async fn run_list(
    client: &CatalogClient,
    config: &AppConfig,
    category: Option<i64>,
    limit: u32,
    stock: bool,
) -> anyhow::Result<()> {
    let query = ProductQuery {
        limit,
        category_id: category,
        lang: config.lang.clone(),
        ..ProductQuery::default()
    };
    let page = client.list_products(&query).await?;
    if page.items.is_empty() {
        println!("no products found");
        return Ok(());
    }

    let stock_levels = if stock {
        Some(client.fetch_stock_levels(&page.items).await)
    } else {
        None
    };
    print_table(&page.items, stock_levels.as_deref());

    if let Some(total) = page.meta.as_ref().and_then(|meta| meta.total) {
        println!();
        println!("showing {} of {total}", page.items.len());
    }

    Ok(())
}

async fn run_search(
    client: &CatalogClient,
    config: &AppConfig,
    query: &str,
) -> anyhow::Result<()> {
    let options = SearchOptions {
        page_size: config.page_size,
        scan_cap: config.product_scan_cap,
        lang: config.lang.clone(),
    };
    let cancel = CancelToken::new();
    let products = client.search_products(query, &options, &cancel).await?;
    if products.is_empty() {
        println!("no products matched \"{query}\"");
        return Ok(());
    }
    print_table(&products, None);

    Ok(())
}

fn print_table(products: &[Product], stock: Option<&[Option<StockLevel>]>) {
    let mut header = format!(
        "{:<8}{:<32}{:<16}{:<16}{:<8}",
        "ID", "NAME", "SKU", "PRICE", "ACTIVE"
    );
    if stock.is_some() {
        header.push_str("STOCK");
    }
    println!("{header}");

    for (index, product) in products.iter().enumerate() {
        let sku = product.sku.as_deref().unwrap_or("\u{2014}");
        let mut row = format!(
            "{:<8}{:<32}{:<16}{:<16}{:<8}",
            product.id,
            super::truncate(&product.name, 28),
            sku,
            format_price(product.price, &product.currency),
            super::yes_no(product.is_active)
        );
        if let Some(stock) = stock {
            let status = stock.get(index).and_then(Option::as_ref).map_or_else(
                || "\u{2014}".to_owned(),
                |level| level.status(LOW_STOCK_THRESHOLD).to_string(),
            );
            row.push_str(&status);
        }
        println!("{row}");
    }
}
