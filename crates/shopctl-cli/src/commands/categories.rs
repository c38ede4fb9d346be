//! Category commands: tree rendering, flat listing, descendant preview.

use std::collections::HashSet;

use clap::Subcommand;
use shopctl_client::{CatalogClient, CategoryQuery, FetchAllOptions};
use shopctl_core::tree::{collect_descendants, expand_selection, flatten_tree};
use shopctl_core::{AppConfig, Category};

#[derive(Debug, Subcommand)]
pub enum CategoryCommands {
    /// Print the category tree
    Tree {
        /// Expand every node
        #[arg(long)]
        all: bool,

        /// Expand a specific category id (repeatable)
        #[arg(long = "expand", value_name = "ID")]
        expand: Vec<i64>,
    },
    /// List categories as a flat table
    List {
        /// Only active categories
        #[arg(long)]
        active_only: bool,
    },
    /// Show the transitive subcategories of a category
    Descendants {
        id: i64,

        /// Print the cascaded selection instead (the id plus all descendants)
        #[arg(long)]
        as_selection: bool,
    },
}

pub async fn run(
    client: &CatalogClient,
    config: &AppConfig,
    command: CategoryCommands,
) -> anyhow::Result<()> {
    match command {
        CategoryCommands::Tree { all, expand } => run_tree(client, config, all, &expand).await,
        CategoryCommands::List { active_only } => run_list(client, config, active_only).await,
        CategoryCommands::Descendants { id, as_selection } => {
            run_descendants(client, config, id, as_selection).await
        }
    }
}

/// Fetch the full category collection, surfacing truncation as a warning.
async fn load_categories(
    client: &CatalogClient,
    config: &AppConfig,
    active_only: bool,
) -> anyhow::Result<Vec<Category>> {
    let query = CategoryQuery {
        active_only,
        lang: config.lang.clone(),
        ..CategoryQuery::default()
    };
    let options = FetchAllOptions {
        page_size: config.page_size,
        ..FetchAllOptions::with_cap(config.category_fetch_cap)
    };
    let collected = client.list_all_categories(&query, &options).await?;
    if let Some(truncation) = &collected.truncation {
        eprintln!("warning: category list is incomplete ({truncation})");
    }
    Ok(collected.items)
}

async fn run_tree(
    client: &CatalogClient,
    config: &AppConfig,
    all: bool,
    expand: &[i64],
) -> anyhow::Result<()> {
    let categories = load_categories(client, config, false).await?;
    if categories.is_empty() {
        println!("no categories found");
        return Ok(());
    }

    let expanded: HashSet<String> = if all {
        categories.iter().map(|c| c.id.to_string()).collect()
    } else {
        expand.iter().map(ToString::to_string).collect()
    };

    for item in flatten_tree(&categories, &expanded) {
        let indent = "  ".repeat(item.depth);
        let marker = if !item.has_children {
            ' '
        } else if expanded.contains(&item.id) {
            '-'
        } else {
            '+'
        };
        println!("{indent}{marker} {} [{}]", item.label, item.id);
    }

    Ok(())
}

async fn run_list(
    client: &CatalogClient,
    config: &AppConfig,
    active_only: bool,
) -> anyhow::Result<()> {
    let categories = load_categories(client, config, active_only).await?;
    if categories.is_empty() {
        println!("no categories found");
        return Ok(());
    }

    let header = format!(
        "{:<8}{:<28}{:<28}{:<8}ACTIVE",
        "ID", "NAME", "SLUG", "PARENT"
    );
    println!("{header}");
    for category in &categories {
        let parent = category
            .parent_id
            .map_or_else(|| "\u{2014}".to_owned(), |p| p.to_string());
        println!(
            "{:<8}{:<28}{:<28}{:<8}{}",
            category.id,
            super::truncate(&category.name, 24),
            super::truncate(&category.slug, 24),
            parent,
            super::yes_no(category.is_active)
        );
    }

    Ok(())
}

async fn run_descendants(
    client: &CatalogClient,
    config: &AppConfig,
    id: i64,
    as_selection: bool,
) -> anyhow::Result<()> {
    let categories = load_categories(client, config, false).await?;
    if !categories.iter().any(|c| c.id == id) {
        anyhow::bail!("category {id} not found");
    }

    if as_selection {
        let selection = expand_selection(&categories, &[id]);
        println!("selecting category {id} cascades to {} categories:", selection.len());
        for selected in selection {
            println!("{selected}");
        }
        return Ok(());
    }

    let mut descendants = collect_descendants(&categories, id);
    descendants.sort_unstable();
    if descendants.is_empty() {
        println!("category {id} has no subcategories");
        return Ok(());
    }
    println!("{} subcategories:", descendants.len());
    for descendant in descendants {
        println!("{descendant}");
    }

    Ok(())
}
