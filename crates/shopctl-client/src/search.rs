//! Progressive product search.
//!
//! The backend's `search` parameter is unreliable on some deployments, so
//! the search falls back through three strategies: a direct id lookup for
//! numeric queries, the server-side `search` parameter, and finally a
//! bounded client-side scan of the product collection. The scan is the
//! expensive path and is the reason every search carries a [`CancelToken`]:
//! a superseded scan must never deliver stale results.

use shopctl_core::Product;

use crate::cancel::CancelToken;
use crate::client::CatalogClient;
use crate::error::ApiError;
use crate::fetch_all::DEFAULT_PAGE_SIZE;
use crate::types::ProductQuery;

const DEFAULT_SCAN_CAP: usize = 20_000;

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub page_size: u32,
    /// Safety cap on the number of products examined by the scan fallback.
    pub scan_cap: usize,
    pub lang: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            scan_cap: DEFAULT_SCAN_CAP,
            lang: None,
        }
    }
}

impl CatalogClient {
    /// Searches products by id, name, slug, or SKU.
    ///
    /// Strategies, in order:
    ///
    /// 1. If `query` parses as an id, look the product up directly; a
    ///    missing id falls through to the next strategy.
    /// 2. Ask the backend via the `search` parameter; a non-empty result
    ///    wins.
    /// 3. Scan the collection page by page, matching name/slug/SKU
    ///    case-insensitively, up to `options.scan_cap` products.
    ///
    /// The token is checked before every page request.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Cancelled`] once `cancel` has been cancelled.
    /// - Any request error from the active strategy.
    pub async fn search_products(
        &self,
        query: &str,
        options: &SearchOptions,
        cancel: &CancelToken,
    ) -> Result<Vec<Product>, ApiError> {
        let needle = query.trim();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        cancel.check()?;

        if let Ok(id) = needle.parse::<i64>() {
            match self.get_product(id).await {
                Ok(product) => return Ok(vec![product]),
                Err(ApiError::NotFound { .. }) => {}
                Err(err) => return Err(err),
            }
            cancel.check()?;
        }

        let page = self
            .list_products(&ProductQuery {
                limit: options.page_size,
                search: Some(needle.to_owned()),
                lang: options.lang.clone(),
                ..ProductQuery::default()
            })
            .await?;
        if !page.items.is_empty() {
            return Ok(page.items);
        }

        self.scan_products(needle, options, cancel).await
    }

    /// Strategy 3: walk the whole collection and match client-side.
    async fn scan_products(
        &self,
        needle: &str,
        options: &SearchOptions,
        cancel: &CancelToken,
    ) -> Result<Vec<Product>, ApiError> {
        let needle_lower = needle.to_lowercase();
        let page_size = options.page_size.max(1);
        let mut matches = Vec::new();
        let mut skip: u32 = 0;
        let mut scanned: usize = 0;

        loop {
            cancel.check()?;
            let page = self
                .list_products(&ProductQuery {
                    skip,
                    limit: page_size,
                    lang: options.lang.clone(),
                    ..ProductQuery::default()
                })
                .await?;

            let count = page.items.len();
            scanned += count;
            matches.extend(
                page.items
                    .into_iter()
                    .filter(|product| product_matches(product, &needle_lower)),
            );

            let has_next = page.meta.as_ref().and_then(|meta| meta.has_next);
            if count < page_size as usize || has_next == Some(false) {
                break;
            }
            if scanned >= options.scan_cap {
                tracing::warn!(
                    scanned,
                    cap = options.scan_cap,
                    "product scan cap reached, search results may be incomplete"
                );
                break;
            }
            skip = skip.saturating_add(page_size);
        }

        Ok(matches)
    }
}

fn product_matches(product: &Product, needle_lower: &str) -> bool {
    product.name.to_lowercase().contains(needle_lower)
        || product.slug.to_lowercase().contains(needle_lower)
        || product
            .sku
            .as_deref()
            .is_some_and(|sku| sku.to_lowercase().contains(needle_lower))
}
