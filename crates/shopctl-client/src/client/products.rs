//! Product endpoints, including per-row stock enrichment.

use futures::stream::{self, StreamExt};
use shopctl_core::{Product, StockLevel};

use crate::envelope::{decode_page, Page};
use crate::error::ApiError;
use crate::fetch_all::{fetch_all_pages, Collected, FetchAllOptions};
use crate::types::{ProductInput, ProductQuery};

use super::{CatalogClient, KeyScope};

impl CatalogClient {
    /// Fetches one page of products.
    ///
    /// # Errors
    ///
    /// Network/status/decoding errors from the list request.
    pub async fn list_products(&self, query: &ProductQuery) -> Result<Page<Product>, ApiError> {
        let mut url = self.endpoint("products")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("skip", &query.skip.to_string());
            pairs.append_pair("limit", &query.limit.to_string());
            if let Some(category_id) = query.category_id {
                pairs.append_pair("category_id", &category_id.to_string());
            }
            if let Some(search) = &query.search {
                pairs.append_pair("search", search);
            }
            if query.active_only {
                pairs.append_pair("active_only", "true");
            }
            if let Some(lang) = &query.lang {
                pairs.append_pair("lang", lang);
            }
        }
        let body = self.get_json(url, KeyScope::Catalog).await?;
        decode_page(body, "products")
    }

    /// Fetches every page of the product collection, up to the configured
    /// item cap.
    ///
    /// # Errors
    ///
    /// Propagates a page error only under [`crate::PageErrorPolicy::Fail`].
    pub async fn list_all_products(
        &self,
        query: &ProductQuery,
        options: &FetchAllOptions,
    ) -> Result<Collected<Product>, ApiError> {
        fetch_all_pages("products", options, |skip, limit| {
            let page_query = ProductQuery {
                skip,
                limit,
                ..query.clone()
            };
            async move { self.list_products(&page_query).await }
        })
        .await
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no product has this id; the usual
    /// network/status/decoding errors otherwise.
    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        let url = self.endpoint(&format!("products/{id}"))?;
        let body = self.get_json(url, KeyScope::Catalog).await?;
        Self::decode(body, &format!("product {id}"))
    }

    /// # Errors
    ///
    /// Network/status/decoding errors from the create request.
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        let url = self.endpoint("products")?;
        let body = self.post_json(url, KeyScope::Catalog, input).await?;
        Self::decode(body, "created product")
    }

    /// Partial update: only the fields set on `input` are sent.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no product has this id; the usual
    /// network/status/decoding errors otherwise.
    pub async fn update_product(
        &self,
        id: i64,
        input: &ProductInput,
    ) -> Result<Product, ApiError> {
        let url = self.endpoint(&format!("products/{id}"))?;
        let body = self.put_json(url, KeyScope::Catalog, input).await?;
        Self::decode(body, &format!("updated product {id}"))
    }

    /// Deletes a product. With `soft_delete`, the backend deactivates the
    /// record instead of removing it.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no product has this id; the usual
    /// network/status errors otherwise.
    pub async fn delete_product(&self, id: i64, soft_delete: bool) -> Result<(), ApiError> {
        let mut url = self.endpoint(&format!("products/{id}"))?;
        if soft_delete {
            url.query_pairs_mut().append_pair("soft_delete", "true");
        }
        self.delete_request(url, KeyScope::Catalog).await
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when the product has no stock record; the
    /// usual network/status/decoding errors otherwise.
    pub async fn get_stock(&self, product_id: i64) -> Result<StockLevel, ApiError> {
        let url = self.endpoint(&format!("products/{product_id}/stock"))?;
        let body = self.get_json(url, KeyScope::Catalog).await?;
        Self::decode(body, &format!("stock for product {product_id}"))
    }

    /// Fetches stock levels for one page of products.
    ///
    /// Lookups run concurrently (fan-out bounded by the slice length, one
    /// request per row) and are joined before returning. The result is in
    /// input order; a failed lookup degrades to `None` for that row instead
    /// of failing the page.
    pub async fn fetch_stock_levels(&self, products: &[Product]) -> Vec<Option<StockLevel>> {
        let concurrency = products.len().max(1);
        stream::iter(products)
            .map(|product| async move {
                match self.get_stock(product.id).await {
                    Ok(level) => Some(level),
                    Err(err) => {
                        tracing::warn!(product_id = product.id, error = %err, "stock lookup failed");
                        None
                    }
                }
            })
            .buffered(concurrency)
            .collect()
            .await
    }
}
