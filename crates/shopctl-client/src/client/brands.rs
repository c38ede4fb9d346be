//! Brand endpoints.

use shopctl_core::Brand;

use crate::envelope::{decode_page, Page};
use crate::error::ApiError;
use crate::fetch_all::{fetch_all_pages, Collected, FetchAllOptions};
use crate::types::{BrandInput, ListQuery};

use super::{CatalogClient, KeyScope};

impl CatalogClient {
    /// Fetches one page of brands.
    ///
    /// # Errors
    ///
    /// Network/status/decoding errors from the list request.
    pub async fn list_brands(&self, query: &ListQuery) -> Result<Page<Brand>, ApiError> {
        let mut url = self.endpoint("brands")?;
        url.query_pairs_mut()
            .append_pair("skip", &query.skip.to_string())
            .append_pair("limit", &query.limit.to_string());
        let body = self.get_json(url, KeyScope::Catalog).await?;
        decode_page(body, "brands")
    }

    /// Fetches every page of the brand collection, up to the configured
    /// item cap.
    ///
    /// # Errors
    ///
    /// Propagates a page error only under [`crate::PageErrorPolicy::Fail`].
    pub async fn list_all_brands(
        &self,
        options: &FetchAllOptions,
    ) -> Result<Collected<Brand>, ApiError> {
        fetch_all_pages("brands", options, |skip, limit| {
            let query = ListQuery { skip, limit };
            async move { self.list_brands(&query).await }
        })
        .await
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no brand has this id; the usual
    /// network/status/decoding errors otherwise.
    pub async fn get_brand(&self, id: i64) -> Result<Brand, ApiError> {
        let url = self.endpoint(&format!("brands/{id}"))?;
        let body = self.get_json(url, KeyScope::Catalog).await?;
        Self::decode(body, &format!("brand {id}"))
    }

    /// # Errors
    ///
    /// Network/status/decoding errors from the create request.
    pub async fn create_brand(&self, input: &BrandInput) -> Result<Brand, ApiError> {
        let url = self.endpoint("brands")?;
        let body = self.post_json(url, KeyScope::Catalog, input).await?;
        Self::decode(body, "created brand")
    }

    /// Partial update: only the fields set on `input` are sent.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no brand has this id; the usual
    /// network/status/decoding errors otherwise.
    pub async fn update_brand(&self, id: i64, input: &BrandInput) -> Result<Brand, ApiError> {
        let url = self.endpoint(&format!("brands/{id}"))?;
        let body = self.put_json(url, KeyScope::Catalog, input).await?;
        Self::decode(body, &format!("updated brand {id}"))
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no brand has this id; the usual
    /// network/status errors otherwise.
    pub async fn delete_brand(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("brands/{id}"))?;
        self.delete_request(url, KeyScope::Catalog).await
    }
}
