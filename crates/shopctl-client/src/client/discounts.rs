//! Discount endpoints.

use shopctl_core::Discount;

use crate::envelope::{decode_page, Page};
use crate::error::ApiError;
use crate::types::{DiscountInput, ListQuery};

use super::{CatalogClient, KeyScope};

impl CatalogClient {
    /// Fetches one page of discounts.
    ///
    /// # Errors
    ///
    /// Network/status/decoding errors from the list request.
    pub async fn list_discounts(&self, query: &ListQuery) -> Result<Page<Discount>, ApiError> {
        let mut url = self.endpoint("discounts")?;
        url.query_pairs_mut()
            .append_pair("skip", &query.skip.to_string())
            .append_pair("limit", &query.limit.to_string());
        let body = self.get_json(url, KeyScope::Catalog).await?;
        decode_page(body, "discounts")
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no discount has this id; the usual
    /// network/status/decoding errors otherwise.
    pub async fn get_discount(&self, id: i64) -> Result<Discount, ApiError> {
        let url = self.endpoint(&format!("discounts/{id}"))?;
        let body = self.get_json(url, KeyScope::Catalog).await?;
        Self::decode(body, &format!("discount {id}"))
    }

    /// Creates a discount. `category_ids` should already contain the full
    /// cascaded selection (see `shopctl_core::tree::expand_selection`).
    ///
    /// # Errors
    ///
    /// Network/status/decoding errors from the create request.
    pub async fn create_discount(&self, input: &DiscountInput) -> Result<Discount, ApiError> {
        let url = self.endpoint("discounts")?;
        let body = self.post_json(url, KeyScope::Catalog, input).await?;
        Self::decode(body, "created discount")
    }

    /// Partial update: only the fields set on `input` are sent.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no discount has this id; the usual
    /// network/status/decoding errors otherwise.
    pub async fn update_discount(
        &self,
        id: i64,
        input: &DiscountInput,
    ) -> Result<Discount, ApiError> {
        let url = self.endpoint(&format!("discounts/{id}"))?;
        let body = self.put_json(url, KeyScope::Catalog, input).await?;
        Self::decode(body, &format!("updated discount {id}"))
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no discount has this id; the usual
    /// network/status errors otherwise.
    pub async fn delete_discount(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("discounts/{id}"))?;
        self.delete_request(url, KeyScope::Catalog).await
    }
}
