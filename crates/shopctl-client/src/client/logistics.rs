//! Delivery and warranty endpoints.
//!
//! These are served by the logistics backend and authenticate with the
//! logistics key when one is configured (see [`super::KeyScope`]).

use shopctl_core::{Delivery, Warranty};

use crate::envelope::{decode_page, Page};
use crate::error::ApiError;
use crate::types::{DeliveryInput, ListQuery, WarrantyInput};

use super::{CatalogClient, KeyScope};

impl CatalogClient {
    /// Fetches one page of delivery options.
    ///
    /// # Errors
    ///
    /// Network/status/decoding errors from the list request.
    pub async fn list_deliveries(&self, query: &ListQuery) -> Result<Page<Delivery>, ApiError> {
        let mut url = self.endpoint("deliveries")?;
        url.query_pairs_mut()
            .append_pair("skip", &query.skip.to_string())
            .append_pair("limit", &query.limit.to_string());
        let body = self.get_json(url, KeyScope::Logistics).await?;
        decode_page(body, "deliveries")
    }

    /// # Errors
    ///
    /// Network/status/decoding errors from the create request.
    pub async fn create_delivery(&self, input: &DeliveryInput) -> Result<Delivery, ApiError> {
        let url = self.endpoint("deliveries")?;
        let body = self.post_json(url, KeyScope::Logistics, input).await?;
        Self::decode(body, "created delivery")
    }

    /// Partial update: only the fields set on `input` are sent.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no delivery has this id; the usual
    /// network/status/decoding errors otherwise.
    pub async fn update_delivery(
        &self,
        id: i64,
        input: &DeliveryInput,
    ) -> Result<Delivery, ApiError> {
        let url = self.endpoint(&format!("deliveries/{id}"))?;
        let body = self.put_json(url, KeyScope::Logistics, input).await?;
        Self::decode(body, &format!("updated delivery {id}"))
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no delivery has this id; the usual
    /// network/status errors otherwise.
    pub async fn delete_delivery(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("deliveries/{id}"))?;
        self.delete_request(url, KeyScope::Logistics).await
    }

    /// Fetches one page of warranties.
    ///
    /// # Errors
    ///
    /// Network/status/decoding errors from the list request.
    pub async fn list_warranties(&self, query: &ListQuery) -> Result<Page<Warranty>, ApiError> {
        let mut url = self.endpoint("warranties")?;
        url.query_pairs_mut()
            .append_pair("skip", &query.skip.to_string())
            .append_pair("limit", &query.limit.to_string());
        let body = self.get_json(url, KeyScope::Logistics).await?;
        decode_page(body, "warranties")
    }

    /// # Errors
    ///
    /// Network/status/decoding errors from the create request.
    pub async fn create_warranty(&self, input: &WarrantyInput) -> Result<Warranty, ApiError> {
        let url = self.endpoint("warranties")?;
        let body = self.post_json(url, KeyScope::Logistics, input).await?;
        Self::decode(body, "created warranty")
    }

    /// Partial update: only the fields set on `input` are sent.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no warranty has this id; the usual
    /// network/status/decoding errors otherwise.
    pub async fn update_warranty(
        &self,
        id: i64,
        input: &WarrantyInput,
    ) -> Result<Warranty, ApiError> {
        let url = self.endpoint(&format!("warranties/{id}"))?;
        let body = self.put_json(url, KeyScope::Logistics, input).await?;
        Self::decode(body, &format!("updated warranty {id}"))
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no warranty has this id; the usual
    /// network/status errors otherwise.
    pub async fn delete_warranty(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("warranties/{id}"))?;
        self.delete_request(url, KeyScope::Logistics).await
    }
}
