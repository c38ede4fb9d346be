//! Tax class endpoints.

use shopctl_core::TaxClass;

use crate::envelope::{decode_page, Page};
use crate::error::ApiError;
use crate::fetch_all::{fetch_all_pages, Collected, FetchAllOptions};
use crate::types::{ListQuery, TaxClassInput};

use super::{CatalogClient, KeyScope};

impl CatalogClient {
    /// Fetches one page of tax classes.
    ///
    /// # Errors
    ///
    /// Network/status/decoding errors from the list request.
    pub async fn list_tax_classes(&self, query: &ListQuery) -> Result<Page<TaxClass>, ApiError> {
        let mut url = self.endpoint("tax-classes")?;
        url.query_pairs_mut()
            .append_pair("skip", &query.skip.to_string())
            .append_pair("limit", &query.limit.to_string());
        let body = self.get_json(url, KeyScope::Catalog).await?;
        decode_page(body, "tax classes")
    }

    /// Fetches every page of the tax class collection, up to the configured
    /// item cap.
    ///
    /// # Errors
    ///
    /// Propagates a page error only under [`crate::PageErrorPolicy::Fail`].
    pub async fn list_all_tax_classes(
        &self,
        options: &FetchAllOptions,
    ) -> Result<Collected<TaxClass>, ApiError> {
        fetch_all_pages("tax classes", options, |skip, limit| {
            let query = ListQuery { skip, limit };
            async move { self.list_tax_classes(&query).await }
        })
        .await
    }

    /// # Errors
    ///
    /// Network/status/decoding errors from the create request.
    pub async fn create_tax_class(&self, input: &TaxClassInput) -> Result<TaxClass, ApiError> {
        let url = self.endpoint("tax-classes")?;
        let body = self.post_json(url, KeyScope::Catalog, input).await?;
        Self::decode(body, "created tax class")
    }

    /// Partial update: only the fields set on `input` are sent.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no tax class has this id; the usual
    /// network/status/decoding errors otherwise.
    pub async fn update_tax_class(
        &self,
        id: i64,
        input: &TaxClassInput,
    ) -> Result<TaxClass, ApiError> {
        let url = self.endpoint(&format!("tax-classes/{id}"))?;
        let body = self.put_json(url, KeyScope::Catalog, input).await?;
        Self::decode(body, &format!("updated tax class {id}"))
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no tax class has this id; the usual
    /// network/status errors otherwise.
    pub async fn delete_tax_class(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("tax-classes/{id}"))?;
        self.delete_request(url, KeyScope::Catalog).await
    }
}
