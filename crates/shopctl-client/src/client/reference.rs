//! Concurrent prefetch of form reference data.

use serde::de::DeserializeOwned;
use shopctl_core::{Brand, Category};

use crate::envelope::decode_page;
use crate::error::ApiError;

use super::{CatalogClient, KeyScope, API_KEY_HEADER};

const REFERENCE_LIMIT: u32 = 1_000;

/// Reference data used to populate the product form selectors.
#[derive(Debug)]
pub struct FormReferences {
    pub brands: Vec<Brand>,
    pub categories: Vec<Category>,
}

impl CatalogClient {
    /// Fetches brands and categories concurrently for form population.
    ///
    /// Each request carries its own per-request timeout (15 s unless
    /// overridden via [`CatalogClient::with_prefetch_timeout`]), independent
    /// of the client-wide timeout.
    ///
    /// # Errors
    ///
    /// Returns the first error of either request, including
    /// [`ApiError::Http`] on timeout.
    pub async fn fetch_form_references(&self) -> Result<FormReferences, ApiError> {
        let (brands, categories) = tokio::try_join!(
            self.fetch_reference_page::<Brand>("brands"),
            self.fetch_reference_page::<Category>("categories"),
        )?;
        Ok(FormReferences { brands, categories })
    }

    async fn fetch_reference_page<T: DeserializeOwned>(
        &self,
        path: &'static str,
    ) -> Result<Vec<T>, ApiError> {
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut()
            .append_pair("skip", "0")
            .append_pair("limit", &REFERENCE_LIMIT.to_string());

        let request = self
            .http
            .get(url.clone())
            .header(API_KEY_HEADER, self.key_for(KeyScope::Catalog))
            .timeout(self.prefetch_timeout);
        let body = self.execute(request, &url).await?;
        Ok(decode_page(body, path)?.items)
    }
}
