//! Category endpoints.

use shopctl_core::Category;

use crate::envelope::{decode_page, Page};
use crate::error::ApiError;
use crate::fetch_all::{fetch_all_pages, Collected, FetchAllOptions};
use crate::types::{CategoryInput, CategoryQuery};

use super::{CatalogClient, KeyScope};

impl CatalogClient {
    /// Fetches one page of categories.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ApiError::UnexpectedShape`] / [`ApiError::Deserialize`] if the
    ///   body is not a recognizable category page.
    pub async fn list_categories(
        &self,
        query: &CategoryQuery,
    ) -> Result<Page<Category>, ApiError> {
        let mut url = self.endpoint("categories")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("skip", &query.skip.to_string());
            pairs.append_pair("limit", &query.limit.to_string());
            if query.active_only {
                pairs.append_pair("active_only", "true");
            }
            if query.parent_only {
                pairs.append_pair("parent_only", "true");
            }
            if let Some(lang) = &query.lang {
                pairs.append_pair("lang", lang);
            }
        }
        let body = self.get_json(url, KeyScope::Catalog).await?;
        decode_page(body, "categories")
    }

    /// Fetches every page of the category collection, up to the configured
    /// item cap.
    ///
    /// `query.skip` and `query.limit` are ignored; the loop manages the
    /// window itself.
    ///
    /// # Errors
    ///
    /// Propagates a page error only under [`crate::PageErrorPolicy::Fail`].
    pub async fn list_all_categories(
        &self,
        query: &CategoryQuery,
        options: &FetchAllOptions,
    ) -> Result<Collected<Category>, ApiError> {
        fetch_all_pages("categories", options, |skip, limit| {
            let page_query = CategoryQuery {
                skip,
                limit,
                ..query.clone()
            };
            async move { self.list_categories(&page_query).await }
        })
        .await
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no category has this id; the usual
    /// network/status/decoding errors otherwise.
    pub async fn get_category(&self, id: i64) -> Result<Category, ApiError> {
        let url = self.endpoint(&format!("categories/{id}"))?;
        let body = self.get_json(url, KeyScope::Catalog).await?;
        Self::decode(body, &format!("category {id}"))
    }

    /// # Errors
    ///
    /// Network/status/decoding errors from the create request.
    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, ApiError> {
        let url = self.endpoint("categories")?;
        let body = self.post_json(url, KeyScope::Catalog, input).await?;
        Self::decode(body, "created category")
    }

    /// Partial update: only the fields set on `input` are sent.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no category has this id; the usual
    /// network/status/decoding errors otherwise.
    pub async fn update_category(
        &self,
        id: i64,
        input: &CategoryInput,
    ) -> Result<Category, ApiError> {
        let url = self.endpoint(&format!("categories/{id}"))?;
        let body = self.put_json(url, KeyScope::Catalog, input).await?;
        Self::decode(body, &format!("updated category {id}"))
    }

    /// Deletes a category. With `force`, the backend also detaches any
    /// subcategories and product links.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no category has this id; the usual
    /// network/status errors otherwise.
    pub async fn delete_category(&self, id: i64, force: bool) -> Result<(), ApiError> {
        let mut url = self.endpoint(&format!("categories/{id}"))?;
        if force {
            url.query_pairs_mut().append_pair("force", "true");
        }
        self.delete_request(url, KeyScope::Catalog).await
    }
}
