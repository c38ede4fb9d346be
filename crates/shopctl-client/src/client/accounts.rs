//! Company and user account endpoints.

use shopctl_core::{Company, User};

use crate::envelope::{decode_page, Page};
use crate::error::ApiError;
use crate::types::{CompanyInput, ListQuery, UserInput};

use super::{CatalogClient, KeyScope};

impl CatalogClient {
    /// Fetches one page of companies.
    ///
    /// # Errors
    ///
    /// Network/status/decoding errors from the list request.
    pub async fn list_companies(&self, query: &ListQuery) -> Result<Page<Company>, ApiError> {
        let mut url = self.endpoint("companies")?;
        url.query_pairs_mut()
            .append_pair("skip", &query.skip.to_string())
            .append_pair("limit", &query.limit.to_string());
        let body = self.get_json(url, KeyScope::Catalog).await?;
        decode_page(body, "companies")
    }

    /// # Errors
    ///
    /// Network/status/decoding errors from the create request.
    pub async fn create_company(&self, input: &CompanyInput) -> Result<Company, ApiError> {
        let url = self.endpoint("companies")?;
        let body = self.post_json(url, KeyScope::Catalog, input).await?;
        Self::decode(body, "created company")
    }

    /// Partial update: only the fields set on `input` are sent.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no company has this id; the usual
    /// network/status/decoding errors otherwise.
    pub async fn update_company(
        &self,
        id: i64,
        input: &CompanyInput,
    ) -> Result<Company, ApiError> {
        let url = self.endpoint(&format!("companies/{id}"))?;
        let body = self.put_json(url, KeyScope::Catalog, input).await?;
        Self::decode(body, &format!("updated company {id}"))
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no company has this id; the usual
    /// network/status errors otherwise.
    pub async fn delete_company(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("companies/{id}"))?;
        self.delete_request(url, KeyScope::Catalog).await
    }

    /// Fetches one page of users.
    ///
    /// # Errors
    ///
    /// Network/status/decoding errors from the list request.
    pub async fn list_users(&self, query: &ListQuery) -> Result<Page<User>, ApiError> {
        let mut url = self.endpoint("users")?;
        url.query_pairs_mut()
            .append_pair("skip", &query.skip.to_string())
            .append_pair("limit", &query.limit.to_string());
        let body = self.get_json(url, KeyScope::Catalog).await?;
        decode_page(body, "users")
    }

    /// # Errors
    ///
    /// Network/status/decoding errors from the create request.
    pub async fn create_user(&self, input: &UserInput) -> Result<User, ApiError> {
        let url = self.endpoint("users")?;
        let body = self.post_json(url, KeyScope::Catalog, input).await?;
        Self::decode(body, "created user")
    }

    /// Partial update: only the fields set on `input` are sent.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no user has this id; the usual
    /// network/status/decoding errors otherwise.
    pub async fn update_user(&self, id: i64, input: &UserInput) -> Result<User, ApiError> {
        let url = self.endpoint(&format!("users/{id}"))?;
        let body = self.put_json(url, KeyScope::Catalog, input).await?;
        Self::decode(body, &format!("updated user {id}"))
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no user has this id; the usual
    /// network/status errors otherwise.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("users/{id}"))?;
        self.delete_request(url, KeyScope::Catalog).await
    }
}
