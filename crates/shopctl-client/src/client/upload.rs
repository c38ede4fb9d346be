//! Image upload endpoint.

use crate::error::ApiError;
use crate::types::UploadResponse;

use super::{CatalogClient, KeyScope, API_KEY_HEADER};

impl CatalogClient {
    /// Uploads an image as `multipart/form-data` and returns the URL the
    /// backend stored it under. Records referencing images by URL are saved
    /// after this step.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure or an invalid content type.
    /// - [`ApiError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ApiError::Deserialize`] if the response lacks a `url` field.
    pub async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ApiError> {
        let url = self.endpoint("uploads")?;
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_owned())
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let request = self
            .http
            .post(url.clone())
            .header(API_KEY_HEADER, self.key_for(KeyScope::Catalog))
            .multipart(form);
        let body = self.execute(request, &url).await?;
        let upload: UploadResponse = Self::decode(body, "upload")?;
        Ok(upload.url)
    }
}
