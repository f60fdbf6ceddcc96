//! HTTP client for the festival backend
//!
//! One thin method per backend operation; each call is an independent round
//! trip with no batching or transactional grouping. Read responses go
//! through the lenient parsers in [`super::types`] so a malformed payload
//! can never poison the caller.

use crate::api::types::{
    parse_year_list, CreateYearRequest, UpdateYearRequest, UploadResponse, YearEntry,
};
use crate::model::{normalize, YearRecord};
use crate::{Error, Result};
use serde_json::Value;
use tracing::debug;

/// One file to push through `POST /upload`
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Client for the external festival backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the given base URL (no trailing slash needed)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /festival` - the year index
    pub async fn list_years(&self) -> Result<Vec<YearEntry>> {
        let url = format!("{}/festival", self.base_url);
        debug!("GET {}", url);
        let raw: Value = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(parse_year_list(&raw))
    }

    /// `GET /festival/:year` - one normalized year record
    pub async fn fetch_year(&self, year: i32) -> Result<YearRecord> {
        let url = format!("{}/festival/{}", self.base_url, year);
        debug!("GET {}", url);
        let raw: Value = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(normalize(raw.get("data").unwrap_or(&Value::Null)))
    }

    /// `POST /festival` - create a year with a default record
    pub async fn create_year(&self, year: i32) -> Result<()> {
        let url = format!("{}/festival", self.base_url);
        let body = CreateYearRequest {
            year,
            data: YearRecord::default(),
        };
        self.http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// `PUT /festival/:year` - replace a year's record wholesale
    pub async fn update_year(&self, year: i32, data: &YearRecord) -> Result<()> {
        let url = format!("{}/festival/{}", self.base_url, year);
        let body = UpdateYearRequest { data: data.clone() };
        self.http
            .put(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// `POST /festival/:year/delete` - delete a year and its data
    pub async fn delete_year(&self, year: i32) -> Result<()> {
        let url = format!("{}/festival/{}/delete", self.base_url, year);
        self.http.post(&url).send().await?.error_for_status()?;
        Ok(())
    }

    /// `POST /upload` - multi-file multipart upload, returns stored URLs
    pub async fn upload(&self, files: Vec<UploadFile>) -> Result<Vec<String>> {
        if files.is_empty() {
            return Err(Error::InvalidInput("No files to upload".to_string()));
        }

        let url = format!("{}/upload", self.base_url);
        let mut form = reqwest::multipart::Form::new();
        for file in files {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.filename)
                .mime_str(&file.content_type)
                .map_err(|e| Error::InvalidInput(format!("Bad content type: {}", e)))?;
            form = form.part("file", part);
        }

        let response: UploadResponse = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.urls)
    }

    /// `DELETE /upload/:filename` - remove one stored file
    pub async fn delete_upload(&self, filename: &str) -> Result<()> {
        let url = format!("{}/upload/{}", self.base_url, filename);
        self.http.delete(&url).send().await?.error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = BackendClient::new("http://backend:5720/");
        assert_eq!(client.base_url(), "http://backend:5720");
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_file_list() {
        let client = BackendClient::new("http://127.0.0.1:1");
        let result = client.upload(Vec::new()).await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_an_error() {
        // Port 1 refuses connections; the error must surface, not panic
        let client = BackendClient::new("http://127.0.0.1:1");
        assert!(client.fetch_year(2024).await.is_err());
        assert!(client.list_years().await.is_err());
    }
}
