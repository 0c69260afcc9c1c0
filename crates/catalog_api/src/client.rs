use std::time::Duration;

use url::Url;

use crate::{ApiError, ApiFailure, Book, BookDraft, BookId};

/// Base URL of the public catalog service.
pub const DEFAULT_BASE_URL: &str = "https://bookstore-api-six.vercel.app/api";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ApiSettings {
    fn books_url(&self) -> Result<Url, ApiError> {
        let joined = format!("{}/books", self.base_url.trim_end_matches('/'));
        Url::parse(&joined).map_err(|err| ApiError::new(ApiFailure::InvalidUrl, err.to_string()))
    }

    fn book_url(&self, id: &BookId) -> Result<Url, ApiError> {
        let joined = format!("{}/books/{id}", self.base_url.trim_end_matches('/'));
        Url::parse(&joined).map_err(|err| ApiError::new(ApiFailure::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
pub trait BookApi: Send + Sync {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError>;
    async fn create_book(&self, draft: &BookDraft) -> Result<Book, ApiError>;
    async fn delete_book(&self, id: &BookId) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBookApi {
    settings: ApiSettings,
}

impl ReqwestBookApi {
    pub fn new(settings: ApiSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ApiError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiFailure::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl BookApi for ReqwestBookApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let url = self.settings.books_url()?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                ApiFailure::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        response
            .json::<Vec<Book>>()
            .await
            .map_err(|err| ApiError::new(ApiFailure::InvalidBody, err.to_string()))
    }

    async fn create_book(&self, draft: &BookDraft) -> Result<Book, ApiError> {
        let url = self.settings.books_url()?;
        let client = self.build_client()?;

        let response = client
            .post(url)
            .json(draft)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                ApiFailure::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        response
            .json::<Book>()
            .await
            .map_err(|err| ApiError::new(ApiFailure::InvalidBody, err.to_string()))
    }

    async fn delete_book(&self, id: &BookId) -> Result<(), ApiError> {
        let url = self.settings.book_url(id)?;
        let client = self.build_client()?;

        let response = client.delete(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                ApiFailure::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiFailure::Timeout, err.to_string());
    }
    ApiError::new(ApiFailure::Network, err.to_string())
}
