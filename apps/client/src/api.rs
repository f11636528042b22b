use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::errors::ClientError;
use crate::models::{AnalyzeResponse, ExtractResponse, UploadResponse};

pub const UPLOAD_PDF_PATH: &str = "/api/resources/upload/pdf";
pub const EXTRACT_PATH: &str = "/api/resources/extract";
pub const UPLOAD_PAPER_URL_PATH: &str = "/api/resources/upload/paper_url";
pub const ANALYZE_PATH: &str = "/api/output/analyze";
pub const LEGACY_UPLOAD_PDF_PATH: &str = "/upload/pdf";
pub const LEGACY_EXTRACT_PATH: &str = "/extract";

/// A PDF picked up for upload: the original filename plus raw bytes.
#[derive(Debug, Clone)]
pub struct PdfFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Typed HTTP client for the resume-screening service.
///
/// One instance holds one session: the backend correlates the upload,
/// extract and analyze calls through a session cookie, so the cookie
/// store is enabled on the underlying client.
#[derive(Clone)]
pub struct ServiceClient {
    client: Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST the resume PDF as a multipart form, part name `file`.
    pub async fn upload_pdf(&self, file: &PdfFile) -> Result<UploadResponse, ClientError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);
        let response = self
            .client
            .post(self.url(UPLOAD_PDF_PATH))
            .multipart(form)
            .send()
            .await?;
        decode(response).await
    }

    /// POST the server-issued temporary path to trigger content extraction.
    pub async fn extract(&self, file_temp_path: &str) -> Result<ExtractResponse, ClientError> {
        let response = self
            .client
            .post(self.url(EXTRACT_PATH))
            .json(&json!({ "file_temp_path": file_temp_path }))
            .send()
            .await?;
        decode(response).await
    }

    /// POST the two paper URL fields as one JSON object. Empty strings
    /// are sent as-is; the server decides what counts as "no URL".
    pub async fn upload_paper_urls(
        &self,
        url1: &str,
        url2: &str,
    ) -> Result<UploadResponse, ClientError> {
        let response = self
            .client
            .post(self.url(UPLOAD_PAPER_URL_PATH))
            .json(&json!({ "paper_url_1": url1, "paper_url_2": url2 }))
            .send()
            .await?;
        decode(response).await
    }

    /// GET the precomputed candidate analysis.
    pub async fn analyze(&self) -> Result<AnalyzeResponse, ClientError> {
        let response = self.client.get(self.url(ANALYZE_PATH)).send().await?;
        decode(response).await
    }

    /// Upload call of the legacy task-log surface. Sends no body and no
    /// headers.
    pub async fn legacy_upload_pdf(&self) -> Result<UploadResponse, ClientError> {
        let response = self
            .client
            .post(self.url(LEGACY_UPLOAD_PDF_PATH))
            .send()
            .await?;
        decode(response).await
    }

    /// Extract call of the legacy task-log surface.
    pub async fn legacy_extract(
        &self,
        file_temp_path: &str,
    ) -> Result<ExtractResponse, ClientError> {
        let response = self
            .client
            .post(self.url(LEGACY_EXTRACT_PATH))
            .json(&json!({ "file_temp_path": file_temp_path }))
            .send()
            .await?;
        decode(response).await
    }
}

/// Decode the JSON body regardless of HTTP status. The backend reports
/// application-level failures as `status`/`message` JSON under 4xx/5xx
/// codes, and callers surface those messages verbatim, so a non-2xx
/// response is not an error here. Only transport failures and
/// undecodable bodies are.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;
    debug!(%status, len = body.len(), "service response");
    Ok(serde_json::from_slice(&body)?)
}
