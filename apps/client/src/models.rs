use serde::Deserialize;
use serde_json::Value;

/// Application-level success marker used by every endpoint.
pub const STATUS_SUCCESS: &str = "success";

/// Response to a PDF or paper-URL upload.
///
/// `file_temp_path` is an opaque server-issued token; it is only
/// meaningful when `status` is `"success"` and is passed back verbatim
/// to the extract endpoint. Unknown fields the server adds (e.g.
/// `paper_urls`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub status: String,
    pub message: Option<String>,
    pub file_temp_path: Option<String>,
}

impl UploadResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Response to an extract call. The server also sends a `status` field,
/// but no caller inspects it.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractResponse {
    pub message: Option<String>,
}

/// Response to the analyze call. `data` is arbitrary JSON produced by
/// the analysis pipeline and is rendered, not interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub status: String,
    pub message: Option<String>,
    pub data: Option<Value>,
}

impl AnalyzeResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}
