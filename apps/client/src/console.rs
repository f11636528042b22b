use tracing::error;

use crate::api::{PdfFile, ServiceClient};
use crate::errors::ClientError;
use crate::flight::FlightGuard;
use crate::models::UploadResponse;
use crate::sink::{StatusLog, StatusSink};

// User-facing strings, kept byte-for-byte from the service's UI copy.
pub const MSG_CHOOSE_PDF: &str = "请选择一个 PDF 文件";
pub const MSG_UPLOAD_RESUME_FAILED: &str = "上传简历时出现错误";
pub const MSG_UPLOAD_PAPERS_FAILED: &str = "上传论文链接时出现错误";
pub const MSG_ANALYZE_FAILED: &str = "分析候选人时出现错误";
pub const MSG_ANALYZE_OK: &str = "分析成功";
pub const MSG_PDF_MISSING: &str = "未找到PDF元素，请检查页面内容。";
pub const MSG_LEGACY_UPLOAD_FAILED: &str = "上传接口调用失败，请重试~";
pub const MSG_LEGACY_EXTRACT_FAILED: &str = "解析接口调用失败，请重试~";
pub const MSG_UNKNOWN_REPLY: &str = "未知响应";

/// One upload-and-extract integration surface: which extract endpoint
/// follows the upload, which failure strings to show, and what stands in
/// for a missing server message.
struct UploadSurface {
    legacy: bool,
    upload_failed: &'static str,
    extract_failed: &'static str,
    missing_message: &'static str,
}

const RESUME_SURFACE: UploadSurface = UploadSurface {
    legacy: false,
    upload_failed: MSG_UPLOAD_RESUME_FAILED,
    extract_failed: MSG_UPLOAD_RESUME_FAILED,
    missing_message: "",
};

const LEGACY_SURFACE: UploadSurface = UploadSurface {
    legacy: true,
    upload_failed: MSG_LEGACY_UPLOAD_FAILED,
    extract_failed: MSG_LEGACY_EXTRACT_FAILED,
    missing_message: MSG_UNKNOWN_REPLY,
};

/// The four user-facing flows of the screening client.
///
/// Each flow mirrors one action in the service UI: it runs its network
/// call(s) sequentially, reports progress through the given sink, and
/// swallows every failure into a localized message. A per-flow
/// [`FlightGuard`] refuses a submission while the previous one is still
/// in flight; the refused call returns `false` without touching the
/// sink or the network.
pub struct ResumeConsole {
    api: ServiceClient,
    upload_guard: FlightGuard,
    papers_guard: FlightGuard,
    analyze_guard: FlightGuard,
    process_guard: FlightGuard,
}

impl ResumeConsole {
    pub fn new(api: ServiceClient) -> Self {
        Self {
            api,
            upload_guard: FlightGuard::new(),
            papers_guard: FlightGuard::new(),
            analyze_guard: FlightGuard::new(),
            process_guard: FlightGuard::new(),
        }
    }

    /// Upload a resume PDF and, on success, trigger extraction with the
    /// server-issued temporary path. With no file selected, reports a
    /// prompt and makes no network call.
    pub async fn upload_resume(&self, file: Option<PdfFile>, sink: &dyn StatusSink) -> bool {
        let Some(_permit) = self.upload_guard.try_acquire() else {
            return false;
        };
        let Some(file) = file else {
            sink.report(MSG_CHOOSE_PDF);
            return true;
        };
        let upload = self.api.upload_pdf(&file).await;
        self.run_upload_chain(upload, &RESUME_SURFACE, sink).await;
        true
    }

    /// Upload the two paper-URL fields in one call and report the
    /// server's reply.
    pub async fn upload_paper_urls(&self, url1: &str, url2: &str, sink: &dyn StatusSink) -> bool {
        let Some(_permit) = self.papers_guard.try_acquire() else {
            return false;
        };
        match self.api.upload_paper_urls(url1, url2).await {
            Ok(resp) => sink.report(resp.message.as_deref().unwrap_or_default()),
            Err(e) => {
                error!("paper url upload failed: {e}");
                sink.report(MSG_UPLOAD_PAPERS_FAILED);
            }
        }
        true
    }

    /// Fetch the candidate analysis. On success the status sink gets the
    /// success marker and the result sink gets the `data` field
    /// pretty-printed; otherwise the server message (if any) lands on
    /// the status sink.
    pub async fn analyze(&self, status: &dyn StatusSink, result: &dyn StatusSink) -> bool {
        let Some(_permit) = self.analyze_guard.try_acquire() else {
            return false;
        };
        match self.api.analyze().await {
            Ok(resp) if resp.is_success() => {
                status.report(MSG_ANALYZE_OK);
                let pretty = resp
                    .data
                    .as_ref()
                    .map(|d| serde_json::to_string_pretty(d).unwrap_or_default())
                    .unwrap_or_default();
                result.report(&pretty);
            }
            Ok(resp) => {
                if let Some(message) = resp.message.as_deref() {
                    status.report(message);
                }
            }
            Err(e) => {
                error!("analyze call failed: {e}");
                status.report(MSG_ANALYZE_FAILED);
            }
        }
        true
    }

    /// Legacy task-log surface: appends progress to a log instead of
    /// overwriting a status line, and talks to the unprefixed endpoints.
    /// The source only gates the missing-PDF branch; the legacy upload
    /// call itself carries no body.
    pub async fn process_pdf(&self, source: Option<PdfFile>, log: &StatusLog) -> bool {
        let Some(_permit) = self.process_guard.try_acquire() else {
            return false;
        };
        if source.is_none() {
            error!("no PDF source to process");
            log.report(MSG_PDF_MISSING);
            return true;
        }
        let upload = self.api.legacy_upload_pdf().await;
        self.run_upload_chain(upload, &LEGACY_SURFACE, log).await;
        true
    }

    /// Shared upload→extract chain. Reports the upload reply, then
    /// extracts iff the upload reported success and handed back a
    /// temporary path. Either step failing ends the chain with the
    /// surface's static message.
    async fn run_upload_chain(
        &self,
        upload: Result<UploadResponse, ClientError>,
        surface: &UploadSurface,
        sink: &dyn StatusSink,
    ) {
        let resp = match upload {
            Ok(resp) => resp,
            Err(e) => {
                error!("upload call failed: {e}");
                sink.report(surface.upload_failed);
                return;
            }
        };
        sink.report(resp.message.as_deref().unwrap_or(surface.missing_message));

        if !resp.is_success() {
            return;
        }
        let Some(path) = resp.file_temp_path.as_deref() else {
            return;
        };

        let extract = if surface.legacy {
            self.api.legacy_extract(path).await
        } else {
            self.api.extract(path).await
        };
        match extract {
            Ok(resp) => sink.report(resp.message.as_deref().unwrap_or(surface.missing_message)),
            Err(e) => {
                error!("extract call failed: {e}");
                sink.report(surface.extract_failed);
            }
        }
    }
}
