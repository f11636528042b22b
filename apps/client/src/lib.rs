//! Client library for the resume-screening service.
//!
//! Wraps the service's HTTP surface (PDF upload, content extraction,
//! paper-URL upload, candidate analysis) behind a typed client, and
//! exposes the four user-facing flows through [`console::ResumeConsole`].

pub mod api;
pub mod config;
pub mod console;
pub mod errors;
pub mod flight;
pub mod models;
pub mod sink;

pub use api::{PdfFile, ServiceClient};
pub use console::ResumeConsole;
pub use errors::ClientError;
