use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use screener_client::api::{PdfFile, ServiceClient};
use screener_client::config::Config;
use screener_client::console::ResumeConsole;
use screener_client::sink::{StatusLine, StatusLog};

/// Command-line console for the resume-screening service.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload a resume PDF and trigger content extraction
    UploadResume {
        /// Path to the PDF file
        pdf: Option<PathBuf>,
    },
    /// Upload up to two paper URLs
    UploadPapers {
        #[arg(default_value = "")]
        url1: String,
        #[arg(default_value = "")]
        url2: String,
    },
    /// Fetch the candidate analysis
    Analyze,
    /// Legacy task-log upload surface
    ProcessPdf {
        /// Path to the PDF file
        pdf: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let api = ServiceClient::new(&config.base_url, Duration::from_secs(config.timeout_secs))?;
    let console = ResumeConsole::new(api);
    info!("talking to {}", config.base_url);

    match args.command {
        Command::UploadResume { pdf } => {
            let file = read_pdf(pdf).await?;
            let status = StatusLine::new();
            console.upload_resume(file, &status).await;
            println!("{}", status.text());
        }
        Command::UploadPapers { url1, url2 } => {
            let status = StatusLine::new();
            console.upload_paper_urls(&url1, &url2, &status).await;
            println!("{}", status.text());
        }
        Command::Analyze => {
            let status = StatusLine::new();
            let result = StatusLine::new();
            console.analyze(&status, &result).await;
            println!("{}", status.text());
            if !result.text().is_empty() {
                println!("{}", result.text());
            }
        }
        Command::ProcessPdf { pdf } => {
            let file = read_pdf(pdf).await?;
            let log = StatusLog::new();
            console.process_pdf(file, &log).await;
            for line in log.entries() {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// Read the PDF from disk. A missing path argument maps to the
/// "no file selected" branch of the upload flows.
async fn read_pdf(path: Option<PathBuf>) -> Result<Option<PdfFile>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let bytes = tokio::fs::read(&path).await?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume.pdf")
        .to_string();
    Ok(Some(PdfFile { file_name, bytes }))
}
