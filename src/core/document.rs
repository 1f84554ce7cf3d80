//! Document generator history records

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::history::HistoryRecord;

/// Output format accepted by the document generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    #[display("markdown")]
    Markdown,
    #[display("html")]
    Html,
    #[display("pdf")]
    Pdf,
    #[display("docx")]
    Docx,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Markdown,
        OutputFormat::Html,
        OutputFormat::Pdf,
        OutputFormat::Docx,
    ];

    pub fn from_str(s: &str) -> Self {
        match s {
            "html" => OutputFormat::Html,
            "pdf" => OutputFormat::Pdf,
            "docx" => OutputFormat::Docx,
            _ => OutputFormat::Markdown,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "Markdown",
            OutputFormat::Html => "HTML",
            OutputFormat::Pdf => "PDF",
            OutputFormat::Docx => "Word (DOCX)",
        }
    }
}

/// A generated (or attempted) document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(default)]
    pub output_format: OutputFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl DocumentRecord {
    /// File name part of `file_path`, as expected by the download endpoint
    pub fn file_name(&self) -> Option<&str> {
        let path = self.file_path.as_deref()?;
        path.rsplit(['/', '\\']).next().filter(|name| !name.is_empty())
    }
}

impl HistoryRecord for DocumentRecord {
    const STORAGE_KEY: &'static str = "document_history";
}

/// Split a free-form URL list (one per line or comma separated)
pub fn parse_url_list(input: &str) -> Vec<String> {
    input
        .split(['\n', ','])
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}
