use std::fs;

use serde::{Deserialize, Serialize};

use crate::errors::ExtractError;
use crate::extractor::extract_transactions;
use crate::parsers::prelude::*;
use crate::types::Transaction;

/// Backup dialects the extractor can ingest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackupFormat {
    #[serde(rename = "sms-xml")]
    SmsXml,
}

impl BackupFormat {
    fn parse_raw(&self, content: &str) -> Result<Vec<RawMessage>, ExtractError> {
        match self {
            BackupFormat::SmsXml => {
                SmsBackupParser::parse(content).map_err(ExtractError::ParseFailed)
            }
        }
    }

    fn detect(filename: Option<&str>, content: Option<&str>) -> Result<Self, ExtractError> {
        if let Some(content) = content {
            if SmsBackupParser::is_supported(filename, content) {
                return Ok(BackupFormat::SmsXml);
            }
        }

        if let Some(filename) = filename {
            if let Some(ext) = filename.split('.').next_back() {
                if ext.eq_ignore_ascii_case("xml") {
                    return Ok(BackupFormat::SmsXml);
                }
            }
        }

        Err(ExtractError::UnsupportedFormat)
    }
}

/// Result of running the full extraction pipeline over one backup document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub transactions: Vec<Transaction>,
    pub messages_seen: usize,
}

impl ExtractionReport {
    /// One-line diagnostic for logs and UIs
    pub fn summary(&self) -> String {
        format!(
            "Processed {} SMS messages, found {} transactions",
            self.messages_seen,
            self.transactions.len()
        )
    }
}

/// Entry point: feed it content and/or a file path, get classified
/// transactions back.
#[derive(Default)]
pub struct ExtractorBuilder {
    content: Option<String>,
    filepath: Option<String>,
    format: Option<BackupFormat>,
}

impl ExtractorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.filepath = Some(filename.to_string());
        self
    }

    pub fn format(mut self, format: BackupFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Parse the backup into raw, unclassified messages
    pub fn extract_raw(self) -> Result<Vec<RawMessage>, ExtractError> {
        let (format, content) = self.resolve()?;
        format.parse_raw(&content)
    }

    /// Parse the backup and run the classification pipeline over it
    pub fn extract(self) -> Result<ExtractionReport, ExtractError> {
        let (format, content) = self.resolve()?;
        let messages = format.parse_raw(&content)?;
        let transactions = extract_transactions(&messages);

        Ok(ExtractionReport {
            messages_seen: messages.len(),
            transactions,
        })
    }

    fn resolve(self) -> Result<(BackupFormat, String), ExtractError> {
        let format = self.format.map(Ok).unwrap_or_else(|| {
            BackupFormat::detect(self.filepath.as_deref(), self.content.as_deref())
        })?;

        let content = self.content.map(Ok).unwrap_or_else(|| {
            self.filepath
                .ok_or(ExtractError::MissingContentAndFilepath)
                .and_then(|path| fs::read_to_string(path).map_err(Into::into))
        })?;

        Ok((format, content))
    }
}
