use thiserror::Error;

use natal_export::error::ExportError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unknown report: {0}")]
    UnknownReport(String),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read configuration at {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
