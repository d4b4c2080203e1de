use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid sheet layout for '{sheet}': {message}")]
    Layout { sheet: String, message: String },

    #[error("XLSX generation failed: {0}")]
    Xlsx(String),
}

impl ExportError {
    pub(crate) fn layout(sheet: &str, message: impl Into<String>) -> Self {
        ExportError::Layout {
            sheet: sheet.to_string(),
            message: message.into(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::Xlsx(e.to_string())
    }
}
