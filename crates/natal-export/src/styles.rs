use serde::{Deserialize, Serialize};

/// Workbook styling configuration.
///
/// Passed by value into rendering; nothing here is shared between sheets
/// at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetStyles {
    /// Font for every cell (e.g. "Calibri", "Arial").
    pub font_name: String,

    /// Font size in points.
    pub font_size: f64,

    /// Border colour as `0xRRGGBB`.
    pub border_color: u32,

    /// Draw thin borders around every populated cell.
    pub borders: bool,

    /// Wrap long header labels inside their merged region.
    pub wrap_header_text: bool,

    /// Width used for columns the sheet gives no hint for.
    pub default_column_width: f64,
}

impl Default for SheetStyles {
    fn default() -> Self {
        Self {
            font_name: "Calibri".to_string(),
            font_size: 11.0,
            border_color: 0x000000,
            borders: true,
            wrap_header_text: true,
            default_column_width: 12.0,
        }
    }
}
