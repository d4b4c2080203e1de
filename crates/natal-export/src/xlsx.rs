use std::collections::HashMap;
use std::collections::HashSet;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use crate::error::ExportError;
use crate::layout::{CellStyle, CellValue, RenderedCell, RenderedSheet};
use crate::styles::SheetStyles;

/// MIME type of the generated workbooks.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Serialize rendered sheets into one XLSX workbook, in the given order.
pub fn write_workbook(
    sheets: &[RenderedSheet],
    styles: &SheetStyles,
) -> Result<Vec<u8>, ExportError> {
    let mut seen = HashSet::new();
    for sheet in sheets {
        if !seen.insert(sheet.name.to_lowercase()) {
            return Err(ExportError::Layout {
                sheet: sheet.name.clone(),
                message: "duplicate sheet name in workbook".to_string(),
            });
        }
    }

    let mut workbook = Workbook::new();
    let mut formats: HashMap<CellStyle, Format> = HashMap::new();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (col, width) in sheet.column_widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width)?;
        }

        for cell in &sheet.cells {
            let format = formats
                .entry(cell.style)
                .or_insert_with(|| build_format(cell.style, styles));
            write_cell(worksheet, cell, format)?;
        }
    }

    let bytes = workbook.save_to_buffer()?;
    tracing::debug!(sheets = sheets.len(), bytes = bytes.len(), "workbook serialized");
    Ok(bytes)
}

fn write_cell(
    worksheet: &mut Worksheet,
    cell: &RenderedCell,
    format: &Format,
) -> Result<(), ExportError> {
    if cell.is_merged() {
        // Merged ranges take a string; other values overwrite the anchor afterwards.
        let text = cell.value.as_text().unwrap_or_default();
        worksheet.merge_range(cell.row, cell.col, cell.last_row(), cell.last_col(), text, format)?;
        if let CellValue::Number(n) = cell.value {
            worksheet.write_number_with_format(cell.row, cell.col, n, format)?;
        }
        return Ok(());
    }

    match &cell.value {
        CellValue::Text(text) => {
            worksheet.write_string_with_format(cell.row, cell.col, text.as_str(), format)?;
        }
        CellValue::Number(n) => {
            worksheet.write_number_with_format(cell.row, cell.col, *n, format)?;
        }
        CellValue::Empty => {
            worksheet.write_blank(cell.row, cell.col, format)?;
        }
    }
    Ok(())
}

fn build_format(style: CellStyle, styles: &SheetStyles) -> Format {
    let mut format = Format::new()
        .set_font_name(styles.font_name.as_str())
        .set_font_size(styles.font_size);
    if style.bold {
        format = format.set_bold();
    }
    if style.centered {
        format = format
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);
    }
    if style.wrap {
        format = format.set_text_wrap();
    }
    if style.bordered {
        format = format
            .set_border(FormatBorder::Thin)
            .set_border_color(Color::RGB(styles.border_color));
    }
    format
}
