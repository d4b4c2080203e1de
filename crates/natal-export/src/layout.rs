use crate::error::ExportError;
use crate::styles::SheetStyles;

/// Excel row limit per sheet.
const MAX_ROWS: u64 = 1_048_576;
/// Excel column limit per sheet.
const MAX_COLUMNS: u32 = 16_384;
const MAX_SHEET_NAME_LEN: usize = 31;
const FORBIDDEN_NAME_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// A labelled rectangle in the header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRegion {
    pub label: String,
    pub row: u32,
    pub col: u16,
    pub row_span: u32,
    pub col_span: u16,
}

/// Places header regions left to right.
///
/// Top-level regions start at row 0 and advance a column cursor by their
/// span. Groups put their label on row 0 and their children on the rows
/// below, so the caller never computes coordinates by hand.
#[derive(Debug, Clone)]
pub struct HeaderBuilder {
    depth: u32,
    cursor: u16,
    regions: Vec<HeaderRegion>,
}

impl HeaderBuilder {
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            cursor: 0,
            regions: Vec::new(),
        }
    }

    /// A single-row header with one column per label.
    pub fn flat<S: AsRef<str>>(labels: &[S]) -> Vec<HeaderRegion> {
        let mut builder = Self::new(1);
        for label in labels {
            builder = builder.column(label.as_ref());
        }
        builder.build()
    }

    /// One column spanning the full header depth.
    pub fn column(self, label: &str) -> Self {
        self.spanning(label, 1)
    }

    /// `col_span` columns spanning the full header depth.
    pub fn spanning(mut self, label: &str, col_span: u16) -> Self {
        self.regions.push(HeaderRegion {
            label: label.to_string(),
            row: 0,
            col: self.cursor,
            row_span: self.depth,
            col_span,
        });
        self.cursor = self.cursor.saturating_add(col_span);
        self
    }

    /// A group label over single-column children.
    pub fn group<S: AsRef<str>>(self, label: &str, children: &[S]) -> Self {
        let spans: Vec<(&str, u16)> = children.iter().map(|c| (c.as_ref(), 1)).collect();
        self.group_spanned(label, &spans)
    }

    /// A group label over children of arbitrary width. Children fill every
    /// row below the group label.
    pub fn group_spanned(mut self, label: &str, children: &[(&str, u16)]) -> Self {
        let width: u16 = children.iter().map(|(_, span)| *span).sum();
        self.regions.push(HeaderRegion {
            label: label.to_string(),
            row: 0,
            col: self.cursor,
            row_span: 1,
            col_span: width,
        });
        let mut col = self.cursor;
        for (child, span) in children {
            self.regions.push(HeaderRegion {
                label: (*child).to_string(),
                row: 1,
                col,
                row_span: self.depth.saturating_sub(1),
                col_span: *span,
            });
            col = col.saturating_add(*span);
        }
        self.cursor = self.cursor.saturating_add(width);
        self
    }

    pub fn build(self) -> Vec<HeaderRegion> {
        self.regions
    }
}

/// The value written into a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<u8> for CellValue {
    fn from(value: u8) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// One data row. Emphasized rows (totals) are rendered bold.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataRow {
    pub cells: Vec<CellValue>,
    pub emphasized: bool,
}

impl DataRow {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self {
            cells,
            emphasized: false,
        }
    }

    pub fn emphasized(cells: Vec<CellValue>) -> Self {
        Self {
            cells,
            emphasized: true,
        }
    }
}

/// Column width hints: a uniform width plus per-column overrides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnWidths {
    pub uniform: Option<f64>,
    pub overrides: Vec<(u16, f64)>,
}

impl ColumnWidths {
    pub fn uniform(width: f64) -> Self {
        Self {
            uniform: Some(width),
            overrides: Vec::new(),
        }
    }

    pub fn listed(widths: &[f64]) -> Self {
        Self {
            uniform: None,
            overrides: widths
                .iter()
                .enumerate()
                .map(|(col, w)| (col as u16, *w))
                .collect(),
        }
    }

    pub fn with(mut self, col: u16, width: f64) -> Self {
        self.overrides.push((col, width));
        self
    }

    fn resolve(&self, col: u16, fallback: f64) -> f64 {
        self.overrides
            .iter()
            .rev()
            .find(|(c, _)| *c == col)
            .map(|(_, w)| *w)
            .or(self.uniform)
            .unwrap_or(fallback)
    }
}

/// Declarative description of one sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSpec {
    pub name: String,
    pub header_depth: u32,
    pub regions: Vec<HeaderRegion>,
    pub column_widths: ColumnWidths,
    /// Data columns rendered bold (row labels).
    pub label_columns: Vec<u16>,
    /// Center data cells horizontally and vertically.
    pub center_data: bool,
    pub rows: Vec<DataRow>,
}

impl SheetSpec {
    pub fn new(name: impl Into<String>, header_depth: u32, regions: Vec<HeaderRegion>) -> Self {
        Self {
            name: name.into(),
            header_depth,
            regions,
            column_widths: ColumnWidths::default(),
            label_columns: Vec::new(),
            center_data: false,
            rows: Vec::new(),
        }
    }

    pub fn with_column_widths(mut self, widths: ColumnWidths) -> Self {
        self.column_widths = widths;
        self
    }

    pub fn with_label_columns(mut self, cols: &[u16]) -> Self {
        self.label_columns = cols.to_vec();
        self
    }

    pub fn with_centered_data(mut self) -> Self {
        self.center_data = true;
        self
    }

    pub fn with_rows(mut self, rows: impl IntoIterator<Item = DataRow>) -> Self {
        self.rows.extend(rows);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub bold: bool,
    pub centered: bool,
    pub bordered: bool,
    pub wrap: bool,
}

/// A positioned cell; spans greater than one mean a merged range anchored here.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCell {
    pub row: u32,
    pub col: u16,
    pub row_span: u32,
    pub col_span: u16,
    pub value: CellValue,
    pub style: CellStyle,
}

impl RenderedCell {
    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.col_span > 1
    }

    pub fn last_row(&self) -> u32 {
        self.row + self.row_span - 1
    }

    pub fn last_col(&self) -> u16 {
        self.col + self.col_span - 1
    }
}

/// A fully laid-out sheet, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSheet {
    pub name: String,
    pub header_depth: u32,
    pub width: u16,
    pub height: u32,
    pub column_widths: Vec<f64>,
    pub cells: Vec<RenderedCell>,
}

impl RenderedSheet {
    /// The cell anchored at `(row, col)`.
    pub fn cell(&self, row: u32, col: u16) -> Option<&RenderedCell> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }

    /// Values of one data row, `index` counted from the first row below the header.
    pub fn data_row(&self, index: u32) -> Vec<&CellValue> {
        let row = self.header_depth + index;
        let mut cells: Vec<&RenderedCell> = self.cells.iter().filter(|c| c.row == row).collect();
        cells.sort_by_key(|c| c.col);
        cells.into_iter().map(|c| &c.value).collect()
    }

    pub fn data_row_count(&self) -> u32 {
        self.height - self.header_depth
    }
}

/// Lay out a sheet: validate and place the header block, then one row per
/// data item below it, resolving widths and cell styles.
pub fn render(spec: SheetSpec, styles: &SheetStyles) -> Result<RenderedSheet, ExportError> {
    validate_sheet_name(&spec.name)?;
    let width = place_header(&spec)?;

    let data_rows = spec.rows.len() as u64;
    if u64::from(spec.header_depth) + data_rows > MAX_ROWS {
        return Err(ExportError::layout(
            &spec.name,
            format!("{data_rows} data rows exceed the sheet row limit"),
        ));
    }

    let header_style = CellStyle {
        bold: true,
        centered: true,
        bordered: styles.borders,
        wrap: styles.wrap_header_text,
    };

    let mut cells = Vec::with_capacity(spec.regions.len() + spec.rows.len() * usize::from(width));
    for region in &spec.regions {
        cells.push(RenderedCell {
            row: region.row,
            col: region.col,
            row_span: region.row_span,
            col_span: region.col_span,
            value: CellValue::Text(region.label.clone()),
            style: header_style,
        });
    }

    for (i, row) in spec.rows.into_iter().enumerate() {
        if row.cells.len() > usize::from(width) {
            return Err(ExportError::layout(
                &spec.name,
                format!(
                    "data row {i} has {} cells but the header is {width} columns wide",
                    row.cells.len()
                ),
            ));
        }
        let row_index = spec.header_depth + i as u32;
        let mut values = row.cells.into_iter();
        for col in 0..width {
            let value = values.next().unwrap_or(CellValue::Empty);
            cells.push(RenderedCell {
                row: row_index,
                col,
                row_span: 1,
                col_span: 1,
                value,
                style: CellStyle {
                    bold: row.emphasized || spec.label_columns.contains(&col),
                    centered: spec.center_data,
                    bordered: styles.borders,
                    wrap: false,
                },
            });
        }
    }

    let column_widths = (0..width)
        .map(|col| spec.column_widths.resolve(col, styles.default_column_width))
        .collect();

    let height = spec.header_depth + data_rows as u32;
    tracing::debug!(sheet = %spec.name, width, height, "sheet rendered");

    Ok(RenderedSheet {
        name: spec.name,
        header_depth: spec.header_depth,
        width,
        height,
        column_widths,
        cells,
    })
}

/// Check that the regions tile the `header_depth × width` block exactly once
/// and return the width.
fn place_header(spec: &SheetSpec) -> Result<u16, ExportError> {
    let name = spec.name.as_str();
    if spec.header_depth == 0 {
        return Err(ExportError::layout(name, "header depth must be at least 1"));
    }
    if spec.regions.is_empty() {
        return Err(ExportError::layout(name, "header has no regions"));
    }

    let mut width: u32 = 0;
    for region in &spec.regions {
        if region.row_span == 0 || region.col_span == 0 {
            return Err(ExportError::layout(
                name,
                format!("region '{}' has an empty span", region.label),
            ));
        }
        let bottom = region.row.checked_add(region.row_span);
        if bottom.is_none_or(|bottom| bottom > spec.header_depth) {
            return Err(ExportError::layout(
                name,
                format!(
                    "region '{}' extends below the header depth of {}",
                    region.label, spec.header_depth
                ),
            ));
        }
        width = width.max(u32::from(region.col) + u32::from(region.col_span));
    }
    if width > MAX_COLUMNS {
        return Err(ExportError::layout(
            name,
            format!("header is {width} columns wide, over the sheet column limit"),
        ));
    }

    let depth = spec.header_depth as usize;
    let mut occupied = vec![vec![false; width as usize]; depth];
    for region in &spec.regions {
        for row in region.row..region.row + region.row_span {
            for col in region.col..region.col + region.col_span {
                let slot = &mut occupied[row as usize][usize::from(col)];
                if *slot {
                    return Err(ExportError::layout(
                        name,
                        format!("region '{}' overlaps at row {row}, column {col}", region.label),
                    ));
                }
                *slot = true;
            }
        }
    }

    for (row, cols) in occupied.iter().enumerate() {
        if let Some(col) = cols.iter().position(|filled| !filled) {
            return Err(ExportError::layout(
                name,
                format!("header cell at row {row}, column {col} is not covered by any region"),
            ));
        }
    }

    Ok(width as u16)
}

pub(crate) fn validate_sheet_name(name: &str) -> Result<(), ExportError> {
    if name.trim().is_empty() {
        return Err(ExportError::layout(name, "sheet name is empty"));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(ExportError::layout(
            name,
            format!("sheet name is longer than {MAX_SHEET_NAME_LEN} characters"),
        ));
    }
    if let Some(c) = name.chars().find(|c| FORBIDDEN_NAME_CHARS.contains(c)) {
        return Err(ExportError::layout(
            name,
            format!("sheet name contains forbidden character '{c}'"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_width_overrides_win() {
        let widths = ColumnWidths::uniform(16.0).with(0, 40.0).with(0, 42.0);
        assert_eq!(widths.resolve(0, 10.0), 42.0);
        assert_eq!(widths.resolve(3, 10.0), 16.0);
        assert_eq!(ColumnWidths::default().resolve(3, 10.0), 10.0);
    }

    #[test]
    fn sheet_names_follow_excel_rules() {
        assert!(validate_sheet_name("REM").is_ok());
        assert!(validate_sheet_name("").is_err());
        assert!(validate_sheet_name("a/b").is_err());
        assert!(validate_sheet_name(&"x".repeat(32)).is_err());
    }

    #[test]
    fn optional_values_become_empty_cells() {
        assert_eq!(CellValue::from(None::<u32>), CellValue::Empty);
        assert_eq!(CellValue::from(Some(7u8)), CellValue::Number(7.0));
        assert_eq!(CellValue::from(Some("x")), CellValue::Text("x".to_string()));
    }
}
