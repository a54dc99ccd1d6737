//! Shared layout specification models.

use std::fmt;

use crate::codec::derive_range_ref;
use crate::conf::{N_HIGHLIGHT_THRESHOLD_DEFAULT, N_WIDTH_INDEX_COL_DEFAULT};
use crate::error::{GridError, Result};

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification; the concrete style behind one style class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font family name.
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Italic style.
    pub italic: Option<bool>,

    /// Horizontal alignment.
    pub align: Option<String>,
    /// Vertical alignment.
    pub valign: Option<String>,
    /// Border style for all sides.
    pub border: Option<i64>,
    /// Text wrap.
    pub text_wrap: Option<bool>,

    /// Top border override.
    pub top: Option<i64>,
    /// Bottom border override.
    pub bottom: Option<i64>,
    /// Left border override.
    pub left: Option<i64>,
    /// Right border override.
    pub right: Option<i64>,

    /// Number format code.
    pub num_format: Option<String>,
    /// Background fill color.
    pub bg_color: Option<String>,
    /// Font color.
    pub font_color: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_name: other.font_name.clone().or_else(|| self.font_name.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            align: other.align.clone().or_else(|| self.align.clone()),
            valign: other.valign.clone().or_else(|| self.valign.clone()),
            border: other.border.or(self.border),
            text_wrap: other.text_wrap.or(self.text_wrap),
            top: other.top.or(self.top),
            bottom: other.bottom.or(self.bottom),
            left: other.left.or(self.left),
            right: other.right.or(self.right),
            num_format: other.num_format.clone().or_else(|| self.num_format.clone()),
            bg_color: other.bg_color.clone().or_else(|| self.bg_color.clone()),
            font_color: other.font_color.clone().or_else(|| self.font_color.clone()),
        }
    }
}

/// Style classes tagged onto canvas cells; resolved through a style catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnumStyleClass {
    /// Table title above the header.
    Title,
    /// Column-header block.
    Header,
    /// Row-index columns other than the last level.
    Index,
    /// Last row-index level.
    IndexLast,
    /// Value block.
    Value,
    /// Value rows belonging to a sentinel (e.g. grand total) row.
    ValueHighlightedZone,
    /// Style applied by conditional highlight rules.
    Highlight,
}

impl EnumStyleClass {
    /// Every class, in catalog order.
    pub const ALL: [EnumStyleClass; 7] = [
        EnumStyleClass::Title,
        EnumStyleClass::Header,
        EnumStyleClass::Index,
        EnumStyleClass::IndexLast,
        EnumStyleClass::Value,
        EnumStyleClass::ValueHighlightedZone,
        EnumStyleClass::Highlight,
    ];

    /// Stable snake-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Header => "header",
            Self::Index => "index",
            Self::IndexLast => "index_last",
            Self::Value => "value",
            Self::ValueHighlightedZone => "value_highlighted_zone",
            Self::Highlight => "highlight",
        }
    }
}

impl fmt::Display for EnumStyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region GridGeometry

/// Normalized cell value stored on the canvas.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EnumCellValue {
    /// Missing/blank value.
    #[default]
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
}

impl EnumCellValue {
    /// `true` for `None` and empty text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::None => true,
            Self::String(s) => s.is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Display text; blank for `None`.
    pub fn to_text(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::String(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }

    /// Numeric payload, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for EnumCellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for EnumCellValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EnumCellValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<EnumCellValue>> From<Option<T>> for EnumCellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

/// Anchor of one table render, in 1-based grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecPlacement {
    /// Anchor row (1-based).
    pub origin_row: u32,
    /// Anchor column (1-based).
    pub origin_col: u32,
}

impl SpecPlacement {
    pub fn new(origin_row: u32, origin_col: u32) -> Self {
        Self {
            origin_row,
            origin_col,
        }
    }

    /// Both coordinates must be >= 1.
    pub fn validate(&self) -> Result<()> {
        if self.origin_row == 0 || self.origin_col == 0 {
            return Err(GridError::InvalidArgument(format!(
                "Placement is 1-based; got origin_row={}, origin_col={}.",
                self.origin_row, self.origin_col
            )));
        }
        Ok(())
    }
}

/// Inclusive rectangle of grid cells, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpecRegion {
    /// First row (inclusive).
    pub top_row: u32,
    /// First column (inclusive).
    pub left_col: u32,
    /// Last row (inclusive).
    pub bottom_row: u32,
    /// Last column (inclusive).
    pub right_col: u32,
}

impl SpecRegion {
    /// Build a region from its corners.
    ///
    /// Zero coordinates are an `InvalidArgument`; inverted corners an `InvalidRange`.
    pub fn try_new(top_row: u32, left_col: u32, bottom_row: u32, right_col: u32) -> Result<Self> {
        if top_row == 0 || left_col == 0 || bottom_row == 0 || right_col == 0 {
            return Err(GridError::InvalidArgument(format!(
                "Region coordinates are 1-based; got ({top_row}, {left_col}):({bottom_row}, {right_col})."
            )));
        }
        if bottom_row < top_row || right_col < left_col {
            return Err(GridError::InvalidRange(format!(
                "Region corners are inverted: ({top_row}, {left_col}):({bottom_row}, {right_col})."
            )));
        }
        Ok(Self {
            top_row,
            left_col,
            bottom_row,
            right_col,
        })
    }

    /// Build a region from its top-left cell and size; empty sizes are an `InvalidRange`.
    pub fn try_from_origin_size(top_row: u32, left_col: u32, height: u32, width: u32) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidRange(format!(
                "Region at ({top_row}, {left_col}) has zero size: height={height}, width={width}."
            )));
        }
        let bottom_row = top_row.checked_add(height - 1).ok_or_else(|| {
            GridError::InvalidArgument(format!("Row overflow: {top_row} + {height}."))
        })?;
        let right_col = left_col.checked_add(width - 1).ok_or_else(|| {
            GridError::InvalidArgument(format!("Column overflow: {left_col} + {width}."))
        })?;
        Self::try_new(top_row, left_col, bottom_row, right_col)
    }

    /// Single-cell region.
    pub fn try_cell(row: u32, col: u32) -> Result<Self> {
        Self::try_new(row, col, row, col)
    }

    pub fn height(&self) -> u32 {
        self.bottom_row - self.top_row + 1
    }

    pub fn width(&self) -> u32 {
        self.right_col - self.left_col + 1
    }

    pub fn is_single_cell(&self) -> bool {
        self.top_row == self.bottom_row && self.left_col == self.right_col
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.top_row..=self.bottom_row).contains(&row)
            && (self.left_col..=self.right_col).contains(&col)
    }

    /// `true` when the two rectangles share at least one cell.
    pub fn overlaps(&self, other: &SpecRegion) -> bool {
        self.top_row <= other.bottom_row
            && other.top_row <= self.bottom_row
            && self.left_col <= other.right_col
            && other.left_col <= self.right_col
    }

    /// Smallest region covering both.
    pub fn union(&self, other: &SpecRegion) -> SpecRegion {
        SpecRegion {
            top_row: self.top_row.min(other.top_row),
            left_col: self.left_col.min(other.left_col),
            bottom_row: self.bottom_row.max(other.bottom_row),
            right_col: self.right_col.max(other.right_col),
        }
    }

    /// Row-major `(row, col)` iterator over every cell.
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.top_row..=self.bottom_row)
            .flat_map(move |row| (self.left_col..=self.right_col).map(move |col| (row, col)))
    }
}

impl fmt::Display for SpecRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match derive_range_ref(self) {
            Ok(c_ref) => f.write_str(&c_ref),
            Err(_) => write!(
                f,
                "R{}C{}:R{}C{}",
                self.top_row, self.left_col, self.bottom_row, self.right_col
            ),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region HighlightAndTables

/// Cell-value comparison used by highlight rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumCompareOperator {
    /// `value >= threshold` (default).
    #[default]
    GreaterThanOrEqual,
    /// `value > threshold`.
    GreaterThan,
    /// `value <= threshold`.
    LessThanOrEqual,
    /// `value < threshold`.
    LessThan,
    /// `value == threshold`.
    EqualTo,
    /// `value != threshold`.
    NotEqualTo,
}

impl EnumCompareOperator {
    /// Evaluate `value <op> threshold`.
    pub fn evaluate(&self, value: f64, threshold: f64) -> bool {
        match self {
            Self::GreaterThanOrEqual => value >= threshold,
            Self::GreaterThan => value > threshold,
            Self::LessThanOrEqual => value <= threshold,
            Self::LessThan => value < threshold,
            Self::EqualTo => value == threshold,
            Self::NotEqualTo => value != threshold,
        }
    }
}

/// Threshold-based conditional styling for one range of value cells.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecHighlightRule {
    /// Covered cells.
    pub region: SpecRegion,
    /// A1-style range expression of `region`, e.g. `F10:I10`.
    pub range_expr: String,
    /// Comparison operator.
    pub operator: EnumCompareOperator,
    /// Right-hand side of the comparison.
    pub threshold: f64,
    /// Class applied to cells satisfying the comparison.
    pub style: EnumStyleClass,
}

impl SpecHighlightRule {
    /// Whether `value` triggers the rule.
    pub fn matches(&self, value: &EnumCellValue) -> bool {
        value
            .as_number()
            .is_some_and(|n| self.operator.evaluate(n, self.threshold))
    }
}

/// Named rectangular range with banding metadata; never alters cell values.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecStructuredTable {
    /// Unique table name.
    pub name: String,
    /// Covered cells, header row included when present.
    pub region: SpecRegion,
    /// Built-in table style name.
    pub style_name: String,
    /// First row of `region` is the table header.
    pub if_header_row: bool,
    /// Banded rows.
    pub if_banded_rows: bool,
    /// Banded columns.
    pub if_banded_columns: bool,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TableSpecification

/// Value matrix keyed by multi-level row and column labels (e.g. a pivot table).
///
/// An empty label is the null label: during merging it continues the
/// current run instead of starting a new one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecHierarchicalTable {
    /// `R` rows of `C` values.
    pub values: Vec<Vec<EnumCellValue>>,
    /// `R` label tuples of length `row_levels`.
    pub row_labels: Vec<Vec<String>>,
    /// `C` label tuples of length `col_levels`.
    pub col_labels: Vec<Vec<String>>,
    /// Number of row-label levels (>= 1).
    pub row_levels: usize,
    /// Number of column-label levels (>= 1).
    pub col_levels: usize,
    /// Optional caption per row level.
    pub row_level_names: Option<Vec<String>>,
}

impl SpecHierarchicalTable {
    /// Build a table; level counts come from the first tuples (1 when absent).
    pub fn new(
        values: Vec<Vec<EnumCellValue>>,
        row_labels: Vec<Vec<String>>,
        col_labels: Vec<Vec<String>>,
    ) -> Self {
        let row_levels = row_labels.first().map_or(1, Vec::len);
        let col_levels = col_labels.first().map_or(1, Vec::len);
        Self {
            values,
            row_labels,
            col_labels,
            row_levels,
            col_levels,
            row_level_names: None,
        }
    }

    /// Single-level table: one index label per row, one header per column.
    pub fn from_flat(
        columns: Vec<String>,
        index: Vec<String>,
        values: Vec<Vec<EnumCellValue>>,
    ) -> Self {
        Self {
            values,
            row_labels: index.into_iter().map(|c_label| vec![c_label]).collect(),
            col_labels: columns.into_iter().map(|c_label| vec![c_label]).collect(),
            row_levels: 1,
            col_levels: 1,
            row_level_names: None,
        }
    }

    /// Declare the level counts explicitly.
    pub fn with_levels(mut self, row_levels: usize, col_levels: usize) -> Self {
        self.row_levels = row_levels;
        self.col_levels = col_levels;
        self
    }

    /// Attach captions for the row levels.
    pub fn with_row_level_names(mut self, names: Vec<String>) -> Self {
        self.row_level_names = Some(names);
        self
    }

    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    pub fn n_cols(&self) -> usize {
        self.col_labels.len()
    }

    /// No rows or no value columns.
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0 || self.n_cols() == 0
    }

    pub fn is_flat(&self) -> bool {
        self.row_levels == 1 && self.col_levels == 1
    }

    /// Labels of one row level, top to bottom.
    pub fn row_level_labels(&self, level: usize) -> Vec<String> {
        self.row_labels
            .iter()
            .map(|tup| tup.get(level).cloned().unwrap_or_default())
            .collect()
    }

    /// Labels of one column level, left to right.
    pub fn col_level_labels(&self, level: usize) -> Vec<String> {
        self.col_labels
            .iter()
            .map(|tup| tup.get(level).cloned().unwrap_or_default())
            .collect()
    }

    /// Check every structural invariant; fails with `DimensionMismatch`.
    pub fn validate(&self) -> Result<()> {
        if self.row_levels == 0 || self.col_levels == 0 {
            return Err(GridError::DimensionMismatch(format!(
                "Level counts must be >= 1; got row_levels={}, col_levels={}.",
                self.row_levels, self.col_levels
            )));
        }
        if let Some((n_idx, tup)) = self
            .row_labels
            .iter()
            .enumerate()
            .find(|(_, tup)| tup.len() != self.row_levels)
        {
            return Err(GridError::DimensionMismatch(format!(
                "Row {n_idx} has {} labels; expected row_levels={}.",
                tup.len(),
                self.row_levels
            )));
        }
        if let Some((n_idx, tup)) = self
            .col_labels
            .iter()
            .enumerate()
            .find(|(_, tup)| tup.len() != self.col_levels)
        {
            return Err(GridError::DimensionMismatch(format!(
                "Column {n_idx} has {} labels; expected col_levels={}.",
                tup.len(),
                self.col_levels
            )));
        }
        if self.values.len() != self.n_rows() {
            return Err(GridError::DimensionMismatch(format!(
                "Value matrix has {} rows; row labels describe {}.",
                self.values.len(),
                self.n_rows()
            )));
        }
        if let Some((n_idx, row)) = self
            .values
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.n_cols())
        {
            return Err(GridError::DimensionMismatch(format!(
                "Value row {n_idx} has {} cells; column labels describe {}.",
                row.len(),
                self.n_cols()
            )));
        }
        if let Some(names) = &self.row_level_names
            && names.len() != self.row_levels
        {
            return Err(GridError::DimensionMismatch(format!(
                "Got {} row level names; expected row_levels={}.",
                names.len(),
                self.row_levels
            )));
        }
        Ok(())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region RenderOptions

/// Per-table render options.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecRenderOptions {
    /// Declare the written flat table as a structured table.
    pub if_as_structured_table: bool,
    /// Render through the hierarchical layout engine (merges, styles, highlight rules).
    pub if_hierarchical_format: bool,
    /// Write the row index (flat rendering).
    pub if_include_index: bool,
    /// Write the header row (flat rendering).
    pub if_include_header: bool,
    /// Title above the table; empty or `None` skips it.
    pub title: Option<String>,
    /// Last-level index label marking rows with a distinguished fill.
    pub sentinel_label: Option<String>,
    /// Highlight threshold; `None` disables highlight rules.
    pub highlight_threshold: Option<f64>,
    /// Structured table name; assigned by the canvas when `None`.
    pub structured_table_name: Option<String>,
    /// Width of index columns; `None` leaves widths untouched.
    pub width_index_col: Option<f64>,
}

impl Default for SpecRenderOptions {
    fn default() -> Self {
        Self {
            if_as_structured_table: false,
            if_hierarchical_format: true,
            if_include_index: true,
            if_include_header: true,
            title: None,
            sentinel_label: None,
            highlight_threshold: Some(N_HIGHLIGHT_THRESHOLD_DEFAULT),
            structured_table_name: None,
            width_index_col: Some(N_WIDTH_INDEX_COL_DEFAULT),
        }
    }
}

impl SpecRenderOptions {
    /// Non-empty title, if any.
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref().filter(|c_title| !c_title.is_empty())
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(n_thr) = self.highlight_threshold
            && !n_thr.is_finite()
        {
            return Err(GridError::InvalidArgument(format!(
                "highlight_threshold must be finite; got {n_thr}."
            )));
        }
        if let Some(n_width) = self.width_index_col
            && !(n_width.is_finite() && n_width > 0.0)
        {
            return Err(GridError::InvalidArgument(format!(
                "width_index_col must be > 0; got {n_width}."
            )));
        }
        if self.if_as_structured_table && self.if_hierarchical_format {
            return Err(GridError::InvalidArgument(
                "Structured tables cannot hold merged cells; disable if_hierarchical_format."
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// Immutable context threaded through one table render.
#[derive(Debug, Clone, Copy)]
pub struct SpecRenderContext<'a> {
    /// Table to render.
    pub table: &'a SpecHierarchicalTable,
    /// Anchor on the canvas.
    pub placement: SpecPlacement,
    /// Render options.
    pub options: &'a SpecRenderOptions,
}

impl<'a> SpecRenderContext<'a> {
    pub fn new(
        table: &'a SpecHierarchicalTable,
        placement: SpecPlacement,
        options: &'a SpecRenderOptions,
    ) -> Self {
        Self {
            table,
            placement,
            options,
        }
    }
}

/// One table of a sheet: data plus where and how to render it.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecSheetContent {
    /// Table data.
    pub table: SpecHierarchicalTable,
    /// Anchor on the sheet canvas.
    pub placement: SpecPlacement,
    /// Render options.
    pub options: SpecRenderOptions,
}

impl SpecSheetContent {
    pub fn context(&self) -> SpecRenderContext<'_> {
        SpecRenderContext::new(&self.table, self.placement, &self.options)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-sheet render report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecRenderReport {
    /// Tables written onto the canvas.
    pub n_tables_rendered: usize,
    /// Tables skipped as benign no-ops (e.g. zero rows).
    pub n_tables_skipped: usize,
    /// Occupied region of each rendered table, in render order.
    pub regions: Vec<SpecRegion>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecRenderReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_overlap_and_size() {
        let region_a = SpecRegion::try_new(2, 2, 4, 5).expect("region");
        let region_b = SpecRegion::try_new(4, 5, 6, 6).expect("region");
        let region_c = SpecRegion::try_new(5, 1, 6, 4).expect("region");

        assert_eq!(region_a.height(), 3);
        assert_eq!(region_a.width(), 4);
        assert!(region_a.overlaps(&region_b));
        assert!(!region_a.overlaps(&region_c));
        assert_eq!(region_a.iter_cells().count(), 12);
    }

    #[test]
    fn test_region_rejects_zero_and_inverted() {
        assert!(matches!(
            SpecRegion::try_new(0, 1, 1, 1),
            Err(GridError::InvalidArgument(_))
        ));
        assert!(matches!(
            SpecRegion::try_new(3, 1, 2, 1),
            Err(GridError::InvalidRange(_))
        ));
        assert!(matches!(
            SpecRegion::try_from_origin_size(1, 1, 0, 4),
            Err(GridError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_table_validate_detects_short_label_tuple() {
        let table = SpecHierarchicalTable::new(
            vec![vec![0.5.into()], vec![0.6.into()]],
            vec![
                vec!["G1".to_string(), "a".to_string()],
                vec!["G1".to_string()],
            ],
            vec![vec!["m".to_string()]],
        );
        assert!(matches!(
            table.validate(),
            Err(GridError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_explicit_levels_on_empty_table() {
        let table = SpecHierarchicalTable::new(vec![], vec![], vec![]).with_levels(2, 3);
        assert_eq!((table.row_levels, table.col_levels), (2, 3));
        assert!(table.is_empty() && !table.is_flat());
        assert!(table.validate().is_ok());

        let table_zero = SpecHierarchicalTable::new(vec![], vec![], vec![]).with_levels(0, 1);
        assert!(matches!(
            table_zero.validate(),
            Err(GridError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_cell_value_blankness() {
        assert!(EnumCellValue::None.is_blank());
        assert!(EnumCellValue::from("").is_blank());
        assert!(!EnumCellValue::from("x").is_blank());
        assert!(!EnumCellValue::Number(0.0).is_blank());
        assert_eq!(EnumCellValue::from(None::<f64>), EnumCellValue::None);
    }

    #[test]
    fn test_options_reject_structured_table_with_merges() {
        let options = SpecRenderOptions {
            if_as_structured_table: true,
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(GridError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_compare_operator() {
        assert!(EnumCompareOperator::GreaterThanOrEqual.evaluate(0.8, 0.8));
        assert!(!EnumCompareOperator::GreaterThan.evaluate(0.8, 0.8));
        assert!(EnumCompareOperator::LessThan.evaluate(0.1, 0.8));
    }
}
