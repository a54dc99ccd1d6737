//! In-memory grid canvas: the single mutable artifact of a render pass.

use std::collections::{BTreeMap, BTreeSet};

use crate::conf::C_STRUCTURED_TABLE_NAME_PREFIX;
use crate::error::{GridError, Result};
use crate::spec::{
    EnumCellValue, EnumStyleClass, SpecHighlightRule, SpecRegion, SpecStructuredTable,
};

/// One occupied canvas cell, as seen by a writer.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecCanvasCell<'a> {
    /// Row (1-based).
    pub row: u32,
    /// Column (1-based).
    pub col: u32,
    /// Written value, if any.
    pub value: Option<&'a EnumCellValue>,
    /// Style class tag, if any.
    pub style: Option<EnumStyleClass>,
}

/// Addressable 2D surface of values, merges, style tags and sheet metadata.
///
/// Coordinates are 1-based. A canvas is built by one caller, possibly across
/// several table renders, then handed whole to a writer. It provides no
/// internal locking; callers sequence their renders.
#[derive(Debug, Clone, Default)]
pub struct GridCanvas {
    dict_values: BTreeMap<(u32, u32), EnumCellValue>,
    dict_styles: BTreeMap<(u32, u32), EnumStyleClass>,
    l_merges: Vec<SpecRegion>,
    l_highlight_rules: Vec<SpecHighlightRule>,
    l_structured_tables: Vec<SpecStructuredTable>,
    dict_col_widths: BTreeMap<u32, f64>,
}

impl GridCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    ////////////////////////////////////////////////////////////////////////////
    // #region Values

    /// Set a cell value; overwrites silently.
    pub fn write(&mut self, row: u32, col: u32, value: EnumCellValue) -> Result<()> {
        validate_cell_coord(row, col)?;
        self.dict_values.insert((row, col), value);
        Ok(())
    }

    pub fn cell_value(&self, row: u32, col: u32) -> Option<&EnumCellValue> {
        self.dict_values.get(&(row, col))
    }

    // #endregion
    ////////////////////////////////////////////////////////////////////////////
    // #region Merges

    /// Check that `region` could be merged, without mutating the canvas.
    pub fn check_merge(&self, region: &SpecRegion) -> Result<()> {
        validate_cell_coord(region.top_row, region.left_col)?;
        if region.is_single_cell() {
            return Err(GridError::InvalidRange(format!(
                "Merge region {region} covers a single cell."
            )));
        }
        if let Some(existing) = self.l_merges.iter().find(|merge| merge.overlaps(region)) {
            return Err(GridError::OverlappingMerge {
                region: *region,
                existing: *existing,
            });
        }
        if let Some(existing) = self
            .l_structured_tables
            .iter()
            .find(|table| table.region.overlaps(region))
        {
            return Err(GridError::OverlappingTable {
                region: *region,
                existing: existing.region,
            });
        }
        Ok(())
    }

    /// Merge all cells of `region` into one visual cell showing its top-left value.
    pub fn declare_merge(&mut self, region: SpecRegion) -> Result<()> {
        self.check_merge(&region)?;
        self.l_merges.push(region);
        Ok(())
    }

    /// Declared merges, in declaration order.
    pub fn merges(&self) -> &[SpecRegion] {
        &self.l_merges
    }

    /// Merge covering `(row, col)`, if any.
    pub fn merge_at(&self, row: u32, col: u32) -> Option<&SpecRegion> {
        self.l_merges.iter().find(|merge| merge.contains(row, col))
    }

    // #endregion
    ////////////////////////////////////////////////////////////////////////////
    // #region Styles

    /// Tag every cell of `region`; later tags overwrite earlier ones.
    pub fn apply_style(&mut self, region: &SpecRegion, class: EnumStyleClass) -> Result<()> {
        validate_cell_coord(region.top_row, region.left_col)?;
        for cell in region.iter_cells() {
            self.dict_styles.insert(cell, class);
        }
        Ok(())
    }

    pub fn cell_style(&self, row: u32, col: u32) -> Option<EnumStyleClass> {
        self.dict_styles.get(&(row, col)).copied()
    }

    /// Attach a conditional highlight rule.
    pub fn add_highlight_rule(&mut self, rule: SpecHighlightRule) {
        self.l_highlight_rules.push(rule);
    }

    pub fn highlight_rules(&self) -> &[SpecHighlightRule] {
        &self.l_highlight_rules
    }

    // #endregion
    ////////////////////////////////////////////////////////////////////////////
    // #region SheetMetadata

    /// Check that `table` could be declared, without mutating the canvas.
    ///
    /// The range may not intersect another structured table or any merge,
    /// and the name must be a valid, unused table identifier.
    pub fn check_structured_table(&self, table: &SpecStructuredTable) -> Result<()> {
        validate_table_name(&table.name)?;
        if self
            .l_structured_tables
            .iter()
            .any(|existing| existing.name.eq_ignore_ascii_case(&table.name))
        {
            return Err(GridError::InvalidArgument(format!(
                "Structured table name {:?} is already used.",
                table.name
            )));
        }
        if let Some(existing) = self
            .l_structured_tables
            .iter()
            .map(|existing| &existing.region)
            .chain(self.l_merges.iter())
            .find(|existing| existing.overlaps(&table.region))
        {
            return Err(GridError::OverlappingTable {
                region: table.region,
                existing: *existing,
            });
        }
        Ok(())
    }

    /// Declare a named structured table.
    pub fn declare_structured_table(&mut self, table: SpecStructuredTable) -> Result<()> {
        self.check_structured_table(&table)?;
        self.l_structured_tables.push(table);
        Ok(())
    }

    pub fn structured_tables(&self) -> &[SpecStructuredTable] {
        &self.l_structured_tables
    }

    /// First unused `Table<n>` name.
    pub fn derive_next_table_name(&self) -> String {
        let set_names: BTreeSet<String> = self
            .l_structured_tables
            .iter()
            .map(|table| table.name.to_ascii_lowercase())
            .collect();
        let mut n_idx = self.l_structured_tables.len() + 1;
        loop {
            let c_name = format!("{C_STRUCTURED_TABLE_NAME_PREFIX}{n_idx}");
            if !set_names.contains(&c_name.to_ascii_lowercase()) {
                return c_name;
            }
            n_idx += 1;
        }
    }

    pub fn set_column_width(&mut self, col: u32, width: f64) -> Result<()> {
        if col == 0 {
            return Err(GridError::InvalidArgument(
                "Column index is 1-based; got 0.".to_string(),
            ));
        }
        if !(width.is_finite() && width > 0.0) {
            return Err(GridError::InvalidArgument(format!(
                "Column width must be > 0; got {width}."
            )));
        }
        self.dict_col_widths.insert(col, width);
        Ok(())
    }

    pub fn column_width(&self, col: u32) -> Option<f64> {
        self.dict_col_widths.get(&col).copied()
    }

    /// `(col, width)` pairs in column order.
    pub fn column_widths(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.dict_col_widths.iter().map(|(col, width)| (*col, *width))
    }

    // #endregion
    ////////////////////////////////////////////////////////////////////////////
    // #region Snapshot

    /// Every cell holding a value or a style tag, row-major.
    pub fn iter_cells(&self) -> Vec<SpecCanvasCell<'_>> {
        let set_coords: BTreeSet<(u32, u32)> = self
            .dict_values
            .keys()
            .chain(self.dict_styles.keys())
            .copied()
            .collect();

        set_coords
            .into_iter()
            .map(|(row, col)| SpecCanvasCell {
                row,
                col,
                value: self.dict_values.get(&(row, col)),
                style: self.dict_styles.get(&(row, col)).copied(),
            })
            .collect()
    }

    /// Bounding region of all values, styles, merges and tables.
    pub fn extent(&self) -> Option<SpecRegion> {
        let l_cells = self
            .dict_values
            .keys()
            .chain(self.dict_styles.keys())
            .map(|(row, col)| SpecRegion {
                top_row: *row,
                left_col: *col,
                bottom_row: *row,
                right_col: *col,
            });
        let l_regions = self
            .l_merges
            .iter()
            .chain(self.l_structured_tables.iter().map(|table| &table.region))
            .copied();

        l_cells
            .chain(l_regions)
            .reduce(|acc, region| acc.union(&region))
    }

    /// Nothing has been written, merged, styled or declared.
    pub fn is_empty(&self) -> bool {
        self.dict_values.is_empty()
            && self.dict_styles.is_empty()
            && self.l_merges.is_empty()
            && self.l_highlight_rules.is_empty()
            && self.l_structured_tables.is_empty()
            && self.dict_col_widths.is_empty()
    }

    // #endregion
    ////////////////////////////////////////////////////////////////////////////
}

fn validate_cell_coord(row: u32, col: u32) -> Result<()> {
    if row == 0 || col == 0 {
        return Err(GridError::InvalidArgument(format!(
            "Canvas coordinates are 1-based; got ({row}, {col})."
        )));
    }
    Ok(())
}

fn validate_table_name(name: &str) -> Result<()> {
    let mut l_chars = name.chars();
    let Some(chr_first) = l_chars.next() else {
        return Err(GridError::InvalidArgument(
            "Structured table name must not be empty.".to_string(),
        ));
    };
    if !(chr_first.is_alphabetic() || chr_first == '_' || chr_first == '\\') {
        return Err(GridError::InvalidArgument(format!(
            "Structured table name {name:?} must start with a letter or underscore."
        )));
    }
    if let Some(chr_bad) = l_chars.find(|chr| !(chr.is_alphanumeric() || *chr == '_' || *chr == '.'))
    {
        return Err(GridError::InvalidArgument(format!(
            "Structured table name {name:?} contains invalid character {chr_bad:?}."
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::C_STRUCTURED_TABLE_STYLE;

    fn region(top_row: u32, left_col: u32, bottom_row: u32, right_col: u32) -> SpecRegion {
        SpecRegion::try_new(top_row, left_col, bottom_row, right_col).expect("region")
    }

    fn structured_table(name: &str, region: SpecRegion) -> SpecStructuredTable {
        SpecStructuredTable {
            name: name.to_string(),
            region,
            style_name: C_STRUCTURED_TABLE_STYLE.to_string(),
            if_header_row: true,
            if_banded_rows: true,
            if_banded_columns: false,
        }
    }

    #[test]
    fn test_write_overwrites_last_wins() {
        let mut canvas = GridCanvas::new();
        canvas.write(2, 3, "first".into()).expect("write");
        canvas.write(2, 3, 0.25.into()).expect("write");

        assert_eq!(canvas.cell_value(2, 3), Some(&EnumCellValue::Number(0.25)));
        assert_eq!(canvas.cell_value(3, 3), None);
        assert!(canvas.write(0, 1, EnumCellValue::None).is_err());
    }

    #[test]
    fn test_overlapping_merge_is_rejected() {
        let mut canvas = GridCanvas::new();
        canvas.declare_merge(region(1, 1, 2, 2)).expect("merge");

        let err = canvas.declare_merge(region(2, 2, 3, 3)).unwrap_err();
        assert_eq!(
            err,
            GridError::OverlappingMerge {
                region: region(2, 2, 3, 3),
                existing: region(1, 1, 2, 2),
            }
        );
        assert_eq!(canvas.merges().len(), 1);
    }

    #[test]
    fn test_disjoint_merges_are_both_kept() {
        let mut canvas = GridCanvas::new();
        canvas.declare_merge(region(1, 1, 2, 1)).expect("merge");
        canvas.declare_merge(region(1, 2, 1, 4)).expect("merge");

        assert_eq!(canvas.merges(), &[region(1, 1, 2, 1), region(1, 2, 1, 4)]);
        assert_eq!(canvas.merge_at(1, 3), Some(&region(1, 2, 1, 4)));
        assert_eq!(canvas.merge_at(3, 3), None);
    }

    #[test]
    fn test_single_cell_merge_is_rejected() {
        let mut canvas = GridCanvas::new();
        assert!(matches!(
            canvas.declare_merge(region(4, 4, 4, 4)),
            Err(GridError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_apply_style_last_applied_wins() {
        let mut canvas = GridCanvas::new();
        canvas
            .apply_style(&region(1, 1, 3, 3), EnumStyleClass::Value)
            .expect("style");
        canvas
            .apply_style(&region(2, 1, 2, 3), EnumStyleClass::ValueHighlightedZone)
            .expect("style");

        assert_eq!(canvas.cell_style(1, 2), Some(EnumStyleClass::Value));
        assert_eq!(
            canvas.cell_style(2, 2),
            Some(EnumStyleClass::ValueHighlightedZone)
        );
        assert_eq!(canvas.cell_style(4, 2), None);
    }

    #[test]
    fn test_structured_table_guards() {
        let mut canvas = GridCanvas::new();
        canvas.declare_merge(region(10, 1, 10, 3)).expect("merge");
        canvas
            .declare_structured_table(structured_table("Sales", region(1, 1, 5, 3)))
            .expect("table");

        assert!(matches!(
            canvas.declare_structured_table(structured_table("sales", region(20, 1, 21, 2))),
            Err(GridError::InvalidArgument(_))
        ));
        assert!(matches!(
            canvas.declare_structured_table(structured_table("Other", region(5, 3, 6, 4))),
            Err(GridError::OverlappingTable { .. })
        ));
        assert!(matches!(
            canvas.declare_structured_table(structured_table("Merged", region(9, 2, 11, 2))),
            Err(GridError::OverlappingTable { .. })
        ));
        assert!(matches!(
            canvas.declare_structured_table(structured_table("bad name", region(30, 1, 31, 1))),
            Err(GridError::InvalidArgument(_))
        ));
        assert_eq!(canvas.derive_next_table_name(), "Table2");
    }

    #[test]
    fn test_merge_inside_structured_table_is_rejected() {
        let mut canvas = GridCanvas::new();
        canvas
            .declare_structured_table(structured_table("Sales", region(2, 2, 5, 4)))
            .expect("table");

        let err = canvas.declare_merge(region(3, 2, 4, 2)).unwrap_err();
        assert_eq!(
            err,
            GridError::OverlappingTable {
                region: region(3, 2, 4, 2),
                existing: region(2, 2, 5, 4),
            }
        );
        assert!(canvas.merges().is_empty());
        canvas.declare_merge(region(6, 2, 6, 4)).expect("merge below table");
    }

    #[test]
    fn test_check_structured_table_does_not_declare() {
        let canvas = GridCanvas::new();
        let table = structured_table("Sales", region(1, 1, 3, 3));

        canvas.check_structured_table(&table).expect("check");
        assert!(canvas.structured_tables().is_empty());
        assert!(matches!(
            canvas.check_structured_table(&structured_table("1bad", region(1, 1, 3, 3))),
            Err(GridError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_iter_cells_and_extent() {
        let mut canvas = GridCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.extent(), None);

        canvas.write(2, 2, "x".into()).expect("write");
        canvas
            .apply_style(&region(3, 4, 3, 5), EnumStyleClass::Header)
            .expect("style");

        let l_cells = canvas.iter_cells();
        assert_eq!(l_cells.len(), 3);
        assert_eq!((l_cells[0].row, l_cells[0].col), (2, 2));
        assert_eq!(l_cells[0].style, None);
        assert_eq!(l_cells[2].value, None);
        assert_eq!(canvas.extent(), Some(region(2, 2, 3, 5)));
        assert!(!canvas.is_empty());
    }
}
