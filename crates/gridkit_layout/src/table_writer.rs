//! Flat table writer and structured-table conversion.

use log::debug;

use crate::canvas::GridCanvas;
use crate::conf::{C_STRUCTURED_TABLE_STYLE, N_WIDTH_STRUCTURED_TABLE_COL};
use crate::error::{GridError, Result};
use crate::spec::{
    EnumCellValue, SpecHierarchicalTable, SpecPlacement, SpecRegion, SpecStructuredTable,
};
use crate::util::offset_coord;

/// Region a single-level table would occupy, without writing anything.
///
/// Header row sits at `origin_row + 1`, the index column at `origin_col + 1`.
/// Data rows always start at `origin_row + 2`, so skipping the header leaves
/// its row blank.
pub fn derive_flat_table_region(
    table: &SpecHierarchicalTable,
    placement: SpecPlacement,
    include_index: bool,
    include_header: bool,
) -> Result<SpecRegion> {
    table.validate()?;
    placement.validate()?;
    if !table.is_flat() {
        return Err(GridError::DimensionMismatch(format!(
            "Flat writer needs a single-level table; got row_levels={}, col_levels={}.",
            table.row_levels, table.col_levels
        )));
    }
    if table.n_rows() == 0 || (table.n_cols() == 0 && !include_index) {
        return Err(GridError::EmptyTable);
    }

    let row_data_top = offset_coord(placement.origin_row, 2)?;
    let col_index = offset_coord(placement.origin_col, 1)?;
    let n_width = table.n_cols() + usize::from(include_index);
    let top_row = if include_header {
        offset_coord(placement.origin_row, 1)?
    } else {
        row_data_top
    };
    SpecRegion::try_new(
        top_row,
        col_index,
        offset_coord(row_data_top, table.n_rows() - 1)?,
        offset_coord(col_index, n_width - 1)?,
    )
}

/// Write a single-level table as a plain grid and return the occupied region.
///
/// Geometry follows [`derive_flat_table_region`]; nothing is written when it
/// fails.
pub fn write_flat_table(
    canvas: &mut GridCanvas,
    table: &SpecHierarchicalTable,
    placement: SpecPlacement,
    include_index: bool,
    include_header: bool,
) -> Result<SpecRegion> {
    let region = derive_flat_table_region(table, placement, include_index, include_header)?;
    let row_header = offset_coord(placement.origin_row, 1)?;
    let row_data_top = offset_coord(placement.origin_row, 2)?;
    let col_index = region.left_col;
    let col_data_left = offset_coord(col_index, usize::from(include_index))?;

    if include_header {
        if include_index
            && let Some(c_caption) = table
                .row_level_names
                .as_ref()
                .and_then(|names| names.first())
                .filter(|c_name| !c_name.is_empty())
        {
            canvas.write(row_header, col_index, EnumCellValue::from(c_caption.as_str()))?;
        }
        for (n_idx_col, labels) in table.col_labels.iter().enumerate() {
            let col = offset_coord(col_data_left, n_idx_col)?;
            canvas.write(row_header, col, EnumCellValue::from(labels[0].as_str()))?;
        }
    }

    for (n_idx_row, (labels, values)) in table.row_labels.iter().zip(&table.values).enumerate() {
        let row = offset_coord(row_data_top, n_idx_row)?;
        if include_index {
            canvas.write(row, col_index, EnumCellValue::from(labels[0].as_str()))?;
        }
        for (n_idx_col, value) in values.iter().enumerate() {
            let col = offset_coord(col_data_left, n_idx_col)?;
            canvas.write(row, col, value.clone())?;
        }
    }

    debug!("Wrote flat table {region}");
    Ok(region)
}

/// Build the structured table for `region` and check it against `canvas`.
///
/// Nothing is declared. `name = None` takes the canvas's next `Table<n>`
/// name.
pub fn build_structured_table(
    canvas: &GridCanvas,
    region: SpecRegion,
    name: Option<&str>,
    if_header_row: bool,
) -> Result<SpecStructuredTable> {
    let c_name = match name {
        Some(c_name) => c_name.to_string(),
        None => canvas.derive_next_table_name(),
    };
    let table = SpecStructuredTable {
        name: c_name,
        region,
        style_name: C_STRUCTURED_TABLE_STYLE.to_string(),
        if_header_row,
        if_banded_rows: true,
        if_banded_columns: false,
    };
    canvas.check_structured_table(&table)?;
    Ok(table)
}

/// Declare a table built by [`build_structured_table`] and fix its column widths.
pub fn commit_structured_table(canvas: &mut GridCanvas, table: SpecStructuredTable) -> Result<()> {
    let region = table.region;
    let c_name = table.name.clone();
    canvas.declare_structured_table(table)?;
    for col in region.left_col..=region.right_col {
        canvas.set_column_width(col, N_WIDTH_STRUCTURED_TABLE_COL)?;
    }
    debug!("Declared structured table {c_name} over {region}");
    Ok(())
}

/// Declare `region` as a structured table and fix its column widths.
///
/// Cell values are never touched.
pub fn convert_to_structured_table(
    canvas: &mut GridCanvas,
    region: SpecRegion,
    name: Option<&str>,
    if_header_row: bool,
) -> Result<SpecStructuredTable> {
    let table = build_structured_table(canvas, region, name, if_header_row)?;
    commit_structured_table(canvas, table.clone())?;
    Ok(table)
}
