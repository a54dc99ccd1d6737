//! Hierarchical layout engine.
//!
//! Rendering happens in two phases. [`plan_table_layout`] turns a render
//! context into a [`SpecTableLayout`]: every cell write, merge, style layer,
//! highlight rule and column width, as plain data. [`render_hierarchical_table`]
//! checks the plan against the canvas and only then commits it, so a failed
//! render leaves the canvas untouched.
//!
//! Grid shape for `row_levels = 2`, `col_levels = 2` anchored at `(r, c)`:
//!
//! ```text
//!            c+1      c+2      c+3 ..
//! r-1        [ title merged across index + header width ]
//! r+1                          header level 1
//! r+2        caption  caption  header level 2
//! r+3        index    index    values ..
//! ```

use log::{debug, trace};

use crate::canvas::GridCanvas;
use crate::error::{GridError, Result};
use crate::highlight::build_highlight_rules;
use crate::spec::{
    EnumCellValue, EnumStyleClass, SpecHighlightRule, SpecPlacement, SpecRegion,
    SpecRenderContext,
};
use crate::util::{cast_extent, derive_contiguous_ranges, offset_coord, plan_label_runs};

////////////////////////////////////////////////////////////////////////////////
// #region LayoutModels

/// Block coordinates of one table on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecTableBlocks {
    /// Column labels: `col_levels` rows by `C` columns.
    pub header_block: SpecRegion,
    /// Row labels: `R` rows by `row_levels` columns, aligned with value rows.
    pub index_block: SpecRegion,
    /// Values: `R` rows by `C` columns.
    pub value_block: SpecRegion,
    /// Row-level captions: the last header row over the index columns.
    pub index_caption: SpecRegion,
}

/// Fully planned render of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecTableLayout {
    /// Anchor the plan was computed for.
    pub placement: SpecPlacement,
    /// Block coordinates.
    pub blocks: SpecTableBlocks,
    /// Merged title cell, when a title is rendered.
    pub title_cell: Option<SpecRegion>,
    /// Cell writes `(row, col, value)`, in write order.
    pub cells: Vec<(u32, u32, EnumCellValue)>,
    /// Merge regions: index levels, then header levels, then the title.
    pub merges: Vec<SpecRegion>,
    /// Style layers in application order; later layers win.
    pub style_layers: Vec<(SpecRegion, EnumStyleClass)>,
    /// One highlight rule per value row.
    pub highlight_rules: Vec<SpecHighlightRule>,
    /// `(col, width)` assignments.
    pub column_widths: Vec<(u32, f64)>,
}

impl SpecTableLayout {
    /// Bounding region of everything the plan touches.
    pub fn extent(&self) -> SpecRegion {
        let SpecTableBlocks {
            header_block,
            index_block,
            value_block,
            index_caption,
        } = self.blocks;
        let region = header_block
            .union(&index_block)
            .union(&value_block)
            .union(&index_caption);
        match &self.title_cell {
            Some(title_cell) => region.union(title_cell),
            None => region,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region BlockGeometry

/// Compute block coordinates for an `n_rows x n_cols` table.
///
/// Value block top-left is `(origin_row + col_levels + 1, origin_col + row_levels + 1)`.
pub fn derive_table_blocks(
    placement: SpecPlacement,
    row_levels: usize,
    col_levels: usize,
    n_rows: usize,
    n_cols: usize,
) -> Result<SpecTableBlocks> {
    placement.validate()?;
    let SpecPlacement {
        origin_row,
        origin_col,
    } = placement;

    let n_row_header_top = offset_coord(origin_row, 1)?;
    let n_row_caption = offset_coord(origin_row, col_levels)?;
    let n_row_value_top = offset_coord(n_row_caption, 1)?;
    let n_col_index_left = offset_coord(origin_col, 1)?;
    let n_col_value_left = offset_coord(origin_col, row_levels + 1)?;

    let n_row_levels = cast_extent(row_levels)?;
    let n_col_levels = cast_extent(col_levels)?;
    let n_height = cast_extent(n_rows)?;
    let n_width = cast_extent(n_cols)?;

    Ok(SpecTableBlocks {
        header_block: SpecRegion::try_from_origin_size(
            n_row_header_top,
            n_col_value_left,
            n_col_levels,
            n_width,
        )?,
        index_block: SpecRegion::try_from_origin_size(
            n_row_value_top,
            n_col_index_left,
            n_height,
            n_row_levels,
        )?,
        value_block: SpecRegion::try_from_origin_size(
            n_row_value_top,
            n_col_value_left,
            n_height,
            n_width,
        )?,
        index_caption: SpecRegion::try_from_origin_size(
            n_row_caption,
            n_col_index_left,
            1,
            n_row_levels,
        )?,
    })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Planning

/// Plan the full render of `ctx` without touching any canvas.
///
/// Returns `Ok(None)` for a table without rows or value columns.
pub fn plan_table_layout(ctx: &SpecRenderContext<'_>) -> Result<Option<SpecTableLayout>> {
    let SpecRenderContext {
        table,
        placement,
        options,
    } = *ctx;

    table.validate()?;
    options.validate()?;
    placement.validate()?;
    if table.is_empty() {
        return Ok(None);
    }

    let blocks = derive_table_blocks(
        placement,
        table.row_levels,
        table.col_levels,
        table.n_rows(),
        table.n_cols(),
    )?;
    let SpecTableBlocks {
        header_block,
        index_block,
        value_block,
        index_caption,
    } = blocks;

    let title_cell = match options.title_text() {
        Some(_) if placement.origin_row < 2 => {
            return Err(GridError::InvalidArgument(format!(
                "A title needs origin_row >= 2 to fit above the table; got {}.",
                placement.origin_row
            )));
        }
        Some(_) => Some(SpecRegion::try_new(
            placement.origin_row - 1,
            index_block.left_col,
            placement.origin_row - 1,
            header_block.right_col,
        )?),
        None => None,
    };

    let cells = plan_cell_writes(ctx, &blocks, title_cell.as_ref())?;
    let merges = plan_merges(ctx, &blocks, title_cell.as_ref())?;
    let style_layers = plan_style_layers(ctx, &blocks, title_cell.as_ref())?;

    let highlight_rules = match options.highlight_threshold {
        Some(n_thr) => build_highlight_rules(&value_block, n_thr)?,
        None => vec![],
    };

    let column_widths = match options.width_index_col {
        Some(n_width) => (index_block.left_col..=index_block.right_col)
            .map(|col| (col, n_width))
            .collect(),
        None => vec![],
    };

    debug!(
        "Planned table at {}: index={index_block} header={header_block} values={value_block} caption={index_caption} merges={} rules={}",
        placement_text(placement),
        merges.len(),
        highlight_rules.len()
    );

    Ok(Some(SpecTableLayout {
        placement,
        blocks,
        title_cell,
        cells,
        merges,
        style_layers,
        highlight_rules,
        column_widths,
    }))
}

fn plan_cell_writes(
    ctx: &SpecRenderContext<'_>,
    blocks: &SpecTableBlocks,
    title_cell: Option<&SpecRegion>,
) -> Result<Vec<(u32, u32, EnumCellValue)>> {
    let table = ctx.table;
    let mut l_cells = Vec::new();

    if let (Some(title_cell), Some(c_title)) = (title_cell, ctx.options.title_text()) {
        l_cells.push((
            title_cell.top_row,
            title_cell.left_col,
            EnumCellValue::from(c_title),
        ));
    }

    for n_level in 0..table.col_levels {
        let row = offset_coord(blocks.header_block.top_row, n_level)?;
        for (n_idx_col, labels) in table.col_labels.iter().enumerate() {
            let c_label = &labels[n_level];
            if c_label.is_empty() {
                continue;
            }
            let col = offset_coord(blocks.header_block.left_col, n_idx_col)?;
            l_cells.push((row, col, EnumCellValue::from(c_label.as_str())));
        }
    }

    if let Some(names) = &table.row_level_names {
        for (n_level, c_name) in names.iter().enumerate() {
            if c_name.is_empty() {
                continue;
            }
            let col = offset_coord(blocks.index_caption.left_col, n_level)?;
            l_cells.push((
                blocks.index_caption.top_row,
                col,
                EnumCellValue::from(c_name.as_str()),
            ));
        }
    }

    for (n_idx_row, (labels, values)) in table.row_labels.iter().zip(&table.values).enumerate() {
        let row = offset_coord(blocks.value_block.top_row, n_idx_row)?;
        for (n_level, c_label) in labels.iter().enumerate() {
            if c_label.is_empty() {
                continue;
            }
            let col = offset_coord(blocks.index_block.left_col, n_level)?;
            l_cells.push((row, col, EnumCellValue::from(c_label.as_str())));
        }
        for (n_idx_col, value) in values.iter().enumerate() {
            let col = offset_coord(blocks.value_block.left_col, n_idx_col)?;
            l_cells.push((row, col, value.clone()));
        }
    }

    Ok(l_cells)
}

fn plan_merges(
    ctx: &SpecRenderContext<'_>,
    blocks: &SpecTableBlocks,
    title_cell: Option<&SpecRegion>,
) -> Result<Vec<SpecRegion>> {
    let table = ctx.table;
    let mut l_merges = Vec::new();

    // Index levels: one column each, scanned top to bottom.
    for n_level in 0..table.row_levels {
        let col = offset_coord(blocks.index_block.left_col, n_level)?;
        for (n_start, n_end) in plan_label_runs(&table.row_level_labels(n_level)) {
            let region = SpecRegion::try_new(
                offset_coord(blocks.index_block.top_row, n_start)?,
                col,
                offset_coord(blocks.index_block.top_row, n_end)?,
                col,
            )?;
            trace!("Index level {n_level}: merge {region}");
            l_merges.push(region);
        }
    }

    // Header levels: one row each, scanned left to right.
    for n_level in 0..table.col_levels {
        let row = offset_coord(blocks.header_block.top_row, n_level)?;
        for (n_start, n_end) in plan_label_runs(&table.col_level_labels(n_level)) {
            let region = SpecRegion::try_new(
                row,
                offset_coord(blocks.header_block.left_col, n_start)?,
                row,
                offset_coord(blocks.header_block.left_col, n_end)?,
            )?;
            trace!("Header level {n_level}: merge {region}");
            l_merges.push(region);
        }
    }

    if let Some(title_cell) = title_cell
        && !title_cell.is_single_cell()
    {
        l_merges.push(*title_cell);
    }

    Ok(l_merges)
}

fn plan_style_layers(
    ctx: &SpecRenderContext<'_>,
    blocks: &SpecTableBlocks,
    title_cell: Option<&SpecRegion>,
) -> Result<Vec<(SpecRegion, EnumStyleClass)>> {
    let table = ctx.table;
    let n_level_last = table.row_levels - 1;
    let l_labels_last = table.row_level_labels(n_level_last);
    let l_rows_sentinel: Vec<usize> = match &ctx.options.sentinel_label {
        Some(c_sentinel) => l_labels_last
            .iter()
            .enumerate()
            .filter_map(|(n_idx, c_label)| (c_label == c_sentinel).then_some(n_idx))
            .collect(),
        None => vec![],
    };

    let mut l_layers = Vec::new();

    if table.row_level_names.is_some() {
        l_layers.push((blocks.index_caption, EnumStyleClass::Header));
    }

    // (1) base value style, (2) sentinel rows.
    l_layers.push((blocks.value_block, EnumStyleClass::Value));
    for (n_start, n_end) in derive_contiguous_ranges(&l_rows_sentinel) {
        l_layers.push((
            SpecRegion::try_new(
                offset_coord(blocks.value_block.top_row, n_start)?,
                blocks.value_block.left_col,
                offset_coord(blocks.value_block.top_row, n_end)?,
                blocks.value_block.right_col,
            )?,
            EnumStyleClass::ValueHighlightedZone,
        ));
    }

    // (3) header.
    l_layers.push((blocks.header_block, EnumStyleClass::Header));

    // (4) index levels; sentinel cells of the last level keep the darker index fill.
    let col_last = blocks.index_block.right_col;
    if col_last > blocks.index_block.left_col {
        l_layers.push((
            SpecRegion::try_new(
                blocks.index_block.top_row,
                blocks.index_block.left_col,
                blocks.index_block.bottom_row,
                col_last - 1,
            )?,
            EnumStyleClass::Index,
        ));
    }
    l_layers.push((
        SpecRegion::try_new(
            blocks.index_block.top_row,
            col_last,
            blocks.index_block.bottom_row,
            col_last,
        )?,
        EnumStyleClass::IndexLast,
    ));
    for (n_start, n_end) in derive_contiguous_ranges(&l_rows_sentinel) {
        l_layers.push((
            SpecRegion::try_new(
                offset_coord(blocks.index_block.top_row, n_start)?,
                col_last,
                offset_coord(blocks.index_block.top_row, n_end)?,
                col_last,
            )?,
            EnumStyleClass::Index,
        ));
    }

    // (5) title.
    if let Some(title_cell) = title_cell {
        l_layers.push((*title_cell, EnumStyleClass::Title));
    }

    Ok(l_layers)
}

fn placement_text(placement: SpecPlacement) -> String {
    format!("({}, {})", placement.origin_row, placement.origin_col)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Commit

/// Render a hierarchical table onto `canvas`, all or nothing.
///
/// Returns the committed plan, or `Ok(None)` when the table is empty and
/// nothing was written.
pub fn render_hierarchical_table(
    canvas: &mut GridCanvas,
    ctx: &SpecRenderContext<'_>,
) -> Result<Option<SpecTableLayout>> {
    let Some(layout) = plan_table_layout(ctx)? else {
        debug!(
            "Skipping empty table at {}",
            placement_text(ctx.placement)
        );
        return Ok(None);
    };

    for merge in &layout.merges {
        canvas.check_merge(merge)?;
    }

    commit_layout(canvas, &layout)?;
    Ok(Some(layout))
}

fn commit_layout(canvas: &mut GridCanvas, layout: &SpecTableLayout) -> Result<()> {
    for (row, col, value) in &layout.cells {
        canvas.write(*row, *col, value.clone())?;
    }
    for merge in &layout.merges {
        canvas.declare_merge(*merge)?;
    }
    for (region, class) in &layout.style_layers {
        canvas.apply_style(region, *class)?;
    }
    for rule in &layout.highlight_rules {
        canvas.add_highlight_rule(rule.clone());
    }
    for (col, width) in &layout.column_widths {
        canvas.set_column_width(*col, *width)?;
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{SpecHierarchicalTable, SpecRenderOptions};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn region(top_row: u32, left_col: u32, bottom_row: u32, right_col: u32) -> SpecRegion {
        SpecRegion::try_new(top_row, left_col, bottom_row, right_col).expect("region")
    }

    fn grouped_table() -> SpecHierarchicalTable {
        SpecHierarchicalTable::new(
            vec![
                vec![0.9.into(), 0.7.into()],
                vec![0.5.into(), 0.85.into()],
                vec![0.95.into(), 0.6.into()],
            ],
            vec![
                strings(&["G1", "a"]),
                strings(&["G1", "b"]),
                strings(&["G2", "c"]),
            ],
            vec![strings(&["mape"]), strings(&["mape"])],
        )
    }

    #[test]
    fn test_value_block_origin() {
        let blocks = derive_table_blocks(SpecPlacement::new(6, 3), 2, 2, 4, 5).expect("blocks");

        assert_eq!(
            (blocks.value_block.top_row, blocks.value_block.left_col),
            (9, 6)
        );
        assert_eq!(blocks.value_block, region(9, 6, 12, 10));
        assert_eq!(blocks.header_block, region(7, 6, 8, 10));
        assert_eq!(blocks.index_block, region(9, 4, 12, 5));
        assert_eq!(blocks.index_caption, region(8, 4, 8, 5));
    }

    #[test]
    fn test_index_merge_for_repeated_group_only() {
        let table = grouped_table();
        let options = SpecRenderOptions::default();
        let ctx = SpecRenderContext::new(&table, SpecPlacement::new(1, 1), &options);
        let layout = plan_table_layout(&ctx).expect("plan").expect("non-empty");

        // Index block starts at row 3 (origin 1 + one header level + 1), column 2.
        assert_eq!(layout.blocks.index_block, region(3, 2, 5, 3));
        // "G1" spans table rows 1-2; "G2" and level 2 stay unmerged. Header "mape" repeats.
        assert_eq!(layout.merges, vec![region(3, 2, 4, 2), region(2, 4, 2, 5)]);
    }

    #[test]
    fn test_empty_label_continues_index_run() {
        let table = SpecHierarchicalTable::new(
            vec![vec![1.0.into()], vec![2.0.into()], vec![3.0.into()]],
            vec![strings(&["X"]), strings(&[""]), strings(&["Y"])],
            vec![strings(&["v"])],
        );
        let options = SpecRenderOptions::default();
        let ctx = SpecRenderContext::new(&table, SpecPlacement::new(1, 1), &options);
        let layout = plan_table_layout(&ctx).expect("plan").expect("non-empty");

        assert_eq!(layout.merges, vec![region(3, 2, 4, 2)]);
        assert!(
            !layout
                .cells
                .iter()
                .any(|(row, col, _)| (*row, *col) == (4, 2)),
            "empty labels are not written"
        );
    }

    #[test]
    fn test_style_layer_order_with_sentinel() {
        let mut table = grouped_table();
        table.row_labels[2] = strings(&["G2", "Total"]);
        let options = SpecRenderOptions {
            sentinel_label: Some("Total".to_string()),
            title: Some("Accuracy".to_string()),
            ..Default::default()
        };
        let ctx = SpecRenderContext::new(&table, SpecPlacement::new(3, 1), &options);
        let layout = plan_table_layout(&ctx).expect("plan").expect("non-empty");

        let l_classes: Vec<EnumStyleClass> =
            layout.style_layers.iter().map(|(_, class)| *class).collect();
        assert_eq!(
            l_classes,
            vec![
                EnumStyleClass::Value,
                EnumStyleClass::ValueHighlightedZone,
                EnumStyleClass::Header,
                EnumStyleClass::Index,
                EnumStyleClass::IndexLast,
                EnumStyleClass::Index,
                EnumStyleClass::Title,
            ]
        );
        // Sentinel row is the third value row: grid row 3 + 1 + 1 + 2.
        assert_eq!(layout.style_layers[1].0, region(7, 4, 7, 5));
        // Title sits one row above the anchor, spanning index and header columns.
        assert_eq!(layout.title_cell, Some(region(2, 2, 2, 5)));
        assert_eq!(layout.merges.last(), Some(&region(2, 2, 2, 5)));
    }

    #[test]
    fn test_title_needs_room_above_anchor() {
        let table = grouped_table();
        let options = SpecRenderOptions {
            title: Some("Accuracy".to_string()),
            ..Default::default()
        };
        let ctx = SpecRenderContext::new(&table, SpecPlacement::new(1, 1), &options);
        assert!(matches!(
            plan_table_layout(&ctx),
            Err(GridError::InvalidArgument(_))
        ));

        let options_empty_title = SpecRenderOptions {
            title: Some(String::new()),
            ..Default::default()
        };
        let ctx = SpecRenderContext::new(&table, SpecPlacement::new(1, 1), &options_empty_title);
        let layout = plan_table_layout(&ctx).expect("plan").expect("non-empty");
        assert_eq!(layout.title_cell, None);
    }

    #[test]
    fn test_dimension_mismatch_leaves_canvas_untouched() {
        let mut table = grouped_table();
        table.col_labels[1] = strings(&["mape", "extra"]);
        let options = SpecRenderOptions::default();
        let ctx = SpecRenderContext::new(&table, SpecPlacement::new(1, 1), &options);

        let mut canvas = GridCanvas::new();
        assert!(matches!(
            render_hierarchical_table(&mut canvas, &ctx),
            Err(GridError::DimensionMismatch(_))
        ));
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_zero_row_table_is_noop() {
        let table = SpecHierarchicalTable::new(vec![], vec![], vec![strings(&["v"])]);
        let options = SpecRenderOptions::default();
        let ctx = SpecRenderContext::new(&table, SpecPlacement::new(4, 4), &options);

        let mut canvas = GridCanvas::new();
        let outcome = render_hierarchical_table(&mut canvas, &ctx).expect("render");
        assert!(outcome.is_none());
        assert!(canvas.is_empty());
    }
}
