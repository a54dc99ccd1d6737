//! Sheet orchestration: dispatch each table to the layout engine or the flat
//! writer and collect a render report.

use log::{debug, warn};

use crate::canvas::GridCanvas;
use crate::error::Result;
use crate::layout::render_hierarchical_table;
use crate::spec::{SpecRegion, SpecRenderReport, SpecSheetContent};
use crate::table_writer::{
    build_structured_table, commit_structured_table, derive_flat_table_region, write_flat_table,
};

/// Render one table onto `canvas`.
///
/// Returns the occupied region, or `Ok(None)` when an empty table was
/// skipped by the layout engine. The flat writer reports empty tables as
/// [`crate::error::GridError::EmptyTable`].
pub fn render_table(
    canvas: &mut GridCanvas,
    content: &SpecSheetContent,
) -> Result<Option<SpecRegion>> {
    let ctx = content.context();
    let options = ctx.options;
    options.validate()?;

    if options.if_hierarchical_format {
        let layout = render_hierarchical_table(canvas, &ctx)?;
        return Ok(layout.map(|layout| layout.extent()));
    }

    // Every check runs before the first write.
    let region = derive_flat_table_region(
        ctx.table,
        ctx.placement,
        options.if_include_index,
        options.if_include_header,
    )?;
    let table_structured = if options.if_as_structured_table {
        Some(build_structured_table(
            canvas,
            region,
            options.structured_table_name.as_deref(),
            options.if_include_header,
        )?)
    } else {
        None
    };

    write_flat_table(
        canvas,
        ctx.table,
        ctx.placement,
        options.if_include_index,
        options.if_include_header,
    )?;
    if let Some(table_structured) = table_structured {
        commit_structured_table(canvas, table_structured)?;
    }
    Ok(Some(region))
}

/// Render every table of a sheet in order onto a fresh canvas.
///
/// Benign no-ops are skipped and counted; any other error aborts the sheet.
pub fn render_sheet(contents: &[SpecSheetContent]) -> Result<(GridCanvas, SpecRenderReport)> {
    let mut canvas = GridCanvas::new();
    let mut report = SpecRenderReport::default();

    for (n_idx, content) in contents.iter().enumerate() {
        match render_table(&mut canvas, content) {
            Ok(Some(region)) => {
                if let Some(existing) = report.regions.iter().find(|other| other.overlaps(&region)) {
                    let c_msg = format!(
                        "Table {n_idx} at {region} overlaps earlier table at {existing}."
                    );
                    warn!("{c_msg}");
                    report.warn(c_msg);
                }
                report.n_tables_rendered += 1;
                report.regions.push(region);
            }
            Ok(None) => {
                debug!("Table {n_idx} is empty; skipped.");
                report.n_tables_skipped += 1;
            }
            Err(err) if err.is_benign() => {
                debug!("Table {n_idx} skipped: {err}");
                report.n_tables_skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    debug!(
        "Rendered sheet: {} tables, {} skipped",
        report.n_tables_rendered, report.n_tables_skipped
    );
    Ok((canvas, report))
}
