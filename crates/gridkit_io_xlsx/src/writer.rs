//! Worksheet writer kernel that materializes a finished grid canvas.

use std::collections::{BTreeMap, BTreeSet};

use gridkit_layout::{
    EnumCellValue, EnumCompareOperator, EnumStyleClass, GridCanvas, SpecCellFormat,
    SpecHighlightRule, SpecRegion, SpecStructuredTable, SpecStyleCatalog,
};
use log::{debug, warn};
use rust_xlsxwriter::{
    ColNum, ConditionalFormatCell, ConditionalFormatCellRule, Format, FormatAlign, FormatBorder,
    RowNum, Table, TableColumn, TableStyle, Worksheet,
};

use crate::conf::{N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX};
use crate::error::{Result, XlsxRenderError};
use crate::spec::SpecXlsxReport;

/// Write every value, merge, highlight rule, table and width of `canvas`
/// onto `worksheet`, resolving style classes through `catalog`.
///
/// Canvas coordinates are 1-based; the worksheet API is 0-based.
pub fn write_canvas_to_worksheet(
    worksheet: &mut Worksheet,
    canvas: &GridCanvas,
    catalog: &SpecStyleCatalog,
) -> Result<SpecXlsxReport> {
    let mut report = SpecXlsxReport::default();
    let dict_formats: BTreeMap<EnumStyleClass, Format> = EnumStyleClass::ALL
        .iter()
        .map(|class| (*class, derive_rust_xlsx_format(catalog.resolve(*class))))
        .collect();
    let fmt_plain = Format::new();
    let resolve_format =
        |class: Option<EnumStyleClass>| resolve_class_format(&dict_formats, &fmt_plain, class);

    for cell in canvas.iter_cells() {
        if canvas.merge_at(cell.row, cell.col).is_some() {
            continue;
        }
        write_cell_with_format(
            worksheet,
            cell.row,
            cell.col,
            cell.value.unwrap_or(&EnumCellValue::None),
            resolve_format(cell.style),
        )?;
        report.n_cells_written += 1;
    }

    for merge in canvas.merges() {
        let value_anchor = canvas
            .cell_value(merge.top_row, merge.left_col)
            .unwrap_or(&EnumCellValue::None);
        let fmt_anchor = resolve_format(canvas.cell_style(merge.top_row, merge.left_col));
        write_merge_with_format(worksheet, merge, value_anchor, fmt_anchor)?;
        report.n_merges_written += 1;
    }

    for rule in canvas.highlight_rules() {
        write_highlight_rule(worksheet, rule, resolve_format(Some(rule.style)))?;
        report.n_highlight_rules_written += 1;
    }

    for table in canvas.structured_tables() {
        write_structured_table(worksheet, canvas, table, &mut report)?;
        report.n_tables_written += 1;
    }

    for (col, width) in canvas.column_widths() {
        worksheet.set_column_width(cast_col_num(col)?, width)?;
        report.n_col_widths_written += 1;
    }

    debug!(
        "Materialized canvas: cells={} merges={} rules={} tables={} widths={}",
        report.n_cells_written,
        report.n_merges_written,
        report.n_highlight_rules_written,
        report.n_tables_written,
        report.n_col_widths_written
    );
    Ok(report)
}

////////////////////////////////////////////////////////////////////////////////
// #region CellWrites

fn resolve_class_format<'a>(
    dict_formats: &'a BTreeMap<EnumStyleClass, Format>,
    fmt_plain: &'a Format,
    class: Option<EnumStyleClass>,
) -> &'a Format {
    class
        .and_then(|class| dict_formats.get(&class))
        .unwrap_or(fmt_plain)
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row: u32,
    col: u32,
    value: &EnumCellValue,
    format: &Format,
) -> Result<()> {
    let (row_num, col_num) = (cast_row_num(row)?, cast_col_num(col)?);
    match value {
        EnumCellValue::None => {
            worksheet.write_blank(row_num, col_num, format)?;
        }
        EnumCellValue::String(val) => {
            worksheet.write_string_with_format(row_num, col_num, val, format)?;
        }
        EnumCellValue::Number(val) => {
            worksheet.write_number_with_format(row_num, col_num, *val, format)?;
        }
    }
    Ok(())
}

/// Merge `region`; a numeric anchor is rewritten after the merge.
fn write_merge_with_format(
    worksheet: &mut Worksheet,
    region: &SpecRegion,
    value_anchor: &EnumCellValue,
    format: &Format,
) -> Result<()> {
    let (row_first, col_first, row_last, col_last) = cast_region(region)?;
    let c_text = match value_anchor {
        EnumCellValue::String(val) => val.as_str(),
        EnumCellValue::None | EnumCellValue::Number(_) => "",
    };
    worksheet.merge_range(row_first, col_first, row_last, col_last, c_text, format)?;
    if let EnumCellValue::Number(val) = value_anchor {
        worksheet.write_number_with_format(row_first, col_first, *val, format)?;
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetMetadata

fn write_highlight_rule(
    worksheet: &mut Worksheet,
    rule: &SpecHighlightRule,
    format: &Format,
) -> Result<()> {
    let (row_first, col_first, row_last, col_last) = cast_region(&rule.region)?;
    let n_thr = rule.threshold;
    let cf_rule = match rule.operator {
        EnumCompareOperator::GreaterThanOrEqual => {
            ConditionalFormatCellRule::GreaterThanOrEqualTo(n_thr)
        }
        EnumCompareOperator::GreaterThan => ConditionalFormatCellRule::GreaterThan(n_thr),
        EnumCompareOperator::LessThanOrEqual => ConditionalFormatCellRule::LessThanOrEqualTo(n_thr),
        EnumCompareOperator::LessThan => ConditionalFormatCellRule::LessThan(n_thr),
        EnumCompareOperator::EqualTo => ConditionalFormatCellRule::EqualTo(n_thr),
        EnumCompareOperator::NotEqualTo => ConditionalFormatCellRule::NotEqualTo(n_thr),
    };
    let conditional_format = ConditionalFormatCell::new()
        .set_rule(cf_rule)
        .set_format(format);
    worksheet.add_conditional_format(
        row_first,
        col_first,
        row_last,
        col_last,
        &conditional_format,
    )?;
    Ok(())
}

fn write_structured_table(
    worksheet: &mut Worksheet,
    canvas: &GridCanvas,
    spec: &SpecStructuredTable,
    report: &mut SpecXlsxReport,
) -> Result<()> {
    let (row_first, col_first, row_last, col_last) = cast_region(&spec.region)?;

    let table_style = derive_table_style(&spec.style_name).unwrap_or_else(|| {
        let c_msg = format!(
            "Unknown table style {:?} for table {}; using TableStyleLight1.",
            spec.style_name, spec.name
        );
        warn!("{c_msg}");
        report.warn(c_msg);
        TableStyle::Light1
    });

    let mut table = Table::new()
        .set_name(&spec.name)
        .set_style(table_style)
        .set_banded_rows(spec.if_banded_rows)
        .set_banded_columns(spec.if_banded_columns)
        .set_header_row(spec.if_header_row);

    if spec.if_header_row {
        let l_headers = derive_unique_headers(canvas, &spec.region, report);
        let l_columns: Vec<TableColumn> = l_headers
            .iter()
            .map(|c_header| TableColumn::new().set_header(c_header))
            .collect();
        table = table.set_columns(&l_columns);
    }

    worksheet.add_table(row_first, col_first, row_last, col_last, &table)?;
    Ok(())
}

/// Header texts from the first row of `region`; blanks and duplicates are renamed.
fn derive_unique_headers(
    canvas: &GridCanvas,
    region: &SpecRegion,
    report: &mut SpecXlsxReport,
) -> Vec<String> {
    let mut set_seen: BTreeSet<String> = BTreeSet::new();
    let mut l_headers = Vec::with_capacity(region.width() as usize);

    for (n_idx, col) in (region.left_col..=region.right_col).enumerate() {
        let c_base = canvas
            .cell_value(region.top_row, col)
            .filter(|value| !value.is_blank())
            .map(EnumCellValue::to_text)
            .unwrap_or_else(|| format!("Column{}", n_idx + 1));

        let mut c_header = c_base.clone();
        let mut n_suffix = 2;
        while !set_seen.insert(c_header.to_lowercase()) {
            c_header = format!("{c_base}{n_suffix}");
            n_suffix += 1;
        }
        if c_header != c_base {
            report.warn(format!(
                "Duplicated table header {c_base:?} renamed to {c_header:?}."
            ));
        }
        l_headers.push(c_header);
    }

    l_headers
}

fn derive_table_style(name: &str) -> Option<TableStyle> {
    match name {
        "None" | "" => Some(TableStyle::None),
        "TableStyleLight1" => Some(TableStyle::Light1),
        "TableStyleLight8" => Some(TableStyle::Light8),
        "TableStyleLight9" => Some(TableStyle::Light9),
        "TableStyleLight15" => Some(TableStyle::Light15),
        "TableStyleMedium2" => Some(TableStyle::Medium2),
        "TableStyleMedium9" => Some(TableStyle::Medium9),
        "TableStyleMedium15" => Some(TableStyle::Medium15),
        "TableStyleDark1" => Some(TableStyle::Dark1),
        _ => None,
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FormatConversion

/// Convert a [`SpecCellFormat`] into a worksheet format.
pub fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = &spec.font_name {
        format = format.set_font_name(val.clone());
    }
    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if spec.italic.unwrap_or(false) {
        format = format.set_italic();
    }

    for val in [&spec.align, &spec.valign].into_iter().flatten() {
        if let Some(align) = derive_format_align(val) {
            format = format.set_align(align);
        }
    }

    if let Some(val) = &spec.num_format {
        format = format.set_num_format(val.clone());
    }
    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(val.as_str());
    }
    if let Some(val) = &spec.font_color {
        format = format.set_font_color(val.as_str());
    }

    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }
    if let Some(val) = spec.top {
        format = format.set_border_top(derive_format_border(val));
    }
    if let Some(val) = spec.bottom {
        format = format.set_border_bottom(derive_format_border(val));
    }
    if let Some(val) = spec.left {
        format = format.set_border_left(derive_format_border(val));
    }
    if let Some(val) = spec.right {
        format = format.set_border_right(derive_format_border(val));
    }

    if spec.text_wrap.unwrap_or(false) {
        format = format.set_text_wrap();
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        3 => FormatBorder::Dashed,
        4 => FormatBorder::Dotted,
        5 => FormatBorder::Thick,
        6 => FormatBorder::Double,
        7 => FormatBorder::Hair,
        8 => FormatBorder::MediumDashed,
        9 => FormatBorder::DashDot,
        10 => FormatBorder::MediumDashDot,
        11 => FormatBorder::DashDotDot,
        12 => FormatBorder::MediumDashDotDot,
        13 => FormatBorder::SlantDashDot,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    match align.trim().to_ascii_lowercase().as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "fill" => Some(FormatAlign::Fill),
        "justify" => Some(FormatAlign::Justify),
        "center_across" => Some(FormatAlign::CenterAcross),
        "distributed" => Some(FormatAlign::Distributed),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        "vjustify" | "vertical_justify" => Some(FormatAlign::VerticalJustify),
        "vdistributed" | "vertical_distributed" => Some(FormatAlign::VerticalDistributed),
        _ => None,
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CoordinateCasts

fn cast_row_num(row: u32) -> Result<RowNum> {
    if row == 0 || row > N_NROWS_EXCEL_MAX {
        return Err(XlsxRenderError::RowOutOfRange(row));
    }
    Ok(row - 1)
}

fn cast_col_num(col: u32) -> Result<ColNum> {
    if col == 0 || col > N_NCOLS_EXCEL_MAX {
        return Err(XlsxRenderError::ColumnOutOfRange(col));
    }
    ColNum::try_from(col - 1).map_err(|_| XlsxRenderError::ColumnOutOfRange(col))
}

fn cast_region(region: &SpecRegion) -> Result<(RowNum, ColNum, RowNum, ColNum)> {
    Ok((
        cast_row_num(region.top_row)?,
        cast_col_num(region.left_col)?,
        cast_row_num(region.bottom_row)?,
        cast_col_num(region.right_col)?,
    ))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
