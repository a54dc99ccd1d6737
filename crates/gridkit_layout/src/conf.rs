//! Layout constants and default preset factories.

use crate::catalog::SpecStyleCatalog;
use crate::spec::{SpecCellFormat, SpecRenderOptions};

/// Default highlight threshold (an 80% accuracy floor).
pub const N_HIGHLIGHT_THRESHOLD_DEFAULT: f64 = 0.8;
/// Fixed column width of structured tables.
pub const N_WIDTH_STRUCTURED_TABLE_COL: f64 = 18.0;
/// Default width of hierarchical index columns.
pub const N_WIDTH_INDEX_COL_DEFAULT: f64 = 30.0;

/// Built-in style of structured tables.
pub const C_STRUCTURED_TABLE_STYLE: &str = "TableStyleLight1";
/// Prefix of canvas-assigned structured table names (`Table1`, `Table2`, ...).
pub const C_STRUCTURED_TABLE_NAME_PREFIX: &str = "Table";

/// Number format of value cells.
pub const C_NUM_FORMAT_PERCENT: &str = "0.00%";
pub const C_COLOR_MED_GREY: &str = "#A6A6A6";
pub const C_COLOR_LIGHT_GREY: &str = "#BFBFBF";
pub const C_COLOR_LIGHT_GREEN: &str = "#CCEBCE";
pub const C_COLOR_DARK_GREEN: &str = "#286017";

/// Thin border code in [`SpecCellFormat`] border fields.
pub const N_BORDER_THIN: i64 = 1;

/// Build the default style catalog.
pub fn derive_default_style_catalog() -> SpecStyleCatalog {
    let cfg_bordered = SpecCellFormat {
        border: Some(N_BORDER_THIN),
        ..Default::default()
    };
    let cfg_label = cfg_bordered.with_(SpecCellFormat {
        bold: Some(true),
        bg_color: Some(C_COLOR_MED_GREY.to_string()),
        ..Default::default()
    });
    let cfg_value = cfg_bordered.with_(SpecCellFormat {
        num_format: Some(C_NUM_FORMAT_PERCENT.to_string()),
        ..Default::default()
    });

    SpecStyleCatalog {
        title: SpecCellFormat {
            bold: Some(true),
            font_size: Some(18),
            align: Some("center".to_string()),
            ..Default::default()
        },
        header: cfg_label.clone(),
        index: cfg_label.clone(),
        index_last: cfg_label.with_(SpecCellFormat {
            bg_color: Some(C_COLOR_LIGHT_GREY.to_string()),
            ..Default::default()
        }),
        value: cfg_value.clone(),
        value_highlighted_zone: cfg_value.with_(SpecCellFormat {
            bg_color: Some(C_COLOR_MED_GREY.to_string()),
            ..Default::default()
        }),
        highlight: SpecCellFormat {
            font_color: Some(C_COLOR_DARK_GREEN.to_string()),
            bg_color: Some(C_COLOR_LIGHT_GREEN.to_string()),
            ..Default::default()
        },
    }
}

/// Build default render options.
pub fn derive_default_render_options() -> SpecRenderOptions {
    SpecRenderOptions::default()
}
