//! `gridkit_layout` v1:
//! Hierarchical table layout onto an in-memory spreadsheet grid.
//!
//! Modules:
//! - `conf`         : constants and default presets
//! - `spec`         : specs/models/options
//! - `error`        : error types
//! - `codec`        : column-letter addressing
//! - `util`         : pure helper functions
//! - `catalog`      : style class to format mapping
//! - `canvas`       : mutable grid canvas
//! - `highlight`    : conditional highlight rules
//! - `layout`       : hierarchical layout engine
//! - `table_writer` : flat tables and structured tables
//! - `report`       : sheet orchestration
//! - `frame`        : Polars DataFrame ingestion
pub mod canvas;
pub mod catalog;
pub mod codec;
pub mod conf;
pub mod error;
pub mod frame;
pub mod highlight;
pub mod layout;
pub mod report;
pub mod spec;
pub mod table_writer;
pub mod util;

pub use canvas::{GridCanvas, SpecCanvasCell};
pub use catalog::SpecStyleCatalog;
pub use codec::{column_index_to_label, column_label_to_index, derive_cell_ref, derive_range_ref};
pub use conf::{
    C_STRUCTURED_TABLE_STYLE, N_HIGHLIGHT_THRESHOLD_DEFAULT, N_WIDTH_INDEX_COL_DEFAULT,
    N_WIDTH_STRUCTURED_TABLE_COL, derive_default_render_options, derive_default_style_catalog,
};
pub use error::{EnumErrorCategory, GridError, Result};
pub use highlight::{build_highlight_rules, build_row_highlight_rule};
pub use layout::{
    SpecTableBlocks, SpecTableLayout, derive_table_blocks, plan_table_layout,
    render_hierarchical_table,
};
pub use report::{render_sheet, render_table};
pub use spec::{
    EnumCellValue, EnumCompareOperator, EnumStyleClass, SpecCellFormat, SpecHierarchicalTable,
    SpecHighlightRule, SpecPlacement, SpecRegion, SpecRenderContext, SpecRenderOptions,
    SpecRenderReport, SpecSheetContent, SpecStructuredTable,
};
pub use table_writer::{
    build_structured_table, commit_structured_table, convert_to_structured_table,
    derive_flat_table_region, write_flat_table,
};
