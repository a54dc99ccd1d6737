//! DataFrame ingestion: build a [`SpecHierarchicalTable`] from Polars data.

use std::collections::BTreeSet;
use std::io::Cursor;

use polars::prelude::{AnyValue, Column, DataFrame, IpcReader, SerReader};

use crate::error::{GridError, Result};
use crate::spec::{EnumCellValue, SpecHierarchicalTable};

impl SpecHierarchicalTable {
    /// Build a table from a DataFrame.
    ///
    /// `cols_index` names the columns that become row-label levels, in
    /// order; every other column becomes a value column. Column labels come
    /// from `df_header` when given (one row per level, one column per value
    /// column) and from the column names otherwise.
    pub fn try_from_dataframe(
        df: &DataFrame,
        cols_index: &[&str],
        df_header: Option<&DataFrame>,
    ) -> Result<Self> {
        if cols_index.is_empty() {
            return Err(GridError::InvalidArgument(
                "At least one index column is required.".to_string(),
            ));
        }
        let set_cols_index: BTreeSet<&str> = cols_index.iter().copied().collect();
        if set_cols_index.len() != cols_index.len() {
            return Err(GridError::InvalidArgument(format!(
                "Duplicated index columns: {cols_index:?}."
            )));
        }

        let l_cols_index = cols_index
            .iter()
            .map(|c_name| {
                df.column(c_name).map_err(|_| {
                    GridError::InvalidArgument(format!("Index column {c_name:?} not found."))
                })
            })
            .collect::<Result<Vec<&Column>>>()?;
        let l_cols_value: Vec<&Column> = df
            .get_columns()
            .iter()
            .filter(|col| !set_cols_index.contains(col.name().as_str()))
            .collect();

        let n_height = df.height();
        let mut row_labels = Vec::with_capacity(n_height);
        let mut values = Vec::with_capacity(n_height);
        for n_idx_row in 0..n_height {
            row_labels.push(
                l_cols_index
                    .iter()
                    .map(|col| read_any_value(col, n_idx_row).map(derive_label_from_any_value))
                    .collect::<Result<Vec<String>>>()?,
            );
            values.push(
                l_cols_value
                    .iter()
                    .map(|col| read_any_value(col, n_idx_row).map(derive_cell_value_from_any_value))
                    .collect::<Result<Vec<EnumCellValue>>>()?,
            );
        }

        let col_labels = match df_header {
            Some(df_header) => derive_col_labels_from_header(df_header, l_cols_value.len())?,
            None => l_cols_value
                .iter()
                .map(|col| vec![col.name().to_string()])
                .collect(),
        };
        let col_levels = df_header.map_or(1, DataFrame::height);

        let table = Self {
            values,
            row_labels,
            col_labels,
            row_levels: cols_index.len(),
            col_levels,
            row_level_names: Some(cols_index.iter().map(ToString::to_string).collect()),
        };
        table.validate()?;
        Ok(table)
    }

    /// Decode IPC-serialized DataFrames, then build via [`Self::try_from_dataframe`].
    pub fn try_from_ipc_bytes(
        v_ipc_df: &[u8],
        cols_index: &[&str],
        v_ipc_header: Option<&[u8]>,
    ) -> Result<Self> {
        let df = derive_dataframe_from_ipc_bytes(v_ipc_df)?;
        let df_header = v_ipc_header
            .map(derive_dataframe_from_ipc_bytes)
            .transpose()?;
        Self::try_from_dataframe(&df, cols_index, df_header.as_ref())
    }
}

fn derive_dataframe_from_ipc_bytes(v_ipc_df: &[u8]) -> Result<DataFrame> {
    IpcReader::new(Cursor::new(v_ipc_df))
        .finish()
        .map_err(|err| GridError::InvalidArgument(format!("Failed to read IPC DataFrame bytes: {err}")))
}

fn derive_col_labels_from_header(df_header: &DataFrame, n_cols_value: usize) -> Result<Vec<Vec<String>>> {
    if df_header.height() == 0 {
        return Err(GridError::InvalidArgument(
            "Header frame must have at least one row.".to_string(),
        ));
    }
    if df_header.width() != n_cols_value {
        return Err(GridError::InvalidArgument(format!(
            "Header frame has {} columns; data has {n_cols_value} value columns.",
            df_header.width()
        )));
    }

    // One header column per value column, one header row per level.
    df_header
        .get_columns()
        .iter()
        .map(|col| {
            (0..df_header.height())
                .map(|n_idx_row| read_any_value(col, n_idx_row).map(derive_label_from_any_value))
                .collect::<Result<Vec<String>>>()
        })
        .collect()
}

fn read_any_value(col: &Column, n_idx_row: usize) -> Result<AnyValue<'_>> {
    col.get(n_idx_row).map_err(|err| {
        GridError::InvalidArgument(format!(
            "Failed to read row {n_idx_row} of column {:?}: {err}",
            col.name().as_str()
        ))
    })
}

fn derive_label_from_any_value(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(val) => val.to_string(),
        AnyValue::StringOwned(val) => val.to_string(),
        _ => value.to_string(),
    }
}

fn derive_cell_value_from_any_value(value: AnyValue<'_>) -> EnumCellValue {
    match value {
        AnyValue::Null => EnumCellValue::None,
        AnyValue::String(val) => EnumCellValue::String(val.to_string()),
        AnyValue::StringOwned(val) => EnumCellValue::String(val.to_string()),
        AnyValue::Boolean(val) => {
            EnumCellValue::String(if val { "True" } else { "False" }.to_string())
        }
        AnyValue::UInt8(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt16(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt32(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt64(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int8(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int16(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int32(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int64(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int128(val) => EnumCellValue::Number(val as f64),
        AnyValue::Float32(val) => EnumCellValue::Number(val as f64),
        AnyValue::Float64(val) => EnumCellValue::Number(val),
        _ => EnumCellValue::String(value.to_string()),
    }
}
