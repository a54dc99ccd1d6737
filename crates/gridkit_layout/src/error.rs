//! Error types for layout, canvas and codec operations.

use thiserror::Error;

use crate::spec::SpecRegion;

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Coarse error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumErrorCategory {
    /// Caller-supplied data violates a structural invariant.
    Argument,
    /// The caller sequenced canvas operations incorrectly.
    State,
    /// Nothing to do; the operation is skipped.
    Benign,
}

/// Error types for layout, canvas and codec operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Malformed scalar argument (zero coordinate, bad column label, bad name).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Label tuples or value rows do not match the declared shape.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Empty or inverted rectangle where a real range is required.
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Merge region intersects a previously declared merge.
    #[error("Merge region {region} overlaps existing merge {existing}")]
    OverlappingMerge {
        region: SpecRegion,
        existing: SpecRegion,
    },

    /// Structured table intersects a previously declared table or merge.
    #[error("Structured table region {region} overlaps {existing}")]
    OverlappingTable {
        region: SpecRegion,
        existing: SpecRegion,
    },

    /// Table has no rows (or nothing else to write).
    #[error("Table is empty; nothing to render")]
    EmptyTable,
}

impl GridError {
    pub fn category(&self) -> EnumErrorCategory {
        match self {
            Self::InvalidArgument(_) | Self::DimensionMismatch(_) | Self::InvalidRange(_) => {
                EnumErrorCategory::Argument
            }
            Self::OverlappingMerge { .. } | Self::OverlappingTable { .. } => {
                EnumErrorCategory::State
            }
            Self::EmptyTable => EnumErrorCategory::Benign,
        }
    }

    /// `true` when the caller should skip the operation and continue.
    pub fn is_benign(&self) -> bool {
        self.category() == EnumErrorCategory::Benign
    }
}
