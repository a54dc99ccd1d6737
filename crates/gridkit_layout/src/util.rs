//! Stateless helpers shared by the layout engine and table writer.

use crate::error::{GridError, Result};

////////////////////////////////////////////////////////////////////////////////
// #region LabelRuns

/// Plan mergeable label runs `(start, end)`, inclusive and zero-based.
///
/// A run ends where a non-empty label differs from the run's label. Empty
/// labels continue the current run; leading empty labels belong to no run.
/// The last run closes at the final position. Single-position runs are
/// dropped since there is nothing to merge.
pub fn plan_label_runs(labels: &[String]) -> Vec<(usize, usize)> {
    let mut l_runs = Vec::new();
    let mut run_current: Option<(usize, &str)> = None;

    for (n_idx, c_label) in labels.iter().map(String::as_str).enumerate() {
        if c_label.is_empty() {
            continue;
        }
        match run_current {
            None => run_current = Some((n_idx, c_label)),
            Some((n_idx_start, c_run_label)) if c_run_label != c_label => {
                if n_idx - 1 > n_idx_start {
                    l_runs.push((n_idx_start, n_idx - 1));
                }
                run_current = Some((n_idx, c_label));
            }
            Some(_) => {}
        }
    }

    if let Some((n_idx_start, _)) = run_current {
        let n_idx_end = labels.len() - 1;
        if n_idx_end > n_idx_start {
            l_runs.push((n_idx_start, n_idx_end));
        }
    }

    l_runs
}

/// Convert sorted indices to contiguous inclusive ranges.
pub fn derive_contiguous_ranges(sorted_indices: &[usize]) -> Vec<(usize, usize)> {
    let Some((&n_first, l_rest)) = sorted_indices.split_first() else {
        return vec![];
    };

    let mut l_contiguous_ranges = Vec::new();
    let mut n_idx_start = n_first;
    let mut n_idx_end = n_first;

    for idx in l_rest {
        if *idx == n_idx_end + 1 {
            n_idx_end = *idx;
        } else {
            l_contiguous_ranges.push((n_idx_start, n_idx_end));
            n_idx_start = *idx;
            n_idx_end = *idx;
        }
    }

    l_contiguous_ranges.push((n_idx_start, n_idx_end));
    l_contiguous_ranges
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CoordinateArithmetic

/// `base + delta` as a grid coordinate, failing on overflow.
pub fn offset_coord(base: u32, delta: usize) -> Result<u32> {
    u32::try_from(delta)
        .ok()
        .and_then(|n_delta| base.checked_add(n_delta))
        .ok_or_else(|| {
            GridError::InvalidArgument(format!("Grid coordinate overflow: {base} + {delta}."))
        })
}

/// Table extent as a grid length, failing on overflow.
pub fn cast_extent(value: usize) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| GridError::InvalidArgument(format!("Table extent overflow: {value}.")))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_plan_label_runs_merges_repeated_group() {
        assert_eq!(plan_label_runs(&labels(&["G1", "G1", "G2"])), vec![(0, 1)]);
        assert_eq!(plan_label_runs(&labels(&["a", "b", "c"])), Vec::<(usize, usize)>::new());
    }

    #[test]
    fn test_plan_label_runs_empty_label_continues_run() {
        assert_eq!(plan_label_runs(&labels(&["X", "", "Y"])), vec![(0, 1)]);
        assert_eq!(
            plan_label_runs(&labels(&["X", "", "", "Y", ""])),
            vec![(0, 2), (3, 4)]
        );
    }

    #[test]
    fn test_plan_label_runs_leading_empty_labels_are_unmerged() {
        assert_eq!(plan_label_runs(&labels(&["", "", "A", "A"])), vec![(2, 3)]);
        assert_eq!(plan_label_runs(&labels(&["", ""])), Vec::<(usize, usize)>::new());
        assert_eq!(plan_label_runs(&[]), Vec::<(usize, usize)>::new());
    }

    #[test]
    fn test_plan_label_runs_same_label_after_gap_is_one_run() {
        assert_eq!(plan_label_runs(&labels(&["A", "", "A", "B"])), vec![(0, 2)]);
    }

    #[test]
    fn test_derive_contiguous_ranges() {
        assert_eq!(
            derive_contiguous_ranges(&[1, 2, 3, 7, 9, 10]),
            vec![(1, 3), (7, 7), (9, 10)]
        );
        assert_eq!(derive_contiguous_ranges(&[]), Vec::<(usize, usize)>::new());
    }

    #[test]
    fn test_offset_coord_overflow() {
        assert_eq!(offset_coord(3, 4).expect("offset"), 7);
        assert!(offset_coord(u32::MAX, 1).is_err());
    }
}
