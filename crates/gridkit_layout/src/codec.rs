//! Column-address codec: bijective base-26 column labels and A1 references.
//!
//! `1 -> "A"`, `26 -> "Z"`, `27 -> "AA"`, `702 -> "ZZ"`, `703 -> "AAA"`.
//! There is no zero digit, so every label maps to exactly one index.

use crate::error::{GridError, Result};
use crate::spec::SpecRegion;

const N_ALPHABET_LEN: u32 = 26;

/// Encode a 1-based column index as its alphabetic label.
pub fn column_index_to_label(n_col: u32) -> Result<String> {
    if n_col < 1 {
        return Err(GridError::InvalidArgument(format!(
            "Column index must be >= 1; got {n_col}."
        )));
    }

    let mut n_rest = n_col;
    let mut l_letters = Vec::new();
    while n_rest > 0 {
        n_rest -= 1;
        let n_digit = (n_rest % N_ALPHABET_LEN) as u8;
        l_letters.push(char::from(b'A' + n_digit));
        n_rest /= N_ALPHABET_LEN;
    }

    Ok(l_letters.iter().rev().collect())
}

/// Decode an alphabetic column label (case-insensitive) to its 1-based index.
pub fn column_label_to_index(label: &str) -> Result<u32> {
    if label.is_empty() {
        return Err(GridError::InvalidArgument(
            "Column label must not be empty.".to_string(),
        ));
    }

    let mut n_col: u32 = 0;
    for chr in label.chars() {
        if !chr.is_ascii_alphabetic() {
            return Err(GridError::InvalidArgument(format!(
                "Column label {label:?} contains non-letter character {chr:?}."
            )));
        }
        let n_digit = u32::from(chr.to_ascii_uppercase() as u8 - b'A') + 1;
        n_col = n_col
            .checked_mul(N_ALPHABET_LEN)
            .and_then(|val| val.checked_add(n_digit))
            .ok_or_else(|| {
                GridError::InvalidArgument(format!("Column label {label:?} is too long."))
            })?;
    }

    Ok(n_col)
}

/// A1-style reference of one cell, e.g. `(10, 6) -> "F10"`.
pub fn derive_cell_ref(row: u32, col: u32) -> Result<String> {
    if row < 1 {
        return Err(GridError::InvalidArgument(format!(
            "Row index must be >= 1; got {row}."
        )));
    }
    Ok(format!("{}{row}", column_index_to_label(col)?))
}

/// A1-style range expression, e.g. `F10:I10`; single cells render as `F10`.
pub fn derive_range_ref(region: &SpecRegion) -> Result<String> {
    let c_top_left = derive_cell_ref(region.top_row, region.left_col)?;
    if region.is_single_cell() {
        return Ok(c_top_left);
    }
    let c_bottom_right = derive_cell_ref(region.bottom_row, region.right_col)?;
    Ok(format!("{c_top_left}:{c_bottom_right}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index_to_label_known_values() {
        for (n_col, c_label) in [
            (1, "A"),
            (26, "Z"),
            (27, "AA"),
            (52, "AZ"),
            (53, "BA"),
            (702, "ZZ"),
            (703, "AAA"),
            (16_384, "XFD"),
        ] {
            assert_eq!(column_index_to_label(n_col).expect("label"), c_label);
            assert_eq!(column_label_to_index(c_label).expect("index"), n_col);
        }
    }

    #[test]
    fn test_round_trip_first_thousand_columns() {
        for n_col in 1..=1000 {
            let c_label = column_index_to_label(n_col).expect("label");
            assert_eq!(column_label_to_index(&c_label).expect("index"), n_col);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            column_index_to_label(0),
            Err(GridError::InvalidArgument(_))
        ));
        for c_label in ["", "A1", "$A", "Ä"] {
            assert!(
                matches!(
                    column_label_to_index(c_label),
                    Err(GridError::InvalidArgument(_))
                ),
                "label {c_label:?} should be rejected"
            );
        }
        assert!(matches!(
            column_label_to_index("ZZZZZZZZZZ"),
            Err(GridError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_lowercase_labels_are_accepted() {
        assert_eq!(column_label_to_index("az").expect("index"), 52);
    }

    #[test]
    fn test_range_ref() {
        let region = SpecRegion::try_new(10, 6, 10, 9).expect("region");
        assert_eq!(derive_range_ref(&region).expect("range"), "F10:I10");

        let cell = SpecRegion::try_cell(3, 27).expect("cell");
        assert_eq!(derive_range_ref(&cell).expect("range"), "AA3");
    }
}
