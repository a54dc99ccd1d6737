//! Conditional highlight rules for rows of a value block.

use crate::codec::derive_range_ref;
use crate::error::{GridError, Result};
use crate::spec::{EnumCompareOperator, EnumStyleClass, SpecHighlightRule, SpecRegion};

/// Build the `>= threshold` rule covering one value row.
///
/// `row` and `left_col` are absolute 1-based grid coordinates; the range
/// expression is derived from them, not from table-relative indices.
pub fn build_row_highlight_rule(
    row: u32,
    left_col: u32,
    width: u32,
    threshold: f64,
) -> Result<SpecHighlightRule> {
    if width == 0 {
        return Err(GridError::InvalidRange(format!(
            "Highlight range at row {row}, column {left_col} has zero width."
        )));
    }
    if row == 0 || left_col == 0 {
        return Err(GridError::InvalidArgument(format!(
            "Highlight coordinates are 1-based; got row={row}, left_col={left_col}."
        )));
    }
    if !threshold.is_finite() {
        return Err(GridError::InvalidArgument(format!(
            "Highlight threshold must be finite; got {threshold}."
        )));
    }

    let region = SpecRegion::try_from_origin_size(row, left_col, 1, width)?;
    let range_expr = derive_range_ref(&region)?;

    Ok(SpecHighlightRule {
        region,
        range_expr,
        operator: EnumCompareOperator::GreaterThanOrEqual,
        threshold,
        style: EnumStyleClass::Highlight,
    })
}

/// Build one rule per row of `value_block`.
pub fn build_highlight_rules(
    value_block: &SpecRegion,
    threshold: f64,
) -> Result<Vec<SpecHighlightRule>> {
    if value_block.bottom_row < value_block.top_row || value_block.right_col < value_block.left_col
    {
        return Err(GridError::InvalidRange(format!(
            "Value block {value_block} is empty."
        )));
    }
    (value_block.top_row..=value_block.bottom_row)
        .map(|row| {
            build_row_highlight_rule(row, value_block.left_col, value_block.width(), threshold)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::EnumCellValue;

    #[test]
    fn test_row_rule_range_expression() {
        let rule = build_row_highlight_rule(10, 6, 4, 0.8).expect("rule");

        assert_eq!(rule.range_expr, "F10:I10");
        assert_eq!(rule.operator, EnumCompareOperator::GreaterThanOrEqual);
        assert_eq!(rule.threshold, 0.8);
        assert_eq!(rule.style, EnumStyleClass::Highlight);
        assert!(rule.matches(&EnumCellValue::Number(0.8)));
        assert!(!rule.matches(&EnumCellValue::Number(0.79)));
        assert!(!rule.matches(&EnumCellValue::String("0.9".to_string())));
    }

    #[test]
    fn test_zero_width_is_invalid_range() {
        assert!(matches!(
            build_row_highlight_rule(10, 6, 0, 0.8),
            Err(GridError::InvalidRange(_))
        ));
        assert!(matches!(
            build_row_highlight_rule(10, 6, 2, f64::NAN),
            Err(GridError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rules_per_value_row() {
        let value_block = SpecRegion::try_new(9, 6, 11, 28).expect("region");
        let l_rules = build_highlight_rules(&value_block, 0.5).expect("rules");

        let l_exprs: Vec<&str> = l_rules.iter().map(|rule| rule.range_expr.as_str()).collect();
        assert_eq!(l_exprs, vec!["F9:AB9", "F10:AB10", "F11:AB11"]);
    }
}
