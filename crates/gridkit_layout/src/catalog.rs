//! Style catalog: concrete formats behind each style class.

use crate::conf::derive_default_style_catalog;
use crate::spec::{EnumStyleClass, SpecCellFormat};

/// Immutable mapping from [`EnumStyleClass`] to a concrete format.
///
/// The layout engine only tags cells with classes; writers resolve them
/// here. Supply a different catalog to restyle every table at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecStyleCatalog {
    pub title: SpecCellFormat,
    pub header: SpecCellFormat,
    pub index: SpecCellFormat,
    pub index_last: SpecCellFormat,
    pub value: SpecCellFormat,
    pub value_highlighted_zone: SpecCellFormat,
    pub highlight: SpecCellFormat,
}

impl Default for SpecStyleCatalog {
    fn default() -> Self {
        derive_default_style_catalog()
    }
}

impl SpecStyleCatalog {
    /// Concrete format of `class`.
    pub fn resolve(&self, class: EnumStyleClass) -> &SpecCellFormat {
        match class {
            EnumStyleClass::Title => &self.title,
            EnumStyleClass::Header => &self.header,
            EnumStyleClass::Index => &self.index,
            EnumStyleClass::IndexLast => &self.index_last,
            EnumStyleClass::Value => &self.value,
            EnumStyleClass::ValueHighlightedZone => &self.value_highlighted_zone,
            EnumStyleClass::Highlight => &self.highlight,
        }
    }

    /// Return a copy with `class` replaced by `format`.
    pub fn with_class(mut self, class: EnumStyleClass, format: SpecCellFormat) -> Self {
        let slot = match class {
            EnumStyleClass::Title => &mut self.title,
            EnumStyleClass::Header => &mut self.header,
            EnumStyleClass::Index => &mut self.index,
            EnumStyleClass::IndexLast => &mut self.index_last,
            EnumStyleClass::Value => &mut self.value,
            EnumStyleClass::ValueHighlightedZone => &mut self.value_highlighted_zone,
            EnumStyleClass::Highlight => &mut self.highlight,
        };
        *slot = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::{C_COLOR_LIGHT_GREY, C_COLOR_MED_GREY, C_NUM_FORMAT_PERCENT};

    #[test]
    fn test_default_catalog_literals() {
        let catalog = SpecStyleCatalog::default();

        assert_eq!(catalog.title.font_size, Some(18));
        assert_eq!(catalog.title.bold, Some(true));
        assert_eq!(catalog.title.align.as_deref(), Some("center"));

        assert_eq!(catalog.header.bg_color.as_deref(), Some(C_COLOR_MED_GREY));
        assert_eq!(catalog.index.bg_color.as_deref(), Some(C_COLOR_MED_GREY));
        assert_eq!(
            catalog.index_last.bg_color.as_deref(),
            Some(C_COLOR_LIGHT_GREY)
        );
        assert_eq!(catalog.index_last.bold, Some(true));

        assert_eq!(catalog.value.border, Some(1));
        assert_eq!(
            catalog.value.num_format.as_deref(),
            Some(C_NUM_FORMAT_PERCENT)
        );
        assert_eq!(
            catalog.value_highlighted_zone.num_format.as_deref(),
            Some(C_NUM_FORMAT_PERCENT)
        );
        assert!(catalog.highlight.font_color.is_some());
    }

    #[test]
    fn test_with_class_overrides_one_slot() {
        let fmt_title = SpecCellFormat {
            font_size: Some(24),
            ..Default::default()
        };
        let catalog = SpecStyleCatalog::default().with_class(EnumStyleClass::Title, fmt_title);

        assert_eq!(
            catalog.resolve(EnumStyleClass::Title).font_size,
            Some(24)
        );
        assert_eq!(
            catalog.resolve(EnumStyleClass::Header),
            &SpecStyleCatalog::default().header
        );
    }
}
