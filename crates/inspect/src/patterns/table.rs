use super::{enum_entry, entry, group_name, plain_group, register_pattern_builder};
use crate::detail::DetailGroup;
use uiscope_core::pattern_properties::{table, table_item};
use uiscope_core::{PatternId, PatternView, PlatformError};

const ROW_OR_COLUMN_MAJOR: &[&str] = &["RowMajor", "ColumnMajor", "Indeterminate"];

register_pattern_builder!(PatternId::TableItem, build_table_item);
register_pattern_builder!(PatternId::Table, build_table);

fn build_table_item(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(
        view,
        &[
            ("Column Header Items", table_item::COLUMN_HEADER_ITEMS),
            ("Row Header Items", table_item::ROW_HEADER_ITEMS),
        ],
    )
}

fn build_table(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    Ok(DetailGroup::new(
        group_name(view.id()),
        vec![
            entry(view, "Column Headers", table::COLUMN_HEADERS)?,
            entry(view, "Row Headers", table::ROW_HEADERS)?,
            enum_entry(view, "Row Or Column Major", table::ROW_OR_COLUMN_MAJOR, ROW_OR_COLUMN_MAJOR)?,
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::testing::FakeView;
    use uiscope_core::{ElementSummary, UiValue};

    #[test]
    fn table_headers_and_major() {
        let headers = vec![
            UiValue::from(ElementSummary::new("HeaderItem", "Id")),
            UiValue::from(ElementSummary::new("HeaderItem", "Customer")),
        ];
        let view = FakeView::new(PatternId::Table)
            .with(table::COLUMN_HEADERS, headers)
            .with(table::ROW_OR_COLUMN_MAJOR, 1);
        let group = build_table(&view).unwrap();
        assert_eq!(
            group.value("Column Headers"),
            Some("[HeaderItem \"Id\", HeaderItem \"Customer\"]")
        );
        assert_eq!(group.value("Row Headers"), Some("not supported"));
        assert_eq!(group.value("Row Or Column Major"), Some("ColumnMajor"));
    }

    #[test]
    fn table_item_headers() {
        let view = FakeView::new(PatternId::TableItem).with(table_item::ROW_HEADER_ITEMS, Vec::<UiValue>::new());
        let group = build_table_item(&view).unwrap();
        assert_eq!(group.value("Row Header Items"), Some("[]"));
    }
}
