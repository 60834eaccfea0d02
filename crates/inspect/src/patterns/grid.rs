use super::{plain_group, register_pattern_builder};
use crate::detail::DetailGroup;
use uiscope_core::pattern_properties::{grid, grid_item};
use uiscope_core::{PatternId, PatternView, PlatformError};

register_pattern_builder!(PatternId::GridItem, build_grid_item);
register_pattern_builder!(PatternId::Grid, build_grid);

fn build_grid_item(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(
        view,
        &[
            ("Column", grid_item::COLUMN),
            ("Column Span", grid_item::COLUMN_SPAN),
            ("Row", grid_item::ROW),
            ("Row Span", grid_item::ROW_SPAN),
            ("Containing Grid", grid_item::CONTAINING_GRID),
        ],
    )
}

fn build_grid(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(view, &[("Column Count", grid::COLUMN_COUNT), ("Row Count", grid::ROW_COUNT)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::testing::FakeView;
    use uiscope_core::ElementSummary;

    #[test]
    fn grid_item_lists_position_and_container() {
        let view = FakeView::new(PatternId::GridItem)
            .with(grid_item::COLUMN, 2)
            .with(grid_item::ROW, 5)
            .with(grid_item::CONTAINING_GRID, ElementSummary::new("DataGrid", "Orders"));
        let group = build_grid_item(&view).unwrap();
        assert_eq!(group.name, "GridItem Pattern");
        let labels: Vec<_> = group.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Column", "Column Span", "Row", "Row Span", "Containing Grid"]);
        assert_eq!(group.value("Column"), Some("2"));
        assert_eq!(group.value("Column Span"), Some("not supported"));
        assert_eq!(group.value("Containing Grid"), Some("DataGrid \"Orders\""));
    }

    #[test]
    fn grid_counts() {
        let view = FakeView::new(PatternId::Grid).with(grid::COLUMN_COUNT, 3).with(grid::ROW_COUNT, 10);
        let group = build_grid(&view).unwrap();
        assert_eq!(group.value("Column Count"), Some("3"));
        assert_eq!(group.value("Row Count"), Some("10"));
    }
}
