use crate::{
    dnd::{
        indicator::{BoundaryDescriptor, IndicatorRegistry},
        resolver::NearestBoundaryResolver,
    },
    domain::{
        board::{BoardState, InsertPoint},
        card::{CardId, ColumnKind},
    },
};

/// Drag-over, leave and drop handling for one column's drop surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnController {
    column: ColumnKind,
    active: bool,
}

impl ColumnController {
    pub fn new(column: ColumnKind) -> Self {
        Self {
            column,
            active: false,
        }
    }

    pub fn column(&self) -> ColumnKind {
        self.column
    }

    /// Whether a drag is hovering this column
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Resolves the pointer against freshly measured boundaries and
    /// highlights the winner. Boundaries of other columns are ignored.
    pub fn drag_over(
        &mut self,
        y: f64,
        boundaries: &[BoundaryDescriptor],
        resolver: &NearestBoundaryResolver,
        registry: &mut IndicatorRegistry,
    ) -> Option<InsertPoint> {
        let own: Vec<BoundaryDescriptor> = boundaries
            .iter()
            .filter(|b| b.column == self.column)
            .cloned()
            .collect();

        registry.clear();
        self.active = true;

        let point = resolver.resolve(y, &own)?.point.clone();
        registry.highlight(self.column, point.clone());
        Some(point)
    }

    pub fn drag_leave(&mut self, registry: &mut IndicatorRegistry) {
        registry.clear_column(self.column);
        self.active = false;
    }

    /// Commits the drop at the highlighted boundary, or at the end of the
    /// column when nothing here is highlighted.
    pub fn drop(
        &mut self,
        board: &BoardState,
        dragged: &CardId,
        registry: &mut IndicatorRegistry,
    ) -> BoardState {
        let at = registry
            .highlighted_in(self.column)
            .cloned()
            .unwrap_or(InsertPoint::End);

        registry.clear();
        self.active = false;

        if at.before_id() == Some(dragged) {
            return board.clone();
        }

        board.move_card(dragged, self.column, &at)
    }
}
