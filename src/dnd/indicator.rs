use crate::domain::{
    board::{BoardState, InsertPoint},
    card::ColumnKind,
};
use std::collections::HashMap;

/// A rendered insertion boundary, as measured by the view
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryDescriptor {
    pub column: ColumnKind,
    pub point: InsertPoint,
    /// Top edge in screen coordinates
    pub top: f64,
}

impl BoundaryDescriptor {
    pub fn new(column: ColumnKind, point: InsertPoint, top: f64) -> Self {
        Self { column, point, top }
    }
}

/// Per-column insertion boundaries plus the single highlighted one.
///
/// Every column has a boundary before each of its cards and a trailing
/// `End` boundary. At most one boundary on the whole board is highlighted.
#[derive(Debug, Default)]
pub struct IndicatorRegistry {
    columns: HashMap<ColumnKind, Vec<InsertPoint>>,
    highlighted: Option<(ColumnKind, InsertPoint)>,
}

impl IndicatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry for a board
    pub fn for_board(board: &BoardState) -> Self {
        let mut registry = Self::new();
        registry.sync(board);
        registry
    }

    /// The boundaries a column renders, top to bottom
    pub fn layout(board: &BoardState, column: ColumnKind) -> Vec<InsertPoint> {
        board
            .cards_in(column)
            .map(|c| InsertPoint::Before(c.id.clone()))
            .chain(std::iter::once(InsertPoint::End))
            .collect()
    }

    /// Rebuilds every column's boundaries after a board change.
    ///
    /// A highlight pointing at a boundary that no longer exists is dropped.
    pub fn sync(&mut self, board: &BoardState) {
        self.columns = ColumnKind::ALL
            .iter()
            .map(|&column| (column, Self::layout(board, column)))
            .collect();

        if let Some((column, point)) = &self.highlighted {
            if !self.contains(*column, point) {
                self.highlighted = None;
            }
        }
    }

    pub fn boundaries(&self, column: ColumnKind) -> &[InsertPoint] {
        self.columns.get(&column).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, column: ColumnKind, point: &InsertPoint) -> bool {
        self.boundaries(column).contains(point)
    }

    /// Pairs a column's boundaries with the tops the view measured for them.
    ///
    /// Extra tops are ignored; missing tops drop the trailing boundaries,
    /// including `End`, and are logged as a warning.
    pub fn describe(&self, column: ColumnKind, tops: &[f64]) -> Vec<BoundaryDescriptor> {
        let boundaries = self.boundaries(column);
        if tops.len() != boundaries.len() {
            tracing::warn!(
                column = %column,
                boundaries = boundaries.len(),
                tops = tops.len(),
                "Measured tops do not match the column's boundaries"
            );
        }

        boundaries
            .iter()
            .zip(tops)
            .map(|(point, &top)| BoundaryDescriptor::new(column, point.clone(), top))
            .collect()
    }

    /// Highlights one boundary, clearing any other
    pub fn highlight(&mut self, column: ColumnKind, point: InsertPoint) {
        self.highlighted = Some((column, point));
    }

    /// Clears every highlight on the board
    pub fn clear(&mut self) {
        self.highlighted = None;
    }

    /// Clears the highlight if it belongs to `column`
    pub fn clear_column(&mut self, column: ColumnKind) {
        if matches!(&self.highlighted, Some((c, _)) if *c == column) {
            self.highlighted = None;
        }
    }

    pub fn highlighted(&self) -> Option<(ColumnKind, &InsertPoint)> {
        self.highlighted.as_ref().map(|(c, p)| (*c, p))
    }

    pub fn highlighted_in(&self, column: ColumnKind) -> Option<&InsertPoint> {
        match &self.highlighted {
            Some((c, point)) if *c == column => Some(point),
            _ => None,
        }
    }

    pub fn is_highlighted(&self, column: ColumnKind, point: &InsertPoint) -> bool {
        self.highlighted_in(column) == Some(point)
    }
}
