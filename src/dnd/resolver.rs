use crate::{
    dnd::indicator::BoundaryDescriptor,
    domain::board::{InsertPoint, DEFAULT_DECISION_OFFSET},
};

/// Maps a pointer position to the insertion boundary it is aiming at.
///
/// Each boundary has a decision line `decision_offset` below its top edge.
/// The chosen boundary is the one whose decision line is nearest below the
/// pointer. When the pointer is below every decision line the trailing
/// boundary wins. Equal offsets go to the first boundary in list order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestBoundaryResolver {
    decision_offset: f64,
}

impl Default for NearestBoundaryResolver {
    fn default() -> Self {
        Self::new(DEFAULT_DECISION_OFFSET)
    }
}

impl NearestBoundaryResolver {
    pub fn new(decision_offset: f64) -> Self {
        Self { decision_offset }
    }

    pub fn decision_offset(&self) -> f64 {
        self.decision_offset
    }

    /// Signed distance from a boundary's decision line to the pointer
    pub fn offset(&self, y: f64, boundary: &BoundaryDescriptor) -> f64 {
        y - (boundary.top + self.decision_offset)
    }

    /// Picks one boundary for pointer `y`; `None` only for an empty list
    pub fn resolve<'a>(
        &self,
        y: f64,
        boundaries: &'a [BoundaryDescriptor],
    ) -> Option<&'a BoundaryDescriptor> {
        let mut nearest: Option<(f64, &BoundaryDescriptor)> = None;

        for boundary in boundaries {
            let offset = self.offset(y, boundary);
            if offset >= 0.0 {
                continue;
            }
            match nearest {
                Some((best, _)) if offset <= best => {}
                _ => nearest = Some((offset, boundary)),
            }
        }

        let resolved = match nearest {
            Some((_, boundary)) => Some(boundary),
            None => boundaries
                .iter()
                .find(|b| b.point == InsertPoint::End)
                .or_else(|| boundaries.last()),
        };

        if let Some(boundary) = resolved {
            tracing::trace!(y, column = %boundary.column, point = ?boundary.point, "Resolved boundary");
        }

        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::{CardId, ColumnKind};

    // Decision lines at 200, 300 and 400 with the default offset
    fn boundaries() -> Vec<BoundaryDescriptor> {
        vec![
            BoundaryDescriptor::new(ColumnKind::Todo, InsertPoint::Before(CardId::from("a")), 150.0),
            BoundaryDescriptor::new(ColumnKind::Todo, InsertPoint::Before(CardId::from("b")), 250.0),
            BoundaryDescriptor::new(ColumnKind::Todo, InsertPoint::End, 350.0),
        ]
    }

    #[test]
    fn test_pointer_between_lines_picks_next_line_down() {
        let resolver = NearestBoundaryResolver::default();
        let list = boundaries();

        let picked = resolver.resolve(250.0, &list).unwrap();
        assert_eq!(picked.point, InsertPoint::Before(CardId::from("b")));
    }

    #[test]
    fn test_pointer_below_everything_picks_end() {
        let resolver = NearestBoundaryResolver::default();
        let list = boundaries();

        let picked = resolver.resolve(500.0, &list).unwrap();
        assert_eq!(picked.point, InsertPoint::End);
    }

    #[test]
    fn test_pointer_above_everything_picks_first() {
        let resolver = NearestBoundaryResolver::default();
        let list = boundaries();

        let picked = resolver.resolve(150.0, &list).unwrap();
        assert_eq!(picked.point, InsertPoint::Before(CardId::from("a")));
    }

    #[test]
    fn test_pointer_on_decision_line_is_excluded() {
        let resolver = NearestBoundaryResolver::default();
        let list = boundaries();

        // offset 0 for the first line, so the second one is nearest
        let picked = resolver.resolve(200.0, &list).unwrap();
        assert_eq!(picked.point, InsertPoint::Before(CardId::from("b")));
    }

    #[test]
    fn test_ties_go_to_first_in_order() {
        let resolver = NearestBoundaryResolver::default();
        let list = vec![
            BoundaryDescriptor::new(ColumnKind::Done, InsertPoint::Before(CardId::from("x")), 100.0),
            BoundaryDescriptor::new(ColumnKind::Done, InsertPoint::Before(CardId::from("y")), 100.0),
            BoundaryDescriptor::new(ColumnKind::Done, InsertPoint::End, 100.0),
        ];

        let picked = resolver.resolve(120.0, &list).unwrap();
        assert_eq!(picked.point, InsertPoint::Before(CardId::from("x")));
    }

    #[test]
    fn test_end_fallback_is_found_by_sentinel() {
        let resolver = NearestBoundaryResolver::default();
        let list = vec![
            BoundaryDescriptor::new(ColumnKind::Done, InsertPoint::End, 0.0),
            BoundaryDescriptor::new(ColumnKind::Done, InsertPoint::Before(CardId::from("x")), 10.0),
        ];

        let picked = resolver.resolve(1000.0, &list).unwrap();
        assert_eq!(picked.point, InsertPoint::End);
    }

    #[test]
    fn test_custom_offset() {
        let resolver = NearestBoundaryResolver::new(0.0);
        let list = boundaries();

        // lines at 150, 250, 350
        let picked = resolver.resolve(200.0, &list).unwrap();
        assert_eq!(picked.point, InsertPoint::Before(CardId::from("b")));
    }

    #[test]
    fn test_empty_list_resolves_to_nothing() {
        let resolver = NearestBoundaryResolver::default();
        assert!(resolver.resolve(10.0, &[]).is_none());
    }
}
