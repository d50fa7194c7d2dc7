use crate::{
    dnd::indicator::IndicatorRegistry,
    domain::{board::BoardState, card::CardId},
};

/// What the delete zone shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteZoneIcon {
    Trash,
    Fire,
}

/// A drop target that removes the dropped card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteZone {
    active: bool,
}

impl DeleteZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn icon(&self) -> DeleteZoneIcon {
        if self.active {
            DeleteZoneIcon::Fire
        } else {
            DeleteZoneIcon::Trash
        }
    }

    pub fn drag_over(&mut self) {
        self.active = true;
    }

    pub fn drag_leave(&mut self) {
        self.active = false;
    }

    pub fn drop(
        &mut self,
        board: &BoardState,
        dragged: &CardId,
        registry: &mut IndicatorRegistry,
    ) -> BoardState {
        registry.clear();
        self.active = false;
        board.remove_card(dragged)
    }
}
