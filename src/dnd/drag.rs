use crate::domain::card::{CardId, ColumnKind};

/// The single datum carried on the host's native drag transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragTransfer {
    data: String,
}

impl DragTransfer {
    pub fn new(card_id: &CardId) -> Self {
        Self {
            data: card_id.as_str().to_string(),
        }
    }

    /// Rebuilds a transfer from whatever the host read back at drop
    pub fn from_data(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn card_id(&self) -> CardId {
        CardId::from(self.data.as_str())
    }
}

/// An in-flight drag gesture: only the dragged card's identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    card_id: CardId,
}

impl DragSession {
    pub fn new(card_id: CardId) -> Self {
        Self { card_id }
    }

    pub fn card_id(&self) -> &CardId {
        &self.card_id
    }

    pub fn transfer(&self) -> DragTransfer {
        DragTransfer::new(&self.card_id)
    }
}

/// Where the current gesture stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
    OverColumn {
        session: DragSession,
        column: ColumnKind,
    },
    OverDeleteZone(DragSession),
}

impl DragState {
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session)
            | Self::OverColumn { session, .. }
            | Self::OverDeleteZone(session) => Some(session),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Ends the gesture, handing back the session if there was one
    pub fn take(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging(session)
            | Self::OverColumn { session, .. }
            | Self::OverDeleteZone(session) => Some(session),
        }
    }

    /// Hovers a column, keeping the session
    pub fn enter_column(&mut self, column: ColumnKind) {
        if let Some(session) = self.take() {
            *self = Self::OverColumn { session, column };
        }
    }

    /// Hovers the delete zone, keeping the session
    pub fn enter_delete_zone(&mut self) {
        if let Some(session) = self.take() {
            *self = Self::OverDeleteZone(session);
        }
    }

    /// Leaves a drop target without dropping; the gesture goes on
    pub fn leave(&mut self) {
        if let Some(session) = self.take() {
            *self = Self::Dragging(session);
        }
    }
}
