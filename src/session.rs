//! The owned, event-driven board.
//!
//! A [`BoardSession`] holds the latest [`BoardState`] version and every piece
//! of interaction state around it. Hosts call one handler per input event, in
//! dispatch order; each handler runs to completion before the next one.

use crate::{
    dnd::{
        AddCardControl, BoundaryDescriptor, ColumnController, DeleteZone, DragSession, DragState,
        DragTransfer, IndicatorRegistry, NearestBoundaryResolver,
    },
    domain::{
        board::{BoardConfig, BoardState, InsertPoint},
        card::{Card, CardId, ColumnKind},
    },
    error::Result,
    storage::{PersistenceGateway, Storage},
};

/// What a column heading shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    pub column: ColumnKind,
    pub title: String,
    pub count: usize,
    pub active: bool,
}

pub struct BoardSession<S> {
    config: BoardConfig,
    state: BoardState,
    gateway: PersistenceGateway<S>,
    drag: DragState,
    registry: IndicatorRegistry,
    resolver: NearestBoundaryResolver,
    columns: [ColumnController; 4],
    composers: [AddCardControl; 4],
    delete_zone: DeleteZone,
}

impl<S: Storage> BoardSession<S> {
    /// Loads the stored board and opens the persistence gate
    pub async fn open(storage: S, config: BoardConfig) -> Result<Self> {
        config.validate()?;

        let mut gateway = PersistenceGateway::new(storage, config.storage_key.clone());
        let state = gateway.load().await?;

        Ok(Self {
            registry: IndicatorRegistry::for_board(&state),
            resolver: NearestBoundaryResolver::new(config.decision_offset),
            columns: ColumnKind::ALL.map(ColumnController::new),
            composers: ColumnKind::ALL.map(AddCardControl::new),
            delete_zone: DeleteZone::new(),
            drag: DragState::Idle,
            config,
            state,
            gateway,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        self.gateway.storage()
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn registry(&self) -> &IndicatorRegistry {
        &self.registry
    }

    pub fn column(&self, column: ColumnKind) -> &ColumnController {
        &self.columns[column.index()]
    }

    pub fn composer(&self, column: ColumnKind) -> &AddCardControl {
        &self.composers[column.index()]
    }

    pub fn delete_zone(&self) -> &DeleteZone {
        &self.delete_zone
    }

    pub fn cards_in(&self, column: ColumnKind) -> Vec<&Card> {
        self.state.cards_in(column).collect()
    }

    /// Headings for the four columns, left to right
    pub fn summaries(&self) -> Vec<ColumnSummary> {
        ColumnKind::ALL
            .iter()
            .map(|&column| ColumnSummary {
                column,
                title: self.config.column_title(column).to_string(),
                count: self.state.count_in(column),
                active: self.column(column).is_active(),
            })
            .collect()
    }

    /// Starts dragging a card and returns the payload for the native
    /// transfer. Unknown ids start nothing.
    pub fn start_drag(&mut self, card_id: impl Into<CardId>) -> Option<DragTransfer> {
        let card_id = card_id.into();
        if !self.state.contains(&card_id) {
            tracing::debug!(card = %card_id, "Ignoring drag of unknown card");
            return None;
        }

        let session = DragSession::new(card_id);
        let transfer = session.transfer();
        tracing::debug!(card = %session.card_id(), "Drag started");
        self.drag = DragState::Dragging(session);
        Some(transfer)
    }

    /// Pointer moved over a column; `boundaries` are measured fresh by the
    /// view for this event.
    pub fn drag_over_column(
        &mut self,
        column: ColumnKind,
        y: f64,
        boundaries: &[BoundaryDescriptor],
    ) -> Option<InsertPoint> {
        if self.drag.is_idle() {
            return None;
        }

        self.drag.enter_column(column);
        self.columns[column.index()].drag_over(y, boundaries, &self.resolver, &mut self.registry)
    }

    pub fn drag_leave_column(&mut self, column: ColumnKind) {
        self.columns[column.index()].drag_leave(&mut self.registry);
        if matches!(self.drag, DragState::OverColumn { column: c, .. } if c == column) {
            self.drag.leave();
        }
    }

    /// Drops the card named by `transfer` onto a column at its highlighted
    /// boundary. Returns whether the board changed.
    pub async fn drop_on_column(
        &mut self,
        column: ColumnKind,
        transfer: &DragTransfer,
    ) -> Result<bool> {
        self.drag.take();
        let dragged = transfer.card_id();
        let next = self.columns[column.index()].drop(&self.state, &dragged, &mut self.registry);
        tracing::debug!(card = %dragged, column = %column, "Dropped on column");
        self.commit(next).await
    }

    pub fn drag_over_delete_zone(&mut self) {
        if self.drag.is_idle() {
            return;
        }
        self.drag.enter_delete_zone();
        self.delete_zone.drag_over();
    }

    pub fn drag_leave_delete_zone(&mut self) {
        self.delete_zone.drag_leave();
        if matches!(self.drag, DragState::OverDeleteZone(_)) {
            self.drag.leave();
        }
    }

    /// Drops the card named by `transfer` onto the delete zone
    pub async fn drop_on_delete_zone(&mut self, transfer: &DragTransfer) -> Result<bool> {
        self.drag.take();
        let dragged = transfer.card_id();
        let next = self.delete_zone.drop(&self.state, &dragged, &mut self.registry);
        tracing::debug!(card = %dragged, "Dropped on delete zone");
        self.commit(next).await
    }

    /// The gesture ended without a drop on any target
    pub fn cancel_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            tracing::debug!(card = %session.card_id(), "Drag cancelled");
        }
        self.registry.clear();
        for controller in &mut self.columns {
            controller.drag_leave(&mut self.registry);
        }
        self.delete_zone.drag_leave();
    }

    pub fn open_composer(&mut self, column: ColumnKind) {
        self.composers[column.index()].open();
    }

    pub fn close_composer(&mut self, column: ColumnKind) {
        self.composers[column.index()].close();
    }

    pub fn set_draft(&mut self, column: ColumnKind, text: impl Into<String>) {
        self.composers[column.index()].set_draft(text);
    }

    /// Submits a column's draft. Returns whether a card was added.
    pub async fn submit_card(&mut self, column: ColumnKind) -> Result<bool> {
        let next = self.composers[column.index()].submit(&self.state);
        self.commit(next).await
    }

    /// Adopts `next` if it is a new version and writes it through
    async fn commit(&mut self, next: BoardState) -> Result<bool> {
        if next.version() == self.state.version() {
            return Ok(false);
        }

        self.state = next;
        self.registry.sync(&self.state);
        tracing::debug!(version = self.state.version(), count = self.state.len(), "Board changed");

        self.gateway.save(&self.state).await?;
        Ok(true)
    }
}
