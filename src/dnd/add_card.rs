use crate::domain::{board::BoardState, card::ColumnKind};

/// The inline "Add card" affordance of one column.
///
/// Its draft is transient and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCardControl {
    column: ColumnKind,
    composing: bool,
    draft: String,
}

impl AddCardControl {
    pub fn new(column: ColumnKind) -> Self {
        Self {
            column,
            composing: false,
            draft: String::new(),
        }
    }

    pub fn column(&self) -> ColumnKind {
        self.column
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn open(&mut self) {
        self.composing = true;
    }

    /// Closes the form and discards the draft
    pub fn close(&mut self) {
        self.composing = false;
        self.draft.clear();
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Adds the draft as a card. A blank draft is not submitted and the
    /// form stays open with the draft as typed.
    pub fn submit(&mut self, board: &BoardState) -> BoardState {
        let next = board.add_card(self.column, &self.draft);
        if next.len() > board.len() {
            self.close();
        }
        next
    }
}
