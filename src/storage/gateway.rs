use crate::{
    domain::{board::BoardState, card::Card},
    error::{BoardError, Result},
    storage::Storage,
};
use std::{collections::HashSet, io::ErrorKind};

/// Loads and saves the whole card collection under one storage key.
///
/// Saves are refused until the first load has finished, so an empty board
/// that exists only before loading can never overwrite stored cards.
pub struct PersistenceGateway<S> {
    storage: S,
    key: String,
    loaded: bool,
}

impl<S: Storage> PersistenceGateway<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            loaded: false,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Reads the stored board. Absent or malformed data (including bytes
    /// that are not UTF-8) loads as an empty board; only storage I/O
    /// failures are returned.
    pub async fn load(&mut self) -> Result<BoardState> {
        let stored = match self.storage.get(&self.key).await {
            Err(BoardError::IoError(e)) if e.kind() == ErrorKind::InvalidData => {
                tracing::warn!(key = %self.key, error = %e, "Discarding unreadable stored cards");
                None
            }
            other => other?,
        };

        let cards = match stored {
            None => {
                tracing::debug!(key = %self.key, "No stored cards, starting empty");
                Vec::new()
            }
            Some(raw) => match decode(&raw) {
                Ok(cards) => cards,
                Err(e) => {
                    tracing::warn!(key = %self.key, error = %e, "Discarding malformed stored cards");
                    Vec::new()
                }
            },
        };

        self.loaded = true;
        tracing::debug!(key = %self.key, count = cards.len(), "Loaded cards");
        Ok(BoardState::from_cards(cards))
    }

    /// Writes the full collection. Returns `false` when the initial load
    /// has not happened yet and nothing was written.
    pub async fn save(&self, board: &BoardState) -> Result<bool> {
        if !self.loaded {
            tracing::debug!(key = %self.key, "Skipping save before initial load");
            return Ok(false);
        }

        let encoded = encode(board.cards())?;
        self.storage.set(&self.key, &encoded).await?;
        tracing::debug!(key = %self.key, count = board.len(), version = board.version(), "Saved cards");
        Ok(true)
    }
}

/// Serializes cards as a compact JSON array of `{id, title, column}`
pub fn encode(cards: &[Card]) -> Result<String> {
    Ok(serde_json::to_string(cards)?)
}

/// Parses a stored JSON array, rejecting blank titles and duplicate ids
pub fn decode(raw: &str) -> Result<Vec<Card>> {
    let cards: Vec<Card> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(cards.len());
    for card in &cards {
        if card.title.trim().is_empty() {
            return Err(BoardError::StorageError(format!(
                "Card {} has an empty title",
                card.id
            )));
        }
        if !seen.insert(&card.id) {
            return Err(BoardError::StorageError(format!(
                "Duplicate card id {}",
                card.id
            )));
        }
    }

    Ok(cards)
}
