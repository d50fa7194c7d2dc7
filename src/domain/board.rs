use crate::{
    domain::card::{Card, CardId, ColumnKind},
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};
use tokio::fs;

/// Vertical distance from a boundary's top edge to its decision line
pub const DEFAULT_DECISION_OFFSET: f64 = 50.0;

/// Storage key the card collection lives under
pub const DEFAULT_STORAGE_KEY: &str = "cards";

/// Display configuration for one board column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub column: ColumnKind,
    pub title: String,
}

impl ColumnConfig {
    pub fn new(column: ColumnKind, title: impl Into<String>) -> Self {
        Self {
            column,
            title: title.into(),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    pub storage_key: String,
    pub decision_offset: f64,
    pub columns: Vec<ColumnConfig>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            decision_offset: DEFAULT_DECISION_OFFSET,
            columns: vec![
                ColumnConfig::new(ColumnKind::Backlog, "Backlog"),
                ColumnConfig::new(ColumnKind::Todo, "Todo"),
                ColumnConfig::new(ColumnKind::Doing, "In Progress"),
                ColumnConfig::new(ColumnKind::Done, "Complete"),
            ],
        }
    }
}

impl BoardConfig {
    /// Loads a JSON config file, filling missing fields with defaults
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).await?;
        Self::from_json(&contents)
    }

    /// Parses and validates a JSON config
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every fixed column is configured exactly once
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(BoardError::ConfigError(
                "storage_key must not be empty".to_string(),
            ));
        }

        if !self.decision_offset.is_finite() {
            return Err(BoardError::ConfigError(
                "decision_offset must be a finite number".to_string(),
            ));
        }

        for kind in ColumnKind::ALL {
            let count = self.columns.iter().filter(|c| c.column == kind).count();
            if count != 1 {
                return Err(BoardError::ConfigError(format!(
                    "column '{}' must be configured exactly once, found {}",
                    kind, count
                )));
            }
        }

        Ok(())
    }

    /// Gets the display title for a column
    pub fn column_title(&self, column: ColumnKind) -> &str {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.title.as_str())
            .unwrap_or_else(|| column.as_str())
    }
}

/// Where a moved card lands: before a given card, or at the end
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InsertPoint {
    Before(CardId),
    End,
}

impl InsertPoint {
    /// The card this point precedes, if any
    pub fn before_id(&self) -> Option<&CardId> {
        match self {
            Self::Before(id) => Some(id),
            Self::End => None,
        }
    }
}

/// The authoritative, versioned card collection.
///
/// One flat sequence encodes both the column grouping and the order inside
/// each column. Every operation leaves `self` untouched and returns the next
/// state; the version only advances when the operation changed something.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    cards: Vec<Card>,
    version: u64,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-validated card sequence as version 0
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, version: 0 }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.get(id).is_some()
    }

    /// Cards of one column in board order
    pub fn cards_in(&self, column: ColumnKind) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(move |c| c.column == column)
    }

    pub fn count_in(&self, column: ColumnKind) -> usize {
        self.cards_in(column).count()
    }

    /// Checks the id uniqueness invariant
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.cards.len());
        self.cards.iter().all(|c| seen.insert(&c.id))
    }

    fn advance(&self, cards: Vec<Card>) -> Self {
        Self {
            cards,
            version: self.version + 1,
        }
    }

    fn fresh_id(&self) -> CardId {
        loop {
            let id = CardId::generate();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    /// Appends a new card with a trimmed title.
    ///
    /// A title that trims to nothing leaves the board unchanged.
    pub fn add_card(&self, column: ColumnKind, raw_title: &str) -> Self {
        let title = raw_title.trim();
        if title.is_empty() {
            return self.clone();
        }

        let mut cards = self.cards.clone();
        cards.push(Card::new(self.fresh_id(), title.to_string(), column));
        self.advance(cards)
    }

    /// Removes the card with the given id, if present
    pub fn remove_card(&self, id: &CardId) -> Self {
        if !self.contains(id) {
            return self.clone();
        }

        let cards = self.cards.iter().filter(|c| &c.id != id).cloned().collect();
        self.advance(cards)
    }

    /// Moves a card into `target`, placing it at `at`.
    ///
    /// Unknown cards, self-relative insertion points and insertion points
    /// naming a card that is not on the board leave the board unchanged,
    /// column included.
    pub fn move_card(&self, id: &CardId, target: ColumnKind, at: &InsertPoint) -> Self {
        if at.before_id() == Some(id) {
            return self.clone();
        }

        let Some(from) = self.cards.iter().position(|c| &c.id == id) else {
            return self.clone();
        };

        let mut cards = self.cards.clone();
        let mut card = cards.remove(from);
        card.column = target;

        match at {
            InsertPoint::End => cards.push(card),
            InsertPoint::Before(before) => match cards.iter().position(|c| &c.id == before) {
                Some(index) => cards.insert(index, card),
                None => return self.clone(),
            },
        }

        self.advance(cards)
    }
}
