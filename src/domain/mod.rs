pub mod board;
pub mod card;

pub use board::{BoardConfig, BoardState, ColumnConfig, InsertPoint};
pub use card::{Card, CardId, ColumnKind};
