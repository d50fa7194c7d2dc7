//! # Hlavi Board
//!
//! Drag-and-drop engine for a single Hlavi kanban board.
//!
//! Cards live in one ordered sequence split across four fixed columns. A
//! drag gesture is resolved against view-measured insertion boundaries and
//! committed as a pure board mutation, and every mutation is written through
//! to a key-value store. Nothing here depends on a particular UI toolkit.

pub mod dnd;
pub mod domain;
pub mod error;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use dnd::{
    AddCardControl, BoundaryDescriptor, ColumnController, DeleteZone, DeleteZoneIcon,
    DragSession, DragState, DragTransfer, IndicatorRegistry, NearestBoundaryResolver,
};
pub use domain::{
    board::{BoardConfig, BoardState, ColumnConfig, InsertPoint},
    card::{Card, CardId, ColumnKind},
};
pub use error::{BoardError, Result};
pub use session::{BoardSession, ColumnSummary};
pub use storage::{memory_storage::MemoryStorage, PersistenceGateway, Storage};

#[cfg(feature = "file-storage")]
pub use storage::file_storage::FileStorage;
