pub mod add_card;
pub mod column;
pub mod delete_zone;
pub mod drag;
pub mod indicator;
pub mod resolver;

pub use add_card::AddCardControl;
pub use column::ColumnController;
pub use delete_zone::{DeleteZone, DeleteZoneIcon};
pub use drag::{DragSession, DragState, DragTransfer};
pub use indicator::{BoundaryDescriptor, IndicatorRegistry};
pub use resolver::NearestBoundaryResolver;
