pub mod coordinate;
pub mod record;

pub use coordinate::{Axis, CoordinateInput};
pub use record::{LocationRecord, NewRecord, RecordId, RecordPatch};
