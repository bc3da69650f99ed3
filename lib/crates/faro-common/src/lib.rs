pub mod types;

pub use types::{CycleOutcome, RefreshEvent, Region, RegionKind, StatusToken};
