pub mod dataset;
pub mod event;
pub mod summary;

pub use dataset::Dataset;
pub use event::{Event, RawEvent};
