//! Event records and the calendar container that owns them.

mod container;
mod event;

pub use container::Calendar;
pub use event::EventRecord;
