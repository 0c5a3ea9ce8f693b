mod span;
mod state;
mod store;

pub(crate) use span::Span;
pub(crate) use state::{Confirmation, PeriodTracker};
pub(crate) use store::{Loaded, Store};
