//! View-state coordination for the experience page

mod coordinator;
mod state;
mod timer;

pub use coordinator::{Card, ViewState};
pub use state::FilterState;
pub use timer::{CancelableDelay, DelayTicket};
