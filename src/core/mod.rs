//! Page state and the controller that drives it

pub mod controller;
pub mod state;

pub use controller::{PageController, Trigger};
pub use state::{ActionStatus, PageState};
