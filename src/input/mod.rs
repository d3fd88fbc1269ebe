pub mod dispatcher;

pub use dispatcher::{dispatch, InputTracker, PointerEvent};
