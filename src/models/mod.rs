mod request;
mod snapshot;
mod window;

pub use request::{RequestKey, RequestTimeline};
pub use snapshot::Snapshot;
pub use window::ParseWindow;
