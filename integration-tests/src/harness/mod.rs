pub mod site;
pub mod tracing;

pub use site::TestSite;
pub use tracing::{CapturedEvent, capture_events};
