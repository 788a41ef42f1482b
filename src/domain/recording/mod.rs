//! Recording domain module

mod duration;

pub use duration::{Duration, DEFAULT_LISTEN_SECS, MAX_CAPTURE_SECS};
