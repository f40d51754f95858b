//! Test helpers shared across crates.
//!
//! This crate provides a thread-safe recorder for release order, a labelled
//! fault type whose identity survives boxing, and a capture for `tracing`
//! output.

pub mod fault;
pub mod log_capture;
pub mod release_log;

pub use fault::LabelledFault;
pub use log_capture::LogCapture;
pub use release_log::ReleaseLog;
