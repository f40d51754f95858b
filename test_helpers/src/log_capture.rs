//! Capture `tracing` output emitted on the current thread.
//!
//! # Examples
//!
//! ```
//! use sundries_test_helpers::LogCapture;
//!
//! let capture = LogCapture::new();
//! capture.run(|| {
//!     // code that emits tracing events
//! });
//! assert!(capture.contents().is_empty());
//! ```

use std::{io, sync::Arc};

use parking_lot::Mutex;
use tracing_subscriber::{filter::LevelFilter, fmt::MakeWriter, util::SubscriberInitExt};

/// Buffer collecting formatted events, shared by every clone.
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Create an empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` with a subscriber writing plain-text events, `DEBUG` and
    /// above, into this capture. The subscriber only applies to the current
    /// thread and is removed when `action` returns.
    pub fn run<R>(&self, action: impl FnOnce() -> R) -> R {
        let _guard = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(LevelFilter::DEBUG)
            .finish()
            .set_default();
        action()
    }

    /// Everything captured so far.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }
}

/// Writer handed out to the subscriber for each event.
#[derive(Debug)]
pub struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}
