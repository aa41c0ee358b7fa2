//! Simple buffering loggers.
//!
//! A [`BufferingLogger`] stamps each record with [`get_precise_time_ns`], holds it in a local
//! buffer, and hands full buffers to a user supplied pusher. The pusher sees a final
//! [`LoggerBatch::End`] when the logger is dropped, so that it can flush or close whatever
//! sink it writes to.
//!
//! ```
//! use std::rc::Rc;
//! use std::cell::RefCell;
//! use threeway_logging::{BufferingLogger, LoggerBatch};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let logger = BufferingLogger::new((), Box::new(move |batch: LoggerBatch<(), u32>| {
//!     if let LoggerBatch::Logs(records) = batch {
//!         sink.borrow_mut().extend(records.iter().map(|(_, _, record)| *record));
//!     }
//! }));
//!
//! logger.log(3);
//! logger.log(5);
//! drop(logger);
//!
//! assert_eq!(*seen.borrow(), vec![3, 5]);
//! ```

#![forbid(missing_docs)]

use std::cell::RefCell;
use std::sync::OnceLock;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

static PRECISE_TIME_BASE: OnceLock<(Instant, u64)> = OnceLock::new();

/// Returns the value of a high resolution monotonic counter, in nanoseconds, rebased to be
/// roughly comparable to a unix timestamp.
///
/// Useful for comparing and merging logs from different processes (precision is limited by the
/// precision of the wall clock base; clock skew effects should be taken into consideration).
#[inline(always)]
pub fn get_precise_time_ns() -> u64 {
    let (base, wall_ns) = *PRECISE_TIME_BASE.get_or_init(|| {
        let wall_ns = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(0);
        (Instant::now(), wall_ns)
    });
    wall_ns + base.elapsed().as_nanos() as u64
}

/// Logging methods
pub trait Logger {
    /// The type of loggable record.
    type Record;
    /// Adds `record` to the log.
    fn log(&self, record: Self::Record);
}

/// Default number of records buffered before they are pushed.
pub const BUFFERING_LOGGER_CAPACITY: usize = 1024;

/// What a pusher receives from a [`BufferingLogger`].
pub enum LoggerBatch<'a, S: Clone + 'a, L: Clone + 'a> {
    /// Timestamped records, in the order they were logged.
    Logs(&'a [(u64, S, L)]),
    /// The logger has been dropped; no further batches follow.
    End,
}

/// The closure that receives batches of records.
pub type Pusher<S, L> = Box<dyn FnMut(LoggerBatch<S, L>)>;

enum BufferingLoggerInternal<S: Clone, L: Clone> {
    Active {
        setup: S,
        capacity: usize,
        buffer: RefCell<Vec<(u64, S, L)>>,
        pushers: RefCell<Pusher<S, L>>,
    },
    Inactive,
}

/// A logger that buffers timestamped records and pushes them in batches.
pub struct BufferingLogger<S: Clone, L: Clone> {
    internal: BufferingLoggerInternal<S, L>,
}

impl<S: Clone, L: Clone> BufferingLogger<S, L> {
    /// Creates a logger with the default capacity.
    pub fn new(setup: S, pushers: Pusher<S, L>) -> Self {
        Self::with_capacity(setup, BUFFERING_LOGGER_CAPACITY, pushers)
    }

    /// Creates a logger that pushes whenever `capacity` records are buffered.
    ///
    /// A `capacity` of zero is treated as one.
    pub fn with_capacity(setup: S, capacity: usize, pushers: Pusher<S, L>) -> Self {
        let capacity = capacity.max(1);
        BufferingLogger {
            internal: BufferingLoggerInternal::Active {
                setup,
                capacity,
                buffer: RefCell::new(Vec::with_capacity(capacity)),
                pushers: RefCell::new(pushers),
            },
        }
    }

    /// Creates a logger that discards everything.
    pub fn new_inactive() -> Self {
        BufferingLogger {
            internal: BufferingLoggerInternal::Inactive,
        }
    }

    /// True unless the logger was created with [`BufferingLogger::new_inactive`].
    pub fn is_active(&self) -> bool {
        matches!(self.internal, BufferingLoggerInternal::Active { .. })
    }

    /// Adds `record` to the buffer, pushing the buffer if it is full.
    pub fn log(&self, record: L) {
        self.record(record)
    }

    /// Pushes any buffered records.
    pub fn flush(&self) {
        if let BufferingLoggerInternal::Active { ref buffer, ref pushers, .. } = self.internal {
            let mut buf = buffer.borrow_mut();
            if !buf.is_empty() {
                (*pushers.borrow_mut())(LoggerBatch::Logs(&buf));
                buf.clear();
            }
        }
    }

    fn record(&self, record: L) {
        if let BufferingLoggerInternal::Active { ref setup, capacity, ref buffer, ref pushers } = self.internal {
            let ts = get_precise_time_ns();
            let mut buf = buffer.borrow_mut();
            buf.push((ts, setup.clone(), record));
            if buf.len() >= capacity {
                (*pushers.borrow_mut())(LoggerBatch::Logs(&buf));
                buf.clear();
            }
        }
    }
}

impl<S: Clone, L: Clone> Logger for BufferingLogger<S, L> {
    type Record = L;
    fn log(&self, record: L) {
        self.record(record)
    }
}

impl<S: Clone, L: Clone> Drop for BufferingLogger<S, L> {
    fn drop(&mut self) {
        if let BufferingLoggerInternal::Active { ref buffer, ref pushers, .. } = self.internal {
            let buf = buffer.borrow();
            if !buf.is_empty() {
                (*pushers.borrow_mut())(LoggerBatch::Logs(&buf));
            }
            (*pushers.borrow_mut())(LoggerBatch::End);
        }
    }
}
