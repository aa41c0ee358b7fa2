//! Events logged while sorting and validating ordered values, and pushers that record them.

use std::io::{BufRead, BufReader, Read, Write};
use std::rc::Rc;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::logging_core::{BufferingLogger, LoggerBatch, Pusher};
use crate::order::Category;
use crate::sort::UnorderedPolicy;

/// Identifies the component that produced a record.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Hash, Eq, PartialEq)]
pub struct ThreewaySetup {
    /// Index of the logging component, for callers that run several.
    pub index: usize,
}

/// Logger for sorting and validation events.
pub type ThreewayLogger = Rc<BufferingLogger<ThreewaySetup, ThreewayEvent>>;

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
/// One call into a [`Sorter`](crate::Sorter).
pub struct SortEvent {
    /// Number of elements handed to the sort.
    pub len: usize,
    /// Category of the element comparator.
    pub category: Category,
    /// Policy for unordered elements; `None` for total sorts.
    pub policy: Option<UnorderedPolicy>,
    /// Whether equivalent elements kept their relative order.
    pub stable: bool,
    /// Number of elements removed from the sorted output.
    pub set_aside: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
/// An input that could not be turned into a domain value.
pub struct RejectedEvent {
    /// The field that failed validation.
    pub field: String,
    /// The offending input, as text.
    pub input: String,
    /// Why the input was rejected.
    pub reason: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
/// An event related to three-way comparison.
pub enum ThreewayEvent {
    /// A sort was performed.
    Sort(SortEvent),
    /// An input was rejected.
    Rejected(RejectedEvent),
}

impl From<SortEvent> for ThreewayEvent {
    fn from(v: SortEvent) -> ThreewayEvent { ThreewayEvent::Sort(v) }
}

impl From<RejectedEvent> for ThreewayEvent {
    fn from(v: RejectedEvent) -> ThreewayEvent { ThreewayEvent::Rejected(v) }
}

/// Writes batches of timestamped records to `W` with `bincode`.
pub struct BatchWriter<W: Write> {
    stream: W,
}

impl<W: Write> BatchWriter<W> {
    /// Allocates a new `BatchWriter` wrapping a supplied writer.
    pub fn new(stream: W) -> Self {
        BatchWriter { stream }
    }

    /// Writes one batch, or flushes the stream at the end of the log.
    pub fn push<S, L>(&mut self, batch: LoggerBatch<S, L>) -> Result<(), bincode::Error>
    where
        S: Clone + Serialize,
        L: Clone + Serialize,
    {
        match batch {
            LoggerBatch::Logs(logs) => bincode::serialize_into(&mut self.stream, logs),
            LoggerBatch::End => self.stream.flush().map_err(Into::into),
        }
    }

    /// Recovers the wrapped writer.
    pub fn into_inner(self) -> W {
        self.stream
    }
}

/// Reads back the batches written by a [`BatchWriter`].
pub struct BatchReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> BatchReader<R> {
    /// Allocates a new `BatchReader` wrapping a supplied reader.
    pub fn new(reader: R) -> Self {
        BatchReader { reader: BufReader::new(reader) }
    }
}

impl<R: Read> BatchReader<R> {
    /// The next batch, or `None` once the input ends on a batch boundary.
    ///
    /// A batch that is truncated or malformed is an error.
    pub fn next_batch<S: DeserializeOwned, L: DeserializeOwned>(&mut self) -> Result<Option<Vec<(u64, S, L)>>, bincode::Error> {
        if self.reader.fill_buf()?.is_empty() {
            return Ok(None);
        }
        bincode::deserialize_from(&mut self.reader).map(Some)
    }
}

/// A logger that encodes its batches into `stream`.
///
/// Write errors cannot be returned to the code that logs, so they are reported on stderr.
pub fn writer_logger<W: Write + 'static>(index: usize, stream: W) -> ThreewayLogger {
    let mut writer = BatchWriter::new(stream);
    let pusher: Pusher<ThreewaySetup, ThreewayEvent> = Box::new(move |batch| {
        if let Err(error) = writer.push(batch) {
            eprintln!("threeway: failed to write log batch: {}", error);
        }
    });
    Rc::new(BufferingLogger::new(ThreewaySetup { index }, pusher))
}

/// A logger that prints one line per record on stderr.
pub fn stderr_logger(index: usize) -> ThreewayLogger {
    let pusher: Pusher<ThreewaySetup, ThreewayEvent> = Box::new(|batch| {
        if let LoggerBatch::Logs(logs) = batch {
            for (time, setup, event) in logs {
                eprintln!("[{}] {:>20} {:?}", setup.index, time, event);
            }
        }
    });
    Rc::new(BufferingLogger::new(ThreewaySetup { index }, pusher))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
    }

    fn rejected(input: &str) -> ThreewayEvent {
        RejectedEvent {
            field: "amount".to_string(),
            input: input.to_string(),
            reason: "cannot parse".to_string(),
        }.into()
    }

    #[test]
    fn written_batches_read_back() {
        let bytes = Shared::default();
        let logger = writer_logger(3, bytes.clone());
        logger.log(rejected("abc"));
        logger.log(rejected("1.234"));
        drop(logger);

        let data = bytes.0.borrow().clone();
        let mut reader = BatchReader::new(&data[..]);
        let batch: Vec<(u64, ThreewaySetup, ThreewayEvent)> = reader.next_batch().unwrap().unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].1, ThreewaySetup { index: 3 });
        assert_eq!(batch[1].2, rejected("1.234"));
        assert!(batch[0].0 <= batch[1].0);
        assert!(reader.next_batch::<ThreewaySetup, ThreewayEvent>().unwrap().is_none());
    }

    #[test]
    fn damaged_batches_are_errors() {
        let bytes = Shared::default();
        let logger = writer_logger(0, bytes.clone());
        logger.log(rejected("abc"));
        drop(logger);
        let data = bytes.0.borrow().clone();

        let mut truncated = BatchReader::new(&data[..data.len() - 1]);
        assert!(truncated.next_batch::<ThreewaySetup, ThreewayEvent>().is_err());

        // A length prefix claiming far more records than follow.
        let mut malformed = BatchReader::new(&[0xff_u8; 8][..]);
        assert!(malformed.next_batch::<ThreewaySetup, ThreewayEvent>().is_err());

        let mut empty = BatchReader::new(&[0_u8; 0][..]);
        assert!(empty.next_batch::<ThreewaySetup, ThreewayEvent>().unwrap().is_none());
    }

    #[test]
    fn writer_flushes_at_end() {
        let mut writer = BatchWriter::new(Vec::new());
        writer.push::<ThreewaySetup, ThreewayEvent>(LoggerBatch::End).unwrap();
        assert!(writer.into_inner().is_empty());
    }
}
