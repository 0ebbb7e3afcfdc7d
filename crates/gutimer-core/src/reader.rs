//! Input reader: turns a byte stream into timing-loop events.
//!
//! The reader runs on a dedicated OS thread and owns the input stream
//! exclusively. Blocking reads never touch the async side; bytes cross over
//! through the [`EventSender`] channels.

use std::io::{ErrorKind, Read};
use std::thread::{self, JoinHandle};

use gutimer_common::config::TimerConfig;
use gutimer_common::constants::EOT;
use gutimer_common::error::{GutimerError, Result};
use gutimer_common::types::Termination;

use crate::event::EventSender;

/// Reads one byte at a time and forwards it to the timing loop.
#[derive(Debug)]
pub struct InputReader<R> {
    source: R,
    events: EventSender,
    verbose: bool,
}

impl<R: Read> InputReader<R> {
    /// Creates a reader over `source` that reports to `events`.
    pub const fn new(source: R, config: &TimerConfig, events: EventSender) -> Self {
        Self {
            source,
            events,
            verbose: config.verbose,
        }
    }

    /// Reads until end of input, a read error, or the loop going away.
    ///
    /// End of transmission (0x04) ends the stream with
    /// [`Termination::EndOfInput`]. End of file counts as a read failure and,
    /// like any other, ends it with [`Termination::InputFailed`]. The returned
    /// value is what was sent, or `None` if the loop stopped listening first.
    pub fn run(mut self) -> Option<Termination> {
        let mut buf = [0_u8; 1];
        loop {
            match self.source.read(&mut buf) {
                Ok(0) => {
                    tracing::error!("stdin reached end of file");
                    return self.finish(Termination::InputFailed {
                        reason: "end of file".into(),
                    });
                }
                Ok(_) => {
                    let [byte] = buf;
                    if self.verbose {
                        tracing::info!(byte = ?char::from(byte), "read from stdin");
                    }
                    if byte == EOT {
                        return self.finish(Termination::EndOfInput);
                    }
                    if !self.events.key(byte) {
                        return None;
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    tracing::error!(error = %e, "error reading stdin");
                    return self.finish(Termination::InputFailed {
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    fn finish(&self, termination: Termination) -> Option<Termination> {
        self.events
            .terminate(termination.clone())
            .then_some(termination)
    }
}

impl<R: Read + Send + 'static> InputReader<R> {
    /// Starts the reader on its own thread.
    ///
    /// The thread is detached in practice: it stays blocked in `read` until
    /// input arrives or the process exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS refuses to spawn the thread.
    pub fn spawn(self) -> Result<JoinHandle<Option<Termination>>> {
        thread::Builder::new()
            .name("gutimer-input".into())
            .spawn(move || self.run())
            .map_err(|source| GutimerError::Io {
                context: "spawning the input reader",
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use gutimer_common::types::Mode;
    use tokio::time::{self, Duration};

    use super::*;
    use crate::event::{self, TimerEvent};

    /// Yields its script one read at a time.
    struct Scripted(Vec<io::Result<u8>>);

    impl Read for Scripted {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() {
                return Ok(0);
            }
            let byte = self.0.remove(0)?;
            buf[0] = byte;
            Ok(1)
        }
    }

    fn config() -> TimerConfig {
        TimerConfig::new(Mode::Stopwatch, None)
    }

    async fn drain(rx: &mut event::EventReceiver) -> Vec<TimerEvent> {
        let mut ticker = time::interval(Duration::from_secs(3600));
        let _ = ticker.tick().await;
        let mut seen = Vec::new();
        loop {
            let ev = rx.next(&mut ticker).await;
            if ev == TimerEvent::Tick {
                break;
            }
            seen.push(ev);
        }
        seen
    }

    #[tokio::test(start_paused = true)]
    async fn forwards_bytes_then_reports_end_of_file_as_failure() {
        let (tx, mut rx) = event::channel();
        let outcome = InputReader::new(Cursor::new(b"ab".to_vec()), &config(), tx).run();
        let eof = Termination::InputFailed {
            reason: "end of file".into(),
        };
        assert_eq!(outcome, Some(eof.clone()));

        let seen = drain(&mut rx).await;
        assert_eq!(
            seen,
            vec![
                TimerEvent::Terminate(eof),
                TimerEvent::Key(b'a'),
                TimerEvent::Key(b'b'),
            ]
        );
    }

    #[test]
    fn empty_input_exits_with_status_one() {
        let (tx, _rx) = event::channel();
        let outcome = InputReader::new(Cursor::new(Vec::new()), &config(), tx).run();
        assert_eq!(outcome.map(|t| t.exit_code()), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn eot_is_not_forwarded_as_a_key() {
        let (tx, mut rx) = event::channel();
        let input = Cursor::new(vec![b' ', EOT, b'q']);
        let outcome = InputReader::new(input, &config(), tx).run();
        assert_eq!(outcome, Some(Termination::EndOfInput));

        let seen = drain(&mut rx).await;
        assert!(!seen.contains(&TimerEvent::Key(EOT)));
        assert!(!seen.contains(&TimerEvent::Key(b'q')));
        assert!(seen.contains(&TimerEvent::Key(b' ')));
    }

    #[test]
    fn read_error_reports_failure() {
        let (tx, _rx) = event::channel();
        let source = Scripted(vec![Ok(b'x'), Err(io::Error::other("device gone"))]);
        let outcome = InputReader::new(source, &config(), tx).run();
        assert_eq!(
            outcome,
            Some(Termination::InputFailed {
                reason: "device gone".into()
            })
        );
        assert_eq!(outcome.map(|t| t.exit_code()), Some(1));
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let (tx, _rx) = event::channel();
        let source = Scripted(vec![
            Err(io::Error::from(ErrorKind::Interrupted)),
            Ok(EOT),
        ]);
        let outcome = InputReader::new(source, &config(), tx).run();
        assert_eq!(outcome, Some(Termination::EndOfInput));
    }

    #[test]
    fn stops_quietly_when_loop_is_gone() {
        let (tx, rx) = event::channel();
        drop(rx);
        let outcome = InputReader::new(Cursor::new(b"abc".to_vec()), &config(), tx).run();
        assert_eq!(outcome, None);
    }

    #[test]
    fn spawned_reader_returns_its_outcome() {
        let (tx, _rx) = event::channel();
        let verbose = config().with_verbosity(true, false);
        let handle = InputReader::new(Cursor::new(vec![b'x', EOT]), &verbose, tx)
            .spawn()
            .expect("spawn reader");
        assert_eq!(handle.join().ok().flatten(), Some(Termination::EndOfInput));
    }
}
