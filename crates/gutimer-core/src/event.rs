//! Event plumbing between the input reader and the timing loop.
//!
//! Keystrokes and terminations travel on separate one-way channels and are
//! merged with the tick timer at a single `select!` in [`EventReceiver::next`].

use gutimer_common::types::Termination;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::Interval;

/// An event handled by the timing loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// The session must end with this outcome.
    Terminate(Termination),
    /// A byte was read from the input stream.
    Key(u8),
    /// A periodic tick for display refresh.
    Tick,
}

/// Producer half, held by the input reader and the interrupt handler.
#[derive(Debug, Clone)]
pub struct EventSender {
    keys: UnboundedSender<u8>,
    terminations: UnboundedSender<Termination>,
}

impl EventSender {
    /// Forwards a keystroke.
    ///
    /// Returns `false` once the timing loop has stopped listening.
    pub fn key(&self, byte: u8) -> bool {
        self.keys.send(byte).is_ok()
    }

    /// Asks the timing loop to end the session.
    ///
    /// Returns `false` once the timing loop has stopped listening.
    pub fn terminate(&self, termination: Termination) -> bool {
        self.terminations.send(termination).is_ok()
    }
}

/// Consumer half, owned by the timing loop.
#[derive(Debug)]
pub struct EventReceiver {
    keys: UnboundedReceiver<u8>,
    terminations: UnboundedReceiver<Termination>,
}

impl EventReceiver {
    /// Waits for the next event.
    ///
    /// A pending termination always wins over a pending keystroke, and a
    /// pending keystroke over a due tick. Closed channels are skipped, so the
    /// tick keeps the loop alive after every sender is gone.
    pub async fn next(&mut self, ticker: &mut Interval) -> TimerEvent {
        tokio::select! {
            biased;
            Some(termination) = self.terminations.recv() => TimerEvent::Terminate(termination),
            Some(byte) = self.keys.recv() => TimerEvent::Key(byte),
            _ = ticker.tick() => TimerEvent::Tick,
        }
    }
}

/// Creates a connected sender/receiver pair.
#[must_use]
pub fn channel() -> (EventSender, EventReceiver) {
    let (keys_tx, keys_rx) = mpsc::unbounded_channel();
    let (term_tx, term_rx) = mpsc::unbounded_channel();
    (
        EventSender {
            keys: keys_tx,
            terminations: term_tx,
        },
        EventReceiver {
            keys: keys_rx,
            terminations: term_rx,
        },
    )
}
