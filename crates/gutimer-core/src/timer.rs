//! The timing loop: clock, pause state and status line.
//!
//! The loop waits on a single merge point (see [`EventReceiver::next`]) and
//! handles one event at a time:
//!
//! - **Tick**: ignored while paused. Otherwise renders the elapsed (or
//!   remaining) time, or, once elapsed time passes the target, renders the
//!   target itself, rings the bell and completes.
//! - **Key**: `q`/`Q` quits; space toggles pause in stopwatch mode; anything
//!   else is ignored.
//! - **Terminate**: ends the session with the carried outcome.
//!
//! Every way out goes through the same tail: one trailing newline, flushed.

use std::io::Write;
use std::time::Duration;

use gutimer_common::config::TimerConfig;
use gutimer_common::constants::{BELL, PAUSE_KEY};
use gutimer_common::types::{Mode, Termination};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::display;
use crate::event::{EventReceiver, TimerEvent};
use crate::session::Session;

/// Drives one timing session and writes its status line to `W`.
#[derive(Debug)]
pub struct TimingLoop<W> {
    mode: Mode,
    target: Duration,
    tick: Duration,
    events: EventReceiver,
    out: W,
}

impl<W: Write> TimingLoop<W> {
    /// Creates a loop for `config` that consumes `events` and renders to `out`.
    pub fn new(config: &TimerConfig, events: EventReceiver, out: W) -> Self {
        Self {
            mode: config.mode,
            target: config.target(),
            tick: config.tick(),
            events,
            out,
        }
    }

    /// Runs until a quit key, a termination event, or the target is passed.
    pub async fn run(&mut self) -> Termination {
        let mut session = Session::start(Instant::now());
        let mut ticker = time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tracing::debug!(mode = %self.mode, tick = ?self.tick, "timing loop started");

        let termination = loop {
            let outcome = match self.events.next(&mut ticker).await {
                TimerEvent::Terminate(termination) => Some(termination),
                TimerEvent::Key(byte) => self.on_key(byte, &mut session),
                TimerEvent::Tick => self.on_tick(&session),
            };
            if let Some(termination) = outcome {
                break termination;
            }
        };

        self.emit("\n");
        tracing::debug!(%termination, "timing loop finished");
        termination
    }

    fn on_tick(&mut self, session: &Session) -> Option<Termination> {
        if session.is_paused() {
            return None;
        }
        let elapsed = session.elapsed(Instant::now());
        if elapsed > self.target {
            self.render(self.target);
            self.emit(BELL);
            return Some(Termination::Completed);
        }
        self.render(elapsed);
        None
    }

    fn on_key(&self, byte: u8, session: &mut Session) -> Option<Termination> {
        match byte {
            b'q' | b'Q' => Some(Termination::Quit),
            PAUSE_KEY if self.mode.is_pausable() => {
                let paused = session.toggle_pause(Instant::now());
                tracing::debug!(paused, "pause toggled");
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, shown: Duration) {
        let line = display::status_line(self.mode, self.target, shown);
        self.emit(&format!("\r{line}"));
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
        {
            tracing::warn!(error = %e, "failed to write status line");
        }
    }

    /// The output sink.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the loop and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}
