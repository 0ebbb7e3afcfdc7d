//! # gutimer-core
//!
//! The interactive timing core behind the `gutimer` binary.
//!
//! Two concurrent parts cooperate through one-way channels:
//! - [`reader::InputReader`] owns the input stream on its own thread and
//!   turns each byte into an event.
//! - [`timer::TimingLoop`] owns the clock, the pause state and the status
//!   line, and decides when the run ends.
//!
//! [`terminal::CbreakGuard`] switches the terminal into character-at-a-time
//! mode for the lifetime of a run and restores it on drop.

pub mod display;
pub mod event;
pub mod reader;
pub mod session;
pub mod terminal;
pub mod timer;

pub use event::{EventReceiver, EventSender};
pub use reader::InputReader;
pub use terminal::CbreakGuard;
pub use timer::TimingLoop;
