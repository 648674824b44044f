// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the composer screen.
//!
//! Picker cancellations and failures are never shown to the user. They are
//! recorded here instead: every event goes to the `log` facade, which is the
//! only reader at runtime, and into a memory-bounded circular buffer that
//! unit tests inspect.
//!
//! - [`CircularBuffer`]: generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: one recorded event
//! - [`DiagnosticsCollector`]: owner of the buffer, used from `App::update`

mod buffer;
mod collector;
mod events;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsCollector;
pub use events::{DiagnosticEvent, DiagnosticEventKind, PickerResult, UserAction};
