// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector lives inside the application state and is only touched from
//! the update loop, so it writes straight into its buffer. Every event is
//! mirrored to the `log` facade at a level matching its severity; the buffer
//! itself is only read back by tests.

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, PickerResult, UserAction,
};
use crate::domain::{MediaKind, PostId};

/// Central collector for diagnostic events.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
        }
    }

    pub fn log_action(&mut self, action: UserAction) {
        self.record(DiagnosticEventKind::UserAction(action));
    }

    pub fn log_picker(&mut self, kind: MediaKind, result: PickerResult) {
        self.record(DiagnosticEventKind::Picker { kind, result });
    }

    pub fn log_playback(&mut self, post_id: PostId, message: impl Into<String>) {
        self.record(DiagnosticEventKind::Playback {
            post_id,
            message: message.into(),
        });
    }

    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.record(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    fn record(&mut self, kind: DiagnosticEventKind) {
        match &kind {
            DiagnosticEventKind::UserAction(_)
            | DiagnosticEventKind::Picker {
                result: PickerResult::Selected,
                ..
            } => log::debug!("{kind}"),
            DiagnosticEventKind::Picker {
                result: PickerResult::Cancelled,
                ..
            } => log::info!("{kind}"),
            DiagnosticEventKind::Picker {
                result: PickerResult::Failed { .. },
                ..
            }
            | DiagnosticEventKind::Playback { .. }
            | DiagnosticEventKind::Warning { .. } => log::warn!("{kind}"),
        }
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[cfg(test)]
    pub(crate) fn last(&self) -> Option<&DiagnosticEvent> {
        self.buffer.last()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
