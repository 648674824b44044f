// SPDX-License-Identifier: MPL-2.0
//! Media picker port definition.
//!
//! A picker receives one [`PickerRequest`] and eventually resolves to exactly
//! one [`PickerOutcome`]. The returned future is `'static` so callers can hand
//! it straight to an `iced::Task` and go back to processing events while the
//! user is busy in the system dialog.

use crate::domain::{PickerOutcome, PickerRequest};
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Source of user-selected media.
///
/// Implementations must not panic on user cancellation or on device errors:
/// both are reported through the outcome.
pub trait MediaPicker: Send + Sync {
    /// Starts a pick. Several picks may be in flight at once; each resolves
    /// independently.
    fn pick(&self, request: PickerRequest) -> BoxFuture<'static, PickerOutcome>;
}

/// Picker handle shared between the app state and in-flight tasks.
pub type SharedPicker = Arc<dyn MediaPicker>;
