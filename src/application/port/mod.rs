// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, so the composer logic can be driven
//! by the desktop file dialog in the app and by scripted fakes in tests.
//!
//! # Available Ports
//!
//! - [`picker`]: media selection (photo or video)

pub mod picker;

pub use picker::{MediaPicker, SharedPicker};
