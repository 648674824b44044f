// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, wrapping the native file dialog and the media
//! decoders.

pub mod file_picker;

pub use file_picker::DesktopPicker;
