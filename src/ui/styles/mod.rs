// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the composer screen widgets.

pub mod button;
pub mod container;
pub mod text_input;
pub mod tooltip;
