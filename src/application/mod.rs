// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the composer depends on.
//!
//! Concrete adapters live in [`crate::infrastructure`].

pub mod port;
