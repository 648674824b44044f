// SPDX-License-Identifier: MPL-2.0
//! Draft handling and media selection for the composer screen.
//!
//! - [`state`]: the draft/feed state container and its reducer
//! - [`gateway`]: wraps the media picker and folds its outcomes into the draft

pub mod gateway;
pub mod state;

pub use gateway::Resolution;
pub use state::{Action, ComposerState, DraftPhase};
