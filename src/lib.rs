// SPDX-License-Identifier: MPL-2.0
//! `iced_feed` is a single-screen composer and feed built with the Iced GUI
//! framework.
//!
//! A draft (text, an optional photo, an optional video) is filled through a
//! composer bar and native file pickers, then posted to an in-memory feed
//! shown newest first. Posted videos play inline.

pub mod app;
pub mod application;
pub mod composer;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
pub mod video_player;
