// SPDX-License-Identifier: MPL-2.0
//! User interface modules: the composer bar, the feed and the shared look.

pub mod composer_bar;
pub mod design_tokens;
pub mod feed;
pub mod icons;
pub mod styles;
pub mod theming;
