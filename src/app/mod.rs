// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` owns the composer (draft and feed), one video player per posted
//! video, and the window metrics the feed is laid out against. Messages are
//! dispatched to the handlers in `update`, which return the follow-up tasks
//! (picker requests, poster loading).

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::SharedPicker;
use crate::composer::ComposerState;
use crate::config::{self, Config, PickerConfig};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::domain::{MediaKind, PostId};
use crate::i18n::fluent::I18n;
use crate::infrastructure::DesktopPicker;
use crate::media;
use crate::ui::composer_bar;
use crate::ui::feed::ScrollMetrics;
use crate::ui::theming::ThemeMode;
use crate::video_player::VideoPlayer;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    composer: ComposerState,
    players: HashMap<PostId, VideoPlayer>,
    viewport_width: f32,
    scroll: ScrollMetrics,
    theme_mode: ThemeMode,
    picker_config: PickerConfig,
    picker: SharedPicker,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("posts", &self.composer.feed().len())
            .field("players", &self.players.len())
            .field("viewport_width", &self.viewport_width)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Phone-like window.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // iced requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and wires the desktop picker.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let output_dir = paths::get_picked_media_dir_with_override(None)
            .unwrap_or_else(|| std::env::temp_dir().join("IcedFeed").join("picked"));
        let picker = DesktopPicker::new(output_dir).with_titles(
            i18n.tr("picker-photo-title"),
            i18n.tr("picker-video-title"),
        );

        let mut app = Self::with_picker(Arc::new(picker), i18n, &config);

        if let Some(warning) = config_warning {
            app.diagnostics.log_warning(warning);
        }
        if let Err(e) = media::video::init_ffmpeg() {
            app.diagnostics.log_warning(e.to_string());
        }

        (app, Task::none())
    }

    /// Builds the application around an arbitrary picker.
    #[must_use]
    pub fn with_picker(picker: SharedPicker, i18n: I18n, config: &Config) -> Self {
        Self {
            i18n,
            composer: ComposerState::new(),
            players: HashMap::new(),
            viewport_width: WINDOW_DEFAULT_WIDTH as f32,
            scroll: ScrollMetrics::new(WINDOW_DEFAULT_HEIGHT as f32 - composer_bar::BAR_HEIGHT),
            theme_mode: config.general.theme_mode,
            picker_config: config.picker.clone(),
            picker,
            diagnostics: DiagnosticsCollector::new(BufferCapacity::new(
                config.diagnostics.buffer_capacity,
            )),
        }
    }

    #[must_use]
    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }

    #[must_use]
    pub fn player(&self, post_id: PostId) -> Option<&VideoPlayer> {
        self.players.get(&post_id)
    }

    #[cfg(test)]
    fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_video_subscription(&self.players),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            composer: &mut self.composer,
            players: &mut self.players,
            diagnostics: &mut self.diagnostics,
            picker: &self.picker,
            picker_config: &self.picker_config,
            viewport_width: &mut self.viewport_width,
            scroll: &mut self.scroll,
        };

        match message {
            Message::TextChanged(value) => {
                ctx.composer.set_text(value);
                Task::none()
            }
            Message::PickImage => update::handle_pick(&mut ctx, MediaKind::Photo),
            Message::PickVideo => update::handle_pick(&mut ctx, MediaKind::Video),
            Message::PickerResolved { kind, outcome } => {
                update::handle_picker_resolved(&mut ctx, kind, outcome)
            }
            Message::Post => update::handle_post(&mut ctx),
            Message::Video(post_id, video_message) => {
                update::handle_video_message(&mut ctx, post_id, video_message)
            }
            Message::Playback(post_id, playback_message) => {
                update::handle_playback(&mut ctx, post_id, playback_message)
            }
            Message::PosterLoaded { post_id, result } => {
                update::handle_poster_loaded(&mut ctx, post_id, result)
            }
            Message::FeedScrolled(metrics) => update::handle_feed_scrolled(&mut ctx, metrics),
            Message::WindowResized { width, height } => {
                update::handle_window_resized(&mut ctx, width, height)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            composer: &self.composer,
            players: &self.players,
            viewport_width: self.viewport_width,
            scroll: self.scroll,
        })
    }
}
