// SPDX-License-Identifier: MPL-2.0
use iced_feed::composer::{gateway, Action, ComposerState, DraftPhase, Resolution};
use iced_feed::config::{self, Config, GeneralConfig};
use iced_feed::diagnostics::DiagnosticsCollector;
use iced_feed::domain::{Draft, MediaKind, MediaRef, PickerOutcome};
use iced_feed::i18n::fluent::I18n;
use std::path::Path;
use tempfile::tempdir;

fn write_config(config: &Config, path: &Path) {
    let content = toml::to_string_pretty(config).expect("Failed to serialize config");
    std::fs::write(path, content).expect("Failed to write config");
}

fn texts(state: &ComposerState) -> Vec<&str> {
    state.feed().iter().map(|post| post.text()).collect()
}

#[test]
fn single_post_lands_in_empty_feed() {
    let mut state = ComposerState::new();
    state.apply(Action::SetText("hello".into()));
    state.apply(Action::Commit);

    let head = state.feed().head().expect("post");
    assert_eq!(state.feed().len(), 1);
    assert_eq!(head.text(), "hello");
    assert_eq!(head.image(), None);
    assert_eq!(head.video(), None);
    assert_eq!(state.draft().text, "");
}

#[test]
fn newest_post_comes_first() {
    let mut state = ComposerState::new();
    state.apply(Action::SetText("a".into()));
    state.apply(Action::Commit);
    state.apply(Action::SetText("b".into()));
    state.apply(Action::Commit);

    assert_eq!(texts(&state), ["b", "a"]);
}

#[test]
fn cancelled_pick_creates_nothing() {
    let mut state = ComposerState::new();
    let mut diagnostics = DiagnosticsCollector::default();
    state.set_text("kept");
    state.begin_request(MediaKind::Photo);
    assert_eq!(state.phase(), DraftPhase::MediaPending);
    let before = state.draft().clone();

    let resolution = gateway::resolve(
        &mut state,
        &mut diagnostics,
        MediaKind::Photo,
        PickerOutcome::Cancelled,
    );

    assert_eq!(resolution, Resolution::Ignored);
    assert_eq!(state.draft(), &before);
    assert!(state.feed().is_empty());
    assert_eq!(state.phase(), DraftPhase::Editing);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn media_only_post_is_accepted() {
    let mut state = ComposerState::new();
    state.apply(Action::SetImage(MediaRef::new("img://1")));
    state.apply(Action::SetVideo(MediaRef::new("vid://1")));
    state.apply(Action::SetText(String::new()));
    state.apply(Action::Commit);

    let head = state.feed().head().expect("post");
    assert_eq!(head.text(), "");
    assert_eq!(head.image(), Some(&MediaRef::new("img://1")));
    assert_eq!(head.video(), Some(&MediaRef::new("vid://1")));
}

#[test]
fn commit_prepends_and_copies_the_draft() {
    let mut state = ComposerState::new();
    for round in 0..12 {
        let before: Vec<String> = texts(&state).into_iter().map(String::from).collect();

        state.set_text(format!("post {round}"));
        if round % 3 == 0 {
            state.set_image(MediaRef::new(format!("img://{round}")));
        }
        if round % 4 == 0 {
            state.set_video(MediaRef::new(format!("vid://{round}")));
        }
        let draft = state.draft().clone();

        let id = state.apply(Action::Commit).expect("commit returns id");

        let head = state.feed().head().expect("post");
        assert_eq!(head.id(), id);
        assert!(head.matches_draft(&draft));
        assert_eq!(state.draft(), &Draft::default());
        assert_eq!(state.feed().len(), before.len() + 1);
        let after: Vec<&str> = texts(&state).into_iter().skip(1).collect();
        assert_eq!(after, before);
    }
}

#[test]
fn empty_draft_still_commits() {
    let mut state = ComposerState::new();
    state.commit();
    assert!(state.feed().head().expect("post").is_empty());
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    write_config(&english, &config_path);
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("composer-post-button"), "Post");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    write_config(&french, &config_path);
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("composer-post-button"), "Publier");
}

#[test]
fn cli_language_beats_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn broken_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(dir.path().join("settings.toml"), "picker = [").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}

#[test]
fn picker_section_overrides_constraints() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[picker]\nphoto_max_width = 800\nvideo_max_duration_secs = 15\n",
    )
    .expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(config.picker.photo_constraints().max_width, 800);
    assert_eq!(config.picker.photo_constraints().max_height, 500);
    assert_eq!(config.picker.video_constraints().max_duration_secs, 15);
}
