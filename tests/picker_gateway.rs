// SPDX-License-Identifier: MPL-2.0
//! Picker round trips through the gateway, with pickers resolved out of
//! order and with real files on disk.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use iced_feed::application::port::{MediaPicker, SharedPicker};
use iced_feed::composer::{gateway, ComposerState, Resolution};
use iced_feed::config::PickerConfig;
use iced_feed::diagnostics::{BufferCapacity, DiagnosticsCollector};
use iced_feed::domain::{MediaKind, MediaRef, PickerOutcome, PickerRequest};
use iced_feed::infrastructure::file_picker::process_selection;
use image_rs::{ImageFormat, RgbaImage};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use tokio::sync::oneshot;

/// Each pick waits until the test completes it through the stored sender.
#[derive(Default)]
struct ManualPicker {
    pending: Mutex<Vec<oneshot::Sender<PickerOutcome>>>,
}

impl ManualPicker {
    fn complete(&self, index: usize, outcome: PickerOutcome) {
        let sender = self.pending.lock().expect("lock").remove(index);
        sender.send(outcome).expect("receiver alive");
    }
}

impl MediaPicker for ManualPicker {
    fn pick(&self, _request: PickerRequest) -> BoxFuture<'static, PickerOutcome> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().expect("lock").push(tx);
        rx.map(|outcome| outcome.unwrap_or(PickerOutcome::Cancelled))
            .boxed()
    }
}

fn collector() -> DiagnosticsCollector {
    DiagnosticsCollector::new(BufferCapacity::default())
}

#[tokio::test]
async fn overlapping_picks_resolve_last_wins() {
    let manual = Arc::new(ManualPicker::default());
    let picker: SharedPicker = manual.clone();
    let config = PickerConfig::default();
    let mut state = ComposerState::new();
    let mut diagnostics = collector();

    let first = gateway::request(
        &mut state,
        &mut diagnostics,
        &picker,
        gateway::image_request(&config),
    );
    let second = gateway::request(
        &mut state,
        &mut diagnostics,
        &picker,
        gateway::image_request(&config),
    );

    // The second dialog closes first.
    manual.complete(1, PickerOutcome::Selected(MediaRef::new("img://second")));
    let (kind, outcome) = second.await;
    gateway::resolve(&mut state, &mut diagnostics, kind, outcome);
    assert!(state.is_pending(MediaKind::Photo));

    manual.complete(0, PickerOutcome::Selected(MediaRef::new("img://first")));
    let (kind, outcome) = first.await;
    gateway::resolve(&mut state, &mut diagnostics, kind, outcome);

    assert_eq!(state.draft().image, Some(MediaRef::new("img://first")));
    assert!(!state.is_pending(MediaKind::Photo));
}

#[tokio::test]
async fn editing_continues_while_a_pick_is_open() {
    let manual = Arc::new(ManualPicker::default());
    let picker: SharedPicker = manual.clone();
    let mut state = ComposerState::new();
    let mut diagnostics = collector();

    let pick = gateway::request(
        &mut state,
        &mut diagnostics,
        &picker,
        gateway::video_request(&PickerConfig::default()),
    );

    state.set_text("typed meanwhile");
    state.commit();

    manual.complete(0, PickerOutcome::Selected(MediaRef::new("vid://late")));
    let (kind, outcome) = pick.await;
    let resolution = gateway::resolve(&mut state, &mut diagnostics, kind, outcome);

    assert_eq!(resolution, Resolution::Applied);
    assert_eq!(state.feed().head().expect("post").video(), None);
    assert_eq!(state.draft().video, Some(MediaRef::new("vid://late")));
}

#[tokio::test]
async fn dropped_dialog_counts_as_cancel() {
    let manual = Arc::new(ManualPicker::default());
    let picker: SharedPicker = manual.clone();
    let mut state = ComposerState::new();
    let mut diagnostics = collector();
    let before = state.clone();

    let pick = gateway::request(
        &mut state,
        &mut diagnostics,
        &picker,
        gateway::image_request(&PickerConfig::default()),
    );
    manual.pending.lock().expect("lock").clear();

    let (kind, outcome) = pick.await;
    assert_eq!(outcome, PickerOutcome::Cancelled);
    assert_eq!(
        gateway::resolve(&mut state, &mut diagnostics, kind, outcome),
        Resolution::Ignored
    );
    assert_eq!(state, before);
}

#[test]
fn oversized_photo_is_downscaled_into_output_dir() {
    let source_dir = tempdir().expect("tempdir");
    let output_dir = tempdir().expect("tempdir");
    let source = source_dir.path().join("wide.png");
    RgbaImage::new(1200, 600)
        .save_with_format(&source, ImageFormat::Png)
        .expect("write png");

    let request = gateway::image_request(&PickerConfig::default());
    let outcome = process_selection(&source, &request, output_dir.path());

    let selected = outcome.selected().expect("selected").to_path().expect("file");
    assert!(selected.starts_with(output_dir.path()));
    let image = image_rs::open(&selected).expect("readable output");
    assert_eq!((image.width(), image.height()), (500, 250));
}

#[test]
fn lossy_quality_writes_jpeg() {
    let source_dir = tempdir().expect("tempdir");
    let output_dir = tempdir().expect("tempdir");
    let source = source_dir.path().join("tall.png");
    RgbaImage::new(300, 900)
        .save_with_format(&source, ImageFormat::Png)
        .expect("write png");
    let config = PickerConfig {
        photo_quality: 0.8,
        ..PickerConfig::default()
    };

    let outcome = process_selection(&source, &gateway::image_request(&config), output_dir.path());

    let selected = outcome.selected().expect("selected").to_path().expect("file");
    assert_eq!(selected.extension().and_then(|e| e.to_str()), Some("jpg"));
    let image = image_rs::open(&selected).expect("readable output");
    assert_eq!((image.width(), image.height()), (167, 500));
}
