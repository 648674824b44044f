// SPDX-License-Identifier: MPL-2.0
//! Media selection gateway.
//!
//! Issues picker requests and folds their outcomes back into the draft.
//! Cancellations and failures stop here: they are written to diagnostics and
//! leave the draft and the feed exactly as they were.

use super::state::ComposerState;
use crate::application::port::SharedPicker;
use crate::config::PickerConfig;
use crate::diagnostics::{DiagnosticsCollector, PickerResult, UserAction};
use crate::domain::{MediaKind, PickerOutcome, PickerRequest};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

/// What a resolved pick did to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The draft field of that kind was overwritten.
    Applied,
    /// Cancelled or failed; nothing changed.
    Ignored,
}

/// Photo request with the configured constraints.
#[must_use]
pub fn image_request(config: &PickerConfig) -> PickerRequest {
    PickerRequest::Photo(config.photo_constraints())
}

/// Video request with the configured constraints.
#[must_use]
pub fn video_request(config: &PickerConfig) -> PickerRequest {
    PickerRequest::Video(config.video_constraints())
}

/// Starts a pick and marks it pending.
///
/// The returned future owns everything it needs, so it can outlive the
/// borrow of `state`. Overlapping requests for the same kind are not
/// cancelled; whichever resolves last wins.
pub fn request(
    state: &mut ComposerState,
    diagnostics: &mut DiagnosticsCollector,
    picker: &SharedPicker,
    request: PickerRequest,
) -> BoxFuture<'static, (MediaKind, PickerOutcome)> {
    let kind = request.kind();
    diagnostics.log_action(match kind {
        MediaKind::Photo => UserAction::RequestImage,
        MediaKind::Video => UserAction::RequestVideo,
    });
    state.begin_request(kind);

    picker
        .pick(request)
        .map(move |outcome| (kind, outcome))
        .boxed()
}

/// Applies a picker outcome to the draft.
pub fn resolve(
    state: &mut ComposerState,
    diagnostics: &mut DiagnosticsCollector,
    kind: MediaKind,
    outcome: PickerOutcome,
) -> Resolution {
    state.finish_request(kind);

    match outcome {
        PickerOutcome::Selected(media) => {
            diagnostics.log_picker(kind, PickerResult::Selected);
            match kind {
                MediaKind::Photo => state.set_image(media),
                MediaKind::Video => state.set_video(media),
            }
            Resolution::Applied
        }
        PickerOutcome::Cancelled => {
            diagnostics.log_picker(kind, PickerResult::Cancelled);
            Resolution::Ignored
        }
        PickerOutcome::Failed(error) => {
            diagnostics.log_picker(
                kind,
                PickerResult::Failed {
                    message: error.to_string(),
                },
            );
            Resolution::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::MediaPicker;
    use crate::diagnostics::DiagnosticEventKind;
    use crate::domain::{MediaRef, PickerError, VideoQuality};
    use std::sync::{Arc, Mutex};

    /// Replays queued outcomes and remembers the requests it saw.
    struct ScriptedPicker {
        outcomes: Mutex<Vec<PickerOutcome>>,
        seen: Mutex<Vec<PickerRequest>>,
    }

    impl ScriptedPicker {
        fn new(outcomes: Vec<PickerOutcome>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl MediaPicker for ScriptedPicker {
        fn pick(&self, request: PickerRequest) -> BoxFuture<'static, PickerOutcome> {
            self.seen.lock().unwrap().push(request);
            let outcome = self
                .outcomes
                .lock()
                .unwrap()
                .pop()
                .unwrap_or(PickerOutcome::Cancelled);
            futures_util::future::ready(outcome).boxed()
        }
    }

    #[test]
    fn requests_carry_fixed_constraints() {
        let config = PickerConfig::default();
        match image_request(&config) {
            PickerRequest::Photo(photo) => {
                assert_eq!((photo.max_width, photo.max_height), (500, 500));
                assert!((photo.quality - 1.0).abs() < f32::EPSILON);
            }
            other => panic!("expected photo request, got {other:?}"),
        }
        match video_request(&config) {
            PickerRequest::Video(video) => {
                assert_eq!(video.quality, VideoQuality::High);
                assert_eq!(video.max_duration_secs, 30);
            }
            other => panic!("expected video request, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn selected_image_lands_in_draft() {
        let picker = ScriptedPicker::new(vec![PickerOutcome::Selected(MediaRef::new(
            "file:///tmp/a.png",
        ))]);
        let shared: SharedPicker = picker.clone();
        let mut state = ComposerState::new();
        let mut diagnostics = DiagnosticsCollector::default();

        let pending = request(
            &mut state,
            &mut diagnostics,
            &shared,
            image_request(&PickerConfig::default()),
        );
        assert!(state.is_pending(MediaKind::Photo));

        let (kind, outcome) = pending.await;
        let resolution = resolve(&mut state, &mut diagnostics, kind, outcome);

        assert_eq!(resolution, Resolution::Applied);
        assert_eq!(state.draft().image, Some(MediaRef::new("file:///tmp/a.png")));
        assert!(!state.is_pending(MediaKind::Photo));
        assert_eq!(picker.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn cancelled_pick_leaves_state_untouched() {
        let shared: SharedPicker = ScriptedPicker::new(vec![PickerOutcome::Cancelled]);
        let mut state = ComposerState::new();
        state.set_text("keep me");
        state.set_image(MediaRef::new("img://1"));
        state.commit();
        state.set_text("draft");
        let before = state.clone();
        let mut diagnostics = DiagnosticsCollector::default();

        let (kind, outcome) = request(
            &mut state,
            &mut diagnostics,
            &shared,
            image_request(&PickerConfig::default()),
        )
        .await;
        resolve(&mut state, &mut diagnostics, kind, outcome);

        assert_eq!(state, before);
        assert!(matches!(
            diagnostics.last().map(|event| &event.kind),
            Some(DiagnosticEventKind::Picker {
                kind: MediaKind::Photo,
                result: PickerResult::Cancelled,
            })
        ));
    }

    #[test]
    fn failed_pick_is_logged_not_applied() {
        let mut state = ComposerState::new();
        state.set_video(MediaRef::new("vid://old"));
        state.begin_request(MediaKind::Video);
        let mut diagnostics = DiagnosticsCollector::default();

        let resolution = resolve(
            &mut state,
            &mut diagnostics,
            MediaKind::Video,
            PickerOutcome::Failed(PickerError::new("permission denied")),
        );

        assert_eq!(resolution, Resolution::Ignored);
        assert_eq!(state.draft().video, Some(MediaRef::new("vid://old")));
        assert!(matches!(
            diagnostics.last().map(|event| &event.kind),
            Some(DiagnosticEventKind::Picker {
                result: PickerResult::Failed { message },
                ..
            }) if message == "permission denied"
        ));
    }

    #[test]
    fn overlapping_picks_last_resolution_wins() {
        let mut state = ComposerState::new();
        let mut diagnostics = DiagnosticsCollector::default();
        state.begin_request(MediaKind::Photo);
        state.begin_request(MediaKind::Photo);

        resolve(
            &mut state,
            &mut diagnostics,
            MediaKind::Photo,
            PickerOutcome::Selected(MediaRef::new("img://second")),
        );
        resolve(
            &mut state,
            &mut diagnostics,
            MediaKind::Photo,
            PickerOutcome::Selected(MediaRef::new("img://first")),
        );

        assert_eq!(state.draft().image, Some(MediaRef::new("img://first")));
        assert!(!state.is_pending(MediaKind::Photo));
    }

    #[test]
    fn image_and_video_resolutions_are_independent() {
        let mut state = ComposerState::new();
        let mut diagnostics = DiagnosticsCollector::default();

        resolve(
            &mut state,
            &mut diagnostics,
            MediaKind::Video,
            PickerOutcome::Selected(MediaRef::new("vid://1")),
        );
        resolve(
            &mut state,
            &mut diagnostics,
            MediaKind::Photo,
            PickerOutcome::Cancelled,
        );

        assert_eq!(state.draft().video, Some(MediaRef::new("vid://1")));
        assert_eq!(state.draft().image, None);
    }
}
