// SPDX-License-Identifier: MPL-2.0
//! Native file dialog adapter implementing the [`MediaPicker`] port.
//!
//! The dialog itself is asynchronous (`rfd::AsyncFileDialog`). Everything
//! that happens after the user picked a file (decoding, downscaling,
//! probing) is blocking and runs on the Tokio blocking pool.
//!
//! [`MediaPicker`]: crate::application::port::MediaPicker

use crate::application::port::MediaPicker;
use crate::domain::{
    MediaKind, MediaRef, PhotoConstraints, PickerError, PickerOutcome, PickerRequest,
    VideoConstraints,
};
use crate::media::{self, extensions};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::path::{Path, PathBuf};

/// Picks photos and videos from the local file system.
#[derive(Debug, Clone)]
pub struct DesktopPicker {
    /// Where downscaled photos are written.
    output_dir: PathBuf,
    photo_title: String,
    video_title: String,
}

impl DesktopPicker {
    #[must_use]
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            photo_title: String::from("Choose a photo"),
            video_title: String::from("Choose a video"),
        }
    }

    /// Sets the (localized) dialog titles.
    #[must_use]
    pub fn with_titles(mut self, photo: impl Into<String>, video: impl Into<String>) -> Self {
        self.photo_title = photo.into();
        self.video_title = video.into();
        self
    }
}

impl MediaPicker for DesktopPicker {
    fn pick(&self, request: PickerRequest) -> BoxFuture<'static, PickerOutcome> {
        let output_dir = self.output_dir.clone();
        let (title, filter_name, filter_ext) = match request.kind() {
            MediaKind::Photo => (self.photo_title.clone(), "Images", extensions::IMAGE_EXTENSIONS),
            MediaKind::Video => (self.video_title.clone(), "Videos", extensions::VIDEO_EXTENSIONS),
        };

        async move {
            let handle = rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(filter_name, filter_ext)
                .pick_file()
                .await;

            let Some(handle) = handle else {
                return PickerOutcome::Cancelled;
            };
            let path = handle.path().to_path_buf();

            tokio::task::spawn_blocking(move || process_selection(&path, &request, &output_dir))
                .await
                .unwrap_or_else(|e| {
                    PickerOutcome::Failed(PickerError::new(format!("Picker task failed: {e}")))
                })
        }
        .boxed()
    }
}

/// Applies the request's constraints to a file the user selected.
///
/// Blocking: decodes images and opens videos.
pub fn process_selection(path: &Path, request: &PickerRequest, output_dir: &Path) -> PickerOutcome {
    if media::kind_for_path(path) != Some(request.kind()) {
        return PickerOutcome::Failed(PickerError::new(format!(
            "Unsupported {} file: {}",
            request.kind(),
            path.display()
        )));
    }

    let result = match request {
        PickerRequest::Photo(constraints) => select_photo(path, constraints, output_dir),
        PickerRequest::Video(constraints) => select_video(path, constraints),
    };

    match result {
        Ok(selected) => PickerOutcome::Selected(MediaRef::from_path(&selected)),
        Err(error) => PickerOutcome::Failed(error),
    }
}

fn select_photo(
    path: &Path,
    constraints: &PhotoConstraints,
    output_dir: &Path,
) -> Result<PathBuf, PickerError> {
    Ok(media::image::constrain_photo(path, constraints, output_dir)?)
}

fn select_video(path: &Path, constraints: &VideoConstraints) -> Result<PathBuf, PickerError> {
    let metadata = media::video::probe(path)?;
    metadata
        .check_duration(constraints.max_duration_secs)
        .map_err(crate::error::Error::from)?;
    log::debug!(
        "Picked {}: {}x{} {:.1}s ({:?} quality requested)",
        path.display(),
        metadata.width,
        metadata.height,
        metadata.duration_secs,
        constraints.quality
    );
    Ok(path.to_path_buf())
}
