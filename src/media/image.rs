// SPDX-License-Identifier: MPL-2.0
//! Photo decoding and downscaling for the photo picker.

use crate::domain::PhotoConstraints;
use crate::error::{Error, Result};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::{imageops::FilterType, DynamicImage, GenericImageView, ImageFormat};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// How a downscaled photo is written back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Lossless, used at full quality.
    Png,
    /// Lossy, quality in percent (1..=100).
    Jpeg { quality: u8 },
}

impl Encoding {
    /// Picks the encoding for a `0.0..=1.0` quality factor.
    #[must_use]
    pub fn for_quality(quality: f32) -> Self {
        if quality >= 1.0 {
            Encoding::Png
        } else {
            let percent = (quality.max(0.01) * 100.0).round() as u8;
            Encoding::Jpeg {
                quality: percent.clamp(1, 100),
            }
        }
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Encoding::Png => "png",
            Encoding::Jpeg { .. } => "jpg",
        }
    }
}

/// Largest size that fits in `max_width` x `max_height` with the aspect
/// ratio of `width` x `height`. Never enlarges, never returns zero.
#[must_use]
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale = f64::min(
        f64::from(max_width) / f64::from(width),
        f64::from(max_height) / f64::from(height),
    );
    let fitted_w = (f64::from(width) * scale).round() as u32;
    let fitted_h = (f64::from(height) * scale).round() as u32;
    (
        fitted_w.clamp(1, max_width.max(1)),
        fitted_h.clamp(1, max_height.max(1)),
    )
}

/// Decodes the image at `path`.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    Ok(image_rs::open(path)?)
}

/// Writes `image` to `path` with the given encoding.
pub fn save(image: &DynamicImage, path: &Path, encoding: Encoding) -> Result<()> {
    match encoding {
        Encoding::Png => image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| Error::Io(format!("Failed to save image: {e}"))),
        Encoding::Jpeg { quality } => {
            let writer = BufWriter::new(File::create(path)?);
            let mut encoder = JpegEncoder::new_with_quality(writer, quality);
            // JPEG has no alpha channel.
            encoder.encode_image(&image.to_rgb8())?;
            Ok(())
        }
    }
}

/// Applies the photo constraints to a picked file.
///
/// Returns `source` itself when the image already fits. Otherwise the
/// downscaled copy is written into `output_dir` and its path is returned.
pub fn constrain_photo(
    source: &Path,
    constraints: &PhotoConstraints,
    output_dir: &Path,
) -> Result<PathBuf> {
    let image = load_image(source)?;
    let (width, height) = image.dimensions();
    let (target_w, target_h) = fit_within(
        width,
        height,
        constraints.max_width,
        constraints.max_height,
    );

    if (target_w, target_h) == (width, height) {
        return Ok(source.to_path_buf());
    }

    let resized = image.resize_exact(target_w, target_h, FilterType::Lanczos3);
    let encoding = Encoding::for_quality(constraints.quality);

    fs::create_dir_all(output_dir)?;
    let target = output_dir.join(output_name(source, target_w, target_h, encoding));
    save(&resized, &target, encoding)?;

    log::debug!(
        "Downscaled {} from {width}x{height} to {target_w}x{target_h}",
        source.display()
    );
    Ok(target)
}

fn output_name(source: &Path, width: u32, height: u32, encoding: Encoding) -> String {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("photo");
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{stem}-{width}x{height}-{stamp}.{}", encoding.extension())
}
