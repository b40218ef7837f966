// SPDX-License-Identifier: GPL-3.0-only

//! Still photo capture and the in-memory capture history
//!
//! Captured photos live only for the duration of the session. They are
//! never written to disk.

use std::sync::Arc;

use cosmic::widget::image::Handle;
use image::RgbaImage;
use tracing::debug;

use crate::backends::camera::types::CameraFrame;
use crate::errors::PhotoError;

/// A photo captured during this session
#[derive(Debug, Clone)]
pub struct CapturedImage {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Widget handle owning the RGBA pixel data
    pub handle: Handle,
}

impl CapturedImage {
    /// Build a captured image from raw RGBA pixels.
    ///
    /// Fails when the pixel data does not match the reported dimensions, so
    /// a truncated frame can never enter the history.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, PhotoError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(PhotoError::InvalidFrameData(format!(
                "{}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                pixels.len()
            )));
        }

        Ok(Self {
            width,
            height,
            handle: Handle::from_rgba(width, height, pixels),
        })
    }
}

/// Session-scoped capture history, newest first
///
/// Recording a capture never touches previously recorded entries, it only
/// prepends. The history starts empty on every launch.
#[derive(Debug, Clone, Default)]
pub struct CaptureHistory {
    images: Vec<CapturedImage>,
}

impl CaptureHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a capture so the newest photo is always first
    pub fn record(&mut self, image: CapturedImage) {
        self.images.insert(0, image);
    }

    /// The most recent capture, if any
    pub fn latest(&self) -> Option<&CapturedImage> {
        self.images.first()
    }

    /// Iterate captures from newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &CapturedImage> {
        self.images.iter()
    }

    /// Number of captures this session
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether nothing has been captured yet
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Turn the latest preview frame into a captured photo.
///
/// The pixel copy and validation run on a blocking thread so the UI stays
/// responsive. The frame is RGBA straight from the preview pipeline.
pub async fn capture_still(frame: Arc<CameraFrame>) -> Result<CapturedImage, PhotoError> {
    let result = tokio::task::spawn_blocking(move || {
        let expected = frame.expected_len();
        if frame.data.len() < expected {
            return Err(PhotoError::InvalidFrameData(format!(
                "frame has {} bytes, expected {}",
                frame.data.len(),
                expected
            )));
        }

        // Keep exactly one frame worth of pixels, dropping any trailing padding
        let pixels = frame.data[..expected].to_vec();

        // image validates the buffer layout before we hand it to the widget
        RgbaImage::from_raw(frame.width, frame.height, pixels)
            .ok_or_else(|| {
                PhotoError::InvalidFrameData("pixel buffer rejected by image crate".to_string())
            })
            .and_then(|img| {
                let (width, height) = img.dimensions();
                CapturedImage::from_rgba(width, height, img.into_raw())
            })
    })
    .await;

    match result {
        Ok(Ok(image)) => {
            debug!(width = image.width, height = image.height, "Captured photo");
            Ok(image)
        }
        Ok(Err(err)) => Err(err),
        Err(err) => Err(PhotoError::CaptureFailed(format!("capture task failed: {err}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32, height: u32) -> CapturedImage {
        CapturedImage::from_rgba(width, height, vec![0u8; (width * height * 4) as usize])
            .expect("valid test image")
    }

    #[test]
    fn history_starts_empty() {
        let history = CaptureHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.latest().is_none());
    }

    #[test]
    fn record_prepends_newest_first() {
        let mut history = CaptureHistory::new();
        history.record(test_image(2, 2));
        history.record(test_image(4, 4));
        history.record(test_image(8, 8));

        let widths: Vec<u32> = history.iter().map(|img| img.width).collect();
        assert_eq!(widths, vec![8, 4, 2]);
        assert_eq!(history.latest().map(|img| img.width), Some(8));
    }

    #[test]
    fn record_does_not_mutate_existing_entries() {
        let mut history = CaptureHistory::new();
        history.record(test_image(2, 2));
        let first_handle = history.latest().map(|img| img.handle.clone());

        history.record(test_image(4, 4));

        let preserved: Vec<&CapturedImage> = history.iter().collect();
        assert_eq!(preserved[1].width, 2);
        assert_eq!(
            preserved[1].handle.id(),
            first_handle.expect("first capture present").id()
        );
    }

    #[test]
    fn from_rgba_rejects_short_buffers() {
        let result = CapturedImage::from_rgba(4, 4, vec![0u8; 10]);
        assert!(matches!(result, Err(PhotoError::InvalidFrameData(_))));
    }
}
