// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// UI layout constants
pub mod ui {
    /// Outer diameter of the capture button
    pub const CAPTURE_BUTTON_OUTER_SIZE: f32 = 60.0;
    /// Inner circle diameter of the capture button
    pub const CAPTURE_BUTTON_INNER_SIZE: f32 = 50.0;
    /// Corner radius producing a circular capture button
    pub const CAPTURE_BUTTON_RADIUS: f32 = 25.0;

    /// Diameter of the record button
    pub const RECORD_BUTTON_SIZE: f32 = 40.0;

    /// Height of the bottom control bar
    pub const BOTTOM_BAR_HEIGHT: f32 = 68.0;
    /// Width and height of the gallery button
    pub const GALLERY_BUTTON_SIZE: f32 = 40.0;
    /// Edge length of the thumbnail inside the gallery button
    pub const GALLERY_THUMBNAIL_SIZE: f32 = 38.0;
    /// Width reserved for hidden controls to keep the layout balanced
    pub const PLACEHOLDER_BUTTON_WIDTH: f32 = 40.0;

    /// Height of the gallery bottom sheet
    pub const GALLERY_SHEET_HEIGHT: f32 = 320.0;
    /// Number of thumbnail columns in the gallery sheet
    pub const GALLERY_SHEET_COLUMNS: usize = 2;
    /// Alpha of the scrim drawn behind the gallery sheet
    pub const SCRIM_ALPHA: f32 = 0.5;
}

/// Preview pipeline constants
pub mod pipeline {
    /// Maximum buffers queued in the appsink before old frames are dropped
    pub const MAX_BUFFERS: u32 = 2;
    /// Pixel format requested from the pipeline
    pub const OUTPUT_FORMAT: &str = "RGBA";

    /// Number of threads for videoconvert, capped to avoid oversubscription
    pub fn videoconvert_threads() -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get().min(4))
            .unwrap_or(2)
    }
}

/// Timing constants
pub mod timing {
    use std::time::Duration;

    /// Log a frame statistics line every N frames
    pub const FRAME_LOG_INTERVAL: u64 = 30;

    /// How long to wait for the pipeline to reach the Playing state
    pub const PIPELINE_START_TIMEOUT: Duration = Duration::from_secs(5);
    /// How long to wait for the pipeline to shut down
    pub const PIPELINE_STOP_TIMEOUT: Duration = Duration::from_secs(2);

    /// Duration of the capture button press animation, in milliseconds
    pub const CAPTURE_ANIMATION_MS: u64 = 150;
    /// Interval between camera hotplug re-enumerations, in seconds
    pub const HOTPLUG_POLL_SECS: u64 = 2;
    /// Safety timeout for a camera switch that never produces a frame, in ms
    pub const CAMERA_TRANSITION_TIMEOUT_MS: u64 = 3000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_button_radius_is_half_inner_size() {
        assert_eq!(
            ui::CAPTURE_BUTTON_RADIUS * 2.0,
            ui::CAPTURE_BUTTON_INNER_SIZE
        );
    }

    #[test]
    fn thumbnail_fits_inside_gallery_button() {
        assert!(ui::GALLERY_THUMBNAIL_SIZE <= ui::GALLERY_BUTTON_SIZE);
    }

    #[test]
    fn videoconvert_threads_in_range() {
        let threads = pipeline::videoconvert_threads();
        assert!((1..=4).contains(&threads));
    }
}
