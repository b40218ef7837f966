// SPDX-License-Identifier: GPL-3.0-only

//! Camera control handlers
//!
//! Handles lens switching, frame processing, initialization, and hotplug
//! events.

use crate::app::state::{AppModel, Message};
use crate::backends::camera::types::{CameraDevice, CameraFrame, LensFacing};
use crate::constants::timing;
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use cosmic::widget::image;
use std::sync::Arc;
use tracing::{error, info};

impl AppModel {
    // =========================================================================
    // Camera Control Handlers
    // =========================================================================

    pub(crate) fn handle_switch_camera(&mut self) -> Task<cosmic::Action<Message>> {
        let target = self.lens_facing.toggled();
        info!(
            current_index = self.current_camera_index,
            from = %self.lens_facing,
            to = %target,
            "Received SwitchCamera message"
        );

        self.lens_facing = target;

        // Remember the selection for the next launch
        self.config.last_lens_facing = target;
        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save lens selection");
        }

        let new_index = select_camera_index(&self.available_cameras, target);
        if new_index == self.current_camera_index {
            // Same device serves both facings; the preview just re-mirrors
            info!("No alternate device for the requested lens");
            self.refresh_preview_handle();
            return Task::none();
        }

        // Cancel the running subscription and hand a fresh flag to the next one
        self.camera_cancel_flag
            .store(true, std::sync::atomic::Ordering::Release);
        self.camera_cancel_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));

        self.current_camera_index = new_index;
        self.transition_state.start();

        info!(
            new_index,
            camera = %self.available_cameras[new_index].name,
            "Switching to camera"
        );

        Self::delay_task(
            timing::CAMERA_TRANSITION_TIMEOUT_MS,
            Message::ClearCameraTransition,
        )
    }

    pub(crate) fn handle_clear_camera_transition(&mut self) -> Task<cosmic::Action<Message>> {
        if self.transition_state.in_transition {
            info!("Camera transition timed out, re-enabling controls");
            self.transition_state.clear();
        }
        Task::none()
    }

    pub(crate) fn handle_camera_frame(
        &mut self,
        frame: Arc<CameraFrame>,
    ) -> Task<cosmic::Action<Message>> {
        self.frame_count += 1;
        if self.frame_count % timing::FRAME_LOG_INTERVAL == 0 {
            info!(
                frame = self.frame_count,
                width = frame.width,
                height = frame.height,
                latency_us = frame.captured_at.elapsed().as_micros(),
                "CameraFrame message received in update()"
            );
        }

        if self.transition_state.on_frame_received() {
            info!("First frame from new camera, transition complete");
        }

        self.current_frame = Some(frame);
        self.refresh_preview_handle();

        Task::none()
    }

    pub(crate) fn handle_cameras_initialized(
        &mut self,
        cameras: Vec<CameraDevice>,
        camera_index: usize,
    ) -> Task<cosmic::Action<Message>> {
        info!(
            count = cameras.len(),
            camera_index, "Cameras initialized asynchronously"
        );

        self.available_cameras = cameras;
        self.current_camera_index = camera_index
            .min(self.available_cameras.len().saturating_sub(1));

        Task::none()
    }

    pub(crate) fn handle_camera_list_changed(
        &mut self,
        cameras: Vec<CameraDevice>,
    ) -> Task<cosmic::Action<Message>> {
        info!(
            old_count = self.available_cameras.len(),
            new_count = cameras.len(),
            "Camera list changed"
        );

        let active_path = self
            .available_cameras
            .get(self.current_camera_index)
            .map(|cam| cam.path.clone());

        self.available_cameras = cameras;

        // Keep the active device if it survived the hotplug event
        self.current_camera_index = active_path
            .and_then(|path| {
                self.available_cameras
                    .iter()
                    .position(|cam| cam.path == path)
            })
            .unwrap_or_else(|| select_camera_index(&self.available_cameras, self.lens_facing));

        if self.available_cameras.is_empty() {
            self.current_frame = None;
            self.preview_handle = None;
        }

        Task::none()
    }

    /// Rebuild the preview widget handle from the current frame.
    ///
    /// The preview is mirrored for the front lens so it behaves like a
    /// mirror. Captured photos always use the unmirrored frame.
    pub(crate) fn refresh_preview_handle(&mut self) {
        let Some(frame) = &self.current_frame else {
            self.preview_handle = None;
            return;
        };

        let mirror = self.lens_facing == LensFacing::Front && self.config.mirror_preview;
        let expected = frame.expected_len();
        if frame.data.len() < expected {
            return;
        }

        let pixels = if mirror {
            mirrored_rgba(&frame.data[..expected], frame.width, frame.height)
        } else {
            frame.data[..expected].to_vec()
        };

        self.preview_handle = Some(image::Handle::from_rgba(frame.width, frame.height, pixels));
    }
}

/// Pick the camera best matching the requested lens facing.
///
/// Preference order: exact facing match, then unknown facing, then index 0.
pub(crate) fn select_camera_index(cameras: &[CameraDevice], facing: LensFacing) -> usize {
    cameras
        .iter()
        .position(|cam| cam.matches_facing(facing))
        .or_else(|| cameras.iter().position(|cam| cam.facing.is_none()))
        .unwrap_or(0)
}

/// Flip RGBA pixel rows horizontally.
fn mirrored_rgba(data: &[u8], width: u32, height: u32) -> Vec<u8> {
    let row_bytes = width as usize * 4;
    let mut out = Vec::with_capacity(data.len());
    for row in 0..height as usize {
        let start = row * row_bytes;
        let row_data = &data[start..start + row_bytes];
        for pixel in row_data.chunks_exact(4).rev() {
            out.extend_from_slice(pixel);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str, facing: Option<LensFacing>) -> CameraDevice {
        CameraDevice {
            name: name.to_string(),
            path: name.to_string(),
            facing,
        }
    }

    #[test]
    fn select_prefers_exact_facing_match() {
        let cameras = vec![
            device("front", Some(LensFacing::Front)),
            device("back", Some(LensFacing::Back)),
        ];
        assert_eq!(select_camera_index(&cameras, LensFacing::Back), 1);
        assert_eq!(select_camera_index(&cameras, LensFacing::Front), 0);
    }

    #[test]
    fn select_falls_back_to_unknown_facing() {
        let cameras = vec![
            device("front", Some(LensFacing::Front)),
            device("usb", None),
        ];
        assert_eq!(select_camera_index(&cameras, LensFacing::Back), 1);
    }

    #[test]
    fn select_defaults_to_first_camera() {
        let cameras = vec![device("front", Some(LensFacing::Front))];
        assert_eq!(select_camera_index(&cameras, LensFacing::Back), 0);
    }

    #[test]
    fn mirror_reverses_pixels_within_rows() {
        // 2x2 image, one byte pattern per pixel
        #[rustfmt::skip]
        let data = vec![
            1, 1, 1, 1, 2, 2, 2, 2,
            3, 3, 3, 3, 4, 4, 4, 4,
        ];
        let mirrored = mirrored_rgba(&data, 2, 2);
        #[rustfmt::skip]
        let expected = vec![
            2, 2, 2, 2, 1, 1, 1, 1,
            4, 4, 4, 4, 3, 3, 3, 3,
        ];
        assert_eq!(mirrored, expected);
    }
}
