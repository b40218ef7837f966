// SPDX-License-Identifier: GPL-3.0-only

//! Capture operation handlers
//!
//! Handles still photo capture and the (not yet functional) record button.

use crate::app::state::{AppModel, Message};
use crate::capture::{CapturedImage, capture_still};
use crate::constants::timing;
use crate::errors::PhotoError;
use cosmic::Task;
use std::sync::Arc;
use tracing::{error, info};

impl AppModel {
    // =========================================================================
    // Capture Operation Handlers
    // =========================================================================

    /// Create a delayed task that sends a message after the specified milliseconds
    pub(crate) fn delay_task(millis: u64, message: Message) -> Task<cosmic::Action<Message>> {
        Task::perform(
            async move {
                tokio::time::sleep(tokio::time::Duration::from_millis(millis)).await;
                message
            },
            cosmic::Action::App,
        )
    }

    /// Capture the current preview frame as a photo
    pub(crate) fn handle_capture(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(frame) = &self.current_frame else {
            info!("No frame available to capture");
            return Task::none();
        };

        info!("Capturing photo...");
        self.is_capturing = true;

        let frame_arc = Arc::clone(frame);
        let capture_task = Task::perform(
            async move { capture_still(frame_arc).await },
            |result| cosmic::Action::App(Message::PhotoCaptured(result)),
        );

        Task::batch([
            capture_task,
            Self::delay_task(timing::CAPTURE_ANIMATION_MS, Message::ClearCaptureAnimation),
        ])
    }

    /// Record the result of an async capture in the session history
    pub(crate) fn handle_photo_captured(
        &mut self,
        result: Result<CapturedImage, PhotoError>,
    ) -> Task<cosmic::Action<Message>> {
        record_capture_result(&mut self.history, result);
        Task::none()
    }

    pub(crate) fn handle_clear_capture_animation(&mut self) -> Task<cosmic::Action<Message>> {
        self.is_capturing = false;
        Task::none()
    }

    /// Video recording is not implemented; the button only logs.
    pub(crate) fn handle_toggle_recording(&mut self) -> Task<cosmic::Action<Message>> {
        info!("Record button pressed, video recording is not implemented");
        Task::none()
    }
}

/// Apply a capture result to the history. A failed capture only logs; the
/// history is never touched.
fn record_capture_result(
    history: &mut crate::capture::CaptureHistory,
    result: Result<CapturedImage, PhotoError>,
) {
    match result {
        Ok(image) => {
            info!(
                width = image.width,
                height = image.height,
                total = history.len() + 1,
                "Photo captured"
            );
            history.record(image);
        }
        Err(err) => {
            error!(error = %err, "Photo capture failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::record_capture_result;
    use crate::capture::{CaptureHistory, CapturedImage};
    use crate::errors::PhotoError;

    fn image(size: u32) -> CapturedImage {
        CapturedImage::from_rgba(size, size, vec![0u8; (size * size * 4) as usize])
            .expect("valid image")
    }

    #[test]
    fn successful_capture_is_recorded_newest_first() {
        let mut history = CaptureHistory::new();
        record_capture_result(&mut history, Ok(image(2)));
        record_capture_result(&mut history, Ok(image(4)));

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().map(|img| img.width), Some(4));
    }

    #[test]
    fn failed_capture_does_not_touch_history() {
        let mut history = CaptureHistory::new();
        record_capture_result(&mut history, Ok(image(2)));

        record_capture_result(&mut history, Err(PhotoError::NoFrameAvailable));
        record_capture_result(
            &mut history,
            Err(PhotoError::CaptureFailed("pipeline stalled".to_string())),
        );

        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().map(|img| img.width), Some(2));
    }
}
