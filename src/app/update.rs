// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The main `update()` function acts as a dispatcher, routing every message
//! to a focused handler method. Handlers live in the `handlers` submodules
//! organized by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::ui`: Context drawer, gallery sheet, config, permissions
//! - `handlers::camera`: Camera selection, frame handling, transitions
//! - `handlers::capture`: Photo capture and the record button

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== General UI =====
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),
            Message::UpdateConfig(config) => self.handle_update_config(config),

            // ===== Camera =====
            Message::CamerasInitialized(cameras, index) => {
                self.handle_cameras_initialized(cameras, index)
            }
            Message::CameraListChanged(cameras) => self.handle_camera_list_changed(cameras),
            Message::CameraFrame(frame) => self.handle_camera_frame(frame),
            Message::SwitchCamera => self.handle_switch_camera(),
            Message::ClearCameraTransition => self.handle_clear_camera_transition(),

            // ===== Capture =====
            Message::Capture => self.handle_capture(),
            Message::PhotoCaptured(result) => self.handle_photo_captured(result),
            Message::ClearCaptureAnimation => self.handle_clear_capture_animation(),
            Message::ToggleRecording => self.handle_toggle_recording(),

            // ===== Gallery =====
            Message::ToggleGallery => self.handle_toggle_gallery(),
            Message::CloseGallery => self.handle_close_gallery(),

            // ===== System =====
            Message::PermissionsChecked(result) => self.handle_permissions_checked(result),
        }
    }
}
