// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::backends::camera::types::{CameraDevice, CameraFrame, LensFacing};
use crate::capture::{CaptureHistory, CapturedImage};
use crate::config::Config;
use crate::errors::PhotoError;
use cosmic::cosmic_config;
use cosmic::widget::about::About;
use cosmic::widget::image;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Camera switch transition state
///
/// While a switch is in flight the controls are disabled and the last frame
/// of the old camera stays on screen until the new camera delivers one.
#[derive(Debug, Default)]
pub struct TransitionState {
    /// A camera switch is in progress
    pub in_transition: bool,
    /// Controls are disabled until the new camera produces a frame
    pub ui_disabled: bool,
}

impl TransitionState {
    /// Begin a camera switch
    pub fn start(&mut self) {
        self.in_transition = true;
        self.ui_disabled = true;
    }

    /// A frame arrived; end the transition if one was in progress
    pub fn on_frame_received(&mut self) -> bool {
        if self.in_transition {
            self.in_transition = false;
            self.ui_disabled = false;
            true
        } else {
            false
        }
    }

    /// Reset without waiting for a frame
    pub fn clear(&mut self) {
        self.in_transition = false;
        self.ui_disabled = false;
    }
}

/// The application model stores app-specific state used to describe its
/// interface and drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// Contents of the about page.
    pub about: About,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Handler for writing configuration changes.
    pub config_handler: Option<cosmic_config::Config>,

    /// Photos captured this session, newest first. Never persisted.
    pub history: CaptureHistory,
    /// Whether the gallery bottom sheet is open.
    pub gallery_open: bool,
    /// Capture button animation flag.
    pub is_capturing: bool,

    /// Latest frame from the preview pipeline.
    pub current_frame: Option<Arc<CameraFrame>>,
    /// Widget handle for the preview image, rebuilt per frame.
    pub preview_handle: Option<image::Handle>,
    /// Running frame counter for periodic logging.
    pub frame_count: u64,

    /// Cameras found by enumeration.
    pub available_cameras: Vec<CameraDevice>,
    /// Index into `available_cameras` of the active device.
    pub current_camera_index: usize,
    /// Which lens the user selected. Meaningful even with one camera.
    pub lens_facing: LensFacing,
    /// Cancellation flag for the running camera subscription.
    pub camera_cancel_flag: Arc<AtomicBool>,
    /// Camera switch transition state.
    pub transition_state: TransitionState,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== General UI =====
    /// Open a URL in the default browser
    LaunchUrl(String),
    /// Toggle the context drawer
    ToggleContextPage(ContextPage),
    /// Configuration changed externally
    UpdateConfig(Config),

    // ===== Camera =====
    /// Async camera enumeration finished
    CamerasInitialized(Vec<CameraDevice>, usize),
    /// Hotplug monitoring saw the device list change
    CameraListChanged(Vec<CameraDevice>),
    /// A preview frame arrived from the pipeline
    CameraFrame(Arc<CameraFrame>),
    /// Switch between front and back lens
    SwitchCamera,
    /// Safety timeout for a stuck camera transition
    ClearCameraTransition,

    // ===== Capture =====
    /// Shutter pressed
    Capture,
    /// Async still capture finished
    PhotoCaptured(Result<CapturedImage, PhotoError>),
    /// Reset the capture button animation
    ClearCaptureAnimation,
    /// Record button pressed (video recording is not implemented)
    ToggleRecording,

    // ===== Gallery =====
    /// Open or close the gallery sheet
    ToggleGallery,
    /// Close the gallery sheet
    CloseGallery,

    // ===== System =====
    /// Startup portal permission requests finished
    PermissionsChecked(Result<(), String>),
}

/// Identifies a context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
}
