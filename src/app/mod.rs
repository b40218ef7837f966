// SPDX-License-Identifier: GPL-3.0-only

//! Main application module
//!
//! Application state, message handling, and UI rendering.
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, TransitionState)
//! - `camera_preview`: Camera preview display widget
//! - `controls`: Capture and record buttons
//! - `bottom_bar`: Gallery button and camera switcher
//! - `gallery`: Session gallery bottom sheet
//! - `view`: Main view rendering
//! - `update`: Message dispatching
//! - `handlers`: Message handlers by domain

mod bottom_bar;
mod camera_preview;
mod controls;
mod gallery;
mod handlers;
mod state;
mod update;
mod view;

use crate::backends::camera::PreviewPipeline;
use crate::backends::camera::enumerate_cameras;
use crate::config::Config;
use crate::constants::timing;
use crate::fl;
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use state::{AppModel, ContextPage, Message, TransitionState};
use std::sync::Arc;
use tracing::{error, info, warn};

const REPOSITORY: &str = "https://github.com/cosmic-utils/shutter";
const APP_ICON: &[u8] =
    include_bytes!("../../resources/icons/hicolor/scalable/apps/io.github.cosmic-utils.shutter.svg");

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.cosmic-utils.shutter";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("GIT_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let (config_handler, config) =
            match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
                Ok(handler) => {
                    let config = match Config::get_entry(&handler) {
                        Ok(config) => config,
                        Err((errors, config)) => {
                            error!(?errors, "Errors loading config");
                            config
                        }
                    };
                    (Some(handler), config)
                }
                Err(err) => {
                    error!(%err, "Failed to create config handler");
                    (None, Config::default())
                }
            };

        // Initialize GStreamer early (required before any GStreamer calls)
        if let Err(e) = gstreamer::init() {
            error!(error = %e, "Failed to initialize GStreamer");
        }

        let lens_facing = config.last_lens_facing;

        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            config,
            config_handler,
            history: crate::capture::CaptureHistory::new(),
            gallery_open: false,
            is_capturing: false,
            current_frame: None,
            preview_handle: None,
            frame_count: 0,
            available_cameras: Vec::new(),
            current_camera_index: 0,
            lens_facing,
            camera_cancel_flag: Arc::new(std::sync::atomic::AtomicBool::new(false)),
            transition_state: TransitionState::default(),
        };

        // Enumerate cameras asynchronously (non-blocking)
        let init_task = Task::perform(
            async move {
                info!("Enumerating cameras asynchronously");
                let cameras = tokio::task::spawn_blocking(enumerate_cameras)
                    .await
                    .unwrap_or_default();
                info!(count = cameras.len(), "Found camera(s)");

                let index = handlers::camera::select_camera_index(&cameras, lens_facing);
                (cameras, index)
            },
            |(cameras, index)| cosmic::Action::App(Message::CamerasInitialized(cameras, index)),
        );

        // Request camera and microphone access once at startup
        let portal_task = Task::perform(
            async { crate::portal::request_startup_permissions().await },
            |result| cosmic::Action::App(Message::PermissionsChecked(result)),
        );

        (app, Task::batch([init_task, portal_task]))
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            widget::button::icon(widget::icon::from_name("help-about-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::About))
                .into(),
        ]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        use futures::{SinkExt, StreamExt};

        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        let current_camera = self
            .available_cameras
            .get(self.current_camera_index)
            .cloned();
        let camera_index = self.current_camera_index;
        let cancel_flag = Arc::clone(&self.camera_cancel_flag);

        // Include whether cameras are initialized in the subscription ID so
        // the subscription restarts when enumeration finishes
        let cameras_initialized = !self.available_cameras.is_empty();

        let camera_sub = Subscription::run_with_id(
            camera_subscription_id(camera_index, current_camera.as_ref(), cameras_initialized),
            cosmic::iced::stream::channel(100, move |mut output| async move {
                info!(camera_index, "Camera subscription started");

                let Some(device) = current_camera else {
                    info!("No camera yet, subscription will restart after enumeration");
                    return;
                };

                let mut frame_count = 0u64;
                loop {
                    if cancel_flag.load(std::sync::atomic::Ordering::Acquire) {
                        info!("Cancel flag set, subscription loop exiting");
                        break;
                    }

                    // Give a previous pipeline time to release the device
                    tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

                    if cancel_flag.load(std::sync::atomic::Ordering::Acquire) {
                        info!("Cancel flag set after cleanup wait, skipping");
                        break;
                    }

                    let (sender, mut receiver) = cosmic::iced::futures::channel::mpsc::channel(100);

                    let pipeline = match PreviewPipeline::new(&device, sender) {
                        Ok(pipeline) => pipeline,
                        Err(err) => {
                            error!(error = %err, "Failed to initialize pipeline");
                            tokio::time::sleep(tokio::time::Duration::from_secs(5)).await;
                            continue;
                        }
                    };

                    info!("Waiting for frames from pipeline...");
                    loop {
                        if cancel_flag.load(std::sync::atomic::Ordering::Acquire) {
                            info!("Cancel flag set, camera subscription being cancelled");
                            break;
                        }

                        if output.is_closed() {
                            info!("Output channel closed, camera subscription being cancelled");
                            break;
                        }

                        // Wait with a short timeout so cancellation is
                        // checked even when no frames arrive
                        match tokio::time::timeout(
                            tokio::time::Duration::from_millis(16),
                            receiver.next(),
                        )
                        .await
                        {
                            Ok(Some(frame)) => {
                                frame_count += 1;
                                if frame_count % timing::FRAME_LOG_INTERVAL == 0 {
                                    info!(
                                        frame = frame_count,
                                        width = frame.width,
                                        height = frame.height,
                                        latency_us = frame.captured_at.elapsed().as_micros(),
                                        "Received frame from pipeline"
                                    );
                                }

                                // try_send so a busy UI drops frames instead
                                // of stalling the subscription
                                if let Err(e) =
                                    output.try_send(Message::CameraFrame(Arc::new(frame)))
                                {
                                    if e.is_disconnected() {
                                        info!("Output channel disconnected, subscription ending");
                                        break;
                                    }
                                    if frame_count % timing::FRAME_LOG_INTERVAL == 0 {
                                        warn!(frame = frame_count, "Frame dropped (UI busy)");
                                    }
                                }
                            }
                            Ok(None) => {
                                info!("Pipeline frame stream ended");
                                break;
                            }
                            Err(_) => {
                                // Timeout, loop to re-check cancellation
                                continue;
                            }
                        }
                    }

                    info!("Cleaning up preview pipeline");
                    pipeline.stop();
                }
            }),
        );

        // Camera hotplug monitoring
        let current_cameras = self.available_cameras.clone();
        let hotplug_sub = Subscription::run_with_id(
            "camera_hotplug",
            cosmic::iced::stream::channel(10, move |mut output| async move {
                info!("Camera hotplug monitoring started");

                let mut last_cameras = current_cameras;

                loop {
                    tokio::time::sleep(std::time::Duration::from_secs(timing::HOTPLUG_POLL_SECS))
                        .await;

                    let new_cameras = tokio::task::spawn_blocking(enumerate_cameras)
                        .await
                        .unwrap_or_default();

                    let cameras_changed = last_cameras.len() != new_cameras.len()
                        || !last_cameras.iter().all(|c| {
                            new_cameras
                                .iter()
                                .any(|nc| nc.path == c.path && nc.name == c.name)
                        });

                    if cameras_changed {
                        info!(
                            old_count = last_cameras.len(),
                            new_count = new_cameras.len(),
                            "Camera list changed, hotplug event detected"
                        );

                        last_cameras = new_cameras.clone();

                        if output
                            .send(Message::CameraListChanged(new_cameras))
                            .await
                            .is_err()
                        {
                            warn!("Hotplug channel closed");
                            break;
                        }
                    }
                }

                info!("Camera hotplug monitoring stopped");
            }),
        );

        Subscription::batch([config_sub, camera_sub, hotplug_sub])
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}

/// Identity of the camera subscription.
///
/// The device path is part of the key: hotplug can replace a device at the
/// same index (unplug and replug gives it a new PipeWire serial), and the
/// stream must restart to bind the new target.
fn camera_subscription_id(
    index: usize,
    device: Option<&crate::backends::camera::types::CameraDevice>,
    cameras_initialized: bool,
) -> (&'static str, usize, String, bool) {
    (
        "camera",
        index,
        device.map(|d| d.path.clone()).unwrap_or_default(),
        cameras_initialized,
    )
}

#[cfg(test)]
mod tests {
    use super::camera_subscription_id;
    use crate::backends::camera::types::CameraDevice;

    fn device(path: &str) -> CameraDevice {
        CameraDevice {
            name: "Camera".to_string(),
            path: path.to_string(),
            facing: None,
        }
    }

    #[test]
    fn replugged_device_at_same_index_changes_subscription_id() {
        // Same index, new PipeWire serial after unplug/replug
        let before = camera_subscription_id(0, Some(&device("51")), true);
        let after = camera_subscription_id(0, Some(&device("87")), true);
        assert_ne!(before, after);
    }

    #[test]
    fn unchanged_device_keeps_subscription_id() {
        let first = camera_subscription_id(0, Some(&device("51")), true);
        let second = camera_subscription_id(0, Some(&device("51")), true);
        assert_eq!(first, second);
    }

    #[test]
    fn enumeration_completion_changes_subscription_id() {
        let empty = camera_subscription_id(0, None, false);
        let populated = camera_subscription_id(0, Some(&device("51")), true);
        assert_ne!(empty, populated);
    }
}
