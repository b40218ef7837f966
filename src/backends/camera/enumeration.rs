// SPDX-License-Identifier: GPL-3.0-only

//! Camera device discovery via the GStreamer device monitor

use gstreamer::prelude::*;
use tracing::{debug, info, warn};

use super::types::{CameraDevice, LensFacing};

/// Enumerate video source devices known to PipeWire.
///
/// Falls back to a single default device when the monitor fails or finds
/// nothing, so the preview pipeline can still try `pipewiresrc` with no
/// target object.
pub fn enumerate_cameras() -> Vec<CameraDevice> {
    let monitor = gstreamer::DeviceMonitor::new();
    monitor.add_filter(Some("Video/Source"), None);

    if let Err(err) = monitor.start() {
        warn!("Failed to start device monitor: {err}");
        return vec![default_camera()];
    }

    let mut cameras: Vec<CameraDevice> = monitor
        .devices()
        .iter()
        .filter_map(device_to_camera)
        .collect();

    monitor.stop();

    if cameras.is_empty() {
        info!("No cameras found via device monitor, using default source");
        cameras.push(default_camera());
    }

    info!("Found {} camera(s)", cameras.len());
    for camera in &cameras {
        debug!(
            "  {} (target: {:?}, facing: {:?})",
            camera.name, camera.path, camera.facing
        );
    }

    cameras
}

fn device_to_camera(device: &gstreamer::Device) -> Option<CameraDevice> {
    let name = device.display_name().to_string();
    let props = device.properties();

    // PipeWire identifies nodes by object.serial; node.id works as a fallback
    let path = props
        .as_ref()
        .and_then(|p| {
            p.get::<u64>("object.serial")
                .map(|serial| serial.to_string())
                .or_else(|_| p.get::<u32>("node.id").map(|id| id.to_string()))
                .ok()
        })
        .unwrap_or_default();

    let facing = props
        .as_ref()
        .and_then(|p| p.get::<String>("api.libcamera.location").ok())
        .and_then(|location| match location.as_str() {
            "front" => Some(LensFacing::Front),
            "back" => Some(LensFacing::Back),
            _ => None,
        })
        .or_else(|| facing_from_name(&name));

    Some(CameraDevice { name, path, facing })
}

/// Guess the lens facing from the device name when the backend does not
/// report a location property. USB webcams usually face the user.
fn facing_from_name(name: &str) -> Option<LensFacing> {
    let lower = name.to_lowercase();
    if lower.contains("front") || lower.contains("integrated") || lower.contains("webcam") {
        Some(LensFacing::Front)
    } else if lower.contains("back") || lower.contains("rear") {
        Some(LensFacing::Back)
    } else {
        None
    }
}

fn default_camera() -> CameraDevice {
    CameraDevice {
        name: "Default Camera (PipeWire)".to_string(),
        path: String::new(),
        facing: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_from_name_recognizes_common_labels() {
        assert_eq!(
            facing_from_name("Integrated Webcam"),
            Some(LensFacing::Front)
        );
        assert_eq!(facing_from_name("Rear Camera"), Some(LensFacing::Back));
        assert_eq!(facing_from_name("USB Video Device"), None);
    }

    #[test]
    fn default_camera_has_no_target() {
        let camera = default_camera();
        assert!(camera.path.is_empty());
        assert!(camera.facing.is_none());
    }
}
