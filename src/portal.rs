// SPDX-License-Identifier: GPL-3.0-only

//! XDG desktop portal permission requests
//!
//! Camera and microphone access go through the desktop portal so the app
//! behaves the same inside and outside a sandbox. Permissions are requested
//! once at startup; a denial is logged, never surfaced in the UI.

use std::collections::HashMap;
use tracing::info;
use zbus::zvariant::{OwnedObjectPath, Value};

const PORTAL_DESTINATION: &str = "org.freedesktop.portal.Desktop";
const PORTAL_PATH: &str = "/org/freedesktop/portal/desktop";

/// Request camera and microphone access from the desktop portal.
///
/// Both requests are attempted even if the first fails, so a missing
/// microphone never blocks the camera.
pub async fn request_startup_permissions() -> Result<(), String> {
    let camera = request_camera_access().await;
    let microphone = request_microphone_access().await;

    match (camera, microphone) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(err), Ok(())) => Err(format!("camera access denied: {err}")),
        (Ok(()), Err(err)) => Err(format!("microphone access denied: {err}")),
        (Err(cam), Err(mic)) => Err(format!(
            "camera access denied: {cam}; microphone access denied: {mic}"
        )),
    }
}

/// Request camera access via org.freedesktop.portal.Camera
pub async fn request_camera_access() -> Result<(), String> {
    info!("Requesting camera access via desktop portal");

    let connection = zbus::Connection::session()
        .await
        .map_err(|e| format!("Failed to connect to session D-Bus: {}", e))?;

    let proxy = zbus::Proxy::new(
        &connection,
        PORTAL_DESTINATION,
        PORTAL_PATH,
        "org.freedesktop.portal.Camera",
    )
    .await
    .map_err(|e| format!("Failed to create camera portal proxy: {}", e))?;

    let mut options: HashMap<&str, Value> = HashMap::new();
    options.insert("handle_token", Value::new("shutter_camera"));

    let request_path: OwnedObjectPath = proxy
        .call("AccessCamera", &(options,))
        .await
        .map_err(|e| format!("AccessCamera call failed: {}", e))?;

    info!(request = %request_path, "Camera access requested");
    Ok(())
}

/// Request microphone access via org.freedesktop.portal.Device
pub async fn request_microphone_access() -> Result<(), String> {
    info!("Requesting microphone access via desktop portal");

    let connection = zbus::Connection::session()
        .await
        .map_err(|e| format!("Failed to connect to session D-Bus: {}", e))?;

    let proxy = zbus::Proxy::new(
        &connection,
        PORTAL_DESTINATION,
        PORTAL_PATH,
        "org.freedesktop.portal.Device",
    )
    .await
    .map_err(|e| format!("Failed to create device portal proxy: {}", e))?;

    let mut options: HashMap<&str, Value> = HashMap::new();
    options.insert("handle_token", Value::new("shutter_microphone"));

    let request_path: OwnedObjectPath = proxy
        .call(
            "AccessDevice",
            &(std::process::id(), vec!["microphone"], options),
        )
        .await
        .map_err(|e| format!("AccessDevice call failed: {}", e))?;

    info!(request = %request_path, "Microphone access requested");
    Ok(())
}
