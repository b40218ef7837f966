// SPDX-License-Identifier: GPL-3.0-only

//! Shutter - a minimal camera application for the COSMIC desktop environment
//!
//! Live camera preview, front/back lens switching, still photo capture into
//! an in-memory session gallery, and a bottom sheet gallery view. Captured
//! photos live only for the duration of the session and are never written
//! to disk.
//!
//! # Architecture
//!
//! - [`app`]: Main application logic and UI
//! - [`backends`]: Camera enumeration and preview pipeline
//! - [`capture`]: Capture history state and still capture
//! - [`config`]: User configuration handling
//! - [`portal`]: XDG desktop portal permission requests

pub mod app;
pub mod backends;
pub mod capture;
pub mod config;
pub mod constants;
pub mod errors;
pub mod i18n;
pub mod portal;

// Re-export commonly used types
pub use app::{AppModel, Message};
pub use backends::camera::types::{CameraDevice, CameraFrame, LensFacing};
pub use capture::{CaptureHistory, CapturedImage, capture_still};
pub use config::Config;
pub use errors::PhotoError;
