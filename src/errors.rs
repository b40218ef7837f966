// SPDX-License-Identifier: GPL-3.0-only
// Error types prepared for future unified error handling
#![allow(dead_code)]

//! Error types for the camera application

use std::fmt;

use crate::backends::camera::types::BackendError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Camera-related errors
    Camera(CameraError),
    /// Photo capture errors
    Photo(PhotoError),
    /// Configuration errors
    Config(String),
    /// Generic errors
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Camera(err) => write!(f, "Camera error: {err}"),
            AppError::Photo(err) => write!(f, "Photo error: {err}"),
            AppError::Config(msg) => write!(f, "Configuration error: {msg}"),
            AppError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Camera(err) => Some(err),
            AppError::Photo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CameraError> for AppError {
    fn from(err: CameraError) -> Self {
        AppError::Camera(err)
    }
}

impl From<PhotoError> for AppError {
    fn from(err: PhotoError) -> Self {
        AppError::Photo(err)
    }
}

/// Errors from camera enumeration and the preview pipeline
#[derive(Debug, Clone)]
pub enum CameraError {
    /// No cameras were found on the system
    NoCameraFound,
    /// The pipeline could not be constructed or started
    InitializationFailed(String),
    /// The device disappeared while in use
    Disconnected(String),
    /// A lower-level backend failure
    Backend(BackendError),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::NoCameraFound => write!(f, "No camera found"),
            CameraError::InitializationFailed(msg) => {
                write!(f, "Camera initialization failed: {msg}")
            }
            CameraError::Disconnected(name) => write!(f, "Camera disconnected: {name}"),
            CameraError::Backend(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<BackendError> for CameraError {
    fn from(err: BackendError) -> Self {
        CameraError::Backend(err)
    }
}

/// Errors from still photo capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoError {
    /// Capture was requested before any preview frame arrived
    NoFrameAvailable,
    /// The frame could not be turned into an image
    CaptureFailed(String),
    /// Pixel data did not match the reported dimensions
    InvalidFrameData(String),
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::NoFrameAvailable => write!(f, "No frame available to capture"),
            PhotoError::CaptureFailed(msg) => write!(f, "Capture failed: {msg}"),
            PhotoError::InvalidFrameData(msg) => write!(f, "Invalid frame data: {msg}"),
        }
    }
}

impl std::error::Error for PhotoError {}
