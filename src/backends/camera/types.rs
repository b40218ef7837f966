// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for the camera backend

use gstreamer::buffer::{MappedBuffer, Readable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Frame data storage - either pre-copied bytes or zero-copy GStreamer buffer
///
/// The `Mapped` variant keeps the GStreamer buffer mapped and alive until all
/// references are dropped, so preview frames never copy pixel data.
#[derive(Clone)]
pub enum FrameData {
    /// Pre-copied bytes (used for captured photos and tests)
    Copied(Arc<[u8]>),
    /// Zero-copy mapped GStreamer buffer
    Mapped(Arc<MappedBuffer<Readable>>),
}

impl FrameData {
    /// Create FrameData from a mapped GStreamer buffer (zero-copy)
    pub fn from_mapped_buffer(buffer: MappedBuffer<Readable>) -> Self {
        FrameData::Mapped(Arc::new(buffer))
    }

    /// Length of the frame data in bytes
    pub fn len(&self) -> usize {
        match self {
            FrameData::Copied(data) => data.len(),
            FrameData::Mapped(buf) => buf.len(),
        }
    }

    /// Check if the frame data is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for FrameData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameData::Copied(data) => write!(f, "FrameData::Copied({} bytes)", data.len()),
            FrameData::Mapped(buf) => write!(f, "FrameData::Mapped({} bytes)", buf.len()),
        }
    }
}

impl AsRef<[u8]> for FrameData {
    fn as_ref(&self) -> &[u8] {
        match self {
            FrameData::Copied(data) => data.as_ref(),
            FrameData::Mapped(buf) => buf.as_slice(),
        }
    }
}

impl std::ops::Deref for FrameData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_ref()
    }
}

impl From<Vec<u8>> for FrameData {
    fn from(data: Vec<u8>) -> Self {
        FrameData::Copied(Arc::from(data))
    }
}

/// Which way a camera lens points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LensFacing {
    /// Rear camera (the default selection)
    #[default]
    Back,
    /// Front camera, facing the user
    Front,
}

impl LensFacing {
    /// The opposite facing
    pub fn toggled(self) -> Self {
        match self {
            LensFacing::Back => LensFacing::Front,
            LensFacing::Front => LensFacing::Back,
        }
    }
}

impl fmt::Display for LensFacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LensFacing::Back => write!(f, "back"),
            LensFacing::Front => write!(f, "front"),
        }
    }
}

/// A camera device discovered via enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    /// Human-readable device name
    pub name: String,
    /// PipeWire target object (node serial or id), empty for the default source
    pub path: String,
    /// Which way the lens points, when the backend reports it
    pub facing: Option<LensFacing>,
}

impl CameraDevice {
    /// Whether this device matches the given lens facing
    pub fn matches_facing(&self, facing: LensFacing) -> bool {
        self.facing == Some(facing)
    }
}

/// A single decoded preview frame in RGBA format
#[derive(Debug, Clone)]
pub struct CameraFrame {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// RGBA pixel data, 4 bytes per pixel
    pub data: FrameData,
    /// When the frame was pulled from the pipeline
    pub captured_at: Instant,
}

impl CameraFrame {
    /// Expected data length for the frame dimensions
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

/// Sender half of the preview frame channel
pub type FrameSender = cosmic::iced::futures::channel::mpsc::Sender<CameraFrame>;
/// Receiver half of the preview frame channel
pub type FrameReceiver = cosmic::iced::futures::channel::mpsc::Receiver<CameraFrame>;

/// Errors from the GStreamer layer
#[derive(Debug, Clone)]
pub enum BackendError {
    /// Pipeline string failed to parse or launch
    PipelineCreation(String),
    /// A named element was missing or had the wrong type
    ElementNotFound(String),
    /// A state change failed or timed out
    StateChange(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::PipelineCreation(msg) => write!(f, "Failed to create pipeline: {msg}"),
            BackendError::ElementNotFound(name) => write!(f, "Element not found: {name}"),
            BackendError::StateChange(msg) => write!(f, "Pipeline state change failed: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;
