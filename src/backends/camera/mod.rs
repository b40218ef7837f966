// SPDX-License-Identifier: GPL-3.0-only

//! PipeWire camera backend
//!
//! - [`enumeration`]: Device discovery via the GStreamer device monitor
//! - [`pipeline`]: The preview pipeline feeding frames to the UI
//! - [`types`]: Shared backend types

pub mod enumeration;
pub mod pipeline;
pub mod types;

pub use enumeration::enumerate_cameras;
pub use pipeline::PreviewPipeline;
pub use types::*;
