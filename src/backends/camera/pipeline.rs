// SPDX-License-Identifier: GPL-3.0-only

//! GStreamer preview pipeline for camera capture
//!
//! Pulls RGBA frames from `pipewiresrc` through an appsink and forwards them
//! to the UI over a bounded channel. Frames are dropped when the UI is busy,
//! never queued.

use gstreamer::prelude::*;
use gstreamer_app::AppSink;
use gstreamer_video::VideoInfo;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use super::types::{
    BackendError, BackendResult, CameraDevice, CameraFrame, FrameData, FrameSender,
};
use crate::constants::{pipeline, timing};

static FRAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Preview pipeline for a single camera device
pub struct PreviewPipeline {
    pipeline: gstreamer::Pipeline,
    appsink: AppSink,
}

impl PreviewPipeline {
    /// Build and start a preview pipeline for the given device.
    ///
    /// Decoded frames arrive through `frame_sender`. The pipeline converts
    /// everything to RGBA so the UI never has to deal with pixel formats.
    pub fn new(device: &CameraDevice, frame_sender: FrameSender) -> BackendResult<Self> {
        info!(device = %device.name, target = %device.path, "Creating preview pipeline");

        let pipeline = launch_pipeline(device)?;

        let appsink = pipeline
            .by_name("sink")
            .ok_or_else(|| BackendError::ElementNotFound("sink".to_string()))?
            .dynamic_cast::<AppSink>()
            .map_err(|_| BackendError::ElementNotFound("sink is not an appsink".to_string()))?;

        // Low-latency appsink: drop old frames rather than queue them
        appsink.set_property("emit-signals", true);
        appsink.set_property("sync", false);
        appsink.set_property("max-buffers", pipeline::MAX_BUFFERS);
        appsink.set_property("drop", true);
        appsink.set_property("enable-last-sample", false);

        appsink.set_callbacks(
            gstreamer_app::AppSinkCallbacks::builder()
                .new_sample(move |appsink| on_new_sample(appsink, &frame_sender))
                .build(),
        );

        pipeline
            .set_state(gstreamer::State::Playing)
            .map_err(|err| BackendError::StateChange(format!("Failed to start pipeline: {err}")))?;

        // Wait for the state change to settle before reporting success
        let timeout =
            gstreamer::ClockTime::from_seconds(timing::PIPELINE_START_TIMEOUT.as_secs());
        let (result, state, pending) = pipeline.state(timeout);
        debug!(?result, ?state, ?pending, "Pipeline state after start");
        if state != gstreamer::State::Playing {
            warn!(?state, "Pipeline did not reach Playing state");
            check_bus_for_errors(&pipeline)?;
        }

        info!("Preview pipeline running");

        Ok(Self { pipeline, appsink })
    }

    /// Stop the pipeline and release the camera.
    pub fn stop(self) {
        info!("Stopping preview pipeline");

        // Clear callbacks first so no sample handler outlives the pipeline
        self.appsink
            .set_callbacks(gstreamer_app::AppSinkCallbacks::builder().build());

        if let Err(err) = self.pipeline.set_state(gstreamer::State::Null) {
            warn!("Failed to stop pipeline: {err}");
            return;
        }

        let timeout =
            gstreamer::ClockTime::from_seconds(timing::PIPELINE_STOP_TIMEOUT.as_secs());
        let (result, state, _) = self.pipeline.state(timeout);
        match result {
            Ok(_) => debug!(?state, "Preview pipeline stopped"),
            Err(err) => debug!(?err, ?state, "Pipeline shutdown had issues"),
        }
    }
}

impl Drop for PreviewPipeline {
    fn drop(&mut self) {
        self.appsink
            .set_callbacks(gstreamer_app::AppSinkCallbacks::builder().build());
        let _ = self.pipeline.set_state(gstreamer::State::Null);
    }
}

fn launch_pipeline(device: &CameraDevice) -> BackendResult<gstreamer::Pipeline> {
    let target = if device.path.is_empty() {
        String::new()
    } else {
        format!("target-object={} ", device.path)
    };

    let description = format!(
        "pipewiresrc {target}do-timestamp=true ! \
         queue max-size-buffers={max_buffers} leaky=downstream ! \
         videoconvert n-threads={threads} ! \
         video/x-raw,format={format} ! \
         appsink name=sink",
        max_buffers = pipeline::MAX_BUFFERS,
        threads = pipeline::videoconvert_threads(),
        format = pipeline::OUTPUT_FORMAT,
    );
    debug!(%description, "Launching pipeline");

    gstreamer::parse::launch(&description)
        .map_err(|err| BackendError::PipelineCreation(err.to_string()))?
        .dynamic_cast::<gstreamer::Pipeline>()
        .map_err(|_| BackendError::PipelineCreation("Parsed element is not a pipeline".to_string()))
}

/// Pull a decoded sample from the appsink and forward it to the UI.
///
/// Runs on a GStreamer streaming thread, so everything here must stay
/// non-blocking. A full channel means the UI is busy and the frame is
/// silently dropped.
fn on_new_sample(
    appsink: &AppSink,
    frame_sender: &FrameSender,
) -> Result<gstreamer::FlowSuccess, gstreamer::FlowError> {
    let frame_start = Instant::now();
    let frame_num = FRAME_COUNTER.fetch_add(1, Ordering::Relaxed);

    let sample = appsink.pull_sample().map_err(|err| {
        error!(frame = frame_num, ?err, "Failed to pull sample");
        gstreamer::FlowError::Eos
    })?;

    let buffer = sample.buffer_owned().ok_or_else(|| {
        error!(frame = frame_num, "No buffer in sample");
        gstreamer::FlowError::Error
    })?;

    if buffer.flags().contains(gstreamer::BufferFlags::CORRUPTED) {
        warn!(frame = frame_num, "Skipping corrupted buffer");
        return Ok(gstreamer::FlowSuccess::Ok);
    }

    let caps = sample.caps().ok_or_else(|| {
        error!(frame = frame_num, "No caps in sample");
        gstreamer::FlowError::Error
    })?;

    let video_info = VideoInfo::from_caps(caps).map_err(|err| {
        error!(frame = frame_num, ?err, "Failed to parse video info");
        gstreamer::FlowError::Error
    })?;

    let map = buffer.into_mapped_buffer_readable().map_err(|_| {
        error!(frame = frame_num, "Failed to map buffer");
        gstreamer::FlowError::Error
    })?;

    let frame = CameraFrame {
        width: video_info.width(),
        height: video_info.height(),
        data: FrameData::from_mapped_buffer(map),
        captured_at: frame_start,
    };

    if frame.data.len() < frame.expected_len() {
        warn!(
            frame = frame_num,
            len = frame.data.len(),
            expected = frame.expected_len(),
            "Skipping short buffer"
        );
        return Ok(gstreamer::FlowSuccess::Ok);
    }

    let mut sender = frame_sender.clone();
    match sender.try_send(frame) {
        Ok(()) => {
            if frame_num % timing::FRAME_LOG_INTERVAL == 0 {
                debug!(
                    frame = frame_num,
                    width = video_info.width(),
                    height = video_info.height(),
                    total_us = frame_start.elapsed().as_micros(),
                    "Frame forwarded"
                );
            }
        }
        Err(err) if err.is_full() => {
            // UI still processing the previous frame
            if frame_num % timing::FRAME_LOG_INTERVAL == 0 {
                debug!(frame = frame_num, "Frame dropped (channel full)");
            }
        }
        Err(_) => {
            debug!(frame = frame_num, "Frame channel disconnected");
            return Err(gstreamer::FlowError::Eos);
        }
    }

    Ok(gstreamer::FlowSuccess::Ok)
}

/// Drain pending bus messages and surface the first error, if any.
fn check_bus_for_errors(pipeline: &gstreamer::Pipeline) -> BackendResult<()> {
    let Some(bus) = pipeline.bus() else {
        return Ok(());
    };

    while let Some(msg) = bus.pop() {
        if let gstreamer::MessageView::Error(err) = msg.view() {
            return Err(BackendError::StateChange(format!(
                "{} ({:?})",
                err.error(),
                err.debug()
            )));
        }
    }

    Ok(())
}
