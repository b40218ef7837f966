// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the session capture history

use std::sync::Arc;
use std::time::Instant;

use shutter::backends::camera::types::{CameraFrame, FrameData};
use shutter::{CaptureHistory, CapturedImage, capture_still};

fn image(width: u32, height: u32) -> CapturedImage {
    CapturedImage::from_rgba(width, height, vec![0u8; (width * height * 4) as usize])
        .expect("valid image")
}

fn frame(width: u32, height: u32, bytes: usize) -> Arc<CameraFrame> {
    Arc::new(CameraFrame {
        width,
        height,
        data: FrameData::from(vec![0u8; bytes]),
        captured_at: Instant::now(),
    })
}

#[test]
fn test_history_starts_empty() {
    let history = CaptureHistory::new();
    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
}

#[test]
fn test_history_orders_newest_first() {
    let mut history = CaptureHistory::new();
    for size in [2u32, 4, 8, 16] {
        history.record(image(size, size));
    }

    let widths: Vec<u32> = history.iter().map(|img| img.width).collect();
    assert_eq!(widths, vec![16, 8, 4, 2]);
    assert_eq!(history.len(), 4);
    assert_eq!(history.latest().map(|img| img.width), Some(16));
}

#[test]
fn test_record_preserves_existing_entries() {
    let mut history = CaptureHistory::new();
    history.record(image(2, 2));
    let original_id = history.latest().map(|img| img.handle.id());

    history.record(image(4, 4));
    history.record(image(8, 8));

    let oldest = history.iter().last().expect("oldest entry present");
    assert_eq!(oldest.width, 2);
    assert_eq!(Some(oldest.handle.id()), original_id);
}

#[tokio::test]
async fn test_failed_capture_leaves_history_unchanged() {
    let mut history = CaptureHistory::new();
    history.record(image(2, 2));

    // Frame claims 4x4 but carries too few bytes
    let result = capture_still(frame(4, 4, 10)).await;
    assert!(result.is_err());

    if let Ok(image) = result {
        history.record(image);
    }

    assert_eq!(history.len(), 1);
    assert_eq!(history.latest().map(|img| img.width), Some(2));
}

#[tokio::test]
async fn test_capture_still_from_valid_frame() {
    let captured = capture_still(frame(4, 4, 64)).await.expect("capture succeeds");
    assert_eq!(captured.width, 4);
    assert_eq!(captured.height, 4);
}
