// SPDX-License-Identifier: GPL-3.0-only

//! Backend layer for camera access
//!
//! Hardware access goes through PipeWire, keeping the app layer independent
//! of the capture method:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  App Layer                   │
//! └────────────────────┬────────────────────────┘
//!                      │
//! ┌────────────────────┴────────────────────────┐
//! │              Backend Layer                   │
//! │            ┌──────────────────┐             │
//! │            │     Camera       │             │
//! │            │    (PipeWire)    │             │
//! │            └──────────────────┘             │
//! └─────────────────────────────────────────────┘
//! ```

pub mod camera;
