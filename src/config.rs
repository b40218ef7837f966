// SPDX-License-Identifier: GPL-3.0-only

use crate::backends::camera::types::LensFacing;
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::{Theme, theme};
use serde::{Deserialize, Serialize};

/// Application theme preference
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum AppTheme {
    /// Follow system theme (dark or light based on system setting)
    #[default]
    System,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl AppTheme {
    /// Get the COSMIC theme for this app theme preference
    pub fn theme(&self) -> Theme {
        match self {
            Self::Dark => {
                let mut theme = theme::system_dark();
                theme.theme_type.prefer_dark(Some(true));
                theme
            }
            Self::Light => {
                let mut theme = theme::system_light();
                theme.theme_type.prefer_dark(Some(false));
                theme
            }
            Self::System => theme::system_preference(),
        }
    }
}

/// Persistent application configuration
///
/// Only settings are persisted. Captured photos never touch the config
/// system or the disk.
#[derive(Clone, CosmicConfigEntry, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[version = 1]
pub struct Config {
    /// Theme preference
    pub app_theme: AppTheme,
    /// Lens to select at startup when both facings are available
    pub last_lens_facing: LensFacing,
    /// Mirror the preview for front-facing cameras
    pub mirror_preview: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::System,
            last_lens_facing: LensFacing::Back, // rear lens by default
            mirror_preview: true,               // selfie-style preview
        }
    }
}
