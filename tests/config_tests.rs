// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use shutter::LensFacing;
use shutter::Config;
use shutter::config::AppTheme;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(
        config.app_theme,
        AppTheme::System,
        "Theme should follow the system by default"
    );
    assert_eq!(
        config.last_lens_facing,
        LensFacing::Back,
        "Back lens should be selected by default"
    );
    assert!(
        config.mirror_preview,
        "Mirror preview should be enabled by default"
    );
}

#[test]
fn test_lens_facing_round_trip() {
    // Toggling twice returns to the starting lens
    let facing = LensFacing::Back;
    assert_eq!(facing.toggled(), LensFacing::Front);
    assert_eq!(facing.toggled().toggled(), facing);
}
