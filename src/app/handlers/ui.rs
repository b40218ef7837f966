// SPDX-License-Identifier: GPL-3.0-only

//! UI navigation handlers
//!
//! Handles the context drawer, the gallery sheet, config updates, and the
//! startup permission result.

use crate::app::state::{AppModel, ContextPage, Message};
use crate::config::Config;
use cosmic::Task;
use tracing::{error, info, warn};

impl AppModel {
    // =========================================================================
    // UI Navigation Handlers
    // =========================================================================

    pub(crate) fn handle_launch_url(&self, url: String) -> Task<cosmic::Action<Message>> {
        match open::that_detached(&url) {
            Ok(()) => {}
            Err(err) => {
                error!(url = %url, error = %err, "Failed to open URL");
            }
        }
        Task::none()
    }

    pub(crate) fn handle_toggle_context_page(
        &mut self,
        context_page: ContextPage,
    ) -> Task<cosmic::Action<Message>> {
        if self.context_page == context_page {
            self.core.window.show_context = !self.core.window.show_context;
        } else {
            self.context_page = context_page;
            self.core.window.show_context = true;
        }
        Task::none()
    }

    pub(crate) fn handle_update_config(&mut self, config: Config) -> Task<cosmic::Action<Message>> {
        let theme_changed = self.config.app_theme != config.app_theme;
        self.config = config;

        if theme_changed {
            return cosmic::command::set_theme(self.config.app_theme.theme());
        }
        Task::none()
    }

    // =========================================================================
    // Gallery Sheet Handlers
    // =========================================================================

    pub(crate) fn handle_toggle_gallery(&mut self) -> Task<cosmic::Action<Message>> {
        self.gallery_open = !self.gallery_open;
        info!(
            open = self.gallery_open,
            captures = self.history.len(),
            "Gallery sheet toggled"
        );
        Task::none()
    }

    pub(crate) fn handle_close_gallery(&mut self) -> Task<cosmic::Action<Message>> {
        self.gallery_open = false;
        Task::none()
    }

    // =========================================================================
    // System Handlers
    // =========================================================================

    pub(crate) fn handle_permissions_checked(
        &mut self,
        result: Result<(), String>,
    ) -> Task<cosmic::Action<Message>> {
        // A denial is logged only; the portal already showed its own dialog
        match result {
            Ok(()) => info!("Startup permissions granted"),
            Err(err) => warn!(error = %err, "Startup permission request failed"),
        }
        Task::none()
    }
}
