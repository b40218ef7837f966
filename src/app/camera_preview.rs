// SPDX-License-Identifier: GPL-3.0-only

//! Camera preview widget implementation

use crate::app::state::{AppModel, Message};
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Background, ContentFit, Length};
use cosmic::widget;

impl AppModel {
    /// Build the camera preview widget
    ///
    /// Shows a loading indicator while cameras are initializing, the latest
    /// frame once the pipeline delivers one, and a themed placeholder in
    /// between. During a camera switch the last frame of the old camera
    /// stays on screen.
    pub fn build_camera_preview(&self) -> Element<'_, Message> {
        // Show loading indicator if cameras aren't initialized yet
        if self.available_cameras.is_empty() {
            return widget::container(
                widget::column()
                    .push(widget::text(fl!("initializing-camera")).size(20))
                    .spacing(10)
                    .align_x(cosmic::iced::alignment::Horizontal::Center),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(cosmic::iced::alignment::Horizontal::Center)
            .align_y(cosmic::iced::alignment::Vertical::Center)
            .style(|theme| widget::container::Style {
                background: Some(Background::Color(theme.cosmic().bg_color().into())),
                text_color: Some(theme.cosmic().on_bg_color().into()),
                ..Default::default()
            })
            .into();
        }

        if let Some(handle) = &self.preview_handle {
            let image = widget::image::Image::new(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill);

            widget::container(image)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(cosmic::iced::alignment::Horizontal::Center)
                .align_y(cosmic::iced::alignment::Vertical::Center)
                .into()
        } else {
            // Themed placeholder until the first frame arrives
            widget::container(widget::Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|theme: &cosmic::Theme| widget::container::Style {
                    background: Some(Background::Color(theme.cosmic().bg_color().into())),
                    ..Default::default()
                })
                .into()
        }
    }
}
