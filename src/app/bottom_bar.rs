// SPDX-License-Identifier: GPL-3.0-only

//! Bottom control bar
//!
//! - Gallery button (with thumbnail of the latest capture)
//! - Camera switcher (flip between front and back lens)

use crate::app::state::{AppModel, Message};
use crate::app::view::overlay_container_style;
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, ContentFit, Length};
use cosmic::widget::{self, icon};

/// Camera switch icon SVG (circular arrows)
const CAMERA_SWITCH_ICON: &[u8] = include_bytes!("../../resources/button_icons/camera-switch.svg");

impl AppModel {
    /// Build the complete bottom bar widget
    ///
    /// Three-column layout so the center stays centered regardless of
    /// asymmetric button widths:
    /// [left Fill + gallery] [center] [camera switcher + right Fill]
    pub fn build_bottom_bar(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let left_section = widget::row()
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(self.build_gallery_button())
            .push(widget::horizontal_space().width(spacing.space_m))
            .align_y(Alignment::Center);

        let center_section = widget::Space::new(
            Length::Fixed(ui::PLACEHOLDER_BUTTON_WIDTH),
            Length::Shrink,
        );

        let right_section = widget::row()
            .push(widget::horizontal_space().width(spacing.space_m))
            .push(self.build_camera_switcher())
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .align_y(Alignment::Center);

        let bottom_row = widget::row()
            .push(left_section)
            .push(center_section)
            .push(right_section)
            .padding(spacing.space_xs)
            .align_y(Alignment::Center);

        widget::container(bottom_row)
            .width(Length::Fill)
            .height(Length::Fixed(ui::BOTTOM_BAR_HEIGHT))
            .center_y(ui::BOTTOM_BAR_HEIGHT)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::TRANSPARENT)),
                ..Default::default()
            })
            .into()
    }

    /// Build the gallery button widget
    ///
    /// Shows a thumbnail of the most recent capture, or a folder icon when
    /// nothing has been captured yet. Disabled during transitions.
    pub fn build_gallery_button(&self) -> Element<'_, Message> {
        let is_disabled = self.transition_state.ui_disabled;

        let button_content: Element<'_, Message> = if let Some(latest) = self.history.latest() {
            let image = widget::image::Image::new(latest.handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(ui::GALLERY_THUMBNAIL_SIZE))
                .height(Length::Fixed(ui::GALLERY_THUMBNAIL_SIZE));

            widget::container(image)
                .width(Length::Fixed(ui::GALLERY_BUTTON_SIZE))
                .height(Length::Fixed(ui::GALLERY_BUTTON_SIZE))
                .into()
        } else {
            widget::container(icon::from_name("folder-pictures-symbolic").size(24))
                .width(Length::Fixed(ui::GALLERY_BUTTON_SIZE))
                .height(Length::Fixed(ui::GALLERY_BUTTON_SIZE))
                .center(ui::GALLERY_BUTTON_SIZE)
                .into()
        };

        let mut btn = widget::button::custom(button_content)
            .padding(0)
            .width(Length::Fixed(ui::GALLERY_BUTTON_SIZE))
            .height(Length::Fixed(ui::GALLERY_BUTTON_SIZE))
            .class(cosmic::theme::Button::Image);

        if !is_disabled {
            btn = btn.on_press(Message::ToggleGallery);
        }

        let button_element: Element<'_, Message> = btn.into();

        if is_disabled {
            widget::container(button_element)
                .style(|_theme| widget::container::Style {
                    text_color: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.3)),
                    ..Default::default()
                })
                .into()
        } else {
            button_element
        }
    }

    /// Build the camera switcher button widget
    ///
    /// Shows a flip button if multiple cameras are available, otherwise an
    /// invisible placeholder to keep the layout consistent. Disabled during
    /// transitions.
    pub fn build_camera_switcher(&self) -> Element<'_, Message> {
        let is_disabled = self.transition_state.ui_disabled;

        if self.available_cameras.len() > 1 {
            let switch_icon = widget::icon::from_svg_bytes(CAMERA_SWITCH_ICON).symbolic(true);
            let icon_widget = widget::icon(switch_icon).size(32);

            let icon_content = widget::container(icon_widget)
                .width(Length::Fixed(52.0))
                .height(Length::Fixed(52.0))
                .center(Length::Fixed(52.0));

            let mut btn = widget::button::custom(icon_content)
                .padding(0)
                .class(cosmic::theme::Button::Text);

            if !is_disabled {
                btn = btn.on_press(Message::SwitchCamera);
            }

            widget::container(btn).style(overlay_container_style).into()
        } else {
            // Invisible placeholder with the same width as the icon button
            widget::Space::new(Length::Fixed(ui::PLACEHOLDER_BUTTON_WIDTH), Length::Shrink).into()
        }
    }
}
