// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Composes the main UI from modularized components:
//! - Camera preview (camera_preview module)
//! - Capture and record buttons (controls module)
//! - Bottom bar with gallery button and camera switcher (bottom_bar module)
//! - Gallery bottom sheet overlay (gallery module)

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

/// Shared style for buttons overlaid on the camera preview
pub(crate) fn overlay_container_style(theme: &cosmic::Theme) -> widget::container::Style {
    let mut bg: Color = theme.cosmic().bg_color().into();
    bg.a = ui::SCRIM_ALPHA;
    widget::container::Style {
        background: Some(Background::Color(bg)),
        border: cosmic::iced::Border {
            radius: [ui::PLACEHOLDER_BUTTON_WIDTH / 2.0; 4].into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

impl AppModel {
    /// Build the main application view
    ///
    /// Composes all UI components into a layered layout. The gallery sheet
    /// is overlaid on top of everything when open.
    pub fn view(&self) -> Element<'_, Message> {
        let camera_preview = self.build_camera_preview();

        // Capture area: [Fill][spacer][capture][record][Fill] so the capture
        // button stays centered despite the record button to its right
        let capture_area = widget::row()
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(widget::Space::new(
                Length::Fixed(ui::RECORD_BUTTON_SIZE),
                Length::Shrink,
            ))
            .push(self.build_capture_button())
            .push(self.build_record_button())
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .align_y(Alignment::Center)
            .width(Length::Fill);

        let main_column = widget::column()
            .push(camera_preview)
            .push(capture_area)
            .push(self.build_bottom_bar())
            .width(Length::Fill)
            .height(Length::Fill);

        let mut main_stack = cosmic::iced::widget::stack![main_column];

        // Gallery sheet slides over the whole window with a scrim behind it
        if self.gallery_open {
            main_stack = main_stack.push(self.build_gallery_scrim());
            main_stack = main_stack.push(
                widget::container(self.build_gallery_sheet())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_y(cosmic::iced::alignment::Vertical::Bottom),
            );
        }

        // Wrap everything in a black background container
        widget::container(main_stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::BLACK)),
                ..Default::default()
            })
            .into()
    }

    /// Semi-transparent scrim behind the gallery sheet; clicking it closes
    /// the sheet.
    fn build_gallery_scrim(&self) -> Element<'_, Message> {
        let scrim = widget::container(widget::Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::from_rgba(
                    0.0,
                    0.0,
                    0.0,
                    ui::SCRIM_ALPHA,
                ))),
                ..Default::default()
            });

        widget::mouse_area(scrim)
            .on_press(Message::CloseGallery)
            .into()
    }
}
