// SPDX-License-Identifier: GPL-3.0-only

//! Capture and record button widgets

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{Background, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the capture button widget
    ///
    /// A white circle that briefly shrinks and grays while a capture is in
    /// flight. Disabled and non-interactive during camera transitions.
    pub fn build_capture_button(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let is_disabled = self.transition_state.ui_disabled;

        let capture_button_color = if is_disabled {
            Color::from_rgba(0.5, 0.5, 0.5, 0.3)
        } else if self.is_capturing {
            Color::from_rgb(0.7, 0.7, 0.7) // Gray while capturing
        } else {
            Color::WHITE
        };

        // Press down effect while capturing
        let (inner_size, outer_size) = if self.is_capturing {
            (
                ui::CAPTURE_BUTTON_INNER_SIZE * 0.85,
                ui::CAPTURE_BUTTON_OUTER_SIZE * 0.85,
            )
        } else {
            (ui::CAPTURE_BUTTON_INNER_SIZE, ui::CAPTURE_BUTTON_OUTER_SIZE)
        };

        let button_inner = widget::container(widget::Space::new(
            Length::Fixed(inner_size),
            Length::Fixed(inner_size),
        ))
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(capture_button_color)),
            border: cosmic::iced::Border {
                radius: [ui::CAPTURE_BUTTON_RADIUS
                    * (inner_size / ui::CAPTURE_BUTTON_INNER_SIZE); 4]
                    .into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let mut button = widget::button::custom(button_inner)
            .padding(0)
            .width(Length::Fixed(outer_size))
            .height(Length::Fixed(outer_size));

        if !is_disabled {
            button = button.on_press(Message::Capture);
        }

        // Fixed-size wrapper prevents layout shift when the button shrinks
        let button_wrapper = widget::container(button)
            .width(Length::Fixed(ui::CAPTURE_BUTTON_OUTER_SIZE))
            .height(Length::Fixed(ui::CAPTURE_BUTTON_OUTER_SIZE))
            .center_x(ui::CAPTURE_BUTTON_OUTER_SIZE)
            .center_y(ui::CAPTURE_BUTTON_OUTER_SIZE);

        widget::container(button_wrapper)
            .padding([spacing.space_xs, 0])
            .into()
    }

    /// Build the record button widget
    ///
    /// A small red circle next to the capture button. Recording is not
    /// implemented; pressing it only logs.
    pub fn build_record_button(&self) -> Element<'_, Message> {
        let is_disabled = self.transition_state.ui_disabled;

        let record_color = if is_disabled {
            Color::from_rgba(0.5, 0.1, 0.1, 0.3)
        } else {
            Color::from_rgb(0.9, 0.1, 0.1)
        };

        let button_inner = widget::container(widget::Space::new(
            Length::Fixed(ui::RECORD_BUTTON_SIZE * 0.6),
            Length::Fixed(ui::RECORD_BUTTON_SIZE * 0.6),
        ))
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(record_color)),
            border: cosmic::iced::Border {
                radius: [ui::RECORD_BUTTON_SIZE * 0.3; 4].into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let mut button = widget::button::custom(button_inner)
            .padding(0)
            .width(Length::Fixed(ui::RECORD_BUTTON_SIZE))
            .height(Length::Fixed(ui::RECORD_BUTTON_SIZE));

        if !is_disabled {
            button = button.on_press(Message::ToggleRecording);
        }

        widget::container(button)
            .width(Length::Fixed(ui::RECORD_BUTTON_SIZE))
            .height(Length::Fixed(ui::RECORD_BUTTON_SIZE))
            .center_x(ui::RECORD_BUTTON_SIZE)
            .center_y(ui::RECORD_BUTTON_SIZE)
            .into()
    }
}
