// SPDX-License-Identifier: GPL-3.0-only

//! Gallery bottom sheet
//!
//! A sheet sliding up from the bottom edge showing every photo captured
//! this session, newest first. Photos live only in memory.

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, ContentFit, Length};
use cosmic::widget::{self, icon};

impl AppModel {
    /// Build the gallery bottom sheet
    pub fn build_gallery_sheet(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        // Header: title left, close button right
        let header = widget::row()
            .push(widget::text::title4(fl!("gallery")))
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(
                widget::button::icon(icon::from_name("window-close-symbolic"))
                    .on_press(Message::CloseGallery),
            )
            .align_y(Alignment::Center)
            .width(Length::Fill);

        let body: Element<'_, Message> = if self.history.is_empty() {
            widget::container(widget::text(fl!("gallery-empty")))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(cosmic::iced::alignment::Horizontal::Center)
                .align_y(cosmic::iced::alignment::Vertical::Center)
                .into()
        } else {
            self.build_gallery_grid()
        };

        let sheet = widget::column()
            .push(header)
            .push(body)
            .spacing(spacing.space_xs)
            .padding(spacing.space_s)
            .width(Length::Fill)
            .height(Length::Fixed(ui::GALLERY_SHEET_HEIGHT));

        widget::container(sheet)
            .width(Length::Fill)
            .height(Length::Fixed(ui::GALLERY_SHEET_HEIGHT))
            .style(|theme: &cosmic::Theme| widget::container::Style {
                background: Some(Background::Color(theme.cosmic().bg_color().into())),
                text_color: Some(theme.cosmic().on_bg_color().into()),
                border: cosmic::iced::Border {
                    radius: [
                        spacing_radius(),
                        spacing_radius(),
                        0.0,
                        0.0,
                    ]
                    .into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into()
    }

    /// Scrollable thumbnail grid, newest capture first.
    fn build_gallery_grid(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let mut grid = widget::column().spacing(spacing.space_xs).width(Length::Fill);
        let mut row = widget::row().spacing(spacing.space_xs).width(Length::Fill);
        let mut in_row = 0;

        for captured in self.history.iter() {
            let image = widget::image::Image::new(captured.handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fixed(120.0));

            row = row.push(widget::container(image).width(Length::Fill));
            in_row += 1;

            if in_row == ui::GALLERY_SHEET_COLUMNS {
                grid = grid.push(row);
                row = widget::row().spacing(spacing.space_xs).width(Length::Fill);
                in_row = 0;
            }
        }

        // Pad the last row so a lone thumbnail keeps its column width
        if in_row > 0 {
            for _ in in_row..ui::GALLERY_SHEET_COLUMNS {
                row = row.push(widget::Space::new(Length::Fill, Length::Shrink));
            }
            grid = grid.push(row);
        }

        widget::scrollable(grid)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn spacing_radius() -> f32 {
    cosmic::theme::spacing().space_s as f32
}
