// SPDX-License-Identifier: MPL-2.0
//! Video modal.
//!
//! Embedded web players cannot run inside the window, so the modal shows the
//! title with a button that hands the URL to the browser.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette::WHITE, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

pub fn view<'a>(i18n: &I18n, url: &'a str, title: &'a str) -> Element<'a, Message> {
    let close = button(Text::new("✕").size(typography::TITLE_SM))
        .padding(spacing::XS)
        .style(styles::button_overlay(
            WHITE,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
        ))
        .on_press(Message::Close);

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(title)
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(close);

    let poster = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new("▶").size(sizing::ICON_XL))
        .push(
            button(Text::new(i18n.tr("video-open-external")))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button_primary)
                .on_press(Message::OpenExternal),
        )
        .push(Text::new(url).size(typography::CAPTION).style(theme::muted_text));

    let body = Column::new().spacing(spacing::LG).push(header).push(
        Container::new(poster)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::GALLERY_MAX_HEIGHT / 2.0))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    );

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::GALLERY_MAX_WIDTH * 0.75))
        .style(styles::overlay::modal_surface)
        .into()
}
