// SPDX-License-Identifier: MPL-2.0
//! "Under construction" notice.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    font::Weight,
    widget::{button, Column, Container, Text},
    Element, Font, Length,
};

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new("🚧").size(sizing::ICON_XL))
        .push(
            Text::new(i18n.tr("notice-title"))
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        )
        .push(Text::new(i18n.tr("notice-body")).size(typography::BODY))
        .push(
            button(Text::new(i18n.tr("modal-close")))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button_primary)
                .on_press(Message::Close),
        );

    Container::new(content)
        .padding(spacing::XL)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .style(styles::overlay::modal_surface)
        .into()
}
