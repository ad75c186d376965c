// SPDX-License-Identifier: MPL-2.0
//! A fixed-size slot for one cached image.

use crate::i18n::fluent::I18n;
use crate::media::MediaStatus;
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{image, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Renders the image behind `status`, or a placeholder while it is loading
/// or after it failed. Never-requested items show the loading placeholder;
/// the request is issued on the next update.
pub fn view<'a, Message: 'a>(
    status: MediaStatus,
    i18n: &I18n,
    width: Length,
    height: Length,
    fit: ContentFit,
) -> Element<'a, Message> {
    match status {
        MediaStatus::Ready(handle) => image(handle)
            .width(width)
            .height(height)
            .content_fit(fit)
            .into(),
        MediaStatus::Loading | MediaStatus::Absent => {
            placeholder(Text::new(i18n.tr("gallery-loading")), width, height)
        }
        MediaStatus::Failed => placeholder(
            Text::new(i18n.tr("gallery-load-failed")).color(theme::error_text_color()),
            width,
            height,
        ),
    }
}

fn placeholder<'a, Message: 'a>(
    label: Text<'a>,
    width: Length,
    height: Length,
) -> Element<'a, Message> {
    Container::new(label.size(typography::CAPTION))
        .width(width)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::media_placeholder)
        .into()
}
