// SPDX-License-Identifier: MPL-2.0
//! Modal root: scrim, content and backdrop-only close.
//!
//! The scrim sits in a `mouse_area` that reports [`Message::Backdrop`]. The
//! content is wrapped in `opaque`, so presses inside it are captured before
//! they can reach the scrim.

use super::{gallery, notice, video, Message, Modal, ModalSlot};
use crate::i18n::fluent::I18n;
use crate::media::MediaCache;
use crate::ui::styles;
use iced::{
    widget::{center, mouse_area, opaque, Column, Container, Stack},
    Element, Length,
};

/// Contextual data needed to render the modal layer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub slot: &'a ModalSlot,
    pub media: &'a MediaCache,
    /// Fade progress of the slot.
    pub opacity: f32,
}

/// Render the modal layer, or `None` when there is nothing to draw.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let Some(modal) = ctx.slot.active() else {
        // Fading snapshot of a closed modal: scrim only, inert
        return ctx.slot.exiting().map(|_| scrim(ctx.opacity).into());
    };

    let content: Element<'a, Message> = match modal {
        Modal::Gallery(state) => gallery::view(ctx.i18n, state, ctx.media).map(Message::Gallery),
        Modal::Video { url, title } => video::view(ctx.i18n, url, title),
        Modal::Notice => notice::view(ctx.i18n),
    };

    let backdrop = mouse_area(scrim(ctx.opacity)).on_press(Message::Backdrop);

    Some(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(center(opaque(content)))
            .into(),
    )
}

fn scrim<'a>(alpha: f32) -> Container<'a, Message> {
    Container::new(Column::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::scrim(alpha))
}
