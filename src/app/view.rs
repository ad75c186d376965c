// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the page (sidebar or compact bar plus the content
//! scrollable), the back-to-top button, the compact navigation menu and the
//! modal slot.

use super::Message;
use crate::content::Portfolio;
use crate::i18n::fluent::I18n;
use crate::media::MediaCache;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::modal::{self, ModalSlot};
use crate::ui::sections::{self, SectionRouter};
use crate::ui::sidebar;
use crate::ui::styles;
use crate::ui::theme;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, center, opaque, Column, Container, Id, Row, Scrollable, Stack, Text},
    Element, Font, Length,
};

/// Widget id of the content scrollable, used for scroll snapping.
pub const CONTENT_SCROLL_ID: &str = "showreel-content";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub portfolio: &'a Portfolio,
    pub router: &'a SectionRouter,
    pub modal: &'a ModalSlot,
    pub sidebar: &'a sidebar::State,
    pub media: &'a MediaCache,
    pub showreel_paused: bool,
    pub section_opacity: f32,
    pub modal_opacity: f32,
    pub splash_done: bool,
    pub compact: bool,
    pub show_scroll_top: bool,
}

impl<'a> ViewContext<'a> {
    fn sidebar_context(&self) -> sidebar::ViewContext<'a> {
        sidebar::ViewContext {
            i18n: self.i18n,
            state: self.sidebar,
            profile: &self.portfolio.profile,
            active: self.router.active(),
            media: self.media,
        }
    }
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if !ctx.splash_done {
        return view_splash(ctx.i18n, ctx.portfolio);
    }

    let content = sections::view(sections::ViewContext {
        i18n: ctx.i18n,
        router: ctx.router,
        portfolio: ctx.portfolio,
        media: ctx.media,
        showreel_paused: ctx.showreel_paused,
        opacity: ctx.section_opacity,
    })
    .map(Message::Sections);

    let scrollable = Scrollable::new(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .id(Id::new(CONTENT_SCROLL_ID))
    .on_scroll(|viewport| Message::ContentScrolled(viewport.absolute_offset().y))
    .width(Length::Fill)
    .height(Length::Fill);

    let page: Element<'_, Message> = if ctx.compact {
        Column::new()
            .push(sidebar::compact_bar(ctx.sidebar_context()).map(Message::Sidebar))
            .push(scrollable)
            .into()
    } else {
        Row::new()
            .push(sidebar::view(ctx.sidebar_context()).map(Message::Sidebar))
            .push(scrollable)
            .into()
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if ctx.show_scroll_top {
        layers = layers.push(view_scroll_top(ctx.i18n));
    }

    if ctx.compact && ctx.sidebar.menu_open {
        layers = layers.push(opaque(
            sidebar::menu_overlay(ctx.sidebar_context()).map(Message::Sidebar),
        ));
    }

    let modal_layer = modal::view(modal::ViewContext {
        i18n: ctx.i18n,
        slot: ctx.modal,
        media: ctx.media,
        opacity: ctx.modal_opacity,
    });
    if let Some(layer) = modal_layer {
        let layer = layer.map(Message::Modal);
        // The fading snapshot of a closed modal lets input through
        layers = if ctx.modal.is_open() {
            layers.push(opaque(layer))
        } else {
            layers.push(layer)
        };
    }

    layers.into()
}

fn view_splash<'a>(i18n: &I18n, portfolio: &'a Portfolio) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(portfolio.profile.name.as_str())
                .size(typography::DISPLAY)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        )
        .push(Text::new(portfolio.profile.headline.as_str()).size(typography::BODY_LG))
        .push(
            Text::new(i18n.tr("splash-loading"))
                .size(typography::CAPTION)
                .style(theme::muted_text),
        );

    center(content).into()
}

fn view_scroll_top<'a>(i18n: &I18n) -> Element<'a, Message> {
    let label = Text::new(format!("↑  {}", i18n.tr("scroll-top"))).size(typography::BODY_SM);

    Container::new(
        button(label)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button_primary)
            .on_press(Message::ScrollToTop),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom)
    .into()
}
