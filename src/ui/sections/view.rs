// SPDX-License-Identifier: MPL-2.0
//! Rendering of the active section.

use super::{Message, SectionRouter};
use crate::content::Portfolio;
use crate::domain::section::SectionId;
use crate::i18n::fluent::I18n;
use crate::media::MediaCache;
use crate::ui::card;
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, container, Column, Container, Row, Stack, Text},
    Border, Color, Element, Font, Length, Theme,
};

/// Contextual data needed to render the content area.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub router: &'a SectionRouter,
    pub portfolio: &'a Portfolio,
    pub media: &'a MediaCache,
    pub showreel_paused: bool,
    /// Crossfade progress of the active section.
    pub opacity: f32,
}

/// Render the active section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = match ctx.router.active() {
        SectionId::Summary => build_summary(&ctx),
        section => build_card_section(&ctx, section),
    };

    let page = Container::new(content)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .width(Length::Fill);

    if ctx.opacity >= opacity::OPAQUE {
        return page.into();
    }

    // Fade in from the page background
    let veil_alpha = 1.0 - ctx.opacity.clamp(0.0, 1.0);
    let veil = Container::new(Column::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |theme: &Theme| container::Style {
            background: Some(
                Color {
                    a: veil_alpha,
                    ..theme.extended_palette().background.base.color
                }
                .into(),
            ),
            ..Default::default()
        });

    Stack::new().push(page).push(veil).into()
}

fn build_section_header<'a>(i18n: &I18n, section: SectionId) -> Element<'a, Message> {
    let key = section.as_str();
    Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(i18n.tr(&format!("section-{key}-title")))
                .size(typography::TITLE_LG)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        )
        .push(
            Text::new(i18n.tr(&format!("section-{key}-subtitle")))
                .size(typography::BODY_LG)
                .style(theme::muted_text),
        )
        .into()
}

fn build_card_section<'a>(ctx: &ViewContext<'a>, section: SectionId) -> Element<'a, Message> {
    let portfolio = ctx.portfolio;
    let states = ctx.router.cards();

    let cards: Vec<Element<'a, card::Message>> = match section {
        SectionId::Experience => portfolio
            .experience
            .iter()
            .zip(states)
            .map(|(entry, state)| {
                card::experience_view(card::ExperienceContext {
                    i18n: ctx.i18n,
                    state,
                    entry,
                })
            })
            .collect(),
        SectionId::Skills => portfolio
            .skills
            .iter()
            .zip(states)
            .map(|(entry, state)| {
                card::skill_view(card::SkillContext {
                    i18n: ctx.i18n,
                    state,
                    entry,
                })
            })
            .collect(),
        _ => portfolio
            .projects(section)
            .iter()
            .zip(states)
            .map(|(entry, state)| {
                card::project_view(card::ProjectContext {
                    i18n: ctx.i18n,
                    state,
                    entry,
                    media: ctx.media,
                })
            })
            .collect(),
    };

    let column = cards.into_iter().enumerate().fold(
        Column::new()
            .spacing(spacing::LG)
            .push(build_section_header(ctx.i18n, section)),
        |column, (index, element)| {
            column.push(element.map(move |message| Message::Card(index, message)))
        },
    );

    column.width(Length::Fill).into()
}

fn build_summary<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let profile = &ctx.portfolio.profile;
    let summary = &ctx.portfolio.summary;
    let features = &ctx.portfolio.features;

    let mut column = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(
            Text::new(profile.name.as_str())
                .size(typography::DISPLAY)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        )
        .push(
            Text::new(profile.headline.as_str())
                .size(typography::TITLE_SM)
                .style(theme::accent_text),
        );

    if summary.showreel_url.is_some() {
        column = column.push(build_showreel(ctx));
    }

    for paragraph in &summary.paragraphs {
        column = column.push(Text::new(paragraph.as_str()).size(typography::BODY_LG));
    }

    if !summary.highlights.is_empty() {
        let highlights = summary.highlights.iter().fold(
            Column::new().spacing(spacing::XS).push(
                Text::new(ctx.i18n.tr("summary-highlights"))
                    .size(typography::TITLE_SM)
                    .style(theme::accent_text),
            ),
            |column, line| column.push(Text::new(format!("  • {line}")).size(typography::BODY)),
        );
        column = column.push(highlights);
    }

    if features.show_stats && !summary.stats.is_empty() {
        let stats = summary.stats.iter().fold(
            Row::new().spacing(spacing::MD),
            |row, stat| {
                let tile = Column::new()
                    .spacing(spacing::XXS)
                    .align_x(Horizontal::Center)
                    .push(
                        Text::new(stat.value.as_str())
                            .size(typography::TITLE_LG)
                            .style(theme::accent_text),
                    )
                    .push(
                        Text::new(stat.label.as_str())
                            .size(typography::CAPTION)
                            .style(theme::muted_text),
                    );
                row.push(
                    Container::new(tile)
                        .padding(spacing::MD)
                        .width(Length::Fill)
                        .style(styles::container::card(crate::content::CardVariant::Default)),
                )
            },
        );
        column = column.push(stats);
    }

    if features.show_contact_button && profile.email.is_some() {
        column = column.push(
            button(Text::new(ctx.i18n.tr("sidebar-contact-button")))
                .on_press(Message::Contact)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        );
    }

    column.into()
}

/// Poster for the featured showreel; playback runs in the browser.
fn build_showreel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (glyph, label) = if ctx.showreel_paused {
        ("▶", ctx.i18n.tr("video-play"))
    } else {
        ("❚❚", ctx.i18n.tr("video-pause"))
    };

    let title = ctx
        .portfolio
        .summary
        .showreel_title
        .clone()
        .unwrap_or_else(|| ctx.i18n.tr("summary-showreel"));

    let poster = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(glyph).size(sizing::ICON_XL))
        .push(Text::new(label).size(typography::BODY))
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(
            Text::new(ctx.i18n.tr("video-hint"))
                .size(typography::CAPTION)
                .style(theme::muted_text),
        );

    button(
        Container::new(poster)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::GALLERY_MAX_HEIGHT / 2.0))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .padding(0)
    .on_press(Message::ToggleShowreel)
    .style(|theme: &Theme, status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        button::Style {
            background: Some(
                if hovered {
                    theme.extended_palette().background.strong.color
                } else {
                    theme.extended_palette().background.weak.color
                }
                .into(),
            ),
            text_color: theme.extended_palette().background.base.text,
            border: Border {
                color: theme::accent_color(theme),
                width: if hovered { 2.0 } else { 0.0 },
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    })
    .into()
}
