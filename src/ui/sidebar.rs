// SPDX-License-Identifier: MPL-2.0
//! Sidebar with profile, contacts and section navigation.
//!
//! In the wide layout the sidebar is docked on the left. In the compact
//! layout it collapses into a menu button that opens a full-window
//! navigation list; picking a section closes that list.

use crate::content::Profile;
use crate::domain::section::SectionId;
use crate::i18n::fluent::I18n;
use crate::media::MediaCache;
use crate::ui::components::media_frame;
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, container, Column, Container, Row, Scrollable, Text},
    Border, ContentFit, Element, Font, Length, Theme,
};

/// Sidebar toggles owned by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub contacts_open: bool,
    pub menu_open: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            contacts_open: true,
            menu_open: false,
        }
    }
}

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub profile: &'a Profile,
    pub active: SectionId,
    pub media: &'a MediaCache,
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Select(SectionId),
    ToggleContacts,
    OpenMenu,
    CloseMenu,
    OpenLink(String),
    DownloadResume,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Select(SectionId),
    OpenLink(String),
    /// No resume is published yet.
    ResumeUnavailable,
}

/// Process a sidebar message and return the corresponding event.
pub fn update(state: &mut State, profile: &Profile, message: Message) -> Event {
    match message {
        Message::Select(section) => {
            state.menu_open = false;
            Event::Select(section)
        }
        Message::ToggleContacts => {
            state.contacts_open = !state.contacts_open;
            Event::None
        }
        Message::OpenMenu => {
            state.menu_open = true;
            Event::None
        }
        Message::CloseMenu => {
            state.menu_open = false;
            Event::None
        }
        Message::OpenLink(url) => Event::OpenLink(url),
        Message::DownloadResume => match &profile.resume_url {
            Some(url) => Event::OpenLink(url.clone()),
            None => Event::ResumeUnavailable,
        },
    }
}

/// Render the docked sidebar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .push(build_profile(&ctx));

    let toggle_label = if ctx.state.contacts_open {
        ctx.i18n.tr("sidebar-hide-contacts")
    } else {
        ctx.i18n.tr("sidebar-show-contacts")
    };
    column = column.push(
        button(Text::new(toggle_label).size(typography::CAPTION))
            .padding(0)
            .style(styles::button::link)
            .on_press(Message::ToggleContacts),
    );
    if ctx.state.contacts_open {
        column = column.push(build_contacts(&ctx));
    }

    column = column
        .push(build_navigation(ctx.i18n, ctx.active))
        .push(build_footer(&ctx));

    Container::new(Scrollable::new(column.padding(spacing::LG)))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(sidebar_style)
        .into()
}

/// Compact top bar with the menu button and the artist name.
pub fn compact_bar<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            button(Text::new("☰").size(typography::TITLE_MD))
                .padding(spacing::XS)
                .style(styles::button::nav_item(false))
                .on_press(Message::OpenMenu),
        )
        .push(
            Text::new(ctx.profile.name.as_str())
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        );

    Container::new(row)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(sidebar_style)
        .into()
}

/// Full-window navigation list for the compact layout.
pub fn menu_overlay<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("nav-menu-open"))
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("✕").size(typography::TITLE_MD))
                .padding(spacing::XS)
                .style(styles::button::nav_item(false))
                .on_press(Message::CloseMenu),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header)
        .push(build_navigation(ctx.i18n, ctx.active));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn sidebar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            width: border::WIDTH_SM,
            color: palette.background.strong.color,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

fn build_profile<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS).align_x(Horizontal::Left);

    if let Some(picture) = &ctx.profile.picture {
        column = column.push(media_frame::view(
            ctx.media.status(picture),
            ctx.i18n,
            Length::Fixed(sizing::AVATAR),
            Length::Fixed(sizing::AVATAR),
            ContentFit::Cover,
        ));
    }

    column
        .push(
            Text::new(ctx.profile.name.as_str())
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        )
        .push(
            Text::new(ctx.profile.headline.as_str())
                .size(typography::BODY_SM)
                .style(theme::muted_text),
        )
        .into()
}

fn build_contacts<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let profile = ctx.profile;
    let mut column = Column::new().spacing(spacing::XS);

    if !profile.location.is_empty() {
        column = column.push(
            Text::new(format!("⌖  {}", profile.location))
                .size(typography::BODY_SM)
                .style(theme::muted_text),
        );
    }
    if let Some(email) = &profile.email {
        column = column.push(build_contact_item("✉", email, format!("mailto:{email}")));
    }
    if let Some(phone) = &profile.phone {
        let dial: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        column = column.push(build_contact_item("☏", phone, format!("tel:{dial}")));
    }
    if let Some(github) = &profile.github {
        column = column.push(build_contact_item("⌥", display_host(github), github.clone()));
    }
    if let Some(linkedin) = &profile.linkedin {
        column = column.push(build_contact_item("in", display_host(linkedin), linkedin.clone()));
    }

    column.into()
}

fn build_contact_item<'a>(glyph: &'a str, label: &str, href: String) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(glyph).size(typography::BODY_SM))
        .push(Text::new(label.to_string()).size(typography::BODY_SM));

    button(row)
        .padding(0)
        .style(styles::button::link)
        .on_press(Message::OpenLink(href))
        .into()
}

/// `https://github.com/Themolx` -> `github.com/Themolx`
fn display_host(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
        .trim_start_matches("www.")
}

fn build_navigation<'a>(i18n: &I18n, active: SectionId) -> Element<'a, Message> {
    SectionId::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, section| {
            column.push(
                button(Text::new(i18n.tr(section.label_key())).size(typography::BODY))
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::nav_item(section == active))
                    .on_press(Message::Select(section)),
            )
        })
        .into()
}

fn build_footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let column = ctx.profile.availability.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, line| {
            column.push(
                Text::new(line.as_str())
                    .size(typography::BODY_SM)
                    .style(theme::muted_text),
            )
        },
    );

    let resume = Text::new(format!("⤓  {}", ctx.i18n.tr("sidebar-download-resume")))
        .size(typography::BODY_SM);

    column
        .push(
            button(resume)
                .padding([spacing::XS, 0.0])
                .style(styles::button::link)
                .on_press(Message::DownloadResume),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn profile() -> Profile {
        content::load_builtin().unwrap().profile
    }

    #[test]
    fn sidebar_views_render() {
        let i18n = I18n::default();
        let media = MediaCache::with_defaults();
        let profile = profile();
        for (contacts_open, menu_open) in [(true, false), (false, true)] {
            let state = State {
                contacts_open,
                menu_open,
            };
            let ctx = || ViewContext {
                i18n: &i18n,
                state: &state,
                profile: &profile,
                active: SectionId::Film,
                media: &media,
            };
            let _docked = view(ctx());
            let _bar = compact_bar(ctx());
            let _menu = menu_overlay(ctx());
        }
    }

    #[test]
    fn selecting_a_section_closes_the_menu() {
        let mut state = State {
            menu_open: true,
            ..State::default()
        };
        let event = update(&mut state, &profile(), Message::Select(SectionId::Skills));
        assert!(!state.menu_open);
        assert_eq!(event, Event::Select(SectionId::Skills));
    }

    #[test]
    fn menu_opens_and_closes() {
        let mut state = State::default();
        update(&mut state, &profile(), Message::OpenMenu);
        assert!(state.menu_open);
        update(&mut state, &profile(), Message::CloseMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn contacts_toggle() {
        let mut state = State::default();
        assert!(state.contacts_open);
        update(&mut state, &profile(), Message::ToggleContacts);
        assert!(!state.contacts_open);
    }

    #[test]
    fn resume_without_url_reports_unavailable() {
        let mut state = State::default();
        let mut profile = profile();
        profile.resume_url = None;
        assert_eq!(
            update(&mut state, &profile, Message::DownloadResume),
            Event::ResumeUnavailable
        );

        profile.resume_url = Some("https://example.com/cv.pdf".into());
        assert_eq!(
            update(&mut state, &profile, Message::DownloadResume),
            Event::OpenLink("https://example.com/cv.pdf".into())
        );
    }

    #[test]
    fn display_host_strips_scheme() {
        assert_eq!(display_host("https://github.com/Themolx"), "github.com/Themolx");
        assert_eq!(
            display_host("https://www.linkedin.com/in/martin-tomek"),
            "linkedin.com/in/martin-tomek"
        );
    }
}
