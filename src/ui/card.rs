// SPDX-License-Identifier: MPL-2.0
//! Expandable content cards.
//!
//! Every card owns a single expanded flag. There is no accordion behavior:
//! any number of cards may be open at once. Two static capabilities shape a
//! card:
//!
//! - `always_expanded`: the body is always shown and toggling does nothing
//! - `disable_expand`: no toggle affordance at all (commercial spots)
//!
//! Both come from the content file and the section category, never from
//! runtime state.

use crate::content::{ExperienceEntry, ProjectEntry, SkillEntry};
use crate::domain::media::MediaKind;
use crate::domain::section::SectionId;
use crate::i18n::fluent::I18n;
use crate::media::MediaCache;
use crate::ui::components::{chips, media_frame};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, container, Column, Container, Row, Text},
    Border, ContentFit, Element, Font, Length, Theme,
};

/// Static capabilities of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardConfig {
    pub always_expanded: bool,
    pub disable_expand: bool,
}

impl CardConfig {
    /// Capabilities of a project card shown in `section`.
    #[must_use]
    pub fn for_project(section: SectionId, entry: &ProjectEntry) -> Self {
        Self {
            always_expanded: entry.always_expanded,
            disable_expand: section == SectionId::Commercial,
        }
    }

    /// Experience cards only expand when there is something to reveal.
    #[must_use]
    pub fn for_experience(entry: &ExperienceEntry) -> Self {
        Self {
            always_expanded: false,
            disable_expand: entry.more_info.is_empty(),
        }
    }

    #[must_use]
    pub fn for_skill() -> Self {
        Self::default()
    }

    /// Whether a toggle can change what the card shows.
    #[must_use]
    pub fn is_toggleable(self) -> bool {
        !self.always_expanded && !self.disable_expand
    }
}

/// Per-instance expansion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    config: CardConfig,
    expanded: bool,
}

impl CardState {
    /// Creates a collapsed card (or a permanently expanded one).
    #[must_use]
    pub fn new(config: CardConfig) -> Self {
        Self {
            config,
            expanded: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> CardConfig {
        self.config
    }

    /// Whether the body is visible.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.config.always_expanded || self.expanded
    }

    /// Flips the expanded flag. Returns `false` when the card ignores toggles.
    pub fn toggle(&mut self) -> bool {
        if !self.config.is_toggleable() {
            return false;
        }
        self.expanded = !self.expanded;
        true
    }
}

/// Messages emitted by a card.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Toggle,
    /// A thumbnail (or the gallery button) was pressed.
    OpenGallery(usize),
    OpenVideo,
    OpenLink(String),
}

/// Events propagated to the owning section.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    OpenGallery { index: usize },
    OpenVideo,
    OpenLink(String),
}

/// Process a card message and return the corresponding event.
pub fn update(state: &mut CardState, message: Message) -> Event {
    match message {
        Message::Toggle => {
            state.toggle();
            Event::None
        }
        Message::OpenGallery(index) => Event::OpenGallery { index },
        Message::OpenVideo => Event::OpenVideo,
        Message::OpenLink(url) => Event::OpenLink(url),
    }
}

/// Contextual data needed to render a project card.
pub struct ProjectContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a CardState,
    pub entry: &'a ProjectEntry,
    pub media: &'a MediaCache,
}

/// Render a film, commercial or personal project.
pub fn project_view<'a>(ctx: ProjectContext<'a>) -> Element<'a, Message> {
    let entry = ctx.entry;
    let expanded = ctx.state.is_expanded();

    let mut subtitle = Column::new().spacing(spacing::XXS);
    if let Some(duration) = &entry.duration {
        subtitle = subtitle.push(
            Text::new(duration.as_str())
                .size(typography::BODY_SM)
                .style(theme::muted_text),
        );
    }
    if let Some(studio) = &entry.studio {
        subtitle = subtitle.push(
            Text::new(studio.as_str())
                .size(typography::BODY_SM)
                .style(theme::muted_text),
        );
    }

    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(build_header(ctx.i18n, ctx.state, &entry.title, subtitle.into()));

    if !entry.description.is_empty() {
        body = body.push(Text::new(entry.description.as_str()).size(typography::BODY));
    }
    if !entry.technologies.is_empty() {
        body = body.push(chips::view(&entry.technologies));
    }

    if expanded {
        if !entry.details.is_empty() {
            body = body.push(build_details(&entry.details));
        }
        if entry.media_kind == MediaKind::Image && !entry.media.is_empty() {
            body = body.push(build_thumbnails(&ctx));
        }
        if entry.video_url.is_some() {
            body = body.push(
                button(Text::new(ctx.i18n.tr("card-watch-video")))
                    .on_press(Message::OpenVideo)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary),
            );
        }
    } else if ctx.state.config().disable_expand && !entry.media.is_empty() {
        // Compact cards cannot reveal a thumbnail grid
        body = body.push(
            button(Text::new(ctx.i18n.tr("card-view-gallery")).size(typography::BODY_SM))
                .on_press(Message::OpenGallery(0))
                .padding(0)
                .style(styles::button::link),
        );
    }

    if let Some(link) = &entry.link {
        body = body.push(build_link_button(ctx.i18n.tr("card-open-link"), link));
    }

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(entry.variant))
        .into()
}

/// Contextual data needed to render an experience card.
pub struct ExperienceContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a CardState,
    pub entry: &'a ExperienceEntry,
}

/// Render one position of the experience timeline.
pub fn experience_view<'a>(ctx: ExperienceContext<'a>) -> Element<'a, Message> {
    let entry = ctx.entry;

    let subtitle: Element<'a, Message> = match &entry.duration {
        Some(duration) => Text::new(duration.as_str())
            .size(typography::BODY_SM)
            .style(theme::muted_text)
            .into(),
        None => Column::new().into(),
    };

    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(build_header(ctx.i18n, ctx.state, &entry.title, subtitle));

    if !entry.description.is_empty() {
        body = body.push(Text::new(entry.description.as_str()).size(typography::BODY));
    }
    if !entry.technologies.is_empty() {
        body = body.push(chips::view(&entry.technologies));
    }
    if ctx.state.is_expanded() && !entry.more_info.is_empty() {
        body = body
            .push(build_subsection_title(ctx.i18n.tr("card-more-info")))
            .push(build_details(&entry.more_info));
    }

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(entry.variant))
        .into()
}

/// Contextual data needed to render a skill card.
pub struct SkillContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a CardState,
    pub entry: &'a SkillEntry,
}

/// Render a skill group. Tools stay visible when the card is collapsed.
pub fn skill_view<'a>(ctx: SkillContext<'a>) -> Element<'a, Message> {
    let entry = ctx.entry;

    let mut body = Column::new().spacing(spacing::SM).push(build_header(
        ctx.i18n,
        ctx.state,
        &entry.title,
        Column::new().into(),
    ));

    if !entry.description.is_empty() {
        body = body.push(Text::new(entry.description.as_str()).size(typography::BODY));
    }
    if !entry.tools.is_empty() {
        body = body
            .push(build_subsection_title(ctx.i18n.tr("card-tools")))
            .push(chips::view(&entry.tools));
    }

    if ctx.state.is_expanded() {
        let skills = entry
            .skills
            .iter()
            .fold(Column::new().spacing(spacing::XS), |column, skill| {
                column.push(build_bullet(skill))
            });
        body = body.push(skills);

        if !entry.projects.is_empty() {
            let links = entry.projects.iter().fold(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(build_subsection_title(ctx.i18n.tr("card-projects"))),
                |column, project| {
                    column.push(build_link_button(format!("› {}", project.name), &project.url))
                },
            );
            body = body.push(links);
        }
    }

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(crate::content::CardVariant::Outline))
        .into()
}

// ─────────────────────────────────────────────────────────────────────────────
// Building blocks
// ─────────────────────────────────────────────────────────────────────────────

/// Title row with the expand/collapse affordance when the card allows it.
fn build_header<'a>(
    i18n: &I18n,
    state: &CardState,
    title: &'a str,
    subtitle: Element<'a, Message>,
) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            Text::new(title)
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        )
        .push(subtitle);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(heading);

    if state.config().is_toggleable() {
        let (indicator, label) = if state.is_expanded() {
            ("▼", i18n.tr("card-show-less"))
        } else {
            ("▶", i18n.tr("card-show-more"))
        };
        let toggle = button(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(Text::new(indicator).size(typography::CAPTION))
                .push(Text::new(label).size(typography::BODY_SM)),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(toggle_style)
        .on_press(Message::Toggle);
        row = row.push(toggle);
    }

    row.into()
}

fn toggle_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.background.strong.color.into())
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Detail lines; `- ` prefixed lines become bullets, the rest paragraphs.
fn build_details<'a>(lines: &'a [String]) -> Element<'a, Message> {
    let column = lines
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, line| {
            match line.strip_prefix("- ") {
                Some(item) => column.push(build_bullet(item)),
                None => column.push(Text::new(line.as_str()).size(typography::BODY)),
            }
        });

    Container::new(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn build_bullet<'a>(item: &str) -> Element<'a, Message> {
    Text::new(format!("  • {item}")).size(typography::BODY).into()
}

fn build_subsection_title<'a>(title: String) -> Element<'a, Message> {
    Text::new(title)
        .size(typography::BODY_SM)
        .font(Font {
            weight: Weight::Semibold,
            ..Font::default()
        })
        .style(theme::accent_text)
        .into()
}

fn build_link_button<'a>(label: String, url: &str) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_SM))
        .on_press(Message::OpenLink(url.to_string()))
        .padding(0)
        .style(styles::button::link)
        .into()
}

fn build_thumbnails<'a>(ctx: &ProjectContext<'a>) -> Element<'a, Message> {
    let row = ctx
        .entry
        .media
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::SM), |row, (index, item)| {
            let frame = media_frame::view(
                ctx.media.status(item),
                ctx.i18n,
                Length::Fixed(sizing::THUMBNAIL_WIDTH),
                Length::Fixed(sizing::THUMBNAIL_HEIGHT),
                ContentFit::Cover,
            );
            row.push(
                button(frame)
                    .padding(spacing::XXS)
                    .style(styles::button::thumbnail)
                    .on_press(Message::OpenGallery(index)),
            )
        });

    row.wrap().vertical_spacing(spacing::SM).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Link;

    fn project(always_expanded: bool) -> ProjectEntry {
        ProjectEntry {
            title: "Proud Princess".into(),
            description: "Lead compositor".into(),
            details: vec!["Intro".into(), "- Keying".into()],
            technologies: vec!["Nuke".into()],
            media: ["a.png", "b.png"].into_iter().collect(),
            video_url: Some("https://vimeo.com/1".into()),
            always_expanded,
            ..ProjectEntry::default()
        }
    }

    #[test]
    fn toggling_twice_restores_original_state() {
        let mut state = CardState::new(CardConfig::default());
        assert!(!state.is_expanded());

        update(&mut state, Message::Toggle);
        assert!(state.is_expanded());

        update(&mut state, Message::Toggle);
        assert!(!state.is_expanded());
    }

    #[test]
    fn always_expanded_card_ignores_toggle() {
        let config = CardConfig::for_project(SectionId::Personal, &project(true));
        let mut state = CardState::new(config);

        assert!(state.is_expanded());
        assert!(!state.toggle());
        assert!(state.is_expanded());
    }

    #[test]
    fn commercial_cards_never_expand() {
        let config = CardConfig::for_project(SectionId::Commercial, &project(false));
        assert!(config.disable_expand);

        let mut state = CardState::new(config);
        update(&mut state, Message::Toggle);
        assert!(!state.is_expanded());
    }

    #[test]
    fn flagged_film_card_stays_expanded() {
        let config = CardConfig::for_project(SectionId::Film, &project(true));
        assert!(!config.is_toggleable());

        let mut state = CardState::new(config);
        assert!(state.is_expanded());
        assert!(!state.toggle());
        assert!(state.is_expanded());
    }

    #[test]
    fn unflagged_film_card_starts_collapsed() {
        let config = CardConfig::for_project(SectionId::Film, &project(false));
        assert!(config.is_toggleable());
        assert!(!CardState::new(config).is_expanded());
    }

    #[test]
    fn experience_without_more_info_is_not_toggleable() {
        let bare = ExperienceEntry {
            title: "PFX".into(),
            ..ExperienceEntry::default()
        };
        assert!(!CardConfig::for_experience(&bare).is_toggleable());

        let rich = ExperienceEntry {
            more_info: vec!["- Pipeline tools".into()],
            ..bare
        };
        assert!(CardConfig::for_experience(&rich).is_toggleable());
    }

    #[test]
    fn media_and_link_messages_become_events() {
        let mut state = CardState::new(CardConfig::default());
        assert_eq!(
            update(&mut state, Message::OpenGallery(1)),
            Event::OpenGallery { index: 1 }
        );
        assert_eq!(update(&mut state, Message::OpenVideo), Event::OpenVideo);
        assert_eq!(
            update(&mut state, Message::OpenLink("https://x.y".into())),
            Event::OpenLink("https://x.y".into())
        );
        assert!(!state.is_expanded());
    }

    #[test]
    fn cards_are_independent() {
        let mut first = CardState::new(CardConfig::default());
        let second = CardState::new(CardConfig::default());
        first.toggle();
        assert!(first.is_expanded());
        assert!(!second.is_expanded());
    }

    #[test]
    fn views_render_collapsed_and_expanded() {
        let i18n = I18n::default();
        let media = MediaCache::with_defaults();
        let entry = project(false);
        let skill = SkillEntry {
            title: "Compositing".into(),
            skills: vec!["Keying".into()],
            tools: vec!["Nuke".into()],
            projects: vec![Link {
                name: "Nuke Grab Tool".into(),
                url: "https://nukepedia.com".into(),
            }],
            ..SkillEntry::default()
        };
        let experience = ExperienceEntry {
            title: "PFX".into(),
            more_info: vec!["- Pipeline".into()],
            ..ExperienceEntry::default()
        };

        for expanded in [false, true] {
            let mut state = CardState::new(CardConfig::default());
            if expanded {
                state.toggle();
            }
            let _project = project_view(ProjectContext {
                i18n: &i18n,
                state: &state,
                entry: &entry,
                media: &media,
            });
            let _skill = skill_view(SkillContext {
                i18n: &i18n,
                state: &state,
                entry: &skill,
            });
            let _experience = experience_view(ExperienceContext {
                i18n: &i18n,
                state: &state,
                entry: &experience,
            });
        }
    }
}
