// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component updates return events; the handlers here turn those events into
//! state changes on the shell (modal slot, router, player) and into tasks
//! (media fetches, scroll snapping).

use super::view::CONTENT_SCROLL_ID;
use super::Message;
use crate::application::input::KeyInput;
use crate::application::port::{LinkOpener, PlaybackHandle};
use crate::config::Config;
use crate::content::Portfolio;
use crate::domain::media::{MediaItem, MediaKind, MediaSequence};
use crate::domain::section::SectionId;
use crate::infrastructure::preview_player::PreviewPlayer;
use crate::media::{loader, MediaCache};
use crate::ui::modal::{self, GalleryState, Modal, ModalSlot};
use crate::ui::sections::{self, SectionRouter, Selection};
use crate::ui::sidebar;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Mutable view of the shell handed to every handler.
pub struct UpdateContext<'a> {
    pub config: &'a Config,
    pub portfolio: &'a Portfolio,
    pub router: &'a mut SectionRouter,
    pub modal: &'a mut ModalSlot,
    pub sidebar: &'a mut sidebar::State,
    pub media: &'a mut MediaCache,
    pub player: &'a mut PreviewPlayer,
    pub opener: &'a dyn LinkOpener,
    pub splash_done: bool,
    pub now: Instant,
}

pub fn handle_sidebar_message(
    ctx: &mut UpdateContext<'_>,
    message: sidebar::Message,
) -> Task<Message> {
    match sidebar::update(ctx.sidebar, &ctx.portfolio.profile, message) {
        sidebar::Event::None => Task::none(),
        sidebar::Event::Select(section) => handle_section_select(ctx, section),
        sidebar::Event::OpenLink(url) => {
            ctx.opener.open(&url);
            Task::none()
        }
        sidebar::Event::ResumeUnavailable => {
            ctx.modal.open(Modal::Notice, ctx.now);
            Task::none()
        }
    }
}

/// Switches the content area to `section`, or shows the notice when the
/// section is flagged as unfinished.
pub fn handle_section_select(ctx: &mut UpdateContext<'_>, section: SectionId) -> Task<Message> {
    match ctx.router.select(section, ctx.portfolio, ctx.now) {
        Selection::Switched => Task::batch([snap_to_top(), request_section_media(ctx)]),
        Selection::Unchanged => Task::none(),
        Selection::UnderConstruction => {
            ctx.modal.open(Modal::Notice, ctx.now);
            Task::none()
        }
    }
}

pub fn handle_sections_message(
    ctx: &mut UpdateContext<'_>,
    message: sections::Message,
) -> Task<Message> {
    let task = match sections::update(ctx.router, ctx.portfolio, message) {
        sections::Event::None => Task::none(),
        sections::Event::OpenGallery { media, start } => open_gallery(ctx, media, start),
        sections::Event::OpenVideo { url, title } => {
            ctx.modal.open(Modal::Video { url, title }, ctx.now);
            Task::none()
        }
        sections::Event::OpenLink(url) => {
            ctx.opener.open(&url);
            Task::none()
        }
        sections::Event::ToggleShowreel => {
            ctx.player.toggle();
            Task::none()
        }
        sections::Event::Contact => {
            if let Some(email) = &ctx.portfolio.profile.email {
                ctx.opener.open(&format!("mailto:{email}"));
            }
            Task::none()
        }
    };

    // A card may have expanded and revealed new thumbnails
    Task::batch([task, request_section_media(ctx)])
}

pub fn handle_modal_message(ctx: &mut UpdateContext<'_>, message: modal::Message) -> Task<Message> {
    match modal::update(ctx.modal, message, ctx.now) {
        modal::Event::Navigated => prefetch_gallery(ctx),
        modal::Event::OpenLink(url) => {
            ctx.opener.open(&url);
            Task::none()
        }
        modal::Event::Closed | modal::Event::None => Task::none(),
    }
}

/// Routes a key press. Space drives the showreel on the summary page once
/// the splash is gone and no modal is open; every other key belongs to the
/// open modal.
pub fn handle_key(ctx: &mut UpdateContext<'_>, key: KeyInput) -> Task<Message> {
    if key == KeyInput::Space {
        let live =
            ctx.splash_done && !ctx.modal.is_open() && ctx.router.active() == SectionId::Summary;
        if live {
            ctx.player.toggle();
        }
        return Task::none();
    }

    match modal::handle_key(ctx.modal, key, ctx.now) {
        modal::Event::Navigated => prefetch_gallery(ctx),
        _ => Task::none(),
    }
}

fn open_gallery(ctx: &mut UpdateContext<'_>, media: MediaSequence, start: usize) -> Task<Message> {
    let gallery = GalleryState::new(media, start, ctx.config.gallery.drag_threshold());
    ctx.modal.open(Modal::Gallery(gallery), ctx.now);
    prefetch_gallery(ctx)
}

/// Fetches the current gallery item and its neighbours in both directions.
pub fn prefetch_gallery(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(gallery) = ctx.modal.gallery() else {
        return Task::none();
    };
    let carousel = gallery.carousel();
    let sequence = carousel.sequence();

    let items: Vec<MediaItem> = carousel
        .current_index()
        .into_iter()
        .chain(carousel.neighbours(ctx.config.gallery.prefetch_count()))
        .filter_map(|index| sequence.get(index).cloned())
        .collect();

    fetch_media(ctx.media, &items)
}

/// Fetches the thumbnails currently visible in the active section.
pub fn request_section_media(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let items = visible_thumbnails(ctx.router, ctx.portfolio);
    fetch_media(ctx.media, &items)
}

fn visible_thumbnails(router: &SectionRouter, portfolio: &Portfolio) -> Vec<MediaItem> {
    portfolio
        .projects(router.active())
        .iter()
        .zip(router.cards())
        .filter(|(entry, card)| card.is_expanded() && entry.media_kind == MediaKind::Image)
        .flat_map(|(entry, _)| entry.media.iter().cloned())
        .collect()
}

/// Starts a background fetch for every item the cache does not hold yet.
pub fn fetch_media(cache: &mut MediaCache, items: &[MediaItem]) -> Task<Message> {
    let pending = cache.request(items);
    if pending.is_empty() {
        return Task::none();
    }
    log::debug!("Fetching {} media items", pending.len());

    Task::batch(pending.into_iter().map(|item| {
        Task::perform(loader::fetch(item), |(item, result)| Message::MediaLoaded {
            item,
            result,
        })
    }))
}

/// Scrolls the content area back to its origin.
pub fn snap_to_top() -> Task<Message> {
    operation::snap_to(Id::new(CONTENT_SCROLL_ID), RelativeOffset { x: 0.0, y: 0.0 })
}
