// SPDX-License-Identifier: MPL-2.0
//! Main content area: the section router and the blocks it shows.
//!
//! Exactly one section is visible at a time. Cards inside it are addressed by
//! their position in the section; the router turns their events into
//! requests for the shell (open a modal, open a link).

pub mod state;
pub mod view;

pub use state::{Selection, SectionRouter};
pub use view::{view, ViewContext};

use crate::content::Portfolio;
use crate::domain::media::MediaSequence;
use crate::domain::section::SectionId;
use crate::ui::card;

/// Messages emitted by the content area.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Card(usize, card::Message),
    ToggleShowreel,
    Contact,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    OpenGallery { media: MediaSequence, start: usize },
    OpenVideo { url: String, title: String },
    OpenLink(String),
    ToggleShowreel,
    Contact,
}

/// Process a content message against the active section.
pub fn update(router: &mut SectionRouter, portfolio: &Portfolio, message: Message) -> Event {
    match message {
        Message::ToggleShowreel => Event::ToggleShowreel,
        Message::Contact => Event::Contact,
        Message::Card(index, message) => {
            let section = router.active();
            let Some(state) = router.card_mut(index) else {
                return Event::None;
            };
            match card::update(state, message) {
                card::Event::None => Event::None,
                card::Event::OpenLink(url) => Event::OpenLink(url),
                card::Event::OpenGallery { index: start } => {
                    match portfolio.projects(section).get(index) {
                        Some(entry) => Event::OpenGallery {
                            media: entry.media.clone(),
                            start,
                        },
                        None => Event::None,
                    }
                }
                card::Event::OpenVideo => video_event(portfolio, section, index),
            }
        }
    }
}

fn video_event(portfolio: &Portfolio, section: SectionId, index: usize) -> Event {
    portfolio
        .projects(section)
        .get(index)
        .and_then(|entry| {
            entry.video_url.as_ref().map(|url| Event::OpenVideo {
                url: url.clone(),
                title: entry.title.clone(),
            })
        })
        .unwrap_or(Event::None)
}
