// SPDX-License-Identifier: MPL-2.0
//! Active section and the card states that live inside it.

use crate::content::Portfolio;
use crate::domain::section::SectionId;
use crate::ui::card::{CardConfig, CardState};
use crate::ui::state::presence::{Presence, DEFAULT_FADE};
use std::time::{Duration, Instant};

/// Result of asking the router to show a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The new section is shown and fading in.
    Switched,
    /// The section was already active; nothing changed.
    Unchanged,
    /// The section is flagged as unfinished; the caller shows the notice.
    UnderConstruction,
}

/// Holds the one visible section.
///
/// Card state is not kept above the section: switching away and back
/// rebuilds every card in its initial state.
#[derive(Debug, Clone)]
pub struct SectionRouter {
    active: SectionId,
    cards: Vec<CardState>,
    presence: Presence,
    fade: Duration,
}

impl SectionRouter {
    /// Shows `initial` without a fade. A section flagged as under
    /// construction falls back to the summary.
    #[must_use]
    pub fn new(initial: SectionId, portfolio: &Portfolio, now: Instant) -> Self {
        let active = if portfolio.is_under_construction(initial) {
            SectionId::Summary
        } else {
            initial
        };
        Self {
            active,
            cards: build_cards(active, portfolio),
            presence: Presence::visible(now, DEFAULT_FADE),
            fade: DEFAULT_FADE,
        }
    }

    /// Overrides the crossfade length (zero disables it).
    #[must_use]
    pub fn with_fade(mut self, fade: Duration) -> Self {
        self.fade = fade;
        self
    }

    #[must_use]
    pub fn active(&self) -> SectionId {
        self.active
    }

    #[must_use]
    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn card_mut(&mut self, index: usize) -> Option<&mut CardState> {
        self.cards.get_mut(index)
    }

    /// Requests `section`.
    pub fn select(&mut self, section: SectionId, portfolio: &Portfolio, now: Instant) -> Selection {
        if portfolio.is_under_construction(section) {
            log::debug!("Section {section} is under construction");
            return Selection::UnderConstruction;
        }
        if section == self.active {
            return Selection::Unchanged;
        }

        log::debug!("Section {} -> {section}", self.active);
        self.active = section;
        self.cards = build_cards(section, portfolio);
        self.presence = Presence::entering(now, self.fade);
        Selection::Switched
    }

    /// Advances the crossfade. Returns `true` while it is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.presence.advance(now);
        self.presence.is_animating()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.presence.is_animating()
    }

    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.presence.opacity(now)
    }
}

fn build_cards(section: SectionId, portfolio: &Portfolio) -> Vec<CardState> {
    match section {
        SectionId::Summary => Vec::new(),
        SectionId::Experience => portfolio
            .experience
            .iter()
            .map(|entry| CardState::new(CardConfig::for_experience(entry)))
            .collect(),
        SectionId::Skills => portfolio
            .skills
            .iter()
            .map(|_| CardState::new(CardConfig::for_skill()))
            .collect(),
        SectionId::Film | SectionId::Commercial | SectionId::Personal => portfolio
            .projects(section)
            .iter()
            .map(|entry| CardState::new(CardConfig::for_project(section, entry)))
            .collect(),
    }
}
