// SPDX-License-Identifier: MPL-2.0
//! Portfolio content types.
//!
//! Everything the portfolio shows is data. A "version" of the portfolio is a
//! different content file plus [`FeatureFlags`], never different code.

use crate::domain::media::{MediaItem, MediaKind, MediaSequence};
use crate::domain::section::SectionId;
use serde::{Deserialize, Serialize};

/// Visual emphasis of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    #[default]
    Default,
    Featured,
    Outline,
}

/// Named external link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

/// Sidebar identity block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    /// Footer lines ("Available for new opportunities", ...).
    #[serde(default)]
    pub availability: Vec<String>,
    /// Downloadable resume. `None` shows the under-construction notice.
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub picture: Option<MediaItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// Landing section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub showreel_url: Option<String>,
    #[serde(default)]
    pub showreel_title: Option<String>,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

/// Film, commercial or personal project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub studio: Option<String>,
    /// Paragraphs and bullet lines shown when expanded.
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub media: MediaSequence,
    #[serde(default)]
    pub media_kind: MediaKind,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub variant: CardVariant,
    #[serde(default)]
    pub always_expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub more_info: Vec<String>,
    #[serde(default)]
    pub variant: CardVariant,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SkillEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Always visible, even when collapsed.
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Link>,
}

/// Per-deployment switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default = "default_true")]
    pub show_stats: bool,
    #[serde(default = "default_true")]
    pub show_contact_button: bool,
    /// Sections that open the notice modal instead of being shown.
    #[serde(default)]
    pub under_construction: Vec<SectionId>,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            show_stats: true,
            show_contact_button: true,
            under_construction: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Complete portfolio content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub film: Vec<ProjectEntry>,
    #[serde(default)]
    pub commercial: Vec<ProjectEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub personal: Vec<ProjectEntry>,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl Portfolio {
    /// Project cards of `section`; empty for sections that are not project lists.
    #[must_use]
    pub fn projects(&self, section: SectionId) -> &[ProjectEntry] {
        match section {
            SectionId::Film => &self.film,
            SectionId::Commercial => &self.commercial,
            SectionId::Personal => &self.personal,
            SectionId::Summary | SectionId::Experience | SectionId::Skills => &[],
        }
    }

    /// Number of expandable cards rendered in `section`.
    #[must_use]
    pub fn card_count(&self, section: SectionId) -> usize {
        match section {
            SectionId::Summary => 0,
            SectionId::Experience => self.experience.len(),
            SectionId::Skills => self.skills.len(),
            SectionId::Film | SectionId::Commercial | SectionId::Personal => {
                self.projects(section).len()
            }
        }
    }

    #[must_use]
    pub fn is_under_construction(&self, section: SectionId) -> bool {
        self.features.under_construction.contains(&section)
    }
}
