// SPDX-License-Identifier: MPL-2.0
//! Top-level content sections.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed content blocks shown in the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Summary,
    Film,
    Commercial,
    Experience,
    Skills,
    Personal,
}

impl SectionId {
    /// All sections in navigation order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Summary,
        SectionId::Film,
        SectionId::Commercial,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Personal,
    ];

    /// Stable identifier used in config and content files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Summary => "summary",
            SectionId::Film => "film",
            SectionId::Commercial => "commercial",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Personal => "personal",
        }
    }

    /// Fluent key of the navigation label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SectionId::Summary => "nav-summary",
            SectionId::Film => "nav-film",
            SectionId::Commercial => "nav-commercial",
            SectionId::Experience => "nav-experience",
            SectionId::Skills => "nav-skills",
            SectionId::Personal => "nav-personal",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown section: {s}"))
    }
}
