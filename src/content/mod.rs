// SPDX-License-Identifier: MPL-2.0
//! Portfolio content loading.
//!
//! The built-in portfolio is embedded from `assets/content/portfolio.toml`.
//! A different file can be supplied with `--content` or `[content] path` in
//! `settings.toml`; if it cannot be loaded the built-in content is used and a
//! warning is logged.

pub mod model;

pub use model::{
    CardVariant, ExperienceEntry, FeatureFlags, Link, Portfolio, ProjectEntry, Profile,
    SkillEntry, Stat, Summary,
};

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const BUILTIN_FILE: &str = "portfolio.toml";

/// Where the active content came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Builtin,
    File(String),
}

/// Parses and validates portfolio TOML.
///
/// # Errors
///
/// Returns [`Error::Content`] if the TOML is malformed or the profile has no name.
pub fn parse(raw: &str) -> Result<Portfolio> {
    let portfolio: Portfolio =
        toml::from_str(raw).map_err(|err| Error::Content(err.to_string()))?;
    validate(&portfolio)?;
    Ok(portfolio)
}

fn validate(portfolio: &Portfolio) -> Result<()> {
    if portfolio.profile.name.trim().is_empty() {
        return Err(Error::Content("profile.name must not be empty".into()));
    }
    let untitled = portfolio
        .film
        .iter()
        .chain(&portfolio.commercial)
        .chain(&portfolio.personal)
        .any(|entry| entry.title.trim().is_empty());
    if untitled {
        return Err(Error::Content("every project needs a title".into()));
    }
    Ok(())
}

/// Loads the embedded portfolio.
///
/// # Errors
///
/// Returns [`Error::Content`] if the embedded file is missing or invalid,
/// which only happens with a broken build.
pub fn load_builtin() -> Result<Portfolio> {
    let file = Asset::get(BUILTIN_FILE)
        .ok_or_else(|| Error::Content(format!("embedded {BUILTIN_FILE} missing")))?;
    let raw = String::from_utf8_lossy(file.data.as_ref());
    parse(&raw)
}

/// Loads a portfolio from a file on disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, [`Error::Content`] if it
/// is not a valid portfolio.
pub fn load_from_path(path: &Path) -> Result<Portfolio> {
    let raw = fs::read_to_string(path)?;
    parse(&raw)
}

/// Loads `override_path` when given, falling back to the built-in content.
///
/// # Errors
///
/// Only fails when the built-in content itself cannot be loaded.
pub fn load(override_path: Option<&Path>) -> Result<(Portfolio, ContentSource)> {
    if let Some(path) = override_path {
        match load_from_path(path) {
            Ok(portfolio) => {
                return Ok((portfolio, ContentSource::File(path.display().to_string())));
            }
            Err(err) => {
                log::warn!(
                    "Failed to load content from {}: {err}; using built-in portfolio",
                    path.display()
                );
            }
        }
    }
    Ok((load_builtin()?, ContentSource::Builtin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::section::SectionId;
    use tempfile::tempdir;

    const MINIMAL: &str = r#"
[profile]
name = "Test Artist"

[[commercial]]
title = "Spot"
media = ["a.png", "b.png"]
"#;

    #[test]
    fn builtin_portfolio_loads_and_has_every_section() {
        let portfolio = load_builtin().expect("built-in content must parse");
        assert!(!portfolio.profile.name.is_empty());
        assert!(!portfolio.film.is_empty());
        assert!(!portfolio.commercial.is_empty());
        assert!(!portfolio.experience.is_empty());
        assert!(!portfolio.skills.is_empty());
        assert!(!portfolio.personal.is_empty());
    }

    #[test]
    fn builtin_personal_projects_are_always_expanded() {
        let portfolio = load_builtin().unwrap();
        assert!(portfolio.personal.iter().all(|p| p.always_expanded));
    }

    #[test]
    fn minimal_file_uses_defaults() {
        let portfolio = parse(MINIMAL).unwrap();
        assert_eq!(portfolio.card_count(SectionId::Commercial), 1);
        assert_eq!(portfolio.commercial[0].media.len(), 2);
        assert!(portfolio.features.show_stats);
        assert!(portfolio.film.is_empty());
        assert_eq!(portfolio.card_count(SectionId::Summary), 0);
    }

    #[test]
    fn empty_profile_name_is_rejected() {
        let err = parse("[profile]\nname = \"  \"\n").unwrap_err();
        assert!(matches!(err, Error::Content(_)));
    }

    #[test]
    fn malformed_toml_is_a_content_error() {
        assert!(matches!(parse("profile = ["), Err(Error::Content(_))));
    }

    #[test]
    fn under_construction_sections_are_parsed() {
        let raw = format!("{MINIMAL}\n[features]\nunder_construction = [\"skills\"]\n");
        let portfolio = parse(&raw).unwrap();
        assert!(portfolio.is_under_construction(SectionId::Skills));
        assert!(!portfolio.is_under_construction(SectionId::Film));
    }

    #[test]
    fn load_prefers_override_and_falls_back_on_error() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.toml");
        fs::write(&good, MINIMAL).unwrap();

        let (portfolio, source) = load(Some(&good)).unwrap();
        assert_eq!(portfolio.profile.name, "Test Artist");
        assert!(matches!(source, ContentSource::File(_)));

        let missing = dir.path().join("missing.toml");
        let (_, source) = load(Some(&missing)).unwrap();
        assert_eq!(source, ContentSource::Builtin);
    }
}
