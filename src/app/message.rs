// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::input::KeyInput;
use crate::domain::media::MediaItem;
use crate::error::Error;
use crate::ui::{modal, sections, sidebar};
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Sidebar(sidebar::Message),
    Sections(sections::Message),
    Modal(modal::Message),
    /// A key the portfolio reacts to. Only delivered while a listener for it
    /// is installed.
    KeyPressed(KeyInput),
    /// Animation frame while a fade is running.
    Tick(Instant),
    WindowResized(Size),
    /// Vertical offset of the content scrollable.
    ContentScrolled(f32),
    ScrollToTop,
    SplashFinished,
    /// Result of a background media fetch.
    MediaLoaded {
        item: MediaItem,
        result: Result<Vec<u8>, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `cs`, `en-US`).
    pub lang: Option<String>,
    /// Optional portfolio file replacing the built-in content.
    /// Takes precedence over `[content] path` in the config.
    pub content_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SHOWREEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
