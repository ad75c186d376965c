// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the sidebar, the
//! content sections and the modal slot.
//!
//! The `App` struct owns every piece of UI state and translates messages
//! into side effects like media fetches or opened links. Component modules
//! only report events; the policy (which modal opens, which key is live,
//! what gets prefetched) is decided here and in [`update`].

mod message;
pub mod paths;
mod state;
pub mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use state::UiState;
pub use subscription::Listeners;

use crate::application::port::{LinkOpener, PlaybackHandle};
use crate::config::{self, Config, COMPACT_LAYOUT_BREAKPOINT, SCROLL_TOP_THRESHOLD};
use crate::content::{self, ContentSource, Portfolio};
use crate::domain::section::SectionId;
use crate::i18n::fluent::I18n;
use crate::infrastructure::browser::SystemBrowser;
use crate::infrastructure::preview_player::PreviewPlayer;
use crate::media::MediaCache;
use crate::ui::modal::ModalSlot;
use crate::ui::sections::SectionRouter;
use crate::ui::sidebar;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    portfolio: Portfolio,
    content_source: ContentSource,
    theme: AppTheme,
    router: SectionRouter,
    modal: ModalSlot,
    sidebar: sidebar::State,
    media: MediaCache,
    /// Featured showreel on the summary page.
    player: PreviewPlayer,
    opener: Arc<dyn LinkOpener>,
    splash_done: bool,
    /// Below the layout breakpoint the sidebar becomes a menu button.
    compact: bool,
    show_scroll_top: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("ui", &self.ui_state())
            .field("content_source", &self.content_source)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes configuration, localization and content from `flags`.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        Self::with_opener(flags, Arc::new(SystemBrowser))
    }

    /// Like [`App::new`], with links opened through `opener`.
    pub fn with_opener(flags: Flags, opener: Arc<dyn LinkOpener>) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        let i18n = I18n::new(flags.lang.clone(), &config);
        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let content_path = flags
            .content_path
            .map(PathBuf::from)
            .or_else(|| config.content.path.clone());
        let (portfolio, content_source) = match content::load(content_path.as_deref()) {
            Ok(loaded) => loaded,
            Err(err) => {
                log::error!("Built-in portfolio unavailable: {err}");
                (Portfolio::default(), ContentSource::Builtin)
            }
        };

        let now = Instant::now();
        let router = SectionRouter::new(config.startup.initial_section(), &portfolio, now);
        let showreel_url = portfolio.summary.showreel_url.clone().unwrap_or_default();
        let splash_delay = config.startup.splash_delay();

        log::info!(
            "Starting with locale {} and {} content ({} sections flagged unfinished)",
            i18n.current_locale(),
            match &content_source {
                ContentSource::Builtin => "built-in".to_string(),
                ContentSource::File(path) => path.clone(),
            },
            portfolio.features.under_construction.len()
        );

        let mut app = Self {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            router,
            modal: ModalSlot::new(now),
            sidebar: sidebar::State::default(),
            media: MediaCache::with_defaults(),
            player: PreviewPlayer::new(showreel_url, opener.clone()),
            opener,
            splash_done: splash_delay.is_disabled(),
            compact: false,
            show_scroll_top: false,
            config,
            portfolio,
            content_source,
        };

        let splash_task = if app.splash_done {
            Task::none()
        } else {
            let delay = splash_delay.as_duration();
            Task::perform(async move { tokio::time::sleep(delay).await }, |()| {
                Message::SplashFinished
            })
        };

        let avatar: Vec<_> = app.portfolio.profile.picture.iter().cloned().collect();
        let avatar_task = update::fetch_media(&mut app.media, &avatar);
        let section_task = update::request_section_media(&mut app.update_context());

        (app, Task::batch([splash_task, avatar_task, section_task]))
    }

    /// Snapshot of the shell state.
    #[must_use]
    pub fn ui_state(&self) -> UiState {
        UiState {
            active_section: self.router.active(),
            sidebar_open: self.sidebar.contacts_open,
            mobile_menu_open: self.sidebar.menu_open,
            modal: self.modal.kind(),
            splash_done: self.splash_done,
        }
    }

    /// Listeners the next `subscription()` call installs.
    #[must_use]
    pub fn listeners(&self) -> Listeners {
        let modal_open = self.modal.is_open();
        Listeners {
            modal_keys: modal_open,
            playback_key: self.splash_done
                && !modal_open
                && self.router.active() == SectionId::Summary,
            tick: self.router.is_animating() || self.modal.is_animating(),
        }
    }

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    #[must_use]
    pub fn content_source(&self) -> &ContentSource {
        &self.content_source
    }

    #[must_use]
    pub fn router(&self) -> &SectionRouter {
        &self.router
    }

    #[must_use]
    pub fn modal(&self) -> &ModalSlot {
        &self.modal
    }

    #[must_use]
    pub fn media(&self) -> &MediaCache {
        &self.media
    }

    #[must_use]
    pub fn is_showreel_paused(&self) -> bool {
        self.player.is_paused()
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    #[must_use]
    pub fn is_scroll_top_visible(&self) -> bool {
        self.show_scroll_top
    }

    pub fn title(&self) -> String {
        self.i18n
            .tr_with_args("window-title", &[("name", self.portfolio.profile.name.as_str())])
    }

    pub fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create(self.listeners())
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            config: &self.config,
            portfolio: &self.portfolio,
            router: &mut self.router,
            modal: &mut self.modal,
            sidebar: &mut self.sidebar,
            media: &mut self.media,
            player: &mut self.player,
            opener: self.opener.as_ref(),
            splash_done: self.splash_done,
            now: Instant::now(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Sidebar(sidebar_message) => {
                update::handle_sidebar_message(&mut self.update_context(), sidebar_message)
            }
            Message::Sections(sections_message) => {
                update::handle_sections_message(&mut self.update_context(), sections_message)
            }
            Message::Modal(modal_message) => {
                update::handle_modal_message(&mut self.update_context(), modal_message)
            }
            Message::KeyPressed(key) => update::handle_key(&mut self.update_context(), key),
            Message::Tick(now) => {
                self.router.tick(now);
                self.modal.tick(now);
                Task::none()
            }
            Message::WindowResized(size) => {
                let compact = size.width < COMPACT_LAYOUT_BREAKPOINT;
                if compact != self.compact {
                    log::debug!("Layout switched to {}", if compact { "compact" } else { "sidebar" });
                }
                self.compact = compact;
                if !compact {
                    self.sidebar.menu_open = false;
                }
                Task::none()
            }
            Message::ContentScrolled(offset) => {
                self.show_scroll_top = offset > SCROLL_TOP_THRESHOLD;
                Task::none()
            }
            Message::ScrollToTop => {
                self.show_scroll_top = false;
                update::snap_to_top()
            }
            Message::SplashFinished => {
                if self.splash_done {
                    log::debug!("Ignoring repeated splash completion");
                } else {
                    self.splash_done = true;
                }
                Task::none()
            }
            Message::MediaLoaded { item, result } => {
                self.media.complete(item, result);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();
        view::view(view::ViewContext {
            i18n: &self.i18n,
            portfolio: &self.portfolio,
            router: &self.router,
            modal: &self.modal,
            sidebar: &self.sidebar,
            media: &self.media,
            showreel_paused: self.player.is_paused(),
            section_opacity: self.router.opacity(now),
            modal_opacity: self.modal.opacity(now),
            splash_done: self.splash_done,
            compact: self.compact,
            show_scroll_top: self.show_scroll_top,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::input::KeyInput;
    use crate::error::Error;
    use crate::infrastructure::preview_player::tests::RecordingOpener;
    use crate::ui::modal::{self, ModalKind};
    use tempfile::tempdir;

    fn app() -> (App, tempfile::TempDir) {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            config_dir: Some(dir.path().display().to_string()),
            ..Flags::default()
        };
        let (app, _task) = App::with_opener(flags, Arc::new(RecordingOpener::default()));
        (app, dir)
    }

    #[test]
    fn boots_on_summary_behind_splash() {
        let (app, _dir) = app();
        let state = app.ui_state();
        assert_eq!(state.active_section, SectionId::Summary);
        assert!(!state.splash_done);
        assert!(state.sidebar_open);
        assert_eq!(state.modal, None);
        assert_eq!(app.content_source(), &ContentSource::Builtin);
    }

    #[test]
    fn repeated_splash_completion_is_ignored() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::SplashFinished);
        let _ = app.update(Message::SplashFinished);
        assert!(app.ui_state().splash_done);
    }

    #[test]
    fn disabled_splash_starts_done() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join("settings.toml"),
            "[startup]\nsplash_duration_ms = 0\ninitial_section = \"skills\"\n",
        )
        .expect("write settings");
        let flags = Flags {
            config_dir: Some(dir.path().display().to_string()),
            ..Flags::default()
        };

        let (app, _task) = App::with_opener(flags, Arc::new(RecordingOpener::default()));

        assert!(app.ui_state().splash_done);
        assert_eq!(app.ui_state().active_section, SectionId::Skills);
    }

    #[test]
    fn modal_key_listener_exists_only_while_open() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::SplashFinished);
        assert!(!app.listeners().modal_keys);

        app.modal.open(modal::Modal::Notice, Instant::now());
        assert!(app.listeners().modal_keys);
        assert!(!app.listeners().playback_key);

        let _ = app.update(Message::KeyPressed(KeyInput::Escape));
        assert_eq!(app.ui_state().modal, None);
        assert!(!app.listeners().modal_keys);
        assert!(app.listeners().playback_key);
    }

    #[test]
    fn space_toggles_showreel_on_summary() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::SplashFinished);
        assert!(app.is_showreel_paused());

        let _ = app.update(Message::KeyPressed(KeyInput::Space));
        assert!(!app.is_showreel_paused());
        let _ = app.update(Message::KeyPressed(KeyInput::Space));
        assert!(app.is_showreel_paused());
    }

    #[test]
    fn space_during_splash_keeps_showreel_paused() {
        let (mut app, _dir) = app();
        assert!(!app.ui_state().splash_done);
        assert!(!app.listeners().playback_key);

        let _ = app.update(Message::KeyPressed(KeyInput::Space));
        assert!(app.is_showreel_paused());
    }

    #[test]
    fn playback_listener_only_on_summary() {
        let (mut app, _dir) = app();
        assert!(!app.listeners().playback_key);
        let _ = app.update(Message::SplashFinished);
        assert!(app.listeners().playback_key);
        let _ = app.update(Message::Sidebar(sidebar::Message::Select(SectionId::Experience)));
        assert!(!app.listeners().playback_key);
    }

    #[test]
    fn tick_runs_only_while_fading() {
        let (mut app, _dir) = app();
        assert!(!app.listeners().tick);

        let _ = app.update(Message::Sidebar(sidebar::Message::Select(SectionId::Film)));
        assert!(app.listeners().tick);

        let later = Instant::now() + std::time::Duration::from_secs(1);
        let _ = app.update(Message::Tick(later));
        assert!(!app.listeners().tick);
    }

    #[test]
    fn escape_without_modal_changes_nothing() {
        let (mut app, _dir) = app();
        let before = app.ui_state();
        let _ = app.update(Message::KeyPressed(KeyInput::Escape));
        assert_eq!(app.ui_state(), before);
    }

    #[test]
    fn backdrop_closes_open_modal() {
        let (mut app, _dir) = app();
        app.modal.open(modal::Modal::Notice, Instant::now());
        assert_eq!(app.ui_state().modal, Some(ModalKind::Notice));

        let _ = app.update(Message::Modal(modal::Message::Backdrop));
        assert_eq!(app.ui_state().modal, None);
    }

    #[test]
    fn narrow_window_switches_to_compact_layout() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::WindowResized(Size::new(600.0, 800.0)));
        assert!(app.is_compact());

        let _ = app.update(Message::Sidebar(sidebar::Message::OpenMenu));
        assert!(app.ui_state().mobile_menu_open);

        let _ = app.update(Message::Sidebar(sidebar::Message::Select(SectionId::Skills)));
        assert!(!app.ui_state().mobile_menu_open);
        assert_eq!(app.ui_state().active_section, SectionId::Skills);

        let _ = app.update(Message::Sidebar(sidebar::Message::OpenMenu));
        let _ = app.update(Message::WindowResized(Size::new(1280.0, 800.0)));
        assert!(!app.is_compact());
        assert!(!app.ui_state().mobile_menu_open);
    }

    #[test]
    fn scroll_top_button_follows_offset() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::ContentScrolled(120.0));
        assert!(!app.is_scroll_top_visible());
        let _ = app.update(Message::ContentScrolled(480.0));
        assert!(app.is_scroll_top_visible());
        let _ = app.update(Message::ScrollToTop);
        assert!(!app.is_scroll_top_visible());
    }

    #[test]
    fn failed_media_is_remembered() {
        let (mut app, _dir) = app();
        let item = crate::domain::media::MediaItem::new("missing.png");
        let _ = app.update(Message::MediaLoaded {
            item: item.clone(),
            result: Err(Error::Fetch("404".into())),
        });
        assert!(matches!(
            app.media().status(&item),
            crate::media::MediaStatus::Failed
        ));
    }

    #[test]
    fn title_names_the_artist() {
        let (app, _dir) = app();
        assert!(app.title().contains(app.portfolio().profile.name.as_str()));
    }

    #[test]
    fn every_state_renders() {
        let (mut app, _dir) = app();
        let _ = app.view();
        let _ = app.update(Message::SplashFinished);
        for section in SectionId::ALL {
            let _ = app.update(Message::Sidebar(sidebar::Message::Select(section)));
            let _ = app.view();
        }
        let _ = app.update(Message::WindowResized(Size::new(500.0, 700.0)));
        let _ = app.update(Message::Sidebar(sidebar::Message::OpenMenu));
        let _ = app.update(Message::ContentScrolled(900.0));
        app.modal.open(modal::Modal::Notice, Instant::now());
        let _ = app.view();
    }
}
