// SPDX-License-Identifier: MPL-2.0
use iced::Point;
use showreel::app::{App, Flags, Message};
use showreel::application::carousel::Carousel;
use showreel::application::input::KeyInput;
use showreel::application::port::LinkOpener;
use showreel::config::{self, Config};
use showreel::content::ContentSource;
use showreel::domain::media::MediaSequence;
use showreel::domain::section::SectionId;
use showreel::domain::ui::DragThreshold;
use showreel::ui::card;
use showreel::ui::modal::{self, gallery, ModalKind};
use showreel::ui::sections;
use showreel::ui::sidebar;
use std::sync::{Arc, Mutex};
use tempfile::{tempdir, TempDir};

const PORTFOLIO: &str = r#"
[profile]
name = "Test Artist"
email = "artist@example.com"

[[film]]
title = "Short"
media = ["one.png", "two.png", "three.png", "four.png"]
video_url = "https://youtu.be/short"

[[film]]
title = "Feature"
media = ["five.png"]
"#;

#[derive(Default)]
struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

struct Harness {
    app: App,
    opener: Arc<RecordingOpener>,
    _dir: TempDir,
}

impl Harness {
    fn new() -> Self {
        let dir = tempdir().expect("Failed to create temporary directory");
        let content = dir.path().join("portfolio.toml");
        std::fs::write(&content, PORTFOLIO).expect("Failed to write portfolio");

        let opener = Arc::new(RecordingOpener::default());
        let flags = Flags {
            lang: Some("en-US".to_string()),
            content_path: Some(content.display().to_string()),
            config_dir: Some(dir.path().display().to_string()),
        };
        let (mut app, _task) = App::with_opener(flags, opener.clone());
        let _ = app.update(Message::SplashFinished);

        Self {
            app,
            opener,
            _dir: dir,
        }
    }

    fn send(&mut self, message: Message) {
        let _ = self.app.update(message);
    }

    fn select(&mut self, section: SectionId) {
        self.send(Message::Sidebar(sidebar::Message::Select(section)));
    }

    fn card(&mut self, index: usize, message: card::Message) {
        self.send(Message::Sections(sections::Message::Card(index, message)));
    }

    fn gallery(&mut self, message: gallery::Message) {
        self.send(Message::Modal(modal::Message::Gallery(message)));
    }

    fn gallery_index(&self) -> Option<usize> {
        self.app
            .modal()
            .gallery()
            .and_then(|state| state.carousel().current_index())
    }
}

#[test]
fn content_file_replaces_builtin_portfolio() {
    let harness = Harness::new();
    assert!(matches!(harness.app.content_source(), ContentSource::File(_)));
    assert_eq!(harness.app.portfolio().profile.name, "Test Artist");
    assert_eq!(harness.app.portfolio().film.len(), 2);
}

#[test]
fn opening_a_second_modal_replaces_the_first() {
    let mut harness = Harness::new();
    harness.select(SectionId::Film);

    harness.card(0, card::Message::OpenGallery(2));
    assert_eq!(harness.app.ui_state().modal, Some(ModalKind::Gallery));

    harness.card(0, card::Message::OpenVideo);
    assert_eq!(harness.app.ui_state().modal, Some(ModalKind::Video));
    assert!(harness.app.modal().gallery().is_none());
}

#[test]
fn closing_twice_equals_closing_once() {
    let mut harness = Harness::new();
    harness.select(SectionId::Film);
    harness.card(0, card::Message::OpenGallery(0));

    harness.send(Message::Modal(modal::Message::Close));
    let once = harness.app.ui_state();
    harness.send(Message::Modal(modal::Message::Close));

    assert_eq!(harness.app.ui_state(), once);
    assert_eq!(once.modal, None);
}

#[test]
fn escape_closes_video_and_gallery() {
    let mut harness = Harness::new();
    harness.select(SectionId::Film);

    harness.card(0, card::Message::OpenVideo);
    harness.send(Message::KeyPressed(KeyInput::Escape));
    assert_eq!(harness.app.ui_state().modal, None);

    harness.card(0, card::Message::OpenGallery(1));
    harness.send(Message::KeyPressed(KeyInput::Escape));
    assert_eq!(harness.app.ui_state().modal, None);
    assert!(!harness.app.listeners().modal_keys);
}

#[test]
fn arrow_keys_wrap_inside_the_gallery() {
    let mut harness = Harness::new();
    harness.select(SectionId::Film);
    harness.card(0, card::Message::OpenGallery(0));

    harness.send(Message::KeyPressed(KeyInput::ArrowLeft));
    assert_eq!(harness.gallery_index(), Some(3));
    harness.send(Message::KeyPressed(KeyInput::ArrowRight));
    assert_eq!(harness.gallery_index(), Some(0));
}

#[test]
fn right_drag_past_threshold_shows_previous_item() {
    let mut harness = Harness::new();
    harness.select(SectionId::Film);
    harness.card(0, card::Message::OpenGallery(0));

    harness.gallery(gallery::Message::PointerMoved(Point::new(100.0, 40.0)));
    harness.gallery(gallery::Message::PointerPressed);
    harness.gallery(gallery::Message::PointerMoved(Point::new(220.0, 40.0)));
    harness.gallery(gallery::Message::PointerReleased);

    assert_eq!(harness.gallery_index(), Some(3));
    let carousel = harness.app.modal().gallery().expect("gallery").carousel();
    assert!(carousel.drag_offset().abs() < f32::EPSILON);
}

#[test]
fn short_drag_keeps_the_item() {
    let mut harness = Harness::new();
    harness.select(SectionId::Film);
    harness.card(0, card::Message::OpenGallery(2));

    harness.gallery(gallery::Message::PointerMoved(Point::new(300.0, 40.0)));
    harness.gallery(gallery::Message::PointerPressed);
    harness.gallery(gallery::Message::PointerMoved(Point::new(200.0, 40.0)));
    harness.gallery(gallery::Message::PointerReleased);

    assert_eq!(harness.gallery_index(), Some(2));
}

#[test]
fn reopening_the_gallery_starts_at_the_clicked_item() {
    let mut harness = Harness::new();
    harness.select(SectionId::Film);
    harness.card(0, card::Message::OpenGallery(1));
    harness.send(Message::KeyPressed(KeyInput::ArrowRight));
    harness.send(Message::Modal(modal::Message::Backdrop));

    harness.card(0, card::Message::OpenGallery(1));
    assert_eq!(harness.gallery_index(), Some(1));
}

#[test]
fn single_item_gallery_wraps_to_itself() {
    let mut harness = Harness::new();
    harness.select(SectionId::Film);
    harness.card(1, card::Message::OpenGallery(0));

    harness.send(Message::KeyPressed(KeyInput::ArrowRight));
    assert_eq!(harness.gallery_index(), Some(0));
    harness.send(Message::KeyPressed(KeyInput::ArrowLeft));
    assert_eq!(harness.gallery_index(), Some(0));
}

#[test]
fn returning_to_a_section_resets_its_cards() {
    let mut harness = Harness::new();
    harness.select(SectionId::Film);
    harness.card(0, card::Message::Toggle);
    harness.card(1, card::Message::Toggle);
    assert!(harness.app.router().cards()[0].is_expanded());
    assert!(harness.app.router().cards()[1].is_expanded());

    harness.select(SectionId::Skills);
    harness.select(SectionId::Film);

    assert!(harness.app.router().cards().iter().all(|card| !card.is_expanded()));
}

#[test]
fn contact_button_opens_mail_client() {
    let mut harness = Harness::new();
    harness.send(Message::Sections(sections::Message::Contact));
    assert_eq!(
        harness.opener.opened.lock().unwrap().as_slice(),
        ["mailto:artist@example.com"]
    );
}

#[test]
fn language_follows_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut config = Config::default();
    config.general.language = Some("cs".to_string());
    config::save_to_path(&config, &dir.path().join("settings.toml"))
        .expect("Failed to write config file");

    let flags = Flags {
        config_dir: Some(dir.path().display().to_string()),
        ..Flags::default()
    };
    let (app, _task) = App::with_opener(flags, Arc::new(RecordingOpener::default()));

    assert_eq!(app.i18n.current_locale().to_string(), "cs");
}

#[test]
fn carousel_round_trip_and_cycle_closure() {
    for len in 1..=6 {
        let media: MediaSequence = (0..len).map(|i| format!("{i}.png")).collect();
        for start in 0..len {
            let mut carousel = Carousel::new(media.clone(), start, DragThreshold::default());

            carousel.next();
            carousel.previous();
            assert_eq!(carousel.current_index(), Some(start));

            for _ in 0..len {
                carousel.next();
            }
            assert_eq!(carousel.current_index(), Some(start));
        }
    }
}

#[test]
fn empty_carousel_is_inert() {
    let mut carousel = Carousel::new(MediaSequence::empty(), 0, DragThreshold::default());
    carousel.next();
    carousel.previous();
    carousel.end_drag(-500.0);
    assert!(!carousel.go_to(0));
    assert_eq!(carousel.current_index(), None);
}
