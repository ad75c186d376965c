// SPDX-License-Identifier: MPL-2.0
//! Image gallery modal: carousel plus pointer drag tracking.

use crate::application::carousel::Carousel;
use crate::domain::media::MediaSequence;
use crate::domain::ui::DragThreshold;
use crate::i18n::fluent::I18n;
use crate::media::MediaCache;
use crate::ui::components::media_frame;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::state::DragState;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    mouse,
    widget::{button, mouse_area, Column, Container, Row, Text},
    ContentFit, Element, Length, Padding, Point,
};

/// Messages emitted by the gallery view.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Previous,
    Next,
    GoTo(usize),
    PointerMoved(Point),
    PointerPressed,
    PointerReleased,
    /// The cursor left the image while dragging; resolves like a release.
    PointerExited,
}

/// A carousel created when the gallery opens and dropped when it closes.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    carousel: Carousel,
    drag: DragState,
    cursor: Option<Point>,
}

impl GalleryState {
    #[must_use]
    pub fn new(media: MediaSequence, start: usize, threshold: DragThreshold) -> Self {
        Self {
            carousel: Carousel::new(media, start, threshold),
            drag: DragState::default(),
            cursor: None,
        }
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// Applies `message`. Returns `true` when the current index changed.
    pub fn update(&mut self, message: Message) -> bool {
        let before = self.carousel.current_index();
        match message {
            Message::Previous => self.carousel.previous(),
            Message::Next => self.carousel.next(),
            Message::GoTo(index) => {
                self.carousel.go_to(index);
            }
            Message::PointerMoved(position) => {
                self.cursor = Some(position);
                if let Some(delta) = self.drag.update(position) {
                    self.carousel.drag_to(delta);
                }
            }
            Message::PointerPressed => {
                if let Some(position) = self.cursor {
                    self.drag.start(position);
                }
            }
            Message::PointerReleased | Message::PointerExited => {
                if let Some(delta) = self.drag.finish() {
                    self.carousel.end_drag(delta);
                }
            }
        }
        self.carousel.current_index() != before
    }
}

/// Render the gallery content (the scrim is drawn by the modal root).
pub fn view<'a>(i18n: &I18n, state: &'a GalleryState, media: &'a MediaCache) -> Element<'a, Message> {
    let carousel = state.carousel();

    let Some(current) = carousel.current_index() else {
        return Container::new(Text::new(i18n.tr("gallery-empty")).size(typography::BODY_LG))
            .padding(spacing::XL)
            .style(styles::overlay::indicator(radius::LG))
            .into();
    };

    let arrow_style = || styles::button_overlay(WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER);

    let controls = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new("◀").size(typography::TITLE_MD))
                .padding(spacing::SM)
                .style(arrow_style())
                .on_press(Message::Previous),
        )
        .push(
            button(Text::new("▶").size(typography::TITLE_MD))
                .padding(spacing::SM)
                .style(arrow_style())
                .on_press(Message::Next),
        );

    // Shift the image with the live drag offset
    let offset = carousel.drag_offset();
    let shift = Padding {
        left: offset.max(0.0),
        right: (-offset).max(0.0),
        ..Padding::ZERO
    };

    let frame = carousel.current_item().map_or_else(
        || Column::new().into(),
        |item| {
            media_frame::view(
                media.status(item),
                i18n,
                Length::Fill,
                Length::Fill,
                ContentFit::Contain,
            )
        },
    );

    let image = mouse_area(
        Container::new(frame)
            .padding(shift)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .interaction(if state.is_dragging() {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    })
    .on_move(Message::PointerMoved)
    .on_press(Message::PointerPressed)
    .on_release(Message::PointerReleased)
    .on_exit(Message::PointerExited);

    let position = (current + 1).to_string();
    let total = carousel.len().to_string();
    let counter = Text::new(i18n.tr_with_args(
        "gallery-counter",
        &[("current", position.as_str()), ("total", total.as_str())],
    ))
    .size(typography::CAPTION);

    let dots = (0..carousel.len()).fold(Row::new().spacing(spacing::XXS), |row, index| {
        let size = if index == current {
            sizing::DOT_ACTIVE
        } else {
            sizing::DOT
        };
        row.push(
            button(Column::new())
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .padding(0)
                .style(styles::button::dot(index == current))
                .on_press(Message::GoTo(index)),
        )
    });

    let footer = Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(counter)
            .push(dots),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::overlay::indicator(radius::FULL));

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::GALLERY_MAX_WIDTH))
        .height(Length::Fixed(sizing::GALLERY_MAX_HEIGHT))
        .align_x(Horizontal::Center)
        .push(Container::new(controls).width(Length::Fill).align_x(Horizontal::Right))
        .push(image)
        .push(footer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn state(len: usize, start: usize) -> GalleryState {
        let media: MediaSequence = (0..len).map(|i| format!("{i}.png")).collect();
        GalleryState::new(media, start, DragThreshold::default())
    }

    fn drag(state: &mut GalleryState, from: f32, to: f32) -> bool {
        state.update(Message::PointerMoved(Point::new(from, 50.0)));
        state.update(Message::PointerPressed);
        state.update(Message::PointerMoved(Point::new(to, 60.0)));
        state.update(Message::PointerReleased)
    }

    #[test]
    fn right_drag_goes_to_previous() {
        let mut gallery = state(4, 0);
        assert!(drag(&mut gallery, 100.0, 220.0));
        assert_eq!(gallery.carousel().current_index(), Some(3));
        assert_abs_diff_eq!(gallery.carousel().drag_offset(), 0.0);
    }

    #[test]
    fn left_drag_goes_to_next() {
        let mut gallery = state(4, 3);
        assert!(drag(&mut gallery, 300.0, 180.0));
        assert_eq!(gallery.carousel().current_index(), Some(0));
    }

    #[test]
    fn short_drag_snaps_back() {
        let mut gallery = state(4, 1);
        assert!(!drag(&mut gallery, 100.0, 200.0));
        assert_eq!(gallery.carousel().current_index(), Some(1));
        assert_abs_diff_eq!(gallery.carousel().drag_offset(), 0.0);
    }

    #[test]
    fn live_offset_follows_pointer() {
        let mut gallery = state(3, 0);
        gallery.update(Message::PointerMoved(Point::new(10.0, 0.0)));
        gallery.update(Message::PointerPressed);
        gallery.update(Message::PointerMoved(Point::new(-30.0, 0.0)));

        assert!(gallery.is_dragging());
        assert_abs_diff_eq!(gallery.carousel().drag_offset(), -40.0);
    }

    #[test]
    fn leaving_the_image_ends_the_drag() {
        let mut gallery = state(3, 1);
        gallery.update(Message::PointerMoved(Point::new(0.0, 0.0)));
        gallery.update(Message::PointerPressed);
        gallery.update(Message::PointerMoved(Point::new(150.0, 0.0)));

        assert!(gallery.update(Message::PointerExited));
        assert!(!gallery.is_dragging());
        assert_eq!(gallery.carousel().current_index(), Some(0));
    }

    #[test]
    fn moves_without_press_never_navigate() {
        let mut gallery = state(3, 1);
        gallery.update(Message::PointerMoved(Point::new(0.0, 0.0)));
        gallery.update(Message::PointerMoved(Point::new(500.0, 0.0)));
        assert!(!gallery.update(Message::PointerReleased));
        assert_eq!(gallery.carousel().current_index(), Some(1));
    }

    #[test]
    fn dots_jump_and_reject_out_of_range() {
        let mut gallery = state(5, 0);
        assert!(gallery.update(Message::GoTo(3)));
        assert!(!gallery.update(Message::GoTo(3)));
        assert!(!gallery.update(Message::GoTo(9)));
        assert_eq!(gallery.carousel().current_index(), Some(3));
    }

    #[test]
    fn buttons_wrap_around() {
        let mut gallery = state(2, 1);
        assert!(gallery.update(Message::Next));
        assert_eq!(gallery.carousel().current_index(), Some(0));
        assert!(gallery.update(Message::Previous));
        assert_eq!(gallery.carousel().current_index(), Some(1));
    }

    #[test]
    fn gallery_view_renders_filled_and_empty() {
        let i18n = I18n::default();
        let media = MediaCache::with_defaults();
        let filled = state(3, 1);
        let empty = state(0, 0);
        let _filled = view(&i18n, &filled, &media);
        let _empty = view(&i18n, &empty, &media);
    }
}
