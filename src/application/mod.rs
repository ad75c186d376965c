// SPDX-License-Identifier: MPL-2.0
//! Application layer - navigation logic and ports.
//!
//! - [`carousel`]: Gallery index controller (wrap-around, drag, keys)
//! - [`input`]: Host-independent key identifiers
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```
//! use showreel::application::carousel::Carousel;
//! use showreel::domain::media::MediaSequence;
//! use showreel::domain::ui::DragThreshold;
//!
//! let media: MediaSequence = ["a.png", "b.png", "c.png"].into_iter().collect();
//! let mut carousel = Carousel::new(media, 0, DragThreshold::default());
//! carousel.previous();
//! assert_eq!(carousel.current_index(), Some(2));
//! ```

pub mod carousel;
pub mod input;
pub mod port;
