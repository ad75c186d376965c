// SPDX-License-Identifier: MPL-2.0
//! `showreel` is a desktop portfolio for a VFX artist built with the Iced GUI framework.
//!
//! It shows a biography, film and commercial credits, experience, skills and
//! personal projects, with an image gallery, a video modal and a featured
//! showreel. Content is data: a TOML portfolio file plus feature flags.
//!
//! The navigation state machines ([`application::carousel`], [`ui::modal`],
//! [`ui::card`], [`ui::sections`]) are plain Rust values and can be driven
//! without a window.

#![doc(html_root_url = "https://docs.rs/showreel/0.2.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
