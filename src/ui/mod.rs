// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern. Each component
//! exposes a `Message` it consumes, an `Event` it reports to its parent, and
//! `update`/`view` functions.
//!
//! # Components
//!
//! - [`sidebar`] - Profile, contacts and section navigation (docked or compact)
//! - [`sections`] - Section router and the content blocks it shows
//! - [`card`] - Expandable project, experience and skill cards
//! - [`modal`] - Single-slot overlay: gallery, video, notice
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state (pointer drag, enter/exit presence)
//! - [`components`] - Small reusable views (chips, media frame)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Theme colors and styling helpers
//! - [`theming`] - Light/Dark/System theme mode management

pub mod card;
pub mod components;
pub mod design_tokens;
pub mod modal;
pub mod sections;
pub mod sidebar;
pub mod state;
pub mod styles;
pub mod theme;
pub mod theming;
