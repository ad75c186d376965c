// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization of the application chrome (navigation,
//! buttons, notices, counters) using the Fluent localization system. Portfolio
//! text comes from the content file and is never translated.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Runtime language switching
//! - `MISSING: key` marker when a translation is absent

pub mod fluent;
