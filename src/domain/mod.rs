// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types shared by every other layer.
//!
//! Nothing in here knows about Iced, the network or the file system.
//! `serde` derives are the only external dependency so content files can
//! deserialize straight into these types.
//!
//! # Modules
//!
//! - [`media`]: Media references ([`MediaItem`](media::MediaItem),
//!   [`MediaSequence`](media::MediaSequence), [`MediaSource`](media::MediaSource))
//! - [`section`]: Top-level content sections ([`SectionId`](section::SectionId))
//! - [`ui`]: UI value objects ([`DragThreshold`](ui::newtypes::DragThreshold),
//!   [`SplashDelay`](ui::newtypes::SplashDelay))

pub mod media;
pub mod section;
pub mod ui;
