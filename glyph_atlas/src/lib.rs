// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Texture atlas packing and glyph caching for font rendering.
//!
//! The [`packer`] module places a list of rectangular regions inside a
//! container without overlap, and [`GlyphCache`] maps glyph identifiers to
//! the resulting placements for later texture sampling. The cache owns no
//! texture resource; pixel uploads are queued as [`PendingUpload`]s for an
//! external texture store to apply.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for
//!   forward compatibility.
//!
//! ## Example
//!
//! ```
//! use glyph_atlas::{Format, GlyphCache};
//! use render_primitives::Vec2;
//!
//! let mut cache = GlyphCache::new(Format::R8, Vec2::new(256, 256), Vec2::new(1, 1));
//! let placements = cache.reserve(&[Vec2::new(10, 12), Vec2::new(8, 12)])?;
//! cache.insert(b'a'.into(), Vec2::new(0, 2), placements[0])?;
//! cache.insert(b'b'.into(), Vec2::new(0, 2), placements[1])?;
//!
//! assert_ne!(cache.lookup(b'a'.into()), cache.lookup(0));
//! # Ok::<(), glyph_atlas::Error>(())
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod cache;
mod error;
mod image;

pub mod packer;

pub use cache::{Glyph, GlyphCache, NOT_FOUND_GLYPH, PendingUpload};
pub use error::{CapacityInfo, Error, ErrorKind, ImageInfo};
pub use image::{Format, Image};
