// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fundamental math value types for rendering.
//!
//! This crate is a lightweight, `no_std`-friendly vocabulary layer shared by the
//! atlas-packing, glyph-caching, and mesh-tooling crates. It provides small,
//! exact value types — component-wise vectors and an axis-aligned rectangle —
//! with identical semantics across signed-integer and floating-point
//! instantiations.
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables floating-point methods that need
//!   `sqrt` (e.g. [`Vec3::normalized`]).
//! - `bytemuck`: Implement traits from `bytemuck` on [`Vec2`], [`Vec3`], and
//!   [`Rect`].
//!
//! ## Example
//!
//! ```
//! use render_primitives::{RectI, Vec2};
//!
//! let rect = RectI::from_size(Vec2::new(3, 5), Vec2::new(23, 78));
//! assert_eq!(rect, RectI::new(Vec2::new(3, 5), Vec2::new(26, 83)));
//! assert_eq!(rect.size(), Vec2::new(23, 78));
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

// Floating-point methods such as `sqrt` come from `std`'s inherent impls.
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "bytemuck")]
mod impl_bytemuck;
mod rect;
mod vec;

pub use rect::{Rect, RectF, RectI};
pub use vec::{Vec2, Vec2F, Vec2I, Vec3, Vec3F};
