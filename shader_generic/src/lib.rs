// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generic vertex attribute slot mapping shared across shader variants.
//!
//! Shaders of the same dimensionality agree on which numeric binding slot
//! each semantic attribute occupies, so a vertex buffer laid out against the
//! generic definition can be drawn with any of them. The dimensionality set
//! is closed — 2D and 3D — and the mapping is resolved at compile time
//! through [`Generic`]'s associated constants, or through the
//! [`attribute`] switch when the dimensionality is only known at runtime.
//!
//! ## Example
//!
//! ```
//! use shader_generic::{Generic2D, Generic3D, GenericShader};
//!
//! // A mesh configured against the generic slots works with any shader of
//! // the matching dimensionality.
//! assert_eq!(
//!     Generic2D::TEXTURE_COORDINATES.slot,
//!     Generic3D::TEXTURE_COORDINATES.slot,
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for
//!   forward compatibility.
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

/// A vertex attribute binding: a numeric slot plus its component count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// The numeric binding slot the attribute occupies.
    pub slot: u32,
    /// The number of scalar components per vertex.
    pub components: u8,
}

impl Attribute {
    const fn new(slot: u32, components: u8) -> Self {
        Self { slot, components }
    }
}

/// The semantic meaning of a vertex attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Semantic {
    /// Vertex position.
    Position,
    /// 2D texture coordinates.
    TextureCoordinates,
    /// Vertex normal. Defined only in 3D.
    Normal,
}

/// The closed set of supported shader dimensionalities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimensions {
    /// 2D shaders.
    Two,
    /// 3D shaders.
    Three,
}

/// Generic shader definition for a given dimensionality.
///
/// Carries no data; its [`GenericShader`] impls (and the inherent `NORMAL`
/// constant in 3D) define the attribute slots.
#[derive(Clone, Copy, Debug)]
pub struct Generic<const DIMENSIONS: u32>;

/// Generic 2D shader definition.
pub type Generic2D = Generic<2>;

/// Generic 3D shader definition.
pub type Generic3D = Generic<3>;

/// Attribute definitions common to every shader of one dimensionality.
///
/// Slots for equivalent semantics are identical across dimensionalities, so
/// buffer layouts are interchangeable between 2D and 3D shader variants
/// sharing this generic base; only the component counts differ.
pub trait GenericShader {
    /// Vertex position — slot 0. Two components in 2D, three in 3D.
    const POSITION: Attribute;

    /// 2D texture coordinates — slot 1 in both dimensionalities.
    const TEXTURE_COORDINATES: Attribute = Attribute::new(1, 2);
}

impl GenericShader for Generic<2> {
    const POSITION: Attribute = Attribute::new(0, 2);
}

impl GenericShader for Generic<3> {
    const POSITION: Attribute = Attribute::new(0, 3);
}

impl Generic<3> {
    /// Vertex normal — slot 2, defined only in 3D.
    pub const NORMAL: Attribute = Attribute::new(2, 3);
}

/// Resolves an attribute binding when the dimensionality is a runtime value.
///
/// Returns `None` only for [`Semantic::Normal`] in 2D; every other
/// combination is defined. The result always matches the corresponding
/// associated constant on [`Generic`].
pub const fn attribute(dimensions: Dimensions, semantic: Semantic) -> Option<Attribute> {
    match (dimensions, semantic) {
        (Dimensions::Two, Semantic::Position) => Some(Generic::<2>::POSITION),
        (Dimensions::Three, Semantic::Position) => Some(Generic::<3>::POSITION),
        (_, Semantic::TextureCoordinates) => Some(Generic::<2>::TEXTURE_COORDINATES),
        (Dimensions::Two, Semantic::Normal) => None,
        (Dimensions::Three, Semantic::Normal) => Some(Generic::<3>::NORMAL),
    }
}

#[cfg(test)]
mod tests {
    use super::{Attribute, Dimensions, Generic2D, Generic3D, GenericShader, Semantic, attribute};

    #[test]
    fn slots_are_stable_across_dimensionalities() {
        assert_eq!(Generic2D::POSITION.slot, Generic3D::POSITION.slot);
        assert_eq!(
            Generic2D::TEXTURE_COORDINATES,
            Generic3D::TEXTURE_COORDINATES
        );
    }

    #[test]
    fn component_counts_follow_the_dimensionality() {
        assert_eq!(Generic2D::POSITION.components, 2);
        assert_eq!(Generic3D::POSITION.components, 3);
        assert_eq!(Generic3D::NORMAL.components, 3);
    }

    #[test]
    fn slot_assignments() {
        assert_eq!(Generic3D::POSITION.slot, 0);
        assert_eq!(Generic3D::TEXTURE_COORDINATES.slot, 1);
        assert_eq!(Generic3D::NORMAL.slot, 2);
    }

    #[test]
    fn runtime_lookup_matches_the_constants() {
        assert_eq!(
            attribute(Dimensions::Two, Semantic::Position),
            Some(Generic2D::POSITION)
        );
        assert_eq!(
            attribute(Dimensions::Three, Semantic::Normal),
            Some(Generic3D::NORMAL)
        );
        assert_eq!(
            attribute(Dimensions::Two, Semantic::TextureCoordinates),
            Some(Attribute { slot: 1, components: 2 })
        );
    }

    #[test]
    fn normal_is_undefined_in_2d() {
        assert_eq!(attribute(Dimensions::Two, Semantic::Normal), None);
    }
}
