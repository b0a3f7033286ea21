// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use render_primitives::Vec2I;

/// Rich error type for atlas packing and glyph cache operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus contextual information about
/// the failed request: the offending glyph identifier for duplicate inserts,
/// or the container extent and request index for capacity failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// Extra detail for capacity failures, when available.
    capacity: Option<CapacityInfo>,

    /// The offending glyph identifier, when available.
    glyph: Option<u32>,

    /// Extra detail for image length mismatches, when available.
    image: Option<ImageInfo>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Extra details for capacity failures, if available.
    pub fn capacity(&self) -> Option<CapacityInfo> {
        self.capacity
    }

    /// The glyph identifier that caused the error, if available.
    pub fn glyph(&self) -> Option<u32> {
        self.glyph
    }

    /// Extra details for image length mismatches, if available.
    pub fn image(&self) -> Option<ImageInfo> {
        self.image
    }

    pub(crate) fn capacity_exceeded(container: Vec2I, index: usize, size: Vec2I) -> Self {
        Self {
            kind: ErrorKind::CapacityExceeded,
            capacity: Some(CapacityInfo {
                container,
                index,
                size,
            }),
            glyph: None,
            image: None,
        }
    }

    pub(crate) fn invalid_state() -> Self {
        Self {
            kind: ErrorKind::InvalidState,
            capacity: None,
            glyph: None,
            image: None,
        }
    }

    pub(crate) fn duplicate_glyph(glyph: u32) -> Self {
        Self {
            kind: ErrorKind::DuplicateGlyph,
            capacity: None,
            glyph: Some(glyph),
            image: None,
        }
    }

    pub(crate) fn invalid_image(expected: usize, actual: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidImage,
            capacity: None,
            glyph: None,
            image: Some(ImageInfo { expected, actual }),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::CapacityExceeded => {
                if let Some(c) = self.capacity {
                    write!(
                        f,
                        "request {} of size {}x{} does not fit in container {}x{}",
                        c.index, c.size.x, c.size.y, c.container.x, c.container.y
                    )
                } else {
                    write!(f, "requested sizes do not fit in the container")
                }
            }
            ErrorKind::InvalidState => {
                write!(f, "cannot reserve space in a non-empty glyph cache")
            }
            ErrorKind::DuplicateGlyph => {
                if let Some(glyph) = self.glyph {
                    write!(f, "glyph {glyph} is already present in the cache")
                } else {
                    write!(f, "glyph is already present in the cache")
                }
            }
            ErrorKind::InvalidImage => {
                if let Some(i) = self.image {
                    write!(
                        f,
                        "image data length {} does not match expected length {}",
                        i.actual, i.expected
                    )
                } else {
                    write!(f, "image data length does not match its extent")
                }
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The requested sizes cannot fit within the configured container extent.
    ///
    /// Reported synchronously at reserve time, never discovered later.
    CapacityExceeded,

    /// A reservation was attempted on a cache that already holds placements
    /// beyond the sentinel glyph. Signals a programming error, not a
    /// transient condition to retry.
    InvalidState,

    /// An insert targeted a non-sentinel glyph identifier that is already
    /// bound.
    DuplicateGlyph,

    /// An image's data length does not match its extent and pixel format.
    InvalidImage,
}

/// Details about a packing request that exceeded the container capacity.
///
/// Returned by [`Error::capacity`] when the error kind is
/// [`ErrorKind::CapacityExceeded`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CapacityInfo {
    /// The container extent the packing was attempted against.
    pub container: Vec2I,

    /// The index of the request that did not fit.
    pub index: usize,

    /// The requested size at that index.
    pub size: Vec2I,
}

/// Details about an image whose data length did not match its extent.
///
/// Returned by [`Error::image`] when the error kind is
/// [`ErrorKind::InvalidImage`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    /// The length implied by the image extent and pixel format, in bytes.
    pub expected: usize,

    /// The length of the provided data, in bytes.
    pub actual: usize,
}
