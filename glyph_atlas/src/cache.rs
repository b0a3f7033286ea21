// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph cache mapping glyph identifiers to packed atlas placements.

use core::fmt::{Debug, Formatter};

use alloc::vec::Vec;
use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use smallvec::SmallVec;

use render_primitives::{RectI, Vec2I};

use crate::image::{Format, Image};
use crate::{Error, packer};

/// The reserved identifier for the "not found" glyph.
///
/// Always present in a cache; [`GlyphCache::lookup`] falls back to it for
/// unbound identifiers.
pub const NOT_FOUND_GLYPH: u32 = 0;

/// A glyph's placement in the cache's coordinate space.
///
/// Both fields include the cache padding: `position` is shifted back by the
/// padding relative to the anchor the caller inserted, and `rect` extends
/// past the bare glyph size by the padding on every side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Glyph {
    /// Rendering anchor for the glyph, in the caller's position space.
    pub position: Vec2I,
    /// Region of the texture holding the glyph's pixels.
    pub rect: RectI,
}

/// A glyph pixel image waiting to be written into the backing texture.
///
/// The cache performs no texture I/O itself. Uploads queued via
/// [`GlyphCache::set_image`] must be drained with
/// [`GlyphCache::take_pending_uploads`] by the collaborator that owns the
/// actual texture resource, writing each image at its offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingUpload {
    /// Offset of the image's bottom-left corner within the texture.
    pub offset: Vec2I,
    /// The pixel data to write.
    pub image: Image,
}

/// A cache of glyph placements inside a single texture atlas.
///
/// The cache owns a logical 2D coordinate space of fixed extent and maps
/// opaque glyph identifiers to placements inside it. It is populated once,
/// in two phases:
///
/// 1. [`reserve`](Self::reserve) computes non-overlapping placements for a
///    list of glyph bitmap sizes, index-aligned with the input.
/// 2. [`insert`](Self::insert) binds each glyph identifier to its placement,
///    and [`set_image`](Self::set_image) queues the pixel data for the
///    texture owner to upload.
///
/// Re-reserving a cache that already holds placements is a precondition
/// violation, not a supported state transition; incremental re-packing is
/// deliberately out of scope. [`lookup`](Self::lookup) is total and falls
/// back to the [`NOT_FOUND_GLYPH`] placement, so missing glyphs degrade
/// silently on the text-layout hot path.
///
/// All mutation is single-threaded. Once populated, shared references may be
/// used for lookups from any thread.
pub struct GlyphCache {
    /// Logical packing extent consumed by `reserve`.
    size: Vec2I,
    /// Physical extent of the backing texture.
    texture_size: Vec2I,
    /// Margin kept around every placed glyph.
    padding: Vec2I,
    /// Pixel format of the backing texture.
    format: Format,
    /// Whether a reservation pass has already run.
    reserved: bool,
    glyphs: HashMap<u32, Glyph>,
    /// Uploads queued for the texture owner. Inline capacity of one because
    /// steady-state use queues at most a stray late glyph; bulk population
    /// spills to the heap once and is then drained.
    pending_uploads: SmallVec<[PendingUpload; 1]>,
}

impl GlyphCache {
    /// Creates a cache whose packing space and texture have the same extent.
    pub fn new(format: Format, size: Vec2I, padding: Vec2I) -> Self {
        Self::with_texture_size(format, size, size, padding)
    }

    /// Creates a cache with distinct logical and physical extents.
    ///
    /// `size` is the logical coordinate space placements are packed into;
    /// `texture_size` is the extent of the backing texture reported to the
    /// upload collaborator. They differ when glyphs are rasterized at a
    /// scale other than the texture resolution.
    pub fn with_texture_size(
        format: Format,
        size: Vec2I,
        texture_size: Vec2I,
        padding: Vec2I,
    ) -> Self {
        let mut glyphs = HashMap::new();
        // The "not found" glyph is always resolvable.
        glyphs.insert(NOT_FOUND_GLYPH, Glyph::default());
        Self {
            size,
            texture_size,
            padding,
            format,
            reserved: false,
            glyphs,
            pending_uploads: SmallVec::new(),
        }
    }

    /// The logical packing extent.
    #[inline]
    pub fn size(&self) -> Vec2I {
        self.size
    }

    /// The physical extent of the backing texture.
    #[inline]
    pub fn texture_size(&self) -> Vec2I {
        self.texture_size
    }

    /// The margin kept around every placed glyph.
    #[inline]
    pub fn padding(&self) -> Vec2I {
        self.padding
    }

    /// The pixel format of the backing texture.
    #[inline]
    pub fn format(&self) -> Format {
        self.format
    }

    /// The number of glyph entries, including the "not found" sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the cache holds no glyphs beyond the "not found" sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.len() == 1
    }

    /// Computes placements for the given glyph bitmap sizes.
    ///
    /// Delegates to [`packer::pack`] with the cache's extent and padding.
    /// The returned rectangles are index-aligned with `sizes`; bind each to
    /// its glyph identifier with [`insert`](Self::insert).
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidState`](crate::ErrorKind::InvalidState) if a
    /// reservation already ran or glyphs have been inserted — reserving
    /// space in a non-empty cache is not supported.
    /// [`ErrorKind::CapacityExceeded`](crate::ErrorKind::CapacityExceeded)
    /// if the sizes cannot fit, reported now rather than at insert time.
    pub fn reserve(&mut self, sizes: &[Vec2I]) -> Result<Vec<RectI>, Error> {
        if self.reserved || !self.is_pristine() {
            return Err(Error::invalid_state());
        }
        log::debug!(
            "reserving {} glyph placements in a {}x{} cache",
            sizes.len(),
            self.size.x,
            self.size.y
        );
        let placements = packer::pack(self.size, sizes, self.padding)?;
        self.glyphs.reserve(sizes.len());
        self.reserved = true;
        Ok(placements)
    }

    /// Binds a glyph identifier to a reserved placement.
    ///
    /// `position` is the glyph's rendering anchor and `rect` its placement
    /// as returned by [`reserve`](Self::reserve). The stored entry has the
    /// padding folded in: the anchor moves back by the padding and the
    /// rectangle grows by it, so sampling the stored rect covers the margin.
    ///
    /// Identifier [`NOT_FOUND_GLYPH`] may be inserted repeatedly; each
    /// insert replaces the sentinel placement.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::DuplicateGlyph`](crate::ErrorKind::DuplicateGlyph) if
    /// any other identifier is already bound. The uniqueness of the
    /// identifier-to-placement mapping is a strict invariant.
    pub fn insert(&mut self, glyph: u32, position: Vec2I, rect: RectI) -> Result<(), Error> {
        let entry = Glyph {
            position: position - self.padding,
            rect: rect.padded(self.padding),
        };

        if glyph == NOT_FOUND_GLYPH {
            self.glyphs.insert(NOT_FOUND_GLYPH, entry);
            return Ok(());
        }

        match self.glyphs.entry(glyph) {
            Entry::Occupied(_) => Err(Error::duplicate_glyph(glyph)),
            Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    /// Looks up a glyph's placement.
    ///
    /// Total: an unbound identifier resolves to the [`NOT_FOUND_GLYPH`]
    /// placement, which is always present.
    #[inline]
    pub fn lookup(&self, glyph: u32) -> Glyph {
        match self.glyphs.get(&glyph) {
            Some(entry) => *entry,
            None => self.glyphs[&NOT_FOUND_GLYPH],
        }
    }

    /// Queues glyph pixel data for upload at the given texture offset.
    ///
    /// The cache does not write pixels anywhere; the texture owner must
    /// drain the queue via [`take_pending_uploads`](Self::take_pending_uploads).
    pub fn set_image(&mut self, offset: Vec2I, image: Image) {
        self.pending_uploads.push(PendingUpload { offset, image });
    }

    /// Takes all queued uploads, leaving the queue empty.
    pub fn take_pending_uploads(&mut self) -> Vec<PendingUpload> {
        self.pending_uploads.drain(..).collect()
    }

    /// Whether only the untouched sentinel entry is present.
    fn is_pristine(&self) -> bool {
        self.glyphs.len() == 1 && self.glyphs[&NOT_FOUND_GLYPH] == Glyph::default()
    }
}

impl Debug for GlyphCache {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GlyphCache")
            .field("size", &self.size)
            .field("texture_size", &self.texture_size)
            .field("padding", &self.padding)
            .field("format", &self.format)
            .field("glyphs", &self.glyphs.len())
            .field("pending_uploads", &self.pending_uploads.len())
            .finish_non_exhaustive()
    }
}
