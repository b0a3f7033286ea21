// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel data handed off to the texture backing store.

use alloc::vec::Vec;

use render_primitives::Vec2I;

use crate::Error;

/// Pixel storage format of a glyph texture.
///
/// The cache itself never touches pixel data; the format is carried so the
/// external backing store can configure its texture resource and validate
/// uploads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Single 8-bit channel. The usual choice for alpha-only glyph coverage.
    #[default]
    R8,
    /// Two 8-bit channels.
    Rg8,
    /// Four 8-bit channels.
    Rgba8,
}

impl Format {
    /// The number of bytes one pixel occupies.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::R8 => 1,
            Self::Rg8 => 2,
            Self::Rgba8 => 4,
        }
    }
}

/// A tightly packed 2D pixel image.
///
/// The data length is validated against the extent and format at
/// construction, so consumers can index rows without re-checking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    size: Vec2I,
    format: Format,
    data: Vec<u8>,
}

impl Image {
    /// Creates an image, validating that `data` is exactly
    /// `size.x * size.y * bytes_per_pixel` bytes long.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidImage`](crate::ErrorKind::InvalidImage) on a
    /// length mismatch (including negative extents, which can never match).
    pub fn new(size: Vec2I, format: Format, data: Vec<u8>) -> Result<Self, Error> {
        let expected = if size.x < 0 || size.y < 0 {
            usize::MAX
        } else {
            size.x as usize * size.y as usize * format.bytes_per_pixel()
        };
        if data.len() != expected {
            return Err(Error::invalid_image(expected, data.len()));
        }
        Ok(Self { size, format, data })
    }

    /// The image extent in pixels.
    #[inline]
    pub fn size(&self) -> Vec2I {
        self.size
    }

    /// The pixel storage format.
    #[inline]
    pub fn format(&self) -> Format {
        self.format
    }

    /// The raw pixel bytes, row-major, tightly packed.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image, returning the raw pixel bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::{Format, Image};
    use crate::ErrorKind;
    use alloc::vec;
    use render_primitives::Vec2;

    #[test]
    fn accepts_matching_length() {
        let image = Image::new(Vec2::new(4, 2), Format::R8, vec![0; 8]).unwrap();
        assert_eq!(image.size(), Vec2::new(4, 2));
        assert_eq!(image.data().len(), 8);
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = Image::new(Vec2::new(4, 2), Format::Rgba8, vec![0; 8]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidImage);
        let info = err.image().expect("image info");
        assert_eq!(info.expected, 32);
        assert_eq!(info.actual, 8);
    }

    #[test]
    fn rejects_negative_extent() {
        let err = Image::new(Vec2::new(-1, 2), Format::R8, vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidImage);
    }
}
