// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional `bytemuck` trait impls.

#![allow(
    unsafe_code,
    reason = "The `bytemuck` marker traits are `unsafe` and require `unsafe impl`."
)]

use crate::{Rect, Vec2, Vec3};
use bytemuck::{Pod, Zeroable};

// Safety: `repr(C)` with two fields of the same `Pod` type; no padding.
unsafe impl<T: Zeroable> Zeroable for Vec2<T> {}
unsafe impl<T: Pod> Pod for Vec2<T> {}

// Safety: `repr(C)` with three fields of the same `Pod` type; no padding.
unsafe impl<T: Zeroable> Zeroable for Vec3<T> {}
unsafe impl<T: Pod> Pod for Vec3<T> {}

// Safety: `repr(C)` with two `Vec2<T>` fields; no padding.
unsafe impl<T: Zeroable> Zeroable for Rect<T> {}
unsafe impl<T: Pod> Pod for Rect<T> {}

#[cfg(test)]
mod tests {
    use crate::{RectI, Vec2};

    #[test]
    fn rect_round_trips_through_bytes() {
        let rect = RectI::new(Vec2::new(1, 2), Vec2::new(3, 4));
        let bytes = bytemuck::bytes_of(&rect);
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytemuck::pod_read_unaligned::<RectI>(bytes), rect);
    }

    #[test]
    fn zeroed_is_default() {
        assert_eq!(bytemuck::Zeroable::zeroed(), RectI::default());
    }
}
