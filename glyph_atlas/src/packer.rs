// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-based rectangle packing for texture atlases.

use alloc::vec::Vec;

use render_primitives::{RectI, Vec2I};

use crate::Error;

/// Packs `sizes` into a container of `container_size`, keeping a `padding`
/// margin around every placed region.
///
/// The returned rectangles have the bare requested sizes; the padded extent
/// of each (grown by `padding` on every side) is pairwise disjoint and lies
/// fully within the container. Output order matches input order, one
/// rectangle per requested size, so callers can correlate placements back to
/// glyph identity by index. No sorting is performed.
///
/// Packing is deterministic shelf packing: regions go left to right in the
/// current row, a new row starts when the remaining width cannot fit the next
/// padded size, and each row is as tall as its tallest padded member. A
/// zero-size request produces a zero-size rectangle and consumes no space;
/// its anchor is the current cursor, clamped into the container so the
/// returned rectangle is always in bounds. Degenerate rectangles carry no
/// pixels, so the padded-extent guarantee above does not apply to them.
///
/// # Errors
///
/// [`ErrorKind::CapacityExceeded`](crate::ErrorKind::CapacityExceeded) if any
/// request cannot be placed, reported for the first offending index. No
/// partial result is returned; a packing either fits completely or fails.
pub fn pack(container_size: Vec2I, sizes: &[Vec2I], padding: Vec2I) -> Result<Vec<RectI>, Error> {
    let mut placements = Vec::with_capacity(sizes.len());

    // Bottom-left corner of the current row and the running cursor within it.
    let mut cursor_x = 0;
    let mut row_bottom = 0;
    let mut row_height = 0;

    for (index, &size) in sizes.iter().enumerate() {
        if size == Vec2I::default() {
            // A degenerate region has no pixels to place or protect, so it
            // only needs an in-bounds anchor: the cursor is clamped into the
            // container in case the current row is already full.
            let anchor = Vec2I::new(
                (cursor_x + padding.x).min(container_size.x),
                (row_bottom + padding.y).min(container_size.y),
            );
            placements.push(RectI::from_size(anchor, size));
            continue;
        }

        // Each region occupies its size plus the margin on both sides.
        let footprint = size + padding * 2;

        if cursor_x + footprint.x > container_size.x {
            cursor_x = 0;
            row_bottom += row_height;
            row_height = 0;
        }
        if footprint.x > container_size.x || row_bottom + footprint.y > container_size.y {
            return Err(Error::capacity_exceeded(container_size, index, size));
        }

        placements.push(RectI::from_size(
            Vec2I::new(cursor_x, row_bottom) + padding,
            size,
        ));
        cursor_x += footprint.x;
        row_height = row_height.max(footprint.y);
    }

    log::trace!(
        "packed {} regions into a {}x{} container",
        placements.len(),
        container_size.x,
        container_size.y
    );
    Ok(placements)
}

#[cfg(test)]
mod tests {
    use super::pack;
    use crate::ErrorKind;
    use render_primitives::{RectI, Vec2, Vec2I};

    fn assert_valid_packing(container: Vec2I, padding: Vec2I, placements: &[RectI]) {
        let bounds = RectI::from_size(Vec2::default(), container);
        for (i, a) in placements.iter().enumerate() {
            if a.size() == Vec2::default() {
                // Degenerate placements only promise an in-bounds anchor.
                assert!(bounds.contains(a), "degenerate placement {i} escapes the container");
                continue;
            }
            assert!(
                bounds.contains(&a.padded(padding)),
                "padded placement {i} escapes the container"
            );
            for (j, b) in placements.iter().enumerate().skip(i + 1) {
                if b.size() == Vec2::default() {
                    continue;
                }
                assert!(
                    !a.padded(padding).intersects(&b.padded(padding)),
                    "padded placements {i} and {j} overlap"
                );
            }
        }
    }

    #[test]
    fn empty_request_list() {
        let placements = pack(Vec2::new(64, 64), &[], Vec2::new(1, 1)).unwrap();
        assert!(placements.is_empty());
    }

    #[test]
    fn single_region_at_origin_plus_padding() {
        let placements = pack(Vec2::new(64, 64), &[Vec2::new(10, 12)], Vec2::new(2, 3)).unwrap();
        assert_eq!(
            placements,
            [RectI::new(Vec2::new(2, 3), Vec2::new(12, 15))]
        );
    }

    #[test]
    fn wraps_to_second_row() {
        // Scenario: two 10x10 regions fit side by side in row one, the wide
        // third region must start a fresh row.
        let container = Vec2::new(256, 256);
        let padding = Vec2::new(1, 1);
        let sizes = [Vec2::new(10, 10), Vec2::new(10, 10), Vec2::new(250, 10)];

        let placements = pack(container, &sizes, padding).unwrap();
        assert_eq!(placements.len(), 3);
        assert_eq!(placements[0], RectI::new(Vec2::new(1, 1), Vec2::new(11, 11)));
        assert_eq!(
            placements[1],
            RectI::new(Vec2::new(13, 1), Vec2::new(23, 11))
        );
        // Row one is 12 units tall including padding.
        assert_eq!(
            placements[2],
            RectI::new(Vec2::new(1, 13), Vec2::new(251, 23))
        );
        assert_valid_packing(container, padding, &placements);
    }

    #[test]
    fn output_is_index_aligned() {
        let sizes = [Vec2::new(8, 4), Vec2::new(2, 2), Vec2::new(4, 8)];
        let placements = pack(Vec2::new(64, 64), &sizes, Vec2::new(1, 1)).unwrap();
        for (placement, size) in placements.iter().zip(&sizes) {
            assert_eq!(placement.size(), *size);
        }
    }

    #[test]
    fn rows_track_tallest_member() {
        let container = Vec2::new(32, 64);
        let padding = Vec2::new(0, 0);
        // First row holds a short and a tall region; the next row must start
        // below the tall one.
        let sizes = [Vec2::new(16, 4), Vec2::new(16, 12), Vec2::new(32, 4)];
        let placements = pack(container, &sizes, padding).unwrap();
        assert_eq!(placements[2].bottom(), 12);
        assert_valid_packing(container, padding, &placements);
    }

    #[test]
    fn zero_size_consumes_no_space() {
        let container = Vec2::new(64, 64);
        let padding = Vec2::new(1, 1);
        let placements = pack(
            container,
            &[Vec2::new(10, 10), Vec2::default(), Vec2::new(10, 10)],
            padding,
        )
        .unwrap();
        assert_eq!(placements[1].size(), Vec2::new(0, 0));
        // The zero-size entry does not push its neighbor over.
        assert_eq!(
            placements[2],
            RectI::new(Vec2::new(13, 1), Vec2::new(23, 11))
        );
        assert_valid_packing(container, padding, &placements);
    }

    #[test]
    fn zero_size_at_a_full_row_stays_in_bounds() {
        // The first region fills the whole container, leaving the cursor at
        // the row's right edge; the degenerate request must still land on a
        // valid anchor rather than past the container boundary.
        let container = Vec2::new(16, 16);
        let padding = Vec2::new(1, 1);
        let placements = pack(container, &[Vec2::new(14, 14), Vec2::default()], padding).unwrap();

        let bounds = RectI::from_size(Vec2::default(), container);
        assert!(bounds.contains(&placements[1]), "anchor left the container");
        assert_eq!(placements[1].size(), Vec2::new(0, 0));
        assert_valid_packing(container, padding, &placements);
    }

    #[test]
    fn fails_when_too_wide() {
        let err = pack(Vec2::new(16, 64), &[Vec2::new(20, 4)], Vec2::new(1, 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        let info = err.capacity().expect("capacity info");
        assert_eq!(info.index, 0);
        assert_eq!(info.size, Vec2::new(20, 4));
    }

    #[test]
    fn fails_when_rows_exhaust_height() {
        let sizes = [Vec2::new(14, 14); 3];
        let err = pack(Vec2::new(16, 32), &sizes, Vec2::new(1, 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(err.capacity().expect("capacity info").index, 2);
    }

    #[test]
    fn padding_footprint_counts_against_capacity() {
        // The bare size fits, the padded footprint does not.
        assert!(pack(Vec2::new(16, 16), &[Vec2::new(16, 16)], Vec2::new(0, 0)).is_ok());
        let err = pack(Vec2::new(16, 16), &[Vec2::new(16, 16)], Vec2::new(1, 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
    }

    #[test]
    fn dense_packing_never_overlaps() {
        let container = Vec2::new(48, 48);
        let padding = Vec2::new(1, 1);
        let sizes = [
            Vec2::new(10, 10),
            Vec2::new(5, 12),
            Vec2::new(20, 6),
            Vec2::new(3, 3),
            Vec2::new(14, 9),
            Vec2::new(8, 8),
            Vec2::new(11, 2),
        ];
        let placements = pack(container, &sizes, padding).unwrap();
        assert_eq!(placements.len(), sizes.len());
        assert_valid_packing(container, padding, &placements);
    }
}
