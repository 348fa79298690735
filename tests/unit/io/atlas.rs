//! Tests for sprite sheet slicing and loading

#[cfg(test)]
mod tests {
    use crate::support::{marker, marker_of, marker_sheet};
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;
    use wolftile::io::atlas::{group_frames, required_sheet_size, split_grid};
    use wolftile::io::error::AutotileError;
    use wolftile::tiles::autotile::{AutoTile, Quadrant, ShapeClass};

    fn png_bytes(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn assert_marker_layout(tile: &AutoTile, frame_count: u32, quadrant: u32) {
        assert_eq!(tile.frame_count(), frame_count as usize);
        for (frame, bucket) in tile.frames().iter().enumerate() {
            for shape in ShapeClass::ALL {
                for corner in Quadrant::ALL {
                    let image = bucket.get(shape, corner);
                    let q = corner.index() as u32;
                    assert_eq!(image.dimensions(), (quadrant, quadrant));
                    assert_eq!(
                        marker_of(image),
                        (2 * frame as u32 + (q & 1), 2 * shape.index() as u32 + (q >> 1)),
                        "frame {frame} {shape:?} {corner:?}"
                    );
                }
            }
        }
    }

    // Tests every bucket entry comes from its documented sheet cell
    // Verified by grouping frames row by row instead of by column pair
    #[test]
    fn test_slice_layout() {
        for frame_count in [1, 3] {
            let sheet = marker_sheet(frame_count, 4);
            let tile = AutoTile::from_image(&sheet, frame_count as usize, [4, 4], 0.0).unwrap();
            assert_marker_layout(&tile, frame_count, 4);
        }
    }

    // Tests the sheet size implied by a layout
    // Verified by swapping the column and row counts
    #[test]
    fn test_required_sheet_size() {
        assert_eq!(required_sheet_size(1, [16, 16]).unwrap(), [32, 160]);
        assert_eq!(required_sheet_size(3, [2, 5]).unwrap(), [12, 50]);
        assert!(matches!(
            required_sheet_size(2, [u32::MAX, 1]),
            Err(AutotileError::InvalidParameter { parameter: "frame_count", .. })
        ));
    }

    // Tests grid cells are returned row-major
    // Verified by emitting cells column-major
    #[test]
    fn test_split_grid_order() {
        let image = RgbaImage::from_fn(3, 2, marker);
        let cells = split_grid(&image, 3, 2, [1, 1]).unwrap();

        let markers: Vec<_> = cells.iter().map(marker_of).collect();
        assert_eq!(markers, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        assert!(matches!(
            split_grid(&image, 4, 2, [1, 1]),
            Err(AutotileError::InvalidSourceData { .. })
        ));
    }

    // Tests regrouping rejects bad frame counts and cell counts
    // Verified by silently truncating the cell list
    #[test]
    fn test_group_frames_errors() {
        let cells = vec![RgbaImage::new(1, 1); 20];
        assert!(matches!(
            group_frames(&cells, 0),
            Err(AutotileError::InvalidParameter { parameter: "frame_count", .. })
        ));
        assert!(matches!(
            group_frames(&cells, 2),
            Err(AutotileError::InvalidSourceData { .. })
        ));
        assert_eq!(group_frames(&cells, 1).unwrap().len(), 1);
    }

    // Tests frame counts whose layout overflows are reported, not wrapped
    // Verified by multiplying the column count unchecked
    #[test]
    fn test_oversized_frame_counts() {
        let sheet = RgbaImage::new(2, 10);
        for frame_count in [usize::MAX / 2 + 1, usize::MAX, u32::MAX as usize] {
            assert!(matches!(
                required_sheet_size(frame_count, [1, 1]),
                Err(AutotileError::InvalidParameter { parameter: "frame_count", .. })
            ));
            assert!(matches!(
                AutoTile::from_image(&sheet, frame_count, [1, 1], 0.0),
                Err(AutotileError::InvalidParameter { parameter: "frame_count", .. })
            ));
        }

        let cells = vec![RgbaImage::new(1, 1); 20];
        assert!(matches!(
            group_frames(&cells, usize::MAX),
            Err(AutotileError::InvalidSourceData { .. })
        ));
    }

    // Tests grid dimensions are checked before any allocation
    // Verified by casting the column count to u32
    #[test]
    fn test_split_grid_rejects_unrepresentable_grids() {
        let image = RgbaImage::new(4, 4);
        assert!(matches!(
            split_grid(&image, usize::MAX, 1, [1, 1]),
            Err(AutotileError::InvalidParameter { parameter: "columns", .. })
        ));
        assert!(matches!(
            split_grid(&image, 1 << 40, 1, [1, 1]),
            Err(AutotileError::InvalidParameter { .. })
        ));
        assert!(matches!(
            split_grid(&image, usize::MAX, usize::MAX, [0, 0]),
            Err(AutotileError::InvalidParameter { parameter: "cell_size", .. })
        ));
    }

    // Tests construction parameters are validated
    // Verified by accepting a zero frame count
    #[test]
    fn test_invalid_parameters() {
        let sheet = marker_sheet(1, 2);
        assert!(matches!(
            AutoTile::from_image(&sheet, 0, [2, 2], 0.0),
            Err(AutotileError::InvalidParameter { parameter: "frame_count", .. })
        ));
        assert!(matches!(
            AutoTile::from_image(&sheet, 1, [0, 2], 0.0),
            Err(AutotileError::InvalidParameter { parameter: "quadrant_size", .. })
        ));
        assert!(matches!(
            AutoTile::from_image(&sheet, 1, [2, 2], -1.0),
            Err(AutotileError::InvalidParameter { parameter: "interval", .. })
        ));
    }

    // Tests sheets that are too small fail and larger ones are cropped
    // Verified by reading past the sheet edge
    #[test]
    fn test_sheet_size_mismatch() {
        let sheet = marker_sheet(1, 4);
        assert!(matches!(
            AutoTile::from_image(&sheet, 2, [4, 4], 0.0),
            Err(AutotileError::InvalidSourceData { .. })
        ));

        let larger = marker_sheet(2, 4);
        let tile = AutoTile::from_image(&larger, 1, [4, 4], 0.0).unwrap();
        assert_marker_layout(&tile, 1, 4);
    }

    // Tests loading from an encoded stream
    // Verified by decoding without guessing the format
    #[test]
    fn test_load_from_reader() {
        let bytes = png_bytes(&marker_sheet(2, 3));
        let tile = AutoTile::load_from_reader(Cursor::new(bytes), 2, [3, 3], 0.5).unwrap();
        assert_marker_layout(&tile, 2, 3);
        assert!((tile.interval() - 0.5).abs() < f64::EPSILON);

        let garbage = Cursor::new(vec![0u8, 1, 2, 3, 4, 5, 6, 7]);
        assert!(matches!(
            AutoTile::load_from_reader(garbage, 1, [3, 3], 0.0),
            Err(AutotileError::ImageLoad { .. })
        ));
    }

    // Tests loading from a file and reporting its path on failure
    // Verified by dropping the path from the error
    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("water.png");
        marker_sheet(1, 2).save(&path).unwrap();

        let tile = AutoTile::load_from_path(&path, 1, [2, 2], 0.0).unwrap();
        assert_marker_layout(&tile, 1, 2);

        let missing = dir.path().join("missing.png");
        match AutoTile::load_from_path(&missing, 1, [2, 2], 0.0) {
            Err(AutotileError::ImageLoad { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected an image load error, got {other:?}"),
        }

        // Parameters are checked before touching the file system
        assert!(matches!(
            AutoTile::load_from_path(&missing, 0, [2, 2], 0.0),
            Err(AutotileError::InvalidParameter { .. })
        ));
    }
}
