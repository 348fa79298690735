//! Tests for argument parsing and the preview pipeline

#[cfg(test)]
mod tests {
    use crate::support::marker_sheet;
    use clap::Parser;
    use image::{Rgba, RgbaImage};
    use std::path::{Path, PathBuf};
    use wolftile::io::cli::{Cli, Previewer, parse_tint};
    use wolftile::io::error::AutotileError;

    struct Fixture {
        _dir: tempfile::TempDir,
        sheet: PathBuf,
        mask: PathBuf,
    }

    // Two-frame sheet with 2px quadrants over a 2x1 mask
    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let sheet = dir.path().join("sheet.png");
        let mask = dir.path().join("level.png");
        marker_sheet(2, 2).save(&sheet).unwrap();
        RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]))
            .save(&mask)
            .unwrap();
        Fixture {
            _dir: dir,
            sheet,
            mask,
        }
    }

    fn parse(fixture: &Fixture, extra: &[&str]) -> Cli {
        let mut args = vec![
            "wolftile".to_string(),
            fixture.sheet.display().to_string(),
            fixture.mask.display().to_string(),
            "-f".to_string(),
            "2".to_string(),
            "-q".to_string(),
            "2".to_string(),
            "--quiet".to_string(),
        ];
        args.extend(extra.iter().map(ToString::to_string));
        Cli::try_parse_from(args).unwrap()
    }

    // Tests defaults and short flags
    // Verified by changing a default
    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from(["wolftile", "sheet.png", "mask.png"]).unwrap();
        assert_eq!(cli.sheet, Path::new("sheet.png"));
        assert_eq!(cli.frames, 1);
        assert_eq!(cli.quadrant_size, 16);
        assert_eq!(cli.render_frames, 1);
        assert!(cli.tint.is_none());
        assert!(!cli.is_animated());
        assert!(cli.should_show_progress());
        assert!((cli.frame_delta() - 0.1).abs() < 1e-9);

        let cli = Cli::try_parse_from([
            "wolftile", "a.png", "b.png", "-f", "3", "-i", "0.25", "-s", "2", "-n", "6", "-d",
            "50", "-t", "#ff000080", "--quiet",
        ])
        .unwrap();
        assert_eq!(cli.frames, 3);
        assert!((cli.interval - 0.25).abs() < f64::EPSILON);
        assert!((cli.scale - 2.0).abs() < f32::EPSILON);
        assert!(cli.is_animated());
        assert!(!cli.should_show_progress());
        assert_eq!(cli.tint, Some(Rgba([255, 0, 0, 128])));

        assert!(Cli::try_parse_from(["wolftile", "a.png"]).is_err());
        assert!(Cli::try_parse_from(["wolftile", "a.png", "b.png", "-t", "red"]).is_err());
    }

    // Tests hex tint parsing with and without alpha
    // Verified by defaulting alpha to zero
    #[test]
    fn test_parse_tint() {
        assert_eq!(parse_tint("#ff8000"), Ok(Rgba([255, 128, 0, 255])));
        assert_eq!(parse_tint("11223344"), Ok(Rgba([0x11, 0x22, 0x33, 0x44])));
        assert!(parse_tint("12345").is_err());
        assert!(parse_tint("gg0000").is_err());
        assert!(parse_tint("").is_err());
    }

    // Tests the default output sits next to the mask
    // Verified by placing it in the working directory
    #[test]
    fn test_output_path() {
        let still = Cli::try_parse_from(["wolftile", "s.png", "maps/level.png"]).unwrap();
        assert_eq!(
            Previewer::new(still).output_path(),
            PathBuf::from("maps/level_preview.png")
        );

        let animated =
            Cli::try_parse_from(["wolftile", "s.png", "maps/level.png", "-n", "4"]).unwrap();
        assert_eq!(
            Previewer::new(animated).output_path(),
            PathBuf::from("maps/level_preview.gif")
        );

        let explicit =
            Cli::try_parse_from(["wolftile", "s.png", "level.png", "-o", "out/x.png"]).unwrap();
        assert_eq!(
            Previewer::new(explicit).output_path(),
            PathBuf::from("out/x.png")
        );
    }

    // Tests rendered frames follow the shared animation clock
    // Verified by ticking once per cell instead of once per frame
    #[test]
    fn test_render_frames() {
        let fixture = fixture();
        let frames = Previewer::new(parse(&fixture, &["-n", "3"]))
            .render()
            .unwrap();

        assert_eq!(frames.len(), 3);
        for frame in &frames {
            assert_eq!(frame.dimensions(), (8, 4));
        }
        // Left cell, top-left quadrant is outside; columns 2 and 0 belong to frames 1 and 0
        assert_eq!(*frames[0].get_pixel(0, 0), Rgba([2, 0, 0x7f, 0xff]));
        assert_eq!(*frames[1].get_pixel(0, 0), Rgba([0, 0, 0x7f, 0xff]));
        assert_eq!(*frames[2].get_pixel(0, 0), Rgba([2, 0, 0x7f, 0xff]));
        // Left cell, top-right quadrant joins horizontally (row 4)
        assert_eq!(*frames[1].get_pixel(2, 0), Rgba([1, 4, 0x7f, 0xff]));
    }

    // Tests a single frame is written as a scaled PNG
    // Verified by ignoring the scale when sizing the canvas
    #[test]
    fn test_run_png() {
        let fixture = fixture();
        let output = fixture.mask.with_file_name("still.png");
        let out_arg = output.display().to_string();
        let written = Previewer::new(parse(&fixture, &["-s", "2", "-o", &out_arg]))
            .run()
            .unwrap();

        assert_eq!(written, output);
        let image = image::open(&written).unwrap();
        assert_eq!((image.width(), image.height()), (16, 8));
    }

    // Tests several frames are written as a GIF next to the mask
    // Verified by writing a PNG regardless of frame count
    #[test]
    fn test_run_gif() {
        let fixture = fixture();
        let written = Previewer::new(parse(&fixture, &["-n", "4", "-d", "40"]))
            .run()
            .unwrap();

        assert_eq!(written, fixture.mask.with_file_name("level_preview.gif"));
        assert!(written.exists());
    }

    // Tests invalid render settings are rejected before loading
    // Verified by rendering with a zero scale
    #[test]
    fn test_invalid_settings() {
        let fixture = fixture();
        assert!(matches!(
            Previewer::new(parse(&fixture, &["-s", "0"])).render(),
            Err(AutotileError::InvalidParameter { parameter: "scale", .. })
        ));
        assert!(matches!(
            Previewer::new(parse(&fixture, &["-n", "0"])).render(),
            Err(AutotileError::InvalidParameter { parameter: "render_frames", .. })
        ));

        let mut too_many_frames = parse(&fixture, &[]);
        too_many_frames.frames = 3;
        assert!(matches!(
            Previewer::new(too_many_frames).render(),
            Err(AutotileError::InvalidSourceData { .. })
        ));
    }

    // Tests a scale that would need an oversized canvas is refused
    // Verified by saturating the canvas size instead
    #[test]
    fn test_oversized_canvas_rejected() {
        let fixture = fixture();
        for scale in ["100000", "1e30"] {
            assert!(matches!(
                Previewer::new(parse(&fixture, &["-s", scale])).render(),
                Err(AutotileError::InvalidParameter { parameter: "scale", .. })
            ));
        }

        let frames = Previewer::new(parse(&fixture, &["-s", "0.5"]))
            .render()
            .unwrap();
        assert_eq!(frames[0].dimensions(), (4, 2));
    }
}
