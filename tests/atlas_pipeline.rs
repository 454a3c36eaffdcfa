// RustPixel
// copyright zipxing@hotmail.com 2022～2025

use image::{Rgba, RgbaImage};
use pixel_atlas::font::{GlyphMask, GlyphRasterizer, VMetrics};
use pixel_atlas::pipeline::load_assets;
use pixel_atlas::ranges::parse_glyph_ranges;
use pixel_atlas::template::{GlyphNameFormat, DEFAULT_GLYPH_FORMAT};
use pixel_atlas::{build_atlas, AssetOptions, Assets, Atlas, AtlasError, AtlasSettings, Limits};
use std::fs;
use std::path::{Path, PathBuf};
use tempdir::TempDir;

fn write_png(dir: &Path, name: &str, w: u32, h: u32, color: [u8; 4]) {
    RgbaImage::from_pixel(w, h, Rgba(color))
        .save(dir.join(name))
        .unwrap();
}

fn settings_in(out: &Path) -> AtlasSettings {
    AtlasSettings {
        image_out: out.join("atlas.png"),
        text_out: out.join("atlas.txt"),
        ..AtlasSettings::default()
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_single_image_on_minimum_canvas() {
    let input = TempDir::new("atlas_in").unwrap();
    let out = TempDir::new("atlas_out").unwrap();
    write_png(input.path(), "red.png", 10, 10, [255, 0, 0, 255]);

    let settings = settings_in(out.path());
    let config = settings.validate().unwrap();
    let report = build_atlas(&[input.path().to_path_buf()], &config).unwrap();
    assert_eq!((report.files, report.items), (1, 1));
    assert_eq!((report.width, report.height), (64, 64));

    let img = image::open(&settings.image_out).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (64, 64));
    assert_eq!(img.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    assert_eq!(img.get_pixel(9, 9), &Rgba([255, 0, 0, 255]));
    assert_eq!(img.get_pixel(10, 10), &Rgba([0, 0, 0, 0]));
    assert_eq!(read_lines(&settings.text_out), vec!["red 0 0 10 10"]);
}

#[test]
fn test_padding_offsets_metadata() {
    let input = TempDir::new("atlas_in").unwrap();
    let out = TempDir::new("atlas_out").unwrap();
    write_png(input.path(), "red.png", 10, 10, [255, 0, 0, 255]);

    let settings = AtlasSettings {
        padding: 2,
        ..settings_in(out.path())
    };
    build_atlas(&[input.path().to_path_buf()], &settings.validate().unwrap()).unwrap();
    assert_eq!(read_lines(&settings.text_out), vec!["red 2 2 10 10"]);

    let img = image::open(&settings.image_out).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(1, 1), &Rgba([0, 0, 0, 0]));
    assert_eq!(img.get_pixel(2, 2), &Rgba([255, 0, 0, 255]));
}

#[test]
fn test_names_follow_directory_and_file_order() {
    let first = TempDir::new("atlas_a").unwrap();
    let second = TempDir::new("atlas_b").unwrap();
    let out = TempDir::new("atlas_out").unwrap();
    write_png(first.path(), "zeta.png", 4, 4, [0, 255, 0, 255]);
    write_png(first.path(), "alpha beta.png", 3, 5, [0, 0, 255, 255]);
    write_png(second.path(), "aaa.png", 2, 2, [255, 255, 0, 255]);
    fs::write(first.path().join(".hidden"), b"ignored").unwrap();
    fs::create_dir(first.path().join("nested")).unwrap();

    let settings = AtlasSettings {
        line_format: "%s:%d,%d,%d,%d".to_string(),
        trim_ext: false,
        ..settings_in(out.path())
    };
    let dirs = vec![first.path().to_path_buf(), second.path().to_path_buf()];
    let report = build_atlas(&dirs, &settings.validate().unwrap()).unwrap();
    assert_eq!(report.files, 3);

    let names: Vec<String> = read_lines(&settings.text_out)
        .iter()
        .map(|l| l.split(':').next().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["alpha_beta.png", "zeta.png", "aaa.png"]);
}

#[test]
fn test_tga_output() {
    let input = TempDir::new("atlas_in").unwrap();
    let out = TempDir::new("atlas_out").unwrap();
    write_png(input.path(), "red.png", 10, 10, [255, 0, 0, 255]);

    let settings = AtlasSettings {
        image_out: out.path().join("atlas.tga"),
        ..settings_in(out.path())
    };
    build_atlas(&[input.path().to_path_buf()], &settings.validate().unwrap()).unwrap();
    let img = image::open(&settings.image_out).unwrap();
    assert_eq!((img.width(), img.height()), (64, 64));
}

#[test]
fn test_bad_glyph_ranges_write_nothing() {
    let out = TempDir::new("atlas_out").unwrap();
    let settings = AtlasSettings {
        glyph_ranges: "70-60".to_string(),
        ..settings_in(out.path())
    };
    let err = settings.validate().unwrap_err();
    assert!(matches!(err, AtlasError::InvalidGlyphRanges(_)));
    assert!(!settings.image_out.exists());
    assert!(!settings.text_out.exists());
}

#[test]
fn test_unrecognized_file_aborts_without_output() {
    let input = TempDir::new("atlas_in").unwrap();
    let out = TempDir::new("atlas_out").unwrap();
    write_png(input.path(), "a_good.png", 8, 8, [255, 0, 0, 255]);
    fs::write(input.path().join("junk.bin"), b"neither an image nor a font\n").unwrap();

    let settings = settings_in(out.path());
    let err = build_atlas(&[input.path().to_path_buf()], &settings.validate().unwrap())
        .unwrap_err();
    match &err {
        AtlasError::Unrecognized(path) => assert_eq!(path, &input.path().join("junk.bin")),
        other => panic!("unexpected error {:?}", other),
    }
    assert!(err.to_string().contains("junk.bin"));
    assert!(!settings.image_out.exists());
    assert!(!settings.text_out.exists());
}

#[test]
fn test_too_many_items_is_hard_error() {
    let input = TempDir::new("atlas_in").unwrap();
    let out = TempDir::new("atlas_out").unwrap();
    for i in 0..3 {
        write_png(input.path(), &format!("{}.png", i), 2, 2, [9, 9, 9, 255]);
    }
    let settings = AtlasSettings {
        limits: Limits {
            max_items: 2,
            ..Limits::default()
        },
        ..settings_in(out.path())
    };
    let err = build_atlas(&[input.path().to_path_buf()], &settings.validate().unwrap())
        .unwrap_err();
    assert!(matches!(err, AtlasError::TooManyItems(2)));
    assert!(!settings.image_out.exists());
}

/// 1000 units per em, ascent 800, descent -200, line gap 100. Every glyph
/// is a 3x5 box with an advance of 5 pixels.
struct TestFont;

impl GlyphRasterizer for TestFont {
    fn scale_for_size(&self, size: f32) -> f32 {
        size / 1000.0
    }

    fn v_metrics(&self) -> Option<VMetrics> {
        Some(VMetrics {
            ascent: 800.0,
            descent: -200.0,
            line_gap: 100.0,
        })
    }

    fn glyph_mask(&self, _codepoint: u32, _scale: f32) -> GlyphMask {
        GlyphMask {
            coverage: vec![200; 15],
            width: 3,
            height: 5,
            x_offset: 1,
            y_offset: -5,
        }
    }

    fn advance_width(&self, _codepoint: u32, _scale: f32) -> i32 {
        5
    }
}

#[test]
fn test_font_glyphs_packed_with_images() {
    let input = TempDir::new("atlas_in").unwrap();
    let out = TempDir::new("atlas_out").unwrap();
    write_png(input.path(), "icon.png", 16, 16, [1, 2, 3, 255]);

    let settings = settings_in(out.path());
    let config = settings.validate().unwrap();
    let mut assets = load_assets(&[PathBuf::from(input.path())], &config).unwrap();

    let opts = AssetOptions {
        font_size: 20.0,
        glyph_format: GlyphNameFormat::parse(DEFAULT_GLYPH_FORMAT).unwrap(),
        ranges: parse_glyph_ranges("65-67").unwrap(),
        trim_ext: true,
    };
    assets.load_font(&TestFont, "font", &opts).unwrap();

    // (800 + 200 + 100) * 0.02 = 22, plus one
    let names: Vec<&str> = assets.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["icon", "font_65", "font_66", "font_67"]);
    assert!(assets.items()[1..].iter().all(|i| i.size() == (5, 23)));

    let atlas = Atlas::build(assets.into_items(), config.padding, config.limits).unwrap();
    atlas.write_metadata(&config.text_out, &config.line_format).unwrap();
    let lines = read_lines(&config.text_out);
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("font_65 ") && lines[1].ends_with(" 5 23"));
}

#[test]
fn test_glyph_items_alone() {
    let opts = AssetOptions {
        font_size: 16.0,
        glyph_format: GlyphNameFormat::parse("%s-%d").unwrap(),
        ranges: parse_glyph_ranges("48-49,").unwrap(),
        trim_ext: true,
    };
    let mut assets = Assets::new(Limits::default());
    assets.load_font(&TestFont, "digits", &opts).unwrap();
    let names: Vec<&str> = assets.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["digits-48", "digits-49"]);
}
