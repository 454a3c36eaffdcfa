// RustPixel
// copyright zipxing@hotmail.com 2022～2025

/// atlas packs the images and font glyphs of one or more directories into
/// a single texture atlas plus a text file of item positions.
///
/// Usage:
/// atlas sprites/
/// atlas -p 1 -o ui.tga -t ui.txt icons/ fonts/
/// atlas -s 24 -r 32-127,160-255 -g "%s-%d" fonts/
/// atlas -f "%s = {%d, %d, %d, %d}," sprites/
///
use clap::{ArgAction, Parser};
use log::LevelFilter;
use pixel_atlas::log::init_log;
use pixel_atlas::pipeline::{check_input_dirs, load_assets};
use pixel_atlas::ranges::DEFAULT_GLYPH_RANGES;
use pixel_atlas::template::{DEFAULT_GLYPH_FORMAT, DEFAULT_LINE_FORMAT};
use pixel_atlas::{Atlas, AtlasSettings, Result, VERSION};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "atlas",
    version = VERSION,
    about = "Packs images and font glyphs into a texture atlas",
    disable_version_flag = true
)]
struct Cli {
    /// Input directories
    #[arg(value_name = "DIR")]
    dirs: Vec<PathBuf>,

    /// Output image file (.png or .tga)
    #[arg(short = 'o', long = "imageout", default_value = "out.png")]
    image_out: PathBuf,

    /// Output text file
    #[arg(short = 't', long = "textout", default_value = "out.txt")]
    text_out: PathBuf,

    /// Pixels of padding around each item
    #[arg(short = 'p', long, default_value_t = 0, allow_hyphen_values = true)]
    padding: i64,

    /// Font size in pixels
    #[arg(short = 's', long = "fontsize", default_value_t = 16.0, allow_hyphen_values = true)]
    font_size: f64,

    /// Text file line format: name, x, y, width, height
    #[arg(short = 'f', long = "linefmt", default_value = DEFAULT_LINE_FORMAT)]
    line_format: String,

    /// Glyph name format: font name, codepoint
    #[arg(short = 'g', long = "glyphfmt", default_value = DEFAULT_GLYPH_FORMAT)]
    glyph_format: String,

    /// Comma separated glyph ranges, e.g. 32-127,160-255
    #[arg(short = 'r', long, default_value = DEFAULT_GLYPH_RANGES)]
    ranges: String,

    /// Keep file extensions in item names
    #[arg(short = 'e', long = "keepext")]
    keep_ext: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long = "loglevel", default_value = "warn")]
    log_level: LevelFilter,

    /// Also write log messages to this file
    #[arg(long = "log", value_name = "FILE")]
    log_file: Option<String>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),
}

impl Cli {
    fn settings(&self) -> AtlasSettings {
        AtlasSettings {
            image_out: self.image_out.clone(),
            text_out: self.text_out.clone(),
            padding: self.padding,
            font_size: self.font_size,
            line_format: self.line_format.clone(),
            glyph_format: self.glyph_format.clone(),
            glyph_ranges: self.ranges.clone(),
            trim_ext: !self.keep_ext,
            ..AtlasSettings::default()
        }
    }
}

fn progress(msg: &str) {
    print!("{}", msg);
    let _ = io::stdout().flush();
}

fn run(cli: &Cli) -> Result<()> {
    init_log(cli.log_level, cli.log_file.as_deref())?;
    let config = cli.settings().validate()?;
    check_input_dirs(&cli.dirs, &config.limits)?;

    progress("Loading assets... ");
    let assets = load_assets(&cli.dirs, &config)?;
    println!("Done ({} files)", assets.file_count());

    let atlas = Atlas::build(assets.into_items(), config.padding, config.limits)?;

    progress("Writing image file... ");
    atlas.write_image(&config.image_out, config.image_format)?;
    println!("Done ({}x{})", atlas.canvas.width, atlas.canvas.height);

    progress("Writing text file... ");
    atlas.write_metadata(&config.text_out, &config.line_format)?;
    println!("Done ({} images)", atlas.items.len());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
