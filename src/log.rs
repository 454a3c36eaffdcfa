// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Log module sets up log4rs for the atlas tool, reference
//! https://docs.rs/log4rs
//!
//! Messages always go to stderr; a log file can be added on request.

use crate::error::{AtlasError, Result};
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const CONSOLE_PATTERN: &str = "{l} {m}{n}";
const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// init logs system
pub fn init_log(level: LevelFilter, file_path: Option<&str>) -> Result<()> {
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    let mut config = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(level)))
            .build("stderr", Box::new(console)),
    );
    let mut root = Root::builder().appender("stderr");

    if let Some(path) = file_path {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
            .build(path)
            .map_err(|e| AtlasError::Log(format!("{}: {}", path, e)))?;
        config = config.appender(Appender::builder().build("logfile", Box::new(logfile)));
        root = root.appender("logfile");
    }

    let config = config
        .build(root.build(level))
        .map_err(|e| AtlasError::Log(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| AtlasError::Log(e.to_string()))?;
    Ok(())
}
