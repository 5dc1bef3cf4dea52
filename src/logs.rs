use std::io::IsTerminal;
use std::path::Path;

use anyhow::Result;
use file_rotate::{
    compression::Compression,
    suffix::{AppendTimestamp, FileLimit},
    {ContentLimit, FileRotate},
};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};

/// Logs to stderr at `level`, and additionally to a rotating
/// `komootgpx.log` under `log_dir` when one is given.
pub fn init(level: LevelFilter, log_dir: Option<&Path>) -> Result<()> {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Stderr,
        color_choice(std::io::stderr().is_terminal()),
    )];

    if let Some(log_dir) = log_dir {
        let log = FileRotate::new(
            log_dir.join("komootgpx.log"),
            AppendTimestamp::default(FileLimit::MaxFiles(3)),
            ContentLimit::Lines(1000),
            Compression::None,
            #[cfg(unix)]
            None,
        );
        // Never below info in the file.
        loggers.push(WriteLogger::new(level.max(LevelFilter::Info), config, log));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}

// Escape codes only make sense on a terminal.
fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

pub fn level_from_flags(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}
