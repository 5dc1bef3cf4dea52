use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::fetch::{Fetcher, DEFAULT_TIMEOUT};
use crate::track::Track;
use crate::{convert, export_data, extract};

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// `None` waits for the tour page indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

/// Downloads the tour at `url` and saves it as GPX at `output`. Nothing is
/// written unless every step before the write succeeds.
pub fn tour_to_gpx_file(url: &str, output: &Path, options: &Options) -> Result<Track> {
    let markup = Fetcher::new(options.timeout)?.fetch(url)?;
    let doc = extract::extract(&markup)?;
    drop(markup);

    let track = convert::convert(&doc)?;
    export_data::write_gpx_file(&track, output)?;
    Ok(track)
}
