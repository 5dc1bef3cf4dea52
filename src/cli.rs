use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use crate::api::api::{self, Options};
use crate::logs;

#[derive(Parser, Debug)]
#[command(name = "komootgpx", version, about = "Convert Komoot tour URL to GPX")]
pub struct Cli {
    /// The Komoot URL to make a GPX for
    pub url: String,

    /// The GPX file to create
    #[arg(short, long)]
    pub output: PathBuf,

    /// Seconds to wait for the tour page, 0 waits forever
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also keep a rotating log file in this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl From<&Cli> for Options {
    fn from(cli: &Cli) -> Self {
        Options {
            timeout: match cli.timeout {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
        }
    }
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logs::init(
            logs::level_from_flags(self.verbose, self.quiet),
            self.log_dir.as_deref(),
        )?;

        let track = api::tour_to_gpx_file(&self.url, &self.output, &Options::from(self))?;
        info!("{} points in {:?}", track.points.len(), track.name);
        println!("Saved GPX to {}", self.output.display());
        Ok(())
    }
}
