use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use geo_types::Point;
use gpx::{Gpx, GpxVersion, Metadata, TrackSegment, Waypoint};

use crate::error::Result;
use crate::track::Track;

pub const CREATOR: &str = "komootgpx";

pub fn track_to_gpx(track: &Track) -> Gpx {
    let mut segment = TrackSegment::new();
    segment.points = track
        .points
        .iter()
        .map(|point| {
            let mut waypoint = Waypoint::new(Point::new(point.longitude, point.latitude));
            waypoint.elevation = Some(point.elevation);
            waypoint
        })
        .collect();

    let mut gpx_track = gpx::Track::new();
    gpx_track.name = Some(track.name.clone());
    gpx_track.segments.push(segment);

    Gpx {
        version: GpxVersion::Gpx11,
        creator: Some(CREATOR.to_string()),
        metadata: Some(Metadata {
            name: Some(track.name.clone()),
            ..Default::default()
        }),
        waypoints: vec![],
        tracks: vec![gpx_track],
        routes: vec![],
    }
}

pub fn write_gpx<W: Write>(track: &Track, writer: W) -> Result<()> {
    gpx::write(&track_to_gpx(track), writer)?;
    Ok(())
}

/// Writes the track to `path` without ever leaving a truncated file there:
/// the data goes to `<path>.part` first and is renamed into place once it is
/// complete.
pub fn write_gpx_file(track: &Track, path: &Path) -> Result<()> {
    let mut data = Vec::new();
    write_gpx(track, &mut data)?;

    let (partial, mut file) = PartialFile::create(path)?;
    file.write_all(&data)?;
    file.sync_all()?;
    drop(file);
    partial.commit(path)?;

    info!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// A file being written next to its final location. Removed on drop unless
/// it was committed.
struct PartialFile {
    path: PathBuf,
    committed: bool,
}

impl PartialFile {
    fn create(target: &Path) -> io::Result<(Self, fs_err::File)> {
        let mut name = OsString::from(target.as_os_str());
        name.push(".part");
        let path = PathBuf::from(name);
        // Someone else's `.part` file is not ours to overwrite or remove.
        let file = fs_err::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)?;
        Ok((
            PartialFile {
                path,
                committed: false,
            },
            file,
        ))
    }

    fn commit(mut self, target: &Path) -> io::Result<()> {
        fs_err::rename(&self.path, target)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for PartialFile {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(e) = fs_err::remove_file(&self.path) {
            warn!("failed to clean up partial file: {e}");
        }
    }
}
