use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use itertools::Itertools;
use komootgpx::export_data;
use komootgpx::track::{Track, TrackPoint};
use komootgpx::Error;
use tempdir::TempDir;

fn sample_track() -> Track {
    Track::new(
        "Seeufer & Wald",
        (0..50)
            .map(|i| TrackPoint {
                latitude: 47.0 + f64::from(i) * 0.001,
                longitude: 8.5 - f64::from(i) * 0.002,
                elevation: 400.0 + f64::from(i),
            })
            .collect(),
    )
}

fn read_back(path: &Path) -> gpx::Gpx {
    gpx::read(BufReader::new(File::open(path).unwrap())).unwrap()
}

#[test]
fn write_gpx_file() {
    let temp_dir = TempDir::new("export_data-write").unwrap();
    let path = temp_dir.path().join("tour.gpx");
    let track = sample_track();

    export_data::write_gpx_file(&track, &path).unwrap();

    let gpx = read_back(&path);
    assert_eq!(gpx.tracks.len(), 1);
    assert_eq!(gpx.tracks[0].name.as_deref(), Some("Seeufer & Wald"));
    let points = gpx.tracks[0]
        .segments
        .iter()
        .flat_map(|s| s.points.iter())
        .map(|p| TrackPoint {
            latitude: p.point().y(),
            longitude: p.point().x(),
            elevation: p.elevation.unwrap(),
        })
        .collect_vec();
    assert_eq!(points, track.points);

    // only the final file is left behind
    let entries = fs::read_dir(temp_dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn replaces_existing_file() {
    let temp_dir = TempDir::new("export_data-replace").unwrap();
    let path = temp_dir.path().join("tour.gpx");
    fs::write(&path, "previous content that is longer than nothing").unwrap();

    export_data::write_gpx_file(&sample_track(), &path).unwrap();
    assert_eq!(read_back(&path).tracks[0].segments[0].points.len(), 50);
}

#[test]
fn missing_directory_is_an_io_error() {
    let temp_dir = TempDir::new("export_data-missing").unwrap();
    let path = temp_dir.path().join("no/such/dir/tour.gpx");

    let result = export_data::write_gpx_file(&sample_track(), &path);
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!path.exists());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn failed_write_leaves_existing_file_alone() {
    let temp_dir = TempDir::new("export_data-keep").unwrap();
    // a directory in the way of the partial file makes the write fail
    let path = temp_dir.path().join("tour.gpx");
    fs::write(&path, "keep me").unwrap();
    fs::create_dir(temp_dir.path().join("tour.gpx.part")).unwrap();

    let result = export_data::write_gpx_file(&sample_track(), &path);
    assert!(matches!(result, Err(Error::Io(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
}

#[test]
fn existing_partial_file_is_not_clobbered() {
    let temp_dir = TempDir::new("export_data-partial").unwrap();
    let path = temp_dir.path().join("tour.gpx");
    let partial = temp_dir.path().join("tour.gpx.part");
    fs::write(&partial, "someone else's download").unwrap();

    let result = export_data::write_gpx_file(&sample_track(), &path);
    match result {
        Err(Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::AlreadyExists),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(
        fs::read_to_string(&partial).unwrap(),
        "someone else's download"
    );
    assert!(!path.exists());
}
