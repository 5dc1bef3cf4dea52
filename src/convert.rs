use serde_json::Value;

use crate::error::{Error, Result};
use crate::tour::TourDocument;
use crate::track::{Track, TrackPoint};
use crate::utils;

pub const NAME_PATH: [&str; 4] = ["page", "_embedded", "tour", "name"];
pub const ITEMS_PATH: [&str; 6] = [
    "page",
    "_embedded",
    "tour",
    "_embedded",
    "coordinates",
    "items",
];

/// Builds the track from the tour's coordinate list. Fails on the first
/// bad record; nothing is skipped.
pub fn convert(doc: &TourDocument) -> Result<Track> {
    let items = doc.array_at(&ITEMS_PATH)?;
    if items.is_empty() {
        return Err(Error::EmptyRoute);
    }
    let name = doc.str_at(&NAME_PATH)?;

    let points = items
        .iter()
        .enumerate()
        .map(|(index, item)| track_point(item, index))
        .collect::<Result<Vec<_>>>()?;

    info!("tour {name:?} has {} points", points.len());
    Ok(Track::new(name, points))
}

fn track_point(item: &Value, index: usize) -> Result<TrackPoint> {
    let field = |key: &str| {
        item.get(key)
            .and_then(Value::as_f64)
            .ok_or_else(|| Error::SchemaMismatch {
                path: format!("{}[{index}].{key}", ITEMS_PATH.join(".")),
                expected: "a number",
            })
    };
    let lat = field("lat")?;
    let lng = field("lng")?;
    let alt = field("alt")?;

    if !utils::is_valid_lat_lng(lat, lng) {
        return Err(Error::InvalidCoordinate { lat, lng });
    }

    Ok(TrackPoint {
        latitude: lat,
        longitude: lng,
        elevation: alt,
    })
}
