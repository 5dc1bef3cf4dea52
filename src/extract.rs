use crate::entities::decode_html_entities;
use crate::error::{Error, Marker, Result};
use crate::tour::TourDocument;

pub const START_MARKER: &str = "kmtBoot.setProps(\"";
pub const END_MARKER: &str = "\");";

// Komoot double-encodes some payloads; stop well before pathological input
// could keep us busy.
const MAX_DECODE_PASSES: usize = 8;

/// Returns the text between the boot marker and the first `");` after it.
pub fn isolate_payload(markup: &str) -> Result<&str> {
    let start = markup
        .find(START_MARKER)
        .ok_or(Error::MarkerNotFound(Marker::Start))?
        + START_MARKER.len();
    let len = markup[start..]
        .find(END_MARKER)
        .ok_or(Error::MarkerNotFound(Marker::End))?;
    Ok(&markup[start..start + len])
}

fn decode_until_stable(raw: &str) -> String {
    let mut text = raw.to_owned();
    for _ in 0..MAX_DECODE_PASSES {
        let decoded = decode_html_entities(&text).into_owned();
        if decoded == text {
            break;
        }
        text = decoded;
    }
    text
}

/// Turns the raw payload into JSON text: entities first, then the backslash
/// escaping, since decoding may itself produce backslashes.
pub fn sanitize_payload(raw: &str) -> String {
    decode_until_stable(raw)
        .replace("\\\\", "\\")
        .replace("\\\"", "\"")
}

pub fn extract(markup: &str) -> Result<TourDocument> {
    let payload = isolate_payload(markup)?;
    debug!("isolated {} byte payload", payload.len());

    let sanitized = sanitize_payload(payload);
    match serde_json::from_str(&sanitized) {
        Ok(value) => Ok(TourDocument::new(value)),
        Err(e) => {
            error!("Failed to decode JSON. Problematic string:\n{sanitized}");
            Err(Error::PayloadParse(e))
        }
    }
}
