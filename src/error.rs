use std::fmt;

use thiserror::Error;

/// Which of the two payload delimiters could not be found.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Marker {
    Start,
    End,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Start => write!(f, "start"),
            Marker::End => write!(f, "end"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error")]
    Network(#[from] reqwest::Error),

    #[error("{0} marker not found, is this a Komoot tour page?")]
    MarkerNotFound(Marker),

    #[error("JSON decoding error")]
    PayloadParse(#[source] serde_json::Error),

    #[error("unexpected tour data: expected {expected} at `{path}`")]
    SchemaMismatch { path: String, expected: &'static str },

    #[error("No coordinates found in tour data")]
    EmptyRoute,

    #[error("Invalid coordinates: lat={lat}, lng={lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("File system error")]
    Io(#[from] std::io::Error),

    #[error("GPX serialization error")]
    Gpx(#[from] gpx::errors::GpxError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::MarkerNotFound(Marker::End).to_string(),
            "end marker not found, is this a Komoot tour page?"
        );
        assert_eq!(
            Error::InvalidCoordinate {
                lat: 95.0,
                lng: 9.0
            }
            .to_string(),
            "Invalid coordinates: lat=95, lng=9"
        );
        assert_eq!(
            Error::SchemaMismatch {
                path: "page._embedded.tour.name".to_string(),
                expected: "a string",
            }
            .to_string(),
            "unexpected tour data: expected a string at `page._embedded.tour.name`"
        );
    }

    #[test]
    fn wrapped_errors_leave_details_to_the_source() {
        use std::error::Error as _;

        let inner = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::PayloadParse(inner);
        assert_eq!(err.to_string(), "JSON decoding error");
        assert!(err.source().unwrap().to_string().contains("EOF"));

        let err = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(err.to_string(), "File system error");
        assert_eq!(err.source().unwrap().to_string(), "disk full");
    }
}
