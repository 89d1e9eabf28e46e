use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// A `[longitude, latitude]` position. Each value keeps the number as it was
/// written in the source (integer or float), and nothing checks ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Number>", into = "[Number; 2]")]
pub struct Coordinate {
    pub lon: Number,
    pub lat: Number,
}

impl Coordinate {
    pub fn new(lon: Number, lat: Number) -> Self {
        Self { lon, lat }
    }

    /// `None` when either value is NaN or infinite.
    pub fn from_f64(lon: f64, lat: f64) -> Option<Self> {
        Some(Self::new(Number::from_f64(lon)?, Number::from_f64(lat)?))
    }

    pub fn lon_f64(&self) -> f64 {
        self.lon.as_f64().unwrap_or(f64::NAN)
    }

    pub fn lat_f64(&self) -> f64 {
        self.lat.as_f64().unwrap_or(f64::NAN)
    }

    /// Numeric equality, so `-54` and `-54.0` name the same position.
    pub fn same_position(&self, other: &Coordinate) -> bool {
        self.lon_f64() == other.lon_f64() && self.lat_f64() == other.lat_f64()
    }
}

impl TryFrom<Vec<Number>> for Coordinate {
    type Error = String;

    // GeoJSON positions may carry an altitude; only the first two values matter here.
    fn try_from(values: Vec<Number>) -> std::result::Result<Self, Self::Error> {
        let count = values.len();
        let mut values = values.into_iter();
        match (values.next(), values.next()) {
            (Some(lon), Some(lat)) => Ok(Self::new(lon, lat)),
            _ => Err(format!(
                "expected a position with at least 2 numbers, got {}",
                count
            )),
        }
    }
}

impl From<Coordinate> for [Number; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lon, c.lat]
    }
}

impl fmt::Display for Coordinate {
    // Integers print without a fraction; floats print in their shortest
    // round-trip form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lon, self.lat)
    }
}

/// Ordered boundary of a polygon. Expected to be closed, never verified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring(pub Vec<Coordinate>);

impl Ring {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => first.same_position(last),
            _ => false,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.0.iter()
    }
}

impl From<Vec<Coordinate>> for Ring {
    fn from(coords: Vec<Coordinate>) -> Self {
        Ring(coords)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
}

impl BoundingBox {
    /// `(lon, lat)` corners in NW, NE, SE, SW order followed by NW again to
    /// close the ring.
    pub fn corners(&self) -> [(f64, f64); 5] {
        let nw = (self.west, self.north);
        [
            nw,
            (self.east, self.north),
            (self.east, self.south),
            (self.west, self.south),
            nw,
        ]
    }
}

/// Labels and the coarse bounding box used when rendering a region module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionProfile {
    pub name: String,
    pub state: String,
    pub simplified_constant: String,
    pub detailed_constant: String,
    pub bounds: BoundingBox,
}

impl Default for RegionProfile {
    fn default() -> Self {
        Self {
            name: "Paraná".to_string(),
            state: "PR".to_string(),
            simplified_constant: "paranaGeoJSON".to_string(),
            detailed_constant: "paranaDetailedGeoJSON".to_string(),
            bounds: BoundingBox {
                west: -54.6167,
                east: -48.0333,
                south: -26.7167,
                north: -22.5167,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedModule {
    pub text: String,
    pub coordinate_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub coordinate_count: usize,
}
