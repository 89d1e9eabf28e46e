use crate::domain::model::Ring;
use crate::utils::error::{EtlError, Result};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct BoundaryDocument {
    features: Option<Vec<RawFeature>>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    geometry: Option<RawGeometry>,
}

// Nesting depth depends on the geometry type, so coordinates stay untyped
// until the ring node is reached.
#[derive(Debug, Deserialize)]
struct RawGeometry {
    coordinates: Option<Value>,
}

/// Pulls the ring at `features[0].geometry.coordinates[0][0]` out of a
/// GeoJSON document. Values are returned untouched.
pub fn extract_ring(document: &[u8]) -> Result<Ring> {
    let document: BoundaryDocument = serde_json::from_slice(document)?;

    let features = document
        .features
        .ok_or_else(|| EtlError::structure("features", "key is missing"))?;
    let feature = features
        .into_iter()
        .next()
        .ok_or_else(|| EtlError::structure("features[0]", "feature collection is empty"))?;
    let geometry = feature
        .geometry
        .ok_or_else(|| EtlError::structure("features[0].geometry", "feature has no geometry"))?;
    let coordinates = geometry.coordinates.ok_or_else(|| {
        EtlError::structure("features[0].geometry.coordinates", "key is missing")
    })?;

    let polygon = element(&coordinates, 0, "features[0].geometry.coordinates")?;
    let ring = element(polygon, 0, "features[0].geometry.coordinates[0]")?;

    Ring::deserialize(ring).map_err(|e| {
        EtlError::structure(
            "features[0].geometry.coordinates[0][0]",
            format!("not a sequence of [lon, lat] pairs: {}", e),
        )
    })
}

fn element<'a>(value: &'a Value, index: usize, path: &str) -> Result<&'a Value> {
    let items = value
        .as_array()
        .ok_or_else(|| EtlError::structure(path, "expected an array"))?;
    items.get(index).ok_or_else(|| {
        EtlError::structure(
            format!("{}[{}]", path, index),
            format!("array has {} elements", items.len()),
        )
    })
}
