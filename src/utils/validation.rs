use crate::domain::model::{BoundingBox, Coordinate, Ring};
use crate::utils::error::{EtlError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Region labels end up in one-line comments of the generated module.
pub fn validate_label(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    if value.chars().any(char::is_control) {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_default().to_string(),
            reason: "Value cannot contain control characters".to_string(),
        });
    }
    Ok(())
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
    })
}

/// The rendered module exports constants under these names, so they must be
/// usable as TypeScript identifiers.
pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    if !identifier_pattern().is_match(value) {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Not a valid TypeScript identifier".to_string(),
        });
    }
    Ok(())
}

pub fn validate_bounds(field_name: &str, bounds: &BoundingBox) -> Result<()> {
    let values = [bounds.west, bounds.east, bounds.south, bounds.north];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(EtlError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Bounds must be finite numbers".to_string(),
        });
    }
    if bounds.west >= bounds.east {
        return Err(EtlError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("west ({}) must be less than east ({})", bounds.west, bounds.east),
        });
    }
    if bounds.south >= bounds.north {
        return Err(EtlError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!(
                "south ({}) must be less than north ({})",
                bounds.south, bounds.north
            ),
        });
    }
    Ok(())
}

/// Something odd about a ring. Reported, never enforced.
#[derive(Debug, Clone, PartialEq)]
pub enum RingIssue {
    Empty,
    NotClosed {
        first: Coordinate,
        last: Coordinate,
    },
    OutOfRange {
        index: usize,
        coordinate: Coordinate,
    },
}

impl fmt::Display for RingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingIssue::Empty => write!(f, "ring has no coordinates"),
            RingIssue::NotClosed { first, last } => {
                write!(f, "ring is not closed: first {} != last {}", first, last)
            }
            RingIssue::OutOfRange { index, coordinate } => write!(
                f,
                "coordinate #{} {} is outside longitude/latitude range",
                index, coordinate
            ),
        }
    }
}

pub fn inspect_ring(ring: &Ring) -> Vec<RingIssue> {
    let mut issues = Vec::new();

    match (ring.0.first(), ring.0.last()) {
        (None, _) | (_, None) => issues.push(RingIssue::Empty),
        (Some(first), Some(last)) if !ring.is_closed() => issues.push(RingIssue::NotClosed {
            first: first.clone(),
            last: last.clone(),
        }),
        _ => {}
    }

    issues.extend(
        ring.iter()
            .enumerate()
            .filter(|(_, c)| {
                !(-180.0..=180.0).contains(&c.lon_f64()) || !(-90.0..=90.0).contains(&c.lat_f64())
            })
            .map(|(index, c)| RingIssue::OutOfRange {
                index,
                coordinate: c.clone(),
            }),
    );

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lon: f64, lat: f64) -> Coordinate {
        Coordinate::from_f64(lon, lat).unwrap()
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input.path", "parana-ibge.geojson").is_ok());
        assert!(validate_path("input.path", "").is_err());
        assert!(validate_path("input.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_label() {
        assert!(validate_label("region.name", "Paraná").is_ok());
        assert!(validate_label("region.name", "Foo \"Bar\"").is_ok());
        assert!(validate_label("region.name", "  ").is_err());
        assert!(validate_label("region.name", "Para\nná").is_err());
        assert!(validate_label("region.state", "P\tR").is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("region.detailed_constant", "paranaDetailedGeoJSON").is_ok());
        assert!(validate_identifier("region.detailed_constant", "$geo_2").is_ok());
        assert!(validate_identifier("region.detailed_constant", "2parana").is_err());
        assert!(validate_identifier("region.detailed_constant", "parana-geo").is_err());
        assert!(validate_identifier("region.detailed_constant", "").is_err());
    }

    #[test]
    fn test_validate_bounds() {
        let ok = BoundingBox {
            west: -54.6,
            east: -48.0,
            south: -26.7,
            north: -22.5,
        };
        assert!(validate_bounds("region.bounds", &ok).is_ok());

        let swapped = BoundingBox {
            west: -48.0,
            east: -54.6,
            ..ok
        };
        assert!(validate_bounds("region.bounds", &swapped).is_err());

        let nan = BoundingBox {
            north: f64::NAN,
            ..ok
        };
        assert!(validate_bounds("region.bounds", &nan).is_err());
    }

    #[test]
    fn test_inspect_ring() {
        assert_eq!(inspect_ring(&Ring::default()), vec![RingIssue::Empty]);

        let closed = Ring::from(vec![
            coord(-54.0, -25.0),
            coord(-53.0, -24.0),
            coord(-54.0, -25.0),
        ]);
        assert!(inspect_ring(&closed).is_empty());

        let odd = Ring::from(vec![
            coord(-54.0, -25.0),
            coord(200.0, -24.0),
        ]);
        let issues = inspect_ring(&odd);
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0], RingIssue::NotClosed { .. }));
        assert!(matches!(issues[1], RingIssue::OutOfRange { index: 1, .. }));
    }
}
