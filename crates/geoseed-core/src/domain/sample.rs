//! The fixture artifacts written by the seeder.
//!
//! The GeoJSON document is deliberately fixed: a feature collection holding a
//! single `Point` at the origin with empty properties. Consumers use it as a
//! known-good minimal input, so the serialized byte sequence must stay stable
//! across releases (field order below is the wire order).
//!
//! The raster companion (`sample.tif`) is a zero-byte stand-in. Producing a
//! real GeoTIFF needs GDAL tooling that geoseed does not invoke; the file
//! exists so downstream code has a raster-shaped path to point at.

use serde::Serialize;

use crate::domain::error::DomainError;

/// File name of the generated GeoJSON fixture.
pub const SAMPLE_GEOJSON: &str = "sample.geojson";

/// File name of the generated raster placeholder.
pub const SAMPLE_TIF: &str = "sample.tif";

/// A GeoJSON geometry. Only `Point` is ever produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleGeometry {
    #[serde(rename = "type")]
    kind: &'static str,
    // i64 so the output reads [0,0], not [0.0,0.0]
    coordinates: [i64; 2],
}

/// A single GeoJSON feature wrapping a [`SampleGeometry`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleFeature {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: SampleGeometry,
    properties: serde_json::Map<String, serde_json::Value>,
}

/// The fixed single-feature collection the seeder writes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleDocument {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<SampleFeature>,
}

impl SampleDocument {
    /// The canonical fixture: one `Point` feature at `(0, 0)`.
    pub fn origin_point() -> Self {
        Self {
            kind: "FeatureCollection",
            features: vec![SampleFeature {
                kind: "Feature",
                geometry: SampleGeometry {
                    kind: "Point",
                    coordinates: [0, 0],
                },
                properties: serde_json::Map::new(),
            }],
        }
    }

    /// Serialize to the compact wire form (no pretty-printing, UTF-8).
    pub fn to_compact_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(self).map_err(|e| DomainError::SampleEncoding {
            reason: e.to_string(),
        })
    }
}

impl Default for SampleDocument {
    fn default() -> Self {
        Self::origin_point()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#;

    #[test]
    fn compact_json_matches_wire_form_exactly() {
        let doc = SampleDocument::origin_point();
        assert_eq!(doc.to_compact_json().unwrap(), EXPECTED);
    }

    #[test]
    fn coordinates_serialize_as_integers() {
        let json = SampleDocument::origin_point().to_compact_json().unwrap();
        assert!(json.contains("[0,0]"));
        assert!(!json.contains("0.0"));
    }

    #[test]
    fn document_round_trips_as_valid_json() {
        let json = SampleDocument::origin_point().to_compact_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"].as_array().unwrap().len(), 1);
        assert_eq!(value["features"][0]["geometry"]["type"], "Point");
        assert!(
            value["features"][0]["properties"]
                .as_object()
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn default_is_origin_point() {
        assert_eq!(SampleDocument::default(), SampleDocument::origin_point());
    }
}
