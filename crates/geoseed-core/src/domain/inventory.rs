//! Inventory model for geodata files found in a workspace.
//!
//! A scan classifies files purely by extension and records filesystem-level
//! metadata. GeoJSON files additionally get a lightweight content probe
//! ([`describe_geojson`]); raster and shapefile entries are stat-only because
//! probing them for real would require GDAL.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::error::DomainError;

/// Extensions (lowercase, without the dot) a scan considers geodata.
pub const GEO_EXTENSIONS: [&str; 4] = ["tif", "tiff", "shp", "geojson"];

/// Geodata file classification, derived from the file extension only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoFileKind {
    /// `.tif` / `.tiff`
    GeoTiff,
    /// `.shp`
    Shapefile,
    /// `.geojson`
    GeoJson,
}

impl GeoFileKind {
    /// Classify a file extension (with or without case noise).
    ///
    /// Returns `None` for anything a scan should ignore.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "tif" | "tiff" => Some(Self::GeoTiff),
            "shp" => Some(Self::Shapefile),
            "geojson" => Some(Self::GeoJson),
            _ => None,
        }
    }

    /// Short display label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeoTiff => "TIF",
            Self::Shapefile => "SHP",
            Self::GeoJson => "GeoJSON",
        }
    }
}

impl fmt::Display for GeoFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-entry outcome of the metadata/content probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Probe succeeded (or was not applicable).
    Ok,
    /// Probe failed; the message carries the underlying diagnostic.
    Error(String),
}

impl EntryStatus {
    /// Column label for table/CSV output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Error(_) => "Error",
        }
    }

    /// The diagnostic message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ok => None,
            Self::Error(msg) => Some(msg),
        }
    }
}

/// One scanned geodata file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoFileEntry {
    /// Full path as reported by the walker.
    pub path: PathBuf,
    /// Lowercased extension including the dot, e.g. `.tif`.
    pub extension: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time.
    pub modified: DateTime<Utc>,
    /// Extension-derived classification.
    pub kind: GeoFileKind,
    /// Content summary for GeoJSON entries, e.g. `1 feature(s), Point`.
    pub detail: Option<String>,
    /// Probe outcome.
    pub status: EntryStatus,
}

/// Summarize GeoJSON content: feature count and first geometry type.
///
/// This is the GDAL-free replacement for a layer probe - it only needs the
/// document to be parseable JSON with a `features` array.
pub fn describe_geojson(content: &[u8]) -> Result<String, DomainError> {
    let value: serde_json::Value =
        serde_json::from_slice(content).map_err(|e| DomainError::InvalidGeoJson {
            reason: e.to_string(),
        })?;

    let features = value
        .get("features")
        .and_then(|f| f.as_array())
        .ok_or_else(|| DomainError::InvalidGeoJson {
            reason: "missing 'features' array".into(),
        })?;

    let geometry_kind = features
        .first()
        .and_then(|f| f.get("geometry"))
        .and_then(|g| g.get("type"))
        .and_then(|t| t.as_str());

    Ok(match geometry_kind {
        Some(kind) => format!("{} feature(s), {kind}", features.len()),
        None => format!("{} feature(s)", features.len()),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── classification ────────────────────────────────────────────────────

    #[test]
    fn tif_and_tiff_classify_as_geotiff() {
        assert_eq!(GeoFileKind::from_extension("tif"), Some(GeoFileKind::GeoTiff));
        assert_eq!(GeoFileKind::from_extension("tiff"), Some(GeoFileKind::GeoTiff));
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(GeoFileKind::from_extension("TIF"), Some(GeoFileKind::GeoTiff));
        assert_eq!(
            GeoFileKind::from_extension("GeoJSON"),
            Some(GeoFileKind::GeoJson)
        );
    }

    #[test]
    fn unrelated_extensions_are_ignored() {
        for ext in ["txt", "json", "prj", "dbf", ""] {
            assert_eq!(GeoFileKind::from_extension(ext), None, "failed for: {ext}");
        }
    }

    #[test]
    fn every_listed_extension_classifies() {
        for ext in GEO_EXTENSIONS {
            assert!(GeoFileKind::from_extension(ext).is_some(), "failed for: {ext}");
        }
    }

    #[test]
    fn kind_labels_match_report_vocabulary() {
        assert_eq!(GeoFileKind::GeoTiff.to_string(), "TIF");
        assert_eq!(GeoFileKind::Shapefile.to_string(), "SHP");
        assert_eq!(GeoFileKind::GeoJson.to_string(), "GeoJSON");
    }

    // ── describe_geojson ──────────────────────────────────────────────────

    #[test]
    fn describes_single_point_collection() {
        let content = br#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#;
        assert_eq!(describe_geojson(content).unwrap(), "1 feature(s), Point");
    }

    #[test]
    fn describes_empty_collection_without_geometry() {
        let content = br#"{"type":"FeatureCollection","features":[]}"#;
        assert_eq!(describe_geojson(content).unwrap(), "0 feature(s)");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            describe_geojson(b"not json"),
            Err(DomainError::InvalidGeoJson { .. })
        ));
    }

    #[test]
    fn missing_features_array_is_an_error() {
        assert!(matches!(
            describe_geojson(br#"{"type":"Point","coordinates":[0,0]}"#),
            Err(DomainError::InvalidGeoJson { .. })
        ));
    }

    // ── status ────────────────────────────────────────────────────────────

    #[test]
    fn status_labels() {
        assert_eq!(EntryStatus::Ok.label(), "OK");
        assert_eq!(EntryStatus::Error("boom".into()).label(), "Error");
        assert_eq!(EntryStatus::Error("boom".into()).message(), Some("boom"));
    }
}
