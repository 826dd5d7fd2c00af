use geojson::GeoJson;

use crate::map::BOUNDARY_NAME_PROPERTY;

/// One outline of the boundary overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    /// Region name for the tooltip, when the feature carries one.
    pub name: Option<String>,
    /// The feature re-encoded as GeoJSON text, ready to hand to the map library.
    pub geojson: String,
}

/// Outcome of loading the boundary document.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BoundaryStatus {
    #[default]
    Loading,
    Loaded { features: usize },
    Failed(String),
}

impl BoundaryStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, BoundaryStatus::Failed(_))
    }

    pub fn from_result(result: &Result<Vec<BoundaryFeature>, String>) -> Self {
        match result {
            Ok(features) => BoundaryStatus::Loaded {
                features: features.len(),
            },
            Err(e) => BoundaryStatus::Failed(e.clone()),
        }
    }
}

/// Parse a FeatureCollection into drawable outlines.
pub fn parse_boundaries(text: &str) -> Result<Vec<BoundaryFeature>, String> {
    let doc: GeoJson = text
        .parse()
        .map_err(|e: geojson::Error| format!("Invalid boundary document: {}", e))?;

    let collection = match doc {
        GeoJson::FeatureCollection(fc) => fc,
        _ => return Err("Boundary document is not a FeatureCollection".to_string()),
    };

    collection
        .features
        .into_iter()
        .map(|feature| {
            let name = feature
                .properties
                .as_ref()
                .and_then(|props| props.get(BOUNDARY_NAME_PROPERTY))
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            let geojson = serde_json::to_string(&feature)
                .map_err(|e| format!("Failed to encode boundary feature: {}", e))?;
            Ok(BoundaryFeature { name, geojson })
        })
        .collect()
}
