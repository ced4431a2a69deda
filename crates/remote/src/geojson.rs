use serde::{Deserialize, Serialize};

/// GeoJSON `Point` geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[longitude, latitude]`.
    pub coordinates: [f64; 2],
}

/// GeoJSON `Feature` wrapping a point, as the query endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointFeature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: PointGeometry,
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// Builds the GeoJSON feature for a point query at `(lon, lat)`.
pub fn point_feature(lon: f64, lat: f64) -> PointFeature {
    PointFeature {
        kind: "Feature".to_owned(),
        geometry: PointGeometry {
            kind: "Point".to_owned(),
            coordinates: [lon, lat],
        },
        properties: serde_json::Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::point_feature;

    #[test]
    fn serializes_to_a_geojson_point_feature() {
        let feature = point_feature(-100.5, 40.2);
        let json = serde_json::to_value(&feature).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [-100.5, 40.2]
                },
                "properties": {}
            })
        );
    }

    #[test]
    fn coordinates_are_lon_lat_ordered() {
        let feature = point_feature(1.0, 2.0);
        assert_eq!(feature.geometry.coordinates, [1.0, 2.0]);
    }
}
