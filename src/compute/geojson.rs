//! GeoJSON conversion for query results.
//!
//! Map SDKs that draw clustered sources natively consume a
//! FeatureCollection of points whose properties follow the usual
//! `cluster` / `cluster_id` / `point_count` convention.

use crate::error::{ClusterError, Result};
use crate::marker::{ClusterNode, abbreviate_count};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

/// Converts one marker to a GeoJSON point feature.
pub fn node_to_feature<T>(node: &ClusterNode<'_, T>) -> Feature {
    let coordinate = node.coordinate();
    let mut properties = JsonObject::new();

    match node {
        ClusterNode::Leaf(point) => {
            properties.insert("cluster".to_string(), json!(false));
            properties.insert("facility_id".to_string(), json!(point.id()));
        }
        ClusterNode::Aggregate(marker) => {
            properties.insert("cluster".to_string(), json!(true));
            properties.insert("cluster_id".to_string(), json!(marker.id.to_string()));
            properties.insert("point_count".to_string(), json!(marker.point_count));
            properties.insert(
                "point_count_abbreviated".to_string(),
                json!(abbreviate_count(marker.point_count)),
            );
        }
    }

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![
            coordinate.x(),
            coordinate.y(),
        ]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

pub fn nodes_to_feature_collection<T>(nodes: &[ClusterNode<'_, T>]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: nodes.iter().map(node_to_feature).collect(),
        foreign_members: None,
    }
}

/// Serializes query results to a GeoJSON FeatureCollection string.
pub fn nodes_to_geojson<T>(nodes: &[ClusterNode<'_, T>]) -> Result<String> {
    serde_json::to_string(&nodes_to_feature_collection(nodes)).map_err(|e| {
        ClusterError::Serialization(format!("Failed to serialize markers: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClusterIndex, FacilityPoint, Viewport};

    fn index() -> ClusterIndex<()> {
        ClusterIndex::build(vec![
            FacilityPoint::new("a", 2.3522, 48.8566, ()),
            FacilityPoint::new("b", 2.3525, 48.8567, ()),
            FacilityPoint::new("far", -73.98, 40.75, ()),
        ])
        .unwrap()
    }

    #[test]
    fn test_cluster_feature_properties() {
        let index = index();
        let nodes = index.query(&Viewport::world(4));
        let collection = nodes_to_feature_collection(&nodes);
        assert_eq!(collection.features.len(), 2);

        let cluster = collection
            .features
            .iter()
            .find(|f| f.property("cluster") == Some(&json!(true)))
            .unwrap();
        assert_eq!(cluster.property("point_count"), Some(&json!(2)));
        assert_eq!(cluster.property("point_count_abbreviated"), Some(&json!("2")));

        let id = cluster.property("cluster_id").unwrap().as_str().unwrap();
        let parsed = id.parse().unwrap();
        assert_eq!(index.cluster(parsed).unwrap().point_count, 2);
    }

    #[test]
    fn test_leaf_feature_geometry() {
        let index = index();
        let nodes = index.query(&Viewport::world(17));
        let collection = nodes_to_feature_collection(&nodes);
        assert_eq!(collection.features.len(), 3);

        let far = collection
            .features
            .iter()
            .find(|f| f.property("facility_id") == Some(&json!("far")))
            .unwrap();
        assert_eq!(far.property("cluster"), Some(&json!(false)));
        match far.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Point(coords)) => assert_eq!(coords, &vec![-73.98, 40.75]),
            other => panic!("expected point geometry, got {:?}", other),
        }
    }

    #[test]
    fn test_geojson_string() {
        let index = index();
        let json = nodes_to_geojson(&index.query(&Viewport::world(4))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"].as_array().unwrap().len(), 2);
    }
}
