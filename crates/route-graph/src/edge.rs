//! Graph edge: a directed road segment carrying a tag map.

use std::collections::HashMap;

use route_core::{Distance, EdgeId, NodeId};

/// A directed road segment. `tags` holds the source map's key/value strings
/// (keys unique); the conventional `"highway"` key drives speed-factor
/// lookup in a vehicle profile.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub one_way: bool,
    pub distance: Distance,
    pub tags: HashMap<String, String>,
}

impl Edge {
    pub fn new(
        id: EdgeId,
        source: NodeId,
        target: NodeId,
        one_way: bool,
        distance: Distance,
        tags: HashMap<String, String>,
    ) -> Self {
        Self { id, source, target, one_way, distance, tags }
    }

    /// The `"highway"` tag, if present.
    pub fn highway_class(&self) -> Option<&str> {
        self.tags.get("highway").map(String::as_str)
    }

    /// A human-readable street name: the `"name"` tag if present, otherwise
    /// a fallback derived from the highway class.
    pub fn street_name(&self) -> String {
        if let Some(name) = self.tags.get("name") {
            if !name.is_empty() {
                return name.clone();
            }
        }
        match self.highway_class() {
            Some("motorway") | Some("motorway_link") => "Highway".to_string(),
            Some("trunk") | Some("trunk_link") => "Trunk Road".to_string(),
            Some("primary") | Some("primary_link") => "Primary Road".to_string(),
            Some("secondary") | Some("secondary_link") => "Secondary Road".to_string(),
            Some("tertiary") | Some("tertiary_link") => "Tertiary Road".to_string(),
            Some("residential") => "Residential Street".to_string(),
            Some("footway") | Some("pedestrian") => "Footpath".to_string(),
            Some("cycleway") => "Bike Path".to_string(),
            Some("service") => "Service Road".to_string(),
            Some(other) => format!("Unnamed {other} Road"),
            None => "Unnamed Road".to_string(),
        }
    }
}
