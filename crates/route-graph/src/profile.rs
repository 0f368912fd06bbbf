//! Vehicle profile: per-highway-class speed factors and suitability checks.

use std::collections::HashMap;

/// A named set of highway-class speed factors.
///
/// `factor > 1` means preferred, `0 < factor < 1` means avoided, `factor ==
/// 0` means blocked. A class with no stored factor behaves as factor `1.0`
/// (neither preferred nor avoided nor blocked) when queried through
/// [`VehicleProfile::speed_factor`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleProfile {
    pub name: String,
    pub type_tag: String,
    pub default_speed_kmh: f64,
    speed_factors: HashMap<String, f64>,
}

impl VehicleProfile {
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>, default_speed_kmh: f64) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            default_speed_kmh,
            speed_factors: HashMap::new(),
        }
    }

    pub fn set_speed_factor(&mut self, highway_class: impl Into<String>, factor: f64) {
        self.speed_factors.insert(highway_class.into(), factor);
    }

    /// The stored factor for `highway_class`, or `1.0` if unset.
    pub fn speed_factor(&self, highway_class: &str) -> f64 {
        self.speed_factors.get(highway_class).copied().unwrap_or(1.0)
    }

    /// `true` iff `highway_class` is stored with a factor `<= 0`.
    pub fn is_blocked(&self, highway_class: &str) -> bool {
        self.speed_factors
            .get(highway_class)
            .is_some_and(|&f| f <= 0.0)
    }

    /// An edge's tags are unsuitable iff `"highway"` is present and maps to
    /// a blocked class. An edge with no `"highway"` tag is always suitable.
    pub fn is_road_suitable(&self, tags: &HashMap<String, String>) -> bool {
        match tags.get("highway") {
            Some(class) => !self.is_blocked(class),
            None => true,
        }
    }

    /// Highway classes with factor `> 1.0`.
    pub fn preferred_classes(&self) -> Vec<&str> {
        self.speed_factors
            .iter()
            .filter(|(_, &f)| f > 1.0)
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// Highway classes with `0.0 < factor < 1.0`.
    pub fn avoided_classes(&self) -> Vec<&str> {
        self.speed_factors
            .iter()
            .filter(|(_, &f)| f > 0.0 && f < 1.0)
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// Highway classes with `factor <= 0.0`.
    pub fn blocked_classes(&self) -> Vec<&str> {
        self.speed_factors
            .iter()
            .filter(|(_, &f)| f <= 0.0)
            .map(|(k, _)| k.as_str())
            .collect()
    }
}

/// Builds the two stock profiles whose numeric tables are an external
/// contract (see the CLI/algorithm surface documentation).
pub struct VehicleProfileFactory;

impl VehicleProfileFactory {
    pub fn car() -> VehicleProfile {
        let mut p = VehicleProfile::new("Auto", "CAR", 80.0);
        for (class, factor) in [
            ("residential", 1.0),
            ("primary", 1.3),
            ("secondary", 1.2),
            ("tertiary", 1.1),
            ("trunk", 1.4),
            ("motorway", 1.5),
            ("unclassified", 0.9),
            ("tertiary_link", 1.1),
            ("primary_link", 1.3),
            ("secondary_link", 1.2),
            ("trunk_link", 1.4),
            ("corridor", 0.8),
            ("track", 0.3),
            ("footway", 0.0),
            ("pedestrian", 0.0),
            ("cycleway", 0.0),
            ("path", 0.0),
            ("service", 0.0),
            ("steps", 0.0),
            ("bridleway", 0.0),
            ("living_street", 0.0),
            ("raceway", 0.0),
            ("construction", 0.0),
        ] {
            p.set_speed_factor(class, factor);
        }
        p
    }

    pub fn pedestrian() -> VehicleProfile {
        let mut p = VehicleProfile::new("Peaton", "PEDESTRIAN", 5.0);
        for (class, factor) in [
            ("footway", 1.5),
            ("pedestrian", 1.4),
            ("cycleway", 1.2),
            ("path", 1.6),
            ("service", 1.1),
            ("steps", 0.8),
            ("bridleway", 1.3),
            ("construction", 0.9),
            ("residential", 1.0),
            ("primary", 0.4),
            ("secondary", 0.5),
            ("tertiary", 0.7),
            ("unclassified", 0.6),
            ("track", 1.1),
            ("corridor", 0.8),
            ("trunk", 0.0),
            ("motorway", 0.0),
            ("living_street", 0.0),
            ("raceway", 0.0),
            ("tertiary_link", 0.0),
            ("primary_link", 0.0),
            ("secondary_link", 0.0),
            ("trunk_link", 0.0),
        ] {
            p.set_speed_factor(class, factor);
        }
        p
    }
}
