//! Route Domain Types
//!
//! The route record is the unit of data the catalog stores and the AI
//! layer reasons about. Field names serialize in camelCase to match the
//! public API surface.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single intercity bus route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    /// Stable identifier, assigned by the catalog
    pub id: String,
    /// Human-readable route name, e.g. "Delhi to Manali via HRTC Volvo"
    pub route_name: String,
    pub origin: String,
    pub destination: String,
    /// Door-to-door duration as advertised, e.g. "14 hrs"
    pub estimated_duration: String,
    /// Fare in the operator's local currency
    pub fare: f64,
    pub operator: String,
}

impl RouteRecord {
    /// Create a record with a freshly generated id
    pub fn new(
        route_name: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        estimated_duration: impl Into<String>,
        fare: f64,
        operator: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            route_name: route_name.into(),
            origin: origin.into(),
            destination: destination.into(),
            estimated_duration: estimated_duration.into(),
            fare,
            operator: operator.into(),
        }
    }
}

/// Minimal route reference embedded in insight reports
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub id: String,
    pub origin: String,
    pub destination: String,
}

impl From<&RouteRecord> for RouteSummary {
    fn from(route: &RouteRecord) -> Self {
        Self {
            id: route.id.clone(),
            origin: route.origin.clone(),
            destination: route.destination.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = RouteRecord::new("A to B", "A", "B", "2 hrs", 100.0, "HRTC");
        let b = RouteRecord::new("A to B", "A", "B", "2 hrs", 100.0, "HRTC");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serializes_camel_case() {
        let route = RouteRecord::new("Delhi to Manali", "Delhi", "Manali", "14 hrs", 1000.0, "HRTC");
        let json = serde_json::to_value(&route).unwrap();
        assert!(json.get("routeName").is_some());
        assert!(json.get("estimatedDuration").is_some());
        assert!(json.get("route_name").is_none());
    }

    #[test]
    fn test_summary_from_record() {
        let route = RouteRecord::new("Delhi to Manali", "Delhi", "Manali", "14 hrs", 1000.0, "HRTC");
        let summary = RouteSummary::from(&route);
        assert_eq!(summary.id, route.id);
        assert_eq!(summary.origin, "Delhi");
        assert_eq!(summary.destination, "Manali");
    }
}
