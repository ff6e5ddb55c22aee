//! Route Catalog
//!
//! In-memory store of the routes the advisor can reason about. Journey
//! matching is case-insensitive and two-step: exact origin/destination
//! equality first, then a lenient substring pass when the exact match
//! comes up empty.

use crate::types::RouteRecord;

/// In-memory route catalog
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    routes: Vec<RouteRecord>,
}

impl RouteCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog over caller-supplied routes
    pub fn from_routes(routes: Vec<RouteRecord>) -> Self {
        Self { routes }
    }

    /// Catalog seeded with the built-in demo network
    pub fn with_seed_routes() -> Self {
        Self::from_routes(seed_routes())
    }

    /// All routes, in insertion order
    pub fn all(&self) -> &[RouteRecord] {
        &self.routes
    }

    /// Look up a route by id
    pub fn get(&self, id: &str) -> Option<&RouteRecord> {
        self.routes.iter().find(|r| r.id == id)
    }

    /// Routes matching a journey: exact case-insensitive equality on both
    /// endpoints, falling back to a substring pass when nothing matches
    /// exactly.
    pub fn find_journey(&self, origin: &str, destination: &str) -> Vec<RouteRecord> {
        let origin_lower = origin.to_lowercase();
        let destination_lower = destination.to_lowercase();

        let exact: Vec<RouteRecord> = self
            .routes
            .iter()
            .filter(|r| {
                r.origin.to_lowercase() == origin_lower
                    && r.destination.to_lowercase() == destination_lower
            })
            .cloned()
            .collect();

        if !exact.is_empty() {
            return exact;
        }

        self.routes
            .iter()
            .filter(|r| {
                r.origin.to_lowercase().contains(&origin_lower)
                    && r.destination.to_lowercase().contains(&destination_lower)
            })
            .cloned()
            .collect()
    }
}

/// Built-in demo route network
fn seed_routes() -> Vec<RouteRecord> {
    vec![
        RouteRecord::new(
            "Delhi to Aut via HRTC Volvo",
            "Delhi",
            "Aut",
            "12 hrs",
            800.0,
            "HRTC",
        ),
        RouteRecord::new(
            "Delhi to Manali via UPSRTC",
            "Delhi",
            "Manali",
            "14 hrs",
            1000.0,
            "UPSRTC",
        ),
        RouteRecord::new(
            "Delhi to Manali Overnight Sleeper",
            "Delhi",
            "Manali",
            "13 hrs",
            1250.0,
            "HRTC",
        ),
        RouteRecord::new(
            "Delhi to Shimla Express",
            "Delhi",
            "Shimla",
            "9 hrs",
            650.0,
            "HRTC",
        ),
        RouteRecord::new(
            "Chandigarh to Manali Morning Service",
            "Chandigarh",
            "Manali",
            "8 hrs",
            550.0,
            "HRTC",
        ),
        RouteRecord::new(
            "Delhi to Jaipur AC Seater",
            "Delhi",
            "Jaipur",
            "6 hrs",
            500.0,
            "RSRTC",
        ),
        RouteRecord::new(
            "Mumbai to Pune Shivneri",
            "Mumbai",
            "Pune",
            "3.5 hrs",
            420.0,
            "MSRTC",
        ),
        RouteRecord::new(
            "Bangalore to Chennai Night Rider",
            "Bangalore",
            "Chennai",
            "7 hrs",
            750.0,
            "KSRTC",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let catalog = RouteCatalog::with_seed_routes();
        let routes = catalog.find_journey("delhi", "MANALI");
        assert_eq!(routes.len(), 2);
        assert!(routes.iter().all(|r| r.origin == "Delhi"));
    }

    #[test]
    fn test_exact_match_wins_over_substring() {
        // "Aut" is a substring of nothing else in the seed set, but an
        // exact Delhi->Aut match must not pick up Delhi->Manali routes.
        let catalog = RouteCatalog::with_seed_routes();
        let routes = catalog.find_journey("Delhi", "Aut");
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].destination, "Aut");
    }

    #[test]
    fn test_lenient_pass_matches_substrings() {
        let catalog = RouteCatalog::with_seed_routes();
        // No exact "Chandi" origin; the lenient pass finds Chandigarh.
        let routes = catalog.find_journey("Chandi", "Manali");
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].origin, "Chandigarh");
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = RouteCatalog::with_seed_routes();
        assert!(catalog.find_journey("Atlantis", "El Dorado").is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = RouteCatalog::with_seed_routes();
        let first = &catalog.all()[0];
        assert_eq!(catalog.get(&first.id).unwrap().route_name, first.route_name);
        assert!(catalog.get("missing-id").is_none());
    }
}
