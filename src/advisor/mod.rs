//! Travel Advisor
//!
//! The orchestration layer behind every AI operation: validates caller
//! input, looks up candidate routes, builds the prompt, calls the LLM
//! client, and normalizes the reply. Produces serializable reports that
//! carry an explicit success flag and the provenance of their data, so
//! consumers can tell the model's structured answer from a fallback
//! excerpt without special-casing either.
//!
//! The client and catalog are constructor-injected; the advisor owns no
//! ambient state.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::ai::client::SharedClient;
use crate::ai::normalize::{NormalizedResult, Provenance, normalize, normalize_keyed_array, shape};
use crate::ai::prompt::PromptTemplates;
use crate::catalog::RouteCatalog;
use crate::constants::catalog::DEFAULT_TRAVEL_MODE;
use crate::types::{Preferences, Result, RouteSummary, SageError};

/// JSON key the enhanced-routes prompt asks the model to populate
const ENHANCED_ROUTES_KEY: &str = "enhancedRoutes";

// =============================================================================
// Reports
// =============================================================================

/// Narrative insights for a single route
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsReport {
    pub success: bool,
    pub route: RouteSummary,
    pub source: Provenance,
    pub insights: NormalizedResult,
}

/// Personalized recommendations for a journey
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsReport {
    pub success: bool,
    pub origin: String,
    pub destination: String,
    pub source: Provenance,
    pub recommendations: NormalizedResult,
}

/// Model-enhanced route list for a journey
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedRoutesReport {
    pub success: bool,
    pub count: usize,
    pub source: Provenance,
    pub routes: Vec<Value>,
}

// =============================================================================
// Travel Advisor
// =============================================================================

/// Orchestrates catalog lookups, prompt construction, the LLM call, and
/// response normalization
pub struct TravelAdvisor {
    client: SharedClient,
    catalog: RouteCatalog,
}

impl TravelAdvisor {
    pub fn new(client: SharedClient, catalog: RouteCatalog) -> Self {
        Self { client, catalog }
    }

    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }

    /// Generate narrative insights for a catalog route
    pub async fn route_insights(&self, route_id: &str) -> Result<InsightsReport> {
        let route = self
            .catalog
            .get(route_id)
            .ok_or_else(|| SageError::RouteNotFound(format!("route id '{}'", route_id)))?;

        let prompt = PromptTemplates::route_insights(route);
        debug!(route_id, prompt_chars = prompt.len(), "requesting route insights");

        let reply = self.client.generate(&prompt).await?;
        let insights = normalize(&reply.text, &shape::INSIGHTS);
        if insights.is_fallback() {
            warn!(route_id, "insights reply was unparseable; returning fallback excerpt");
        }

        Ok(InsightsReport {
            success: true,
            route: RouteSummary::from(route),
            source: insights.provenance(),
            insights,
        })
    }

    /// Generate personalized journey recommendations
    pub async fn journey_recommendations(
        &self,
        origin: &str,
        destination: &str,
        preferences: Option<&Preferences>,
    ) -> Result<RecommendationsReport> {
        let (origin, destination) = require_journey(origin, destination)?;

        let candidates = self.catalog.find_journey(origin, destination);
        let prompt =
            PromptTemplates::journey_recommendations(origin, destination, preferences, &candidates);
        debug!(
            origin,
            destination,
            candidates = candidates.len(),
            "requesting journey recommendations"
        );

        let reply = self.client.generate(&prompt).await?;
        let recommendations = normalize(&reply.text, &shape::RECOMMENDATIONS);
        if recommendations.is_fallback() {
            warn!(origin, destination, "recommendations reply was unparseable");
        }

        Ok(RecommendationsReport {
            success: true,
            origin: origin.to_string(),
            destination: destination.to_string(),
            source: recommendations.provenance(),
            recommendations,
        })
    }

    /// Ask the model to analyze and enhance the catalog's routes for a
    /// journey. An unparseable reply falls back to the catalog routes
    /// unchanged, so the caller always receives a usable list.
    pub async fn enhanced_routes(
        &self,
        origin: &str,
        destination: &str,
        travel_mode: Option<&str>,
    ) -> Result<EnhancedRoutesReport> {
        let (origin, destination) = require_journey(origin, destination)?;

        let candidates = self.catalog.find_journey(origin, destination);
        if candidates.is_empty() {
            return Err(SageError::RouteNotFound(format!(
                "{} to {}",
                origin, destination
            )));
        }

        let mode = travel_mode.unwrap_or(DEFAULT_TRAVEL_MODE);
        let prompt = PromptTemplates::enhanced_routes(origin, destination, mode, &candidates);
        debug!(origin, destination, mode, "requesting enhanced routes");

        let reply = self.client.generate(&prompt).await?;

        let (source, routes) = match normalize_keyed_array(&reply.text, ENHANCED_ROUTES_KEY) {
            Some(routes) => (Provenance::Structured, routes),
            None => {
                warn!(origin, destination, "enhanced reply was unparseable; using catalog routes");
                let originals = candidates
                    .iter()
                    .filter_map(|r| serde_json::to_value(r).ok())
                    .collect();
                (Provenance::Fallback, originals)
            }
        };

        Ok(EnhancedRoutesReport {
            success: true,
            count: routes.len(),
            source,
            routes,
        })
    }
}

/// Reject blank journey endpoints before any core work happens
fn require_journey<'a>(origin: &'a str, destination: &'a str) -> Result<(&'a str, &'a str)> {
    let origin = origin.trim();
    let destination = destination.trim();
    if origin.is_empty() || destination.is_empty() {
        return Err(SageError::InvalidInput(
            "origin and destination are required".to_string(),
        ));
    }
    Ok((origin, destination))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::client::{LlmClient, LlmReply};
    use async_trait::async_trait;
    use std::sync::Arc;

    /// Canned text source standing in for the network client
    struct CannedClient {
        reply: String,
    }

    impl CannedClient {
        fn shared(reply: &str) -> SharedClient {
            Arc::new(Self {
                reply: reply.to_string(),
            })
        }
    }

    #[async_trait]
    impl LlmClient for CannedClient {
        async fn generate(&self, _prompt: &str) -> Result<LlmReply> {
            Ok(LlmReply::text_only(&self.reply))
        }

        fn name(&self) -> &str {
            "canned"
        }

        fn model(&self) -> &str {
            "canned"
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }
    }

    fn advisor(reply: &str) -> TravelAdvisor {
        TravelAdvisor::new(CannedClient::shared(reply), RouteCatalog::with_seed_routes())
    }

    #[tokio::test]
    async fn test_recommendations_round_trip() {
        let reply = r#"```json
{"recommendedRoute": "Take the overnight sleeper", "alternativeRoutes": "Morning Volvo", "travelTips": "Book a lower berth", "specialConsiderations": "Carry warm clothing"}
```"#;
        let advisor = advisor(reply);
        let report = advisor
            .journey_recommendations("Delhi", "Manali", None)
            .await
            .unwrap();

        assert!(report.success);
        assert_eq!(report.source, Provenance::Structured);
        assert_eq!(
            report.recommendations.get("recommendedRoute"),
            Some("Take the overnight sleeper")
        );
        assert_eq!(
            report.recommendations.get("alternativeRoutes"),
            Some("Morning Volvo")
        );
        assert_eq!(
            report.recommendations.get("travelTips"),
            Some("Book a lower berth")
        );
        assert_eq!(
            report.recommendations.get("specialConsiderations"),
            Some("Carry warm clothing")
        );
    }

    #[tokio::test]
    async fn test_recommendations_fallback_on_garbage() {
        let advisor = advisor("The stars are not aligned for travel today.");
        let report = advisor
            .journey_recommendations("Delhi", "Manali", None)
            .await
            .unwrap();

        assert!(report.success);
        assert_eq!(report.source, Provenance::Fallback);
        assert_eq!(
            report.recommendations.get("recommendedRoute"),
            Some("The stars are not aligned for travel today.")
        );
    }

    #[tokio::test]
    async fn test_insights_flow() {
        let reply = "Overview: Long mountain haul.\nTravel Tips: Take motion sickness tablets.";
        let advisor = advisor(reply);
        let route_id = advisor.catalog().all()[0].id.clone();
        let report = advisor.route_insights(&route_id).await.unwrap();

        assert!(report.success);
        assert_eq!(report.source, Provenance::Structured);
        assert_eq!(report.route.id, route_id);
        assert_eq!(report.insights.get("overview"), Some("Long mountain haul."));
    }

    #[tokio::test]
    async fn test_insights_unknown_route() {
        let advisor = advisor("irrelevant");
        let err = advisor.route_insights("no-such-id").await.unwrap_err();
        assert!(matches!(err, SageError::RouteNotFound(_)));
    }

    #[tokio::test]
    async fn test_blank_journey_is_rejected() {
        let advisor = advisor("irrelevant");
        let err = advisor
            .journey_recommendations("  ", "Manali", None)
            .await
            .unwrap_err();
        assert!(matches!(err, SageError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_enhanced_routes_structured() {
        let reply = r#"{"enhancedRoutes": [{"routeName": "Optimized Volvo", "fare": 950}]}"#;
        let advisor = advisor(reply);
        let report = advisor
            .enhanced_routes("Delhi", "Manali", None)
            .await
            .unwrap();

        assert_eq!(report.source, Provenance::Structured);
        assert_eq!(report.count, 1);
        assert_eq!(report.routes[0]["routeName"], "Optimized Volvo");
    }

    #[tokio::test]
    async fn test_enhanced_routes_fall_back_to_catalog() {
        let advisor = advisor("no json to speak of");
        let report = advisor
            .enhanced_routes("Delhi", "Manali", Some("BUS ONLY"))
            .await
            .unwrap();

        assert_eq!(report.source, Provenance::Fallback);
        assert_eq!(report.count, 2);
        assert!(report.routes.iter().all(|r| r["origin"] == "Delhi"));
    }

    #[tokio::test]
    async fn test_enhanced_routes_unknown_journey() {
        let advisor = advisor("irrelevant");
        let err = advisor
            .enhanced_routes("Atlantis", "El Dorado", None)
            .await
            .unwrap_err();
        assert!(matches!(err, SageError::RouteNotFound(_)));
    }
}
