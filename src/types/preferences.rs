//! Journey Preferences
//!
//! Optional traveler preferences attached to a recommendation request.
//! Every field is optional; an absent preference block is the common case.

use serde::{Deserialize, Serialize};

/// Traveler preferences for journey recommendations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Budget preference, free text (e.g. "under 1000 INR")
    pub budget: Option<String>,
    /// Preferred travel time, free text (e.g. "overnight")
    pub travel_time: Option<String>,
    /// Comfort level preference (e.g. "AC sleeper")
    pub comfort: Option<String>,
    /// Additional-need tags (e.g. "wheelchair access", "extra luggage")
    pub additional_needs: Vec<String>,
}

impl Preferences {
    /// True when no preference was expressed at all
    pub fn is_empty(&self) -> bool {
        self.budget.is_none()
            && self.travel_time.is_none()
            && self.comfort.is_none()
            && self.additional_needs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(Preferences::default().is_empty());
    }

    #[test]
    fn test_any_field_makes_non_empty() {
        let prefs = Preferences {
            budget: Some("low".to_string()),
            ..Default::default()
        };
        assert!(!prefs.is_empty());

        let prefs = Preferences {
            additional_needs: vec!["extra luggage".to_string()],
            ..Default::default()
        };
        assert!(!prefs.is_empty());
    }

    #[test]
    fn test_deserializes_camel_case_with_defaults() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"travelTime": "overnight"}"#).unwrap();
        assert_eq!(prefs.travel_time.as_deref(), Some("overnight"));
        assert!(prefs.budget.is_none());
        assert!(prefs.additional_needs.is_empty());
    }
}
