//! Shape Descriptors
//!
//! A shape is the fixed, ordered list of fields a use case expects back
//! from the model, together with the extraction strategy its prompts are
//! written for. Shapes are fixed per use case and never inferred from a
//! reply.
//!
//! Each field carries three names:
//! - `key`: the JSON key in the normalized output
//! - `label`: the human-readable marker label used in section prompts
//!   and section extraction ("Overview" -> marker "Overview:")
//! - `hint`: the one-line content description interpolated into the
//!   prompt's format directive

/// Extraction strategy declared by a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeFormat {
    /// Labeled narrative sections, located by marker scanning
    Sections,
    /// A JSON object embedded in the reply
    Json,
}

/// A single named field within a shape
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
}

/// The fixed, ordered field list for one use case
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    pub name: &'static str,
    pub format: ShapeFormat,
    pub fields: &'static [FieldSpec],
}

impl Shape {
    /// The field a fallback result populates
    pub fn primary_field(&self) -> &FieldSpec {
        &self.fields[0]
    }

    /// Ordered JSON keys of every field
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.key)
    }
}

/// Five narrative sections describing a single route
pub const INSIGHTS: Shape = Shape {
    name: "insights",
    format: ShapeFormat::Sections,
    fields: &[
        FieldSpec {
            key: "overview",
            label: "Overview",
            hint: "A brief overview of this route, including distance and typical travel time",
        },
        FieldSpec {
            key: "bestTimeToTravel",
            label: "Best Time to Travel",
            hint: "When is the optimal time to travel on this route and why",
        },
        FieldSpec {
            key: "weatherConsiderations",
            label: "Weather Considerations",
            hint: "Current or seasonal weather patterns that travelers should be aware of",
        },
        FieldSpec {
            key: "touristAttractions",
            label: "Tourist Attractions",
            hint: "Notable places to visit along this route or at the destination",
        },
        FieldSpec {
            key: "travelTips",
            label: "Travel Tips",
            hint: "Practical advice for travelers taking this specific route",
        },
    ],
};

/// Four JSON fields for personalized journey recommendations
pub const RECOMMENDATIONS: Shape = Shape {
    name: "recommendations",
    format: ShapeFormat::Json,
    fields: &[
        FieldSpec {
            key: "recommendedRoute",
            label: "Recommended Route",
            hint: "Detailed description of the best recommended route option considering the preferences",
        },
        FieldSpec {
            key: "alternativeRoutes",
            label: "Alternative Routes",
            hint: "Description of 1-2 alternative routes that might also suit the traveler",
        },
        FieldSpec {
            key: "travelTips",
            label: "Travel Tips",
            hint: "Practical tips related to this journey",
        },
        FieldSpec {
            key: "specialConsiderations",
            label: "Special Considerations",
            hint: "Any special considerations based on the traveler's preferences and needs",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insights_shape_is_sections() {
        assert_eq!(INSIGHTS.format, ShapeFormat::Sections);
        assert_eq!(INSIGHTS.fields.len(), 5);
        assert_eq!(INSIGHTS.primary_field().key, "overview");
    }

    #[test]
    fn test_recommendations_shape_is_json() {
        assert_eq!(RECOMMENDATIONS.format, ShapeFormat::Json);
        let keys: Vec<_> = RECOMMENDATIONS.keys().collect();
        assert_eq!(
            keys,
            [
                "recommendedRoute",
                "alternativeRoutes",
                "travelTips",
                "specialConsiderations"
            ]
        );
    }

    #[test]
    fn test_field_keys_are_unique() {
        for shape in [&INSIGHTS, &RECOMMENDATIONS] {
            let mut keys: Vec<_> = shape.keys().collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), shape.fields.len(), "{}", shape.name);
        }
    }
}
