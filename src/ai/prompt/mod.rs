//! Prompt Builder System
//!
//! Standardized prompt construction for LLM interactions.
//! Provides consistent structure across all advisor prompts.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: identical inputs render byte-identical prompts,
//!    so replies stay maximally extractable and prompts are testable
//! 2. **Role Definition**: clear assistant role for each task
//! 3. **Context Sections**: ordered trip parameters
//! 4. **Output Directive**: the expected reply format is rendered from
//!    the same [`Shape`] the normalizer extracts with, keeping markers
//!    and keys in sync by construction
//!
//! Origin and destination strings are interpolated verbatim; the model
//! endpoint is trusted not to be adversarial in this design.

use crate::ai::normalize::{Shape, ShapeFormat};
use crate::types::{Preferences, RouteRecord};

/// Prompt section types
#[derive(Debug, Clone)]
pub enum PromptSection {
    /// Role definition with a concrete task statement
    Role { persona: String, task: String },
    /// Ordered context items (key-value pairs)
    Context(Vec<(String, String)>),
    /// Numbered instruction list
    Instructions(Vec<String>),
    /// Raw text section with optional header
    Text {
        header: Option<String>,
        content: String,
    },
    /// Code block with language tag
    Code { language: String, content: String },
    /// Output-format directive rendered from a shape
    OutputDirective(Shape),
}

/// Prompt builder for consistent, deterministic prompt construction
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    sections: Vec<PromptSection>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role definition section
    pub fn role(mut self, persona: &str, task: &str) -> Self {
        self.sections.push(PromptSection::Role {
            persona: persona.to_string(),
            task: task.to_string(),
        });
        self
    }

    /// Add a context item; items render in insertion order
    pub fn context_item(mut self, key: &str, value: &str) -> Self {
        if let Some(PromptSection::Context(items)) = self.sections.last_mut() {
            items.push((key.to_string(), value.to_string()));
        } else {
            self.sections.push(PromptSection::Context(vec![(
                key.to_string(),
                value.to_string(),
            )]));
        }
        self
    }

    /// Add a numbered instruction list
    pub fn instructions(mut self, items: Vec<&str>) -> Self {
        self.sections.push(PromptSection::Instructions(
            items.into_iter().map(String::from).collect(),
        ));
        self
    }

    /// Add a text section
    pub fn text(mut self, content: &str) -> Self {
        self.sections.push(PromptSection::Text {
            header: None,
            content: content.to_string(),
        });
        self
    }

    /// Add a text section with a header line
    pub fn section(mut self, header: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Text {
            header: Some(header.to_string()),
            content: content.to_string(),
        });
        self
    }

    /// Add a code block
    pub fn code(mut self, language: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Code {
            language: language.to_string(),
            content: content.to_string(),
        });
        self
    }

    /// Add the output-format directive for a shape
    pub fn expect(mut self, shape: Shape) -> Self {
        self.sections.push(PromptSection::OutputDirective(shape));
        self
    }

    /// Build the final prompt string
    pub fn build(self) -> String {
        let mut prompt = String::new();

        for section in self.sections {
            match section {
                PromptSection::Role { persona, task } => {
                    prompt.push_str(&format!(
                        "You are {} for RouteSage, an intercity bus travel platform.\n\n",
                        persona
                    ));
                    prompt.push_str(&task);
                    prompt.push_str("\n\n");
                }
                PromptSection::Context(items) => {
                    for (key, value) in items {
                        prompt.push_str(&format!("{}: {}\n", key, value));
                    }
                    prompt.push('\n');
                }
                PromptSection::Instructions(items) => {
                    prompt.push_str("Please provide:\n");
                    for (i, item) in items.iter().enumerate() {
                        prompt.push_str(&format!("{}. {}\n", i + 1, item));
                    }
                    prompt.push('\n');
                }
                PromptSection::Text { header, content } => {
                    if let Some(h) = header {
                        prompt.push_str(&format!("{}\n", h));
                    }
                    prompt.push_str(&content);
                    prompt.push_str("\n\n");
                }
                PromptSection::Code { language, content } => {
                    prompt.push_str(&format!("```{}\n", language));
                    prompt.push_str(&content);
                    prompt.push_str("\n```\n\n");
                }
                PromptSection::OutputDirective(shape) => {
                    prompt.push_str(&render_directive(&shape));
                    prompt.push_str("\n\n");
                }
            }
        }

        prompt.trim_end().to_string()
    }
}

/// Render the reply-format directive for a shape.
///
/// Sections shapes enumerate the marker labels the normalizer will scan
/// for; Json shapes show an example object with the exact expected keys.
fn render_directive(shape: &Shape) -> String {
    match shape.format {
        ShapeFormat::Sections => {
            let mut out = String::from(
                "Provide concise but helpful information in the following format:\n\n",
            );
            for field in shape.fields {
                out.push_str(&format!("- {}: {}\n", field.label, field.hint));
            }
            out.push_str(
                "\nKeep the response concise but informative, focusing on actually useful information.",
            );
            out
        }
        ShapeFormat::Json => {
            let mut out =
                String::from("Provide your response in the following JSON format:\n{\n");
            for (i, field) in shape.fields.iter().enumerate() {
                let comma = if i + 1 < shape.fields.len() { "," } else { "" };
                out.push_str(&format!("  \"{}\": \"{}\"{}\n", field.key, field.hint, comma));
            }
            out.push_str("}\n\nOnly include the JSON in your response, with no additional text.");
            out
        }
    }
}

// =============================================================================
// Prompt Templates
// =============================================================================

/// Preset prompts for the advisor's fixed use cases
pub struct PromptTemplates;

impl PromptTemplates {
    /// Narrative insights for a single catalog route
    pub fn route_insights(route: &RouteRecord) -> String {
        PromptBuilder::new()
            .role(
                "an AI travel assistant",
                &format!(
                    "I need detailed insights about the bus route from {} to {} (Route ID: {}).",
                    route.origin, route.destination, route.id
                ),
            )
            .context_item("Route name", &route.route_name)
            .context_item("Operator", &route.operator)
            .context_item("Estimated duration", &route.estimated_duration)
            .expect(crate::ai::normalize::shape::INSIGHTS)
            .build()
    }

    /// Personalized journey recommendations for an origin/destination pair
    pub fn journey_recommendations(
        origin: &str,
        destination: &str,
        preferences: Option<&Preferences>,
        candidates: &[RouteRecord],
    ) -> String {
        let mut builder = PromptBuilder::new().role(
            "an AI travel assistant",
            &format!(
                "I am planning a journey from {} to {} and need personalized recommendations.",
                origin, destination
            ),
        );

        builder = match preferences.filter(|p| !p.is_empty()) {
            Some(prefs) => builder
                .context_item(
                    "Budget preference",
                    prefs.budget.as_deref().unwrap_or("Not specified"),
                )
                .context_item(
                    "Travel time preference",
                    prefs.travel_time.as_deref().unwrap_or("Not specified"),
                )
                .context_item(
                    "Comfort level preference",
                    prefs.comfort.as_deref().unwrap_or("Not specified"),
                )
                .context_item(
                    "Additional needs",
                    &join_or(&prefs.additional_needs, "None"),
                ),
            None => builder.text("No specific preferences provided."),
        };

        if !candidates.is_empty() {
            builder = builder.section("Available routes:", &routes_json(candidates));
        }

        builder
            .text("Make sure your recommendations are specific, practical, and tailored to the traveler's preferences.")
            .expect(crate::ai::normalize::shape::RECOMMENDATIONS)
            .build()
    }

    /// Route analysis asking for an enhanced route list
    pub fn enhanced_routes(
        origin: &str,
        destination: &str,
        travel_mode: &str,
        candidates: &[RouteRecord],
    ) -> String {
        PromptBuilder::new()
            .role(
                "an AI travel assistant",
                &format!(
                    "I need to travel from {} to {} using {}.",
                    origin, destination, travel_mode
                ),
            )
            .text("Here are the available routes:")
            .code("json", &routes_json(candidates))
            .instructions(vec![
                "The most time-efficient route",
                "The most cost-effective route",
                "Any additional route recommendations or optimizations",
                "Suggested last-mile connectivity options",
            ])
            .text(
                "Format your response as valid JSON with an array called \"enhancedRoutes\" containing route objects.",
            )
            .build()
    }
}

fn routes_json(routes: &[RouteRecord]) -> String {
    serde_json::to_string_pretty(routes).unwrap_or_else(|_| "[]".to_string())
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::normalize::shape;

    fn sample_route() -> RouteRecord {
        RouteRecord::new(
            "Delhi to Manali via Volvo",
            "Delhi",
            "Manali",
            "14 hrs",
            1000.0,
            "HRTC",
        )
    }

    #[test]
    fn test_insights_prompt_carries_markers() {
        let prompt = PromptTemplates::route_insights(&sample_route());
        for field in shape::INSIGHTS.fields {
            assert!(
                prompt.contains(&format!("- {}: ", field.label)),
                "missing marker for {}",
                field.label
            );
        }
        assert!(prompt.contains("Delhi"));
        assert!(prompt.contains("Manali"));
        assert!(prompt.contains("HRTC"));
    }

    #[test]
    fn test_recommendations_prompt_names_all_keys() {
        let prompt =
            PromptTemplates::journey_recommendations("Delhi", "Manali", None, &[sample_route()]);
        assert!(prompt.contains("Delhi"));
        assert!(prompt.contains("Manali"));
        for key in shape::RECOMMENDATIONS.keys() {
            assert!(prompt.contains(&format!("\"{}\"", key)), "missing {}", key);
        }
        assert!(prompt.contains("No specific preferences provided."));
    }

    #[test]
    fn test_recommendations_prompt_renders_preferences() {
        let prefs = Preferences {
            budget: Some("under 1200 INR".to_string()),
            comfort: Some("AC sleeper".to_string()),
            additional_needs: vec!["extra luggage".to_string()],
            ..Default::default()
        };
        let prompt =
            PromptTemplates::journey_recommendations("Delhi", "Manali", Some(&prefs), &[]);
        assert!(prompt.contains("Budget preference: under 1200 INR"));
        assert!(prompt.contains("Travel time preference: Not specified"));
        assert!(prompt.contains("Comfort level preference: AC sleeper"));
        assert!(prompt.contains("Additional needs: extra luggage"));
    }

    #[test]
    fn test_enhanced_prompt_embeds_routes_and_mode() {
        let prompt =
            PromptTemplates::enhanced_routes("Delhi", "Manali", "BUS ONLY", &[sample_route()]);
        assert!(prompt.contains("using BUS ONLY"));
        assert!(prompt.contains("\"enhancedRoutes\""));
        assert!(prompt.contains("\"routeName\": \"Delhi to Manali via Volvo\""));
        assert!(prompt.contains("1. The most time-efficient route"));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let route = sample_route();
        let a = PromptTemplates::route_insights(&route);
        let b = PromptTemplates::route_insights(&route);
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_directive_is_valid_json_example() {
        let directive = render_directive(&shape::RECOMMENDATIONS);
        let start = directive.find('{').unwrap();
        let end = directive.rfind('}').unwrap();
        let example: serde_json::Value =
            serde_json::from_str(&directive[start..=end]).unwrap();
        assert!(example.get("recommendedRoute").is_some());
    }
}
