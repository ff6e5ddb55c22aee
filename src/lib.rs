//! RouteSage - AI Travel-Route Insight and Recommendation Engine
//!
//! Looks up intercity bus routes and asks a generative-language model to
//! enrich them: narrative route insights, personalized journey
//! recommendations, and enhanced route analysis. The model's free-text
//! replies are coerced into stable, typed results by a total
//! normalization layer that falls back to a bounded raw-text excerpt
//! instead of ever failing the caller.
//!
//! ## Quick Start
//!
//! ```ignore
//! use routesage::{RouteCatalog, TravelAdvisor};
//! use routesage::ai::client::{ClientConfig, create_client};
//!
//! let client = create_client(&ClientConfig::default())?;
//! let advisor = TravelAdvisor::new(client, RouteCatalog::with_seed_routes());
//! let report = advisor.journey_recommendations("Delhi", "Manali", None).await?;
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: prompt construction, the LLM client boundary, response
//!   normalization
//! - [`catalog`]: in-memory route store with journey matching
//! - [`advisor`]: orchestration and serializable reports
//! - [`config`]: layered configuration
//! - [`cli`]: command implementations

pub mod advisor;
pub mod ai;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, LlmConfig};

// Error Types
pub use types::error::{ErrorCategory, Result, SageError};

// Domain
pub use types::{Preferences, RouteRecord, RouteSummary};

// =============================================================================
// Advisor Re-exports
// =============================================================================

pub use advisor::{EnhancedRoutesReport, InsightsReport, RecommendationsReport, TravelAdvisor};
pub use catalog::RouteCatalog;

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{
    // Client
    GeminiClient,
    LlmClient,
    LlmReply,
    // Normalization
    NormalizedResult,
    // Prompts
    PromptBuilder,
    PromptTemplates,
    Provenance,
    Shape,
    SharedClient,
    create_client,
    normalize,
};
