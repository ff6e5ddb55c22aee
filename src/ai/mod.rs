//! AI Integration Layer
//!
//! Prompt construction, the LLM client boundary, and response
//! normalization. The prompt and normalize modules are pure; all I/O
//! lives behind the client trait.

pub mod client;
pub mod normalize;
pub mod prompt;

pub use client::{
    ClientConfig, GeminiClient, LlmClient, LlmReply, ReplyMetadata, ReplyTiming, SharedClient,
    TokenUsage, create_client,
};
pub use normalize::{
    FieldSpec, NormalizedResult, Provenance, Shape, ShapeFormat, normalize, normalize_keyed_array,
};
pub use prompt::{PromptBuilder, PromptSection, PromptTemplates};
