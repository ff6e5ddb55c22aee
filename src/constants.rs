//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Response normalization constants
pub mod normalize {
    /// Maximum number of characters of raw model text copied into a
    /// fallback result's primary field
    pub const FALLBACK_EXCERPT_CHARS: usize = 500;

    /// Appended to a fallback excerpt when the raw text was longer than
    /// the excerpt bound
    pub const TRUNCATION_MARKER: &str = "...";
}

/// LLM client retry constants
pub mod retry {
    /// Maximum attempts per request (initial attempt included)
    pub const MAX_ATTEMPTS: usize = 3;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 500;

    /// Maximum delay between retries (seconds)
    pub const MAX_DELAY_SECS: u64 = 30;

    /// Backoff multiplier
    pub const BACKOFF_FACTOR: f32 = 2.0;
}

/// Route catalog constants
pub mod catalog {
    /// Travel mode assumed when the caller does not specify one
    pub const DEFAULT_TRAVEL_MODE: &str = "BUS ONLY";
}
