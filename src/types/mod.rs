pub mod error;
pub mod preferences;
pub mod route;

pub use error::{ErrorCategory, ErrorClassifier, LlmError, Result, SageError};
pub use preferences::Preferences;
pub use route::{RouteRecord, RouteSummary};
