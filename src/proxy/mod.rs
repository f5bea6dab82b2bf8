//! Proxy module
//!
//! Handles request forwarding to the Gemini API.

pub mod gemini;
pub mod logging;
pub mod provider;

pub use gemini::GeminiClient;
pub use logging::RequestContext;
pub use provider::ContentGenerator;
