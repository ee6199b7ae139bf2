//! Webhook Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod signature;
pub mod webhook;

// Re-export the main handler for convenience
pub use handler::handler;
pub use webhook::handle_webhook;
