// Atomic API modules
pub mod client;
pub mod plans;

// Re-export commonly used functions
pub use client::{set_silent, ApiClient};
pub use plans::{list_metal_plans, list_plans};
