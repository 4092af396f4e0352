//! HTTP handlers for the framework API.

pub mod framework;
pub use framework::*;
