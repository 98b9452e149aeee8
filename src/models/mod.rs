//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod campaign;
pub mod targeting_rule;

pub use campaign::*;
pub use targeting_rule::*;
