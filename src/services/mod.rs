//! Business logic services

pub mod delivery_service;

pub use delivery_service::{DeliveryMatch, DeliveryService};
