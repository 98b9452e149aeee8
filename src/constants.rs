//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default log filter when neither `RUST_LOG` nor config overrides it
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

/// Default time to wait for a pooled connection, in seconds
pub const DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// DELIVERY DEFAULTS
// =============================================================================

/// Deadline for the campaign + rule fetch fan-out of a single request
pub const DEFAULT_DELIVERY_FETCH_TIMEOUT_MS: u64 = 2_000;

/// How many rule fetches of one request may be in flight at once
pub const DEFAULT_RULE_FETCH_CONCURRENCY: usize = 8;

// =============================================================================
// REQUEST PARAMETERS
// =============================================================================

/// Query parameters every delivery lookup must carry, in validation order
pub const REQUIRED_PARAMS: [&str; 3] = [dimensions::APP, dimensions::COUNTRY, dimensions::OS];

/// Targeting dimensions
pub mod dimensions {
    pub const APP: &str = "app";
    pub const COUNTRY: &str = "country";
    pub const OS: &str = "os";
}

/// Stored rule type values
pub mod rule_types {
    pub const INCLUDE: &str = "INCLUDE";
    pub const EXCLUDE: &str = "EXCLUDE";
}

/// Stored campaign status values
pub mod campaign_status {
    pub const ACTIVE: &str = "ACTIVE";
    pub const INACTIVE: &str = "INACTIVE";
}

// =============================================================================
// ERROR MESSAGES
// =============================================================================

/// User-facing message for any campaign store failure
pub const CAMPAIGN_FETCH_FAILED: &str = "failed to fetch campaigns";
