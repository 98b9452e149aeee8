//! Store capabilities consumed by the delivery service
//!
//! Both stores are read-only from the engine's point of view and are injected
//! as trait objects so the Postgres repositories can be swapped for fakes.

use async_trait::async_trait;

use crate::{
    error::StorageResult,
    models::{Campaign, TargetingRule},
};

/// Source of campaigns eligible for evaluation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// All campaigns with status `ACTIVE`; empty when there are none
    async fn fetch_active(&self) -> StorageResult<Vec<Campaign>>;
}

/// Source of targeting rules
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RuleStore: Send + Sync {
    /// Every rule owned by `campaign_id`, in no particular order
    async fn fetch_rules(&self, campaign_id: &str) -> StorageResult<Vec<TargetingRule>>;
}
