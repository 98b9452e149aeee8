//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod campaign_repo;
pub mod rule_repo;

pub use campaign_repo::CampaignRepository;
pub use rule_repo::RuleRepository;
