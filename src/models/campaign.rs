//! Campaign model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::constants::campaign_status;

/// Campaign database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, Eq)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub image: String,
    pub cta: String,
    pub status: String,
}

impl Campaign {
    /// Parsed lifecycle status
    pub fn status(&self) -> CampaignStatus {
        CampaignStatus::from_db(&self.status)
    }

    /// Check if the campaign may be handed to the evaluator
    pub fn is_active(&self) -> bool {
        self.status() == CampaignStatus::Active
    }
}

/// Campaign lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CampaignStatus {
    Active,
    Inactive,
}

impl CampaignStatus {
    /// Get status as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => campaign_status::ACTIVE,
            Self::Inactive => campaign_status::INACTIVE,
        }
    }

    /// Anything other than an exact `ACTIVE` is treated as inactive
    pub fn from_db(raw: &str) -> Self {
        if raw == campaign_status::ACTIVE {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
