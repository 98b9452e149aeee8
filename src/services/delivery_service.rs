//! Delivery service
//!
//! Selects the campaigns to serve for one request context: fetch the active
//! campaigns, fetch each campaign's rules, and keep the campaigns whose rules
//! all pass.

use std::sync::Arc;

use futures::{stream, StreamExt};
use tracing::{debug, instrument, warn};

use crate::{
    config::DeliveryConfig,
    db::{CampaignStore, RuleStore},
    error::{StorageError, StorageResult},
    models::{Campaign, TargetingRule},
    targeting::{RequestContext, RuleEvaluator},
};

/// A campaign selected for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryMatch {
    pub id: String,
    pub image: String,
    pub cta: String,
}

impl From<Campaign> for DeliveryMatch {
    fn from(campaign: Campaign) -> Self {
        Self {
            id: campaign.id,
            image: campaign.image,
            cta: campaign.cta,
        }
    }
}

/// Delivery service for campaign selection
#[derive(Clone)]
pub struct DeliveryService {
    campaigns: Arc<dyn CampaignStore>,
    rules: Arc<dyn RuleStore>,
    evaluator: RuleEvaluator,
    settings: DeliveryConfig,
}

impl DeliveryService {
    pub fn new(
        campaigns: Arc<dyn CampaignStore>,
        rules: Arc<dyn RuleStore>,
        settings: DeliveryConfig,
    ) -> Self {
        Self {
            campaigns,
            rules,
            evaluator: RuleEvaluator::new(),
            settings,
        }
    }

    /// Replace the default tracing-backed evaluator
    pub fn with_evaluator(mut self, evaluator: RuleEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Select the campaigns matching `context`, in store order.
    ///
    /// A failing campaign fetch fails the whole selection. A failing rule
    /// fetch only drops that campaign. All store calls share one deadline.
    #[instrument(skip_all)]
    pub async fn select_matches(
        &self,
        context: &RequestContext,
    ) -> StorageResult<Vec<DeliveryMatch>> {
        let deadline = self.settings.fetch_timeout;

        tokio::time::timeout(deadline, self.select_unbounded(context))
            .await
            .map_err(|_| StorageError::Timeout(deadline))?
    }

    async fn select_unbounded(
        &self,
        context: &RequestContext,
    ) -> StorageResult<Vec<DeliveryMatch>> {
        let campaigns: Vec<Campaign> = self
            .campaigns
            .fetch_active()
            .await?
            .into_iter()
            .filter(Campaign::is_active)
            .collect();
        debug!(count = campaigns.len(), "Fetched active campaigns");

        let mut lookups = Vec::with_capacity(campaigns.len());
        for campaign in &campaigns {
            lookups.push(self.rules.fetch_rules(&campaign.id));
        }

        // buffered() yields results in input order regardless of completion order
        let rule_sets: Vec<StorageResult<Vec<TargetingRule>>> = stream::iter(lookups)
            .buffered(self.settings.rule_fetch_concurrency.max(1))
            .collect()
            .await;

        let mut matched = Vec::new();
        for (campaign, rules) in campaigns.into_iter().zip(rule_sets) {
            let rules = match rules {
                Ok(rules) => rules,
                Err(e) => {
                    warn!(
                        campaign_id = %campaign.id,
                        error = %e,
                        "Error fetching rules for campaign"
                    );
                    continue;
                }
            };

            if self.evaluator.matches(&rules, context) {
                matched.push(DeliveryMatch::from(campaign));
            }
        }

        debug!(matched = matched.len(), "Campaign selection complete");
        Ok(matched)
    }
}
