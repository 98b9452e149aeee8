//! Targeting rule evaluation

use std::sync::Arc;

use crate::models::{RuleType, TargetingRule};

use super::{
    context::RequestContext,
    observer::{DecisionObserver, RuleDecision, RuleOutcome, TracingObserver},
};

/// Decides whether a campaign's rules admit a request context
#[derive(Clone)]
pub struct RuleEvaluator {
    observer: Arc<dyn DecisionObserver>,
}

impl Default for RuleEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEvaluator").finish_non_exhaustive()
    }
}

impl RuleEvaluator {
    /// Evaluator reporting decisions through `tracing`
    pub fn new() -> Self {
        Self::with_observer(Arc::new(TracingObserver))
    }

    pub fn with_observer(observer: Arc<dyn DecisionObserver>) -> Self {
        Self { observer }
    }

    /// Check that every rule passes for `context`.
    ///
    /// Rules are ANDed and evaluation stops at the first failure. A campaign
    /// without rules matches every context.
    pub fn matches(&self, rules: &[TargetingRule], context: &RequestContext) -> bool {
        rules.iter().all(|rule| {
            let decision = Self::decide(rule, context);
            self.observer.on_decision(&decision);
            decision.outcome.passed()
        })
    }

    fn decide(rule: &TargetingRule, context: &RequestContext) -> RuleDecision {
        // An absent dimension compares as the empty string
        let input = context
            .get(&rule.dimension)
            .unwrap_or_default()
            .to_lowercase();
        let members = rule.values.normalized_set();

        let outcome = match rule.rule_type {
            RuleType::Include if members.contains(&input) => RuleOutcome::Passed,
            RuleType::Exclude if !members.contains(&input) => RuleOutcome::Passed,
            RuleType::Include | RuleType::Exclude => RuleOutcome::Failed,
            RuleType::Unrecognized(_) => RuleOutcome::Rejected,
        };

        RuleDecision {
            campaign_id: rule.campaign_id.clone(),
            rule_id: rule.id.clone(),
            dimension: rule.dimension.clone(),
            rule_type: rule.rule_type.to_string(),
            input,
            outcome,
        }
    }
}
