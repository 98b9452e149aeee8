//! Rule decision hook
//!
//! The evaluator reports each rule it decides on. Observers are purely
//! diagnostic: nothing they do can change a match result.

use serde::Serialize;

/// Outcome of a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOutcome {
    Passed,
    Failed,
    /// Rule type was not recognized; the rule failed closed
    Rejected,
}

impl RuleOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Rejected => "rejected",
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// One evaluated rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDecision {
    pub campaign_id: String,
    pub rule_id: String,
    pub dimension: String,
    pub rule_type: String,
    /// Normalized context value the rule was checked against
    pub input: String,
    pub outcome: RuleOutcome,
}

/// Receives per-rule decisions
pub trait DecisionObserver: Send + Sync {
    fn on_decision(&self, decision: &RuleDecision);
}

/// Forwards decisions as structured tracing events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DecisionObserver for TracingObserver {
    fn on_decision(&self, decision: &RuleDecision) {
        match decision.outcome {
            RuleOutcome::Rejected => tracing::warn!(
                target: "targeting_engine::decision",
                campaign_id = %decision.campaign_id,
                rule_id = %decision.rule_id,
                dimension = %decision.dimension,
                rule_type = %decision.rule_type,
                "Unknown rule type, failing campaign closed"
            ),
            outcome => tracing::debug!(
                target: "targeting_engine::decision",
                campaign_id = %decision.campaign_id,
                rule_id = %decision.rule_id,
                dimension = %decision.dimension,
                rule_type = %decision.rule_type,
                input = %decision.input,
                outcome = outcome.as_str(),
                "Evaluated targeting rule"
            ),
        }
    }
}
