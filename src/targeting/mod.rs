//! Targeting engine
//!
//! Decides which campaigns a request context is eligible for:
//! - [`ContextExtractor`] builds a [`RequestContext`] from query parameters
//! - [`RuleEvaluator`] ANDs a campaign's targeting rules against it
//! - [`DecisionObserver`] receives every per-rule decision for diagnostics

pub mod context;
pub mod evaluator;
pub mod observer;

pub use context::{ContextExtractor, RequestContext};
pub use evaluator::RuleEvaluator;
pub use observer::{DecisionObserver, RuleDecision, RuleOutcome, TracingObserver};
