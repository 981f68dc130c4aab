//! Scoring report: course aggregates plus one summary row per set.

use crate::content::ItemStore;
use crate::registry::Registry;
use crate::set::{ScoringSet, SetContext};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of one root or derived set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub set_type: String,
    pub title: String,
    /// Dotted chain of ids from the outermost subset parent to this set.
    pub path: String,
    pub is_score_included: bool,
    pub is_completion_required: bool,
    pub is_complete: bool,
    pub is_passed: bool,
    pub min_score: f64,
    pub max_score: f64,
    pub score: f64,
    /// `None` when min and max coincide.
    pub scaled_score: Option<f64>,
    /// Resolved item ids; `None` when the family has no item list.
    pub models: Option<Vec<String>>,
}

impl SetSummary {
    pub fn from_set(set: &ScoringSet, ctx: &SetContext<'_>) -> Self {
        Self {
            id: set.id().to_string(),
            set_type: set.set_type().to_string(),
            title: set.title().to_string(),
            path: set_path(set),
            is_score_included: set.is_score_included(),
            is_completion_required: set.is_completion_required(),
            is_complete: set.is_complete(ctx),
            is_passed: set.is_passed(ctx),
            min_score: set.min_score(ctx),
            max_score: set.max_score(ctx),
            score: set.score(ctx),
            scaled_score: finite(set.scaled_score(ctx)),
            models: set
                .models(ctx)
                .map(|models| models.iter().map(|item| item.id.to_string()).collect()),
        }
    }
}

fn set_path(set: &ScoringSet) -> String {
    let mut ids = vec![set.id()];
    let mut parent = set.subset_parent();
    while let Some(next) = parent {
        ids.push(next.id());
        parent = next.subset_parent();
    }
    ids.reverse();
    ids.join(".")
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Course-wide aggregates over the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringReport {
    pub generated_at: String,
    pub is_complete: bool,
    pub min_score: f64,
    pub max_score: f64,
    pub score: f64,
    pub scaled_score: Option<f64>,
    pub sets: Vec<SetSummary>,
}

impl ScoringReport {
    pub fn build(registry: &Registry, store: &dyn ItemStore) -> Self {
        let ctx = registry.context(store);
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            is_complete: registry.is_complete(store),
            min_score: registry.min_score(store),
            max_score: registry.max_score(store),
            score: registry.score(store),
            scaled_score: finite(registry.scaled_score(store)),
            sets: registry
                .subsets()
                .iter()
                .map(|set| SetSummary::from_set(set, &ctx))
                .collect(),
        }
    }
}
