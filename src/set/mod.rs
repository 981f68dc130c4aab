//! Scoring Sets
//!
//! A set is a named, typed collection of content items with score and
//! completion accessors. Root sets are registered once in the [`Registry`];
//! derived sets are produced by composition, hold the set they were narrowed
//! by as `subset_parent`, and live only as long as the query result.

pub mod policy;

pub use policy::SetPolicy;

use crate::composition::{self, SetPath};
use crate::content::{Item, ItemStore};
use crate::hierarchy::{filter_intersecting_hierarchy, unique_by_id};
use crate::registry::Registry;
use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// Percentage position of `score` between `min_score` and `max_score`.
///
/// Not guarded: equal bounds give NaN or an infinity.
pub fn scaled_score_from_min_max(score: f64, min_score: f64, max_score: f64) -> f64 {
    let distance = max_score - min_score;
    let relative_score = score - min_score;
    100.0 * relative_score / distance
}

/// Shared configuration of a set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetConfig {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, alias = "_isScoreIncluded")]
    pub is_score_included: bool,

    #[serde(default, alias = "_isCompletionRequired")]
    pub is_completion_required: bool,
}

impl SetConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn score_included(mut self, value: bool) -> Self {
        self.is_score_included = value;
        self
    }

    pub fn completion_required(mut self, value: bool) -> Self {
        self.is_completion_required = value;
        self
    }
}

/// Everything a set query reads: the item store and the registry of root sets.
#[derive(Clone, Copy)]
pub struct SetContext<'a> {
    store: &'a dyn ItemStore,
    registry: &'a Registry,
}

impl<'a> SetContext<'a> {
    pub fn new(store: &'a dyn ItemStore, registry: &'a Registry) -> Self {
        Self { store, registry }
    }

    pub fn store(&self) -> &'a dyn ItemStore {
        self.store
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }
}

/// Outcome of one [`ScoringSet::update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTransition {
    pub set_id: String,
    pub set_type: String,
    /// Became complete during this update.
    pub completed: bool,
    /// Became passed during this update.
    pub passed: bool,
}

impl SetTransition {
    pub fn fired(&self) -> bool {
        self.completed || self.passed
    }
}

/// A root or derived set of content items.
#[derive(Debug, Clone)]
pub struct ScoringSet {
    config: SetConfig,
    policy: Rc<dyn SetPolicy>,
    subset_parent: Option<Box<ScoringSet>>,
    was_complete: Cell<bool>,
    was_passed: Cell<bool>,
}

impl ScoringSet {
    /// Create a root set. It takes part in queries once registered.
    pub fn new(config: SetConfig, policy: impl SetPolicy + 'static) -> Self {
        Self::with_policy(config, Rc::new(policy))
    }

    pub fn with_policy(config: SetConfig, policy: Rc<dyn SetPolicy>) -> Self {
        Self {
            config,
            policy,
            subset_parent: None,
            was_complete: Cell::new(false),
            was_passed: Cell::new(false),
        }
    }

    /// Derived instance of `source`'s family, narrowed by `parent`.
    pub(crate) fn derive(source: &ScoringSet, parent: ScoringSet, ctx: &SetContext<'_>) -> Self {
        let set = Self {
            config: source.config.clone(),
            policy: Rc::clone(&source.policy),
            subset_parent: Some(Box::new(parent)),
            was_complete: Cell::new(false),
            was_passed: Cell::new(false),
        };
        set.prime(ctx);
        set
    }

    /// Cache the current completion and pass state as the transition baseline.
    pub(crate) fn prime(&self, ctx: &SetContext<'_>) {
        self.was_complete.set(self.is_complete(ctx));
        self.was_passed.set(self.is_passed(ctx));
    }

    pub fn id(&self) -> &str {
        &self.config.id
    }

    pub fn set_type(&self) -> &str {
        self.policy.set_type()
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn is_score_included(&self) -> bool {
        self.config.is_score_included
    }

    pub fn is_completion_required(&self) -> bool {
        self.config.is_completion_required
    }

    pub fn config(&self) -> &SetConfig {
        &self.config
    }

    pub fn policy(&self) -> &dyn SetPolicy {
        self.policy.as_ref()
    }

    pub fn subset_parent(&self) -> Option<&ScoringSet> {
        self.subset_parent.as_deref()
    }

    pub fn is_derived(&self) -> bool {
        self.subset_parent.is_some()
    }

    /// Resolved membership: the policy's raw list finished by [`Self::filter_models`].
    pub fn models<'a>(&self, ctx: &SetContext<'a>) -> Option<Vec<&'a Item>> {
        self.filter_models(ctx, self.policy.raw_models(self, ctx))
    }

    /// Deduplicate, narrow to the subset parent's hierarchy, drop unavailable
    /// items. `None` passes through.
    pub fn filter_models<'a>(
        &self,
        ctx: &SetContext<'a>,
        models: Option<Vec<&'a Item>>,
    ) -> Option<Vec<&'a Item>> {
        let mut models = unique_by_id(models?);
        if let Some(parent_models) = self.subset_parent().and_then(|parent| parent.models(ctx)) {
            models = filter_intersecting_hierarchy(ctx.store(), &models, &parent_models);
        }
        models.retain(|item| item.is_available);
        Some(models)
    }

    pub fn min_score(&self, ctx: &SetContext<'_>) -> f64 {
        self.policy.min_score(self, ctx)
    }

    pub fn max_score(&self, ctx: &SetContext<'_>) -> f64 {
        self.policy.max_score(self, ctx)
    }

    pub fn score(&self, ctx: &SetContext<'_>) -> f64 {
        self.policy.score(self, ctx)
    }

    pub fn scaled_score(&self, ctx: &SetContext<'_>) -> f64 {
        scaled_score_from_min_max(self.score(ctx), self.min_score(ctx), self.max_score(ctx))
    }

    pub fn is_complete(&self, ctx: &SetContext<'_>) -> bool {
        self.policy.is_complete(self, ctx)
    }

    pub fn is_passed(&self, ctx: &SetContext<'_>) -> bool {
        self.policy.is_passed(self, ctx)
    }

    /// Re-evaluate completion and pass state against the cached baseline.
    ///
    /// Hooks fire only on a transition to true relative to the cached value;
    /// the cache then takes the new value.
    pub fn update(&self, ctx: &SetContext<'_>) -> SetTransition {
        let is_complete = self.is_complete(ctx);
        let completed = is_complete && is_complete != self.was_complete.get();
        self.was_complete.set(is_complete);
        if completed {
            debug!(set_id = %self.id(), set_type = %self.set_type(), "Set completed");
            self.policy.on_completed(self, ctx);
        }

        let is_passed = self.is_passed(ctx);
        let passed = is_passed && is_passed != self.was_passed.get();
        self.was_passed.set(is_passed);
        if passed {
            debug!(set_id = %self.id(), set_type = %self.set_type(), "Set passed");
            self.policy.on_passed(self, ctx);
        }

        SetTransition {
            set_id: self.id().to_string(),
            set_type: self.set_type().to_string(),
            completed,
            passed,
        }
    }

    /// Prospective child sets of this set.
    pub fn subsets(&self, ctx: &SetContext<'_>) -> Vec<ScoringSet> {
        self.policy.subsets(self, ctx)
    }

    pub fn get_subset_by_id(&self, ctx: &SetContext<'_>, set_id: &str) -> Option<ScoringSet> {
        composition::get_subset_by_id(ctx, set_id, Some(self))
    }

    pub fn get_subsets_by_type(&self, ctx: &SetContext<'_>, set_type: &str) -> Vec<ScoringSet> {
        composition::get_subsets_by_type(ctx, set_type, Some(self))
    }

    pub fn get_subsets_by_model_id(
        &self,
        ctx: &SetContext<'_>,
        item_id: &ItemId,
    ) -> Vec<ScoringSet> {
        composition::get_subsets_by_model_id(ctx, item_id, Some(self))
    }

    pub fn get_subset_by_path(
        &self,
        ctx: &SetContext<'_>,
        path: impl Into<SetPath>,
    ) -> Option<ScoringSet> {
        composition::get_subset_by_path(ctx, &path.into(), Some(self))
    }
}
