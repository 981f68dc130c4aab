//! Set registry: every root set, in registration order.
//!
//! Provides lookup by id, type, item membership and path, the course-wide
//! completion and score aggregates, and the bulk update that runs when item
//! completion changes. Derived sets are never stored here.

use crate::composition::{self, SetPath};
use crate::content::{Item, ItemStore};
use crate::error::ScoringError;
use crate::events::{ScoringBus, ScoringEvent};
use crate::hierarchy::unique_by_id;
use crate::set::{scaled_score_from_min_max, ScoringSet, SetContext, SetTransition};
use crate::types::ItemId;
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
pub struct Registry {
    sets: Vec<ScoringSet>,
    bus: Option<ScoringBus>,
}

impl Registry {
    /// Create an empty registry without an event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry publishing policy events on `bus`.
    pub fn with_bus(bus: ScoringBus) -> Self {
        Self {
            sets: Vec::new(),
            bus: Some(bus),
        }
    }

    pub fn context<'a>(&'a self, store: &'a dyn ItemStore) -> SetContext<'a> {
        SetContext::new(store, self)
    }

    /// Register a root set.
    ///
    /// Fails before any mutation when the id is already taken or the set is
    /// derived. The set's completion and pass baseline is cached against the
    /// registry that now contains it.
    pub fn register(&mut self, store: &dyn ItemStore, set: ScoringSet) -> Result<(), ScoringError> {
        if set.is_derived() {
            return Err(ScoringError::DerivedRegistration(set.id().to_string()));
        }
        if self.sets.iter().any(|registered| registered.id() == set.id()) {
            return Err(ScoringError::DuplicateRegistration(set.id().to_string()));
        }

        self.sets.push(set);
        let ctx = SetContext::new(store, self);
        if let Some(registered) = self.sets.last() {
            registered.prime(&ctx);
            debug!(
                set_id = %registered.id(),
                set_type = %registered.set_type(),
                "Registered scoring set"
            );
        }
        Ok(())
    }

    /// Re-cache the completion and pass baseline of every root set.
    ///
    /// Aggregate sets read sets registered after them, so their baseline is
    /// only meaningful once registration is finished.
    pub fn prime_all(&self, store: &dyn ItemStore) {
        let ctx = self.context(store);
        for set in &self.sets {
            set.prime(&ctx);
        }
        debug!(sets = self.sets.len(), "Scoring set baselines primed");
    }

    /// All root sets in registration order.
    pub fn subsets(&self) -> &[ScoringSet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn completion_sets(&self) -> Vec<&ScoringSet> {
        self.sets
            .iter()
            .filter(|set| set.is_completion_required())
            .collect()
    }

    pub fn scoring_sets(&self) -> Vec<&ScoringSet> {
        self.sets.iter().filter(|set| set.is_score_included()).collect()
    }

    /// True when no completion-required set is incomplete.
    pub fn is_complete(&self, store: &dyn ItemStore) -> bool {
        let ctx = self.context(store);
        self.completion_sets()
            .iter()
            .all(|set| set.is_complete(&ctx))
    }

    pub fn min_score(&self, store: &dyn ItemStore) -> f64 {
        let ctx = self.context(store);
        self.scoring_sets().iter().map(|set| set.min_score(&ctx)).sum()
    }

    pub fn max_score(&self, store: &dyn ItemStore) -> f64 {
        let ctx = self.context(store);
        self.scoring_sets().iter().map(|set| set.max_score(&ctx)).sum()
    }

    pub fn score(&self, store: &dyn ItemStore) -> f64 {
        let ctx = self.context(store);
        self.scoring_sets().iter().map(|set| set.score(&ctx)).sum()
    }

    pub fn scaled_score(&self, store: &dyn ItemStore) -> f64 {
        scaled_score_from_min_max(
            self.score(store),
            self.min_score(store),
            self.max_score(store),
        )
    }

    /// Union of every root set's resolved items, deduplicated by id.
    pub fn models<'a>(&'a self, store: &'a dyn ItemStore) -> Vec<&'a Item> {
        let ctx = self.context(store);
        unique_by_id(self.sets.iter().filter_map(|set| set.models(&ctx)).flatten())
    }

    pub fn get_subset_by_id(&self, set_id: &str) -> Option<&ScoringSet> {
        self.sets.iter().find(|set| set.id() == set_id)
    }

    pub fn get_subsets_by_type(&self, set_type: &str) -> Vec<&ScoringSet> {
        self.sets
            .iter()
            .filter(|set| set.set_type() == set_type)
            .collect()
    }

    /// Root sets whose items intersect the hierarchy of `item_id`.
    pub fn get_subsets_by_model_id<'a>(
        &'a self,
        store: &'a dyn ItemStore,
        item_id: &ItemId,
    ) -> Vec<&'a ScoringSet> {
        composition::sets_intersecting_item(&self.context(store), item_id, None)
    }

    /// Root set or intersection set named by `path`.
    pub fn get_subset_by_path(
        &self,
        store: &dyn ItemStore,
        path: impl Into<SetPath>,
    ) -> Option<ScoringSet> {
        composition::get_subset_by_path(&self.context(store), &path.into(), None)
    }

    /// Re-evaluate every root set once, in registration order.
    pub fn update(&self, store: &dyn ItemStore) -> Vec<SetTransition> {
        let ctx = self.context(store);
        let transitions: Vec<SetTransition> =
            self.sets.iter().map(|set| set.update(&ctx)).collect();
        let fired = transitions.iter().filter(|t| t.fired()).count();
        if fired > 0 {
            info!(sets = self.sets.len(), fired, "Scoring sets updated");
        } else {
            debug!(sets = self.sets.len(), "Scoring sets updated");
        }
        transitions
    }

    /// Change notification for an item's interaction completion flag.
    pub fn item_completion_changed(
        &self,
        store: &dyn ItemStore,
        item_id: &ItemId,
    ) -> Vec<SetTransition> {
        debug!(item_id = %item_id, "Item completion changed");
        self.update(store)
    }

    /// Publish `event` on the bus, if one is attached.
    pub fn emit(&self, event: ScoringEvent) {
        let Some(bus) = &self.bus else {
            return;
        };
        if let Err(e) = bus.emit(event) {
            warn!(event_type = %e.0.event_type, "Scoring event receiver dropped");
        }
    }
}
