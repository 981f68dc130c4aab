//! Set policy contract.
//!
//! A policy supplies the membership, scoring and completion rules for one
//! family of sets. Every [`ScoringSet`] carries a shared handle to its policy,
//! so a set derived from it during composition keeps the same family.

use crate::composition;
use crate::content::Item;
use crate::set::{ScoringSet, SetContext};
use std::fmt;

pub trait SetPolicy: fmt::Debug {
    /// Type tag of the family, e.g. `assessment` or `bucket`.
    fn set_type(&self) -> &str;

    /// Unfiltered membership of `set`.
    ///
    /// `None` means the family has no item list for this set. The engine
    /// finishes the list through [`ScoringSet::filter_models`].
    fn raw_models<'a>(&self, set: &ScoringSet, ctx: &SetContext<'a>) -> Option<Vec<&'a Item>>;

    fn min_score(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> f64;

    fn max_score(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> f64;

    fn score(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> f64;

    fn is_complete(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> bool;

    fn is_passed(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> bool;

    /// Runs once per observed incomplete -> complete transition.
    fn on_completed(&self, _set: &ScoringSet, _ctx: &SetContext<'_>) {}

    /// Runs once per observed not passed -> passed transition.
    fn on_passed(&self, _set: &ScoringSet, _ctx: &SetContext<'_>) {}

    /// Prospective children of `set`: every other root set intersected with it.
    fn subsets(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> Vec<ScoringSet> {
        composition::get_subsets(ctx, Some(set))
    }
}
