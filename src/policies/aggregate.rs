//! Aggregate sets over every root set of one member family.
//!
//! `assessments` and `buckets` are registered like any other root set. As a
//! root they cover all members; once derived they cover only the members
//! intersected with themselves, which is what makes paths such as
//! `engagement.assessments` meaningful.

use crate::composition;
use crate::content::Item;
use crate::hierarchy::unique_by_id;
use crate::set::{ScoringSet, SetContext, SetPolicy};
use crate::types::{ASSESSMENT, ASSESSMENTS, BUCKET, BUCKETS};

#[derive(Debug, Clone)]
pub struct AggregatePolicy {
    set_type: &'static str,
    member_type: &'static str,
}

impl AggregatePolicy {
    pub fn new(set_type: &'static str, member_type: &'static str) -> Self {
        Self {
            set_type,
            member_type,
        }
    }

    pub fn assessments() -> Self {
        Self::new(ASSESSMENTS, ASSESSMENT)
    }

    pub fn buckets() -> Self {
        Self::new(BUCKETS, BUCKET)
    }

    pub fn member_type(&self) -> &str {
        self.member_type
    }

    fn members(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> Vec<ScoringSet> {
        self.subsets(set, ctx)
    }
}

impl SetPolicy for AggregatePolicy {
    fn set_type(&self) -> &str {
        self.set_type
    }

    // Union of the root members; the engine narrows it for derived aggregates.
    fn raw_models<'a>(&self, _set: &ScoringSet, ctx: &SetContext<'a>) -> Option<Vec<&'a Item>> {
        let members = composition::get_subsets_by_type(ctx, self.member_type, None);
        Some(unique_by_id(
            members
                .iter()
                .filter_map(|member| member.models(ctx))
                .flatten(),
        ))
    }

    fn min_score(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> f64 {
        self.members(set, ctx)
            .iter()
            .map(|member| member.min_score(ctx))
            .sum()
    }

    fn max_score(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> f64 {
        self.members(set, ctx)
            .iter()
            .map(|member| member.max_score(ctx))
            .sum()
    }

    fn score(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> f64 {
        self.members(set, ctx)
            .iter()
            .map(|member| member.score(ctx))
            .sum()
    }

    fn is_complete(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> bool {
        self.members(set, ctx)
            .iter()
            .all(|member| member.is_complete(ctx))
    }

    fn is_passed(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> bool {
        let members = self.members(set, ctx);
        !members.is_empty() && members.iter().all(|member| member.is_passed(ctx))
    }

    fn subsets(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> Vec<ScoringSet> {
        let parent = set.is_derived().then_some(set);
        composition::get_subsets_by_type(ctx, self.member_type, parent)
    }
}
