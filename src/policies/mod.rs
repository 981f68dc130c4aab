//! Built-in set policies and registry bootstrap.
//!
//! Each family discovers its root sets from course content and registers an
//! aggregate set ahead of them.

pub mod aggregate;
pub mod assessment;
pub mod bucket;

pub use aggregate::AggregatePolicy;
pub use assessment::AssessmentPolicy;
pub use bucket::BucketPolicy;

use crate::content::ItemStore;
use crate::error::ScoringError;
use crate::hierarchy::expand_with_descendants;
use crate::registry::Registry;
use crate::set::{ScoringSet, SetContext};
use crate::types::{ASSESSMENT, BUCKET};
use tracing::info;

/// Item attribute holding the achieved score.
pub const SCORE_FIELD: &str = "_score";
/// Item attribute holding the lowest possible score.
pub const MIN_SCORE_FIELD: &str = "_minScore";
/// Item attribute holding the highest possible score.
pub const MAX_SCORE_FIELD: &str = "_maxScore";

/// Families enabled when configuration names none.
pub fn default_families() -> Vec<String> {
    vec![ASSESSMENT.to_string(), BUCKET.to_string()]
}

/// Register the sets of every family in `families`, in order.
///
/// Baselines are primed once every family is registered. Returns the number
/// of sets registered.
pub fn bootstrap(
    registry: &mut Registry,
    store: &dyn ItemStore,
    families: &[String],
) -> Result<usize, ScoringError> {
    let mut registered = 0;
    for family in families {
        let sets = match family.as_str() {
            ASSESSMENT => assessment::discover(store)?,
            BUCKET => bucket::discover(store)?,
            other => return Err(ScoringError::UnknownPolicy(other.to_string())),
        };
        for set in sets {
            registry.register(store, set)?;
            registered += 1;
        }
    }
    registry.prime_all(store);
    info!(registered, families = families.len(), "Scoring sets bootstrapped");
    Ok(registered)
}

/// Sum of a numeric attribute over a set's items and their descendants.
pub(crate) fn sum_item_field(set: &ScoringSet, ctx: &SetContext<'_>, field: &str) -> f64 {
    let Some(models) = set.models(ctx) else {
        return 0.0;
    };
    expand_with_descendants(ctx.store(), &models)
        .iter()
        .filter_map(|item| item.number(field))
        .sum()
}

/// Every resolved item is complete. A set without an item list is not.
pub(crate) fn all_items_complete(set: &ScoringSet, ctx: &SetContext<'_>) -> bool {
    set.models(ctx)
        .map(|models| models.iter().all(|item| item.is_complete))
        .unwrap_or(false)
}
