//! Bucket sets: every item tagged with the bucket's id.

use crate::content::{Item, ItemStore};
use crate::error::ScoringError;
use crate::events::{ScoringEvent, BUCKET_COMPLETE, BUCKET_PASSED};
use crate::policies::{
    all_items_complete, sum_item_field, AggregatePolicy, MAX_SCORE_FIELD, MIN_SCORE_FIELD,
    SCORE_FIELD,
};
use crate::set::{ScoringSet, SetConfig, SetContext, SetPolicy};
use crate::types::{BUCKET, BUCKETS};
use serde::Deserialize;
use tracing::debug;

/// Item attribute listing bucket ids on content items, and the bucket
/// definitions on the course item.
pub const BUCKETS_FIELD: &str = "_buckets";

#[derive(Debug, Clone, Default, Deserialize)]
struct BucketsSettings {
    #[serde(rename = "_isEnabled", default)]
    is_enabled: bool,
    #[serde(rename = "_items", default)]
    items: Vec<SetConfig>,
}

#[derive(Debug, Clone, Default)]
pub struct BucketPolicy;

impl BucketPolicy {
    pub fn new() -> Self {
        Self
    }

    fn is_tagged(item: &Item, bucket_id: &str) -> bool {
        item.get(BUCKETS_FIELD)
            .and_then(|value| value.as_array())
            .map(|ids| ids.iter().any(|id| id.as_str() == Some(bucket_id)))
            .unwrap_or(false)
    }
}

impl SetPolicy for BucketPolicy {
    fn set_type(&self) -> &str {
        BUCKET
    }

    fn raw_models<'a>(&self, set: &ScoringSet, ctx: &SetContext<'a>) -> Option<Vec<&'a Item>> {
        let bucket_id = set.id();
        Some(ctx.store().filter(&|item| Self::is_tagged(item, bucket_id)))
    }

    fn min_score(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> f64 {
        sum_item_field(set, ctx, MIN_SCORE_FIELD)
    }

    fn max_score(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> f64 {
        sum_item_field(set, ctx, MAX_SCORE_FIELD)
    }

    fn score(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> f64 {
        sum_item_field(set, ctx, SCORE_FIELD)
    }

    fn is_complete(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> bool {
        all_items_complete(set, ctx)
    }

    fn is_passed(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> bool {
        self.is_complete(set, ctx)
    }

    fn on_completed(&self, set: &ScoringSet, ctx: &SetContext<'_>) {
        ctx.registry()
            .emit(ScoringEvent::with_now(BUCKET_COMPLETE, set.id(), set.set_type()));
    }

    fn on_passed(&self, set: &ScoringSet, ctx: &SetContext<'_>) {
        ctx.registry()
            .emit(ScoringEvent::with_now(BUCKET_PASSED, set.id(), set.set_type()));
    }
}

/// The `buckets` aggregate followed by one set per bucket defined on the
/// course item. Disabled or absent definitions give only the aggregate.
pub fn discover(store: &dyn ItemStore) -> Result<Vec<ScoringSet>, ScoringError> {
    let mut sets = vec![ScoringSet::new(
        SetConfig::new(BUCKETS).with_title("Buckets"),
        AggregatePolicy::buckets(),
    )];

    let Some(course) = store.items().into_iter().find(|item| item.item_type == "course") else {
        debug!("No course item, skipping bucket definitions");
        return Ok(sets);
    };
    let Some(value) = course.get(BUCKETS_FIELD) else {
        return Ok(sets);
    };
    let settings: BucketsSettings = serde_json::from_value(value.clone()).map_err(|e| {
        ScoringError::InvalidSetConfig(format!("{} on course: {}", BUCKETS_FIELD, e))
    })?;
    if !settings.is_enabled {
        debug!("Buckets disabled");
        return Ok(sets);
    }

    for config in settings.items {
        if config.id.is_empty() {
            return Err(ScoringError::InvalidSetConfig(
                "bucket definition without _id".to_string(),
            ));
        }
        sets.push(ScoringSet::new(config, BucketPolicy::new()));
    }
    Ok(sets)
}
