//! Assessment sets: the direct children of an assessment-enabled item.

use crate::content::{Item, ItemStore};
use crate::error::ScoringError;
use crate::events::{ScoringEvent, ASSESSMENTS_COMPLETE, ASSESSMENTS_PASSED};
use crate::policies::{
    all_items_complete, sum_item_field, AggregatePolicy, MAX_SCORE_FIELD, MIN_SCORE_FIELD,
    SCORE_FIELD,
};
use crate::set::{ScoringSet, SetConfig, SetContext, SetPolicy};
use crate::types::{ItemId, ASSESSMENT, ASSESSMENTS};
use serde::Deserialize;

/// Item attribute enabling an assessment.
pub const ASSESSMENT_FIELD: &str = "_assessment";

#[derive(Debug, Clone, Default, Deserialize)]
struct AssessmentSettings {
    #[serde(rename = "_isEnabled", default)]
    is_enabled: bool,
    #[serde(rename = "_isScoreIncluded", default)]
    is_score_included: bool,
    #[serde(rename = "_isCompletionRequired", default)]
    is_completion_required: bool,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AssessmentPolicy {
    model: ItemId,
}

impl AssessmentPolicy {
    pub fn new(model: impl Into<ItemId>) -> Self {
        Self {
            model: model.into(),
        }
    }

    /// The assessment item whose children form the set.
    pub fn model(&self) -> &ItemId {
        &self.model
    }

    /// Root set for `item`, identified by the item id.
    pub fn root_set(item: &Item, config: SetConfig) -> ScoringSet {
        let config = SetConfig {
            id: item.id.to_string(),
            ..config
        };
        ScoringSet::new(config, AssessmentPolicy::new(item.id.clone()))
    }
}

impl SetPolicy for AssessmentPolicy {
    fn set_type(&self) -> &str {
        ASSESSMENT
    }

    fn raw_models<'a>(&self, _set: &ScoringSet, ctx: &SetContext<'a>) -> Option<Vec<&'a Item>> {
        let store = ctx.store();
        let model = store.find_by_id(&self.model)?;
        Some(store.children(model))
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

    // No pass mark: an assessment passes once it is complete.
    fn is_passed(&self, set: &ScoringSet, ctx: &SetContext<'_>) -> bool {
        self.is_complete(set, ctx)
    }

    fn on_completed(&self, set: &ScoringSet, ctx: &SetContext<'_>) {
        ctx.registry().emit(ScoringEvent::with_now(
            ASSESSMENTS_COMPLETE,
            set.id(),
            set.set_type(),
        ));
    }

    fn on_passed(&self, set: &ScoringSet, ctx: &SetContext<'_>) {
        ctx.registry().emit(ScoringEvent::with_now(
            ASSESSMENTS_PASSED,
            set.id(),
            set.set_type(),
        ));
    }
}

/// The `assessments` aggregate followed by one set per assessment-enabled item.
pub fn discover(store: &dyn ItemStore) -> Result<Vec<ScoringSet>, ScoringError> {
    let mut sets = vec![ScoringSet::new(
        SetConfig::new(ASSESSMENTS).with_title("Assessments"),
        AggregatePolicy::assessments(),
    )];
    for item in store.items() {
        let Some(value) = item.get(ASSESSMENT_FIELD) else {
            continue;
        };
        let settings: AssessmentSettings = serde_json::from_value(value.clone()).map_err(|e| {
            ScoringError::InvalidSetConfig(format!("{} on {}: {}", ASSESSMENT_FIELD, item.id, e))
        })?;
        if !settings.is_enabled {
            continue;
        }
        let title = settings
            .title
            .or_else(|| item.title().map(str::to_string))
            .unwrap_or_default();
        let config = SetConfig::default()
            .with_title(title)
            .score_included(settings.is_score_included)
            .completion_required(settings.is_completion_required);
        sets.push(AssessmentPolicy::root_set(item, config));
    }
    Ok(sets)
}
