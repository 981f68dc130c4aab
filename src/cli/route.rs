//! CLI route: single route table and run context. Dispatches to the engine and presentation.

use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_completion_json, format_completion_text, format_report_json, format_report_text,
    format_set_detail_json, format_set_detail_text, format_set_list_json, format_set_list_text,
};
use crate::config::{ConfigLoader, ScoringConfig};
use crate::content::{ContentTree, ItemStore};
use crate::error::{ContentError, ScoringError};
use crate::events::{ScoringBus, ScoringEvent};
use crate::policies::bootstrap;
use crate::registry::Registry;
use crate::report::{ScoringReport, SetSummary};
use crate::set::{ScoringSet, SetTransition};
use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use tracing::info;

/// A resolved set with its prospective children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetDetail {
    pub set: SetSummary,
    pub subsets: Vec<SetSummary>,
}

/// Result of marking items complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionOutcome {
    pub items: Vec<String>,
    /// Only transitions that fired.
    pub transitions: Vec<SetTransition>,
    pub events: Vec<ScoringEvent>,
    pub is_complete: bool,
}

/// Runtime context for CLI execution: workspace and effective configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: ScoringConfig,
}

impl RunContext {
    /// Create run context from workspace root, optional config path and optional
    /// content override. Uses ConfigLoader only.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        content: Option<PathBuf>,
    ) -> Result<Self, ScoringError> {
        let mut config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        if content.is_some() {
            config.content.path = content;
        }
        Ok(Self {
            workspace_root,
            config: config.validated()?,
        })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Configured content file, resolved against the workspace root.
    pub fn content_path(&self) -> Result<PathBuf, ScoringError> {
        let path = self.config.content.path.as_deref().ok_or_else(|| {
            ScoringError::ConfigError(
                "No content file configured; set content.path or pass --content".to_string(),
            )
        })?;
        Ok(resolve(&self.workspace_root, path))
    }

    /// Load content and bootstrap the configured families.
    pub fn open_session(&self) -> Result<Session, ScoringError> {
        let path = self.content_path()?;
        let tree = ContentTree::from_json_file(&path)?;
        info!(content = %path.display(), items = tree.len(), "Content loaded");
        Session::new(tree, &self.config.policies.families)
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ScoringError> {
        match command {
            Commands::Report { format } => {
                let report = self.open_session()?.report();
                match format {
                    OutputFormat::Text => Ok(format_report_text(&report)),
                    OutputFormat::Json => format_report_json(&report),
                }
            }
            Commands::Sets {
                set_type,
                item,
                format,
            } => {
                let rows = self
                    .open_session()?
                    .set_list(set_type.as_deref(), item.as_deref())?;
                match format {
                    OutputFormat::Text => Ok(format_set_list_text(&rows)),
                    OutputFormat::Json => format_set_list_json(&rows),
                }
            }
            Commands::Show { path, format } => {
                let detail = self.open_session()?.set_detail(path)?;
                match format {
                    OutputFormat::Text => Ok(format_set_detail_text(&detail)),
                    OutputFormat::Json => format_set_detail_json(&detail),
                }
            }
            Commands::Complete { items, format } => {
                let outcome = self.open_session()?.complete(items)?;
                match format {
                    OutputFormat::Text => Ok(format_completion_text(&outcome)),
                    OutputFormat::Json => format_completion_json(&outcome),
                }
            }
            Commands::Config => self.config.to_toml(),
        }
    }
}

fn resolve(workspace_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace_root.join(path)
    }
}

/// Loaded content plus the registry bootstrapped over it.
pub struct Session {
    tree: ContentTree,
    registry: Registry,
    events: Receiver<ScoringEvent>,
}

impl Session {
    pub fn new(tree: ContentTree, families: &[String]) -> Result<Self, ScoringError> {
        let (bus, events) = ScoringBus::new_pair();
        let mut registry = Registry::with_bus(bus);
        bootstrap(&mut registry, &tree, families)?;
        Ok(Self {
            tree,
            registry,
            events,
        })
    }

    pub fn tree(&self) -> &ContentTree {
        &self.tree
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn report(&self) -> ScoringReport {
        ScoringReport::build(&self.registry, &self.tree)
    }

    /// Root sets, optionally narrowed by type and by an item's hierarchy.
    pub fn set_list(
        &self,
        set_type: Option<&str>,
        item: Option<&str>,
    ) -> Result<Vec<SetSummary>, ScoringError> {
        let sets: Vec<&ScoringSet> = match item {
            Some(item) => {
                let item_id = self.known_item(item)?;
                self.registry.get_subsets_by_model_id(&self.tree, &item_id)
            }
            None => self.registry.subsets().iter().collect(),
        };
        let ctx = self.registry.context(&self.tree);
        Ok(sets
            .into_iter()
            .filter(|set| set_type.map_or(true, |wanted| set.set_type() == wanted))
            .map(|set| SetSummary::from_set(set, &ctx))
            .collect())
    }

    pub fn set_detail(&self, path: &str) -> Result<SetDetail, ScoringError> {
        let set = self
            .registry
            .get_subset_by_path(&self.tree, path)
            .ok_or_else(|| ScoringError::PathNotFound(path.to_string()))?;
        let ctx = self.registry.context(&self.tree);
        Ok(SetDetail {
            set: SetSummary::from_set(&set, &ctx),
            subsets: set
                .subsets(&ctx)
                .iter()
                .map(|subset| SetSummary::from_set(subset, &ctx))
                .collect(),
        })
    }

    /// Mark each item interaction-complete and complete, notifying the
    /// registry after every item.
    pub fn complete(&mut self, items: &[String]) -> Result<CompletionOutcome, ScoringError> {
        let ids = items
            .iter()
            .map(|item| self.known_item(item))
            .collect::<Result<Vec<ItemId>, ScoringError>>()?;

        let mut transitions = Vec::new();
        for id in &ids {
            let interaction_changed = self.tree.set_interaction_complete(id, true)?;
            let completion_changed = self.tree.set_complete(id, true)?;
            if interaction_changed || completion_changed {
                transitions.extend(
                    self.registry
                        .item_completion_changed(&self.tree, id)
                        .into_iter()
                        .filter(SetTransition::fired),
                );
            }
        }

        Ok(CompletionOutcome {
            items: ids.iter().map(ItemId::to_string).collect(),
            transitions,
            events: self.events.try_iter().collect(),
            is_complete: self.registry.is_complete(&self.tree),
        })
    }

    fn known_item(&self, item: &str) -> Result<ItemId, ScoringError> {
        let id = ItemId::from(item);
        if self.tree.find_by_id(&id).is_none() {
            return Err(ContentError::ItemNotFound(id).into());
        }
        Ok(id)
    }
}
