//! JSON scenario scripts for driving a kitchen world headlessly
//!
//! A scenario names a room, optional config overrides and an ordered list
//! of commands. Running it replays the commands against a fresh
//! [`KitchenWorld`] the same way the UI would issue them.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::config::{PlannerConfig, RoomConfig};
use crate::core::error::{PlannerError, Result};
use crate::core::types::{ItemId, ItemType};
use crate::world::store::{KitchenWorld, PlaceOutcome};

/// Root structure for scenario JSON files
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioFile {
    /// Schema version (currently 1)
    pub version: u32,
    #[serde(default)]
    pub metadata: Option<ScenarioMetadata>,
    #[serde(default)]
    pub room: RoomConfig,
    /// Overrides for the planner thresholds
    #[serde(default)]
    pub config: Option<PlannerConfig>,
    pub steps: Vec<ScenarioStep>,
}

/// Optional descriptive metadata
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One user command
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Select the next available item of a type and place it
    Place {
        item_type: ItemType,
        position: [f32; 3],
        #[serde(default)]
        rotation: Option<f32>,
    },
    Remove {
        id: ItemId,
    },
    Resize {
        id: ItemId,
        width: f32,
    },
    /// Stretch a placed cabinet to fill its gap
    Fill {
        id: ItemId,
    },
    Stack {
        base: ItemId,
        top: ItemId,
    },
    Complete,
}

impl ScenarioStep {
    /// Short name used in logs and step reports
    pub fn action_name(&self) -> &'static str {
        match self {
            ScenarioStep::Place { .. } => "place",
            ScenarioStep::Remove { .. } => "remove",
            ScenarioStep::Resize { .. } => "resize",
            ScenarioStep::Fill { .. } => "fill",
            ScenarioStep::Stack { .. } => "stack",
            ScenarioStep::Complete => "complete",
        }
    }
}

/// What happened when a step was applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepLog {
    pub index: usize,
    pub action: String,
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ScenarioFile {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Replay the steps against a new world
    ///
    /// Failing steps are logged and skipped; only an invalid room or config
    /// aborts the run.
    pub fn run(&self, config: Option<PlannerConfig>) -> Result<(KitchenWorld, Vec<StepLog>)> {
        let config = config
            .or_else(|| self.config.clone())
            .unwrap_or_default();
        let mut world = KitchenWorld::new(self.room, config)?;

        let mut logs = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            let log = match apply_step(&mut world, step) {
                Ok(message) => StepLog {
                    index,
                    action: step.action_name().to_string(),
                    ok: true,
                    message,
                },
                Err(err) => {
                    tracing::warn!("Step {} ({}) failed: {}", index, step.action_name(), err);
                    StepLog {
                        index,
                        action: step.action_name().to_string(),
                        ok: false,
                        message: Some(err.to_string()),
                    }
                }
            };
            logs.push(log);
        }

        Ok((world, logs))
    }
}

fn apply_step(world: &mut KitchenWorld, step: &ScenarioStep) -> Result<Option<String>> {
    match step {
        ScenarioStep::Place {
            item_type,
            position,
            rotation,
        } => {
            let id = world.select_item(*item_type)?;
            match world.place_item(id, Vec3::from_array(*position), *rotation)? {
                PlaceOutcome::Placed => Ok(Some(format!("placed {}", id))),
                PlaceOutcome::CabinetLimitReached => Ok(Some("cabinet limit reached".into())),
            }
        }
        ScenarioStep::Remove { id } => {
            world.remove_item(*id)?;
            Ok(None)
        }
        ScenarioStep::Resize { id, width } => {
            let plan = world.update_cabinet_size(*id, *width)?;
            Ok(Some(format!("width {:.3}m", plan.width)))
        }
        ScenarioStep::Fill { id } => {
            let (position, rotation) = match world.item(*id) {
                Some(item) => (item.position, item.rotation),
                None => return Err(PlannerError::ItemNotFound(*id)),
            };
            let fill = world.compute_fill(position, rotation, Some(*id));
            let plan = world.update_cabinet_size(*id, fill.width)?;
            Ok(Some(format!("filled to {:.3}m", plan.width)))
        }
        ScenarioStep::Stack { base, top } => {
            world.update_oven_stack(*base, *top)?;
            Ok(None)
        }
        ScenarioStep::Complete => {
            world.mark_complete()?;
            Ok(None)
        }
    }
}
