//! Kitchen world state and scripted scenarios

pub mod scenario;
pub mod store;

pub use scenario::{ScenarioFile, ScenarioMetadata, ScenarioStep, StepLog};
pub use store::{KitchenWorld, PlaceOutcome};
