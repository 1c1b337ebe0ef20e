use thiserror::Error;

use crate::core::types::{ItemId, ItemType};

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Item {0} is not in the available pool")]
    ItemNotAvailable(ItemId),

    #[error("Item {0} is not placed")]
    ItemNotPlaced(ItemId),

    #[error("No {0} left to place")]
    NothingAvailable(ItemType),

    #[error("Item {0} is not an oven")]
    NotAnOven(ItemId),

    #[error("Item {0} is not a countertop cabinet")]
    NotACabinet(ItemId),

    #[error("Invalid cabinet width: {0}")]
    InvalidWidth(f32),

    #[error("Invalid stack: {0}")]
    InvalidStack(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Work triangle not satisfied: {0}")]
    TriangleNotSatisfied(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
