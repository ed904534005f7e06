//! Scenario definition for headless animation runs.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Which node a scenario drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Align,
    Opacity,
    Padding,
    Positioned,
}

/// A node, its first declaration, and the steps applied to it.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub node: NodeKind,
    #[serde(default)]
    pub initial: Map<String, Value>,
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid scenario {}", path.display()))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Merge `values` into the current declaration and rebuild the node.
    /// A `null` value removes the key.
    Update { values: Map<String, Value> },
    Wait { ms: u64 },
    Tick { frames: u32 },
    /// Compare a dotted path in the resolved props (or `diagnostics.*`)
    Expect {
        property: String,
        value: Value,
        #[serde(default = "default_tolerance")]
        tolerance: f64,
    },
}

fn default_tolerance() -> f64 {
    1e-3
}
