//! JSON declarations for the nodes a scenario can drive
//!
//! A scenario keeps the node's current declaration as a JSON map. Updates
//! merge into it, and the merged map is parsed into one of the inputs below
//! and built through the node's validating builder.

use crate::scenario::NodeKind;
use anyhow::{anyhow, Result};
use glide_animation::{
    AnimatedNode, AnimationConfig, AnimationScheduler, AnimationTiming, Curve, NodeDiagnostics,
    NodeId,
};
use glide_core::{Alignment, EdgeInsets};
use glide_widgets::{
    AlignDescription, AnimatedAlign, AnimatedOpacity, AnimatedPadding, AnimatedPositioned,
    OpacityDescription, PaddingDescription, PositionedDescription,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

fn timing(defaults: AnimationTiming, duration_ms: Option<u64>, curve: Option<Curve>) -> AnimationTiming {
    AnimationTiming {
        duration: duration_ms.map_or(defaults.duration, Duration::from_millis),
        curve: curve.unwrap_or(defaults.curve),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlignInput {
    pub alignment: Option<Alignment>,
    pub duration_ms: Option<u64>,
    pub curve: Option<Curve>,
}

impl AlignInput {
    pub fn build(self, defaults: AnimationTiming) -> glide_animation::Result<AlignDescription> {
        let mut builder =
            AlignDescription::builder().timing(timing(defaults, self.duration_ms, self.curve));
        if let Some(alignment) = self.alignment {
            builder = builder.alignment(alignment);
        }
        builder.build()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpacityInput {
    pub opacity: Option<f32>,
    pub duration_ms: Option<u64>,
    pub curve: Option<Curve>,
}

impl OpacityInput {
    pub fn build(self, defaults: AnimationTiming) -> glide_animation::Result<OpacityDescription> {
        let mut builder =
            OpacityDescription::builder().timing(timing(defaults, self.duration_ms, self.curve));
        if let Some(opacity) = self.opacity {
            builder = builder.opacity(opacity);
        }
        builder.build()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaddingInput {
    pub padding: Option<EdgeInsets>,
    pub duration_ms: Option<u64>,
    pub curve: Option<Curve>,
}

impl PaddingInput {
    pub fn build(self, defaults: AnimationTiming) -> glide_animation::Result<PaddingDescription> {
        let mut builder =
            PaddingDescription::builder().timing(timing(defaults, self.duration_ms, self.curve));
        if let Some(padding) = self.padding {
            builder = builder.padding(padding);
        }
        builder.build()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PositionedInput {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub duration_ms: Option<u64>,
    pub curve: Option<Curve>,
}

impl PositionedInput {
    pub fn build(self, defaults: AnimationTiming) -> glide_animation::Result<PositionedDescription> {
        let mut builder =
            PositionedDescription::builder().timing(timing(defaults, self.duration_ms, self.curve));
        if let Some(left) = self.left {
            builder = builder.left(left);
        }
        if let Some(top) = self.top {
            builder = builder.top(top);
        }
        if let Some(right) = self.right {
            builder = builder.right(right);
        }
        if let Some(bottom) = self.bottom {
            builder = builder.bottom(bottom);
        }
        if let Some(width) = self.width {
            builder = builder.width(width);
        }
        if let Some(height) = self.height {
            builder = builder.height(height);
        }
        builder.build()
    }
}

fn parse<T: DeserializeOwned>(values: &Map<String, Value>) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(values.clone()))?)
}

/// Merge `update` into `current`; `null` removes a key.
pub fn merge_values(current: &Map<String, Value>, update: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = current.clone();
    for (key, value) in update {
        if value.is_null() {
            merged.remove(key);
        } else {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// One scenario node registered with a scheduler
pub struct ScenarioNode {
    scheduler: AnimationScheduler,
    id: NodeId,
    kind: NodeKind,
    values: Map<String, Value>,
    defaults: AnimationTiming,
}

impl ScenarioNode {
    /// Build the node from its first declaration
    pub fn spawn(kind: NodeKind, initial: Map<String, Value>, config: &AnimationConfig) -> Result<Self> {
        let defaults = AnimationTiming::from_config(config);
        let mut scheduler = AnimationScheduler::from_config(config);
        let id = match kind {
            NodeKind::Align => {
                let desc = parse::<AlignInput>(&initial)?.build(defaults)?;
                scheduler.insert(AnimatedAlign::with_config(desc, config))
            }
            NodeKind::Opacity => {
                let desc = parse::<OpacityInput>(&initial)?.build(defaults)?;
                scheduler.insert(AnimatedOpacity::with_config(desc, config))
            }
            NodeKind::Padding => {
                let desc = parse::<PaddingInput>(&initial)?.build(defaults)?;
                scheduler.insert(AnimatedPadding::with_config(desc, config))
            }
            NodeKind::Positioned => {
                let desc = parse::<PositionedInput>(&initial)?.build(defaults)?;
                scheduler.insert(AnimatedPositioned::with_config(desc, config))
            }
        };
        Ok(Self {
            scheduler,
            id,
            kind,
            values: initial,
            defaults,
        })
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Current declaration as JSON
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Merge and apply an update; the declaration is kept only if it builds.
    /// Returns `true` when the node restarted its clock.
    pub fn update(&mut self, update: &Map<String, Value>) -> Result<bool> {
        let merged = merge_values(&self.values, update);
        let defaults = self.defaults;
        let restarted = match self.kind {
            NodeKind::Align => {
                let desc = parse::<AlignInput>(&merged)?.build(defaults)?;
                self.node_mut::<AnimatedAlign>()?.update(desc)
            }
            NodeKind::Opacity => {
                let desc = parse::<OpacityInput>(&merged)?.build(defaults)?;
                self.node_mut::<AnimatedOpacity>()?.update(desc)
            }
            NodeKind::Padding => {
                let desc = parse::<PaddingInput>(&merged)?.build(defaults)?;
                self.node_mut::<AnimatedPadding>()?.update(desc)
            }
            NodeKind::Positioned => {
                let desc = parse::<PositionedInput>(&merged)?.build(defaults)?;
                self.node_mut::<AnimatedPositioned>()?.update(desc)
            }
        };
        self.values = merged;
        Ok(restarted)
    }

    /// Advance by one frame of `dt`
    pub fn advance(&mut self, dt: Duration) -> bool {
        !self.scheduler.advance(dt).is_empty()
    }

    pub fn frame_duration(&self) -> Duration {
        self.scheduler.frame_duration()
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.has_active_animations()
    }

    /// Resolved props as JSON
    pub fn props(&self) -> Result<Value> {
        let value = match self.kind {
            NodeKind::Align => serde_json::to_value(self.node::<AnimatedAlign>()?.resolve())?,
            NodeKind::Opacity => serde_json::to_value(self.node::<AnimatedOpacity>()?.resolve())?,
            NodeKind::Padding => serde_json::to_value(self.node::<AnimatedPadding>()?.resolve())?,
            NodeKind::Positioned => {
                serde_json::to_value(self.node::<AnimatedPositioned>()?.resolve())?
            }
        };
        Ok(value)
    }

    pub fn diagnostics(&self) -> Option<NodeDiagnostics> {
        self.scheduler.describe(self.id)
    }

    /// Props plus a `diagnostics` entry, the object expectations look into
    pub fn snapshot(&self) -> Result<Value> {
        let mut snapshot = self.props()?;
        if let (Value::Object(map), Some(diagnostics)) = (&mut snapshot, self.diagnostics()) {
            map.insert("diagnostics".to_string(), serde_json::to_value(diagnostics)?);
        }
        Ok(snapshot)
    }

    fn node<T: AnimatedNode>(&self) -> Result<&T> {
        self.scheduler
            .get::<T>(self.id)
            .ok_or_else(|| anyhow!("{:?} node is not registered", self.kind))
    }

    fn node_mut<T: AnimatedNode>(&mut self) -> Result<&mut T> {
        let kind = self.kind;
        self.scheduler
            .get_mut::<T>(self.id)
            .ok_or_else(|| anyhow!("{kind:?} node is not registered"))
    }
}
