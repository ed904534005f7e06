//! Animation scheduler
//!
//! Owns every live implicitly animated node and advances them each frame.

use crate::config::AnimationConfig;
use crate::diagnostics::NodeDiagnostics;
use crate::implicit::{ImplicitAnimationState, ImplicitlyAnimated};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::any::Any;
use std::time::{Duration, Instant};
use tracing::debug;

new_key_type! {
    pub struct NodeId;
}

/// Anything the scheduler can advance
pub trait AnimatedNode: Any {
    /// Advance by `dt`; returns `true` when the output changed.
    fn tick(&mut self, dt: Duration) -> bool;
    fn is_animating(&self) -> bool;
    fn label(&self) -> &'static str;
    fn describe(&self) -> NodeDiagnostics;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<N> AnimatedNode for ImplicitAnimationState<N>
where
    N: ImplicitlyAnimated + 'static,
    N::Description: 'static,
{
    fn tick(&mut self, dt: Duration) -> bool {
        ImplicitAnimationState::tick(self, dt)
    }

    fn is_animating(&self) -> bool {
        ImplicitAnimationState::is_animating(self)
    }

    fn label(&self) -> &'static str {
        N::LABEL
    }

    fn describe(&self) -> NodeDiagnostics {
        self.debug_describe()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Frame driver for a set of animated nodes
pub struct AnimationScheduler {
    nodes: SlotMap<NodeId, Box<dyn AnimatedNode>>,
    /// Unset until the first `tick`
    last_frame: Option<Instant>,
    target_fps: u32,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            last_frame: None,
            target_fps: 120,
        }
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        let mut scheduler = Self::new();
        scheduler.set_target_fps(config.target_fps);
        scheduler
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps.max(1);
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Length of one fixed step
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps as f64)
    }

    pub fn insert<T: AnimatedNode>(&mut self, node: T) -> NodeId {
        let label = node.label();
        let id = self.nodes.insert(Box::new(node));
        debug!(?id, node = label, "node inserted");
        id
    }

    /// Remove a node, dropping its clock and slots on the spot
    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.nodes.remove(id) {
            Some(node) => {
                debug!(?id, node = node.label(), animating = node.is_animating(), "node removed");
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Typed access to a node
    pub fn get<T: AnimatedNode>(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id)?.as_any().downcast_ref()
    }

    pub fn get_mut<T: AnimatedNode>(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id)?.as_any_mut().downcast_mut()
    }

    pub fn describe(&self, id: NodeId) -> Option<NodeDiagnostics> {
        self.nodes.get(id).map(|node| node.describe())
    }

    /// Advance every node by `dt`; returns the nodes whose output changed.
    pub fn advance(&mut self, dt: Duration) -> SmallVec<[NodeId; 8]> {
        let mut changed = SmallVec::new();
        for (id, node) in self.nodes.iter_mut() {
            if node.tick(dt) {
                changed.push(id);
            }
        }
        changed
    }

    /// Advance by one fixed frame at `target_fps`
    pub fn step(&mut self) -> SmallVec<[NodeId; 8]> {
        self.advance(self.frame_duration())
    }

    /// Advance by the wall-clock time since the previous `tick`.
    ///
    /// The first call only starts the clock and advances by zero.
    pub fn tick(&mut self) -> SmallVec<[NodeId; 8]> {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.duration_since(last));
        self.last_frame = Some(now);
        self.advance(dt)
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        self.nodes.values().any(|node| node.is_animating())
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
