//! Read-only snapshots of node animation state

use crate::controller::AnimationStatus;
use crate::implicit::AnimationPhase;
use crate::tween::Slot;
use serde::Serialize;
use std::fmt::Debug;

/// One property slot as seen from outside
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlotDiagnostics {
    pub name: &'static str,
    /// `false` while the property is undeclared
    pub present: bool,
    pub begin: Option<String>,
    pub end: Option<String>,
}

/// A node's clock and slots
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeDiagnostics {
    pub label: &'static str,
    pub phase: AnimationPhase,
    pub status: AnimationStatus,
    /// Raw clock progress
    pub progress: f32,
    /// Curved progress the slots are evaluated at
    pub value: f32,
    pub duration_ms: f64,
    pub curve: String,
    pub slots: Vec<SlotDiagnostics>,
}

impl NodeDiagnostics {
    pub fn slot(&self, name: &str) -> Option<&SlotDiagnostics> {
        self.slots.iter().find(|slot| slot.name == name)
    }
}

/// Collects slot snapshots in declaration order
#[derive(Debug, Default)]
pub struct DiagnosticsBuilder {
    slots: Vec<SlotDiagnostics>,
}

impl DiagnosticsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot<T: Debug>(&mut self, name: &'static str, slot: &Slot<T>) -> &mut Self {
        let (present, begin, end) = match slot {
            Some(tween) => (
                true,
                tween.begin.as_ref().map(|v| format!("{v:?}")),
                tween.end.as_ref().map(|v| format!("{v:?}")),
            ),
            None => (false, None, None),
        };
        self.slots.push(SlotDiagnostics {
            name,
            present,
            begin,
            end,
        });
        self
    }

    pub fn finish(self) -> Vec<SlotDiagnostics> {
        self.slots
    }
}
