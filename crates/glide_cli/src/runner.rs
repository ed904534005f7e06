//! Scenario runner that drives one node frame by frame.

use crate::assert::{evaluate_expect, AssertionResult};
use crate::node::ScenarioNode;
use crate::report::ScenarioReport;
use crate::scenario::{Scenario, ScenarioStep};
use anyhow::{Context, Result};
use glide_animation::AnimationConfig;
use std::time::Duration;
use tracing::{debug, warn};

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: ScenarioReport },
    Failed { report: ScenarioReport },
}

impl RunOutcome {
    pub fn report(&self) -> &ScenarioReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn into_report(self) -> ScenarioReport {
        match self {
            RunOutcome::Passed { report } | RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Frame and time counters for a run
#[derive(Debug, Clone, Copy, Default)]
struct Clock {
    frames: u64,
    elapsed: Duration,
}

impl Clock {
    fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Execute scenario JSON.
pub fn run_scenario(input: &str, config: &AnimationConfig) -> Result<RunOutcome> {
    let scenario = Scenario::from_json(input)?;
    run_loaded_scenario(&scenario, config)
}

/// Execute a pre-loaded scenario.
///
/// An invalid initial declaration is an error; a rejected update or a failed
/// expectation ends the run with a failed report.
pub fn run_loaded_scenario(scenario: &Scenario, config: &AnimationConfig) -> Result<RunOutcome> {
    let mut node = ScenarioNode::spawn(scenario.node, scenario.initial.clone(), config)
        .with_context(|| format!("invalid initial {:?} declaration", scenario.node))?;
    let frame = node.frame_duration();
    let mut clock = Clock::default();

    for (step_index, step) in scenario.steps.iter().enumerate() {
        debug!(step_index, ?step, "scenario step");
        match step {
            ScenarioStep::Update { values } => {
                if let Err(err) = node.update(values) {
                    warn!(step_index, error = %err, "update rejected");
                    let report = ScenarioReport::failed(
                        "invalid_update",
                        step_index,
                        format!("{err:#}"),
                        clock.frames,
                        clock.elapsed_ms(),
                    );
                    return finish(&node, report, false);
                }
            }
            ScenarioStep::Wait { ms } => {
                let wait = Duration::from_millis(*ms);
                let frames = wait_frames(wait, frame);
                if frames > 0 {
                    // Equal frames; the last one absorbs the rounding.
                    let dt = wait / frames;
                    for _ in 1..frames {
                        advance(&mut node, &mut clock, dt);
                    }
                    advance(&mut node, &mut clock, wait - dt * (frames - 1));
                }
            }
            ScenarioStep::Tick { frames } => {
                for _ in 0..*frames {
                    advance(&mut node, &mut clock, frame);
                }
            }
            ScenarioStep::Expect {
                property,
                value,
                tolerance,
            } => {
                let snapshot = node.snapshot()?;
                if let AssertionResult::Failed { code, message } =
                    evaluate_expect(property, value, *tolerance, &snapshot)
                {
                    let report = ScenarioReport::failed(
                        &code,
                        step_index,
                        message,
                        clock.frames,
                        clock.elapsed_ms(),
                    );
                    return finish(&node, report, false);
                }
            }
        }
    }

    finish(
        &node,
        ScenarioReport::passed(clock.frames, clock.elapsed_ms()),
        true,
    )
}

/// Whole frames covering `wait`, at least one for a non-zero wait
fn wait_frames(wait: Duration, frame: Duration) -> u32 {
    if wait.is_zero() {
        return 0;
    }
    let frames = (wait.as_secs_f64() / frame.as_secs_f64()).round();
    (frames as u32).max(1)
}

fn advance(node: &mut ScenarioNode, clock: &mut Clock, dt: Duration) {
    node.advance(dt);
    clock.frames += 1;
    clock.elapsed += dt;
}

fn finish(node: &ScenarioNode, report: ScenarioReport, passed: bool) -> Result<RunOutcome> {
    let report = report.with_state(node.props()?, node.diagnostics());
    debug!(
        passed,
        frames = report.elapsed_frames,
        animating = node.is_animating(),
        "scenario finished"
    );
    Ok(if passed {
        RunOutcome::Passed { report }
    } else {
        RunOutcome::Failed { report }
    })
}
