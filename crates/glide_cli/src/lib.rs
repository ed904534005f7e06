//! Glide headless runner
//!
//! Drives one implicitly animated node through a JSON scenario of updates,
//! waits and expectations on a fixed frame step, and reports the outcome.

pub mod assert;
pub mod node;
pub mod report;
pub mod runner;
pub mod scenario;

pub use node::ScenarioNode;
pub use report::{ReportStatus, ScenarioReport};
pub use runner::{run_loaded_scenario, run_scenario, RunOutcome};
pub use scenario::{NodeKind, Scenario, ScenarioStep};
