use glide_animation::AnimationConfig;
use glide_cli::{run_scenario, ReportStatus};
use serde_json::{json, Value};

fn run(scenario: Value) -> glide_cli::RunOutcome {
    run_scenario(&scenario.to_string(), &AnimationConfig::default()).unwrap()
}

#[test]
fn align_glides_and_settles() {
    let outcome = run(json!({
        "node": "align",
        "initial": { "alignment": { "x": -1.0, "y": -1.0 }, "duration_ms": 200 },
        "steps": [
            { "type": "update", "values": { "alignment": { "x": 1.0, "y": 1.0 } } },
            { "type": "expect", "property": "diagnostics.phase", "value": "animating" },
            { "type": "wait", "ms": 100 },
            { "type": "expect", "property": "alignment.x", "value": 0.0 },
            { "type": "expect", "property": "alignment.y", "value": 0.0 },
            { "type": "wait", "ms": 150 },
            { "type": "expect", "property": "alignment.x", "value": 1.0 },
            { "type": "expect", "property": "diagnostics.phase", "value": "idle" }
        ]
    }));

    let report = outcome.report();
    assert!(report.is_passed(), "{report:?}");
    assert_eq!(report.elapsed_frames, 12 + 18);
    assert_eq!(report.elapsed_ms, 250);
    assert_eq!(report.diagnostics.as_ref().unwrap().label, "animated_align");
}

#[test]
fn retarget_starts_from_the_in_flight_value() {
    let outcome = run(json!({
        "node": "opacity",
        "initial": { "opacity": 0.0, "duration_ms": 100 },
        "steps": [
            { "type": "update", "values": { "opacity": 1.0 } },
            { "type": "wait", "ms": 50 },
            { "type": "expect", "property": "opacity", "value": 0.5 },
            { "type": "update", "values": { "opacity": 0.0 } },
            { "type": "expect", "property": "opacity", "value": 0.5 },
            { "type": "expect", "property": "diagnostics.progress", "value": 0.0 },
            { "type": "wait", "ms": 50 },
            { "type": "expect", "property": "opacity", "value": 0.25 }
        ]
    }));
    assert!(!outcome.is_failed(), "{:?}", outcome.report());
}

#[test]
fn removed_edge_snaps_away() {
    let outcome = run(json!({
        "node": "positioned",
        "initial": { "left": 0.0, "top": 0.0, "width": 10.0, "duration_ms": 100 },
        "steps": [
            { "type": "update", "values": { "width": null } },
            { "type": "expect", "property": "width", "value": null },
            { "type": "expect", "property": "diagnostics.phase", "value": "idle" },
            { "type": "update", "values": { "left": 100.0 } },
            { "type": "tick", "frames": 6 },
            { "type": "expect", "property": "left", "value": 50.0 },
            { "type": "expect", "property": "top", "value": 0.0 },
            { "type": "expect", "property": "right", "value": null }
        ]
    }));
    assert!(!outcome.is_failed(), "{:?}", outcome.report());
}

#[test]
fn mismatch_reports_the_failing_step() {
    let outcome = run(json!({
        "node": "padding",
        "initial": { "padding": { "left": 0.0, "top": 0.0, "right": 0.0, "bottom": 0.0 }, "duration_ms": 100 },
        "steps": [
            { "type": "update", "values": { "padding": { "left": 8.0, "top": 8.0, "right": 8.0, "bottom": 8.0 } } },
            { "type": "tick", "frames": 3 },
            { "type": "expect", "property": "padding.left", "value": 8.0 },
            { "type": "wait", "ms": 500 }
        ]
    }));

    assert!(outcome.is_failed());
    let report = outcome.into_report();
    assert_eq!(report.status, ReportStatus::Failed);
    assert_eq!(report.failed_step_index, Some(2));
    assert_eq!(report.assertion.as_deref(), Some("value_mismatch"));
    assert_eq!(report.elapsed_frames, 3);
    assert!(report.message.unwrap().starts_with("padding.left"));
    assert!(report.props.is_some());
}

#[test]
fn rejected_update_fails_the_run() {
    let outcome = run(json!({
        "node": "opacity",
        "initial": { "opacity": 1.0, "duration_ms": 100 },
        "steps": [
            { "type": "update", "values": { "opacity": 1.5 } }
        ]
    }));

    let report = outcome.report();
    assert_eq!(report.failed_step_index, Some(0));
    assert_eq!(report.assertion.as_deref(), Some("invalid_update"));
    assert_eq!(report.props.as_ref().unwrap()["opacity"], json!(1.0));
}

#[test]
fn invalid_initial_declaration_is_an_error() {
    let scenario = json!({
        "node": "padding",
        "initial": { "padding": { "left": -1.0, "top": 0.0, "right": 0.0, "bottom": 0.0 }, "duration_ms": 100 },
        "steps": []
    });
    assert!(run_scenario(&scenario.to_string(), &AnimationConfig::default()).is_err());
}

#[test]
fn reduced_motion_lands_without_frames() {
    let config = AnimationConfig {
        disable_animations: true,
        ..AnimationConfig::default()
    };
    let scenario = json!({
        "node": "align",
        "initial": { "alignment": { "x": 0.0, "y": 0.0 }, "duration_ms": 300 },
        "steps": [
            { "type": "update", "values": { "alignment": { "x": 1.0, "y": 0.0 } } },
            { "type": "expect", "property": "alignment.x", "value": 1.0 },
            { "type": "expect", "property": "diagnostics.status", "value": "completed" }
        ]
    });

    let outcome = run_scenario(&scenario.to_string(), &config).unwrap();
    let report = outcome.report();
    assert!(report.is_passed(), "{report:?}");
    assert_eq!(report.elapsed_frames, 0);
}

#[test]
fn report_serializes_final_state() {
    let outcome = run(json!({
        "node": "opacity",
        "initial": { "opacity": 0.5 },
        "steps": [{ "type": "tick", "frames": 1 }]
    }));

    let json = serde_json::to_value(outcome.report()).unwrap();
    assert_eq!(json["status"], "passed");
    assert_eq!(json["failed_step_index"], Value::Null);
    assert_eq!(json["elapsed_frames"], 1);
    assert_eq!(json["props"]["opacity"], json!(0.5));
    assert_eq!(json["diagnostics"]["label"], "animated_opacity");
    let duration_ms = json["diagnostics"]["duration_ms"].as_f64().unwrap();
    assert!((duration_ms - 200.0).abs() < 1e-6);
}

#[test]
fn bundled_scenario_passes() {
    let input = include_str!("../scenarios/align_retarget.json");
    let outcome = run_scenario(input, &AnimationConfig::default()).unwrap();
    assert!(!outcome.is_failed(), "{:?}", outcome.report());
    assert_eq!(outcome.report().elapsed_ms, 500);
}
