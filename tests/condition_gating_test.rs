//! End-to-end tests: host-style configuration through the registry to
//! evaluated gating decisions.

use anyhow::Result;
use buildgate::condition::registry;
use buildgate::{ConditionConfig, Error, EvaluationContext, MemoryListener, NullListener};
use chrono::{DateTime, Local, TimeZone};

fn noon() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 6, 10, 12, 0, 0).unwrap()
}

fn evening() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 6, 10, 20, 0, 0).unwrap()
}

fn cadence_yaml(with: &str) -> String {
    format!("condition: build-cadence\nwith:\n{with}")
}

#[test]
fn yaml_config_gates_on_divisibility() -> Result<()> {
    let config = ConditionConfig::from_yaml(&cadence_yaml("  build_number_multiple: 5\n"))?;
    let condition = registry::builtin().build(&config)?;
    assert!(condition.should_run(&EvaluationContext::new(10, &NullListener))?);
    assert!(!condition.should_run(&EvaluationContext::new(7, &NullListener))?);
    Ok(())
}

#[test]
fn office_hours_config_gates_on_time_of_day() -> Result<()> {
    let config = ConditionConfig::from_yaml(&cadence_yaml(
        "  build_number_multiple: 5\n  only_in_office_hours: true\n",
    ))?;
    let condition = registry::builtin().build(&config)?;
    let listener = MemoryListener::new();
    assert!(condition.should_run(&EvaluationContext::at(10, noon(), &listener))?);
    assert!(!condition.should_run(&EvaluationContext::at(10, evening(), &listener))?);
    assert_eq!(listener.lines().len(), 2);
    Ok(())
}

#[test]
fn divisibility_failure_writes_no_diagnostics() -> Result<()> {
    let config = ConditionConfig::from_yaml(&cadence_yaml(
        "  build_number_multiple: 5\n  only_in_office_hours: true\n",
    ))?;
    let condition = registry::builtin().build(&config)?;
    let listener = MemoryListener::new();
    assert!(!condition.should_run(&EvaluationContext::at(7, noon(), &listener))?);
    assert!(listener.lines().is_empty());
    Ok(())
}

#[test]
fn diagnostic_line_names_window_bounds() -> Result<()> {
    let config = ConditionConfig::from_yaml(&cadence_yaml(
        "  build_number_multiple: 1\n  only_in_office_hours: true\n",
    ))?;
    let condition = registry::builtin().build(&config)?;
    let listener = MemoryListener::new();
    condition.should_run(&EvaluationContext::at(42, noon(), &listener))?;
    let lines = listener.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("08:59:59"));
    assert!(lines[0].contains("12:00:00"));
    assert!(lines[0].contains("17:30:00"));
    Ok(())
}

#[test]
fn prebuild_phase_is_not_gated() -> Result<()> {
    let config = ConditionConfig::from_yaml(&cadence_yaml(
        "  build_number_multiple: 5\n  only_in_office_hours: true\n",
    ))?;
    let condition = registry::builtin().build(&config)?;
    assert!(condition.should_run_prebuild(&EvaluationContext::at(7, evening(), &NullListener))?);
    Ok(())
}

#[test]
fn unknown_kind_is_rejected() {
    let config = ConditionConfig::from_yaml("condition: lunar-phase\n").unwrap();
    let err = registry::builtin().build(&config).unwrap_err();
    assert!(matches!(err, Error::UnknownCondition(_)));
}

#[test]
fn zero_multiple_never_reaches_evaluation() {
    let config =
        ConditionConfig::from_yaml(&cadence_yaml("  build_number_multiple: 0\n")).unwrap();
    let err = registry::builtin().build(&config).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn negative_multiple_fails_parameter_binding() {
    let config =
        ConditionConfig::from_yaml(&cadence_yaml("  build_number_multiple: -5\n")).unwrap();
    let err = registry::builtin().build(&config).unwrap_err();
    assert!(matches!(err, Error::Yaml(_)));
}

#[test]
fn json_bound_config_resolves() -> Result<()> {
    let config = ConditionConfig::from_json(serde_json::json!({
        "condition": "build-cadence",
        "with": { "build_number_multiple": 2 }
    }))?;
    let condition = registry::builtin().build(&config)?;
    assert!(condition.should_run(&EvaluationContext::new(4, &NullListener))?);
    assert!(!condition.should_run(&EvaluationContext::new(5, &NullListener))?);
    Ok(())
}
