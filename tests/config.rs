use orbsim::{IntegratorConfig, IntegratorKind, Preset, Scenario, ScenarioConfig, SimError, G_SI};

const TWO_BODY: &str = r#"
engine:
  integrator: "verlet"

parameters:
  dt: 3600.0
  t_end: 36000.0

bodies:
  - name: "Sun"
    m: 1.9885e+30
    x: [0.0, 0.0]
    v: [0.0, 0.0]
  - m: 5.97e+24
    x: [1.496e+11, 0.0]
    v: [0.0, 29784.0]
"#;

fn build(yaml: &str) -> Result<Scenario, SimError> {
    Scenario::build_scenario(&ScenarioConfig::from_yaml_str(yaml)?)
}

// ==================================================================================
// Scenario config tests
// ==================================================================================

#[test]
fn parses_scenario_with_defaults() {
    let cfg = ScenarioConfig::from_yaml_str(TWO_BODY).unwrap();

    assert_eq!(cfg.engine.integrator, IntegratorConfig::Verlet);
    assert!(!cfg.engine.parallel);
    assert_eq!(cfg.parameters.g, G_SI);
    assert_eq!(cfg.bodies.len(), 2);
    assert_eq!(cfg.bodies[0].name.as_deref(), Some("Sun"));
    assert!(cfg.bodies[1].name.is_none());
}

#[test]
fn builds_and_runs_scenario() {
    let scenario = build(TWO_BODY).unwrap();

    assert_eq!(scenario.engine.integrator, IntegratorKind::Verlet);
    assert_eq!(scenario.names, vec!["Sun".to_string(), "body1".to_string()]);
    assert_eq!(scenario.system.t, 0.0);

    let traj = scenario.run().unwrap();
    assert_eq!(traj.len(), 11);

    // the scenario keeps its initial state for another run
    assert_eq!(scenario.run().unwrap(), traj);
}

#[test]
fn explicit_gravitational_constant_is_used() {
    let yaml = TWO_BODY.replace("t_end: 36000.0", "t_end: 36000.0\n  G: 1.0");
    let scenario = build(&yaml).unwrap();
    assert_eq!(scenario.parameters.g, 1.0);
}

#[test]
fn rejects_three_component_vectors() {
    let yaml = TWO_BODY.replace("x: [1.496e+11, 0.0]", "x: [1.496e+11, 0.0, 0.0]");
    let err = build(&yaml).unwrap_err();
    assert!(matches!(err, SimError::BadVectorLength { index: 1, field: "x", len: 3 }));
}

#[test]
fn rejects_non_positive_mass() {
    let yaml = TWO_BODY.replace("m: 5.97e+24", "m: -5.97e+24");
    let err = build(&yaml).unwrap_err();
    assert!(matches!(err, SimError::NonPositiveMass { index: 1, .. }));
}

#[test]
fn rejects_bad_time_step_before_running() {
    let yaml = TWO_BODY.replace("dt: 3600.0", "dt: 0.0");
    assert!(matches!(build(&yaml).unwrap_err(), SimError::InvalidTimeStep(_)));

    let yaml = TWO_BODY.replace("t_end: 36000.0", "t_end: 10.0");
    assert!(matches!(build(&yaml).unwrap_err(), SimError::HorizonShorterThanStep { .. }));
}

#[test]
fn rejects_empty_body_list() {
    let yaml = "engine:\n  integrator: \"rk4\"\nparameters:\n  dt: 1.0\n  t_end: 2.0\nbodies: []\n";
    assert!(matches!(build(yaml).unwrap_err(), SimError::EmptySystem));
}

#[test]
fn rejects_unknown_integrator() {
    let yaml = TWO_BODY.replace("\"verlet\"", "\"euler\"");
    assert!(matches!(ScenarioConfig::from_yaml_str(&yaml).unwrap_err(), SimError::Yaml(_)));
}

#[test]
fn missing_file_is_io_error() {
    let err = ScenarioConfig::from_path("scenarios/does_not_exist.yaml").unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}

#[test]
fn scenario_files_match_embedded_presets() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    let from_disk = ScenarioConfig::from_path(dir.join("outer_planets.yaml")).unwrap();
    let embedded = Preset::OuterPlanets.config().unwrap();

    assert_eq!(from_disk.bodies.len(), embedded.bodies.len());
    assert_eq!(from_disk.parameters.dt, embedded.parameters.dt);
}

// ==================================================================================
// Preset tests
// ==================================================================================

#[test]
fn presets_build() {
    let expected = [
        (Preset::InnerPlanets, 6, IntegratorKind::Rk4),
        (Preset::SolarSystem, 10, IntegratorKind::Verlet),
        (Preset::OuterPlanets, 6, IntegratorKind::Verlet),
    ];

    for (preset, n, kind) in expected {
        let scenario = Scenario::build_scenario(&preset.config().unwrap()).unwrap();
        assert_eq!(scenario.system.len(), n, "{preset:?}");
        assert_eq!(scenario.engine.integrator, kind, "{preset:?}");
        assert_eq!(scenario.names[0], "Sun");
    }
    assert_eq!(Preset::ALL.len(), expected.len());
}

#[test]
fn outer_planets_preset_records_every_frame() {
    let scenario = Scenario::build_scenario(&Preset::OuterPlanets.config().unwrap()).unwrap();
    let traj = scenario.run().unwrap();

    // floor(7.82438e9 / 1e6) + 1
    assert_eq!(traj.len(), 7825);
    assert!(traj.final_state().unwrap().iter().all(|s| s.position.x.is_finite()));
}

#[test]
fn inner_planets_preset_runs_with_rk4() {
    let scenario = Scenario::build_scenario(&Preset::InnerPlanets.config().unwrap()).unwrap();
    let traj = scenario.run().unwrap();

    assert_eq!(traj.len(), 5000);

    let drift = orbsim::max_relative_drift(&traj, scenario.parameters.g).unwrap();
    assert!(drift < 1e-2, "energy drift {drift:e}");
}
