use gravsim::simulation::forces::{Acceleration, NewtonianGravity, G};
use gravsim::simulation::integrator::euler_integrator;
use gravsim::simulation::scenario::Scenario;
use gravsim::simulation::states::{Body, BodyStore, NVec2};
use gravsim::ScenarioConfig;

/// Build a simple 2-body store separated along the x-axis, both at rest
pub fn two_body_store(dist: f64, m: u64, radius: f64) -> BodyStore {
    let mut store = BodyStore::new();
    store.add(NVec2::new(0.0, 0.0), NVec2::zeros(), radius, m);
    store.add(NVec2::new(dist, 0.0), NVec2::zeros(), radius, m);
    store
}

/// Scenario with no bodies that is already running
pub fn running_scenario() -> Scenario {
    let mut scenario = Scenario::default();
    scenario.engine.running = true;
    scenario
}

fn close(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * b.abs().max(f64::MIN_POSITIVE)
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_magnitude_is_g_m_over_distance() {
    let store = two_body_store(250.0, 3_000_000_000, 5.0);
    let gravity = NewtonianGravity::default();

    let a = gravity.acceleration(&store.bodies()[0], &store.bodies()[1]);

    let expected = G * 3e9 / 250.0;
    assert!(close(a.norm(), expected, 1e-12), "got {}, expected {}", a.norm(), expected);
    assert!(a.x > 0.0 && a.y == 0.0, "Acceleration is not toward second body");
}

#[test]
fn gravity_is_zero_inside_either_radius() {
    let mut store = BodyStore::new();
    store.add(NVec2::new(0.0, 0.0), NVec2::zeros(), 1.0, 1_000_000_000);
    store.add(NVec2::new(3.0, 4.0), NVec2::zeros(), 6.0, 1_000_000_000);
    let gravity = NewtonianGravity::default();

    let (b0, b1) = (&store.bodies()[0], &store.bodies()[1]);
    assert_eq!(gravity.acceleration(b0, b1), NVec2::zeros());
    assert_eq!(gravity.acceleration(b1, b0), NVec2::zeros());
}

#[test]
fn gravity_applies_exactly_at_the_radius() {
    // dist == radius is not "closer than", so the pull applies
    let store = two_body_store(10.0, 1_000_000_000, 10.0);
    let gravity = NewtonianGravity::default();
    let a = gravity.acceleration(&store.bodies()[0], &store.bodies()[1]);
    assert!(a.norm() > 0.0);
}

#[test]
fn zero_radius_never_cuts_off_a_nonzero_distance() {
    let store = two_body_store(0.5, 1_000_000_000, 0.0);
    let gravity = NewtonianGravity::default();

    let a = gravity.acceleration(&store.bodies()[0], &store.bodies()[1]);

    let expected = G * 1e9 / 0.5;
    assert!(close(a.norm(), expected, 1e-12), "got {}, expected {}", a.norm(), expected);
    assert!(a.x > 0.0);
}

#[test]
fn negative_radius_is_not_treated_as_its_magnitude() {
    // |r| = 5 would cut off at d = 3, a negative radius never does
    let store = two_body_store(3.0, 2_000_000_000, -5.0);
    let gravity = NewtonianGravity::default();

    let a0 = gravity.acceleration(&store.bodies()[0], &store.bodies()[1]);
    let a1 = gravity.acceleration(&store.bodies()[1], &store.bodies()[0]);

    let expected = G * 2e9 / 3.0;
    assert!(close(a0.norm(), expected, 1e-12));
    assert!(close(a1.norm(), expected, 1e-12));
    assert!(a0.x > 0.0 && a1.x < 0.0);
}

#[test]
fn small_radius_bodies_step_with_full_pull() {
    let mut store = BodyStore::new();
    store.add(NVec2::new(0.0, 0.0), NVec2::zeros(), 0.0, 1_000_000_000);
    store.add(NVec2::new(2.0, 0.0), NVec2::zeros(), -5.0, 1_000_000_000);

    euler_integrator(&mut store, &NewtonianGravity::default());

    let b0 = &store.bodies()[0];
    let expected = G * 1e9 / 2.0;
    assert!(close(b0.a.norm(), expected, 1e-12));
    assert_eq!(b0.v, b0.a);
    assert!(store.bodies()[1].a.x < 0.0);
}

/// Counts one unit of +x per contributing pair
struct CountPairs;

impl Acceleration for CountPairs {
    fn acceleration(&self, _body: &Body, _other: &Body) -> NVec2 {
        NVec2::new(1.0, 0.0)
    }
}

#[test]
fn identical_bodies_still_interact_but_never_with_themselves() {
    let mut store = BodyStore::new();
    store.add(NVec2::new(7.0, 7.0), NVec2::zeros(), 2.0, 5);
    store.add(NVec2::new(7.0, 7.0), NVec2::zeros(), 2.0, 5);
    assert_eq!(store.bodies()[0], store.bodies()[1]);

    let a0 = CountPairs.accumulate(0, store.bodies());
    let a1 = CountPairs.accumulate(1, store.bodies());

    assert_eq!(a0, NVec2::new(1.0, 0.0));
    assert_eq!(a1, NVec2::new(1.0, 0.0));
}

#[test]
fn massless_body_is_pulled_but_does_not_pull() {
    let mut store = BodyStore::new();
    store.add(NVec2::new(0.0, 0.0), NVec2::zeros(), 1.0, 0);
    store.add(NVec2::new(100.0, 0.0), NVec2::zeros(), 1.0, 1_000_000_000);

    euler_integrator(&mut store, &NewtonianGravity::default());

    let light = &store.bodies()[0];
    let heavy = &store.bodies()[1];
    assert!(light.a.x > 0.0);
    assert_eq!(heavy.a, NVec2::zeros());
    assert_eq!(heavy.x, NVec2::new(100.0, 0.0));
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn empty_store_step_is_a_no_op() {
    let mut store = BodyStore::new();
    euler_integrator(&mut store, &NewtonianGravity::default());
    assert!(store.is_empty());
}

#[test]
fn single_body_at_rest_feels_no_self_force() {
    let mut scenario = running_scenario();
    scenario.place_body(NVec2::new(300.0, 200.0));

    assert!(scenario.step());

    let b = &scenario.system.bodies()[0];
    assert_eq!(b.a, NVec2::zeros());
    assert_eq!(b.v, NVec2::zeros());
    assert_eq!(b.x, NVec2::new(300.0, 200.0));
}

#[test]
fn single_moving_body_drifts_with_its_velocity() {
    let mut store = BodyStore::new();
    store.add(NVec2::new(10.0, 10.0), NVec2::new(0.5, -0.25), 10.0, 1_000_000_000);

    euler_integrator(&mut store, &NewtonianGravity::default());

    let b = &store.bodies()[0];
    assert_eq!(b.x, NVec2::new(10.5, 9.75));
    assert_eq!(b.v, NVec2::new(0.5, -0.25));
}

#[test]
fn two_equal_bodies_attract_each_other_after_one_step() {
    let mut store = two_body_store(100.0, 1_000_000_000, 10.0);
    euler_integrator(&mut store, &NewtonianGravity::default());

    let expected = G * 1e9 / 100.0;
    let b0 = &store.bodies()[0];
    let b1 = &store.bodies()[1];

    // body 0 is pulled toward +x, body 1 toward -x
    assert!(b0.a.x > 0.0 && b0.a.y == 0.0);
    assert!(b1.a.x < 0.0 && b1.a.y == 0.0);
    assert!(close(b0.a.norm(), expected, 1e-4));
    assert!(close(b1.a.norm(), expected, 1e-4));

    // velocity starts at zero, so it equals the acceleration
    assert_eq!(b0.v, b0.a);
    assert_eq!(b1.v, b1.a);

    assert_eq!(b0.x, b0.v);
    assert_eq!(b1.x, NVec2::new(100.0, 0.0) + b1.v);
}

#[test]
fn later_bodies_see_already_moved_earlier_bodies() {
    let mut store = two_body_store(100.0, 1_000_000_000, 10.0);
    euler_integrator(&mut store, &NewtonianGravity::default());

    let b0 = &store.bodies()[0];
    let b1 = &store.bodies()[1];

    // Body 1 was evaluated against body 0's new position, slightly closer
    let moved_dist = 100.0 - b0.x.x;
    let expected_b1 = G * 1e9 / moved_dist;
    assert!(close(b1.a.norm(), expected_b1, 1e-12));
    assert!(b1.a.norm() > b0.a.norm());
}

// ==================================================================================
// Store / scenario tests
// ==================================================================================

#[test]
fn clear_after_three_bodies_leaves_nothing() {
    let mut scenario = Scenario::default();
    scenario.place_body(NVec2::new(1.0, 1.0));
    scenario.place_body(NVec2::new(2.0, 2.0));
    assert_eq!(scenario.place_body(NVec2::new(3.0, 3.0)), 3);

    scenario.reset();

    assert_eq!(scenario.system.len(), 0);
    assert_eq!(scenario.system.iter().count(), 0);
    // restartable
    assert!(scenario.system.iter().next().is_none());
}

#[test]
fn paused_steps_change_nothing() {
    let mut scenario = Scenario::default();
    scenario.engine.pending.v = NVec2::new(0.3, 0.1);
    scenario.place_body(NVec2::new(100.0, 100.0));
    scenario.place_body(NVec2::new(200.0, 100.0));
    let before: Vec<Body> = scenario.system.iter().cloned().collect();

    assert!(!scenario.engine.running);
    for _ in 0..5 {
        assert!(!scenario.step());
    }

    let after: Vec<Body> = scenario.system.iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn toggling_twice_pauses_again() {
    let mut scenario = Scenario::default();
    scenario.place_body(NVec2::new(0.0, 0.0));
    scenario.place_body(NVec2::new(100.0, 0.0));

    scenario.engine.toggle_running();
    assert!(scenario.step());
    scenario.engine.toggle_running();

    let snapshot: Vec<Body> = scenario.system.iter().cloned().collect();
    scenario.step();
    scenario.step();
    assert_eq!(snapshot, scenario.system.iter().cloned().collect::<Vec<_>>());
}

#[test]
fn pending_changes_do_not_touch_existing_bodies() {
    let mut scenario = Scenario::default();
    scenario.place_body(NVec2::new(0.0, 0.0));

    scenario.engine.heavier();
    scenario.engine.nudge_velocity(1.0, 0.0);
    scenario.place_body(NVec2::new(50.0, 0.0));

    let first = &scenario.system.bodies()[0];
    let second = &scenario.system.bodies()[1];
    assert_eq!(first.m, 1_000_000_000);
    assert_eq!(first.radius, 10.0);
    assert_eq!(first.v, NVec2::zeros());
    assert_eq!(second.m, 2_000_000_000);
    assert_eq!(second.radius, 20.0);
    assert!((second.v.x - 0.1).abs() < 1e-12);
}

#[test]
fn scenario_from_yaml_seeds_bodies_and_controls() {
    let yaml = "
parameters:
  G: 1.0
pending:
  mass: 5
  radius: 2.0
  velocity: [0.0, -0.1]
  delay_ms: 0
  running: true
bodies:
  - x: [0.0, 0.0]
    m: 0
    radius: 1.0
  - x: [10.0, 0.0]
    m: 100
    radius: 1.0
";
    let cfg = ScenarioConfig::from_yaml(yaml).unwrap();
    let mut scenario = Scenario::build_scenario(&cfg).unwrap();

    assert_eq!(scenario.system.len(), 2);
    assert_eq!(scenario.engine.pending.m, 5);
    assert_eq!(scenario.engine.delay_ms, 1);
    assert!(scenario.engine.running);

    scenario.step();
    // G = 1, m = 100, d = 10: |a| = 10
    let a = scenario.system.bodies()[0].a;
    assert!((a.x - 10.0).abs() < 1e-9);
}

#[test]
fn shipped_scenarios_load() {
    let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for name in ["binary.yaml", "empty.yaml"] {
        let cfg = ScenarioConfig::from_path(&dir.join(name)).unwrap();
        Scenario::build_scenario(&cfg).unwrap();
    }
}
