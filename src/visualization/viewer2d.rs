use std::time::Duration;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::configuration::config::ViewConfig;
use crate::shutdown::QuitFlag;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// Overlay multipliers and window size for drawing
#[derive(Resource)]
struct Overlay(ViewConfig);

/// Radius of the dot drawn at each body center
const CENTER_DOT: f32 = 1.0;

pub fn run_2d(scenario: Scenario, view: ViewConfig, quit: QuitFlag) {
    info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.len());

    let timestep = Duration::from_millis(scenario.engine.delay_ms);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "n-Body Simulator".into(),
                resolution: (view.width, view.height).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // The frame delay paces the physics: one step per fixed tick
        .insert_resource(Time::<Fixed>::from_duration(timestep))
        .insert_resource(scenario)
        .insert_resource(Overlay(view))
        .insert_resource(quit)
        .add_systems(Startup, setup_camera_system)
        .add_systems(First, quit_flag_system)
        .add_systems(
            Update,
            (
                mouse_input_system,
                keyboard_input_system,
                sync_timestep_system,
                draw_bodies_system,
            )
                .chain(),
        )
        .add_systems(FixedUpdate, physics_step_system)
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    // Origin at the window center, 1 world unit = 1 logical pixel
    commands.spawn(Camera2dBundle::default());
}

fn quit_flag_system(quit: Res<QuitFlag>, mut exit: EventWriter<AppExit>) {
    if quit.is_set() {
        info!("Interrupted, closing viewer.");
        exit.send(AppExit::Success);
    }
}

fn mouse_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scenario: ResMut<Scenario>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    // cursor_position is already top-left origin, y down
    if let Some(cursor) = window.cursor_position() {
        scenario.place_body(NVec2::new(cursor.x as f64, cursor.y as f64));
    }
}

fn keyboard_input_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    for key in keys.get_just_pressed() {
        match key {
            KeyCode::Equal | KeyCode::NumpadAdd => scenario.engine.heavier(),
            KeyCode::Minus | KeyCode::NumpadSubtract => scenario.engine.lighter(),
            KeyCode::ArrowUp => scenario.engine.nudge_velocity(0.0, -1.0),
            KeyCode::ArrowDown => scenario.engine.nudge_velocity(0.0, 1.0),
            KeyCode::ArrowLeft => scenario.engine.nudge_velocity(-1.0, 0.0),
            KeyCode::ArrowRight => scenario.engine.nudge_velocity(1.0, 0.0),
            KeyCode::Backspace => scenario.reset(),
            KeyCode::Space => {
                scenario.engine.toggle_running();
            }
            KeyCode::KeyM => scenario.engine.slower(),
            KeyCode::KeyN => scenario.engine.faster(),
            _ => {}
        }
    }
}

fn sync_timestep_system(scenario: Res<Scenario>, mut fixed: ResMut<Time<Fixed>>) {
    let timestep = Duration::from_millis(scenario.engine.delay_ms);
    if fixed.timestep() != timestep {
        fixed.set_timestep(timestep);
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.step();
}

fn draw_bodies_system(
    scenario: Res<Scenario>,
    overlay: Res<Overlay>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    let Overlay(view) = &*overlay;

    let body_color = Color::WHITE;
    let velocity_color = Color::srgb(1.0, 0.0, 0.0); // red
    let accel_color = Color::srgb(0.0, 1.0, 0.0); // green

    for body in scenario.system.iter() {
        let center = screen_to_world(&body.x, size);
        gizmos.circle_2d(center, CENTER_DOT, body_color);
        gizmos.circle_2d(center, body.radius.abs() as f32, body_color);

        let v_tip = body.x + body.v * view.velocity_scale as f64;
        gizmos.line_2d(center, screen_to_world(&v_tip, size), velocity_color);

        let a_tip = body.x + body.a * view.acceleration_scale as f64;
        gizmos.line_2d(center, screen_to_world(&a_tip, size), accel_color);
    }
}

/// Screen pixels (origin top-left, y down) to 2D world (origin center, y up)
fn screen_to_world(x: &NVec2, size: Vec2) -> Vec2 {
    Vec2::new(x.x as f32 - size.x / 2.0, size.y / 2.0 - x.y as f32)
}
