//! Controller Tests - Locomotion, Jump, Crouch, Wall Cling and Rotation
//!
//! Drives a full SideScrollController against a StaticWorld without a
//! physics step in between, so every assertion sees exactly what one
//! `update` / `fixed_update` wrote onto the body.

use glam::Vec2;
use sidescroll_engine::input::{ButtonState, InputFrame};
use sidescroll_engine::physics::{Aabb2, BoxCollider2D, GROUND_LAYER, RigidBody2D, StaticWorld};
use sidescroll_engine::player::{
    ClingEvent, ControllerConfig, ControllerError, CrouchTransition, DetachReason, JumpAction,
    RotationPolicy, SideScrollController,
};

const EPSILON: f32 = 1e-4;
const DT: f32 = 1.0 / 60.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Floor with its top at y = 0 and a wall whose right face is at x = -2.
fn arena() -> StaticWorld {
    let mut world = StaticWorld::new();
    world.add_box(Aabb2::new(Vec2::new(-50.0, -1.0), Vec2::new(50.0, 0.0)), GROUND_LAYER);
    world.add_box(Aabb2::new(Vec2::new(-3.0, 0.0), Vec2::new(-2.0, 20.0)), GROUND_LAYER);
    world
}

fn controller(config: ControllerConfig, at: Vec2) -> SideScrollController {
    SideScrollController::builder()
        .config(config)
        .body(RigidBody2D::new(at))
        .collider(BoxCollider2D::new(Vec2::new(1.0, 2.0)))
        .build()
        .unwrap()
}

/// Standing on the floor, away from the wall.
fn standing(config: ControllerConfig) -> SideScrollController {
    controller(config, Vec2::new(5.0, 1.0))
}

/// Airborne, left edge 0.2 from the wall, falling at 1 m/s.
fn falling_by_wall() -> SideScrollController {
    let mut controller = controller(ControllerConfig::wall_runner(), Vec2::new(-1.3, 8.0));
    controller.body_mut().velocity = Vec2::new(0.0, -1.0);
    controller
}

fn input(horizontal: f32, vertical: f32, jump: ButtonState) -> InputFrame {
    InputFrame::new(horizontal, vertical, jump)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_build_fails_fast_without_parts() {
    assert!(matches!(
        SideScrollController::builder().build(),
        Err(ControllerError::MissingBody)
    ));
    assert!(matches!(
        SideScrollController::builder()
            .collider(BoxCollider2D::new(Vec2::new(-1.0, 2.0)))
            .body(RigidBody2D::default())
            .build(),
        Err(ControllerError::DegenerateCollider(_))
    ));
}

#[test]
fn test_build_from_json_config_file() {
    let path = std::env::temp_dir().join(format!("sidescroll_controller_{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "wall_cling": { "enabled": true }, "rotation": { "policy": { "mode": "locked" } } }"#,
    )
    .unwrap();

    let config = ControllerConfig::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let controller = standing(config);
    assert!(controller.wall_cling().is_some());
    assert_eq!(controller.rotation_policy(), RotationPolicy::Locked);
    assert!(controller.body().freeze_rotation);
}

// ============================================================================
// Locomotion
// ============================================================================

#[test]
fn test_grounded_acceleration_scenario() {
    let mut controller = standing(ControllerConfig::default());
    let mut world = arena();

    controller.update(0.1, &InputFrame::horizontal(1.0), &mut world);

    assert!(controller.is_grounded());
    assert!(approx_eq(controller.body().velocity.x, 2.5));
    assert_eq!(controller.facing(), 1.0);
}

#[test]
fn test_grounded_speed_never_exceeds_max() {
    let mut controller = standing(ControllerConfig::default());
    let mut world = arena();

    for _ in 0..120 {
        controller.update(DT, &InputFrame::horizontal(1.0), &mut world);
        assert!(controller.body().velocity.x <= 7.0 + EPSILON);
    }
    assert!(approx_eq(controller.body().velocity.x, 7.0));
}

#[test]
fn test_crouched_speed_never_exceeds_scaled_max() {
    let mut controller = standing(ControllerConfig::default());
    let mut world = arena();

    for _ in 0..120 {
        controller.update(DT, &input(1.0, -1.0, ButtonState::IDLE), &mut world);
        assert!(controller.is_grounded());
        assert!(controller.body().velocity.x <= 7.0 * 0.6 + EPSILON);
    }
    assert!(controller.is_crouching());
    assert!(approx_eq(controller.body().velocity.x, 4.2));
}

#[test]
fn test_turnaround_uses_turnaround_rate() {
    let mut controller = standing(ControllerConfig::default());
    let mut world = arena();
    controller.body_mut().velocity.x = 5.0;

    controller.update(0.1, &InputFrame::horizontal(-1.0), &mut world);

    assert!(approx_eq(controller.body().velocity.x, 1.5));
    assert_eq!(controller.facing(), -1.0);
}

// ============================================================================
// Jump
// ============================================================================

#[test]
fn test_jump_is_idempotent_while_jumping() {
    let mut controller = standing(ControllerConfig::default());
    let mut world = arena();

    let report = controller.update(DT, &input(0.0, 0.0, ButtonState::press()), &mut world);
    assert_eq!(report.jump, JumpAction::Jumped);
    assert_eq!(controller.body().velocity.y, 12.0);

    // Pretend the engine moved us up a little but we are still in ground range
    controller.body_mut().velocity.y = 9.0;
    controller.body_mut().take_force();
    controller.update(DT, &input(0.0, 0.0, ButtonState::release()), &mut world);
    controller.body_mut().take_force();

    let report = controller.update(DT, &input(0.0, 0.0, ButtonState::press()), &mut world);
    // Released, so no longer jumping: the new press is a fresh jump
    assert_eq!(report.jump, JumpAction::Jumped);

    let report = controller.update(DT, &input(0.0, 0.0, ButtonState::press()), &mut world);
    assert_eq!(report.jump, JumpAction::None);
    assert!(controller.is_jumping());
}

#[test]
fn test_hold_thrust_goes_through_body_force() {
    let mut controller = standing(ControllerConfig::default());
    let mut world = arena();

    controller.update(DT, &input(0.0, 0.0, ButtonState::press()), &mut world);
    let thrust = controller.body_mut().take_force();
    assert!(approx_eq(thrust.y, 12.0 * 0.5 * DT * 50.0));
    assert_eq!(thrust.x, 0.0);
}

// ============================================================================
// Crouch
// ============================================================================

#[test]
fn test_crouch_and_stand_in_the_open() {
    let mut controller = standing(ControllerConfig::default());
    let mut world = arena();

    let report = controller.update(DT, &input(0.0, -1.0, ButtonState::IDLE), &mut world);
    assert_eq!(report.crouch, Some(CrouchTransition::Crouched));
    assert_eq!(controller.collider().size, Vec2::new(1.0, 1.0));

    let report = controller.update(DT, &InputFrame::default(), &mut world);
    assert_eq!(report.crouch, Some(CrouchTransition::Stood));
    assert_eq!(controller.collider().size, Vec2::new(1.0, 2.0));
    assert_eq!(controller.collider().offset, Vec2::ZERO);
}

#[test]
fn test_rejected_stand_leaves_collider_unchanged() {
    let mut controller = standing(ControllerConfig::default());
    let mut world = arena();
    // Low ceiling from 1.6 up, right where the standing head would be
    world.add_box(Aabb2::new(Vec2::new(3.0, 1.6), Vec2::new(7.0, 3.0)), GROUND_LAYER);

    controller.update(DT, &input(0.0, -1.0, ButtonState::IDLE), &mut world);
    let crouched = *controller.collider();

    for _ in 0..10 {
        let report = controller.update(DT, &InputFrame::default(), &mut world);
        assert_eq!(report.crouch, Some(CrouchTransition::StandBlocked));
        assert_eq!(*controller.collider(), crouched);
        assert!(controller.is_crouching());
    }
}

#[test]
fn test_crouch_disabled() {
    let mut config = ControllerConfig::default();
    config.crouch.enabled = false;
    let mut controller = standing(config);
    let mut world = arena();

    let report = controller.update(DT, &input(0.0, -1.0, ButtonState::IDLE), &mut world);
    assert_eq!(report.crouch, None);
    assert!(!controller.is_crouching());
    assert_eq!(controller.collider().size, Vec2::new(1.0, 2.0));
}

// ============================================================================
// Wall cling
// ============================================================================

#[test]
fn test_cling_scenario_zeroes_velocity() {
    let mut controller = falling_by_wall();
    let mut world = arena();

    let report = controller.update(DT, &InputFrame::horizontal(-1.0), &mut world);

    assert!(report.sensor.touching_wall_left);
    assert_eq!(report.cling, Some(ClingEvent::Attached));
    assert!(controller.is_wall_clinging());
    assert!(controller.is_touching_wall());
    assert_eq!(controller.body().velocity.x, 0.0);
    // Zeroed on attach, eased one step toward the slide speed
    assert!(approx_eq(controller.body().velocity.y, -2.0 * DT * 10.0));
}

#[test]
fn test_cling_not_attempted_when_disabled() {
    let mut controller = controller(ControllerConfig::default(), Vec2::new(-1.3, 8.0));
    controller.body_mut().velocity = Vec2::new(0.0, -1.0);
    let mut world = arena();

    let report = controller.update(DT, &InputFrame::horizontal(-1.0), &mut world);

    assert_eq!(report.cling, None);
    assert!(!report.sensor.touching_wall_left);
    assert!(!controller.is_wall_clinging());
}

#[test]
fn test_wall_jump_launches_away_from_left_wall() {
    let mut controller = falling_by_wall();
    let mut world = arena();
    controller.update(DT, &InputFrame::horizontal(-1.0), &mut world);

    let report = controller.update(DT, &input(-1.0, 0.0, ButtonState::press()), &mut world);

    assert_eq!(report.jump, JumpAction::WallJumped { facing: 1.0 });
    assert!(!controller.is_wall_clinging());
    assert!(controller.body().velocity.x > 0.0);
    assert!(controller.body().velocity.y > 0.0);
    assert_eq!(controller.facing(), 1.0);
}

#[test]
fn test_steering_back_does_not_cut_wall_jump_launch() {
    let mut controller = falling_by_wall();
    let mut world = arena();
    controller.update(DT, &InputFrame::horizontal(-1.0), &mut world);
    controller.update(DT, &input(-1.0, 0.0, ButtonState::press()), &mut world);
    let launch = controller.body().velocity;
    assert!(approx_eq(launch.x, 6.0 * std::f32::consts::FRAC_1_SQRT_2));

    controller.update(DT, &input(-1.0, 0.0, ButtonState::hold()), &mut world);

    let wall = controller.wall_cling().unwrap();
    assert!(approx_eq(wall.wall_jump_timer(), 0.2 - DT));
    assert!(wall.is_launching());
    assert_eq!(controller.body().velocity.x, launch.x);
    assert_eq!(controller.facing(), 1.0);
    assert_eq!(controller.body().pending_force(), Vec2::ZERO);
}

#[test]
fn test_no_wall_jump_after_moving_off_the_wall() {
    let mut controller = falling_by_wall();
    let mut world = arena();
    controller.update(DT, &InputFrame::horizontal(-1.0), &mut world);
    assert!(controller.is_wall_clinging());

    controller.body_mut().position = Vec2::new(10.0, 8.0);
    let report = controller.update(DT, &input(0.0, 0.0, ButtonState::press()), &mut world);

    assert!(!report.sensor.touching_wall_left);
    assert_eq!(report.jump, JumpAction::None);
    assert_eq!(report.cling, Some(ClingEvent::Detached(DetachReason::LostContact)));
    assert!(!controller.is_wall_clinging());
    assert!(controller.body().velocity.y <= 0.0);
    assert_eq!(controller.wall_cling().unwrap().wall_jump_timer(), 0.0);
}

#[test]
fn test_cling_budget_refuses_reattach_until_grounded() {
    let mut controller = falling_by_wall();
    let mut world = arena();

    let mut detached = None;
    for _ in 0..200 {
        let report = controller.update(DT, &InputFrame::horizontal(-1.0), &mut world);
        if let Some(ClingEvent::Detached(reason)) = report.cling {
            detached = Some(reason);
            break;
        }
    }
    assert_eq!(detached, Some(DetachReason::BudgetSpent));
    assert!(controller.wall_cling_timer() >= 2.0);

    // Still airborne by the wall and pressing into it: refused
    for _ in 0..5 {
        controller.body_mut().velocity = Vec2::new(0.0, -1.0);
        controller.update(DT, &InputFrame::horizontal(-1.0), &mut world);
        assert!(!controller.is_wall_clinging());
    }

    // Landing resets the budget
    controller.body_mut().position = Vec2::new(-1.3, 1.0);
    controller.body_mut().velocity = Vec2::ZERO;
    controller.update(DT, &InputFrame::horizontal(-1.0), &mut world);
    assert!(controller.is_grounded());
    assert_eq!(controller.wall_cling_timer(), 0.0);
}

#[test]
fn test_edge_smoothing_skipped_while_clinging() {
    let mut controller = falling_by_wall();
    let mut world = arena();

    let report = controller.update(DT, &InputFrame::horizontal(-1.0), &mut world);
    assert!(controller.is_wall_clinging());
    assert_eq!(report.step_height, None);
    assert_eq!(controller.body().pending_force(), Vec2::ZERO);
}

// ============================================================================
// Rotation
// ============================================================================

#[test]
fn test_clamped_rotation_from_35_degrees() {
    let mut config = ControllerConfig::default();
    config.rotation.policy = RotationPolicy::Clamped {
        max_rotation_angle: 20.0,
        return_rotation_speed: 180.0,
    };
    let mut controller = standing(config);
    controller.body_mut().rotation = 35.0;
    controller.body_mut().angular_velocity = 120.0;

    controller.fixed_update(0.02);

    assert!(controller.body().rotation <= 20.0);
    assert_eq!(controller.body().angular_velocity, 0.0);
}

#[test]
fn test_clamped_rotation_holds_while_pushing_wall() {
    let mut config = ControllerConfig::default();
    config.rotation.policy = RotationPolicy::clamped();
    // Standing against the wall: left edge at -2.0
    let mut controller = controller(config, Vec2::new(-1.5, 1.0));
    let mut world = arena();
    controller.body_mut().rotation = 10.0;

    controller.update(DT, &InputFrame::horizontal(-1.0), &mut world);
    // Velocity builds up without an engine to stop it; the wall would
    controller.body_mut().velocity.x = 0.0;
    controller.fixed_update(0.02);

    assert_eq!(controller.body().rotation, 10.0);
}

#[test]
fn test_free_rotation_is_untouched() {
    let mut controller = standing(ControllerConfig::default());
    controller.body_mut().rotation = 45.0;
    controller.body_mut().angular_velocity = 30.0;

    controller.fixed_update(0.02);

    assert_eq!(controller.body().rotation, 45.0);
    assert_eq!(controller.body().angular_velocity, 30.0);
    assert!(!controller.body().freeze_rotation);
}
