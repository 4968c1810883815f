//! Side-Scroller Headless Simulation
//!
//! Run with: `cargo run --bin sidescroll-sim -- --wall-runner`
//!
//! Drives a SideScrollController through a scripted input sequence on a
//! small test level and logs what the controller did. Uses the reference
//! Euler step and overlap resolver in place of a real physics engine.
//!
//! Level layout (floor top at y = 0):
//! - Damaging strip: x -10..-3
//! - One-way platform: x 6..10, top at 2.75
//! - Wall: x 18..19, up to y = 12
//!
//! Set `RUST_LOG=sidescroll_engine=trace` to see every sensor result.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use sidescroll_engine::health::{Health, HealthEvent};
use sidescroll_engine::input::{ButtonTracker, InputFrame};
use sidescroll_engine::physics::{Aabb2, BoxCollider2D, RigidBody2D};
use sidescroll_engine::player::{ControllerConfig, JumpAction, SideScrollController};
use sidescroll_engine::world::{Block, BlockKind, Level};

#[derive(Parser)]
#[command(name = "sidescroll-sim")]
#[command(about = "Headless side-scroller controller simulation", long_about = None)]
struct Cli {
    /// Controller config JSON (defaults apply to missing fields)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Use the wall-runner preset (wall cling on, clamped rotation) when no config is given
    #[arg(long)]
    wall_runner: bool,
    /// Frame delta in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// World gravity along y (m/s^2)
    #[arg(long, default_value_t = -20.0, allow_hyphen_values = true)]
    gravity: f32,
    /// Damage per frame while standing on a damaging block
    #[arg(long, default_value_t = 1.0)]
    damage: f32,
}

// ============================================================================
// SCRIPT
// ============================================================================

/// One stretch of constant input.
struct Segment {
    label: &'static str,
    seconds: f32,
    horizontal: f32,
    vertical: f32,
    jump: bool,
}

const fn segment(label: &'static str, seconds: f32, horizontal: f32, vertical: f32, jump: bool) -> Segment {
    Segment {
        label,
        seconds,
        horizontal,
        vertical,
        jump,
    }
}

const SCRIPT: &[Segment] = &[
    segment("settle", 0.5, 0.0, 0.0, false),
    segment("run right", 1.0, 1.0, 0.0, false),
    segment("jump onto platform", 0.25, 0.6, 0.0, true),
    segment("drift", 1.0, 0.4, 0.0, false),
    segment("drop through", 0.8, 0.0, -1.0, false),
    segment("stand", 0.3, 0.0, 0.0, false),
    segment("run to wall", 1.5, 1.0, 0.0, false),
    segment("jump at wall", 0.2, 1.0, 0.0, true),
    segment("cling", 0.6, 1.0, 0.0, false),
    segment("wall jump", 0.1, 1.0, 0.0, true),
    segment("fall", 1.2, 0.0, 0.0, false),
    segment("run left", 4.0, -1.0, 0.0, false),
    segment("crouch walk", 0.8, -1.0, -1.0, false),
    segment("idle", 1.0, 0.0, 0.0, false),
];

fn build_level() -> Level {
    let mut level = Level::new();
    level.spawn(Block::new(
        BlockKind::Damaging,
        Aabb2::new(Vec2::new(-10.0, -1.0), Vec2::new(-3.0, 0.0)),
    ));
    level.spawn(Block::new(
        BlockKind::Normal,
        Aabb2::new(Vec2::new(-3.0, -1.0), Vec2::new(40.0, 0.0)),
    ));
    level.spawn(Block::centered(BlockKind::Platform, Vec2::new(8.0, 2.5), Vec2::new(4.0, 0.5)));
    level.spawn(Block::new(
        BlockKind::Normal,
        Aabb2::new(Vec2::new(18.0, 0.0), Vec2::new(19.0, 12.0)),
    ));
    level
}

fn load_config(cli: &Cli) -> anyhow::Result<ControllerConfig> {
    match &cli.config {
        Some(path) => ControllerConfig::from_json_file(path)
            .with_context(|| format!("loading controller config from {}", path.display())),
        None if cli.wall_runner => Ok(ControllerConfig::wall_runner()),
        None => Ok(ControllerConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("sidescroll_engine=debug".parse()?)
                .add_directive("sidescroll_sim=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(cli.dt.is_finite() && cli.dt > 0.0, "frame delta must be positive, got {}", cli.dt);

    let config = load_config(&cli)?;
    tracing::info!(config = %config.to_json_string()?, "controller config");

    let mut level = build_level();
    let mut controller = SideScrollController::builder()
        .config(config)
        .body(RigidBody2D::new(Vec2::new(0.0, 3.0)))
        .collider(BoxCollider2D::new(Vec2::new(1.0, 2.0)))
        .build()?;
    let mut health = Health::new(100.0)?;
    let mut jump_button = ButtonTracker::new();
    let gravity = Vec2::new(0.0, cli.gravity);

    let frames_per_second = (1.0 / cli.dt).round().max(1.0) as u64;
    let mut frame: u64 = 0;

    for seg in SCRIPT {
        tracing::info!(segment = seg.label, seconds = seg.seconds, "segment");
        let frames = (seg.seconds / cli.dt).round() as u64;

        for _ in 0..frames {
            let input = InputFrame::new(seg.horizontal, seg.vertical, jump_button.update(seg.jump));

            level.update_platforms(controller.ground_check_point(), input.vertical);
            let report = controller.update(cli.dt, &input, level.world_mut());
            controller.fixed_update(cli.dt);
            controller.body_mut().integrate(cli.dt, gravity);
            let collider = *controller.collider();
            level.world().resolve_overlaps(controller.body_mut(), &collider);

            match report.jump {
                JumpAction::None => {}
                action => tracing::info!(frame, ?action, "jump"),
            }

            if report.sensor.is_grounded {
                let center = collider.bounds(controller.body()).center();
                let reach = center.y - controller.ground_check_point().y;
                if level.block_below(center, reach).is_some_and(BlockKind::is_damaging) {
                    for event in health.change(-cli.damage) {
                        match event {
                            HealthEvent::Died => tracing::warn!(frame, "player died"),
                            HealthEvent::Changed { current, max, .. } => {
                                tracing::trace!(current, max, "health")
                            }
                            HealthEvent::DamageTaken { .. } => {}
                        }
                    }
                }
            }

            frame += 1;
            if frame % frames_per_second == 0 {
                let body = controller.body();
                tracing::info!(
                    frame,
                    position = ?body.position,
                    velocity = ?body.velocity,
                    rotation = body.rotation,
                    grounded = controller.is_grounded(),
                    crouching = controller.is_crouching(),
                    clinging = controller.is_wall_clinging(),
                    health = health.current(),
                    "summary"
                );
            }
        }
    }

    tracing::info!(
        frames = frame,
        position = ?controller.body().position,
        health = health.current(),
        dead = health.is_dead(),
        "simulation finished"
    );
    Ok(())
}
