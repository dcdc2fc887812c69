//! Headless driver for `ledge` levels.
//!
//! Loads a level layout (or a built-in demo), steps it for a number of
//! frames with a scripted player, and logs flips and contacts as they
//! happen.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glam::DVec2;
use ledge::{
    init_logging, Behaviour, EnemyKind, EnemySpawn, Facing, FrameEvent, LevelLayout,
    PlayerCommand, Rect, Size, SpawnPoint, World,
};
use log::{info, warn};

/// Direction the scripted player walks in.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Walk {
    Left,
    Right,
}

impl From<Walk> for Facing {
    fn from(walk: Walk) -> Self {
        match walk {
            Walk::Left => Self::Left,
            Walk::Right => Self::Right,
        }
    }
}

/// Step a platformer level without a window
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Level layout to load (JSON); a demo level is used when omitted
    #[arg(short, long)]
    level: Option<PathBuf>,
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,
    /// Keep the player walking in this direction
    #[arg(long, value_enum)]
    walk: Option<Walk>,
    /// Jump every N frames (0 disables jumping)
    #[arg(long, default_value_t = 0)]
    jump_every: u64,
    /// Restart the level whenever the player touches an enemy
    #[arg(long)]
    restart_on_contact: bool,
    /// Write the level layout to this path before exiting
    #[arg(long)]
    save_layout: Option<PathBuf>,
}

fn demo_layout() -> LevelLayout {
    LevelLayout {
        screen: Size::new(800, 720),
        floor_height: 100,
        player_spawn: SpawnPoint { x: 100.0, y: 550.0 },
        enemies: vec![
            EnemySpawn {
                kind: EnemyKind::Walking,
                spawn: SpawnPoint { x: 0.0, y: 300.0 },
            },
            EnemySpawn {
                kind: EnemyKind::Flying,
                spawn: SpawnPoint { x: 650.0, y: 60.0 },
            },
            EnemySpawn {
                kind: EnemyKind::Spikes,
                spawn: SpawnPoint { x: 400.0, y: 570.0 },
            },
        ],
        platforms: vec![Rect::new(250, 450, 300, 20)],
    }
}

fn commands_for(args: &Args, tick: u64) -> Vec<PlayerCommand> {
    let mut commands = Vec::with_capacity(2);
    if let Some(walk) = args.walk {
        commands.push(PlayerCommand::Walk(walk.into()));
    }
    if args.jump_every > 0 && tick % args.jump_every == 0 {
        commands.push(PlayerCommand::Jump);
    }
    commands
}

/// Totals for a whole run, independent of level restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunSummary {
    frames: u64,
    restarts: u64,
}

fn run(args: &Args, world: &mut World) -> RunSummary {
    let mut summary = RunSummary {
        frames: 0,
        restarts: 0,
    };
    for _ in 0..args.frames {
        let commands = commands_for(args, world.tick());
        let report = world.step(&commands);
        summary.frames += 1;
        for event in &report.events {
            match *event {
                FrameEvent::Flipped { actor, facing } => {
                    info!("frame {}: {actor:?} now faces {facing:?}", summary.frames);
                }
                FrameEvent::Contact { enemy, kind } => {
                    warn!("frame {}: player touched {kind} #{enemy}", summary.frames);
                }
            }
        }
        if args.restart_on_contact && report.contacts().next().is_some() {
            let flips = world.restart();
            summary.restarts += 1;
            info!("level restarted, {} sprites flipped back", flips.len());
        }
    }
    summary
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let layout = match &args.level {
        Some(path) => LevelLayout::load(path)
            .with_context(|| format!("loading level {}", path.display()))?,
        None => demo_layout(),
    };
    let mut world = layout.build().context("building level")?;

    let summary = run(&args, &mut world);

    let player = world.player().state().position();
    info!(
        "after {} frames and {} restarts the player is at ({:.1}, {:.1})",
        summary.frames, summary.restarts, player.x, player.y
    );
    for (index, enemy) in world.enemies().iter().enumerate() {
        let DVec2 { x, y } = enemy.state().position();
        info!("{} #{index} at ({x:.1}, {y:.1})", enemy.kind());
    }

    if let Some(path) = &args.save_layout {
        LevelLayout::capture(&world)
            .save(path)
            .with_context(|| format!("saving level {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touching_spikes() -> World {
        let mut layout = demo_layout();
        layout.enemies = vec![EnemySpawn {
            kind: EnemyKind::Spikes,
            spawn: SpawnPoint { x: 120.0, y: 570.0 },
        }];
        layout.build().expect("demo layout is valid")
    }

    #[test]
    fn frame_total_survives_restarts() {
        let args = Args::parse_from(["ledge", "--frames", "30", "--restart-on-contact"]);
        let mut world = touching_spikes();

        let summary = run(&args, &mut world);

        assert_eq!(summary.frames, 30);
        assert_eq!(summary.restarts, 30);
        assert_eq!(world.tick(), 0);
    }

    #[test]
    fn no_restarts_without_the_flag() {
        let args = Args::parse_from(["ledge", "--frames", "12"]);
        let mut world = touching_spikes();

        let summary = run(&args, &mut world);

        assert_eq!(summary.restarts, 0);
        assert_eq!(world.tick(), 12);
    }

    #[test]
    fn jumps_follow_the_configured_interval() {
        let args = Args::parse_from(["ledge", "--walk", "left", "--jump-every", "4"]);

        assert_eq!(
            commands_for(&args, 8),
            vec![PlayerCommand::Walk(Facing::Left), PlayerCommand::Jump]
        );
        assert_eq!(commands_for(&args, 9), vec![PlayerCommand::Walk(Facing::Left)]);
    }
}
