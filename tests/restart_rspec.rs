//! Behaviour tests for level restarts using rust-rspec.
//!
//! A level is played for a while, restarted, and checked against a freshly
//! built copy of the same layout.

use std::fmt;

use ledge::{
    ActorRef, Behaviour, EnemyKind, EnemySpawn, Facing, FrameEvent, LevelLayout, PlayerCommand,
    Rect, Size, SpawnPoint, World,
};
use test_utils::fixtures::run_frames;

#[derive(Clone)]
struct RestartWorld {
    world: World,
    restart_events: Vec<FrameEvent>,
}

impl fmt::Debug for RestartWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestartWorld")
            .field("tick", &self.world.tick())
            .field("restart_events", &self.restart_events)
            .finish()
    }
}

impl Default for RestartWorld {
    fn default() -> Self {
        Self {
            world: build(),
            restart_events: Vec::new(),
        }
    }
}

fn layout() -> LevelLayout {
    LevelLayout {
        screen: Size::new(800, 720),
        floor_height: 100,
        player_spawn: SpawnPoint { x: 300.0, y: 550.0 },
        enemies: vec![
            EnemySpawn {
                kind: EnemyKind::Walking,
                spawn: SpawnPoint { x: 600.0, y: 300.0 },
            },
            EnemySpawn {
                kind: EnemyKind::Flying,
                spawn: SpawnPoint { x: 50.0, y: 50.0 },
            },
            EnemySpawn {
                kind: EnemyKind::Spikes,
                spawn: SpawnPoint { x: 700.0, y: 570.0 },
            },
        ],
        platforms: vec![Rect::new(500, 400, 200, 20)],
    }
}

fn build() -> World {
    layout()
        .build()
        .unwrap_or_else(|err| panic!("layout rejected: {err}"))
}

impl RestartWorld {
    fn play(&mut self, frames: usize) {
        run_frames(
            &mut self.world,
            frames,
            &[PlayerCommand::Walk(Facing::Left)],
        );
    }

    fn restart(&mut self) {
        self.restart_events = self.world.restart();
    }

    fn assert_matches_fresh_level(&self) {
        let fresh = build();
        assert_eq!(self.world.tick(), 0);
        assert_eq!(self.world.player(), fresh.player());
        assert_eq!(self.world.enemies(), fresh.enemies());
        for (enemy, spawn) in self.world.enemies().iter().zip(&layout().enemies) {
            let position = enemy.state().position();
            assert_eq!((position.x, position.y), (spawn.spawn.x, spawn.spawn.y));
        }
    }
}

#[test]
fn restarting_returns_every_actor_to_spawn() {
    rspec::run(&rspec::given(
        "a level played for 120 frames",
        RestartWorld::default(),
        |ctx| {
            ctx.before_each(|env| env.play(120));

            ctx.when("the level restarts", |ctx| {
                ctx.before_each(|env| env.restart());

                ctx.then("every actor is back at its spawn state", |env| {
                    env.assert_matches_fresh_level();
                });

                ctx.then("the flier is flipped back to face left", |env| {
                    assert!(env.restart_events.contains(&FrameEvent::Flipped {
                        actor: ActorRef::Enemy(1),
                        facing: Facing::Left,
                    }));
                });
            });

            ctx.when("the level restarts twice", |ctx| {
                ctx.before_each(|env| {
                    env.restart();
                    env.restart();
                });

                ctx.then("the second restart changes nothing", |env| {
                    assert!(env.restart_events.is_empty());
                    env.assert_matches_fresh_level();
                });
            });
        },
    ));
}
