//! Reference frame driver owning every actor in a level.
//!
//! The world advances the player first, takes one snapshot of it, and then
//! advances each enemy against that same snapshot. Walkers are told which
//! platforms they overlap before they move. Sprite flips and player contacts
//! are reported back as [`FrameEvent`]s; what a contact means is left to the
//! game rules.

use glam::DVec2;
use log::{debug, info};

use crate::actor::EnemyKind;
use crate::context::{EnemyContext, FrameContext, PlatformId, PlatformSet};
use crate::enemy::{Behaviour, Enemy};
use crate::facing::{Facing, FacingChange};
use crate::geometry::Rect;
use crate::player::{Player, PlayerCommand};

/// A static platform enemies can stand on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// Identifier reported in overlap sets.
    pub id: PlatformId,
    /// Footprint on the pixel grid.
    pub rect: Rect,
}

/// Which actor an event concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorRef {
    /// The player.
    Player,
    /// Index into [`World::enemies`].
    Enemy(usize),
}

/// Something the renderer or game rules should react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// The actor's sprite must be mirrored to face `facing`.
    Flipped {
        /// Actor whose sprite turned.
        actor: ActorRef,
        /// Orientation after the flip.
        facing: Facing,
    },
    /// The player's footprint overlaps an enemy's.
    Contact {
        /// Index into [`World::enemies`].
        enemy: usize,
        /// Archetype of the touched enemy.
        kind: EnemyKind,
    },
}

/// Events produced by a single [`World::step`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Frame number after the step.
    pub tick: u64,
    /// Flips followed by contacts, in enemy order.
    pub events: Vec<FrameEvent>,
}

impl FrameReport {
    /// Iterates over the contact events only.
    pub fn contacts(&self) -> impl Iterator<Item = (usize, EnemyKind)> + '_ {
        self.events.iter().filter_map(|event| match *event {
            FrameEvent::Contact { enemy, kind } => Some((enemy, kind)),
            FrameEvent::Flipped { .. } => None,
        })
    }
}

/// A level in play.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    frame: FrameContext,
    player: Player,
    enemies: Vec<Enemy>,
    platforms: Vec<Platform>,
    tick: u64,
}

impl World {
    /// Creates an empty level with the player at `player_spawn`.
    #[must_use]
    pub fn new(frame: FrameContext, player_spawn: DVec2) -> Self {
        Self {
            frame,
            player: Player::new(player_spawn),
            enemies: Vec::new(),
            platforms: Vec::new(),
            tick: 0,
        }
    }

    /// Adds an enemy and returns its index.
    pub fn spawn_enemy(&mut self, kind: EnemyKind, spawn: DVec2) -> usize {
        self.enemies.push(Enemy::spawn(kind, spawn));
        self.enemies.len() - 1
    }

    /// Adds a platform and returns its identifier.
    pub fn add_platform(&mut self, rect: Rect) -> PlatformId {
        let id = PlatformId(u32::try_from(self.platforms.len()).unwrap_or(u32::MAX));
        self.platforms.push(Platform { id, rect });
        id
    }

    /// Frame parameters shared by every update.
    #[must_use]
    pub const fn frame(&self) -> &FrameContext {
        &self.frame
    }

    /// The player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Enemies in spawn order.
    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Platforms in insertion order.
    #[must_use]
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Frames stepped since the last restart.
    #[must_use]
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Platforms overlapping `bounds`.
    #[must_use]
    pub fn platforms_touching(&self, bounds: &Rect) -> PlatformSet {
        self.platforms
            .iter()
            .filter(|platform| platform.rect.intersects(bounds))
            .map(|platform| platform.id)
            .collect()
    }

    /// Advances the level by one frame.
    ///
    /// `commands` are applied to the player in order before it updates.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec2;
    /// use ledge::{EnemyKind, FrameContext, PlayerCommand, Size, World};
    ///
    /// let frame = FrameContext::new(Size::new(800, 720), 100)?;
    /// let mut world = World::new(frame, DVec2::new(100.0, 550.0));
    /// world.spawn_enemy(EnemyKind::Spikes, DVec2::new(130.0, 570.0));
    ///
    /// let report = world.step(&[PlayerCommand::Stop]);
    ///
    /// assert_eq!(report.tick, 1);
    /// assert_eq!(report.contacts().count(), 1);
    /// # Ok::<(), ledge::ContextError>(())
    /// ```
    pub fn step(&mut self, commands: &[PlayerCommand]) -> FrameReport {
        for &command in commands {
            self.player.apply(command);
        }
        self.player.update(&self.frame);
        let snapshot = self.player.snapshot();

        let touching: Vec<PlatformSet> = self
            .enemies
            .iter()
            .map(|enemy| self.platforms_touching(&enemy.state().bounding_box()))
            .collect();
        let mut events = Vec::new();
        for (index, (enemy, platforms)) in self.enemies.iter_mut().zip(&touching).enumerate() {
            let ctx = EnemyContext::new(&self.frame, snapshot, platforms);
            let change = enemy.update(&ctx);
            push_flip(&mut events, ActorRef::Enemy(index), change);
        }

        let player_box = self.player.state().bounding_box();
        events.extend(
            self.enemies
                .iter()
                .enumerate()
                .filter(|(_, enemy)| enemy.state().bounding_box().intersects(&player_box))
                .map(|(index, enemy)| FrameEvent::Contact {
                    enemy: index,
                    kind: enemy.kind(),
                }),
        );

        self.tick += 1;
        FrameReport {
            tick: self.tick,
            events,
        }
    }

    /// Returns every actor to its spawn state and resets the frame count.
    ///
    /// The returned events list the sprites that must be mirrored back to
    /// their spawn orientation.
    pub fn restart(&mut self) -> Vec<FrameEvent> {
        info!("restarting level after {} frames", self.tick);
        let mut events = Vec::new();
        let change = self.player.reinitialize();
        push_flip(&mut events, ActorRef::Player, change);
        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            let change = enemy.reinitialize();
            push_flip(&mut events, ActorRef::Enemy(index), change);
        }
        self.tick = 0;
        events
    }
}

fn push_flip(events: &mut Vec<FrameEvent>, actor: ActorRef, change: FacingChange) {
    if change.flipped {
        debug!("{actor:?} flipped to face {:?}", change.facing);
        events.push(FrameEvent::Flipped {
            actor,
            facing: change.facing,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn walker_box(world: &World, index: usize) -> Rect {
        world
            .enemies()
            .get(index)
            .expect("walker spawned")
            .state()
            .bounding_box()
    }

    fn world() -> World {
        let frame = FrameContext::new(Size::new(800, 720), 100).expect("valid frame");
        World::new(frame, DVec2::new(100.0, 550.0))
    }

    #[test]
    fn walker_rests_on_overlapping_platform() {
        let mut world = world();
        world.add_platform(Rect::new(0, 300, 400, 20));
        // bottom edge at 301 overlaps the platform top by one pixel
        let walker = world.spawn_enemy(EnemyKind::Walking, DVec2::new(100.0, 251.0));

        for _ in 0..10 {
            world.step(&[]);
        }

        let bounds = walker_box(&world, walker);
        assert_eq!(bounds.y, 251);
        assert_eq!(bounds.x, 130);
    }

    #[test]
    fn walker_falls_through_an_edge_contact() {
        let mut world = world();
        world.add_platform(Rect::new(0, 300, 400, 20));
        let walker = world.spawn_enemy(EnemyKind::Walking, DVec2::new(100.0, 240.0));

        for _ in 0..3 {
            world.step(&[]);
        }
        let bounds = walker_box(&world, walker);
        assert_eq!(bounds.y, 255, "touching a platform edge does not count as standing on it");
    }

    #[test]
    fn each_walker_gets_its_own_platform_contacts() {
        let mut world = world();
        world.add_platform(Rect::new(0, 300, 200, 20));
        let resting = world.spawn_enemy(EnemyKind::Walking, DVec2::new(50.0, 251.0));
        let falling = world.spawn_enemy(EnemyKind::Walking, DVec2::new(500.0, 251.0));
        let spikes = world.spawn_enemy(EnemyKind::Spikes, DVec2::new(100.0, 260.0));

        world.step(&[]);

        assert_eq!(walker_box(&world, resting).y, 251);
        assert_eq!(walker_box(&world, falling).y, 256);
        assert_eq!(walker_box(&world, spikes).y, 260);
    }

    #[test]
    fn step_reports_flips_and_restart_undoes_them() {
        let mut world = world();
        let walker = world.spawn_enemy(EnemyKind::Walking, DVec2::new(790.0, 570.0));

        let report = world.step(&[]);
        assert_eq!(
            report.events,
            vec![FrameEvent::Flipped {
                actor: ActorRef::Enemy(walker),
                facing: Facing::Left
            }]
        );

        let restart = world.restart();
        assert_eq!(
            restart,
            vec![FrameEvent::Flipped {
                actor: ActorRef::Enemy(walker),
                facing: Facing::Right
            }]
        );
        assert_eq!(world.tick(), 0);
    }

    #[test]
    fn commands_apply_before_player_update() {
        let mut world = world();
        world.step(&[PlayerCommand::Walk(Facing::Right), PlayerCommand::Jump]);
        let bounds = world.player().state().bounding_box();
        assert_eq!((bounds.x, bounds.y), (101, 503));
    }
}
