//! World state
//!
//! Everything one simulation step reads or writes: the player, the cage that
//! contains it, and the environment entities in load order. The collection
//! is owned by whoever drives the loop; entities are only ever added or
//! replaced in bulk from outside.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::cage::Cage;
use super::entity::Entity;
use super::player::Player;
use super::record::{EntityRecord, construct_all};
use crate::consts::*;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub tuning: Tuning,
    pub player: Player,
    pub cage: Cage,
    /// Environment entities in load order
    pub entities: Vec<Entity>,
    /// Simulation step counter
    pub time_ticks: u64,
    /// Simulated seconds
    pub elapsed: f32,
}

impl SimState {
    /// Player at the spawn point inside the default arena
    pub fn new(tuning: Tuning) -> Self {
        let cage = Cage::floored(
            Vec3::new(CAGE_FLOOR.0, CAGE_FLOOR.1, 0.0),
            Vec3::new(CAGE_SIZE.0, CAGE_SIZE.1, 0.0),
            tuning.cage_thickness,
        );
        Self::with_cage(tuning, cage)
    }

    pub fn with_cage(tuning: Tuning, cage: Cage) -> Self {
        let player = Player::new(Self::spawn_point(), &tuning);
        Self {
            tuning,
            player,
            cage,
            entities: Vec::new(),
            time_ticks: 0,
            elapsed: 0.0,
        }
    }

    pub fn spawn_point() -> Vec3 {
        Vec3::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1, 0.0)
    }

    /// Replace the entity collection with freshly built records
    pub fn load_records(&mut self, records: &[EntityRecord]) {
        self.entities = construct_all(records, &self.tuning);
        log::info!("Loaded {} entities", self.entities.len());
    }

    /// Append records to the current collection
    pub fn append_records(&mut self, records: &[EntityRecord]) {
        self.entities.extend(construct_all(records, &self.tuning));
    }

    /// Snapshot of the collection, in load order
    pub fn records(&self) -> Vec<EntityRecord> {
        self.entities.iter().map(Entity::to_record).collect()
    }

    /// Bulk removal, e.g. when a sequence's lifetime runs out
    pub fn clear_entities(&mut self) {
        log::info!("Cleared {} entities", self.entities.len());
        self.entities.clear();
    }

    pub fn set_cage(&mut self, cage: Cage) {
        self.cage = cage;
    }

    /// Fresh player at the spawn point; entities and cage are kept
    pub fn respawn_player(&mut self) {
        self.player = Player::new(Self::spawn_point(), &self.tuning);
    }

    /// Entities whose interaction region overlaps the player right now
    pub fn overlapping_player(&self) -> impl Iterator<Item = (usize, &Entity)> + '_ {
        let player = self.player.bounds();
        self.entities
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.interaction_bounds().overlaps(&player))
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
