//! Per-frame simulation step
//!
//! Order matters and is fixed:
//! 1. environment entities move
//! 2. player applies input
//! 3. player moves and resolves against solids (X, then Y)
//! 4. cage clamps the player
//! 5. entities overlapping the resolved player apply their effects
//!
//! Effects run last so they see the player's final position. Run them any
//! earlier and damage, conveyance and push-out end up fighting each other
//! across frames.

use super::cage::CageClamp;
use super::state::SimState;

/// Input for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Jump key is down this frame
    pub jump_pressed: bool,
    /// Jump key was down last frame too
    pub jump_held: bool,
}

impl TickInput {
    /// Derive hold state from this frame's and last frame's jump key
    pub fn from_keys(left: bool, right: bool, jump: bool, prev_jump: bool) -> Self {
        Self {
            left,
            right,
            jump_pressed: jump,
            jump_held: jump && prev_jump,
        }
    }
}

/// What happened during one step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Walls the cage clamped against
    pub cage: CageClamp,
    /// Indices of entities whose effect applied, in application order
    pub affected: Vec<usize>,
}

/// Advance the world by `dt` seconds
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) -> TickReport {
    let mut report = TickReport::default();
    if !dt.is_finite() || dt <= 0.0 {
        log::debug!("Skipping step with dt {}", dt);
        return report;
    }

    for entity in &mut state.entities {
        entity.tick(dt);
    }

    state.player.apply_input(
        input.left,
        input.right,
        input.jump_pressed,
        input.jump_held,
        dt,
    );
    state.player.tick(&state.entities, dt);

    report.cage = state.cage.clamp(&mut state.player);

    let player = state.player.bounds();
    for (i, entity) in state.entities.iter().enumerate() {
        if entity.interaction_bounds().overlaps(&player) && entity.affect(&mut state.player, dt) {
            report.affected.push(i);
        }
    }

    state.time_ticks += 1;
    state.elapsed += dt;
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;
    use crate::sim::collision::{CONTACT_SLOP, overlap_depth};
    use crate::sim::hurtbox::HurtProfile;
    use crate::sim::record::{EntityRecord, EntityTag};
    use crate::sim::vector::Vector;
    use crate::tuning::Tuning;
    use glam::Vec3;

    fn v(x: f32, y: f32) -> Vector {
        Vector::new(x, y, 0.0)
    }

    /// Player at spawn (0, 24), floor platform whose top is at y = 34
    fn state_on_floor() -> SimState {
        let mut state = SimState::default();
        state.load_records(&[EntityRecord::new(
            EntityTag::Platform,
            v(0.0, 44.0),
            v(200.0, 20.0),
        )]);
        state
    }

    #[test]
    fn test_from_keys_hold() {
        assert!(!TickInput::from_keys(false, false, true, false).jump_held);
        assert!(TickInput::from_keys(false, false, true, true).jump_held);
        assert!(!TickInput::from_keys(false, false, false, true).jump_held);
    }

    #[test]
    fn test_gravity_first_frame() {
        let mut state = SimState::default();
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert!((state.player.velocity().y - 15.0).abs() < 1e-4);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_bad_dt_is_skipped() {
        let mut state = SimState::default();
        let before = state.player.position();
        tick(&mut state, &TickInput::default(), f32::NAN);
        tick(&mut state, &TickInput::default(), -1.0);
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.player.position(), before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_player_settles_on_platform() {
        let mut state = state_on_floor();
        for _ in 0..60 {
            tick(&mut state, &TickInput::default(), FRAME_DT);
        }
        assert!(state.player.is_grounded());
        assert!((state.player.bounds().bottom - 34.0).abs() < 1e-3);
        let (_, depth) = overlap_depth(&state.player.bounds(), &state.entities[0].bounds());
        assert!(depth <= CONTACT_SLOP);
    }

    #[test]
    fn test_jump_leaves_ground() {
        let mut state = state_on_floor();
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), FRAME_DT);
        }
        assert!(state.player.is_grounded());
        let ground_y = state.player.position().y;

        let mut prev_jump = false;
        for _ in 0..10 {
            let input = TickInput::from_keys(false, false, true, prev_jump);
            tick(&mut state, &input, FRAME_DT);
            prev_jump = true;
        }
        assert!(state.player.position().y < ground_y - 10.0);
        assert!(!state.player.is_grounded());
    }

    #[test]
    fn test_hurtbox_drains_pool_on_cadence() {
        let mut state = SimState::default();
        let mut record = EntityRecord::new(EntityTag::HurtBox, v(0.0, 24.0), v(400.0, 400.0));
        record.damage = Some(HurtProfile {
            constant: 0.0,
            rate: 40.0,
            tick_amount: 5.0,
        });
        state.load_records(&[record]);

        // Frame 1 fills the pool after the player's own tick has run
        tick(&mut state, &TickInput::default(), 0.25);
        assert_eq!(state.player.tick_dmg(), 10.0);
        assert_eq!(state.player.health(), 92.0);

        // One simulated second later the first drain lands
        for _ in 0..3 {
            tick(&mut state, &TickInput::default(), 0.25);
        }
        assert_eq!(state.player.health(), 92.0);
        let pool_before = state.player.tick_dmg();

        tick(&mut state, &TickInput::default(), 0.25);
        assert_eq!(state.player.health(), 87.0);
        // Drained by 5, then this frame's overlap added 10
        assert_eq!(state.player.tick_dmg(), pool_before - 5.0 + 10.0);
    }

    #[test]
    fn test_tractor_carries_grounded_player() {
        let mut state = SimState::default();
        state.load_records(&[EntityRecord::new(EntityTag::Tractor, v(0.0, 24.0), v(100.0, 40.0))
            .with_vel(v(50.0, 0.0))]);
        state.player.land();
        let x = state.player.position().x;
        let vel_x = state.player.velocity().x;

        // Exercise the effect directly: conveyance only, velocity untouched
        let affected = state.entities[0].affect(&mut state.player, 0.1);
        assert!(affected);
        assert!((state.player.position().x - (x + 5.0)).abs() < 1e-5);
        assert_eq!(state.player.velocity().x, vel_x);
    }

    #[test]
    fn test_moving_platform_carries_rider() {
        let mut state = SimState::default();
        state.load_records(&[EntityRecord::new(EntityTag::Platform, v(0.0, 44.0), v(200.0, 20.0))
            .with_vel(v(30.0, 0.0))]);
        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), FRAME_DT);
        }
        assert!(state.player.is_grounded());
        let start = state.player.position().x;
        let report = tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(report.affected, vec![0]);
        assert!((state.player.position().x - (start + 0.5)).abs() < 1e-3);
    }

    #[test]
    fn test_effects_see_resolved_position() {
        // Hazard sits just inside the floor's top. The falling player only
        // reaches it before resolution; after push-out it no longer overlaps.
        let mut state = SimState::default();
        state.load_records(&[
            EntityRecord::new(EntityTag::Platform, v(0.0, 44.0), v(200.0, 20.0)),
            EntityRecord::new(EntityTag::HurtBox, v(0.0, 40.0), v(200.0, 8.0)),
        ]);
        // Ends the move with its bottom at ~53, inside both floor and hazard
        state.player.set_velocity(Vec3::new(0.0, 40.0, 0.0));
        let report = tick(&mut state, &TickInput::default(), 0.125);
        assert!(state.player.is_grounded());
        assert!(!report.affected.contains(&1));
        assert_eq!(state.player.health(), 92.0);
    }

    #[test]
    fn test_cage_clamps_after_collision() {
        let mut state = SimState::default();
        state.player.set_position(Vec3::new(185.0, 24.0, 0.0));
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        let report = tick(&mut state, &input, FRAME_DT);
        assert!(report.cage.right);
        assert_eq!(state.player.velocity().x, 0.0);
        let inner = state.cage.inner_bounds();
        let expected = inner.right - state.player.bounds().right_rad;
        assert!((state.player.position().x - expected).abs() < 1e-4);
    }

    #[test]
    fn test_determinism() {
        let records = vec![
            EntityRecord::new(EntityTag::Platform, v(0.0, 44.0), v(200.0, 20.0)).with_vel(v(12.0, 0.0)),
            EntityRecord::new(EntityTag::Motion, v(40.0, 24.0), v(30.0, 30.0)).with_vel(v(-20.0, 0.0)),
        ];
        let mut a = SimState::new(Tuning::default());
        let mut b = SimState::new(Tuning::default());
        a.load_records(&records);
        b.load_records(&records);

        let mut prev = false;
        for frame in 0..240 {
            let jump = frame % 50 < 20;
            let input = TickInput::from_keys(frame % 90 < 40, frame % 70 > 50, jump, prev);
            prev = jump;
            tick(&mut a, &input, FRAME_DT);
            tick(&mut b, &input, FRAME_DT);
        }

        assert_eq!(a.player.position(), b.player.position());
        assert_eq!(a.player.health(), b.player.health());
        assert_eq!(a.entities, b.entities);
    }
}
