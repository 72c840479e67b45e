//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Stable iteration order (load order of entities)
//! - No rendering or platform dependencies

pub mod body;
pub mod cage;
pub mod collision;
pub mod entity;
pub mod hurtbox;
pub mod object;
pub mod platform;
pub mod player;
pub mod record;
pub mod state;
pub mod tick;
pub mod tractor;
pub mod vector;

pub use body::{Body, Bounds};
pub use cage::{Cage, CageClamp};
pub use collision::{Axis, CONTACT_SLOP, Contact, overlap_depth, penetrating, resolve_axis};
pub use entity::{Entity, Layer};
pub use hurtbox::{HurtBox, HurtProfile, HurtTrigger};
pub use object::GenericObject;
pub use platform::{Platform, PlatformTravel, ReturnMode};
pub use player::{HurtKind, Player};
pub use record::{EntityRecord, EntityTag, construct, construct_all, parse_records, records_to_json};
pub use state::SimState;
pub use tick::{TickInput, TickReport, tick};
pub use tractor::Tractor;
pub use vector::Vector;
