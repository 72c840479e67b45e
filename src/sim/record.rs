//! Declarative entity records
//!
//! Levels and the editor describe entities as flat JSON objects:
//! `{type, pos, size, anchor, vel, color}`. [`construct`] turns a record into
//! a live [`Entity`] and [`Entity::to_record`] goes back. Malformed records
//! never fail: sizes clamp, anchors clamp, non-finite numbers zero out and
//! unknown kinds become hurt boxes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::cage::Cage;
use super::entity::Entity;
use super::hurtbox::{HurtBox, HurtProfile, HurtTrigger};
use super::object::GenericObject;
use super::platform::{Platform, PlatformTravel};
use super::tractor::Tractor;
use super::vector::Vector;
use crate::tuning::Tuning;

/// Kind discriminator as written in records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityTag {
    Base,
    Cage,
    Generic,
    Platform,
    HurtBox,
    Tractor,
    Motion,
    /// Any tag this build doesn't know
    #[serde(other)]
    Unknown,
}

fn default_anchor() -> Vector {
    Vector::new(0.5, 0.5, 0.5)
}

fn default_color() -> String {
    "white".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(rename = "type")]
    pub tag: EntityTag,
    pub pos: Vector,
    pub size: Vector,
    #[serde(default = "default_anchor")]
    pub anchor: Vector,
    #[serde(default)]
    pub vel: Vector,
    #[serde(default = "default_color")]
    pub color: String,
    /// Platform return behaviour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel: Option<PlatformTravel>,
    /// Hurt box damage numbers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<HurtProfile>,
    /// Cage wall thickness
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f32>,
}

impl EntityRecord {
    pub fn new(tag: EntityTag, pos: Vector, size: Vector) -> Self {
        Self {
            tag,
            pos,
            size,
            anchor: default_anchor(),
            vel: Vector::ZERO,
            color: default_color(),
            travel: None,
            damage: None,
            thickness: None,
        }
    }

    pub fn with_vel(mut self, vel: Vector) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_anchor(mut self, anchor: Vector) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Build a live entity from a record
pub fn construct(record: &EntityRecord, tuning: &Tuning) -> Entity {
    if !(record.pos.is_finite() && record.size.is_finite() && record.vel.is_finite()) {
        log::warn!("Non-finite values in {:?} record, zeroing", record.tag);
    }
    if record.size.x < 0.0 || record.size.y < 0.0 {
        log::warn!("Negative size {:?} in {:?} record, clamping", record.size, record.tag);
    }

    let body = Body::new(record.pos.to_vec3(), record.size.to_vec3(), record.color.clone())
        .with_anchor(record.anchor.to_vec3());
    let object = GenericObject::new(body, record.vel.to_vec3());

    match record.tag {
        EntityTag::Generic => {
            let mut object = object;
            object.body.solid = false;
            Entity::Generic(object)
        }
        EntityTag::Platform => {
            Entity::Platform(Platform::new(object, record.travel, tuning.tractor_skin))
        }
        EntityTag::Tractor => Entity::Tractor(Tractor::new(object)),
        EntityTag::Cage => Entity::Cage(Cage::new(
            object.body,
            record.thickness.unwrap_or(tuning.cage_thickness),
        )),
        EntityTag::Motion => Entity::HurtBox(HurtBox::new(
            object,
            record.damage.unwrap_or_default(),
            HurtTrigger::Motion,
        )),
        EntityTag::HurtBox => Entity::HurtBox(HurtBox::new(
            object,
            record.damage.unwrap_or_default(),
            HurtTrigger::Overlap,
        )),
        EntityTag::Base | EntityTag::Unknown => {
            log::warn!("Unrecognized entity type {:?}, using hurtbox", record.tag);
            Entity::HurtBox(HurtBox::new(
                object,
                record.damage.unwrap_or_default(),
                HurtTrigger::Overlap,
            ))
        }
    }
}

/// Build every record, preserving order
pub fn construct_all(records: &[EntityRecord], tuning: &Tuning) -> Vec<Entity> {
    records.iter().map(|r| construct(r, tuning)).collect()
}

impl Entity {
    /// Snapshot back to a record. Preserves everything the simulation mutates.
    pub fn to_record(&self) -> EntityRecord {
        let body = self.body();
        let mut record = EntityRecord {
            tag: self.tag(),
            pos: body.pos.into(),
            size: body.size.into(),
            anchor: body.anchor.into(),
            vel: self.velocity().into(),
            color: body.color.clone(),
            travel: None,
            damage: None,
            thickness: None,
        };

        match self {
            Entity::Platform(p) => record.travel = p.travel(),
            Entity::HurtBox(h) => record.damage = Some(h.profile),
            Entity::Cage(c) => record.thickness = Some(c.thickness),
            Entity::Generic(_) | Entity::Tractor(_) => {}
        }
        record
    }
}

/// Parse a JSON array of records (the editor's saved-object format)
pub fn parse_records(json: &str) -> Result<Vec<EntityRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn records_to_json(records: &[EntityRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string(records)
}

impl From<&Entity> for EntityRecord {
    fn from(entity: &Entity) -> Self {
        entity.to_record()
    }
}

impl EntityRecord {
    /// Position as a simulation vector
    pub fn position(&self) -> Vec3 {
        self.pos.to_vec3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::platform::ReturnMode;

    fn v(x: f32, y: f32) -> Vector {
        Vector::new(x, y, 0.0)
    }

    #[test]
    fn test_parse_editor_json() {
        let json = r##"[
            { "type": "platform", "pos": {"x": 0, "y": 100, "z": 0}, "size": {"x": 200, "y": 20, "z": 0},
              "anchor": {"x": 0.5, "y": 0.5, "z": 0}, "vel": {"x": 0, "y": 0, "z": 0}, "color": "#888" },
            { "type": "motion", "pos": {"x": 50, "y": 50, "z": 0}, "size": {"x": 10, "y": 10, "z": 0},
              "anchor": {"x": 0.5, "y": 0.5, "z": 0}, "vel": {"x": -30, "y": 0, "z": 0}, "color": "cyan" }
        ]"##;
        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tag, EntityTag::Platform);
        assert_eq!(records[1].vel, v(-30.0, 0.0));

        let entities = construct_all(&records, &Tuning::default());
        assert!(matches!(entities[0], Entity::Platform(_)));
        assert_eq!(entities[1].tag(), EntityTag::Motion);
    }

    #[test]
    fn test_unknown_type_falls_back_to_hurtbox() {
        let json = r#"[{ "type": "laser", "pos": {"x": 0, "y": 0}, "size": {"x": 5, "y": 5} }]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records[0].tag, EntityTag::Unknown);
        let e = construct(&records[0], &Tuning::default());
        assert_eq!(e.tag(), EntityTag::HurtBox);

        let base = EntityRecord::new(EntityTag::Base, v(0.0, 0.0), v(5.0, 5.0));
        assert_eq!(construct(&base, &Tuning::default()).tag(), EntityTag::HurtBox);
    }

    #[test]
    fn test_negative_size_clamped() {
        let record = EntityRecord::new(EntityTag::Tractor, v(0.0, 0.0), v(-10.0, 5.0));
        let e = construct(&record, &Tuning::default());
        assert_eq!(e.size(), Vec3::new(0.0, 5.0, 0.0));
    }

    #[test]
    fn test_non_finite_position_zeroed() {
        let record = EntityRecord::new(EntityTag::Generic, v(f32::NAN, 4.0), v(1.0, 1.0));
        let e = construct(&record, &Tuning::default());
        assert_eq!(e.position(), Vec3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn test_roundtrip_after_mutation() {
        let mut record = EntityRecord::new(EntityTag::Platform, v(10.0, 20.0), v(60.0, 10.0))
            .with_vel(v(0.0, 8.0))
            .with_anchor(Vector::new(0.0, 1.0, 0.0))
            .with_color("#ff8800");
        record.travel = Some(PlatformTravel {
            mode: ReturnMode::Rebound,
            distance: 10.0,
            origin: None,
        });

        let tuning = Tuning::default();
        let mut e = construct(&record, &tuning);
        for _ in 0..3 {
            e.tick(0.5); // 4 units per tick, flips after passing 10
        }

        let snapshot = e.to_record();
        assert_eq!(snapshot.pos, v(10.0, 32.0));
        assert_eq!(snapshot.vel, v(0.0, -8.0));
        assert_eq!(snapshot.color, "#ff8800");

        // Rebuilding from the snapshot continues the same motion
        let mut rebuilt = construct(&snapshot, &tuning);
        rebuilt.tick(0.5);
        e.tick(0.5);
        assert_eq!(rebuilt, e);
    }

    #[test]
    fn test_json_roundtrip_preserves_extensions() {
        let tuning = Tuning::default();
        let mut hurt = EntityRecord::new(EntityTag::HurtBox, v(0.0, 0.0), v(5.0, 5.0));
        hurt.damage = Some(HurtProfile {
            constant: 0.0,
            rate: 20.0,
            tick_amount: 5.0,
        });
        let mut cage = EntityRecord::new(EntityTag::Cage, v(0.0, 0.0), v(300.0, 300.0));
        cage.thickness = Some(6.0);

        let entities = construct_all(&[hurt, cage], &tuning);
        let records: Vec<EntityRecord> = entities.iter().map(EntityRecord::from).collect();
        let json = records_to_json(&records).unwrap();
        let parsed = parse_records(&json).unwrap();
        assert_eq!(parsed, records);
        assert_eq!(construct_all(&parsed, &tuning), entities);
    }

    #[test]
    fn test_plain_record_omits_extensions() {
        let record = EntityRecord::new(EntityTag::Tractor, v(0.0, 0.0), v(5.0, 5.0));
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""type":"tractor""#));
        assert!(!json.contains("travel"));
        assert!(!json.contains("damage"));
    }
}
