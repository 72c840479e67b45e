//! Read-only geometry for an external renderer
//!
//! The simulation never draws. This module flattens a [`SimState`] into
//! GPU-ready rectangles in the game's draw order: the player first so it
//! shows behind everything, then back-layer hazards, then the cage frame,
//! then platforms and conveyors.

use bytemuck::{Pod, Zeroable};

use crate::sim::body::Bounds;
use crate::sim::entity::Layer;
use crate::sim::state::SimState;

/// One axis-aligned rectangle, ready to upload as instance data
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    /// Top-left corner
    pub min: [f32; 2],
    /// Bottom-right corner
    pub max: [f32; 2],
    pub color: [f32; 4],
    /// Stroke width; 0 = filled
    pub outline: f32,
    pub kind: u32,
    pub _pad: [u32; 2],
}

/// What a rectangle represents (stored in [`RectInstance::kind`])
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RectKind {
    Entity = 0,
    Player = 1,
    Cage = 2,
}

impl RectInstance {
    pub fn filled(bounds: &Bounds, color: [f32; 4], kind: RectKind) -> Self {
        Self {
            min: bounds.min().to_array(),
            max: bounds.max().to_array(),
            color,
            outline: 0.0,
            kind: kind as u32,
            _pad: [0; 2],
        }
    }

    pub fn outlined(bounds: &Bounds, color: [f32; 4], width: f32) -> Self {
        Self {
            outline: width,
            ..Self::filled(bounds, color, RectKind::Cage)
        }
    }
}

/// Colours with no better source
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const PURPLE: [f32; 4] = [0.5, 0.0, 0.5, 1.0];
    pub const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const ORANGE: [f32; 4] = [1.0, 0.647, 0.0, 1.0];
    pub const GREY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
}

/// Parse `#rgb`, `#rrggbb` or a basic CSS colour name. Unknown → white.
pub fn parse_color(s: &str) -> [f32; 4] {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        let digits: Option<Vec<u8>> = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect();
        let rgb = match digits.as_deref() {
            Some(&[r, g, b]) => Some([r * 17, g * 17, b * 17]),
            Some(&[r1, r0, g1, g0, b1, b0]) => Some([r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0]),
            _ => None,
        };
        return match rgb {
            Some([r, g, b]) => [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0],
            None => {
                log::debug!("Unparsed colour {:?}", s);
                colors::WHITE
            }
        };
    }

    match s.to_lowercase().as_str() {
        "white" => colors::WHITE,
        "black" => colors::BLACK,
        "red" => colors::RED,
        "green" => colors::GREEN,
        "blue" => colors::BLUE,
        "yellow" => colors::YELLOW,
        "purple" => colors::PURPLE,
        "cyan" | "aqua" => colors::CYAN,
        "orange" => colors::ORANGE,
        "grey" | "gray" => colors::GREY,
        _ => {
            log::debug!("Unknown colour {:?}", s);
            colors::WHITE
        }
    }
}

/// Flatten the world into draw-ordered rectangles
pub fn extract(state: &SimState) -> Vec<RectInstance> {
    let mut rects = Vec::with_capacity(state.entities.len() + 2);

    let layer = |layer: Layer| {
        state
            .entities
            .iter()
            .filter(move |e| e.layer() == layer)
            .map(|e| RectInstance::filled(&e.bounds(), parse_color(e.color()), RectKind::Entity))
    };

    rects.push(RectInstance::filled(
        &state.player.bounds(),
        parse_color(&state.player.body().color),
        RectKind::Player,
    ));
    rects.extend(layer(Layer::Back));
    rects.push(RectInstance::outlined(
        &state.cage.bounds(),
        parse_color(&state.cage.body.color),
        state.cage.thickness,
    ));
    rects.extend(layer(Layer::Fore));
    rects
}
